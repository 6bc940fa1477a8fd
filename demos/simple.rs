//! Enumerating every permutation of a few bits, in each format.
//!
//! Run with: cargo run --example simple

use binperm::{enumerate, enumerate_with_options, Format, PermutationOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("Booleans:");
    for perm in enumerate(3)? {
        println!("  {:?}", perm.to_bools());
    }

    println!("Strings:");
    let options = PermutationOptions::new().with_format(Format::String);
    for perm in enumerate_with_options(3, options)? {
        println!("  {}", perm);
    }

    println!("Numbers (as JSON):");
    let options = PermutationOptions::new().with_format(Format::Number);
    let all: Vec<_> = enumerate_with_options(3, options)?.collect();
    println!("  {}", serde_json::to_string(&all)?);

    Ok(())
}
