//! Pulling a handful of permutations from an astronomically large domain.
//!
//! Run with: cargo run --example large_n

use binperm::{count_combinations, enumerate_with_options, Format, PermutationOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let n = 50_000;
    let total = count_combinations(n);
    println!("2^{} has {} decimal digits", n, total.to_string().len());

    let options = PermutationOptions::new().with_format(Format::String);
    for (i, perm) in enumerate_with_options(n, options)?.take(4).enumerate() {
        let text = perm.to_binary_string();
        let tail = &text[n - 8..];
        println!("#{}: ...{} ({} set bits)", i, tail, perm.ones_count());
    }

    Ok(())
}
