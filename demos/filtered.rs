//! Restricting enumeration to a band of set-bit counts.
//!
//! Run with: cargo run --example filtered

use binperm::{count_combinations, enumerate_with_options, Format, PermutationOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let n = 6;
    println!("{} combinations of {} bits in total\n", count_combinations(n), n);

    for ones in 0..=n {
        let options = PermutationOptions::new()
            .with_format(Format::String)
            .with_min_ones(ones)
            .with_max_ones(ones);
        let matching: Vec<String> = enumerate_with_options(n, options)?.map(String::from).collect();
        println!("{} set bits: {} permutations", ones, matching.len());
        println!("  {}", matching.join(" "));
    }

    // An inverted band is not an error, it is simply empty
    let options = PermutationOptions::new().with_min_ones(4).with_max_ones(2);
    assert_eq!(enumerate_with_options(n, options)?.count(), 0);
    println!("\n✓ Inverted band yields nothing");

    Ok(())
}
