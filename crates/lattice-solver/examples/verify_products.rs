//! Exhaustively checks lattice products against native multiplication.
//!
//! Every multiplicand with a digit count in `--multiplicand-digits` is paired
//! with every multiplier with a digit count in `--multiplier-digits`, and the
//! product read off the lattice is compared with `a * b`.
//!
//! # Usage
//!
//! ```sh
//! cargo run --release --example verify_products
//! ```
//!
//! Check all 3-digit by 1..=2-digit pairs:
//!
//! ```sh
//! cargo run --release --example verify_products -- --multiplicand-digits 3 --multiplier-digits 1..=2
//! ```

use std::{ops::RangeInclusive, process};

use clap::Parser;
use lattice_core::Operand;
use lattice_solver::LatticeSolution;
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Multiplicand digit counts, e.g. `2` or `1..=3`.
    #[arg(long, value_name = "RANGE", default_value = "1..=3", value_parser = parse_digit_range)]
    multiplicand_digits: RangeInclusive<u32>,

    /// Multiplier digit counts, e.g. `2` or `1..=3`.
    #[arg(long, value_name = "RANGE", default_value = "1..=2", value_parser = parse_digit_range)]
    multiplier_digits: RangeInclusive<u32>,
}

fn parse_digit_range(s: &str) -> Result<RangeInclusive<u32>, String> {
    let (start, end) = match s.split_once("..=") {
        Some((start, end)) => (start, end),
        None => (s, s),
    };
    let start = start.trim().parse::<u32>().map_err(|e| e.to_string())?;
    let end = end.trim().parse::<u32>().map_err(|e| e.to_string())?;
    if start == 0 || end > 9 || start > end {
        return Err(format!("digit counts must satisfy 1 <= start <= end <= 9, got {s}"));
    }
    Ok(start..=end)
}

fn values_with_digits(digits: &RangeInclusive<u32>) -> RangeInclusive<u64> {
    let low = 10_u64.pow(digits.start() - 1);
    let high = 10_u64.pow(*digits.end()) - 1;
    low..=high
}

fn main() {
    let args = Args::parse();
    let multiplicands = values_with_digits(&args.multiplicand_digits);
    let multipliers = values_with_digits(&args.multiplier_digits);

    let checked = multiplicands.clone().count() * multipliers.clone().count();
    let mismatches = multiplicands
        .into_par_iter()
        .flat_map_iter(|a| multipliers.clone().map(move |b| (a, b)))
        .filter_map(|(a, b)| {
            let solution = LatticeSolution::solve(Operand::new(a)?, Operand::new(b)?);
            (solution.product().value() != Some(solution.native_product())).then_some((a, b))
        })
        .collect::<Vec<_>>();

    println!("Checked {checked} operand pairs.");
    if mismatches.is_empty() {
        println!("All lattice products match native multiplication.");
        return;
    }

    eprintln!("{} mismatches:", mismatches.len());
    for (a, b) in mismatches.iter().take(20) {
        eprintln!("  {a} x {b}");
    }
    process::exit(1);
}
