use math::{MathError, Result, is_palindrome};
use rayon::prelude::*;

/// PE4: Largest Palindrome Product
/// Largest palindrome made from the product of two distinct `digits`-digit numbers.
///
/// Each outer factor is searched in parallel; for a given `a` the inner loop
/// walks `b` downwards, so the first palindrome hit is the best for that `a`.
pub fn largest_palindrome_product(digits: u32) -> Result<u64> {
    if !(1..=9).contains(&digits) {
        return Err(MathError::OutOfRange {
            value: digits as u64,
            min: 1,
            max: 9,
        });
    }
    let lo = 10u64.pow(digits - 1);
    let hi = 10u64.pow(digits);

    (lo..hi)
        .into_par_iter()
        .filter_map(|a| {
            ((a + 1)..hi)
                .rev()
                .map(|b| a * b)
                .find(|&product| is_palindrome(product))
        })
        .max()
        .ok_or(MathError::Empty)
}

pub fn solve() -> Result<String> {
    Ok(largest_palindrome_product(3)?.to_string())
}
