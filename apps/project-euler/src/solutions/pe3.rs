use log::debug;
use math::{MathError, Result, find_factor, largest_prime_factor_descending, rho_polynomial};

const TARGET: u64 = 600_851_475_143;

/// PE3: Largest Prime Factor
/// Largest prime factor of `n`, found by walking primes down from sqrt(n).
pub fn find_largest_prime_factor(n: u64) -> Option<u64> {
    largest_prime_factor_descending(n)
}

pub fn solve() -> Result<String> {
    match find_factor(TARGET, rho_polynomial(TARGET, 1)) {
        Some(d) => debug!("pollard rho split {} = {} * {}", TARGET, d, TARGET / d),
        None => debug!("pollard rho found no factor of {}", TARGET),
    }

    let largest = find_largest_prime_factor(TARGET).ok_or(MathError::OutOfRange {
        value: TARGET,
        min: 2,
        max: u64::MAX,
    })?;
    Ok(largest.to_string())
}
