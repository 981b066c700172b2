use log::debug;
use math::{MathError, Primes, Result, TriangleNumbers, count_divisors};

/// PE12: Highly Divisible Triangular Number
/// First triangle number with more than `n_divisors` divisors.
///
/// Returns None only if the search runs past the largest triangle number a
/// u64 can hold.
pub fn highly_divisible_triangular_number(n_divisors: u32) -> Option<u64> {
    let mut primes: Vec<u64> = Vec::new();
    let mut prime_iter = Primes::new();

    for (i, t) in TriangleNumbers::new().enumerate() {
        // Ensure we have enough primes (up to sqrt(t))
        let sqrt_t = t.isqrt();
        while primes.last().is_none_or(|&p| p < sqrt_t) {
            primes.push(prime_iter.next()?);
        }

        let divisor_count = count_divisors(t, &primes);
        if divisor_count > n_divisors {
            debug!("T({}) = {} has {} divisors", i + 1, t, divisor_count);
            return Some(t);
        }
    }

    None
}

pub fn solve() -> Result<String> {
    let n_divisors = 500;
    highly_divisible_triangular_number(n_divisors)
        .map(|t| t.to_string())
        .ok_or(MathError::OutOfRange {
            value: n_divisors as u64,
            min: 0,
            max: u32::MAX as u64,
        })
}
