use math::{MathError, Result, is_prime};

/// PE7: 10001st Prime
/// The nth prime (1-indexed) by testing each candidate with trial division.
pub fn generate_nth_prime_number(n: usize) -> Result<u64> {
    if n == 0 {
        return Err(MathError::OutOfRange {
            value: 0,
            min: 1,
            max: usize::MAX as u64,
        });
    }
    let mut count = 0;
    let mut candidate = 2u64;
    loop {
        if is_prime(candidate) {
            count += 1;
            if count == n {
                return Ok(candidate);
            }
        }
        candidate += 1;
    }
}

pub fn solve() -> Result<String> {
    Ok(generate_nth_prime_number(10_001)?.to_string())
}
