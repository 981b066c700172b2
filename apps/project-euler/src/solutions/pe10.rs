use log::debug;
use math::{Result, primes_below};

/// PE10: Summation of Primes
/// Sum of all primes below `limit`.
pub fn euler_10(limit: u32) -> u64 {
    let primes = primes_below(limit);
    debug!("{} primes below {}", primes.len(), limit);
    primes.iter().map(|&p| p as u64).sum()
}

pub fn solve() -> Result<String> {
    Ok(euler_10(2_000_000).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_ten() {
        // 2 + 3 + 5 + 7
        assert_eq!(euler_10(10), 17);
        assert_eq!(euler_10(2), 0);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve().unwrap(), "142913828922");
    }
}
