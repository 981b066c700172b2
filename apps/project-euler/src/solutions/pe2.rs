use log::debug;
use math::{Fibonacci, Result, even_fibonacci, nth_fibonacci};

/// PE2: Even Fibonacci Numbers
/// Sum all even-valued Fibonacci numbers not exceeding `limit`.
pub fn even_fibonacci_sum(limit: u64) -> u64 {
    even_fibonacci().take_while(|&n| n <= limit).sum()
}

/// Same sum, walking every term of 1, 2, 3, 5, 8, ... and keeping the even ones.
pub fn even_fibonacci_sum_filtered(limit: u64) -> u64 {
    Fibonacci::with_start(1, 2)
        .take_while(|&n| n <= limit)
        .filter(|n| n % 2 == 0)
        .sum()
}

/// Same sum by index: F(3), F(6), F(9), ... are exactly the even terms.
pub fn even_fibonacci_sum_indexed(limit: u64) -> u64 {
    (1..)
        .map_while(|k| nth_fibonacci(3 * k))
        .take_while(|&n| n <= limit)
        .sum()
}

pub fn solve() -> Result<String> {
    let limit = 4_000_000;
    let terms = even_fibonacci().take_while(|&n| n <= limit).count();
    debug!("{} even terms do not exceed {}", terms, limit);
    Ok(even_fibonacci_sum(limit).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_limits() {
        // 2 + 8 + 34
        assert_eq!(even_fibonacci_sum(100), 44);
        assert_eq!(even_fibonacci_sum(1), 0);
        assert_eq!(even_fibonacci_sum(2), 2);
    }

    #[test]
    fn test_implementations_agree() {
        for limit in [0, 1, 2, 8, 33, 34, 35, 1_000, 4_000_000, 1 << 40] {
            assert_eq!(
                even_fibonacci_sum(limit),
                even_fibonacci_sum_filtered(limit),
                "limit={}",
                limit
            );
            assert_eq!(
                even_fibonacci_sum(limit),
                even_fibonacci_sum_indexed(limit),
                "limit={}",
                limit
            );
        }
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve().unwrap(), "4613732");
    }
}
