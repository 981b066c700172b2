use log::debug;
use math::{FactorialCache, Result};

/// PE20: Factorial Digit Sum
/// Sum of the digits of `n!`, served from `cache`.
pub fn factorial_digit_sum(n: u32, cache: &mut FactorialCache) -> u64 {
    cache.get(n).digit_sum()
}

pub fn solve() -> Result<String> {
    let mut cache = FactorialCache::new();
    let n = 100;
    let sum = factorial_digit_sum(n, &mut cache);
    debug!("{}! has {} digits", n, cache.get(n).num_digits());
    Ok(sum.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use math::factorial;

    #[test]
    fn test_ten_factorial() {
        // 10! = 3628800, digit sum = 3+6+2+8+8+0+0 = 27
        assert_eq!(factorial(10), Some(3628800));
        let mut cache = FactorialCache::new();
        assert_eq!(factorial_digit_sum(10, &mut cache), 27);
    }

    #[test]
    fn test_shared_cache() {
        let mut cache = FactorialCache::new();
        assert_eq!(factorial_digit_sum(100, &mut cache), 648);
        let cached = cache.len();
        assert_eq!(factorial_digit_sum(10, &mut cache), 27);
        assert_eq!(cache.len(), cached);
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve().unwrap(), "648");
    }
}
