use math::{BigInt, MathError, Result};

pub const LARGE_NUMBERS: &str = include_str!("../../data/large_numbers.txt");

/// PE13: Large Sum
/// First `digits` digits of the exact sum of the numbers listed one per line.
pub fn large_sum_first_digits(numbers: &str, digits: usize) -> Result<String> {
    let values = numbers
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::parse::<BigInt>)
        .collect::<Result<Vec<BigInt>>>()?;
    if values.is_empty() {
        return Err(MathError::Empty);
    }
    let total: BigInt = values.iter().sum();
    Ok(total.to_string().chars().take(digits).collect())
}

pub fn solve() -> Result<String> {
    large_sum_first_digits(LARGE_NUMBERS, 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_shape() {
        let lines: Vec<&str> = LARGE_NUMBERS.lines().collect();
        assert_eq!(lines.len(), 100);
        assert!(lines.iter().all(|l| l.len() == 50));
    }

    #[test]
    fn test_small_sum() {
        assert_eq!(large_sum_first_digits("999\n1\n", 10), Ok("1000".to_string()));
        assert_eq!(large_sum_first_digits("123456\n", 3), Ok("123".to_string()));
    }

    #[test]
    fn test_bad_input() {
        assert_eq!(large_sum_first_digits("", 10), Err(MathError::Empty));
        assert!(large_sum_first_digits("12\n3x\n", 10).is_err());
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve().unwrap(), "5537376230");
    }
}
