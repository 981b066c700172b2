use math::Result;
use math::arith::{square_of_sum, sum_of_squares};

/// PE6: Sum Square Difference
/// Difference between the square of the sum and the sum of squares of 1..=limit.
pub fn sum_square_difference(limit: u64) -> u64 {
    square_of_sum(limit) - sum_of_squares(limit)
}

pub fn solve() -> Result<String> {
    Ok(sum_square_difference(100).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_example() {
        // 3025 - 385
        assert_eq!(sum_square_difference(10), 2640);
    }

    #[test]
    fn test_matches_brute_force() {
        for limit in 0..=100u64 {
            let sum: u64 = (1..=limit).sum();
            let squares: u64 = (1..=limit).map(|n| n * n).sum();
            assert_eq!(sum_square_difference(limit), sum * sum - squares);
        }
    }

    #[test]
    fn test_solve() {
        assert_eq!(solve().unwrap(), "25164150");
    }
}
