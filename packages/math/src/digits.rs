use crate::error::{MathError, Result};

/// Sum of the decimal digits of n.
///
/// Example: digit_sum(32768) = 3 + 2 + 7 + 6 + 8 = 26
pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Check whether n reads the same forwards and backwards in base 10.
pub fn is_palindrome(n: u64) -> bool {
    let mut reversed = 0u64;
    let mut rest = n;
    while rest > 0 {
        reversed = reversed * 10 + rest % 10;
        rest /= 10;
    }
    reversed == n
}

/// Parse a run of decimal digits, skipping any ASCII whitespace between them.
///
/// Line-wrapped number literals parse as one sequence.
///
/// ```
/// use math::parse_digits;
///
/// assert_eq!(parse_digits("12\n34").unwrap(), vec![1, 2, 3, 4]);
/// assert!(parse_digits("12x").is_err());
/// ```
pub fn parse_digits(s: &str) -> Result<Vec<u8>> {
    let digits = s
        .chars()
        .enumerate()
        .filter(|(_, ch)| !ch.is_ascii_whitespace())
        .map(|(position, ch)| {
            ch.to_digit(10)
                .map(|d| d as u8)
                .ok_or(MathError::InvalidDigit { ch, position })
        })
        .collect::<Result<Vec<u8>>>()?;
    if digits.is_empty() {
        return Err(MathError::Empty);
    }
    Ok(digits)
}
