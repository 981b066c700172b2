use math::{BigInt, Result};

/// PE16: Power Digit Sum
/// Sum of the digits of `base^exp`.
pub fn power_digit_sum(base: u32, exp: u32) -> u64 {
    BigInt::pow(base, exp).digit_sum()
}

pub fn solve() -> Result<String> {
    Ok(power_digit_sum(2, 1000).to_string())
}
