use log::debug;
use math::{MathError, Result, parse_digits};

pub const THOUSAND_DIGITS: &str = include_str!("../../data/thousand_digits.txt");

/// Longest window whose product is guaranteed to fit in a u64 (9^20 < 2^64).
const MAX_WINDOW: usize = 20;

fn checked_windows(digits: &str, n: usize) -> Result<Vec<u8>> {
    if n == 0 {
        return Err(MathError::ZeroLength);
    }
    if n > MAX_WINDOW {
        return Err(MathError::OutOfRange {
            value: n as u64,
            min: 1,
            max: MAX_WINDOW as u64,
        });
    }
    let digits = parse_digits(digits)?;
    if n > digits.len() {
        return Err(MathError::WindowTooLarge {
            window: n,
            len: digits.len(),
        });
    }
    Ok(digits)
}

fn window_product(window: &[u8]) -> u64 {
    window.iter().map(|&d| d as u64).product()
}

/// PE8: Largest Product in a Series
/// Greatest product of `n` adjacent digits; only complete windows are considered.
pub fn largest_product_series(digits: &str, n: usize) -> Result<u64> {
    let digits = checked_windows(digits, n)?;
    Ok(digits.windows(n).map(window_product).max().unwrap_or(0))
}

/// Same result with a running product: divide out the digit leaving the
/// window and multiply in the one entering. A zero leaving the window forces
/// the product to be recomputed from scratch.
pub fn largest_product_series_rolling(digits: &str, n: usize) -> Result<u64> {
    let digits = checked_windows(digits, n)?;

    let mut product = window_product(&digits[..n]);
    let mut best = product;

    for i in n..digits.len() {
        let leaving = digits[i - n] as u64;
        product = if leaving != 0 {
            product / leaving * digits[i] as u64
        } else {
            window_product(&digits[i - n + 1..=i])
        };
        best = best.max(product);
    }

    Ok(best)
}

pub fn solve() -> Result<String> {
    debug!(
        "four adjacent digits: {}",
        largest_product_series(THOUSAND_DIGITS, 4)?
    );
    Ok(largest_product_series(THOUSAND_DIGITS, 13)?.to_string())
}
