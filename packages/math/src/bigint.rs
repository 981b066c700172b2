use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use std::str::FromStr;

use crate::error::MathError;

/// A big integer represented as a vector of digits (least significant first).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigInt {
    digits: Vec<u8>,
}

impl BigInt {
    /// Create a BigInt representing zero.
    pub fn zero() -> Self {
        BigInt { digits: vec![0] }
    }

    /// Create a BigInt from a u32.
    pub fn from_u32(n: u32) -> Self {
        Self::from_u64(n as u64)
    }

    /// Create a BigInt from a u64.
    pub fn from_u64(n: u64) -> Self {
        Self::from_u128(n as u128)
    }

    /// Create a BigInt from a u128.
    pub fn from_u128(mut n: u128) -> Self {
        if n == 0 {
            return BigInt::zero();
        }
        let mut digits = Vec::new();
        while n > 0 {
            digits.push((n % 10) as u8);
            n /= 10;
        }
        BigInt { digits }
    }

    /// Compute `base^exp` exactly.
    ///
    /// # Example
    ///
    /// ```
    /// use math::BigInt;
    ///
    /// assert_eq!(BigInt::pow(2, 15).to_string(), "32768");
    /// assert_eq!(BigInt::pow(7, 0).to_string(), "1");
    /// ```
    pub fn pow(base: u32, exp: u32) -> Self {
        let mut result = BigInt::from_u32(1);
        for _ in 0..exp {
            result = result * base;
        }
        result
    }

    /// Sum of the decimal digits.
    pub fn digit_sum(&self) -> u64 {
        self.digits.iter().map(|&d| d as u64).sum()
    }

    /// Number of decimal digits, ignoring leading zeros.
    pub fn num_digits(&self) -> usize {
        self.significant().len().max(1)
    }

    fn significant(&self) -> &[u8] {
        let end = self
            .digits
            .iter()
            .rposition(|&d| d != 0)
            .map_or(0, |i| i + 1);
        &self.digits[..end]
    }
}

impl FromStr for BigInt {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MathError::Empty);
        }
        let mut digits = s
            .chars()
            .enumerate()
            .map(|(position, ch)| {
                ch.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or(MathError::InvalidDigit { ch, position })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        digits.reverse();
        while digits.len() > 1 && digits.last() == Some(&0) {
            digits.pop();
        }
        Ok(BigInt { digits })
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, other: BigInt) -> BigInt {
        &self + &other
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, other: &BigInt) -> BigInt {
        let mut result = Vec::new();
        let mut carry = 0u8;
        let max_len = self.digits.len().max(other.digits.len());

        for i in 0..max_len {
            let a = self.digits.get(i).copied().unwrap_or(0);
            let b = other.digits.get(i).copied().unwrap_or(0);
            let sum = a + b + carry;
            result.push(sum % 10);
            carry = sum / 10;
        }

        if carry > 0 {
            result.push(carry);
        }

        BigInt { digits: result }
    }
}

impl Mul<u32> for BigInt {
    type Output = BigInt;

    fn mul(self, other: u32) -> BigInt {
        &self * other
    }
}

impl Mul<u32> for &BigInt {
    type Output = BigInt;

    fn mul(self, other: u32) -> BigInt {
        if other == 0 {
            return BigInt::zero();
        }

        let mut result = Vec::with_capacity(self.digits.len() + 10);
        let mut carry = 0u64;

        for &d in &self.digits {
            let product = (d as u64) * (other as u64) + carry;
            result.push((product % 10) as u8);
            carry = product / 10;
        }

        while carry > 0 {
            result.push((carry % 10) as u8);
            carry /= 10;
        }

        BigInt { digits: result }
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |acc, n| &acc + &n)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |acc, n| &acc + n)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.significant();
        if digits.is_empty() {
            return write!(f, "0");
        }
        for &d in digits.iter().rev() {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let n: BigInt = "12345".parse().unwrap();
        assert_eq!(n.digits, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_from_str_rejects_non_digits() {
        assert_eq!(
            "12a45".parse::<BigInt>(),
            Err(MathError::InvalidDigit { ch: 'a', position: 2 })
        );
        assert_eq!("".parse::<BigInt>(), Err(MathError::Empty));
        assert_eq!("  \n".parse::<BigInt>(), Err(MathError::Empty));
    }

    #[test]
    fn test_from_str_trims_whitespace() {
        let n: BigInt = " 42\n".parse().unwrap();
        assert_eq!(n.to_string(), "42");
    }

    #[test]
    fn test_display() {
        let n: BigInt = "12345".parse().unwrap();
        assert_eq!(format!("{}", n), "12345");
    }

    #[test]
    fn test_leading_zeros_are_dropped() {
        let n: BigInt = "000120".parse().unwrap();
        assert_eq!(n, BigInt::from_u32(120));
        assert_eq!(n.to_string(), "120");
        assert_eq!(n.num_digits(), 3);
        let z: BigInt = "000".parse().unwrap();
        assert_eq!(z.to_string(), "0");
        assert_eq!(z.num_digits(), 1);
    }

    #[test]
    fn test_add_with_carry() {
        let a: BigInt = "999".parse().unwrap();
        let b: BigInt = "1".parse().unwrap();
        let sum = a + b;
        assert_eq!(format!("{}", sum), "1000");
    }

    #[test]
    fn test_add_different_lengths() {
        let a: BigInt = "12345".parse().unwrap();
        let b: BigInt = "99".parse().unwrap();
        let sum = a + b;
        assert_eq!(format!("{}", sum), "12444");
    }

    #[test]
    fn test_from_u64() {
        assert_eq!(BigInt::from_u64(0).to_string(), "0");
        assert_eq!(BigInt::from_u64(u64::MAX).to_string(), u64::MAX.to_string());
        assert_eq!(BigInt::from_u32(12345).to_string(), "12345");
    }

    #[test]
    fn test_mul_u32_with_carry() {
        let a: BigInt = "999".parse().unwrap();
        let product = a * 9;
        assert_eq!(format!("{}", product), "8991");
    }

    #[test]
    fn test_mul_large_factor() {
        let a: BigInt = "99999".parse().unwrap();
        let product = a * u32::MAX;
        assert_eq!(product.to_string(), (99999u64 * u32::MAX as u64).to_string());
    }

    #[test]
    fn test_mul_zero() {
        let a: BigInt = "12345".parse().unwrap();
        assert_eq!((a * 0).to_string(), "0");
    }

    #[test]
    fn test_pow_exceeds_u64() {
        // 2^64 = 18446744073709551616
        assert_eq!(BigInt::pow(2, 64).to_string(), "18446744073709551616");
        assert_eq!(BigInt::pow(2, 15).digit_sum(), 26);
    }

    #[test]
    fn test_sum_iterator() {
        let nums: Vec<BigInt> = ["99", "1", "900"].iter().map(|s| s.parse().unwrap()).collect();
        let by_ref: BigInt = nums.iter().sum();
        assert_eq!(by_ref.to_string(), "1000");
        let owned: BigInt = nums.into_iter().sum();
        assert_eq!(owned, by_ref);
    }
}
