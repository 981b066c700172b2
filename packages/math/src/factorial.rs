use log::trace;

use crate::BigInt;

/// Compute factorial of n (n!), or None past 20! where it overflows a u64.
///
/// Use [`big_factorial`] for larger n.
pub fn factorial(n: u64) -> Option<u64> {
    match n {
        0 | 1 => Some(1),
        _ => factorial(n - 1)?.checked_mul(n),
    }
}

/// Compute factorial of n (n!) as BigInt for arbitrary precision
pub fn big_factorial(n: u32) -> BigInt {
    let mut result = BigInt::from_u32(1);
    for i in 1..=n {
        result = result * i;
    }
    result
}

/// Memoised big factorials.
///
/// Entry `i` of the table holds `i!`. A lookup past the end extends the
/// table from the last cached entry, so `get(100)` after `get(90)` costs
/// ten multiplications.
///
/// # Example
///
/// ```
/// use math::FactorialCache;
///
/// let mut cache = FactorialCache::new();
/// assert_eq!(cache.get(10).to_string(), "3628800");
/// assert_eq!(cache.len(), 11);
/// ```
pub struct FactorialCache {
    table: Vec<BigInt>,
}

impl FactorialCache {
    pub fn new() -> Self {
        FactorialCache {
            table: vec![BigInt::from_u32(1)],
        }
    }

    pub fn get(&mut self, n: u32) -> &BigInt {
        let n = n as usize;
        while self.table.len() <= n {
            let next = self.table.len();
            trace!("extending factorial table to {}!", next);
            let value = &self.table[next - 1] * next as u32;
            self.table.push(value);
        }
        &self.table[n]
    }

    /// Number of cached entries (0! through (len-1)!).
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for FactorialCache {
    fn default() -> Self {
        Self::new()
    }
}
