use std::collections::HashMap;

use crate::arith::sum_to;

/// The nth triangle number, 1 + 2 + ... + n.
pub fn triangle_number(n: u64) -> u64 {
    sum_to(n)
}

/// Iterator that yields triangle numbers: 1, 3, 6, 10, 15, ...
pub struct TriangleNumbers {
    n: u64,
    current: u64,
}

impl TriangleNumbers {
    pub fn new() -> Self {
        Self { n: 0, current: 0 }
    }
}

impl Default for TriangleNumbers {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for TriangleNumbers {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        self.n += 1;
        self.current = self.current.checked_add(self.n)?;
        Some(self.current)
    }
}

/// One Collatz step: n/2 for even n, 3n + 1 for odd n.
///
/// Returns None when 3n + 1 does not fit in a u64.
pub fn collatz_step(n: u64) -> Option<u64> {
    if n.is_multiple_of(2) {
        Some(n / 2)
    } else {
        n.checked_mul(3)?.checked_add(1)
    }
}

/// Memoised Collatz chain lengths.
///
/// The length counts every term including the start and the final 1, so
/// 13 → 40 → 20 → 10 → 5 → 16 → 8 → 4 → 2 → 1 has length 10. Entries stay
/// valid for the lifetime of the cache.
///
/// # Example
///
/// ```
/// use math::CollatzCache;
///
/// let mut cache = CollatzCache::new();
/// assert_eq!(cache.length(13), Some(10));
/// // Every value on the chain from 13 is now known.
/// assert!(cache.contains(40));
/// assert_eq!(cache.length(0), None);
/// ```
pub struct CollatzCache {
    lengths: HashMap<u64, u32>,
}

impl CollatzCache {
    pub fn new() -> Self {
        let mut lengths = HashMap::new();
        lengths.insert(1, 1);
        Self { lengths }
    }

    /// Chain length starting from `start`.
    ///
    /// Returns None for 0, which never reaches 1, and when a term overflows u64.
    pub fn length(&mut self, start: u64) -> Option<u32> {
        if start == 0 {
            return None;
        }

        let mut path: Vec<u64> = Vec::new();
        let mut current = start;

        loop {
            if let Some(&len) = self.lengths.get(&current) {
                // Cache all elements in path
                for (i, &elem) in path.iter().enumerate() {
                    let path_len = (path.len() - i) as u32 + len;
                    self.lengths.insert(elem, path_len);
                }
                return Some(path.len() as u32 + len);
            }

            path.push(current);
            current = collatz_step(current)?;
        }
    }

    pub fn contains(&self, n: u64) -> bool {
        self.lengths.contains_key(&n)
    }

    /// Number of memoised start values.
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }
}

impl Default for CollatzCache {
    fn default() -> Self {
        Self::new()
    }
}
