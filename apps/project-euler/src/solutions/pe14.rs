use log::debug;
use math::{CollatzCache, MathError, Result};

/// PE14: Longest Collatz Sequence
/// Start value in `2..limit` producing the longest chain; the smallest wins ties.
pub fn longest_collatz_sequence(limit: u64) -> Option<u64> {
    let mut cache = CollatzCache::new();
    let mut best: Option<(u64, u32)> = None;

    for start in 2..limit {
        let Some(length) = cache.length(start) else {
            continue;
        };
        if best.is_none_or(|(_, best_len)| length > best_len) {
            best = Some((start, length));
        }
    }

    if let Some((start, length)) = best {
        debug!("{} starts a chain of {} terms ({} cached)", start, length, cache.len());
    }
    best.map(|(start, _)| start)
}

pub fn solve() -> Result<String> {
    let limit = 1_000_000;
    longest_collatz_sequence(limit)
        .map(|n| n.to_string())
        .ok_or(MathError::OutOfRange {
            value: limit,
            min: 3,
            max: u64::MAX,
        })
}
