use math::{Result, lcm_range};

/// PE5: Smallest Multiple
/// Smallest positive number evenly divisible by all numbers from 1 to `limit`.
pub fn smallest_multiple(limit: u64) -> u64 {
    lcm_range(limit)
}

pub fn solve() -> Result<String> {
    Ok(smallest_multiple(20).to_string())
}
