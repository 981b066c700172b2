use math::Result;

/// PE1: Multiples of 3 or 5
/// Sum of all natural numbers below `limit` that are multiples of 3 or 5.
pub fn multiples_of_3_or_5(limit: u64) -> u64 {
    (1..limit).filter(|n| n % 3 == 0 || n % 5 == 0).sum()
}

pub fn solve() -> Result<String> {
    Ok(multiples_of_3_or_5(1000).to_string())
}
