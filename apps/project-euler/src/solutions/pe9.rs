use math::{MathError, Result};

/// PE9: Special Pythagorean Triplet
/// Product abc of the triplet a < b < c with a + b + c = goal and a² + b² = c².
pub fn pythagorean_triplet_product(goal: u64) -> Option<u64> {
    for a in 1..=goal / 3 {
        // b < c  <=>  b < (goal - a) / 2
        for b in (a + 1)..=(goal - a).saturating_sub(1) / 2 {
            let c = goal - a - b;
            if a * a + b * b == c * c {
                return Some(a * b * c);
            }
        }
    }
    None
}

pub fn solve() -> Result<String> {
    let goal = 1000;
    pythagorean_triplet_product(goal)
        .map(|p| p.to_string())
        .ok_or(MathError::InvalidNumber(format!("no triplet sums to {}", goal)))
}
