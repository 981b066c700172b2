use math::{MathError, Result};

pub const TRIANGLE: &str = include_str!("../../data/triangle.txt");

/// Parse a number triangle: row `i` (0-based) must hold `i + 1` entries.
pub fn triangle_to_array(triangle: &str) -> Result<Vec<Vec<u64>>> {
    let rows = triangle
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(i, line)| -> Result<Vec<u64>> {
            let row = line
                .split_whitespace()
                .map(|s| {
                    s.parse::<u64>()
                        .map_err(|_| MathError::InvalidNumber(s.to_string()))
                })
                .collect::<Result<Vec<u64>>>()?;
            if row.len() != i + 1 {
                return Err(MathError::MalformedTriangle {
                    row: i,
                    expected: i + 1,
                    found: row.len(),
                });
            }
            Ok(row)
        })
        .collect::<Result<Vec<_>>>()?;

    if rows.is_empty() {
        return Err(MathError::Empty);
    }
    Ok(rows)
}

/// Collapse a row into the row above it: each entry of `next_row` gains the
/// larger of the two values beneath it in `row`.
pub fn max_sum(row: &[u64], next_row: &[u64]) -> Vec<u64> {
    row.iter()
        .zip(row.iter().skip(1))
        .zip(next_row)
        .map(|((left, right), above)| above + left.max(right))
        .collect()
}

/// PE18: Maximum Path Sum I
/// Largest top-to-bottom total, folding rows from the bottom up.
pub fn solution(triangle: &str) -> Result<u64> {
    let rows = triangle_to_array(triangle)?;
    rows.into_iter()
        .rev()
        .reduce(|below, above| max_sum(&below, &above))
        .and_then(|top| top.first().copied())
        .ok_or(MathError::Empty)
}

pub fn solve() -> Result<String> {
    Ok(solution(TRIANGLE)?.to_string())
}
