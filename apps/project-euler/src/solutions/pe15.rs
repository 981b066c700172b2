use log::debug;
use math::{BigInt, Result, binomial};

/// PE15: Lattice Paths
/// Number of right/down routes through a `grid_size` x `grid_size` grid, C(2n, n).
///
/// Exact for every size: when C(2n, n) does not fit in a u128 the count is
/// built up row by row of Pascal's triangle in `BigInt`s.
pub fn lattice_paths(grid_size: u64) -> BigInt {
    if let Some(paths) = binomial(2 * grid_size, grid_size) {
        return BigInt::from_u128(paths);
    }
    debug!("C({}, {}) exceeds u128, using Pascal's triangle", 2 * grid_size, grid_size);

    // row[j] holds the routes to (i, j); only the current row is kept.
    let size = grid_size as usize;
    let mut row = vec![BigInt::from_u32(1); size + 1];
    for _ in 1..=size {
        for j in 1..=size {
            row[j] = &row[j] + &row[j - 1];
        }
    }
    row[size].clone()
}

pub fn solve() -> Result<String> {
    Ok(lattice_paths(20).to_string())
}
