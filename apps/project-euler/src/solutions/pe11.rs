use std::collections::HashMap;

use math::{MathError, Result};

pub const GRID: &str = include_str!("../../data/grid.txt");

/// A rectangular grid of non-negative integers, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u64>,
}

impl Grid {
    /// Parse whitespace-separated numbers, one grid row per non-blank line.
    pub fn parse(text: &str) -> Result<Self> {
        let mut cols = 0;
        let mut cells = Vec::new();
        let mut rows = 0;

        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let row = line
                .split_whitespace()
                .map(|s| {
                    s.parse::<u64>()
                        .map_err(|_| MathError::InvalidNumber(s.to_string()))
                })
                .collect::<Result<Vec<u64>>>()?;
            if rows == 0 {
                cols = row.len();
            } else if row.len() != cols {
                return Err(MathError::RaggedGrid {
                    row: rows,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row);
            rows += 1;
        }

        if rows == 0 {
            return Err(MathError::Empty);
        }
        Ok(Grid { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u64> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }
}

/// Product of a run of cells. A run containing a zero scores zero even if the
/// cells before it would overflow; otherwise None means the product does not
/// fit in a u64.
fn run_product(cells: impl Iterator<Item = u64>) -> Option<u64> {
    let cells: Vec<u64> = cells.collect();
    if cells.contains(&0) {
        return Some(0);
    }
    cells.into_iter().try_fold(1u64, |acc, v| acc.checked_mul(v))
}

/// Largest run product, or `Overflow` if any run does not fit in a u64.
fn max_product(mut products: impl Iterator<Item = Option<u64>>, blocksize: usize) -> Result<u64> {
    products
        .try_fold(0u64, |best, p| p.map(|p| best.max(p)))
        .ok_or(MathError::Overflow { window: blocksize })
}

/// PE11: Largest Product in a Grid
/// Greatest product of `blocksize` adjacent cells along a row, a column or
/// either diagonal.
///
/// The grid is copied into a flat buffer with one zero column on the right and
/// `blocksize` zero rows underneath. With padded width `w = cols + 1`, stepping
/// by 1, `w - 1`, `w` and `w + 1` walks right, down-left, down and down-right.
/// Any run that would leave the grid crosses a zero, so nothing wraps into the
/// next row.
pub fn largest_product_grid(grid: &Grid, blocksize: usize) -> Result<u64> {
    if blocksize == 0 {
        return Err(MathError::ZeroLength);
    }
    let width = grid.cols + 1;
    let mut flat = vec![0u64; width * (grid.rows + blocksize)];
    for r in 0..grid.rows {
        let src = &grid.cells[r * grid.cols..(r + 1) * grid.cols];
        flat[r * width..r * width + grid.cols].copy_from_slice(src);
    }

    let useful = grid.rows * width;
    let shifts = [1, width - 1, width, width + 1];

    let products = (0..useful)
        .flat_map(|start| shifts.iter().map(move |&shift| (start, shift)))
        .map(|(start, shift)| {
            run_product((0..blocksize).map(|i| flat.get(start + i * shift).copied().unwrap_or(0)))
        });
    max_product(products, blocksize)
}

/// The same search over a map keyed by `(row, col)`; cells missing from the
/// map count as zero.
pub fn largest_product_grid_dict_approach(grid: &Grid, blocksize: usize) -> Result<u64> {
    if blocksize == 0 {
        return Err(MathError::ZeroLength);
    }
    let cells: HashMap<(i64, i64), u64> = (0..grid.rows)
        .flat_map(|r| (0..grid.cols).map(move |c| (r, c)))
        .filter_map(|(r, c)| grid.get(r, c).map(|v| ((r as i64, c as i64), v)))
        .collect();

    let products = cells.keys().flat_map(|&(row, col)| {
        [(0, 1), (1, 0), (1, 1), (1, -1)].map(|(dr, dc)| {
            run_product(
                (0..blocksize as i64)
                    .map(|i| cells.get(&(row + dr * i, col + dc * i)).copied().unwrap_or(0)),
            )
        })
    });
    max_product(products, blocksize)
}

pub fn solve() -> Result<String> {
    let grid = Grid::parse(GRID)?;
    Ok(largest_product_grid(&grid, 4)?.to_string())
}
