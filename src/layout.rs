//! Grid shapes for tiling the motif.
//!
//! The shape comes from the number of initials, or from an explicit `RxC`
//! string when one is supplied.

use crate::error::LayoutError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Largest row or column count accepted from an explicit layout string.
pub const MAX_GRID_DIM: u32 = 8;

/// A rows × cols grid. Both dimensions are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridShape {
    pub rows: u32,
    pub cols: u32,
}

impl GridShape {
    pub const SINGLE: GridShape = GridShape { rows: 1, cols: 1 };

    /// Build a shape, lifting zero dimensions to 1.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    /// Number of cells in the grid.
    pub fn cells(self) -> usize {
        (self.rows as usize).saturating_mul(self.cols as usize)
    }

    /// The larger of the two dimensions.
    pub fn span(self) -> u32 {
        self.rows.max(self.cols)
    }
}

impl Default for GridShape {
    fn default() -> Self {
        Self::SINGLE
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl FromStr for GridShape {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || LayoutError::Malformed(s.to_string());
        let (rows, cols) = s
            .trim()
            .split_once(['x', 'X', '×'])
            .ok_or_else(malformed)?;

        let dim = |part: &str| -> Result<u32, LayoutError> {
            let value: u32 = part.trim().parse().map_err(|_| malformed())?;
            if (1..=MAX_GRID_DIM).contains(&value) {
                Ok(value)
            } else {
                Err(LayoutError::OutOfRange(value))
            }
        };

        Ok(GridShape {
            rows: dim(rows)?,
            cols: dim(cols)?,
        })
    }
}

/// Grid shape for a number of initials.
///
/// Lengths up to four use a fixed table; longer inputs get a near-square
/// grid with `floor(sqrt(n))` rows.
pub fn resolve(initials_len: usize) -> GridShape {
    match initials_len {
        0 | 1 => GridShape::SINGLE,
        2 => GridShape::new(2, 2),
        3 => GridShape::new(2, 3),
        4 => GridShape::new(2, 4),
        n => {
            let rows = integer_sqrt(n);
            let cols = n.div_ceil(rows);
            GridShape::new(saturate(rows), saturate(cols))
        }
    }
}

/// Resolve the layout, preferring an explicit `RxC` string when it parses.
pub fn resolve_layout(explicit: Option<&str>, initials_len: usize) -> GridShape {
    match explicit.map(str::parse::<GridShape>) {
        Some(Ok(shape)) => shape,
        Some(Err(err)) => {
            tracing::warn!(%err, "ignoring explicit layout, using initials length");
            resolve(initials_len)
        }
        None => resolve(initials_len),
    }
}

fn integer_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root.checked_mul(root).is_none_or(|sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= n) {
        root += 1;
    }
    root.max(1)
}

fn saturate(dim: usize) -> u32 {
    u32::try_from(dim).unwrap_or(u32::MAX)
}
