//! Grid module: Snapping resolution and quantization helpers.
//!
//! A [`GridSpec`] holds one cell size per axis. The free functions in
//! [`snap`] do the actual rounding; positions snap relative to an anchor,
//! extents snap to whole cells.

pub mod snap;

pub use snap::{ceil_cells, normalize_cell, snap_ceil, snap_floor, snap_round};

/// Snapping resolution per axis.
///
/// Cell sizes are always positive; [`GridSpec::new`] replaces zero or
/// negative sizes with 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GridSpec {
    cell_width: i32,
    cell_height: i32,
}

impl GridSpec {
    /// One-pixel grid (no visible snapping).
    pub const UNIT: Self = Self::new(1, 1);

    /// Create a grid spec.
    pub const fn new(cell_width: i32, cell_height: i32) -> Self {
        Self {
            cell_width: normalize_cell(cell_width),
            cell_height: normalize_cell(cell_height),
        }
    }

    /// Square cells.
    pub const fn square(cell: i32) -> Self {
        Self::new(cell, cell)
    }

    /// Horizontal cell size.
    pub const fn cell_width(&self) -> i32 {
        self.cell_width
    }

    /// Vertical cell size.
    pub const fn cell_height(&self) -> i32 {
        self.cell_height
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::UNIT
    }
}

impl From<[i32; 2]> for GridSpec {
    fn from([cell_width, cell_height]: [i32; 2]) -> Self {
        Self::new(cell_width, cell_height)
    }
}
