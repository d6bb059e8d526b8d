//! Snapping functions: quantize coordinates and extents to grid cells.
//!
//! Positions are measured from an anchor (`origin + padding`) so that grid
//! lines start at the container's padded edge. All arithmetic is done in
//! `i64` and saturated back into `i32`.

/// Replace a non-positive cell size with 1.
#[inline]
pub const fn normalize_cell(cell: i32) -> i32 {
    if cell > 0 { cell } else { 1 }
}

/// Round `value` down to the grid line at or before it.
pub fn snap_floor(value: i32, origin: i32, padding: i32, cell: i32) -> i32 {
    let cell = i64::from(normalize_cell(cell));
    let anchor = i64::from(origin) + i64::from(padding);
    let offset = i64::from(value) - anchor;
    saturate(offset.div_euclid(cell) * cell + anchor)
}

/// Round `value` to the nearest grid line. Halfway values round up.
pub fn snap_round(value: i32, origin: i32, padding: i32, cell: i32) -> i32 {
    let cell = i64::from(normalize_cell(cell));
    let anchor = i64::from(origin) + i64::from(padding);
    let offset = i64::from(value) - anchor;
    let cells = (2 * offset + cell).div_euclid(2 * cell);
    saturate(cells * cell + anchor)
}

/// Number of whole cells needed to cover `extent`.
pub fn ceil_cells(extent: i32, cell: i32) -> i32 {
    let cell = i64::from(normalize_cell(cell));
    saturate(-(-i64::from(extent)).div_euclid(cell))
}

/// Round an extent up to a whole number of cells.
pub fn snap_ceil(extent: i32, cell: i32) -> i32 {
    let cell = normalize_cell(cell);
    saturate(i64::from(ceil_cells(extent, cell)) * i64::from(cell))
}

#[allow(clippy::cast_possible_truncation)]
const fn saturate(value: i64) -> i32 {
    if value > i32::MAX as i64 {
        i32::MAX
    } else if value < i32::MIN as i64 {
        i32::MIN
    } else {
        value as i32
    }
}
