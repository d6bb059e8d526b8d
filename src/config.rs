//! Drawing configuration.
//!
//! A [`DrawConfig`] is built once, normalized on construction, and passed by
//! value into every drag. It never changes while a drag is active.
//!
//! Options can also be read from a JSON object:
//!
//! ```
//! use drawable::DrawConfig;
//!
//! let config = DrawConfig::from_json(r#"{ "padding": "4px", "grid": [10, 20] }"#).unwrap();
//! assert_eq!(config.padding().left(), 4);
//! assert_eq!(config.grid().cell_height(), 20);
//! ```

use crate::error::Result;
use crate::geometry::Padding;
use crate::grid::GridSpec;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;

/// Default pixels added to the snapped left edge and removed per grid cell
/// of width, matching a one-pixel cell border.
pub const DEFAULT_BORDER_COMPENSATION: i32 = 1;

/// Default pointer travel (in pixels) before a press becomes a drag.
pub const DEFAULT_DISTANCE: u32 = 1;

/// Validated configuration for a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawConfig {
    /// Interior inset of the container.
    padding: Padding,
    /// Snapping resolution.
    grid: GridSpec,
    /// Border compensation constant, always `>= 0`.
    border_compensation: i32,
    /// Minimum pointer travel before a drag starts.
    pub distance: u32,
    /// Minimum time between press and drag start.
    pub delay: Duration,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            padding: Padding::ZERO,
            grid: GridSpec::UNIT,
            border_compensation: DEFAULT_BORDER_COMPENSATION,
            distance: DEFAULT_DISTANCE,
            delay: Duration::ZERO,
        }
    }
}

impl DrawConfig {
    /// Create a configuration with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the padding.
    #[must_use]
    pub const fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Set the grid.
    #[must_use]
    pub const fn with_grid(mut self, grid: GridSpec) -> Self {
        self.grid = grid;
        self
    }

    /// Set the border compensation. Negative values become 0.
    #[must_use]
    pub const fn with_border_compensation(mut self, pixels: i32) -> Self {
        self.border_compensation = if pixels < 0 { 0 } else { pixels };
        self
    }

    /// Set the drag start distance threshold.
    #[must_use]
    pub const fn with_distance(mut self, distance: u32) -> Self {
        self.distance = distance;
        self
    }

    /// Set the drag start delay.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Interior inset of the container.
    pub const fn padding(&self) -> Padding {
        self.padding
    }

    /// Snapping resolution.
    pub const fn grid(&self) -> GridSpec {
        self.grid
    }

    /// Border compensation constant.
    pub const fn border_compensation(&self) -> i32 {
        self.border_compensation
    }

    /// Parse and normalize a JSON options object.
    ///
    /// Numeric fields are coerced leniently: numbers truncate, strings use
    /// their leading integer (`"12px"` is 12), and anything else falls back
    /// to the field default (0 for padding, 1 for grid cells).
    ///
    /// The top level must be a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Map<String, Value> = serde_json::from_str(json)?;
        let raw: RawOptions = serde_json::from_value(Value::Object(options))?;
        Ok(raw.into())
    }
}

/// Options as they arrive from JSON, before coercion.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawOptions {
    padding: Option<Value>,
    grid: Option<Value>,
    border_compensation: Option<Value>,
    distance: Option<Value>,
    delay: Option<Value>,
}

impl From<RawOptions> for DrawConfig {
    fn from(raw: RawOptions) -> Self {
        let mut config = Self::default();

        if let Some(padding) = raw.padding.as_ref() {
            config.padding = coerce_padding(padding);
        }
        if let Some(grid) = raw.grid.as_ref() {
            config.grid = coerce_grid(grid);
        }
        if let Some(pixels) = raw.border_compensation.as_ref().and_then(coerce_int) {
            config = config.with_border_compensation(saturate_i32(pixels));
        }
        if let Some(distance) = raw.distance.as_ref().and_then(coerce_int) {
            config.distance = u32::try_from(distance.max(0)).unwrap_or(u32::MAX);
        }
        if let Some(millis) = raw.delay.as_ref().and_then(coerce_int) {
            config.delay = Duration::from_millis(u64::try_from(millis).unwrap_or(0));
        }

        config
    }
}

fn coerce_padding(value: &Value) -> Padding {
    if let Value::Object(sides) = value {
        let side = |name: &str| sides.get(name).and_then(coerce_int).map_or(0, saturate_i32);
        Padding::new(side("top"), side("right"), side("bottom"), side("left"))
    } else {
        Padding::uniform(coerce_int(value).map_or(0, saturate_i32))
    }
}

fn coerce_grid(value: &Value) -> GridSpec {
    let cell = |v: Option<&Value>| v.and_then(coerce_int).map_or(1, saturate_i32);
    match value {
        Value::Array(cells) => GridSpec::new(cell(cells.first()), cell(cells.get(1))),
        other => GridSpec::square(cell(Some(other))),
    }
}

/// Lenient integer coercion for option values.
#[allow(clippy::cast_possible_truncation)]
fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => leading_int(s),
        _ => None,
    }
}

/// Parse the leading integer of a string, ignoring leading whitespace.
fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

fn saturate_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
