use crate::foundation::core::Point;

/// Horizontal pixels per index step.
pub const UNIT_WIDTH: f64 = 40.0;
/// Left (and right) padding before the first index.
pub const ZERO_X: f64 = 100.0;
/// Space above the first row's label.
pub const TOP_PADDING: f64 = 40.0;
/// Vertical room reserved per row.
pub const GRAPH_HEIGHT: f64 = 120.0;
/// Space between rows.
pub const ROW_GAP: f64 = 40.0;
/// Pixels per unit of sample value (negative: SVG y grows downwards).
pub const VALUE_SCALE: f64 = -30.0;
/// Stem stroke width.
pub const STEM_WIDTH: f64 = 4.0;
/// Stem head radius.
pub const STEM_HEAD_RADIUS: f64 = 5.0;
/// Indices of slack beyond both operands.
pub const K_MARGIN: i64 = 2;

/// The three stacked rows of the stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageRow {
    /// The operand that stays put, `h[k]`.
    Fixed,
    /// The flipped and shifted operand, `x[n-k]`.
    Moving,
    /// Their pointwise product.
    Product,
}

/// Data-to-pixel mapping for the stage.
///
/// The fixed operand occupies `[0, |h|)`; the moving one enters from the
/// left, so the visible `k` window is `[-|x| - 2, |h| + |x| + 2]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageLayout {
    /// First visible `k`.
    pub min_k: i64,
    /// Last visible `k`.
    pub max_k: i64,
    /// View width in pixels.
    pub width: f64,
    /// View height in pixels.
    pub height: f64,
}

impl StageLayout {
    /// Layout for operands of the given lengths.
    pub fn new(x_len: usize, h_len: usize) -> Self {
        let min_k = -(x_len as i64) - K_MARGIN;
        let max_k = h_len as i64 + x_len as i64 + K_MARGIN;
        let width = (max_k - min_k) as f64 * UNIT_WIDTH + 2.0 * ZERO_X;
        let height = Self::row_center(StageRow::Product) + 100.0;
        Self {
            min_k,
            max_k,
            width,
            height,
        }
    }

    /// Baseline y of a row.
    pub fn row_center(row: StageRow) -> f64 {
        let fixed = TOP_PADDING + 60.0;
        match row {
            StageRow::Fixed => fixed,
            StageRow::Moving => fixed + GRAPH_HEIGHT + ROW_GAP,
            StageRow::Product => fixed + 2.0 * (GRAPH_HEIGHT + ROW_GAP),
        }
    }

    /// Pixel x of index `k`.
    pub fn k_to_px(&self, k: i64) -> f64 {
        ZERO_X + (k - self.min_k) as f64 * UNIT_WIDTH
    }

    /// True when `k` falls inside the visible window.
    pub fn is_visible(&self, k: i64) -> bool {
        self.min_k <= k && k <= self.max_k
    }

    /// Visible indices, left to right.
    pub fn ks(&self) -> std::ops::RangeInclusive<i64> {
        self.min_k..=self.max_k
    }

    /// Base and tip of a stem for `value` at `k` in `row`.
    pub fn stem(&self, row: StageRow, k: i64, value: f64) -> (Point, Point) {
        let px = self.k_to_px(k);
        let base_y = Self::row_center(row);
        (
            Point::new(px, base_y),
            Point::new(px, base_y + value * VALUE_SCALE),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/layout.rs"]
mod tests;
