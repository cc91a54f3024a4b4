use crate::{
    foundation::core::{Rect, Rgba8},
    stage::palette,
};

/// Where a bar sits relative to the scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarState {
    /// The bar at the scanning index.
    Current,
    /// Already swept.
    Done,
    /// Not reached yet.
    Pending,
}

impl BarState {
    fn classify(index: usize, n: i64) -> Self {
        let index = index as i64;
        if index == n {
            Self::Current
        } else if index < n {
            Self::Done
        } else {
            Self::Pending
        }
    }

    /// Fill color.
    pub fn fill(self) -> Rgba8 {
        match self {
            Self::Current => palette::BAR_CURRENT,
            Self::Done => palette::BAR_DONE,
            Self::Pending => palette::BAR_PENDING,
        }
    }

    /// Outline color, only the current bar has one.
    pub fn stroke(self) -> Option<Rgba8> {
        match self {
            Self::Current => Some(palette::BAR_CURRENT_STROKE),
            Self::Done | Self::Pending => None,
        }
    }
}

/// One output sample as a bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    /// Output index.
    pub index: usize,
    /// `y[index]`.
    pub value: f64,
    /// Scan-relative state.
    pub state: BarState,
    /// Pixel rectangle (zero height for zero values).
    pub rect: Rect,
    /// Slot center, used for the index label.
    pub label_x: f64,
}

/// Bar chart of the accumulated output.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputChart {
    /// Plot area.
    pub frame: Rect,
    /// Smallest plotted value, never above 0.
    pub y_min: f64,
    /// Largest plotted value, never below 0.
    pub y_max: f64,
    /// Pixel y of value 0.
    pub baseline_y: f64,
    /// Bars in index order.
    pub bars: Vec<Bar>,
    /// `y[n]` when `n` is inside the output.
    pub current: Option<f64>,
}

const GRID_LINES: usize = 4;
const BAR_FILL_RATIO: f64 = 0.7;

impl OutputChart {
    /// Chart `y` into `frame` with the bar at `n` highlighted.
    pub fn build(y: &[f64], n: i64, frame: Rect) -> Self {
        let mut y_min = y.iter().copied().fold(0.0_f64, f64::min);
        let mut y_max = y.iter().copied().fold(0.0_f64, f64::max);
        if y_max - y_min < f64::EPSILON {
            y_min = 0.0;
            y_max = 1.0;
        }

        let span = y_max - y_min;
        let to_py = |v: f64| frame.y1 - (v - y_min) / span * frame.height();
        let baseline_y = to_py(0.0);

        let slot = if y.is_empty() {
            frame.width()
        } else {
            frame.width() / y.len() as f64
        };
        let bar_w = slot * BAR_FILL_RATIO;

        let bars = y
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                let cx = frame.x0 + slot * (index as f64 + 0.5);
                let top = to_py(value);
                let rect = Rect::new(
                    cx - bar_w / 2.0,
                    top.min(baseline_y),
                    cx + bar_w / 2.0,
                    top.max(baseline_y),
                );
                Bar {
                    index,
                    value,
                    state: BarState::classify(index, n),
                    rect,
                    label_x: cx,
                }
            })
            .collect();

        let current = usize::try_from(n).ok().and_then(|i| y.get(i).copied());

        Self {
            frame,
            y_min,
            y_max,
            baseline_y,
            bars,
            current,
        }
    }

    /// Evenly spaced grid values from `y_min` to `y_max`, with their pixel y.
    pub fn grid(&self) -> Vec<(f64, f64)> {
        let span = self.y_max - self.y_min;
        (0..=GRID_LINES)
            .map(|i| {
                let t = i as f64 / GRID_LINES as f64;
                let v = self.y_min + t * span;
                (v, self.frame.y1 - t * self.frame.height())
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/chart.rs"]
mod tests;
