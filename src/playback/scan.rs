use std::time::Duration;

use crate::foundation::core::IndexRange;

/// Indices the scan may wander past either end of the output.
pub const SCAN_MARGIN: i64 = 2;
/// Default playback interval between index advances.
pub const DEFAULT_INTERVAL_MS: u64 = 1000;
/// Slowest accepted speed-slider position (longest interval).
pub const SPEED_SLIDER_MIN: u64 = 200;
/// Fastest accepted speed-slider position (shortest interval).
pub const SPEED_SLIDER_MAX: u64 = 2000;
/// Speed-slider granularity.
pub const SPEED_SLIDER_STEP: u64 = 100;

// slider + interval always add up to this
const SPEED_SLIDER_PIVOT: u64 = SPEED_SLIDER_MIN + SPEED_SLIDER_MAX;

/// Manual-stepping bounds for an output of `output_len` samples: `[-2, len + 2]`.
pub fn scan_bounds(output_len: usize) -> IndexRange {
    IndexRange::inclusive(-SCAN_MARGIN, output_len as i64 + SCAN_MARGIN)
}

/// Index at which playback stops: one past the last output sample.
pub fn playback_stop(output_len: usize) -> i64 {
    output_len as i64 + 1
}

/// What a playback tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The index moved forward to the contained value.
    Advanced(i64),
    /// Playback reached the stop index and paused there.
    Stopped(i64),
    /// Not playing; nothing changed.
    Idle,
}

/// Scanning index plus playback flag and interval.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scan {
    n: i64,
    playing: bool,
    interval_ms: u64,
}

impl Default for Scan {
    fn default() -> Self {
        Self {
            n: 0,
            playing: false,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

impl Scan {
    /// Scan at index 0, paused, default interval.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current index.
    pub fn n(&self) -> i64 {
        self.n
    }

    /// Jump to an index without clamping.
    pub fn set_n(&mut self, n: i64) {
        self.n = n;
    }

    /// Whether playback is running.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Start playback.
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Pause playback.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Flip the playback flag.
    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Back to index 0, paused.
    pub fn reset(&mut self) {
        self.playing = false;
        self.n = 0;
    }

    /// One timer tick: advance while playing, stop once past the output.
    pub fn tick(&mut self, output_len: usize) -> TickOutcome {
        if !self.playing {
            return TickOutcome::Idle;
        }
        if self.n >= playback_stop(output_len) {
            self.playing = false;
            return TickOutcome::Stopped(self.n);
        }
        self.n += 1;
        TickOutcome::Advanced(self.n)
    }

    /// Manual step by `delta`, clamped into [`scan_bounds`].
    pub fn step(&mut self, delta: i64, output_len: usize) -> i64 {
        self.n = scan_bounds(output_len).clamp(self.n.saturating_add(delta));
        self.n
    }

    /// Interval between playback ticks.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Interval in milliseconds.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Set the interval, clamped into the slider's reachable range.
    pub fn set_interval_ms(&mut self, ms: u64) {
        self.interval_ms = ms.clamp(
            SPEED_SLIDER_PIVOT - SPEED_SLIDER_MAX,
            SPEED_SLIDER_PIVOT - SPEED_SLIDER_MIN,
        );
    }

    /// Slider position for the current interval (higher is faster).
    pub fn speed_slider(&self) -> u64 {
        SPEED_SLIDER_PIVOT - self.interval_ms
    }

    /// Set the speed from a slider position, snapped to the slider step.
    pub fn set_speed_slider(&mut self, position: u64) {
        let clamped = position.clamp(SPEED_SLIDER_MIN, SPEED_SLIDER_MAX);
        let snapped = SPEED_SLIDER_MIN
            + ((clamped - SPEED_SLIDER_MIN + SPEED_SLIDER_STEP / 2) / SPEED_SLIDER_STEP)
                * SPEED_SLIDER_STEP;
        self.interval_ms = SPEED_SLIDER_PIVOT - snapped.min(SPEED_SLIDER_MAX);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/scan.rs"]
mod tests;
