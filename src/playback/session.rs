use crate::{
    dsp::{
        cache::ConvolutionCache,
        convolve::output_len,
        step::{StepDecomposition, decompose_step},
    },
    foundation::core::{Signal, SignalRole, sample_at},
    playback::scan::{Scan, TickOutcome},
    signal::editor::{CommitOutcome, SignalEditor},
};

/// Input signal the interactive tool opens with.
pub const DEFAULT_X: [f64; 4] = [0.1, 0.5, 1.0, 1.5];
/// Impulse response the interactive tool opens with.
pub const DEFAULT_H: [f64; 3] = [1.0, 1.0, 1.0];

/// Everything one visualization holds: both operands, the scan, the memoized
/// output and the last explanation text.
///
/// Any change to `x` or `h` resets the scan and drops the explanation.
#[derive(Clone, Debug)]
pub struct Session {
    x: SignalEditor,
    h: SignalEditor,
    scan: Scan,
    cache: ConvolutionCache,
    explanation: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Signal::from(DEFAULT_X.to_vec()), Signal::from(DEFAULT_H.to_vec()))
    }
}

impl Session {
    /// Session over the given operands, scan at 0.
    pub fn new(x: Signal, h: Signal) -> Self {
        Self {
            x: SignalEditor::new(SignalRole::Input, x),
            h: SignalEditor::new(SignalRole::Impulse, h),
            scan: Scan::new(),
            cache: ConvolutionCache::new(),
            explanation: None,
        }
    }

    /// Input signal.
    pub fn x(&self) -> &Signal {
        self.x.value()
    }

    /// Impulse response.
    pub fn h(&self) -> &Signal {
        self.h.value()
    }

    /// Operand by role.
    pub fn signal(&self, role: SignalRole) -> &Signal {
        self.editor(role).value()
    }

    /// Editor by role.
    pub fn editor(&self, role: SignalRole) -> &SignalEditor {
        match role {
            SignalRole::Input => &self.x,
            SignalRole::Impulse => &self.h,
        }
    }

    fn editor_mut(&mut self, role: SignalRole) -> &mut SignalEditor {
        match role {
            SignalRole::Input => &mut self.x,
            SignalRole::Impulse => &mut self.h,
        }
    }

    /// Replace an operand outright and reset.
    pub fn set_signal(&mut self, role: SignalRole, signal: Signal) {
        self.editor_mut(role).replace(signal);
        self.reset();
    }

    /// Update an operand's draft text.
    pub fn set_draft(&mut self, role: SignalRole, text: impl Into<String>) {
        self.editor_mut(role).set_draft(text);
    }

    /// Commit an operand's draft; resets only when a new value was adopted.
    pub fn commit(&mut self, role: SignalRole) -> CommitOutcome {
        let outcome = self.editor_mut(role).commit();
        if matches!(outcome, CommitOutcome::Committed(_)) {
            self.reset();
        }
        outcome
    }

    /// Scan state.
    pub fn scan(&self) -> &Scan {
        &self.scan
    }

    /// Mutable scan state (interval, direct jumps).
    pub fn scan_mut(&mut self) -> &mut Scan {
        &mut self.scan
    }

    /// Current scanning index.
    pub fn n(&self) -> i64 {
        self.scan.n()
    }

    /// `|x| + |h| - 1`, or 0.
    pub fn output_len(&self) -> usize {
        output_len(self.x().len(), self.h().len())
    }

    /// Full output `y = x * h`, memoized on the operands.
    pub fn output(&mut self) -> &[f64] {
        self.cache.get_or_compute(self.x.value(), self.h.value())
    }

    /// Cache counters `(hits, misses)`.
    pub fn cache_stats(&self) -> (u64, u64) {
        (self.cache.hits(), self.cache.misses())
    }

    /// `y[n]` when `n` is inside the output.
    pub fn current_value(&mut self) -> Option<f64> {
        let n = self.n();
        sample_at(self.output(), n)
    }

    /// Overlap at the current index (k over `x`).
    pub fn current_step(&self) -> StepDecomposition {
        decompose_step(self.x(), self.h(), self.n())
    }

    /// Start playback.
    pub fn play(&mut self) {
        self.scan.play();
    }

    /// Pause playback.
    pub fn pause(&mut self) {
        self.scan.pause();
    }

    /// Flip playback.
    pub fn toggle(&mut self) {
        self.scan.toggle();
    }

    /// Playback timer tick.
    pub fn tick(&mut self) -> TickOutcome {
        let len = self.output_len();
        self.scan.tick(len)
    }

    /// Manual step, clamped.
    pub fn step(&mut self, delta: i64) -> i64 {
        let len = self.output_len();
        self.scan.step(delta, len)
    }

    /// Back to index 0, paused, explanation cleared.
    pub fn reset(&mut self) {
        self.scan.reset();
        self.explanation = None;
    }

    /// Last explanation text, if any.
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    /// Store an explanation for the current index.
    pub fn set_explanation(&mut self, text: impl Into<String>) {
        self.explanation = Some(text.into());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/session.rs"]
mod tests;
