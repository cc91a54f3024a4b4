use crate::{
    assist::assistant::{Assistant, ExplainRequest},
    dsp::step::{Framing, decompose_step_framed},
    foundation::{core::Signal, error::ConvoResult},
    render::svg::short_num,
};

/// Deterministic [`Assistant`] that needs no network.
///
/// Signals come from a small keyword table; explanations are templated from
/// the step decomposition the stage shows.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineAssistant;

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

impl OfflineAssistant {
    fn signal_for(description: &str) -> Option<Vec<f64>> {
        let d = description.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| d.contains(w));

        if has(&["impulse", "delta", "dirac"]) {
            Some(vec![1.0, 0.0, 0.0, 0.0, 0.0])
        } else if has(&["alternating", "alternate"]) {
            Some(vec![1.0, -1.0, 1.0, -1.0, 1.0, -1.0])
        } else if has(&["exponential", "decay"]) {
            Some((0..8).map(|k| round2(0.8_f64.powi(k))).collect())
        } else if has(&["ramp", "linear"]) {
            Some((0..6).map(f64::from).collect())
        } else if has(&["sine", "sinus", "oscillat"]) {
            Some(
                (0..9)
                    .map(|k| round2(2.0 * (std::f64::consts::TAU * f64::from(k) / 8.0).sin()))
                    .collect(),
            )
        } else if has(&["boxcar", "rectangular", "pulse"]) {
            Some(vec![0.0, 1.0, 1.0, 1.0, 1.0, 0.0])
        } else if has(&["step"]) {
            Some(vec![1.0; 8])
        } else {
            None
        }
    }

    fn explanation_for(req: &ExplainRequest) -> String {
        let step = decompose_step_framed(&req.x, &req.h, req.n, Framing::ImpulseFixed);
        let n = req.n;
        let (Some(first), Some(last)) = (step.terms.first(), step.terms.last()) else {
            return format!(
                "At n={n} the flipped copy x[{n}-k] does not overlap h[k] at all, so every \
                 product is zero and y[{n}] = 0."
            );
        };
        let products = step
            .terms
            .iter()
            .map(|t| short_num(t.value))
            .collect::<Vec<_>>()
            .join(" + ");
        let span = if first.k == last.k {
            format!("only at k={}", first.k)
        } else {
            format!("for k={} to k={}", first.k, last.k)
        };
        format!(
            "At n={n} the flipped copy x[{n}-k] sits on top of h[k] {span}. Multiplying the \
             aligned samples gives {products}, and adding them up yields y[{n}] = {}.",
            short_num(req.y_n)
        )
    }
}

impl Assistant for OfflineAssistant {
    fn generate_signal(&self, description: &str) -> ConvoResult<Option<Signal>> {
        Ok(Self::signal_for(description).map(Signal::from))
    }

    fn explain_step(&self, req: &ExplainRequest) -> ConvoResult<Option<String>> {
        Ok(Some(Self::explanation_for(req)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assist/offline.rs"]
mod tests;
