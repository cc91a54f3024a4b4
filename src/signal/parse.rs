use crate::foundation::{
    core::Signal,
    error::{ConvoError, ConvoResult},
};

/// Parse a comma-separated list of samples, e.g. `"0.1, 0.5, 1"` or `"[1, 1, 1]"`.
///
/// Parsing is lenient: entries that are not finite reals are dropped. Only a
/// list with no surviving sample is an error.
pub fn parse_signal(text: &str) -> ConvoResult<Signal> {
    let body = text.trim();
    let body = body.strip_prefix('[').unwrap_or(body);
    let body = body.strip_suffix(']').unwrap_or(body);

    let samples: Vec<f64> = body
        .split(',')
        .filter_map(|part| part.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .collect();

    if samples.is_empty() {
        return Err(ConvoError::parse(format!(
            "no numeric samples in '{}'",
            text.trim()
        )));
    }
    Ok(Signal::new(samples))
}

/// Render samples the way they are typed: `0.1, 0.5, 1`.
pub fn format_signal(samples: &[f64]) -> String {
    samples
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "../../tests/unit/signal/parse.rs"]
mod tests;
