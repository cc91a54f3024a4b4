use crate::{
    assist::assistant::ExplainRequest,
    foundation::{
        core::Signal,
        error::{ConvoError, ConvoResult},
    },
    signal::parse::format_signal,
};

/// Prompt asking for a short sample sequence matching `description`.
pub fn signal_prompt(description: &str) -> String {
    format!(
        "Generate a discrete-time signal (an array of numbers) matching this description: \
         \"{}\".\n\
         The signal should be short, ideally between 5 and 15 samples, so it fits a teaching \
         visualization.\n\
         Keep the values on a reasonable scale (e.g. between -5 and 5).",
        description.trim()
    )
}

/// Prompt asking for an intuitive explanation of step `req.n`.
pub fn explain_prompt(req: &ExplainRequest, language: &str) -> String {
    format!(
        "Briefly explain step n={n} of a discrete convolution.\n\
         Input signal x: [{x}].\n\
         Impulse response h: [{h}].\n\
         At this step we are computing y[{n}] and the sum equals {y}.\n\
         The visualization shows the flipped and shifted signal x[n-k] sliding over the fixed \
         signal h[k].\n\
         Explain intuitively how the overlap produces this value. Answer in {language}, in a \
         few sentences.",
        n = req.n,
        x = format_signal(&req.x),
        h = format_signal(&req.h),
        y = req.y_n,
    )
}

/// Parse a model reply that should be a JSON array of numbers.
///
/// Text that is not JSON at all is an `Assist` error. Valid JSON that is not a non-empty
/// array of numbers is `Ok(None)`.
pub fn parse_signal_reply(text: &str) -> ConvoResult<Option<Signal>> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| ConvoError::assist(format!("signal reply is not valid JSON: {e}")))?;
    let Some(items) = value.as_array() else {
        return Ok(None);
    };
    Ok(items
        .iter()
        .map(serde_json::Value::as_f64)
        .collect::<Option<Vec<f64>>>()
        .filter(|v| !v.is_empty())
        .map(Signal::from))
}

#[cfg(test)]
#[path = "../../tests/unit/assist/prompt.rs"]
mod tests;
