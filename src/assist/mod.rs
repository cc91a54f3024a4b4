pub(crate) mod assistant;
#[cfg(feature = "assist")]
pub(crate) mod gemini;
pub(crate) mod offline;
pub(crate) mod prompt;
pub(crate) mod request;
