use crate::{
    foundation::core::{Signal, SignalRole},
    signal::parse::{format_signal, parse_signal},
};

/// Result of committing the draft text.
#[derive(Clone, Debug, PartialEq)]
pub enum CommitOutcome {
    /// The draft parsed; this is the new committed signal.
    Committed(Signal),
    /// The draft held no sample; it was reset to the committed value.
    Reverted,
}

/// Text-editing surface for one operand.
///
/// Keeps the last committed signal next to the free-form draft the user is
/// typing. Committing either adopts the draft or throws it away, so the
/// committed value is always a non-empty, finite signal once set.
#[derive(Clone, Debug)]
pub struct SignalEditor {
    role: SignalRole,
    value: Signal,
    draft: String,
}

impl SignalEditor {
    /// Editor seeded with an initial value.
    pub fn new(role: SignalRole, value: Signal) -> Self {
        let draft = format_signal(&value);
        Self { role, value, draft }
    }

    /// Operand this editor controls.
    pub fn role(&self) -> SignalRole {
        self.role
    }

    /// Last committed signal.
    pub fn value(&self) -> &Signal {
        &self.value
    }

    /// Current draft text.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Committed sample count.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// True when nothing has been committed.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the draft without committing.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Adopt the draft if it parses, otherwise revert it.
    pub fn commit(&mut self) -> CommitOutcome {
        match parse_signal(&self.draft) {
            Ok(signal) => {
                self.draft = format_signal(&signal);
                self.value = signal.clone();
                CommitOutcome::Committed(signal)
            }
            Err(err) => {
                tracing::debug!(role = ?self.role, %err, "draft reverted");
                self.draft = format_signal(&self.value);
                CommitOutcome::Reverted
            }
        }
    }

    /// Set value and draft together, e.g. from a generated signal.
    pub fn replace(&mut self, signal: Signal) {
        self.draft = format_signal(&signal);
        self.value = signal;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/signal/editor.rs"]
mod tests;
