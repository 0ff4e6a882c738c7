//! Confirmation signal - evidence that a "please confirm" exchange is resolved.

/// Result of a prior confirmation prompt, if the caller is resuming after one.
///
/// Only presence matters to the selection policy; the answer text is kept
/// for logging. Blank strings are treated as no answer at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmationSignal(Option<String>);

impl ConfirmationSignal {
    /// No confirmation exchange has happened.
    pub fn absent() -> Self {
        Self(None)
    }

    /// The user answered a confirmation prompt with `answer`.
    pub fn answered(answer: impl Into<String>) -> Self {
        Self::from_optional(Some(answer.into()))
    }

    /// Builds a signal from the caller's optional reply.
    pub fn from_optional(answer: Option<String>) -> Self {
        Self(answer.filter(|a| !a.trim().is_empty()))
    }

    /// Returns true if a confirmation was already answered.
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// The recorded answer, if any.
    pub fn answer(&self) -> Option<&str> {
        self.0.as_deref()
    }
}
