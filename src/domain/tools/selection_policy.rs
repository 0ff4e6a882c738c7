//! Selection policy - deterministic rules layered over classifier output.
//!
//! The classifier is not trusted to include flow-control tools on every
//! turn, so a baseline is unioned into every non-empty selection. Baseline
//! membership depends only on the confirmation signal:
//!
//! | confirmation signal | baseline                                  |
//! |---------------------|-------------------------------------------|
//! | absent              | `searchToken`, `askForConfirmation`       |
//! | present             | `searchToken`                             |
//!
//! An empty candidate list is terminal: the result is
//! [`ToolSelection::NoneRequired`] and no baseline is added.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Deserialize;

use super::{ToolId, ToolRegistry, ToolSelection};
use crate::domain::conversation::ConfirmationSignal;

/// What to do with candidate identifiers the registry does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownToolPolicy {
    /// Keep them; downstream consumers decide what to ignore.
    #[default]
    PassThrough,
    /// Remove them before the baseline union.
    Drop,
}

/// Turns raw classifier candidates into the final tool selection.
#[derive(Debug, Clone)]
pub struct SelectionPolicy {
    registry: Arc<ToolRegistry>,
    unknown_tools: UnknownToolPolicy,
}

impl SelectionPolicy {
    /// Creates a policy that checks candidates against `registry`.
    pub fn new(registry: Arc<ToolRegistry>, unknown_tools: UnknownToolPolicy) -> Self {
        Self {
            registry,
            unknown_tools,
        }
    }

    /// Policy over the default registry that passes unknown ids through.
    pub fn pass_through() -> Self {
        Self::new(
            Arc::new(ToolRegistry::with_default_tools()),
            UnknownToolPolicy::PassThrough,
        )
    }

    /// Returns the configured unknown-identifier handling.
    pub fn unknown_tools(&self) -> UnknownToolPolicy {
        self.unknown_tools
    }

    /// Mandatory tools for a non-empty selection.
    pub fn baseline(signal: &ConfirmationSignal) -> BTreeSet<ToolId> {
        let mut baseline = BTreeSet::from([ToolId::search_token()]);
        if !signal.is_present() {
            baseline.insert(ToolId::ask_for_confirmation());
        }
        baseline
    }

    /// Candidates that are not in the registry, in input order.
    pub fn unknown_candidates<'a>(&self, candidates: &'a [String]) -> Vec<&'a str> {
        candidates
            .iter()
            .map(String::as_str)
            .filter(|c| !self.registry.has_tool(c))
            .collect()
    }

    /// Applies the policy to the raw classifier output.
    ///
    /// Emptiness is judged on `candidates` as given: a non-empty list always
    /// yields at least the baseline, even if every candidate is filtered out.
    /// Candidates are kept byte-for-byte; under [`UnknownToolPolicy::Drop`]
    /// anything the registry does not list is removed, blank ids included.
    pub fn select(&self, candidates: &[String], signal: &ConfirmationSignal) -> ToolSelection {
        if candidates.is_empty() {
            return ToolSelection::NoneRequired;
        }

        let mut tools = Self::baseline(signal);
        for candidate in candidates {
            if self.unknown_tools == UnknownToolPolicy::Drop && !self.registry.has_tool(candidate) {
                continue;
            }
            tools.insert(ToolId::new(candidate.as_str()));
        }

        ToolSelection::Tools(tools)
    }
}
