//! Outcome of a tool-selection pass.

use std::collections::BTreeSet;

use super::ToolId;

/// Which tools the assistant may invoke on the next turn.
///
/// `NoneRequired` means the classifier asked for nothing. It is deliberately
/// distinct from an empty set: whenever tools are selected at all, the set
/// carries at least the baseline and is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolSelection {
    /// The conversation needs no tools this turn.
    NoneRequired,
    /// Non-empty, duplicate-free set of tools to activate.
    Tools(BTreeSet<ToolId>),
}

impl ToolSelection {
    /// Returns true if no tools are required.
    pub fn is_none_required(&self) -> bool {
        matches!(self, Self::NoneRequired)
    }

    /// Returns the selected set, if any.
    pub fn tools(&self) -> Option<&BTreeSet<ToolId>> {
        match self {
            Self::NoneRequired => None,
            Self::Tools(tools) => Some(tools),
        }
    }

    /// Returns true if `tool` is part of the selection.
    pub fn contains(&self, tool: &str) -> bool {
        self.tools()
            .is_some_and(|tools| tools.iter().any(|t| t == tool))
    }

    /// Number of selected tools (zero for `NoneRequired`).
    pub fn len(&self) -> usize {
        self.tools().map_or(0, BTreeSet::len)
    }

    /// Selected identifiers as strings, `None` when no tools are required.
    pub fn to_names(&self) -> Option<Vec<String>> {
        self.tools()
            .map(|tools| tools.iter().map(|t| t.as_str().to_string()).collect())
    }
}
