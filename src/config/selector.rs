//! Tool selector configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::tools::UnknownToolPolicy;

/// Tool selector configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectorConfig {
    /// Replaces the prompt generated from the tool registry
    pub orchestration_prompt: Option<String>,

    /// Handling of classifier output that names no registered tool
    #[serde(default)]
    pub unknown_tools: UnknownToolPolicy,
}

impl SelectorConfig {
    /// Validate selector configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self
            .orchestration_prompt
            .as_deref()
            .is_some_and(|p| p.trim().is_empty())
        {
            return Err(ValidationError::BlankOrchestrationPrompt);
        }
        Ok(())
    }
}
