//! AI Provider Adapters.
//!
//! Implementations of the AIProvider and ToolClassifier ports.
//!
//! ## Available Adapters
//!
//! - `MockAIProvider` - Configurable mock for testing
//! - `OpenAIProvider` - OpenAI chat completions with structured outputs
//! - `LlmToolClassifier` - Tool classification over any `AIProvider`

mod llm_tool_classifier;
mod mock_provider;
mod openai_provider;

pub use llm_tool_classifier::{LlmToolClassifier, TOOL_SELECTION_SCHEMA_NAME};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};
