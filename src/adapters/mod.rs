//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Chat-completion providers and the LLM tool classifier
//! - `http` - REST endpoints

pub mod ai;
pub mod http;
