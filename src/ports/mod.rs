//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## AI Ports
//!
//! - `AIProvider` - Chat-completion providers
//! - `ToolClassifier` - Conversation → candidate tool identifiers
//!
//! ## Collaborator Ports
//!
//! - `NotificationService` - Notification delivery
//! - `BundleAnalytics` - Token bundle analysis

mod ai_provider;
mod bundle_analytics;
mod notification_service;
mod tool_classifier;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, ResponseFormat, TokenUsage,
};
pub use bundle_analytics::BundleAnalytics;
pub use notification_service::NotificationService;
pub use tool_classifier::{Classification, ClassificationRequest, ToolClassifier};
