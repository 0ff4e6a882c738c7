//! DispatchTool command handler.
//!
//! Routes a tool call to the collaborator that serves it and converts the
//! result into a render-ready [`ToolOutcome`]. Caller identity arrives with
//! every call; the handler keeps no per-user state.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::bundles::BundleQuery;
use crate::domain::notification::{NotificationError, NotificationTarget};
use crate::domain::tools::{
    CallerContext, ToolCall, ToolErrorCode, ToolExecution, ToolId, ToolOutcome, ToolRegistry,
};
use crate::ports::{BundleAnalytics, NotificationService};

/// Handler for server-side tool invocation.
pub struct DispatchToolHandler {
    registry: Arc<ToolRegistry>,
    notifications: Option<Arc<dyn NotificationService>>,
    bundles: Option<Arc<dyn BundleAnalytics>>,
}

impl DispatchToolHandler {
    /// Creates a handler with no backends attached.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            notifications: None,
            bundles: None,
        }
    }

    /// Attaches the notification backend.
    pub fn with_notifications(mut self, service: Arc<dyn NotificationService>) -> Self {
        self.notifications = Some(service);
        self
    }

    /// Attaches the bundle analytics backend.
    pub fn with_bundle_analytics(mut self, service: Arc<dyn BundleAnalytics>) -> Self {
        self.bundles = Some(service);
        self
    }

    /// Executes `call` on behalf of `caller`.
    pub async fn handle(&self, call: ToolCall, caller: CallerContext) -> ToolOutcome {
        let Some(definition) = self.registry.get_tool(call.name()) else {
            tracing::warn!(tool = call.name(), "unknown tool invoked");
            return ToolOutcome::failure(
                call.name(),
                ToolErrorCode::UnknownTool,
                format!("Unknown tool: {}", call.name()),
            );
        };

        if definition.execution() == ToolExecution::Client {
            return ToolOutcome::failure(
                call.name(),
                ToolErrorCode::ClientSideTool,
                format!("{} is handled by the chat client", call.name()),
            );
        }

        tracing::debug!(tool = call.name(), user_id = %caller.user_id, "dispatching tool");

        let outcome = match call.name() {
            ToolId::ANALYZE_BUNDLES => self.analyze_bundles(&call).await,
            ToolId::SEND_NOTIFICATION => self.send_notification(&call, &caller).await,
            ToolId::CHECK_NOTIFICATION_USERNAME => self.check_username(&call, &caller).await,
            ToolId::VERIFY_NOTIFICATION_SETUP => self.verify_setup(&call, &caller).await,
            other => unavailable(other),
        };

        if let Some(error) = outcome.error() {
            tracing::info!(tool = call.name(), code = %error.code, "tool failed");
        }
        outcome
    }

    async fn analyze_bundles(&self, call: &ToolCall) -> ToolOutcome {
        let tool = call.name();
        let Some(service) = &self.bundles else {
            return unavailable(tool);
        };

        let min_group_size = match call.parameters().get("min_group_size") {
            None | Some(serde_json::Value::Null) => None,
            Some(value) => match value.as_u64() {
                Some(n) => Some(n),
                None => {
                    return invalid_parameters(tool, "min_group_size must be a positive integer")
                }
            },
        };

        let query = match BundleQuery::new(call.str_param("address").unwrap_or_default(), min_group_size) {
            Ok(query) => query,
            Err(err) => return invalid_parameters(tool, err.to_string()),
        };

        match service.analyze(&query).await {
            Ok(report) => success(tool, &report),
            Err(err) => ToolOutcome::failure(tool, ToolErrorCode::ExecutionFailed, err.to_string()),
        }
    }

    async fn send_notification(&self, call: &ToolCall, caller: &CallerContext) -> ToolOutcome {
        let tool = call.name();
        let Some(service) = &self.notifications else {
            return unavailable(tool);
        };

        let Some(message) = call.str_param("message") else {
            return invalid_parameters(tool, "message is required");
        };

        let target = match resolved_target(call, caller) {
            Ok(target) => target,
            Err(err) => return notification_failure(tool, err),
        };

        match service.send_notification(&target, message).await {
            Ok(receipt) => success(tool, &receipt),
            Err(err) => notification_failure(tool, err),
        }
    }

    async fn check_username(&self, call: &ToolCall, caller: &CallerContext) -> ToolOutcome {
        let tool = call.name();
        let Some(service) = &self.notifications else {
            return unavailable(tool);
        };

        let target = match resolved_target(call, caller) {
            Ok(target) => target,
            Err(err) => return notification_failure(tool, err),
        };

        match service.check_username(&target).await {
            Ok(check) => success(tool, &check),
            Err(err) => notification_failure(tool, err),
        }
    }

    async fn verify_setup(&self, call: &ToolCall, caller: &CallerContext) -> ToolOutcome {
        let tool = call.name();
        let Some(service) = &self.notifications else {
            return unavailable(tool);
        };

        let target = match resolved_target(call, caller) {
            Ok(target) => target,
            Err(err) => return notification_failure(tool, err),
        };

        match service.verify_setup(&target).await {
            Ok(status) => success(tool, &status),
            Err(err) => notification_failure(tool, err),
        }
    }
}

/// Builds the notification target and fails fast when nothing resolves.
fn resolved_target(
    call: &ToolCall,
    caller: &CallerContext,
) -> Result<NotificationTarget, NotificationError> {
    let target = NotificationTarget::new(
        caller.stored_identity.clone(),
        call.str_param("recipient").map(str::to_string),
    );
    target.resolve()?;
    Ok(target)
}

fn success<T: Serialize>(tool: &str, payload: &T) -> ToolOutcome {
    match serde_json::to_value(payload) {
        Ok(data) => ToolOutcome::success(tool, data),
        Err(err) => ToolOutcome::failure(tool, ToolErrorCode::ExecutionFailed, err.to_string()),
    }
}

fn notification_failure(tool: &str, err: NotificationError) -> ToolOutcome {
    ToolOutcome::failure(tool, err.code(), err.to_string())
}

fn invalid_parameters(tool: &str, message: impl Into<String>) -> ToolOutcome {
    ToolOutcome::failure(tool, ToolErrorCode::InvalidParameters, message)
}

fn unavailable(tool: &str) -> ToolOutcome {
    ToolOutcome::failure(
        tool,
        ToolErrorCode::ToolUnavailable,
        format!("{} is not configured on this server", tool),
    )
}
