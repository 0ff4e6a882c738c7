//! Integration tests for tools HTTP endpoints.
//!
//! These tests drive the full router (HTTP → handlers → LLM classifier →
//! mock provider) and check the tool-selection scenarios end to end.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use tool_dispatch::adapters::ai::{LlmToolClassifier, MockAIProvider, MockError};
use tool_dispatch::adapters::http::{api_router, ToolsAppState};
use tool_dispatch::application::{DispatchToolHandler, SelectToolsHandler};
use tool_dispatch::domain::bundles::{
    BundleEntry, BundleError, BundleQuery, BundleReport, SuspiciousPattern,
};
use tool_dispatch::domain::notification::{
    DeliveryReceipt, NotificationError, NotificationTarget, SetupStatus, UsernameCheck,
};
use tool_dispatch::domain::tools::{ToolRegistry, UnknownToolPolicy};
use tool_dispatch::ports::{BundleAnalytics, FinishReason, NotificationService, TokenUsage};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Notification backend that records deliveries
#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl NotificationService for RecordingNotifier {
    async fn check_username(
        &self,
        target: &NotificationTarget,
    ) -> Result<UsernameCheck, NotificationError> {
        Ok(UsernameCheck {
            username: target.resolve()?.to_string(),
            exists: true,
            can_receive: true,
        })
    }

    async fn send_notification(
        &self,
        target: &NotificationTarget,
        message: &str,
    ) -> Result<DeliveryReceipt, NotificationError> {
        let recipient = target.resolve()?.to_string();
        self.sent
            .lock()
            .unwrap()
            .push((recipient.clone(), message.to_string()));
        Ok(DeliveryReceipt {
            recipient,
            message_id: None,
        })
    }

    async fn verify_setup(
        &self,
        target: &NotificationTarget,
    ) -> Result<SetupStatus, NotificationError> {
        Ok(SetupStatus {
            recipient: target.resolve()?.to_string(),
            ready: true,
        })
    }
}

/// Bundle analytics backend returning an empty report
struct EmptyAnalytics;

#[async_trait]
impl BundleAnalytics for EmptyAnalytics {
    async fn analyze(&self, query: &BundleQuery) -> Result<BundleReport, BundleError> {
        Ok(BundleReport::from_bundles(
            query.address(),
            vec![BundleEntry {
                slot: 7,
                wallets: vec!["a".into(), "b".into()],
                supply_percentage: 3.0,
                holding_percentage: 0.0,
            }],
            BTreeSet::from([SuspiciousPattern::FreshWallets]),
        ))
    }
}

struct TestApp {
    router: Router,
    provider: Arc<MockAIProvider>,
    notifier: Arc<RecordingNotifier>,
}

fn app_with(provider: MockAIProvider, unknown_tools: UnknownToolPolicy) -> TestApp {
    let provider = Arc::new(provider);
    let notifier = Arc::new(RecordingNotifier::default());
    let registry = Arc::new(ToolRegistry::with_default_tools());

    let selector = SelectToolsHandler::with_registry(
        Arc::new(LlmToolClassifier::new(provider.clone())),
        registry.clone(),
        unknown_tools,
    );
    let dispatcher = DispatchToolHandler::new(registry.clone())
        .with_notifications(notifier.clone())
        .with_bundle_analytics(Arc::new(EmptyAnalytics));

    let router = api_router(ToolsAppState {
        registry,
        selector: Arc::new(selector),
        dispatcher: Arc::new(dispatcher),
    });

    TestApp {
        router,
        provider,
        notifier,
    }
}

fn app(provider: MockAIProvider) -> TestApp {
    app_with(provider, UnknownToolPolicy::PassThrough)
}

fn classifier_reply(tools: &[&str]) -> MockAIProvider {
    MockAIProvider::new().with_response_full(
        json!({ "tools": tools }).to_string(),
        TokenUsage::new(100, 12, 1),
        FinishReason::Stop,
    )
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn user_says(text: &str) -> Value {
    json!([{ "role": "user", "content": text }])
}

// =============================================================================
// Tool selection
// =============================================================================

#[tokio::test]
async fn empty_classifier_output_returns_null_tools() {
    let app = app(classifier_reply(&[]));

    let (status, body) = post_json(
        app.router,
        "/api/tools/select",
        json!({ "messages": user_says("thanks, that's all") }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["tools"].is_null());
    assert_eq!(body["usage"]["total_tokens"], 112);
}

#[tokio::test]
async fn no_confirmation_includes_both_baseline_tools() {
    let app = app(classifier_reply(&["analyzeBundles"]));

    let (status, body) = post_json(
        app.router,
        "/api/tools/select",
        json!({ "messages": user_says("is this token bundled?") }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["tools"],
        json!(["analyzeBundles", "askForConfirmation", "searchToken"])
    );
}

#[tokio::test]
async fn confirmation_omits_ask_for_confirmation() {
    let app = app(classifier_reply(&["sendNotification"]));

    let (_, body) = post_json(
        app.router,
        "/api/tools/select",
        json!({ "messages": user_says("yes, send it"), "confirmation": "yes" }),
    )
    .await;

    assert_eq!(body["tools"], json!(["searchToken", "sendNotification"]));
}

#[tokio::test]
async fn repeated_candidates_are_deduplicated() {
    let app = app(classifier_reply(&["searchToken", "searchToken", "analyzeBundles"]));

    let (_, body) = post_json(
        app.router,
        "/api/tools/select",
        json!({ "messages": user_says("find BONK and check bundles"), "confirmation": "ok" }),
    )
    .await;

    assert_eq!(body["tools"], json!(["analyzeBundles", "searchToken"]));
}

#[tokio::test]
async fn blank_confirmation_counts_as_absent() {
    let app = app(classifier_reply(&["verifyNotificationSetup"]));

    let (_, body) = post_json(
        app.router,
        "/api/tools/select",
        json!({ "messages": user_says("am I set up?"), "confirmation": "   " }),
    )
    .await;

    assert_eq!(
        body["tools"],
        json!(["askForConfirmation", "searchToken", "verifyNotificationSetup"])
    );
}

#[tokio::test]
async fn absent_messages_still_classify_once() {
    let app = app(classifier_reply(&[]));
    let provider = app.provider.clone();

    let (status, _) = post_json(app.router, "/api/tools/select", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(provider.call_count(), 1);
    assert!(provider.get_calls()[0].messages.is_empty());
}

#[tokio::test]
async fn unknown_ids_pass_through_by_default() {
    let app = app(classifier_reply(&["launchRocket"]));

    let (_, body) = post_json(
        app.router,
        "/api/tools/select",
        json!({ "messages": user_says("go") }),
    )
    .await;

    assert_eq!(
        body["tools"],
        json!(["askForConfirmation", "launchRocket", "searchToken"])
    );
}

#[tokio::test]
async fn unknown_ids_can_be_dropped() {
    let app = app_with(classifier_reply(&["launchRocket"]), UnknownToolPolicy::Drop);

    let (_, body) = post_json(
        app.router,
        "/api/tools/select",
        json!({ "messages": user_says("go") }),
    )
    .await;

    assert_eq!(body["tools"], json!(["askForConfirmation", "searchToken"]));
}

#[tokio::test]
async fn rate_limit_maps_to_429() {
    let app = app(MockAIProvider::new().with_error(MockError::RateLimited {
        retry_after_secs: 20,
    }));

    let (status, body) = post_json(
        app.router,
        "/api/tools/select",
        json!({ "messages": user_says("hi") }),
    )
    .await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["code"], "RATE_LIMITED");
    assert_eq!(body["details"]["retry_after_secs"], 20);
}

#[tokio::test]
async fn malformed_classifier_output_maps_to_502() {
    let app = app(MockAIProvider::new().with_response("searchToken, analyzeBundles"));

    let (status, body) = post_json(
        app.router,
        "/api/tools/select",
        json!({ "messages": user_says("hi") }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "CLASSIFIER_OUTPUT_INVALID");
}

#[tokio::test]
async fn classifier_timeout_maps_to_504() {
    let app = app(MockAIProvider::new().with_error(MockError::Timeout { timeout_secs: 30 }));

    let (status, _) = post_json(
        app.router,
        "/api/tools/select",
        json!({ "messages": user_says("hi") }),
    )
    .await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn invalid_session_id_is_rejected() {
    let app = app(classifier_reply(&[]));
    let provider = app.provider.clone();

    let (status, body) = post_json(
        app.router,
        "/api/tools/select",
        json!({ "messages": user_says("hi"), "session_id": "not-a-uuid" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(provider.call_count(), 0);
}

// =============================================================================
// Tool listing and invocation
// =============================================================================

#[tokio::test]
async fn lists_registered_tools() {
    let app = app(MockAIProvider::new());

    let (status, body) = get(app.router, "/api/tools").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["format"], "native");
    assert_eq!(body["count"], 6);
    let search = body["tools"]
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["name"] == "searchToken")
        .unwrap();
    assert_eq!(search["execution"], "client");
}

#[tokio::test]
async fn lists_tools_in_openai_format() {
    let app = app(MockAIProvider::new());

    let (_, body) = get(app.router, "/api/tools?format=openai").await;

    assert_eq!(body["format"], "openai");
    assert_eq!(body["tools"][0]["type"], "function");
}

#[tokio::test]
async fn invoke_sends_notification_to_stored_identity() {
    let app = app(MockAIProvider::new());
    let notifier = app.notifier.clone();

    let (status, body) = post_json(
        app.router,
        "/api/tools/invoke",
        json!({
            "tool_name": "sendNotification",
            "parameters": { "message": "BONK is up 20%" },
            "user_id": "user-1",
            "stored_identity": "alice"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["recipient"], "alice");
    assert_eq!(notifier.sent.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn invoke_without_recipient_reports_missing_recipient() {
    let app = app(MockAIProvider::new());

    let (status, body) = post_json(
        app.router,
        "/api/tools/invoke",
        json!({
            "tool_name": "sendNotification",
            "parameters": { "message": "gm" },
            "user_id": "user-1"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "MISSING_RECIPIENT");
}

#[tokio::test]
async fn invoke_analyze_bundles_returns_report() {
    let app = app(MockAIProvider::new());

    let (_, body) = post_json(
        app.router,
        "/api/tools/invoke",
        json!({
            "tool_name": "analyzeBundles",
            "parameters": { "address": "Mint111", "min_group_size": 2 },
            "user_id": "user-1"
        }),
    )
    .await;

    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["totals"]["wallet_count"], 2);
    assert_eq!(body["data"]["suspicious_patterns"], json!(["fresh_wallets"]));
}

#[tokio::test]
async fn invoke_client_side_tool_is_an_error_outcome() {
    let app = app(MockAIProvider::new());

    let (status, body) = post_json(
        app.router,
        "/api/tools/invoke",
        json!({ "tool_name": "askForConfirmation", "user_id": "user-1" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"]["code"], "CLIENT_SIDE_TOOL");
}

#[tokio::test]
async fn invoke_unknown_tool_is_404() {
    let app = app(MockAIProvider::new());

    let (status, body) = post_json(
        app.router,
        "/api/tools/invoke",
        json!({ "tool_name": "launchRocket", "user_id": "user-1" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "UNKNOWN_TOOL");
}

#[tokio::test]
async fn invoke_with_blank_user_is_rejected() {
    let app = app(MockAIProvider::new());

    let (status, body) = post_json(
        app.router,
        "/api/tools/invoke",
        json!({ "tool_name": "verifyNotificationSetup", "user_id": "  " }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}
