use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tool_dispatch::adapters::ai::{LlmToolClassifier, OpenAIProvider};
use tool_dispatch::adapters::http::{api_router, ToolsAppState};
use tool_dispatch::application::{
    default_orchestration_prompt, DispatchToolHandler, SelectToolsHandler,
};
use tool_dispatch::config::AppConfig;
use tool_dispatch::domain::tools::{SelectionPolicy, ToolRegistry};

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let registry = Arc::new(ToolRegistry::with_default_tools());

    let provider = Arc::new(OpenAIProvider::new(config.ai.openai_config()?)?);
    let classifier = Arc::new(
        LlmToolClassifier::new(provider)
            .with_max_tokens(config.ai.max_tokens)
            .with_temperature(config.ai.temperature),
    );

    let instruction = config
        .selector
        .orchestration_prompt
        .clone()
        .unwrap_or_else(|| default_orchestration_prompt(&registry));
    let selector = SelectToolsHandler::new(
        classifier,
        SelectionPolicy::new(registry.clone(), config.selector.unknown_tools),
        instruction,
    );

    // Notification and bundle backends are deployment-specific and not bundled.
    let dispatcher = DispatchToolHandler::new(registry.clone());
    tracing::warn!("no notification or bundle analytics backend configured; server-side tools will report TOOL_UNAVAILABLE");

    let state = ToolsAppState {
        registry,
        selector: Arc::new(selector),
        dispatcher: Arc::new(dispatcher),
    };

    let app = api_router(state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        model = %config.ai.model,
        unknown_tools = ?config.selector.unknown_tools,
        "tool-dispatch listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
