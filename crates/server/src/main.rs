//! Shopify Admin MCP server.
//!
//! Speaks MCP over stdin/stdout. Logs go to stderr.
//!
//! # Security
//!
//! This binary holds the HIGH PRIVILEGE Shopify Admin API token. Run it only
//! as a local subprocess of a trusted MCP client.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;

use rmcp::ServiceExt;
use sentry::integrations::tracing as sentry_tracing;
use shopify_admin_mcp::config::LogFormat;
use shopify_admin_mcp::{AdminClient, McpConfig, ShopifyConfig, ShopifyError, ShopifyMcpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &McpConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            sample_rate: config.sentry_sample_rate,
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        tracing::Level::TRACE => sentry_tracing::EventFilter::Ignore,
    }
}

fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopify_admin_mcp=info".into());

    // stdout carries the protocol
    let json_layer = (format == LogFormat::Json).then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (format == LogFormat::Text).then(|| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

/// Fatal errors after configuration has loaded.
#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error("Failed to initialize Shopify client: {0}")]
    Client(#[from] ShopifyError),

    #[error("Failed to start MCP service: {0}")]
    Start(String),

    #[error("MCP service terminated with error: {0}")]
    Terminated(String),
}

async fn run(config: &ShopifyConfig) -> Result<(), ServerError> {
    let client = AdminClient::new(config)?;

    tracing::info!(
        shop = %config.shop_domain,
        api_version = %config.api_version,
        "Starting Shopify Admin MCP server on stdio"
    );

    let service = ShopifyMcpServer::new(client)
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| ServerError::Start(e.to_string()))?;

    service
        .waiting()
        .await
        .map_err(|e| ServerError::Terminated(e.to_string()))?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match McpConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::Text);
            tracing::error!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Dropped after the error below is logged, which flushes it to Sentry
    let _sentry_guard = init_sentry(&config);
    init_tracing(config.log_format);

    match run(&config.shopify).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
