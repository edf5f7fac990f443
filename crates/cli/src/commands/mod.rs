//! CLI subcommands.

pub mod connection;
pub mod tools;

use shopify_admin_mcp::config::ConfigError;
use shopify_admin_mcp::shopify::ShopifyError;
use shopify_admin_mcp::tools::ToolError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Environment is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Shopify request failed.
    #[error(transparent)]
    Shopify(#[from] ShopifyError),

    /// Tool execution failed.
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// `--input` is not a JSON object.
    #[error("Invalid --input: {0}")]
    Input(String),
}

fn client() -> Result<shopify_admin_mcp::AdminClient, CliError> {
    dotenvy::dotenv().ok();
    let config = shopify_admin_mcp::ShopifyConfig::from_env()?;
    Ok(shopify_admin_mcp::AdminClient::new(&config)?)
}
