//! Shopify Admin MCP CLI - Operator tools for the MCP server.
//!
//! # Usage
//!
//! ```bash
//! # Check credentials and print shop details
//! sam-cli test-connection
//!
//! # List tools, optionally for one domain
//! sam-cli tools --domain collections
//!
//! # Run one tool without an MCP client
//! sam-cli call get_collection --input '{"handle": "sale", "include_all_products": true}'
//! ```
//!
//! # Commands
//!
//! - `test-connection` - Verify configuration against the store
//! - `tools` - List available tools
//! - `call` - Execute a tool and print its JSON result

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "sam-cli")]
#[command(author, version, about = "Shopify Admin MCP CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify the configured store credentials
    TestConnection,
    /// List available tools
    Tools {
        /// Only tools in this domain (store, orders, collections, blogs, themes, menus, products)
        #[arg(short, long)]
        domain: Option<String>,
    },
    /// Execute a tool directly
    Call {
        /// Tool name, e.g. `get_collections`
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(short, long, default_value = "{}")]
        input: String,
    },
}

#[tokio::main]
async fn main() {
    // Logs on stderr so results can be piped
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::TestConnection => commands::connection::test_connection().await?,
        Commands::Tools { domain } => commands::tools::list(domain.as_deref()),
        Commands::Call { tool, input } => commands::tools::call(&tool, &input).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_call_defaults_to_empty_input() {
        let cli = Cli::try_parse_from(["sam-cli", "call", "get_blogs"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Call { ref tool, ref input }) if tool == "get_blogs" && input == "{}"
        ));
    }
}
