//! Tool listing and direct execution.

use shopify_admin_mcp::tools::{self, ToolExecutor};

use super::CliError;

/// Print tool names and descriptions.
#[allow(clippy::print_stdout)]
pub fn list(domain: Option<&str>) {
    let tools = domain.map_or_else(tools::all_tools, tools::get_tools_by_domain);

    for tool in tools {
        let access = if tool.read_only { "read " } else { "write" };
        println!("{access}  {:<28} {}", tool.name, tool.description);
    }
}

/// Run one tool and print its JSON result.
///
/// # Errors
///
/// Returns an error if `input` is not a JSON object, configuration is
/// missing, or the tool fails.
#[allow(clippy::print_stdout)]
pub async fn call(tool: &str, input: &str) -> Result<(), CliError> {
    let input = parse_input(input)?;
    let client = super::client()?;

    let output = ToolExecutor::new(&client).execute(tool, &input).await?;
    println!("{output}");
    Ok(())
}

fn parse_input(input: &str) -> Result<serde_json::Value, CliError> {
    let value: serde_json::Value =
        serde_json::from_str(input).map_err(|e| CliError::Input(e.to_string()))?;
    if !value.is_object() {
        return Err(CliError::Input("expected a JSON object".to_string()));
    }
    Ok(value)
}
