//! MCP server over stdio.
//!
//! `list_tools` exposes [`crate::tools::all_tools`]; `call_tool` dispatches
//! through [`ToolExecutor`]. Operation failures come back as error-flagged
//! tool results carrying the failure's message, so the model can read them.

use std::future::Future;
use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, JsonObject, ListToolsResult,
        PaginatedRequestParam, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
};
use tracing::{error, info};

use crate::shopify::AdminClient;
use crate::tools::{self, Tool, ToolError, ToolExecutor};

const INSTRUCTIONS: &str = "Shopify Admin tools for one store: monthly product rankings, \
collections (list, read, create, add products in order, duplicate), blog articles, theme \
assets, navigation menus and product lookup. IDs are Shopify GIDs such as \
gid://shopify/Collection/123; theme IDs are numeric.";

/// MCP handler bound to one store.
#[derive(Debug, Clone)]
pub struct ShopifyMcpServer {
    client: AdminClient,
}

impl ShopifyMcpServer {
    #[must_use]
    pub const fn new(client: AdminClient) -> Self {
        Self { client }
    }

    /// Run one tool call and shape the outcome as an MCP tool result.
    ///
    /// # Errors
    ///
    /// Returns `invalid_params` for a tool name that is not in the table.
    /// Every other failure is reported inside the result.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let input = arguments.map_or(serde_json::Value::Null, serde_json::Value::Object);

        match ToolExecutor::new(&self.client).execute(name, &input).await {
            Ok(text) => {
                info!(tool = name, "Tool call succeeded");
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(e @ ToolError::UnknownTool(_)) => Err(McpError::invalid_params(e.to_string(), None)),
            Err(e) => {
                error!(tool = name, error = %e, "Tool call failed");
                Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
            }
        }
    }
}

fn to_mcp_tool(tool: Tool) -> rmcp::model::Tool {
    let schema = match tool.input_schema {
        serde_json::Value::Object(map) => map,
        _ => JsonObject::new(),
    };
    rmcp::model::Tool::new(tool.name, tool.description, Arc::new(schema))
}

impl ServerHandler for ShopifyMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        async move {
            let tools = tools::all_tools().into_iter().map(to_mcp_tool).collect();
            Ok(ListToolsResult::with_all_items(tools))
        }
    }

    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move { self.dispatch(&request.name, request.arguments).await }
    }
}
