//! Common types shared across Shopify Admin API responses.

use serde::{Deserialize, Serialize};

// =============================================================================
// Connection Types
// =============================================================================

/// Relay-style pagination info.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether there are more pages.
    pub has_next_page: bool,
    /// Cursor for the last item, absent when the page is empty.
    #[serde(default)]
    pub end_cursor: Option<String>,
}

/// Relay-style connection (`edges { node }` plus `pageInfo`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    #[serde(default)]
    pub edges: Vec<Edge<T>>,
    #[serde(default)]
    pub page_info: PageInfo,
}

/// A single connection edge.
#[derive(Debug, Clone, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

impl<T> Connection<T> {
    /// Unwrap the edges into their nodes, keeping order.
    #[must_use]
    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|e| e.node).collect()
    }
}

/// `{ count }` wrapper used by `productsCount` and friends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Count {
    pub count: i64,
}

// =============================================================================
// Mutation Errors
// =============================================================================

/// A `userErrors` entry from a mutation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserError {
    /// Path to the offending input field.
    #[serde(default)]
    pub field: Option<Vec<String>>,
    /// Human-readable message.
    pub message: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_into_nodes_keeps_order() {
        let json = serde_json::json!({
            "edges": [{"node": 1}, {"node": 2}, {"node": 3}],
            "pageInfo": {"hasNextPage": true, "endCursor": "abc"}
        });
        let connection: Connection<i32> = serde_json::from_value(json).unwrap();
        assert!(connection.page_info.has_next_page);
        assert_eq!(connection.page_info.end_cursor.as_deref(), Some("abc"));
        assert_eq!(connection.into_nodes(), vec![1, 2, 3]);
    }

    #[test]
    fn test_connection_without_edges_needs_no_default_node() {
        #[derive(Debug, Deserialize)]
        struct Named {
            #[allow(dead_code)]
            name: String,
        }

        let connection: Connection<Named> =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(connection.edges.is_empty());
        assert!(!connection.page_info.has_next_page);

        let connection: Connection<Named> = serde_json::from_value(serde_json::json!({
            "edges": [{"node": {"name": "Summer"}}],
            "pageInfo": {"hasNextPage": false}
        }))
        .unwrap();
        assert_eq!(connection.into_nodes().len(), 1);
    }

    #[test]
    fn test_connection_without_page_info() {
        let json = serde_json::json!({"edges": []});
        let connection: Connection<i32> = serde_json::from_value(json).unwrap();
        assert_eq!(connection.page_info, PageInfo::default());
    }
}
