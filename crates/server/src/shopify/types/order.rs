//! Order line items and the sales ranking built from them.

use serde::{Deserialize, Serialize};
use shopify_admin_mcp_core::MonthWindow;

use super::Connection;

/// Order as fetched for sales aggregation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLines {
    pub id: String,
    pub created_at: String,
    pub line_items: Connection<LineItem>,
}

/// A line item with its (possibly deleted) product.
#[derive(Debug, Clone, Deserialize)]
pub struct LineItem {
    /// `None` when the product has been deleted.
    pub product: Option<ProductRef>,
    pub quantity: i64,
}

/// Minimal product reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: String,
    pub title: String,
}

/// A ranked product in a sales report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedProduct {
    /// 1-based position.
    pub rank: usize,
    pub product_id: String,
    pub title: String,
    pub total_quantity: i128,
}

/// Best sellers for one calendar month.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyRanking {
    pub period: MonthWindow,
    pub products: Vec<RankedProduct>,
}
