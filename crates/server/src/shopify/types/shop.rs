//! Shop information returned by the connection check.

use serde::{Deserialize, Serialize};

/// Basic shop details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub name: String,
    pub email: Option<String>,
    pub myshopify_domain: String,
    pub plan: ShopPlan,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPlan {
    pub display_name: String,
}
