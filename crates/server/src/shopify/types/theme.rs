//! Online store themes (REST Admin API, snake_case keys).

use serde::{Deserialize, Serialize};
use shopify_admin_mcp_core::ThemeRole;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub id: i64,
    pub name: String,
    pub role: ThemeRole,
    #[serde(default)]
    pub theme_store_id: Option<i64>,
    #[serde(default)]
    pub previewable: bool,
    #[serde(default)]
    pub processing: bool,
    #[serde(default)]
    pub admin_graphql_api_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A theme file. `value` is only present for text assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeAsset {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ThemesEnvelope {
    pub themes: Vec<Theme>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssetEnvelope {
    pub asset: ThemeAsset,
}
