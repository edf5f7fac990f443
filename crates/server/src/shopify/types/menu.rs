//! Navigation menu types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Menu with up to two levels of items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// Result of `get_menus`.
#[derive(Debug, Clone, Serialize)]
pub struct MenuList {
    pub menus: Vec<Menu>,
}

/// A menu item. Nested items are only populated one level deep.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: Option<String>,
    pub resource_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<MenuItem>,
}

/// Replacement item tree for `menuUpdate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemInput {
    /// Item label
    pub title: String,
    /// Item type, e.g. HTTP, COLLECTION, PRODUCT, PAGE, BLOG, FRONTPAGE
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Link target for HTTP items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Linked resource GID for resource items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    /// Child items
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<MenuItemInput>,
}

/// Result of a menu update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedMenu {
    pub menu_id: String,
    pub title: String,
    pub handle: String,
    pub items: Vec<MenuItem>,
}
