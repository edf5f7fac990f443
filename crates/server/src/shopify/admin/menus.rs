//! Navigation menu operations for the Admin API.

use serde::Deserialize;
use tracing::instrument;

use super::{AdminClient, queries};
use crate::shopify::{
    Connection, Menu, MenuItemInput, MenuList, ShopifyError, UpdatedMenu, UserError,
};

impl AdminClient {
    /// List menus with two levels of items.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_menus(&self, first: i64) -> Result<MenuList, ShopifyError> {
        #[derive(Deserialize)]
        struct Data {
            menus: Connection<Menu>,
        }

        let data: Data = self
            .query(queries::MENUS, serde_json::json!({ "first": first }))
            .await?;
        Ok(MenuList {
            menus: data.menus.into_nodes(),
        })
    }

    /// Replace a menu's title and full item tree.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::UserError` if Shopify rejects the update and
    /// `ShopifyError::MissingPayload` if no menu comes back.
    #[instrument(skip(self, items), fields(items = items.len()))]
    pub async fn update_menu(
        &self,
        id: &str,
        title: &str,
        items: &[MenuItemInput],
    ) -> Result<UpdatedMenu, ShopifyError> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Payload {
            menu: Option<Menu>,
            #[serde(default)]
            user_errors: Vec<UserError>,
        }

        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            menu_update: Payload,
        }

        let data: Data = self
            .query(
                queries::MENU_UPDATE,
                serde_json::json!({ "id": id, "title": title, "items": items }),
            )
            .await?;

        let payload = data.menu_update;
        if !payload.user_errors.is_empty() {
            let detail = serde_json::to_string(&payload.user_errors)?;
            return Err(ShopifyError::UserError(format!("Menu update failed: {detail}")));
        }

        let menu = payload
            .menu
            .ok_or_else(|| ShopifyError::MissingPayload("Menu not found after update".into()))?;

        Ok(UpdatedMenu {
            menu_id: menu.id,
            title: menu.title,
            handle: menu.handle,
            items: menu.items,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::shopify::{Menu, MenuItemInput};

    #[test]
    fn test_menu_item_input_serializes_recursively() {
        let items = vec![MenuItemInput {
            title: "Shop".into(),
            kind: Some("COLLECTION".into()),
            url: None,
            resource_id: Some("gid://shopify/Collection/1".into()),
            items: vec![MenuItemInput {
                title: "Sale".into(),
                kind: Some("HTTP".into()),
                url: Some("/collections/sale".into()),
                resource_id: None,
                items: vec![],
            }],
        }];

        assert_eq!(
            serde_json::to_value(&items).unwrap(),
            serde_json::json!([{
                "title": "Shop",
                "type": "COLLECTION",
                "resourceId": "gid://shopify/Collection/1",
                "items": [{"title": "Sale", "type": "HTTP", "url": "/collections/sale"}]
            }])
        );
    }

    #[test]
    fn test_menu_deserializes_nested_items() {
        let menu: Menu = serde_json::from_value(serde_json::json!({
            "id": "gid://shopify/Menu/1",
            "title": "Main",
            "handle": "main-menu",
            "items": [{
                "id": "gid://shopify/MenuItem/1",
                "title": "Home",
                "type": "FRONTPAGE",
                "url": "/",
                "resourceId": null,
                "items": [{
                    "id": "gid://shopify/MenuItem/2",
                    "title": "About",
                    "type": "PAGE",
                    "url": "/pages/about",
                    "resourceId": "gid://shopify/Page/3"
                }]
            }]
        }))
        .unwrap();

        assert_eq!(menu.items.len(), 1);
        assert_eq!(menu.items[0].kind, "FRONTPAGE");
        assert_eq!(menu.items[0].items[0].resource_id.as_deref(), Some("gid://shopify/Page/3"));
    }
}
