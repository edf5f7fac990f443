//! Theme and theme asset operations (REST Admin API).

use tracing::instrument;

use super::AdminClient;
use crate::shopify::{AssetEnvelope, ShopifyError, Theme, ThemeAsset, ThemesEnvelope};

impl AdminClient {
    /// List the shop's themes.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_themes(&self) -> Result<Vec<Theme>, ShopifyError> {
        let envelope: ThemesEnvelope = self.rest_get("themes.json", &[]).await?;
        Ok(envelope.themes)
    }

    /// Read one theme file, e.g. `templates/index.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_theme_asset(&self, theme_id: i64, key: &str) -> Result<ThemeAsset, ShopifyError> {
        let envelope: AssetEnvelope = self
            .rest_get(&format!("themes/{theme_id}/assets.json"), &[("asset[key]", key)])
            .await?;
        Ok(envelope.asset)
    }

    /// Create or replace a theme file with text content.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, value), fields(bytes = value.len()))]
    pub async fn update_theme_asset(
        &self,
        theme_id: i64,
        key: &str,
        value: &str,
    ) -> Result<ThemeAsset, ShopifyError> {
        let body = serde_json::json!({ "asset": { "key": key, "value": value } });
        let envelope: AssetEnvelope = self
            .rest_put(&format!("themes/{theme_id}/assets.json"), &body)
            .await?;
        Ok(envelope.asset)
    }
}
