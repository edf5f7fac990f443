//! Connection check.
//!
//! # Environment Variables
//!
//! - `SHOPIFY_SHOP_DOMAIN` - Store domain, e.g. `my-store.myshopify.com`
//! - `SHOPIFY_ACCESS_TOKEN` - Admin API access token

use super::CliError;

/// Query the shop and print its details.
///
/// # Errors
///
/// Returns an error if configuration is missing or the request fails.
#[allow(clippy::print_stdout)]
pub async fn test_connection() -> Result<(), CliError> {
    let client = super::client()?;

    tracing::info!(endpoint = %client.graphql_endpoint(), "Testing connection");
    let shop = client.test_connection().await?;

    println!("Connected to {} ({})", shop.name, shop.myshopify_domain);
    println!("  Plan:  {}", shop.plan.display_name);
    if let Some(email) = shop.email {
        println!("  Email: {email}");
    }
    Ok(())
}
