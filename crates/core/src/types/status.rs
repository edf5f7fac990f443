//! Status enums for Shopify entities.

use serde::{Deserialize, Serialize};

/// Collection product sort order.
///
/// Maps to Shopify's `CollectionSortOrder` enum. `Manual` is required for
/// explicit product positions to take effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectionSortOrder {
    #[default]
    Manual,
    BestSelling,
    AlphaAsc,
    AlphaDesc,
    PriceAsc,
    PriceDesc,
    Created,
    CreatedDesc,
}

impl CollectionSortOrder {
    /// GraphQL enum literal.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "MANUAL",
            Self::BestSelling => "BEST_SELLING",
            Self::AlphaAsc => "ALPHA_ASC",
            Self::AlphaDesc => "ALPHA_DESC",
            Self::PriceAsc => "PRICE_ASC",
            Self::PriceDesc => "PRICE_DESC",
            Self::Created => "CREATED",
            Self::CreatedDesc => "CREATED_DESC",
        }
    }
}

impl std::fmt::Display for CollectionSortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order financial status.
///
/// Maps to Shopify's financial status values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinancialStatus {
    #[default]
    Pending,
    Authorized,
    PartiallyPaid,
    Paid,
    PartiallyRefunded,
    Refunded,
    Voided,
}

impl FinancialStatus {
    /// Value used by the `financial_status:` order search filter.
    #[must_use]
    pub const fn search_value(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Authorized => "authorized",
            Self::PartiallyPaid => "partially_paid",
            Self::Paid => "paid",
            Self::PartiallyRefunded => "partially_refunded",
            Self::Refunded => "refunded",
            Self::Voided => "voided",
        }
    }
}

/// Theme role as reported by the REST Admin API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeRole {
    /// The published theme.
    Main,
    Unpublished,
    Demo,
    Development,
    Archived,
    Locked,
    #[serde(other)]
    Other,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_default_is_manual() {
        assert_eq!(CollectionSortOrder::default(), CollectionSortOrder::Manual);
    }

    #[test]
    fn test_sort_order_serde_matches_graphql_literal() {
        for order in [
            CollectionSortOrder::Manual,
            CollectionSortOrder::BestSelling,
            CollectionSortOrder::CreatedDesc,
        ] {
            let json = serde_json::to_value(order).unwrap();
            assert_eq!(json, serde_json::Value::String(order.to_string()));
        }
    }

    #[test]
    fn test_financial_status_search_value() {
        assert_eq!(FinancialStatus::Paid.search_value(), "paid");
    }

    #[test]
    fn test_unknown_theme_role() {
        let role: ThemeRole = serde_json::from_str("\"mobile\"").unwrap();
        assert_eq!(role, ThemeRole::Other);
        let role: ThemeRole = serde_json::from_str("\"main\"").unwrap();
        assert_eq!(role, ThemeRole::Main);
    }
}
