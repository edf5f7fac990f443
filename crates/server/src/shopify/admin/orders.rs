//! Order analytics for the Admin API.

use serde::Deserialize;
use shopify_admin_mcp_core::{FinancialStatus, MonthWindow};
use tracing::instrument;

use super::{AdminClient, queries};
use crate::aggregate::{Keyed, KeyedSum};
use crate::pagination::{Cursor, FetchMode, Page, paginate};
use crate::shopify::{Connection, MonthlyRanking, OrderLines, RankedProduct, ShopifyError};

/// Orders requested per page.
const ORDERS_PAGE_SIZE: i64 = 50;

/// Default number of ranked products.
pub const DEFAULT_RANKING_LIMIT: usize = 15;

/// Order search filter for paid orders created inside `window`.
#[must_use]
pub fn paid_orders_filter(window: &MonthWindow) -> String {
    format!(
        "created_at:>={} AND created_at:<{} AND financial_status:{}",
        window.start(),
        window.end(),
        FinancialStatus::Paid.search_value()
    )
}

impl AdminClient {
    /// Fetch one page of orders with their line items.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn orders_page(
        &self,
        query: &str,
        after: Option<Cursor>,
    ) -> Result<Page<OrderLines>, ShopifyError> {
        #[derive(Deserialize)]
        struct Data {
            orders: Connection<OrderLines>,
        }

        let data: Data = self
            .query(
                queries::ORDERS_WITH_LINE_ITEMS,
                serde_json::json!({
                    "query": query,
                    "first": ORDERS_PAGE_SIZE,
                    "after": after,
                }),
            )
            .await?;

        Ok(Page::from_connection((), data.orders))
    }

    /// Rank products by units sold in paid orders created during `window`.
    ///
    /// Walks every order page. Line items whose product has been deleted are
    /// skipped. Only the first 50 line items of each order are counted.
    ///
    /// # Errors
    ///
    /// Returns the first page failure; no partial ranking is produced.
    #[instrument(skip(self), fields(year = window.year(), month = window.month()))]
    pub async fn monthly_ranking(
        &self,
        window: MonthWindow,
        limit: usize,
    ) -> Result<MonthlyRanking, ShopifyError> {
        let filter = paid_orders_filter(&window);
        let filter = filter.as_str();

        let (totals, walk) = paginate(FetchMode::All, KeyedSum::default(), move |after| async move {
            let page = self.orders_page(filter, after).await?;
            Ok::<_, ShopifyError>(Page {
                header: page.header,
                items: page.items.into_iter().flat_map(line_item_entries).collect(),
                end_cursor: page.end_cursor,
                has_next_page: page.has_next_page,
            })
        })
        .await?;

        tracing::info!(pages = walk.pages, products = totals.len(), "Aggregated order lines");

        let products = totals
            .ranked(limit)
            .into_iter()
            .map(|r| RankedProduct {
                rank: r.rank,
                product_id: r.key,
                title: r.label,
                total_quantity: r.total,
            })
            .collect();

        Ok(MonthlyRanking {
            period: window,
            products,
        })
    }
}

fn line_item_entries(order: OrderLines) -> impl Iterator<Item = Keyed<String, String>> {
    order.line_items.into_nodes().into_iter().map(|line| {
        let (key, label) = match line.product {
            Some(p) => (Some(p.id), p.title),
            None => (None, String::new()),
        };
        Keyed {
            key,
            label,
            quantity: line.quantity,
        }
    })
}
