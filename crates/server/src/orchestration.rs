//! Multi-step collection operations.
//!
//! Each operation is an ordered list of upstream calls. Every step carries a
//! [`StepPolicy`]: a `Fatal` step aborts the operation with its error, a
//! `Warn` step is logged and reported but never fails the operation. Nothing
//! is rolled back; steps that already succeeded stay committed upstream.

use std::future::Future;

use serde::Serialize;
use tracing::{error, info, instrument, warn};

use crate::shopify::{
    CollectionDetail, CreatedCollection, NewCollection, ProductMove, ShopifyError,
};

const READ_SOURCE: &str = "read_source";
const CREATE_COLLECTION: &str = "create_collection";
const ADD_PRODUCTS: &str = "add_products";
const REORDER_PRODUCTS: &str = "reorder_products";

/// The upstream calls the collection operations are built from.
///
/// Implemented by [`AdminClient`](crate::shopify::AdminClient).
pub trait CollectionBackend: Sync {
    /// Read a collection with all of its products, or `None` if absent.
    fn read_collection(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<CollectionDetail>, ShopifyError>> + Send;

    fn create_collection(
        &self,
        input: &NewCollection,
    ) -> impl Future<Output = Result<CreatedCollection, ShopifyError>> + Send;

    fn add_products(
        &self,
        collection_id: &str,
        product_ids: &[String],
    ) -> impl Future<Output = Result<(), ShopifyError>> + Send;

    fn reorder_products(
        &self,
        collection_id: &str,
        moves: &[ProductMove],
    ) -> impl Future<Output = Result<(), ShopifyError>> + Send;
}

// =============================================================================
// Step bookkeeping
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepPolicy {
    /// Failure aborts the operation.
    Fatal,
    /// Failure is logged and reported, the operation continues.
    Warn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepOutcome {
    Completed,
    Skipped,
    Warned { message: String },
}

/// What happened to one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub step: &'static str,
    pub policy: StepPolicy,
    pub outcome: StepOutcome,
}

/// Ordered record of the steps an operation ran.
#[derive(Debug, Default)]
pub struct StepLog {
    reports: Vec<StepReport>,
}

impl StepLog {
    /// Run a step whose failure aborts the operation.
    ///
    /// # Errors
    ///
    /// Returns the step's error unchanged.
    pub async fn fatal<T>(
        &mut self,
        step: &'static str,
        action: impl Future<Output = Result<T, ShopifyError>>,
    ) -> Result<T, ShopifyError> {
        match action.await {
            Ok(value) => {
                info!(step, "Step completed");
                self.push(step, StepPolicy::Fatal, StepOutcome::Completed);
                Ok(value)
            }
            Err(e) => {
                error!(step, error = %e, "Step failed, aborting");
                Err(e)
            }
        }
    }

    /// Run a step whose failure is downgraded to a warning.
    pub async fn best_effort<T>(
        &mut self,
        step: &'static str,
        action: impl Future<Output = Result<T, ShopifyError>>,
    ) -> Option<T> {
        match action.await {
            Ok(value) => {
                info!(step, "Step completed");
                self.push(step, StepPolicy::Warn, StepOutcome::Completed);
                Some(value)
            }
            Err(e) => {
                warn!(step, error = %e, "Step failed, continuing");
                self.push(
                    step,
                    StepPolicy::Warn,
                    StepOutcome::Warned {
                        message: e.to_string(),
                    },
                );
                None
            }
        }
    }

    /// Record a step that was not attempted.
    pub fn skip(&mut self, step: &'static str, policy: StepPolicy) {
        self.push(step, policy, StepOutcome::Skipped);
    }

    #[must_use]
    pub fn into_reports(self) -> Vec<StepReport> {
        self.reports
    }

    fn push(&mut self, step: &'static str, policy: StepPolicy, outcome: StepOutcome) {
        self.reports.push(StepReport {
            step,
            policy,
            outcome,
        });
    }
}

// =============================================================================
// Link-and-order
// =============================================================================

/// Result of adding products to a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkOutcome {
    pub success: bool,
    pub collection_id: String,
    /// Number of product IDs submitted. Shopify ignores IDs already present.
    pub added_count: usize,
    pub steps: Vec<StepReport>,
}

/// One move per product, positioned at its index in `product_ids`.
#[must_use]
pub fn positional_moves(product_ids: &[String]) -> Vec<ProductMove> {
    product_ids
        .iter()
        .enumerate()
        .map(|(position, id)| ProductMove {
            id: id.clone(),
            new_position: position.to_string(),
        })
        .collect()
}

/// Add `product_ids` to a collection, then order them as given.
///
/// The reorder step is best effort: if it fails the products stay in the
/// collection and the failure is reported as a warning step. An empty list
/// makes no upstream call.
///
/// # Errors
///
/// Returns the add step's error. What the upstream committed before failing
/// is not known.
#[instrument(skip(backend, product_ids), fields(count = product_ids.len()))]
pub async fn link_and_order<B: CollectionBackend>(
    backend: &B,
    collection_id: &str,
    product_ids: &[String],
) -> Result<LinkOutcome, ShopifyError> {
    let mut log = StepLog::default();
    link_steps(backend, &mut log, collection_id, product_ids).await?;

    Ok(LinkOutcome {
        success: true,
        collection_id: collection_id.to_string(),
        added_count: product_ids.len(),
        steps: log.into_reports(),
    })
}

async fn link_steps<B: CollectionBackend>(
    backend: &B,
    log: &mut StepLog,
    collection_id: &str,
    product_ids: &[String],
) -> Result<(), ShopifyError> {
    if product_ids.is_empty() {
        log.skip(ADD_PRODUCTS, StepPolicy::Fatal);
        log.skip(REORDER_PRODUCTS, StepPolicy::Warn);
        return Ok(());
    }

    log.fatal(
        ADD_PRODUCTS,
        backend.add_products(collection_id, product_ids),
    )
    .await?;

    let moves = positional_moves(product_ids);
    log.best_effort(
        REORDER_PRODUCTS,
        backend.reorder_products(collection_id, &moves),
    )
    .await;

    Ok(())
}

// =============================================================================
// Clone
// =============================================================================

/// Parameters for duplicating a collection.
#[derive(Debug, Clone)]
pub struct DuplicateRequest {
    pub source_collection_id: String,
    pub new_title: String,
    pub new_handle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceCollection {
    pub id: String,
    pub title: String,
}

/// Result of duplicating a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateOutcome {
    pub source_collection: SourceCollection,
    pub new_collection: CreatedCollection,
    pub products_count: usize,
    pub steps: Vec<StepReport>,
}

/// Copy a collection's title-independent fields and its full product list,
/// in order, into a new manually sorted collection.
///
/// # Errors
///
/// - `ShopifyError::NotFound` if the source collection does not exist
/// - any error from creating the new collection or adding its products.
///   A failure while adding products leaves the new collection in place,
///   empty or partially filled.
#[instrument(skip(backend), fields(source = %request.source_collection_id))]
pub async fn duplicate_collection<B: CollectionBackend>(
    backend: &B,
    request: &DuplicateRequest,
) -> Result<DuplicateOutcome, ShopifyError> {
    let mut log = StepLog::default();
    let source_id = request.source_collection_id.as_str();

    let source = log
        .fatal(READ_SOURCE, async {
            backend.read_collection(source_id).await.and_then(|found| {
                found.ok_or_else(|| {
                    ShopifyError::NotFound(format!("Collection not found: {source_id}"))
                })
            })
        })
        .await?;

    let input = NewCollection {
        title: request.new_title.clone(),
        handle: request.new_handle.clone(),
        description_html: Some(source.description_html.clone()).filter(|d| !d.is_empty()),
        ..NewCollection::default()
    };
    let created = log
        .fatal(CREATE_COLLECTION, backend.create_collection(&input))
        .await?;

    let product_ids: Vec<String> = source.products.iter().map(|p| p.id.clone()).collect();
    if let Err(e) = link_steps(backend, &mut log, &created.collection_id, &product_ids).await {
        error!(
            collection_id = %created.collection_id,
            "New collection was created but its products could not be added"
        );
        return Err(e);
    }

    Ok(DuplicateOutcome {
        source_collection: SourceCollection {
            id: source.id,
            title: source.title,
        },
        new_collection: created,
        products_count: product_ids.len(),
        steps: log.into_reports(),
    })
}
