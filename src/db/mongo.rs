//! MongoDB storage backend using the official MongoDB async driver.
//!
//! Collections follow the dashboard layout: `invoices` (with the customer
//! snapshot embedded), `customers`, and `revenues`.

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, Document, doc};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};
use serde::Deserialize;
use tracing::debug;

use super::{DashboardStore, FacetedPage};
use crate::models::{Customer, Invoice, Revenue, StatusTotal};
use crate::query::pagination::PageWindow;
use crate::query::search::InvoiceSearch;

pub const INVOICES: &str = "invoices";
pub const CUSTOMERS: &str = "customers";
pub const REVENUES: &str = "revenues";

// ---------------------------------------------------------------------------
// Query documents
// ---------------------------------------------------------------------------

/// Filter document for an invoice search.
///
/// The term is escaped so that `$regex` behaves as a literal,
/// case-insensitive substring match.
pub fn invoice_filter(search: &InvoiceSearch) -> Document {
    let pattern = regex::escape(search.term());
    let contains = || doc! { "$regex": pattern.clone(), "$options": "i" };

    doc! {
        "$or": [
            { "customer.name": contains() },
            { "customer.email": contains() },
            { "amount": search.amount() },
            { "status": contains() },
        ]
    }
}

/// Single-pass pipeline returning both the match count and the page window.
///
/// Output is one document:
/// `{ unpaginatedTotal: <count, absent when nothing matched>, currentPageResults: [...] }`.
pub fn invoice_page_pipeline(search: &InvoiceSearch, window: PageWindow) -> Vec<Document> {
    let skip = window.offset as i64;
    let limit = window.limit as i64;

    vec![
        doc! { "$match": invoice_filter(search) },
        doc! {
            "$facet": {
                "unpaginatedTotal": [
                    { "$count": "total_documents" },
                ],
                "currentPageResults": [
                    { "$sort": { "date": -1, "_id": 1 } },
                    { "$skip": skip },
                    { "$limit": limit },
                ],
            }
        },
        doc! {
            "$project": {
                "unpaginatedTotal": { "$arrayElemAt": ["$unpaginatedTotal", 0] },
                "currentPageResults": "$currentPageResults",
            }
        },
        doc! {
            "$project": {
                "unpaginatedTotal": "$unpaginatedTotal.total_documents",
                "currentPageResults": "$currentPageResults",
            }
        },
    ]
}

/// Group-by-status pipeline for the summary cards.
pub fn status_totals_pipeline() -> Vec<Document> {
    vec![
        doc! {
            "$group": {
                "_id": "$status",
                "count": { "$sum": 1 },
                "totalAmount": { "$sum": "$amount" },
            }
        },
        doc! { "$match": { "_id": { "$in": ["paid", "pending"] } } },
    ]
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FacetResult {
    #[serde(default)]
    unpaginated_total: Option<i64>,
    #[serde(default)]
    current_page_results: Vec<Invoice>,
}

impl From<FacetResult> for FacetedPage {
    fn from(result: FacetResult) -> Self {
        FacetedPage {
            total: result.unpaginated_total.unwrap_or(0).max(0) as u64,
            invoices: result.current_page_results,
        }
    }
}

// ---------------------------------------------------------------------------
// MongoStore
// ---------------------------------------------------------------------------

/// Dashboard store backed by MongoDB.
///
/// ```rust,ignore
/// let client = mongodb::Client::with_uri_str("mongodb://localhost:27017").await?;
/// let store = MongoStore::new(client.database("dashboard"));
/// let revenue = store.revenue().await?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    fn invoices(&self) -> Collection<Invoice> {
        self.database.collection(INVOICES)
    }

    fn customers(&self) -> Collection<Customer> {
        self.database.collection(CUSTOMERS)
    }

    fn revenues(&self) -> Collection<Revenue> {
        self.database.collection(REVENUES)
    }

    async fn aggregate_invoices(&self, pipeline: Vec<Document>) -> Result<Vec<Document>> {
        let cursor = self
            .invoices()
            .aggregate(pipeline)
            .await
            .context("Failed to run invoice aggregation")?;

        cursor
            .try_collect()
            .await
            .context("Failed to read invoice aggregation results")
    }
}

#[async_trait]
impl DashboardStore for MongoStore {
    async fn revenue(&self) -> Result<Vec<Revenue>> {
        let cursor = self
            .revenues()
            .find(doc! {})
            .await
            .context("Failed to query revenue")?;

        cursor.try_collect().await.context("Failed to read revenue")
    }

    async fn latest_invoices(&self, limit: u64) -> Result<Vec<Invoice>> {
        let cursor = self
            .invoices()
            .find(doc! {})
            .sort(doc! { "date": -1, "_id": 1 })
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .await
            .context("Failed to query latest invoices")?;

        cursor
            .try_collect()
            .await
            .context("Failed to read latest invoices")
    }

    async fn count_invoices(&self) -> Result<u64> {
        self.invoices()
            .count_documents(doc! {})
            .await
            .context("Failed to count invoices")
    }

    async fn count_customers(&self) -> Result<u64> {
        self.customers()
            .count_documents(doc! {})
            .await
            .context("Failed to count customers")
    }

    async fn status_totals(&self) -> Result<Vec<StatusTotal>> {
        self.aggregate_invoices(status_totals_pipeline())
            .await?
            .into_iter()
            .map(|d| bson::from_document(d).context("Malformed status total"))
            .collect()
    }

    async fn invoice_page(&self, search: &InvoiceSearch, window: PageWindow) -> Result<FacetedPage> {
        let pipeline = invoice_page_pipeline(search, window);
        debug!(term = search.term(), offset = window.offset, "Running faceted invoice query");

        let first = self
            .aggregate_invoices(pipeline)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Faceted invoice query returned no document"))?;

        let result: FacetResult =
            bson::from_document(first).context("Malformed faceted invoice result")?;

        Ok(result.into())
    }

    async fn insert_customers(&self, customers: &[Customer]) -> Result<()> {
        if customers.is_empty() {
            return Ok(());
        }
        self.customers()
            .insert_many(customers)
            .await
            .context("Failed to insert customers")?;
        Ok(())
    }

    async fn insert_invoices(&self, invoices: &[Invoice]) -> Result<()> {
        if invoices.is_empty() {
            return Ok(());
        }
        self.invoices()
            .insert_many(invoices)
            .await
            .context("Failed to insert invoices")?;
        Ok(())
    }

    async fn insert_revenue(&self, revenue: &[Revenue]) -> Result<()> {
        let unique_month = IndexModel::builder()
            .keys(doc! { "month": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.revenues()
            .create_index(unique_month)
            .await
            .context("Failed to create revenue month index")?;

        if revenue.is_empty() {
            return Ok(());
        }
        self.revenues()
            .insert_many(revenue)
            .await
            .context("Failed to insert revenue")?;
        Ok(())
    }
}
