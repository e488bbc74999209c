pub mod legacy;
pub mod memory;
pub mod mongo;

use anyhow::{Context, Result};
use async_trait::async_trait;
use mongodb::bson::doc;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::config::Config;
use crate::models::{Customer, Invoice, Revenue, StatusTotal};
use crate::query::search::InvoiceSearch;
use crate::query::pagination::PageWindow;

pub use legacy::LegacyDatabase;
pub use memory::InMemoryStore;
pub use mongo::MongoStore;

/// Matched invoices for one page plus the size of the whole match set,
/// both taken from the same pass over the data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetedPage {
    pub total: u64,
    pub invoices: Vec<Invoice>,
}

/// Storage backend for the dashboard collections.
///
/// Implementations return `anyhow` errors with context; the query service
/// turns them into [`crate::QueryError`].
#[async_trait]
pub trait DashboardStore: Send + Sync {
    async fn revenue(&self) -> Result<Vec<Revenue>>;

    /// Most recent invoices by date, newest first.
    async fn latest_invoices(&self, limit: u64) -> Result<Vec<Invoice>>;

    async fn count_invoices(&self) -> Result<u64>;

    async fn count_customers(&self) -> Result<u64>;

    /// Amount totals grouped by status, restricted to `paid` and `pending`.
    /// A status with no invoices has no entry.
    async fn status_totals(&self) -> Result<Vec<StatusTotal>>;

    /// Count and page window of the invoices matching `search`, sorted by
    /// date descending, computed in a single pass.
    async fn invoice_page(&self, search: &InvoiceSearch, window: PageWindow) -> Result<FacetedPage>;

    async fn insert_customers(&self, customers: &[Customer]) -> Result<()>;

    async fn insert_invoices(&self, invoices: &[Invoice]) -> Result<()>;

    async fn insert_revenue(&self, revenue: &[Revenue]) -> Result<()>;
}

/// Connection handles for the dashboard databases.
///
/// Opened once at startup with [`Database::connect`] and released with
/// [`Database::close`].
pub struct Database {
    client: mongodb::Client,
    database: mongodb::Database,
    legacy: Option<LegacyDatabase>,
}

impl Database {
    /// Connect to MongoDB (and PostgreSQL when configured)
    pub async fn connect(config: &Config) -> Result<Self> {
        let client = mongodb::Client::with_uri_str(config.mongodb_uri())
            .await
            .context("Failed to create MongoDB client")?;
        let database = client.database(&config.mongodb_database);

        database
            .run_command(doc! { "ping": 1 })
            .await
            .context("MongoDB did not answer ping")?;
        info!(database = %config.mongodb_database, "MongoDB connection established");

        let legacy = match config.postgres_url() {
            Some(url) => {
                let pool = PgPoolOptions::new()
                    .max_connections(config.postgres_max_connections)
                    .connect(url)
                    .await
                    .context("Failed to connect to PostgreSQL")?;
                info!("PostgreSQL connection established");
                Some(LegacyDatabase::new(pool))
            }
            None => None,
        };

        Ok(Self {
            client,
            database,
            legacy,
        })
    }

    /// Document store over the configured MongoDB database
    pub fn store(&self) -> MongoStore {
        MongoStore::new(self.database.clone())
    }

    /// Legacy SQL handle, if a PostgreSQL URL was configured
    pub fn legacy(&self) -> Option<LegacyDatabase> {
        self.legacy.clone()
    }

    /// Close all connections
    pub async fn close(self) {
        if let Some(legacy) = self.legacy {
            legacy.close().await;
        }
        self.client.shutdown().await;
        info!("Database connections closed");
    }
}
