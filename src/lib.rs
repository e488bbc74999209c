//! Data access for the invoices dashboard: filtered and paginated invoice
//! queries, summary cards, revenue, legacy SQL readers and the seed utility.

pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod models;
pub mod query;
pub mod seed;

pub use error::QueryError;
pub use query::{InvoicePage, QueryService};
