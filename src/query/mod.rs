//! Query service used by the dashboard pages.
//!
//! Every operation is a read. Storage errors are logged together with the
//! operation's parameters and returned as [`QueryError::QueryFailed`].

pub mod pagination;
pub mod search;

use tracing::instrument;

use crate::db::{DashboardStore, LegacyDatabase};
use crate::error::QueryError;
use crate::format::format_currency;
use crate::models::{
    CardData, CustomerField, CustomersTableRow, Invoice, InvoiceForm, LatestInvoice, Revenue,
};
use pagination::{PageWindow, total_pages};
use search::InvoiceSearch;

/// Number of invoices on the "latest invoices" card.
pub const LATEST_INVOICES: u64 = 5;

/// One page of filtered invoices.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoicePage {
    /// Invoices on the requested page, newest first
    pub invoices: Vec<Invoice>,
    /// Pages across all matches, at least 1
    pub total_pages: u32,
    /// Invoices matching the filter across all pages
    pub total_matching: u64,
}

pub struct QueryService<S> {
    store: S,
    legacy: Option<LegacyDatabase>,
}

impl<S: DashboardStore> QueryService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            legacy: None,
        }
    }

    /// Attach the legacy SQL database used by the customer and invoice-form readers.
    pub fn with_legacy(mut self, legacy: Option<LegacyDatabase>) -> Self {
        self.legacy = legacy;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn legacy_database(&self) -> Option<&LegacyDatabase> {
        self.legacy.as_ref()
    }

    fn legacy(&self) -> Result<&LegacyDatabase, QueryError> {
        self.legacy.as_ref().ok_or(QueryError::LegacyUnavailable)
    }

    #[instrument(skip(self), err)]
    pub async fn fetch_revenue(&self) -> Result<Vec<Revenue>, QueryError> {
        self.store
            .revenue()
            .await
            .map_err(QueryError::failed("fetch revenue data"))
    }

    #[instrument(skip(self), err)]
    pub async fn fetch_latest_invoices(&self) -> Result<Vec<LatestInvoice>, QueryError> {
        let invoices = self
            .store
            .latest_invoices(LATEST_INVOICES)
            .await
            .map_err(QueryError::failed("fetch the latest invoices"))?;

        Ok(invoices
            .into_iter()
            .map(|invoice| LatestInvoice {
                id: invoice.id,
                name: invoice.customer.name,
                email: invoice.customer.email,
                image_url: invoice.customer.image_url,
                amount: format_currency(invoice.amount),
            })
            .collect())
    }

    /// Totals for the summary cards. The three reads run concurrently and the
    /// whole call fails if any of them does.
    #[instrument(skip(self), err)]
    pub async fn fetch_card_data(&self) -> Result<CardData, QueryError> {
        let (number_of_invoices, number_of_customers, totals) = tokio::try_join!(
            self.store.count_invoices(),
            self.store.count_customers(),
            self.store.status_totals()
        )
        .map_err(QueryError::failed("fetch card data"))?;

        let total_for = |status: &str| {
            totals
                .iter()
                .find(|t| t.status == status)
                .map_or(0, |t| t.total_amount)
        };

        Ok(CardData {
            number_of_invoices,
            number_of_customers,
            total_paid_invoices: total_for("paid"),
            total_pending_invoices: total_for("pending"),
        })
    }

    /// Invoices matching `query` on the 1-based `page`, with the page count
    /// for the same filter.
    #[instrument(skip(self), err)]
    pub async fn fetch_filtered_invoices(
        &self,
        query: &str,
        page: u32,
    ) -> Result<InvoicePage, QueryError> {
        let search = InvoiceSearch::new(query);
        let result = self
            .store
            .invoice_page(&search, PageWindow::for_page(page))
            .await
            .map_err(QueryError::failed("fetch invoices"))?;

        Ok(InvoicePage {
            invoices: result.invoices,
            total_pages: total_pages(result.total),
            total_matching: result.total,
        })
    }

    /// Page count for `query`, from the same faceted pass as the invoice list.
    #[instrument(skip(self), err)]
    pub async fn fetch_invoices_pages(&self, query: &str) -> Result<u32, QueryError> {
        let search = InvoiceSearch::new(query);
        let result = self
            .store
            .invoice_page(&search, PageWindow::for_page(1))
            .await
            .map_err(QueryError::failed("fetch total number of invoices"))?;

        Ok(total_pages(result.total))
    }

    #[instrument(skip(self), err)]
    pub async fn fetch_invoice_by_id(&self, id: &str) -> Result<Option<InvoiceForm>, QueryError> {
        self.legacy()?
            .fetch_invoice_by_id(id)
            .await
            .map_err(QueryError::failed("fetch invoice"))
    }

    #[instrument(skip(self), err)]
    pub async fn fetch_customers(&self) -> Result<Vec<CustomerField>, QueryError> {
        self.legacy()?
            .fetch_customers()
            .await
            .map_err(QueryError::failed("fetch all customers"))
    }

    #[instrument(skip(self), err)]
    pub async fn fetch_filtered_customers(
        &self,
        query: &str,
    ) -> Result<Vec<CustomersTableRow>, QueryError> {
        self.legacy()?
            .fetch_filtered_customers(query)
            .await
            .map_err(QueryError::failed("fetch customer table"))
    }
}
