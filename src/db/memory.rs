//! In-memory dashboard store for tests and local development

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{DashboardStore, FacetedPage};
use crate::models::{Customer, Invoice, InvoiceStatus, Revenue, StatusTotal};
use crate::query::pagination::PageWindow;
use crate::query::search::InvoiceSearch;

#[derive(Default)]
struct Collections {
    invoices: Vec<Invoice>,
    customers: Vec<Customer>,
    revenue: Vec<Revenue>,
}

/// In-memory dashboard store
///
/// Uses a single RwLock over all collections, so every read sees one
/// consistent snapshot.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    data: Arc<RwLock<Collections>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T>(&self, f: impl FnOnce(&Collections) -> T) -> Result<T> {
        let data = self
            .data
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;
        Ok(f(&data))
    }

    fn write(&self, f: impl FnOnce(&mut Collections) -> Result<()>) -> Result<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;
        f(&mut data)
    }
}

/// Date descending, then id ascending.
fn newest_first(a: &Invoice, b: &Invoice) -> Ordering {
    b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id))
}

#[async_trait]
impl DashboardStore for InMemoryStore {
    async fn revenue(&self) -> Result<Vec<Revenue>> {
        self.read(|data| data.revenue.clone())
    }

    async fn latest_invoices(&self, limit: u64) -> Result<Vec<Invoice>> {
        self.read(|data| {
            let mut invoices = data.invoices.clone();
            invoices.sort_by(newest_first);
            invoices.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
            invoices
        })
    }

    async fn count_invoices(&self) -> Result<u64> {
        self.read(|data| data.invoices.len() as u64)
    }

    async fn count_customers(&self) -> Result<u64> {
        self.read(|data| data.customers.len() as u64)
    }

    async fn status_totals(&self) -> Result<Vec<StatusTotal>> {
        self.read(|data| -> Result<Vec<StatusTotal>> {
            let mut totals: HashMap<&str, StatusTotal> = HashMap::new();

            for invoice in &data.invoices {
                if !matches!(invoice.status, InvoiceStatus::Paid | InvoiceStatus::Pending) {
                    continue;
                }
                let entry = totals
                    .entry(invoice.status.as_str())
                    .or_insert_with(|| StatusTotal {
                        status: invoice.status.to_string(),
                        count: 0,
                        total_amount: 0,
                    });
                entry.count += 1;
                entry.total_amount = entry
                    .total_amount
                    .checked_add(invoice.amount)
                    .ok_or_else(|| anyhow!("Total for status {} overflows", entry.status))?;
            }

            Ok(totals.into_values().collect())
        })
        .and_then(|totals| totals)
    }

    async fn invoice_page(&self, search: &InvoiceSearch, window: PageWindow) -> Result<FacetedPage> {
        self.read(|data| {
            let mut matched: Vec<&Invoice> = data
                .invoices
                .iter()
                .filter(|invoice| search.matches(invoice))
                .collect();
            let total = matched.len() as u64;

            matched.sort_by(|a, b| newest_first(a, b));
            let invoices = matched
                .into_iter()
                .skip(usize::try_from(window.offset).unwrap_or(usize::MAX))
                .take(usize::try_from(window.limit).unwrap_or(usize::MAX))
                .cloned()
                .collect();

            FacetedPage { total, invoices }
        })
    }

    async fn insert_customers(&self, customers: &[Customer]) -> Result<()> {
        self.write(|data| {
            if let Some(dup) = customers
                .iter()
                .find(|new| data.customers.iter().any(|existing| existing.id == new.id))
            {
                return Err(anyhow!("Duplicate customer id {}", dup.id));
            }
            data.customers.extend_from_slice(customers);
            Ok(())
        })
    }

    async fn insert_invoices(&self, invoices: &[Invoice]) -> Result<()> {
        self.write(|data| {
            if let Some(dup) = invoices
                .iter()
                .find(|new| data.invoices.iter().any(|existing| existing.id == new.id))
            {
                return Err(anyhow!("Duplicate invoice id {}", dup.id));
            }
            data.invoices.extend_from_slice(invoices);
            Ok(())
        })
    }

    async fn insert_revenue(&self, revenue: &[Revenue]) -> Result<()> {
        self.write(|data| {
            if let Some(dup) = revenue
                .iter()
                .find(|new| data.revenue.iter().any(|existing| existing.month == new.month))
            {
                return Err(anyhow!("Duplicate revenue month {}", dup.month));
            }
            data.revenue.extend_from_slice(revenue);
            Ok(())
        })
    }
}
