//! One-time bootstrap of the dashboard collections from placeholder data.

pub mod placeholder;

use anyhow::{Context, Result, anyhow, bail};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::db::DashboardStore;
use crate::db::legacy::{LegacyCustomer, LegacyDatabase, LegacyInvoice};
use crate::models::{Customer, CustomerSnapshot, Invoice, InvoiceRef, InvoiceStatus, Revenue};
use placeholder::{PlaceholderCustomer, PlaceholderInvoice, PlaceholderRevenue};

/// Counts of records written by a seed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub customers: u64,
    pub invoices: u64,
    pub revenue: u64,
}

fn parse_invoice_id(id: &str) -> Result<String> {
    let id = Uuid::parse_str(id).with_context(|| format!("Invalid placeholder invoice id {id:?}"))?;
    Ok(id.to_string())
}

fn parse_date(date: &str) -> Result<DateTime<Utc>> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .with_context(|| format!("Invalid placeholder date {date:?}"))?;
    Ok(day.and_time(NaiveTime::MIN).and_utc())
}

/// Build invoice documents with the owning customer's fields embedded.
///
/// Fails if an invoice references a customer that does not exist.
pub fn denormalize_invoices(
    customers: &[PlaceholderCustomer],
    invoices: &[PlaceholderInvoice],
) -> Result<Vec<Invoice>> {
    invoices
        .iter()
        .map(|invoice| {
            let customer = customers
                .iter()
                .find(|c| c.id == invoice.customer_id)
                .ok_or_else(|| anyhow!("Invoice references unknown customer {}", invoice.customer_id))?;

            Ok(Invoice {
                id: parse_invoice_id(invoice.id)?,
                customer: CustomerSnapshot {
                    customer_id: customer.id.to_string(),
                    name: customer.name.to_string(),
                    email: customer.email.to_string(),
                    image_url: customer.image_url.to_string(),
                },
                amount: invoice.amount,
                status: InvoiceStatus::from(invoice.status),
                date: parse_date(invoice.date)?,
            })
        })
        .collect()
}

/// Build customer documents carrying a summary of their invoices.
pub fn summarize_customers(customers: &[PlaceholderCustomer], invoices: &[Invoice]) -> Vec<Customer> {
    customers
        .iter()
        .map(|c| Customer {
            id: c.id.to_string(),
            name: c.name.to_string(),
            email: c.email.to_string(),
            image_url: c.image_url.to_string(),
            invoices: invoices
                .iter()
                .filter(|i| i.customer.customer_id == c.id)
                .map(|i| InvoiceRef {
                    invoice_id: i.id.clone(),
                    amount: i.amount,
                })
                .collect(),
        })
        .collect()
}

pub fn revenue_rows(revenue: &[PlaceholderRevenue]) -> Vec<Revenue> {
    revenue
        .iter()
        .map(|r| Revenue {
            month: r.month.to_string(),
            revenue: r.revenue,
        })
        .collect()
}

/// Writes placeholder data into a dashboard store
pub struct Seeder<'a> {
    customers: &'a [PlaceholderCustomer],
    invoices: &'a [PlaceholderInvoice],
    revenue: &'a [PlaceholderRevenue],
}

impl Default for Seeder<'static> {
    fn default() -> Self {
        Self::new(placeholder::CUSTOMERS, placeholder::INVOICES, placeholder::REVENUE)
    }
}

impl<'a> Seeder<'a> {
    pub fn new(
        customers: &'a [PlaceholderCustomer],
        invoices: &'a [PlaceholderInvoice],
        revenue: &'a [PlaceholderRevenue],
    ) -> Self {
        Self {
            customers,
            invoices,
            revenue,
        }
    }

    /// Seed the document store: invoices, customers, then revenue.
    ///
    /// Refuses to write anything if any of the collections already holds data.
    pub async fn seed<S: DashboardStore + ?Sized>(&self, store: &S) -> Result<SeedReport> {
        let invoices = denormalize_invoices(self.customers, self.invoices)?;
        let customers = summarize_customers(self.customers, &invoices);
        let revenue = revenue_rows(self.revenue);

        let (existing_invoices, existing_customers, existing_revenue) = tokio::try_join!(
            store.count_invoices(),
            store.count_customers(),
            store.revenue()
        )?;
        if existing_invoices > 0 || existing_customers > 0 || !existing_revenue.is_empty() {
            bail!(
                "Store already seeded ({} invoices, {} customers, {} revenue rows)",
                existing_invoices,
                existing_customers,
                existing_revenue.len()
            );
        }

        store.insert_invoices(&invoices).await?;
        info!(count = invoices.len(), "Invoices have been seeded");

        store.insert_customers(&customers).await?;
        info!(count = customers.len(), "Customers have been seeded");

        store.insert_revenue(&revenue).await?;
        info!(count = revenue.len(), "Revenue has been seeded");

        Ok(SeedReport {
            customers: customers.len() as u64,
            invoices: invoices.len() as u64,
            revenue: revenue.len() as u64,
        })
    }

    /// Create and fill the legacy SQL tables. Existing rows are left alone.
    pub async fn seed_legacy(&self, legacy: &LegacyDatabase) -> Result<SeedReport> {
        legacy.create_schema().await?;

        let customers: Vec<LegacyCustomer<'_>> = self
            .customers
            .iter()
            .map(|c| LegacyCustomer {
                id: c.id,
                name: c.name,
                email: c.email,
                image_url: c.image_url,
            })
            .collect();

        let invoices = self
            .invoices
            .iter()
            .map(|i| {
                Ok(LegacyInvoice {
                    id: i.id,
                    customer_id: i.customer_id,
                    amount: i.amount,
                    status: i.status,
                    date: parse_date(i.date)?.date_naive(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let report = SeedReport {
            customers: legacy.insert_customers(&customers).await?,
            invoices: legacy.insert_invoices(&invoices).await?,
            revenue: legacy.insert_revenue(&revenue_rows(self.revenue)).await?,
        };
        info!(
            customers = report.customers,
            invoices = report.invoices,
            revenue = report.revenue,
            "Legacy tables seeded"
        );

        Ok(report)
    }
}
