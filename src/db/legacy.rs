use anyhow::{Context, Result};
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::format::format_currency;
use crate::models::{CustomerField, CustomersTableRow, InvoiceForm, InvoiceStatus, Revenue};

/// Legacy PostgreSQL tables (`customers`, `invoices`, `revenue`)
#[derive(Clone, Debug)]
pub struct LegacyDatabase {
    pool: PgPool,
}

#[derive(sqlx::FromRow, Debug)]
struct InvoiceFormRow {
    id: String,
    customer_id: String,
    amount: i64,
    status: String,
}

impl From<InvoiceFormRow> for InvoiceForm {
    fn from(row: InvoiceFormRow) -> Self {
        InvoiceForm {
            id: row.id,
            customer_id: row.customer_id,
            // Stored in cents
            amount: row.amount as f64 / 100.0,
            status: InvoiceStatus::from(row.status),
        }
    }
}

#[derive(sqlx::FromRow, Debug)]
struct CustomersTableSqlRow {
    id: String,
    name: String,
    email: String,
    image_url: String,
    total_invoices: i64,
    total_pending: i64,
    total_paid: i64,
}

impl From<CustomersTableSqlRow> for CustomersTableRow {
    fn from(row: CustomersTableSqlRow) -> Self {
        CustomersTableRow {
            id: row.id,
            name: row.name,
            email: row.email,
            image_url: row.image_url,
            total_invoices: row.total_invoices,
            total_pending: format_currency(row.total_pending),
            total_paid: format_currency(row.total_paid),
        }
    }
}

/// Invoice row as inserted by the legacy seed.
#[derive(Debug, Clone)]
pub struct LegacyInvoice<'a> {
    pub id: &'a str,
    pub customer_id: &'a str,
    pub amount: i64,
    pub status: &'a str,
    pub date: NaiveDate,
}

/// Customer row as inserted by the legacy seed.
#[derive(Debug, Clone)]
pub struct LegacyCustomer<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub image_url: &'a str,
}

impl LegacyDatabase {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub async fn fetch_invoice_by_id(&self, id: &str) -> Result<Option<InvoiceForm>> {
        let row = sqlx::query_as::<_, InvoiceFormRow>(
            r#"
            SELECT
                invoices.id::text AS id,
                invoices.customer_id::text AS customer_id,
                invoices.amount::bigint AS amount,
                invoices.status
            FROM invoices
            WHERE invoices.id::text = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.get_pool())
        .await
        .context("Failed to select invoice")?;

        Ok(row.map(InvoiceForm::from))
    }

    pub async fn fetch_customers(&self) -> Result<Vec<CustomerField>> {
        let customers = sqlx::query_as::<_, CustomerField>(
            "SELECT id::text AS id, name FROM customers ORDER BY name ASC",
        )
        .fetch_all(self.get_pool())
        .await
        .context("Failed to select customers")?;

        Ok(customers)
    }

    pub async fn fetch_filtered_customers(&self, query: &str) -> Result<Vec<CustomersTableRow>> {
        let pattern = format!("%{query}%");
        let rows = sqlx::query_as::<_, CustomersTableSqlRow>(
            r#"
            SELECT
                customers.id::text AS id,
                customers.name,
                customers.email,
                customers.image_url,
                COUNT(invoices.id) AS total_invoices,
                COALESCE(SUM(CASE WHEN invoices.status = 'pending' THEN invoices.amount ELSE 0 END), 0)::bigint AS total_pending,
                COALESCE(SUM(CASE WHEN invoices.status = 'paid' THEN invoices.amount ELSE 0 END), 0)::bigint AS total_paid
            FROM customers
            LEFT JOIN invoices ON customers.id = invoices.customer_id
            WHERE
                customers.name ILIKE $1 OR
                customers.email ILIKE $1
            GROUP BY customers.id, customers.name, customers.email, customers.image_url
            ORDER BY customers.name ASC
            "#,
        )
        .bind(&pattern)
        .fetch_all(self.get_pool())
        .await
        .context("Failed to select customer table")?;

        Ok(rows.into_iter().map(CustomersTableRow::from).collect())
    }

    /// Create the legacy tables if they do not exist yet
    pub async fn create_schema(&self) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS customers (
                id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                email VARCHAR(255) NOT NULL,
                image_url VARCHAR(255) NOT NULL
            )
            "#,
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS invoices (
                id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
                customer_id UUID NOT NULL,
                amount INT NOT NULL,
                status VARCHAR(255) NOT NULL,
                date DATE NOT NULL
            )
            "#,
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS revenue (
                month VARCHAR(4) NOT NULL UNIQUE,
                revenue INT NOT NULL
            )
            "#,
        )
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    pub async fn insert_customers(&self, customers: &[LegacyCustomer<'_>]) -> Result<u64> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for customer in customers {
            inserted += sqlx::query(
                r#"
                INSERT INTO customers (id, name, email, image_url)
                VALUES ($1::uuid, $2, $3, $4)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(customer.id)
            .bind(customer.name)
            .bind(customer.email)
            .bind(customer.image_url)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("Failed to insert customer {}", customer.id))?
            .rows_affected();
        }

        tx.commit().await?;

        Ok(inserted)
    }

    pub async fn insert_invoices(&self, invoices: &[LegacyInvoice<'_>]) -> Result<u64> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for invoice in invoices {
            inserted += sqlx::query(
                r#"
                INSERT INTO invoices (id, customer_id, amount, status, date)
                VALUES ($1::uuid, $2::uuid, $3, $4, $5)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(invoice.id)
            .bind(invoice.customer_id)
            .bind(i32::try_from(invoice.amount).context("Invoice amount does not fit INT")?)
            .bind(invoice.status)
            .bind(invoice.date)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("Failed to insert invoice {}", invoice.id))?
            .rows_affected();
        }

        tx.commit().await?;

        Ok(inserted)
    }

    pub async fn insert_revenue(&self, revenue: &[Revenue]) -> Result<u64> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for row in revenue {
            inserted += sqlx::query(
                r#"
                INSERT INTO revenue (month, revenue)
                VALUES ($1, $2)
                ON CONFLICT (month) DO NOTHING
                "#,
            )
            .bind(&row.month)
            .bind(i32::try_from(row.revenue).context("Revenue does not fit INT")?)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("Failed to insert revenue for {}", row.month))?
            .rows_affected();
        }

        tx.commit().await?;

        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_form_converts_cents_to_dollars() {
        let form = InvoiceForm::from(InvoiceFormRow {
            id: "i".to_string(),
            customer_id: "c".to_string(),
            amount: 15795,
            status: "pending".to_string(),
        });

        assert_eq!(form.amount, 157.95);
        assert_eq!(form.status, InvoiceStatus::Pending);
    }

    #[test]
    fn customer_table_formats_totals() {
        let row = CustomersTableRow::from(CustomersTableSqlRow {
            id: "c".to_string(),
            name: "Steph Dietz".to_string(),
            email: "steph@dietz.com".to_string(),
            image_url: "/customers/steph-dietz.png".to_string(),
            total_invoices: 2,
            total_pending: 0,
            total_paid: 4290,
        });

        assert_eq!(row.total_pending, "$0.00");
        assert_eq!(row.total_paid, "$42.90");
        assert_eq!(row.total_invoices, 2);
    }
}
