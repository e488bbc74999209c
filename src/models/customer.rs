use serde::{Deserialize, Serialize};

/// Customer document as stored in the `customers` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    /// Denormalized summary of this customer's invoices. Convenience view only.
    #[serde(default)]
    pub invoices: Vec<InvoiceRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRef {
    pub invoice_id: String,
    pub amount: i64,
}

/// Legacy SQL projection used by customer pickers.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct CustomerField {
    pub id: String,
    pub name: String,
}

/// Row of the customers table, totals already formatted as currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomersTableRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: String,
    pub total_paid: String,
}
