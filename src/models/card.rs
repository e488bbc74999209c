use crate::format::format_currency;

/// Totals shown on the dashboard summary cards. Amounts are minor units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardData {
    pub number_of_invoices: u64,
    pub number_of_customers: u64,
    pub total_paid_invoices: i64,
    pub total_pending_invoices: i64,
}

impl CardData {
    pub fn formatted_paid(&self) -> String {
        format_currency(self.total_paid_invoices)
    }

    pub fn formatted_pending(&self) -> String {
        format_currency(self.total_pending_invoices)
    }
}

/// Result row of the group-by-status aggregation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct StatusTotal {
    #[serde(rename = "_id")]
    pub status: String,
    pub count: i64,
    #[serde(rename = "totalAmount")]
    pub total_amount: i64,
}
