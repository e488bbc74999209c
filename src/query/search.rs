//! Free-text invoice search.

use crate::models::Invoice;

/// Substituted for search terms that are not numbers. Amounts are never
/// negative, so equality against this value cannot match.
pub const AMOUNT_SENTINEL: f64 = -9999.0;

/// A search term as applied to invoices: a case-insensitive substring over
/// customer name, customer email and status, or numeric equality on amount.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceSearch {
    term: String,
    amount: f64,
}

impl InvoiceSearch {
    pub fn new(term: &str) -> Self {
        let amount = term
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .unwrap_or(AMOUNT_SENTINEL);

        Self {
            term: term.to_string(),
            amount,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Parsed amount, or [`AMOUNT_SENTINEL`] when the term is not a number.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Evaluate the filter against a single invoice.
    pub fn matches(&self, invoice: &Invoice) -> bool {
        let needle = self.term.to_lowercase();
        let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

        contains(&invoice.customer.name)
            || contains(&invoice.customer.email)
            || contains(invoice.status.as_str())
            || invoice.amount as f64 == self.amount
    }
}
