mod card;
mod customer;
mod invoice;
mod revenue;

pub use card::{CardData, StatusTotal};
pub use customer::{Customer, CustomerField, CustomersTableRow, InvoiceRef};
pub use invoice::{CustomerSnapshot, Invoice, InvoiceForm, InvoiceStatus, LatestInvoice};
pub use revenue::Revenue;
