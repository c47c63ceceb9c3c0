pub mod field;
pub mod invoice;
pub mod record;

pub use field::FieldValue;
pub use invoice::{InvoiceDetail, InvoiceHeader, InvoiceSubmission};
pub use record::{StoredInvoice, StoredInvoiceDetail};
