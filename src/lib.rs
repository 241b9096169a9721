pub mod calc;
pub mod document;
pub mod error;
pub mod invoice;
pub mod pdf;

pub use calc::{compute_totals, inclusive_day_span, number_to_words, Charges, InvoiceTotals};
pub use document::{load_invoice, save_invoice, Edit, InvoiceState, ItemId, LineItem};
pub use error::{InvoiceError, Result};
pub use invoice::{print_invoice, render_preview, InvoiceSummary};
