mod preview;
mod printable;

pub use preview::{render_preview, InvoiceSummary, ItemSummary};
pub use printable::{default_pdf_path, print_invoice, PrintableInvoice, PrintableRow};
