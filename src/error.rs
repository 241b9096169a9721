use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvoiceError {
    #[error("Invoice document not found: {0}. Run 'gst-invoice init {0}' to create it.")]
    DocumentNotFound(PathBuf),

    #[error("Failed to parse invoice document {path}: {source}")]
    DocumentParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize invoice document: {0}")]
    DocumentSerialize(#[from] toml::ser::Error),

    #[error("Invoice document already exists at {0}. Use --force to overwrite it.")]
    AlreadyExists(PathBuf),

    #[error("Duplicate item id {0} in invoice document")]
    DuplicateItemId(u64),

    #[error("Item {0} not found on this invoice")]
    ItemNotFound(u64),

    #[error("Unknown field '{0}'. Use e.g. 'number', 'company.name', 'igst_rate' or 'items.1.rate'")]
    UnknownField(String),

    #[error("Invalid edit '{0}'. Expected 'key=value' (e.g., 'igst_rate=18')")]
    InvalidEdit(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid amount '{amount}': {reason}")]
    InvalidAmount { amount: String, reason: String },

    #[error("Typst not found. Install it from https://typst.app/ or run: cargo install typst-cli")]
    TypstNotFound,

    #[error("Failed to generate PDF: {0}")]
    PdfGeneration(String),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InvoiceError>;
