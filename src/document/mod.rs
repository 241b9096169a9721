mod edit;
mod item;
mod party;
mod state;

pub use edit::{parse_assignment, Edit, InvoiceField, ItemField};
pub use item::{coerce_number, ItemId, LineItem};
pub use party::{BankDetails, Client, Company};
pub use state::InvoiceState;

use crate::error::{InvoiceError, Result};
use std::fs;
use std::path::Path;

/// Comment written at the top of new invoice documents
pub const DOCUMENT_HEADER: &str = r#"# Invoice document.
#
# Numbers may be written as strings; blank or non-numeric text counts as 0.
# Dates are "YYYY-MM-DD" or "" when not set.
#
# Preview:  gst-invoice show <this file>
# Print:    gst-invoice pdf <this file>

"#;

/// Load an invoice document (TOML)
pub fn load_invoice(path: &Path) -> Result<InvoiceState> {
    if !path.exists() {
        return Err(InvoiceError::DocumentNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let state: InvoiceState = toml::from_str(&content).map_err(|e| InvoiceError::DocumentParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    state.check_item_ids()?;

    tracing::debug!(path = %path.display(), items = state.items.len(), "loaded invoice document");
    Ok(state)
}

/// Render a document as TOML, header comment included
pub fn to_document_string(state: &InvoiceState) -> Result<String> {
    let body = toml::to_string_pretty(state)?;
    Ok(format!("{DOCUMENT_HEADER}{body}"))
}

/// Write an invoice document, refusing to replace an existing file unless `overwrite`
pub fn save_invoice(path: &Path, state: &InvoiceState, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        return Err(InvoiceError::AlreadyExists(path.to_path_buf()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, to_document_string(state)?)?;

    tracing::debug!(path = %path.display(), "saved invoice document");
    Ok(())
}
