use std::path::Path;
use std::process::Command;

use crate::error::{InvoiceError, Result};
use crate::invoice::PrintableInvoice;

/// Embedded Typst template for the GST invoice.
/// All amounts arrive preformatted; the template only lays them out.
const INVOICE_TEMPLATE: &str = r##"// GST Invoice Template
// Data is loaded from JSON file

#let data = json("DATA_JSON_PATH")

#set page(
  paper: "a4",
  margin: (top: 1.5cm, bottom: 1.5cm, left: 1.5cm, right: 1.5cm),
)

#set text(size: 9pt)

#let lines(s) = s.split("\n").join(linebreak())

// Header strip: GSTIN, title, phone
#grid(
  columns: (1fr, 1fr, 1fr),
  align: (left, center, right),
  [*GSTIN No.* #data.company.gstin],
  [*#data.title*],
  [#lines(data.company.phone)],
)

#align(center)[
  #text(size: 20pt, weight: "bold")[#data.company.name]
  #v(0.2em)
  #text(size: 8pt)[#lines(data.company.address)]
]

#grid(
  columns: (1fr, 1fr),
  align: (left, right),
  [*Invoice No.* #data.number],
  [*Dated:* #data.date],
)

#line(length: 100%, stroke: 1pt + black)

// Recipient and delivery
#grid(
  columns: (1fr, 1fr),
  column-gutter: 1em,
  [
    *Full Name & Address of Recipient* \
    #text(weight: "semibold")[#data.client.name] \
    #lines(data.client.address) \
    *GSTIN:* #data.client.gstin
  ],
  [
    *Address of Delivery* \
    #lines(data.client.delivery_address)
  ],
)

#line(length: 100%, stroke: 1pt + black)

// Line items table
#table(
  columns: (auto, 1fr, auto, auto, auto, auto, auto, auto),
  align: (center, left, left, left, left, center, right, right),
  stroke: 0.5pt + gray,
  inset: 6pt,
  fill: (x, y) => if y == 0 { luma(240) } else { none },

  // Header
  [*QTY*], [*Items*], [*HSN Code*], [*From*], [*To*], [*Days*], [*Rate*], [*Amount*],

  // Items
  ..data.rows.map(row => (
    row.quantity,
    row.description,
    row.hsn_code,
    row.from_date,
    row.to_date,
    row.days,
    row.rate,
    row.amount,
  )).flatten()
)

#line(length: 100%, stroke: 1pt + black)

// Words and bank details on the left, totals on the right
#grid(
  columns: (3fr, 2fr),
  column-gutter: 1em,
  [
    *Amount in words:* #data.amount_in_words
    #v(1em)
    *#data.bank.account_holder* \
    Bank Name: #data.bank.bank_name \
    A/C No.: #data.bank.account_number \
    IFSC Code: #data.bank.ifsc_code
  ],
  [
    #table(
      columns: (1fr, auto),
      stroke: (x, y) => (bottom: 0.5pt + gray),
      align: (left, right),
      inset: 4pt,

      [*Total*], [#data.subtotal],
      [SGST \@ #data.sgst_rate %], [#data.sgst_amount],
      [CGST \@ #data.cgst_rate %], [#data.cgst_amount],
      [IGST \@ #data.igst_rate %], [#data.igst_amount],
      [Cartage], [#data.cartage],
      [*G. TOTAL*], [*#data.grand_total*],
    )
  ],
)

#v(1em)

#grid(
  columns: (3fr, 2fr),
  column-gutter: 1em,
  [#text(size: 8pt)[#lines(data.terms)]],
  align(center)[
    *For #data.company.name*
    #v(3em)
    (Signature)
  ],
)
"##;

/// Generate PDF using Typst CLI
pub fn generate_pdf(invoice_data: &PrintableInvoice, output_path: &Path) -> Result<()> {
    // Check if typst is available
    let typst_check = Command::new("typst").arg("--version").output();

    if typst_check.is_err() {
        return Err(InvoiceError::TypstNotFound);
    }

    let temp_dir = std::env::temp_dir().join("gst-invoice");
    std::fs::create_dir_all(&temp_dir)?;

    let json_data = serde_json::to_string(invoice_data)
        .map_err(|e| InvoiceError::PdfGeneration(e.to_string()))?;

    let json_path = temp_dir.join("data.json");
    std::fs::write(&json_path, &json_data)?;

    // data.json sits next to the template, so a relative path is enough
    let template_content = INVOICE_TEMPLATE.replace("DATA_JSON_PATH", "data.json");
    let template_path = temp_dir.join("invoice.typ");
    std::fs::write(&template_path, &template_content)?;

    tracing::debug!(template = %template_path.display(), "running typst compile");

    let output = Command::new("typst")
        .arg("compile")
        .arg("--root")
        .arg(&temp_dir)
        .arg(&template_path)
        .arg(output_path)
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(InvoiceError::PdfGeneration(stderr.to_string()));
    }

    // Clean up temp files
    let _ = std::fs::remove_file(&template_path);
    let _ = std::fs::remove_file(&json_path);

    Ok(())
}
