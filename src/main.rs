use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use gst_invoice::calc::{day_span_label, format_money, number_to_words, parse_date};
use gst_invoice::document::{load_invoice, parse_assignment, save_invoice, InvoiceState, ItemId};
use gst_invoice::error::{InvoiceError, Result};
use gst_invoice::invoice::{default_pdf_path, print_invoice, render_preview, InvoiceSummary};

#[derive(Parser)]
#[command(name = "gst-invoice")]
#[command(version, about = "GST invoice calculator with Indian amount-in-words", long_about = None)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an invoice document pre-filled with a sample invoice
    Init {
        /// Path of the invoice document to create (TOML)
        file: PathBuf,

        /// Start from an empty invoice dated today instead of the sample
        #[arg(long)]
        blank: bool,

        /// Overwrite the file if it already exists
        #[arg(short, long)]
        force: bool,
    },

    /// Preview an invoice with computed totals and amount in words
    Show {
        /// Invoice document (TOML)
        file: PathBuf,

        /// Override a field for this run, e.g. "igst_rate=18" or "items.2.rate=5" (can be repeated)
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Append a blank line item (applied before --set)
        #[arg(long)]
        add_item: bool,

        /// Drop a line item by id (can be repeated)
        #[arg(long, value_name = "ID")]
        remove_item: Vec<u64>,

        /// Print a JSON summary instead of the text preview
        #[arg(long)]
        json: bool,
    },

    /// Print an invoice to PDF (requires typst)
    Pdf {
        /// Invoice document (TOML)
        file: PathBuf,

        /// Output PDF path (default: the document path with .pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override a field for this run (can be repeated)
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },

    /// Spell out a rupee amount, rounded to whole rupees
    Words {
        /// Amount, e.g. 34260.77
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Count days between two dates, both ends included
    Days {
        /// Start date (YYYY-MM-DD, or "" for none)
        from: String,

        /// End date (YYYY-MM-DD, or "" for none)
        to: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for piping.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { file, blank, force } => cmd_init(&file, blank, force),
        Commands::Show {
            file,
            set,
            add_item,
            remove_item,
            json,
        } => cmd_show(&file, &set, add_item, &remove_item, json),
        Commands::Pdf { file, output, set } => cmd_pdf(&file, output, &set),
        Commands::Words { amount } => cmd_words(&amount),
        Commands::Days { from, to } => cmd_days(&from, &to),
    }
}

/// Write a new invoice document
fn cmd_init(file: &Path, blank: bool, force: bool) -> Result<()> {
    let state = if blank {
        InvoiceState::blank(chrono::Local::now().date_naive())
    } else {
        InvoiceState::sample()
    };

    save_invoice(file, &state, force)?;

    println!("Created invoice document at: {}", file.display());
    println!();
    println!("Next steps:");
    println!("  1. Fill in your details:  $EDITOR {}", file.display());
    println!("  2. Preview the totals:    gst-invoice show {}", file.display());
    println!("  3. Print it:              gst-invoice pdf {}", file.display());

    Ok(())
}

/// Load a document and apply the in-memory edits given on the command line
fn load_with_edits(
    file: &Path,
    sets: &[String],
    add_item: bool,
    remove_items: &[u64],
) -> Result<InvoiceState> {
    let mut state = load_invoice(file)?;

    for id in remove_items {
        state = state.with_item_removed(ItemId(*id));
    }
    if add_item {
        state = state.with_item_added();
    }
    for assignment in sets {
        let (edit, value) = parse_assignment(assignment)?;
        state = state.apply(&edit, &value)?;
    }

    Ok(state)
}

/// Preview an invoice
fn cmd_show(
    file: &Path,
    sets: &[String],
    add_item: bool,
    remove_items: &[u64],
    json: bool,
) -> Result<()> {
    let state = load_with_edits(file, sets, add_item, remove_items)?;

    if json {
        let summary = InvoiceSummary::from_state(&state);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", render_preview(&state));
    }

    Ok(())
}

/// Print an invoice to PDF
fn cmd_pdf(file: &Path, output: Option<PathBuf>, sets: &[String]) -> Result<()> {
    let state = load_with_edits(file, sets, false, &[])?;
    let output = output.unwrap_or_else(|| default_pdf_path(file));

    let pdf_path = print_invoice(&state, &output)?;
    let totals = state.totals();

    println!("Printed invoice {}", state.number);
    println!("  Client: {}", state.client.name);
    println!(
        "  Total:  {}",
        format_money(totals.grand_total, &state.currency_symbol)
    );
    println!("  Saved:  {}", pdf_path.display());

    Ok(())
}

/// Spell out an amount
fn cmd_words(input: &str) -> Result<()> {
    let invalid = |reason: &str| InvoiceError::InvalidAmount {
        amount: input.to_string(),
        reason: reason.to_string(),
    };

    let amount: f64 = input
        .trim()
        .parse()
        .map_err(|_| invalid("must be a number"))?;
    if !amount.is_finite() {
        return Err(invalid("must be a number"));
    }

    let rounded = amount.round();
    if rounded < 0.0 {
        return Err(invalid("must not be negative"));
    }
    if rounded >= u64::MAX as f64 {
        return Err(invalid("too large"));
    }

    println!("{}", number_to_words(rounded as u64));
    Ok(())
}

/// Inclusive day count; prints an empty line when it cannot be computed
fn cmd_days(from: &str, to: &str) -> Result<()> {
    let from = parse_date(from)?;
    let to = parse_date(to)?;
    println!("{}", day_span_label(from, to));
    Ok(())
}
