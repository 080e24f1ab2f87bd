//! Process command - parse one invoice PDF and record it.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use invox_core::db::{InvoiceRecorder, connect};
use invox_core::invoice::{InvoiceParser, RuleBasedParser};
use invox_core::models::config::InvoxConfig;
use invox_core::models::invoice::InvoiceRecord;
use invox_core::pdf::{PdfSource, PdfTextExtractor};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input invoice PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Output file for the parsed record (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Parse and report only, skip the database write
    #[arg(long)]
    no_persist: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text field report
    Text,
    /// JSON output
    Json,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    // Load configuration
    let config = if let Some(path) = config_path {
        InvoxConfig::from_file(std::path::Path::new(path))?
    } else {
        InvoxConfig::default()
    }
    .with_env_overrides();

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let data = fs::read(&args.input)?;
    let mut source = PdfTextExtractor::new();
    source.load(&data)?;
    debug!("PDF has {} pages", source.page_count());

    let text = source.extract_text()?;
    if text.trim().len() < config.pdf.min_text_length {
        anyhow::bail!("No usable text could be extracted from the PDF");
    }

    let record = RuleBasedParser::new().parse(&text);

    // Report the parsed fields
    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&record)?,
        OutputFormat::Text => format_text(&record),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Parsed record written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.no_persist {
        return Ok(());
    }

    // Record the invoice
    let pool = connect(&config.database).await?;
    let recorder = InvoiceRecorder::new(pool);
    recorder.persist(&record).await?;

    println!(
        "{} Invoice {} recorded for payer {}",
        style("✓").green(),
        record.invoice_number,
        record.payer_name()
    );

    Ok(())
}

fn format_text(record: &InvoiceRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("from_address: {}\n", record.from_address));
    output.push_str(&format!("from_gstin: {}\n", record.from_gstin));
    output.push_str(&format!("to_address: {}\n", record.to_address));
    output.push_str(&format!("to_gstin: {}\n", record.to_gstin));
    output.push_str(&format!("invoice_number: {}\n", record.invoice_number));
    output.push_str(&format!("invoice_date: {}\n", record.invoice_date));
    output.push_str(&format!("po_number: {}\n", record.po_number));
    output.push_str(&format!("po_date: {}\n", record.po_date));
    output.push_str(&format!("grand_total: {}\n", record.grand_total));

    output.push_str("items:\n");
    for item in &record.items {
        output.push_str(&format!(
            "  - {} x{} @ {} = {}\n",
            item.description, item.quantity, item.unit_price, item.total_price
        ));
    }

    output
}
