//! Extract command - inspect the fields recovered from a single PDF.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use doinv_core::pdf::{PdfExtractor, PdfSource};
use doinv_core::{ExtractedInvoice, InvoiceParser};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let data = fs::read(&args.input)?;
    let mut extractor = PdfExtractor::new();
    extractor.load(&data)?;
    let content = extractor.extract_content()?;

    let text = content.combined_text();
    if text.trim().is_empty() {
        anyhow::bail!("No text extracted from PDF");
    }

    let parser = InvoiceParser::new().with_organization(&config.extraction.organization);
    let invoice = parser.parse(&text);

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&invoice)?,
        OutputFormat::Text => format_invoice_text(&invoice),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_invoice_text(invoice: &ExtractedInvoice) -> String {
    let mut out = String::new();

    out.push_str(&format!("Organization:         {}\n", invoice.organization));
    out.push_str(&format!("Vendor Inv No:        {}\n", invoice.vendor_inv_no));
    out.push_str(&format!("Vendor Inv Date:      {}\n", invoice.vendor_inv_date));
    out.push_str(&format!("BOE No:               {}\n", invoice.boe_no));
    out.push_str(&format!("BOE Date:             {}\n", invoice.boe_date));
    out.push_str(&format!("BL No:                {}\n", invoice.bl_no));
    out.push_str(&format!("Total Amount:         {}\n", invoice.total_amount));
    out.push_str(&format!(
        "Total Invoice Amount: {}\n",
        invoice.total_invoice_amount
    ));
    out.push_str(&format!("CGST:                 {}\n", invoice.cgst));
    out.push_str(&format!("SGST:                 {}\n", invoice.sgst));
    out.push_str(&format!(
        "Charge type:          {}\n",
        if invoice.is_transport {
            "Transport"
        } else {
            "CFS"
        }
    ));

    out
}
