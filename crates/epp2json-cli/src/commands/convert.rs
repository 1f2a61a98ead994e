//! Convert command - write an EPP file out as JSON.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use console::style;
use tracing::debug;

use epp2json_core::query::invoice_stats;
use epp2json_core::{to_json, write_output};

use super::{load_config, InputArgs};

/// Arguments for the convert command.
#[derive(Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output JSON file (default: faktury.json or the configured path)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the simplified invoice listing instead of the full document
    #[arg(long)]
    brief: bool,

    /// Write compact JSON without indentation
    #[arg(long)]
    compact: bool,
}

pub fn run(args: ConvertArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let document = args.input.load(&config)?;
    let pretty = config.output.pretty && !args.compact;

    let json = if args.brief {
        to_json(&document.briefs(), pretty)
    } else {
        to_json(&document, pretty)
    };
    let json = json.context("JSON conversion failed")?;

    let output_path = args.output.unwrap_or(config.output.default_output);
    write_output(json.as_bytes(), &output_path).context("Saving output failed")?;

    let stats = invoice_stats(&document);

    println!("{} Conversion finished", style("✓").green());
    println!("Processed {} invoices", stats.total);
    println!("Output written to {}", output_path.display());
    println!("Purchase invoices (FZ): {}", stats.purchase);
    println!("Sale invoices (FS): {}", stats.sale);

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
