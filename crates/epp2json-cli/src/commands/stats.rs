//! Stats command - per-type counts, totals and a monthly breakdown.

use clap::Args;
use console::style;

use epp2json_core::query::{
    calculate_totals, count_by_type, filter_by_contractor, filter_by_type, group_by_month,
};
use epp2json_core::{Invoice, Totals};

use super::{load_config, InputArgs};

/// Arguments for the stats command.
#[derive(Args)]
pub struct StatsArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Only include invoices whose contractor code contains this text
    #[arg(long)]
    contractor: Option<String>,
}

pub fn run(args: StatsArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let document = args.input.load(&config)?;

    let invoices: Vec<Invoice> = match &args.contractor {
        Some(code) => filter_by_contractor(&document.invoices, code)
            .into_iter()
            .cloned()
            .collect(),
        None => document.invoices,
    };

    if let Some(code) = &args.contractor {
        println!(
            "{} {} invoices for contractor {}",
            style("ℹ").blue(),
            invoices.len(),
            code
        );
    }

    println!("{}", style("Invoices by type:").bold());
    for (kind, count) in count_by_type(&invoices) {
        println!("  {:<4} {}", kind, count);
    }

    for (label, kind) in [("Purchase invoices (FZ)", "FZ"), ("Sale invoices (FS)", "FS")] {
        let selected = filter_by_type(&invoices, kind);
        println!();
        println!("{}: {}", style(label).bold(), selected.len());
        print_totals(&calculate_totals(selected));
    }

    println!();
    println!("{}", style("Invoices by month:").bold());
    for (month, group) in group_by_month(&invoices) {
        let totals = calculate_totals(group.iter().copied());
        println!("  {}: {} invoices ({:.2} gross)", month, group.len(), totals.gross);
    }

    let overall = calculate_totals(&invoices);
    println!();
    println!("Total gross: {:.2}", overall.gross);

    Ok(())
}

fn print_totals(totals: &Totals) {
    println!("  - Net:   {:.2}", totals.net);
    println!("  - VAT:   {:.2}", totals.vat);
    println!("  - Gross: {:.2}", totals.gross);
}
