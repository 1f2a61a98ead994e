//! Validate command - list invoices with missing or suspicious data.

use clap::Args;
use console::style;

use super::{load_config, InputArgs};

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Exit with an error when issues are found
    #[arg(long)]
    strict: bool,
}

pub fn run(args: ValidateArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let document = args.input.load(&config)?;

    let issues: Vec<String> = document
        .invoices
        .iter()
        .flat_map(|invoice| invoice.validate())
        .collect();

    if issues.is_empty() {
        println!(
            "{} All {} invoices are valid",
            style("✓").green(),
            document.invoices.len()
        );
        return Ok(());
    }

    eprintln!("{}", style(format!("Found {} issues:", issues.len())).yellow());
    for issue in &issues {
        eprintln!("  - {}", issue);
    }

    if args.strict {
        anyhow::bail!("{} validation issues found", issues.len());
    }

    Ok(())
}
