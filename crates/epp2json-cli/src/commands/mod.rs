//! Subcommands of the `epp2json` binary.

pub mod config;
pub mod convert;
pub mod stats;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::debug;

use epp2json_core::{EppConfig, EppDocument, EppParser, ParseOptions};

/// Input selection shared by the commands that read an EPP file.
#[derive(Args)]
pub struct InputArgs {
    /// Input EPP file
    #[arg(short, long, default_value = "eksport.epp")]
    pub input: PathBuf,

    /// Parse only purchase invoices (drops sale credit notes)
    #[arg(long)]
    pub fz_only: bool,

    /// Parse only sale invoices (drops purchase credit notes)
    #[arg(long)]
    pub fs_only: bool,
}

impl InputArgs {
    /// Apply the command-line switches on top of configured options.
    pub fn parse_options(&self, base: ParseOptions) -> ParseOptions {
        let mut options = base;
        if self.fz_only {
            options = options.purchase_only();
        }
        if self.fs_only {
            options = options.sale_only();
        }
        options
    }

    /// Parse the input file with the effective options.
    pub fn load(&self, config: &EppConfig) -> anyhow::Result<EppDocument> {
        let options = self.parse_options(config.parse);
        debug!("Parse options: {:?}", options);

        EppParser::with_options(options)
            .parse_file(&self.input)
            .with_context(|| format!("Conversion failed for {}", self.input.display()))
    }
}

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("epp2json")
        .join("config.json")
}

/// Load configuration from an explicit path, the default location, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<EppConfig> {
    if let Some(path) = config_path {
        return Ok(EppConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using config file {}", default_path.display());
        Ok(EppConfig::from_file(&default_path)?)
    } else {
        Ok(EppConfig::default())
    }
}
