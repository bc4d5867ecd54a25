//! Command line interface

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use limitup_core::RoundingRule;

/// Scan a daily bar panel for limit-up events (sealed vs broken)
#[derive(Debug, Parser)]
#[command(name = "limitup", version, about)]
pub struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Panel file (.csv or .json), overrides `input_path`
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory for the summary and event reports
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Only report events on this trading day (YYYY-MM-DD or YYYYMMDD)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Exclusion policy: none, list or marker
    #[arg(long)]
    pub exclusion: Option<String>,

    /// File of restricted codes, one per line (used by the `list` policy)
    #[arg(long)]
    pub restricted: Option<PathBuf>,

    /// Midpoint rounding rule for limit prices
    #[arg(long, value_enum)]
    pub rounding: Option<RoundingArg>,

    /// Write reports without a UTF-8 byte order mark
    #[arg(long)]
    pub no_bom: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoundingArg {
    HalfAway,
    HalfEven,
}

impl From<RoundingArg> for RoundingRule {
    fn from(arg: RoundingArg) -> Self {
        match arg {
            RoundingArg::HalfAway => RoundingRule::HalfAwayFromZero,
            RoundingArg::HalfEven => RoundingRule::HalfEven,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_are_unset() {
        let cli = Cli::parse_from(["limitup"]);
        assert!(cli.config.is_none());
        assert!(cli.input.is_none());
        assert!(cli.date.is_none());
        assert!(!cli.no_bom);
    }
}
