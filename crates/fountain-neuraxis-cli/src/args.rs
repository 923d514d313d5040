use clap::Parser;
use fountain_neuraxis_config::OutputFormat;
use std::path::PathBuf;

/// Parse Fountain screenplays and print their structure.
#[derive(Debug, Parser)]
#[command(name = "fountain-neuraxis-cli", version)]
pub struct CliArgs {
    /// Output format, `outline` or `json` (overrides the config file)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// A `.fountain` file or a folder of them (defaults to the configured scripts_path)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}
