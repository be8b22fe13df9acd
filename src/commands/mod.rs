pub mod report;

use anyhow::Result;
use clap::Parser;

/// Exit code for malformed command-line arguments.
pub const USAGE_EXIT_CODE: i32 = 1;

#[derive(Debug, Parser, PartialEq)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(flatten)]
    pub report: report::ReportArgs,
}

impl Cli {
    /// Parses the process arguments.
    ///
    /// Invalid arguments print clap's usage message and exit with
    /// [`USAGE_EXIT_CODE`]; `--help` and `--version` exit successfully.
    pub fn parse_args() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(e) if e.use_stderr() => {
                e.print().ok();
                std::process::exit(USAGE_EXIT_CODE);
            }
            Err(e) => e.exit(),
        }
    }

    pub async fn menu() -> Result<()> {
        let cli = Self::parse_args();
        report::cmd(cli.report).await
    }
}
