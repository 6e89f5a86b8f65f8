//! CLI for pdfetch: `pdfetch <URL> <OUTPUT_FILE> <API_KEY>`.

mod report;

use anyhow::{Context, Result};
use clap::Parser;
use pdfetch_core::config;
use pdfetch_core::{DownloadRequest, Downloader, Outcome};
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use report::write_outcome;

/// Number of positional arguments the tool takes.
const ARG_COUNT: usize = 3;

/// Fetch a PDF through the ZenRows API and save it if it really is a PDF.
///
/// Help and version flags are disabled: any invocation that is not exactly
/// three values gets the usage text and exit code 1.
#[derive(Debug, Parser)]
#[command(name = "pdfetch")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// URL of the protected PDF.
    #[arg(allow_hyphen_values = true)]
    pub url: String,

    /// Where to save the PDF. The parent directory must exist.
    #[arg(allow_hyphen_values = true)]
    pub output: PathBuf,

    /// ZenRows API key.
    #[arg(allow_hyphen_values = true)]
    pub api_key: String,
}

/// Wrong number (or shape) of command-line arguments.
#[derive(Debug)]
pub struct UsageError {
    pub got: usize,
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {} arguments, got {}", ARG_COUNT, self.got)
    }
}

impl std::error::Error for UsageError {}

/// Parse argv (program name first). Anything but exactly three values is a usage error.
pub fn parse_args<I, T>(args: I) -> Result<Cli, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let got = args.len().saturating_sub(1);
    if got != ARG_COUNT {
        return Err(UsageError { got });
    }
    Cli::try_parse_from(args).map_err(|e| {
        tracing::debug!("argument parse failed: {}", e);
        UsageError { got }
    })
}

pub fn usage() -> String {
    concat!(
        "Usage: pdfetch <URL> <OUTPUT_FILE> <API_KEY>\n",
        "\n",
        "Example:\n",
        "  pdfetch \"https://example.com/file.pdf\" output.pdf YOUR_API_KEY\n",
    )
    .to_string()
}

/// Run one download and print the operator messages. Returns the process exit code.
pub fn run(cli: &Cli) -> i32 {
    match execute(cli) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            println!("❌ Error: {:#}", err);
            1
        }
    }
}

fn execute(cli: &Cli) -> Result<Outcome> {
    let cfg = config::load().context("failed to load config")?;
    tracing::debug!("loaded config: {:?}", cfg);

    let req = DownloadRequest::new(cli.url.as_str(), cli.output.as_path(), cli.api_key.as_str());
    println!("Downloading from: {}", req.target_url());
    println!("Using ZenRows API...");

    let outcome = Downloader::new(cfg).fetch_and_save(&req);

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = write_outcome(&mut stdout, &outcome) {
        tracing::warn!("failed to print outcome: {}", e);
    }
    Ok(outcome)
}
