use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use stripe_decoder::reference::ReferencePaths;
use stripe_decoder::{DecoderConfig, OutputFormat, ReferenceSource};

/// Reference directory used when no reference flags are given.
const REFERENCE_DIR_ENV: &str = "STRIPE_REFERENCE_DIR";

/// Decode RSPS3000 rail ticket magnetic stripe records.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Stripe records, each exactly 38 hex digits
    #[arg(value_name = "RECORD", required = true)]
    records: Vec<String>,

    /// Directory holding one *.TTY ticket type file and one *.xml ticket type document
    ///
    /// Defaults to $STRIPE_REFERENCE_DIR when neither this nor --capri/--ticket-types is given.
    #[arg(long, conflicts_with_all = ["capri", "ticket_types"])]
    reference_dir: Option<PathBuf>,

    /// Fixed-width ticket type file
    #[arg(long, requires = "ticket_types")]
    capri: Option<PathBuf>,

    /// XML ticket type document
    #[arg(long, requires = "capri")]
    ticket_types: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl Args {
    /// Build the run configuration. Explicit reference flags win over
    /// `env_dir`, the directory named by the environment.
    fn config(&self, env_dir: Option<PathBuf>) -> DecoderConfig {
        let reference = match (&self.reference_dir, &self.capri, &self.ticket_types) {
            (Some(dir), _, _) => ReferenceSource::Directory(dir.clone()),
            (None, Some(capri), Some(names)) => {
                ReferenceSource::Files(ReferencePaths::new(capri, names))
            }
            _ => env_dir.map_or(ReferenceSource::None, ReferenceSource::Directory),
        };

        DecoderConfig::new(reference, self.format)
    }
}

fn program_name() -> String {
    std::env::args()
        .next()
        .as_deref()
        .map(std::path::Path::new)
        .and_then(|p| p.file_stem())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let env_dir = std::env::var_os(REFERENCE_DIR_ENV)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from);
    let config = args.config(env_dir);

    let stdout = std::io::stdout();
    match stripe_decoder::run(&config, args.records.as_slice(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: error: {e}", program_name());
            ExitCode::FAILURE
        }
    }
}
