use anyhow::Context;
use clap::Parser;
use recon::output::{self, OutputFormat};
use recon_core::config::Config;
use recon_core::Normalizer;
use recon_feeds::{driver, FileSource, StdinSource};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recon", about = "Normalize loosely-typed task records into canonical JSON")]
struct Cli {
    /// JSON array or JSON Lines file to read. Reads JSON Lines from stdin
    /// when omitted or `-`.
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Config file (defaults to ~/.config/recon/config.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON array output.
    #[arg(long)]
    pretty: bool,

    /// Write JSON Lines instead of one array.
    #[arg(long)]
    lines: bool,

    /// Log at debug level to stderr.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = Config::load(cli.config.as_deref()).context("loading config")?;
    let normalizer = Normalizer::new(config.defaults);

    let records = match cli.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let source = FileSource::open(path)
                .await
                .with_context(|| format!("opening {}", path.display()))?;
            driver::collect(source, &normalizer).await
        }
        _ => driver::collect(StdinSource::new(), &normalizer).await,
    }
    .context("reading records")?;

    let format = OutputFormat::from_flags(
        cli.pretty || config.output.pretty,
        cli.lines || config.output.lines,
    );
    tracing::debug!(records = records.len(), ?format, "writing canonical records");
    output::write_records(std::io::stdout().lock(), &records, format)
}
