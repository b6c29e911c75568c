use anyhow::Context;
use clap::Parser;
use delimlog_core::Config;
use delimlog_feeds::{JsonLinesSource, WriterTransport};
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncWrite, BufReader};

#[derive(Parser)]
#[command(name = "delimlog", about = "Format JSON-lines log entries into delimited records")]
struct Cli {
    /// TOML config file with `[formatter]` and `[pipeline]` sections.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read entries from this file instead of stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write records to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log at debug level (overridden by RUST_LOG).
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    let stage = delimlog::build_stage(&config)?;

    let input: Box<dyn AsyncBufRead + Unpin + Send> = match &cli.input {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("opening input {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };
    let output: Box<dyn AsyncWrite + Unpin + Send> = match &cli.output {
        Some(path) => Box::new(
            tokio::fs::File::create(path)
                .await
                .with_context(|| format!("creating output {}", path.display()))?,
        ),
        None => Box::new(tokio::io::stdout()),
    };

    let source = JsonLinesSource::new(input, config.pipeline.batch_size);
    let mut transport = WriterTransport::new(output);
    delimlog::run(
        source,
        stage.as_ref(),
        &mut transport,
        config.pipeline.channel_capacity,
    )
    .await?;
    Ok(())
}
