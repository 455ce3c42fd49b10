use anyhow::Context as _;
use clap::Parser as _;
use toleno_mcp::cli::{Cli, Command, LogFormat};
use toleno_mcp::{Dispatcher, Registry, TolenoServer};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_format);

    let config = cli.server_config();

    match cli.command {
        Some(Command::Setup(args)) => toleno_mcp::setup::run(args, &config.api_url).await,
        None => {
            let registry = Registry::standard().context("build tool registry")?;
            let dispatcher =
                Dispatcher::new(registry, config).context("configure API clients")?;
            TolenoServer::new(dispatcher).serve_stdio().await
        }
    }
}

/// Logs go to stderr: stdout carries the MCP stream.
fn init_tracing(filter: &str, format: LogFormat) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
