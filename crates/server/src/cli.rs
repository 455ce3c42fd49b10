use crate::config::ServerConfig;
use clap::{Args, Parser, Subcommand, ValueEnum};
use toleno_api_client::DEFAULT_BASE_URL;

#[derive(Parser, Debug)]
#[command(name = "toleno-mcp", version, about = "Toleno Network MCP server (stdio)")]
pub struct Cli {
    /// Base URL of the Toleno API.
    #[arg(long, env = "TOLENO_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub api_url: String,

    /// API key for account tools. Without it only public tools work.
    #[arg(long, env = "TOLENO_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Log filter (`RUST_LOG` syntax), e.g. `info` or `toleno_mcp=debug`.
    #[arg(long, env = "RUST_LOG", default_value = "info", global = true)]
    pub log_level: String,

    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register this server in the Claude Desktop config.
    #[command(visible_alias = "install")]
    Setup(SetupArgs),
}

#[derive(Args, Debug)]
pub struct SetupArgs {
    /// API key to install (`tlno_...`). Prompted for when omitted.
    #[arg(long)]
    pub key: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl Cli {
    #[must_use]
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig::new(self.api_url.clone(), self.api_key.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, LogFormat};
    use clap::{CommandFactory as _, Parser as _};

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn explicit_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "toleno-mcp",
            "--api-url",
            "http://127.0.0.1:9/api",
            "--api-key",
            "tlno_abc",
            "--log-format",
            "json",
        ])
        .expect("parse");
        assert_eq!(cli.api_url, "http://127.0.0.1:9/api");
        assert_eq!(cli.log_format, LogFormat::Json);
        assert!(cli.command.is_none());
        assert!(cli.server_config().credential.is_some());
    }

    #[test]
    fn install_is_an_alias_for_setup() {
        let cli = Cli::try_parse_from(["toleno-mcp", "install", "--key", "tlno_abc"])
            .expect("parse");
        let Some(Command::Setup(args)) = cli.command else {
            panic!("expected setup command");
        };
        assert_eq!(args.key.as_deref(), Some("tlno_abc"));
    }
}
