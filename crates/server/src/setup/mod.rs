//! `toleno-mcp setup`: register this server with Claude Desktop.
//!
//! Validates the API key against the profile endpoint, then merges the server entry into every
//! Claude Desktop config file found for this OS. Re-running it is safe.

pub mod desktop_config;
pub mod paths;

use crate::cli::SetupArgs;
use anyhow::Context as _;
use owo_colors::OwoColorize as _;
use std::io::{IsTerminal as _, Write as _};
use std::path::PathBuf;
use std::time::Duration;
use toleno_api_client::{AuthenticatedClient, Credential};
use tracing::{debug, warn};

pub const KEY_PREFIX: &str = "tlno_";

const VALIDATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Run the installer against the API at `api_url`.
///
/// # Errors
///
/// Fails on a malformed or rejected key, or when no config file could be written.
pub async fn run(args: SetupArgs, api_url: &str) -> anyhow::Result<()> {
    println!();
    println!("  {}", "Toleno × Claude: Auto Setup".bold());
    println!();

    let api_key = match args.key.filter(|k| !k.trim().is_empty()) {
        Some(key) => key.trim().to_string(),
        None => prompt_for_key().await?,
    };

    if !api_key.starts_with(KEY_PREFIX) {
        anyhow::bail!("Invalid key: must start with \"{KEY_PREFIX}\"");
    }

    print!("  Validating API key... ");
    let _ = std::io::stdout().flush();
    if !validate_key(api_url, &api_key).await {
        println!("{}", "✗".red());
        anyhow::bail!("Invalid or expired API key. Check your key and try again.");
    }
    println!("{}", "✓".green());

    let command = std::env::current_exe().context("locate toleno-mcp executable")?;
    let paths = paths::config_paths(paths::Platform::current(), |k| std::env::var_os(k));
    let written = install_into(&paths, &command, &api_key);

    if written == 0 {
        anyhow::bail!("Could not write to any Claude Desktop config file.");
    }

    println!();
    println!(
        "  {} Wrote to {written} config file{}",
        "✓".green(),
        if written > 1 { "s" } else { "" }
    );
    println!();
    println!("  Now restart Claude Desktop to connect.");
    println!("  Try asking Claude: \"What is my Toleno mining status?\"");
    println!();
    Ok(())
}

/// Merge the server entry into each config file, skipping the ones that fail.
/// Returns how many files were written.
pub fn install_into(paths: &[PathBuf], command: &std::path::Path, api_key: &str) -> usize {
    let entry = desktop_config::server_entry(command, api_key);
    let mut written = 0;

    for path in paths {
        println!("  Config: {}", path.display());
        match desktop_config::merge_server_entry(path, entry.clone()) {
            Ok(outcome) => {
                println!("    {} {outcome}", "✓".green());
                written += 1;
            }
            Err(err) => {
                warn!(path = %path.display(), error = %format!("{err:#}"), "skipping config file");
                println!("    {} Skipping ({err:#})", "⚠".yellow());
            }
        }
    }

    written
}

/// `true` iff the profile endpoint accepts the key within the timeout.
pub async fn validate_key(api_url: &str, api_key: &str) -> bool {
    let client = match AuthenticatedClient::new(api_url, Credential::new(api_key)) {
        Ok(client) => client,
        Err(err) => {
            debug!(error = %err, "cannot build validation client");
            return false;
        }
    };

    match tokio::time::timeout(VALIDATION_TIMEOUT, client.get("/auth/profile")).await {
        Ok(Ok(_)) => true,
        Ok(Err(err)) => {
            debug!(error = %err, "API key rejected");
            false
        }
        Err(_) => {
            debug!("API key validation timed out");
            false
        }
    }
}

async fn prompt_for_key() -> anyhow::Result<String> {
    if !std::io::stdin().is_terminal() {
        anyhow::bail!("No API key provided. Pass --key or run setup interactively.");
    }

    println!("  You need a Toleno API key to connect Claude to your account.");
    println!("  Get one: Toleno App → Settings → API Keys → Create New Key");
    println!();

    let key = tokio::task::spawn_blocking(|| {
        rpassword::prompt_password(format!("  Enter your API key ({KEY_PREFIX}...): "))
    })
    .await
    .context("key prompt task failed")?
    .context("read API key")?;
    Ok(key.trim().to_string())
}
