//! Merging the server registration into `claude_desktop_config.json`.

use anyhow::Context as _;
use serde_json::{Map, Value, json};
use std::fmt;
use std::path::Path;

/// Key under `mcpServers` that identifies this server.
pub const SERVER_KEY: &str = "Toleno Network";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    Added,
    Updated,
}

impl fmt::Display for MergeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added => f.write_str("Added"),
            Self::Updated => f.write_str("Updated"),
        }
    }
}

/// `mcpServers` entry launching `command` with the key in its environment.
#[must_use]
pub fn server_entry(command: &Path, api_key: &str) -> Value {
    json!({
        "command": command.to_string_lossy(),
        "args": [],
        "env": { "TOLENO_API_KEY": api_key },
    })
}

/// Insert or replace [`SERVER_KEY`] in the config at `path`, keeping every other setting.
///
/// A missing file (and its parent directory) is created. Output is pretty JSON with a trailing
/// newline.
///
/// # Errors
///
/// Fails without touching the file if it exists but is not a JSON object, or if its
/// `mcpServers` is not an object. Also fails on I/O errors.
pub fn merge_server_entry(path: &Path, entry: Value) -> anyhow::Result<MergeOutcome> {
    let mut config = match std::fs::read(path) {
        Ok(bytes) => {
            let value: Value = serde_json::from_slice(&bytes)
                .with_context(|| format!("parse {}", path.display()))?;
            match value {
                Value::Object(map) => map,
                _ => anyhow::bail!("{} is not a JSON object", path.display()),
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create dir {}", parent.display()))?;
            }
            Map::new()
        }
        Err(e) => return Err(e).with_context(|| format!("read config {}", path.display())),
    };

    let servers = config
        .entry("mcpServers")
        .or_insert_with(|| Value::Object(Map::new()));
    if servers.is_null() {
        *servers = Value::Object(Map::new());
    }
    let Some(servers) = servers.as_object_mut() else {
        anyhow::bail!("mcpServers in {} is not a JSON object", path.display());
    };

    let outcome = if servers.insert(SERVER_KEY.to_string(), entry).is_some() {
        MergeOutcome::Updated
    } else {
        MergeOutcome::Added
    };

    let mut out = serde_json::to_string_pretty(&Value::Object(config))
        .context("serialize config as json")?;
    out.push('\n');
    std::fs::write(path, out).with_context(|| format!("write config {}", path.display()))?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::{MergeOutcome, SERVER_KEY, merge_server_entry, server_entry};
    use serde_json::{Value, json};
    use std::path::Path;

    fn read(path: &Path) -> Value {
        serde_json::from_slice(&std::fs::read(path).expect("read")).expect("json")
    }

    #[test]
    fn creates_missing_file_and_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("Claude").join("claude_desktop_config.json");

        let entry = server_entry(Path::new("/usr/local/bin/toleno-mcp"), "tlno_abc");
        let outcome = merge_server_entry(&path, entry).expect("merge");
        assert_eq!(outcome, MergeOutcome::Added);

        let raw = std::fs::read_to_string(&path).expect("read");
        assert!(raw.ends_with("}\n"));
        assert_eq!(
            read(&path),
            json!({
                "mcpServers": {
                    "Toleno Network": {
                        "command": "/usr/local/bin/toleno-mcp",
                        "args": [],
                        "env": {"TOLENO_API_KEY": "tlno_abc"},
                    }
                }
            })
        );
    }

    #[test]
    fn keeps_other_servers_and_settings_and_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("claude_desktop_config.json");
        std::fs::write(
            &path,
            r#"{"theme":"dark","mcpServers":{"other":{"command":"x"},"Toleno Network":{"command":"npx"}}}"#,
        )
        .expect("write");

        let entry = server_entry(Path::new("toleno-mcp"), "tlno_new");
        assert_eq!(
            merge_server_entry(&path, entry.clone()).expect("merge"),
            MergeOutcome::Updated
        );
        let first = std::fs::read(&path).expect("read");
        assert_eq!(
            merge_server_entry(&path, entry).expect("merge"),
            MergeOutcome::Updated
        );
        assert_eq!(std::fs::read(&path).expect("read"), first);

        let v = read(&path);
        assert_eq!(v["theme"], json!("dark"));
        assert_eq!(v["mcpServers"]["other"], json!({"command": "x"}));
        assert_eq!(
            v["mcpServers"][SERVER_KEY]["env"]["TOLENO_API_KEY"],
            json!("tlno_new")
        );
    }

    #[test]
    fn unparseable_file_is_left_untouched() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("claude_desktop_config.json");
        std::fs::write(&path, "{ not json").expect("write");

        let err = merge_server_entry(&path, json!({})).unwrap_err();
        assert!(err.to_string().starts_with("parse "));
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "{ not json");
    }

    #[test]
    fn non_object_mcp_servers_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("claude_desktop_config.json");
        std::fs::write(&path, r#"{"mcpServers":[]}"#).expect("write");

        let err = merge_server_entry(&path, json!({})).unwrap_err();
        assert!(err.to_string().contains("mcpServers"));
    }

    #[test]
    fn existing_key_order_survives_the_merge() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("claude_desktop_config.json");
        std::fs::write(
            &path,
            r#"{"zeta":1,"mcpServers":{"zz":{"command":"y"},"Toleno Network":{"command":"npx"},"aa":{"command":"z"}},"alpha":2}"#,
        )
        .expect("write");

        merge_server_entry(&path, server_entry(Path::new("x"), "tlno_k")).expect("merge");

        let raw = std::fs::read_to_string(&path).expect("read");
        let order = |keys: &[&str]| {
            let at: Vec<usize> = keys
                .iter()
                .map(|k| raw.find(&format!("\"{k}\"")).expect(k))
                .collect();
            at.windows(2).all(|w| w[0] < w[1])
        };
        assert!(order(&["zeta", "mcpServers", "zz", SERVER_KEY, "aa", "alpha"]), "{raw}");

        let v = read(&path);
        let entry = v["mcpServers"][SERVER_KEY].as_object().expect("entry");
        assert_eq!(
            entry.keys().map(String::as_str).collect::<Vec<_>>(),
            ["command", "args", "env"]
        );
    }
}
