use toleno_api_client::{Credential, DEFAULT_BASE_URL};

/// Runtime settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub api_url: String,
    /// `None` disables every authenticated tool without failing startup.
    pub credential: Option<Credential>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(api_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            api_url: api_url.into(),
            credential: api_key.and_then(Credential::new),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, None)
    }
}

#[cfg(test)]
mod tests {
    use super::ServerConfig;

    #[test]
    fn blank_api_key_counts_as_absent() {
        assert!(ServerConfig::new("http://localhost/api", Some("  ".into())).credential.is_none());
        assert!(ServerConfig::new("http://localhost/api", None).credential.is_none());
        assert!(
            ServerConfig::new("http://localhost/api", Some("tlno_abc".into()))
                .credential
                .is_some()
        );
    }

    #[test]
    fn default_points_at_production_api() {
        let config = ServerConfig::default();
        assert_eq!(config.api_url, "https://api.tolenocoin.com/api");
        assert!(config.credential.is_none());
    }
}
