//! Runtime configuration for the Rallypoint service.
//!
//! Every setting comes from the environment so the binary can be launched
//! the same way in development and deployment. Missing variables fall back
//! to defaults suitable for a local run.

use std::env;
use std::path::PathBuf;

use log::warn;

/// Default interface the HTTP server binds to
const DEFAULT_HOST: &str = "127.0.0.1";
/// Default port for the web interface
const DEFAULT_PORT: u16 = 8080;
/// Default SQLite database file, created in the working directory on first run
const DEFAULT_DB_PATH: &str = "rallypoint.db";

/// Application configuration resolved from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Interface the HTTP server binds to
    pub host: String,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Path to the SQLite database file
    pub db_path: PathBuf,
    /// API key for the AI-assisted drafting integration, if configured
    pub openai_api_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            openai_api_key: None,
        }
    }
}

impl AppConfig {
    /// Resolve configuration from environment variables.
    ///
    /// Recognized variables: `RALLYPOINT_HOST`, `RALLYPOINT_PORT`,
    /// `RALLYPOINT_DB` and `OPENAI_API_KEY`. An unparsable port value is
    /// reported and replaced with the default rather than aborting startup.
    pub fn from_env() -> Self {
        let host = env::var("RALLYPOINT_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("RALLYPOINT_PORT") {
            Ok(raw) => parse_port(&raw).unwrap_or_else(|| {
                warn!(
                    "Invalid RALLYPOINT_PORT value '{}', using {}",
                    raw, DEFAULT_PORT
                );
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        let db_path = env::var("RALLYPOINT_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_PATH));

        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        AppConfig {
            host,
            port,
            db_path,
            openai_api_key,
        }
    }
}

/// Parse a port number from its textual form. Port 0 is rejected so the
/// server always binds a predictable address.
fn parse_port(raw: &str) -> Option<u16> {
    raw.trim().parse::<u16>().ok().filter(|port| *port != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test the default configuration values
    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_path, PathBuf::from("rallypoint.db"));
        assert!(config.openai_api_key.is_none());
    }

    // Test port parsing accepts valid ports and rejects everything else
    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("8080"), Some(8080));
        assert_eq!(parse_port(" 3000 "), Some(3000));
        assert_eq!(parse_port("0"), None);
        assert_eq!(parse_port("70000"), None);
        assert_eq!(parse_port("eighty"), None);
        assert_eq!(parse_port(""), None);
    }
}
