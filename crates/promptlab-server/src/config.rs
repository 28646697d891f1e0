//! Server Configuration
//!
//! Collected from the environment once at startup; request handlers
//! never read the environment directly.

use std::env;

const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";
const DEFAULT_PORT: u16 = 5000;

/// Runtime configuration for the server
#[derive(Debug, Clone)]
pub struct Config {
    /// Base address of the Ollama inference server (`OLLAMA_HOST`)
    pub ollama_host: String,
    /// When true, failed completions are replaced with a simulated
    /// response embedding the failure reason. Derived from
    /// `PROMPTLAB_ENV`: enabled unless the environment is `production`.
    pub demo_fallback: bool,
    /// Listen port (`PORT`)
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ollama_host: DEFAULT_OLLAMA_HOST.to_string(),
            demo_fallback: true,
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let ollama_host = env::var("OLLAMA_HOST")
            .unwrap_or_else(|_| DEFAULT_OLLAMA_HOST.to_string());

        let production = env::var("PROMPTLAB_ENV")
            .map(|v| v.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            ollama_host,
            demo_fallback: !production,
            port,
        }
    }
}
