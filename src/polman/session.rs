use std::env;

const DEFAULT_CLI_PATH: &str = "./polaris";
const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: &str = "8181";

/// Connection and credential parameters forwarded verbatim to every CLI
/// invocation. Taken as a read-only snapshot per operation; the core never
/// mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Path to the admin CLI binary.
    pub cli_path: String,
    pub host: String,
    pub port: String,
    /// Empty credentials are still forwarded as empty strings, never omitted.
    pub client_id: String,
    pub client_secret: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cli_path: DEFAULT_CLI_PATH.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT.to_string(),
            client_id: String::new(),
            client_secret: String::new(),
        }
    }
}

impl SessionConfig {
    /// Builds a session from the `POLARIS_*` environment, falling back to
    /// the stock defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            cli_path: env_or("POLARIS_CLI_PATH", DEFAULT_CLI_PATH),
            host: env_or("POLARIS_HOST", DEFAULT_HOST),
            port: env_or("POLARIS_PORT", DEFAULT_PORT),
            client_id: env_or("POLARIS_CLIENT_ID", ""),
            client_secret: env_or("POLARIS_CLIENT_SECRET", ""),
        }
    }
}

fn env_or(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_string())
}
