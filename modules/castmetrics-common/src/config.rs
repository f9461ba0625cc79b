use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream API key. `None` when unset; data endpoints must then answer
    /// with an explicit configuration error instead of calling out.
    pub neynar_api_key: Option<String>,

    // Web server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A missing API key is not fatal here: the server still starts and
    /// serves the health probe, and every data endpoint fails per-request
    /// with a configuration error.
    pub fn from_env() -> Self {
        Self {
            neynar_api_key: env::var("NEYNAR_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: env::var("WEB_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("WEB_PORT must be a number"),
        }
    }
}
