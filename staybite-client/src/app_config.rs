use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub booking: BookingPolicy,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Directory holding the persisted token/user files.
    pub storage_dir: String,
}

/// What a booking flow does when no session token is present. The PG/Room
/// pages only surface a message; the food page also redirects to sign-in.
#[derive(Debug, Deserialize, Clone)]
pub struct BookingPolicy {
    #[serde(default)]
    pub stay_login_redirect: bool,
    #[serde(default = "default_food_redirect")]
    pub food_login_redirect: bool,
}

fn default_food_redirect() -> bool {
    true
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            stay_login_redirect: false,
            food_login_redirect: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of STAYBITE)
            // Eg.. `STAYBITE__API__BASE_URL=...` would set the api base URL
            .add_source(config::Environment::with_prefix("STAYBITE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
