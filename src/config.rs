use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Process-wide configuration, read once on first access.
///
/// Values come from environment variables prefixed with `ESTANTE_`
/// (e.g. `ESTANTE_DATABASE_URL`), merged over the defaults below.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:database.db".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    fn load() -> Self {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("ESTANTE_"))
            .extract()
            .expect("invalid configuration")
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::load);
