use std::{env, path::PathBuf, time::Duration};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATA_PATH: &str = "data/moods.json";
pub const DEFAULT_AUTH_DELAY_MS: u64 = 1500;
pub const DEFAULT_CHAT_DELAY_MIN_MS: u64 = 1000;
pub const DEFAULT_CHAT_DELAY_MAX_MS: u64 = 2000;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub auth_delay: Duration,
    pub chat_delay_min: Duration,
    pub chat_delay_max: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            auth_delay: Duration::from_millis(DEFAULT_AUTH_DELAY_MS),
            chat_delay_min: Duration::from_millis(DEFAULT_CHAT_DELAY_MIN_MS),
            chat_delay_max: Duration::from_millis(DEFAULT_CHAT_DELAY_MAX_MS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Unset or unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let millis = |key: &str, default: u64| {
            lookup(key)
                .and_then(|value| value.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };

        let port = lookup("PORT")
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let data_path = lookup("APP_DATA_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
        let min = millis("APP_CHAT_DELAY_MIN_MS", DEFAULT_CHAT_DELAY_MIN_MS);
        let max = millis("APP_CHAT_DELAY_MAX_MS", DEFAULT_CHAT_DELAY_MAX_MS).max(min.saturating_add(1));

        Self {
            port,
            data_path,
            auth_delay: Duration::from_millis(millis("APP_AUTH_DELAY_MS", DEFAULT_AUTH_DELAY_MS)),
            chat_delay_min: Duration::from_millis(min),
            chat_delay_max: Duration::from_millis(max),
        }
    }
}
