use crate::errors::ClientError;
use crate::messages::Locale;
use std::{env, time::Duration};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub locale: Locale,
    pub first_run: bool,
    pub connect_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: Locale::default(),
            first_run: false,
            connect_timeout: None,
        }
    }
}

pub fn resolve_config() -> Result<ClientConfig, ClientError> {
    resolve_config_with(|key| env::var(key).ok())
}

pub fn resolve_config_with(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ClientConfig, ClientError> {
    let mut config = ClientConfig::default();

    if let Some(url) = lookup("MONITOR_BASE_URL") {
        config.base_url = url.trim_end_matches('/').to_string();
    }
    if let Some(locale) = lookup("MONITOR_LOCALE") {
        config.locale = locale.parse().map_err(ClientError::config)?;
    }
    if let Some(flag) = lookup("MONITOR_FIRST_RUN") {
        config.first_run = parse_flag(&flag)
            .ok_or_else(|| ClientError::config(format!("MONITOR_FIRST_RUN: bad flag '{flag}'")))?;
    }
    if let Some(millis) = lookup("MONITOR_CONNECT_TIMEOUT_MS") {
        let millis = millis
            .parse::<u64>()
            .map_err(|err| ClientError::config(format!("MONITOR_CONNECT_TIMEOUT_MS: {err}")))?;
        config.connect_timeout = Some(Duration::from_millis(millis));
    }

    Ok(config)
}

// The page exposes the first-run marker as the string "0".
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
