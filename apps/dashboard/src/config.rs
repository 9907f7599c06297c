use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_TITLE: &str = "Self Healing Engine";
const DEFAULT_FOOTER: &str = "Powered by Challengers Team";
const DEFAULT_LOAD_DELAY_MS: u64 = 1_000;
const MAX_LOAD_DELAY_MS: u64 = 10_000;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppProfile {
    Dev,
    Prod,
}

impl AppProfile {
    pub fn from_env(value: Option<String>) -> Self {
        match value.as_deref().map(str::trim) {
            Some("prod") | Some("production") => Self::Prod,
            _ => Self::Dev,
        }
    }

    pub fn log_level(self) -> tracing::Level {
        match self {
            Self::Dev => tracing::Level::DEBUG,
            Self::Prod => tracing::Level::INFO,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub footer: String,
    pub profile: AppProfile,
    /// How long the mock incident API waits before answering.
    pub load_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
            profile: AppProfile::Dev,
            load_delay: Duration::from_millis(DEFAULT_LOAD_DELAY_MS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        crate::config::load_dotenv();

        Self::from_lookup(read_env)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(title) = lookup("DASHBOARD_TITLE").filter(|value| !value.trim().is_empty()) {
            config.title = title;
        }

        if let Some(footer) = lookup("DASHBOARD_FOOTER").filter(|value| !value.trim().is_empty()) {
            config.footer = footer;
        }

        config.profile = AppProfile::from_env(lookup("DASHBOARD_PROFILE"));

        if let Some(ms) =
            lookup("DASHBOARD_LOAD_DELAY_MS").and_then(|value| value.trim().parse::<u64>().ok())
        {
            config.load_delay = Duration::from_millis(ms.min(MAX_LOAD_DELAY_MS));
        }

        config
    }

    pub fn load_delay_ms(&self) -> u32 {
        u32::try_from(self.load_delay.as_millis()).unwrap_or(u32::MAX)
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .or_else(|| option_env_from_build(key).map(|s| s.to_string()))
}

fn option_env_from_build(key: &str) -> Option<&'static str> {
    match key {
        "DASHBOARD_TITLE" => option_env!("DASHBOARD_TITLE"),
        "DASHBOARD_FOOTER" => option_env!("DASHBOARD_FOOTER"),
        "DASHBOARD_PROFILE" => option_env!("DASHBOARD_PROFILE"),
        "DASHBOARD_LOAD_DELAY_MS" => option_env!("DASHBOARD_LOAD_DELAY_MS"),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    if let Err(err) = dotenvy::dotenv() {
        if !matches!(err, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            tracing::warn!("failed to load .env: {err}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn load_dotenv() {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_the_stock_dashboard() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.title, "Self Healing Engine");
        assert_eq!(config.load_delay_ms(), 1_000);
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DASHBOARD_TITLE", "Ops Console"),
            ("DASHBOARD_PROFILE", "production"),
            ("DASHBOARD_LOAD_DELAY_MS", "250"),
        ]));
        assert_eq!(config.title, "Ops Console");
        assert_eq!(config.footer, "Powered by Challengers Team");
        assert_eq!(config.profile, AppProfile::Prod);
        assert_eq!(config.load_delay, Duration::from_millis(250));
    }

    #[test]
    fn bad_delay_falls_back_and_large_delay_is_capped() {
        let config = AppConfig::from_lookup(lookup_from(&[("DASHBOARD_LOAD_DELAY_MS", "soon")]));
        assert_eq!(config.load_delay_ms(), 1_000);

        let config =
            AppConfig::from_lookup(lookup_from(&[("DASHBOARD_LOAD_DELAY_MS", "600000")]));
        assert_eq!(config.load_delay_ms(), 10_000);
    }

    #[test]
    fn blank_title_is_ignored() {
        let config = AppConfig::from_lookup(lookup_from(&[("DASHBOARD_TITLE", "   ")]));
        assert_eq!(config.title, "Self Healing Engine");
    }

    #[test]
    fn profile_selects_log_level() {
        assert_eq!(AppProfile::from_env(None), AppProfile::Dev);
        assert_eq!(AppProfile::from_env(Some("prod".into())).log_level(), tracing::Level::INFO);
        assert_eq!(AppProfile::Dev.log_level(), tracing::Level::DEBUG);
    }
}
