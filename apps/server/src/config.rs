//! Application configuration.
//!
//! Built once at startup from the process environment plus static
//! defaults, then passed down by reference. Nothing below reads the
//! environment again.

use pricewatch_alerts::SmtpSettings;
use pricewatch_core::{AssetId, ThresholdMap, UsdPrice};
use pricewatch_engine::Watchlist;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    MissingVar(&'static str),
    #[error("Invalid value for {var}: {value}")]
    InvalidVar { var: &'static str, value: String },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// CoinMarketCap API key
    pub cmc_api_key: String,
    /// SMTP transport settings
    pub smtp: SmtpSettings,
    /// Alert recipients
    pub recipients: Vec<String>,
    /// Monitoring settings
    pub monitor: MonitorSettings,
}

/// Monitoring settings: what to watch and when to alert.
#[derive(Debug, Clone)]
pub struct MonitorSettings {
    /// Tracked asset identifiers
    pub watchlist: Watchlist,
    /// Alert when price falls to or below these levels
    pub buy_thresholds: ThresholdMap,
    /// Alert when price rises to or above these levels
    pub sell_thresholds: ThresholdMap,
    /// Number of listings fetched per pass
    pub fetch_limit: u32,
    /// Delay between evaluation passes in continuous mode
    pub interval: Duration,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            watchlist: Watchlist::new([
                "bitcoin",
                "ethereum",
                "xrp",
                "cardano",
                "polkadot",
                "litecoin",
            ]),
            buy_thresholds: thresholds(&[
                ("bitcoin", 85427.43),
                ("ethereum", 2002.0),
                ("xrp", 2.00),
                ("cardano", 0.25),
                ("polkadot", 2.10),
                ("litecoin", 63.00),
            ]),
            sell_thresholds: thresholds(&[
                ("bitcoin", 100000.00),
                ("ethereum", 5000.00),
                ("xrp", 5.00),
                ("cardano", 3.00),
                ("polkadot", 10.00),
                ("litecoin", 70.00),
            ]),
            fetch_limit: 10,
            interval: Duration::from_secs(600),
        }
    }
}

fn thresholds(entries: &[(&str, f64)]) -> ThresholdMap {
    entries
        .iter()
        .map(|&(slug, level)| (AssetId::new(slug), UsdPrice::from_f64(level)))
        .collect()
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// `CMC_API_KEY`, `FROM_EMAIL` and `FROM_PASS` are required.
    /// `TO_EMAIL` is a comma-separated recipient list; `SMTP_HOST` and
    /// `SMTP_PORT` override the Gmail STARTTLS defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let cmc_api_key = require("CMC_API_KEY")?;
        let from_email = require("FROM_EMAIL")?;
        let from_pass = require("FROM_PASS")?;

        let recipients = parse_recipients(&std::env::var("TO_EMAIL").unwrap_or_default());

        let host =
            std::env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string());
        let port = match std::env::var("SMTP_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidVar {
                var: "SMTP_PORT",
                value: raw,
            })?,
            Err(_) => 587,
        };

        Ok(Self {
            cmc_api_key,
            smtp: SmtpSettings {
                host,
                port,
                username: from_email.clone(),
                password: from_pass,
                from: from_email,
            },
            recipients,
            monitor: MonitorSettings::default(),
        })
    }
}

fn require(var: &'static str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(var)),
    }
}

/// Split a comma-separated recipient list, trimming entries and
/// discarding empty ones.
pub fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_recipients() {
        assert_eq!(
            parse_recipients("a@x.com, ,b@y.com,"),
            vec!["a@x.com".to_string(), "b@y.com".to_string()]
        );
        assert!(parse_recipients("").is_empty());
        assert!(parse_recipients(" , ,").is_empty());
    }

    #[test]
    fn test_monitor_settings_default() {
        let settings = MonitorSettings::default();
        assert_eq!(settings.watchlist.len(), 6);
        assert_eq!(settings.buy_thresholds.len(), 6);
        assert_eq!(settings.sell_thresholds.len(), 6);
        assert_eq!(settings.fetch_limit, 10);
        assert_eq!(settings.interval, Duration::from_secs(600));
    }

    #[test]
    fn test_default_thresholds_are_watched() {
        let settings = MonitorSettings::default();
        for (id, _) in settings.buy_thresholds.iter() {
            assert!(settings.watchlist.contains(id), "unwatched buy id {id}");
        }
        for (id, _) in settings.sell_thresholds.iter() {
            assert!(settings.watchlist.contains(id), "unwatched sell id {id}");
        }
    }

    #[test]
    fn test_default_buy_below_sell() {
        let settings = MonitorSettings::default();
        for (id, buy_level) in settings.buy_thresholds.iter() {
            let sell_level = settings.sell_thresholds.get(id).unwrap();
            assert!(*buy_level < sell_level, "inverted band for {id}");
        }
    }
}
