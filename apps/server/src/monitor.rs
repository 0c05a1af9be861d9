//! Evaluation passes and the continuous monitoring loop.

use crate::config::{AppConfig, MonitorSettings};
use chrono::Utc;
use pricewatch_alerts::{AlertError, Mailer};
use pricewatch_engine::{evaluate, filter_listings};
use pricewatch_feeds::{CmcClient, FeedError};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Feed client setup failed: {0}")]
    Feed(#[from] FeedError),
    #[error("Mailer setup failed: {0}")]
    Mailer(#[from] AlertError),
}

/// Owns the feed client and the mailer, runs evaluation passes.
pub struct Monitor {
    client: CmcClient,
    mailer: Mailer,
    recipients: Vec<String>,
    settings: MonitorSettings,
}

impl Monitor {
    pub fn new(config: &AppConfig) -> Result<Self, SetupError> {
        Ok(Self {
            client: CmcClient::new(config.cmc_api_key.clone())?,
            mailer: Mailer::new(&config.smtp)?,
            recipients: config.recipients.clone(),
            settings: config.monitor.clone(),
        })
    }

    /// Run one evaluation pass: fetch, filter, evaluate, notify.
    ///
    /// Returns the number of alert emails delivered. A fetch failure
    /// aborts the pass without sending anything.
    pub async fn run_pass(&self) -> Result<u32, FeedError> {
        let listings = self.client.fetch_listings(self.settings.fetch_limit).await?;
        let records = filter_listings(&listings, &self.settings.watchlist);

        if records.is_empty() {
            warn!("No watched assets in the fetched listings, nothing to evaluate");
            return Ok(0);
        }

        for record in &records {
            info!(
                "💰 {} ({}) | {:.2} USD | 1h {:+.2}% | 24h {:+.2}% | 7d {:+.2}%",
                record.name,
                record.symbol,
                record.price.to_f64(),
                record.change_1h.to_f64(),
                record.change_24h.to_f64(),
                record.change_7d.to_f64()
            );
        }

        let decisions = evaluate(
            &records,
            &self.settings.buy_thresholds,
            &self.settings.sell_thresholds,
        );

        if decisions.is_empty() {
            info!("No thresholds crossed, all prices in the neutral zone");
            return Ok(0);
        }

        // One timestamp per pass; every alert from this pass carries it
        let evaluated_at = Utc::now();

        let mut sent = 0u32;
        for decision in &decisions {
            info!(
                asset = %decision.id,
                direction = %decision.direction,
                price = decision.price.to_f64(),
                threshold = decision.threshold.to_f64(),
                "🔔 Threshold crossed"
            );
            sent += self
                .mailer
                .send_alert(decision, &self.recipients, evaluated_at)
                .await;
        }

        info!(alerts = decisions.len(), emails = sent, "Pass complete");
        Ok(sent)
    }

    /// Run evaluation passes forever, sleeping the configured interval
    /// between them. A failed pass is logged and the loop carries on.
    pub async fn run_loop(&self) {
        let interval = self.settings.interval;
        info!(interval_secs = interval.as_secs(), "Starting monitor loop");

        loop {
            if let Err(e) = self.run_pass().await {
                warn!(error = %e, transient = e.is_transient(), "Evaluation pass failed");
            }
            tokio::time::sleep(interval).await;
        }
    }
}
