//! Alert email rendering.

use chrono::{DateTime, Utc};
use pricewatch_core::{AlertDecision, Direction};

/// Rendered subject/body pair for one alert decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    pub subject: String,
    pub body: String,
}

/// Render a decision into a subject/body pair.
///
/// Content is derived deterministically from the decision fields plus the
/// evaluation timestamp and the sending host.
pub fn render_alert(
    decision: &AlertDecision,
    evaluated_at: DateTime<Utc>,
    hostname: &str,
) -> AlertMessage {
    let price = decision.price.to_f64();
    let threshold = decision.threshold.to_f64();
    let magnitude = decision.magnitude.to_f64();
    let timestamp = evaluated_at.format("%Y-%m-%d %H:%M:%S UTC");

    match decision.direction {
        Direction::Buy => AlertMessage {
            subject: format!(
                "🟢 BUY alert: {} at or below {:.2} USD",
                decision.name, threshold
            ),
            body: format!(
                "🟢 BUY ALERT - OPPORTUNITY\n\
                 \n\
                 Asset: {}\n\
                 Current price: {:.2} USD\n\
                 Buy threshold: {:.2} USD\n\
                 Potential saving: {:.2} USD\n\
                 \n\
                 The price is in the buy zone.\n\
                 \n\
                 Host: {}\n\
                 Date: {}\n",
                decision.name, price, threshold, magnitude, hostname, timestamp
            ),
        },
        Direction::Sell => AlertMessage {
            subject: format!(
                "🔴 SELL alert: {} at or above {:.2} USD",
                decision.name, threshold
            ),
            body: format!(
                "🔴 SELL ALERT - TAKE PROFIT\n\
                 \n\
                 Asset: {}\n\
                 Current price: {:.2} USD\n\
                 Sell threshold: {:.2} USD\n\
                 Potential profit: {:.2} USD\n\
                 \n\
                 Time to secure the gains.\n\
                 \n\
                 Host: {}\n\
                 Date: {}\n",
                decision.name, price, threshold, magnitude, hostname, timestamp
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use pricewatch_core::{AssetRecord, UsdPrice};

    fn evaluated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_render_buy_alert() {
        let record = AssetRecord::new("bitcoin", "Bitcoin", "BTC", UsdPrice::from_f64(80000.0));
        let decision = AlertDecision::buy(&record, UsdPrice::from_f64(85000.0));

        let message = render_alert(&decision, evaluated_at(), "testhost");
        assert!(message.subject.contains("BUY"));
        assert!(message.subject.contains("Bitcoin"));
        assert!(message.body.contains("Current price: 80000.00 USD"));
        assert!(message.body.contains("Buy threshold: 85000.00 USD"));
        assert!(message.body.contains("Potential saving: 5000.00 USD"));
        assert!(message.body.contains("2025-03-01 12:30:00 UTC"));
        assert!(message.body.contains("testhost"));
    }

    #[test]
    fn test_render_sell_alert() {
        let record = AssetRecord::new("xrp", "XRP", "XRP", UsdPrice::from_f64(6.0));
        let decision = AlertDecision::sell(&record, UsdPrice::from_f64(5.0));

        let message = render_alert(&decision, evaluated_at(), "testhost");
        assert!(message.subject.contains("SELL"));
        assert!(message.body.contains("Sell threshold: 5.00 USD"));
        assert!(message.body.contains("Potential profit: 1.00 USD"));
    }

    #[test]
    fn test_decisions_from_one_pass_share_timestamp() {
        let btc = AssetRecord::new("bitcoin", "Bitcoin", "BTC", UsdPrice::from_f64(80000.0));
        let xrp = AssetRecord::new("xrp", "XRP", "XRP", UsdPrice::from_f64(6.0));
        let buy = AlertDecision::buy(&btc, UsdPrice::from_f64(85000.0));
        let sell = AlertDecision::sell(&xrp, UsdPrice::from_f64(5.0));

        let at = evaluated_at();
        let first = render_alert(&buy, at, "testhost");
        let second = render_alert(&sell, at, "testhost");

        let date_line = |body: &str| {
            body.lines()
                .find(|line| line.starts_with("Date: "))
                .map(str::to_string)
                .unwrap()
        };
        assert_eq!(date_line(&first.body), date_line(&second.body));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let record = AssetRecord::new("cardano", "Cardano", "ADA", UsdPrice::from_f64(0.2));
        let decision = AlertDecision::buy(&record, UsdPrice::from_f64(0.25));

        let first = render_alert(&decision, evaluated_at(), "testhost");
        let second = render_alert(&decision, evaluated_at(), "testhost");
        assert_eq!(first, second);
    }
}
