use prometheus::{IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

/// Prometheus metrics for bot traffic, predictions and allow-list changes
pub struct Metrics {
    pub registry: Registry,
    pub updates_total: IntCounterVec,
    pub predictions_total: IntCounterVec,
    pub owner_commands_total: IntCounterVec,
    pub notify_failures: IntCounter,
    pub transport_errors: IntCounter,
    pub allowlist_size: IntGauge,
    pub cached_predictions: IntGauge,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let updates_total = IntCounterVec::new(
            Opts::new("bot_updates_total", "Handled messages and callbacks by intent"),
            &["intent"],
        )?;

        let predictions_total = IntCounterVec::new(
            Opts::new("predictions_total", "Predictions served, fresh or cached"),
            &["source"],
        )?;

        let owner_commands_total = IntCounterVec::new(
            Opts::new("owner_commands_total", "Allow-list commands by outcome"),
            &["command", "result"],
        )?;

        let notify_failures = IntCounter::new(
            "removal_notify_failures_total",
            "Removed users that could not be notified",
        )?;

        let transport_errors = IntCounter::new(
            "transport_errors_total",
            "Failed best-effort Telegram calls",
        )?;

        let allowlist_size = IntGauge::new("allowlist_size", "Users with premium access")?;

        let cached_predictions =
            IntGauge::new("cached_predictions", "Entries in the prediction cache")?;

        registry.register(Box::new(updates_total.clone()))?;
        registry.register(Box::new(predictions_total.clone()))?;
        registry.register(Box::new(owner_commands_total.clone()))?;
        registry.register(Box::new(notify_failures.clone()))?;
        registry.register(Box::new(transport_errors.clone()))?;
        registry.register(Box::new(allowlist_size.clone()))?;
        registry.register(Box::new(cached_predictions.clone()))?;

        Ok(Self {
            registry,
            updates_total,
            predictions_total,
            owner_commands_total,
            notify_failures,
            transport_errors,
            allowlist_size,
            cached_predictions,
        })
    }

    /// Text exposition format for the `/metrics` endpoint
    pub fn render(&self) -> Result<String, prometheus::Error> {
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_includes_counters() {
        let metrics = Metrics::new().unwrap();
        metrics.updates_total.with_label_values(&["start"]).inc();
        metrics.allowlist_size.set(3);

        let text = metrics.render().unwrap();
        assert!(text.contains("bot_updates_total{intent=\"start\"} 1"));
        assert!(text.contains("allowlist_size 3"));
    }
}
