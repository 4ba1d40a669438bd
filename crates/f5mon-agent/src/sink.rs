//! Metric destinations: an HTTP batch shipper and a log-only fallback.

use chrono::Utc;
use f5mon_common::sink::MetricSink;
use f5mon_common::types::ReportedMetric;
use serde::Serialize;

/// Ships each cycle's metrics as one JSON batch.
pub struct HttpSink {
    client: reqwest::blocking::Client,
    endpoint: String,
    label: String,
    pending: Vec<ReportedMetric>,
}

#[derive(Serialize)]
struct MetricBatch<'a> {
    host: &'a str,
    timestamp_ms: i64,
    metrics: &'a [ReportedMetric],
}

impl HttpSink {
    pub fn new(endpoint: &str, label: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: endpoint.to_string(),
            label: label.to_string(),
            pending: Vec::new(),
        }
    }
}

impl MetricSink for HttpSink {
    fn report(&mut self, name: &str, unit: &str, value: f64) {
        self.pending.push(ReportedMetric {
            name: name.to_string(),
            unit: unit.to_string(),
            value,
        });
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let batch = MetricBatch {
            host: &self.label,
            timestamp_ms: Utc::now().timestamp_millis(),
            metrics: &self.pending,
        };
        let response = self
            .client
            .post(&self.endpoint)
            .json(&batch)
            .send()?
            .error_for_status()?;
        tracing::debug!(
            count = self.pending.len(),
            status = %response.status(),
            "shipped metric batch"
        );
        self.pending.clear();
        Ok(())
    }
}

/// Logs every metric instead of shipping it. Used when no report
/// endpoint is configured and for `--once` inspection runs.
#[derive(Debug, Default)]
pub struct LogSink {
    reported: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetricSink for LogSink {
    fn report(&mut self, name: &str, unit: &str, value: f64) {
        self.reported += 1;
        tracing::info!(metric = name, unit, value, "metric");
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        tracing::debug!(count = self.reported, "cycle flushed");
        self.reported = 0;
        Ok(())
    }
}
