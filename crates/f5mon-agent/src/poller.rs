//! Cycle orchestration: probe the device, run the catalogue, convert
//! counters to rates, cap ranked statistics, and flush the sink.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use f5mon_collector::rate::RateEngine;
use f5mon_collector::{catalogue, oids, Collector, MAX_RANKED_RESULTS};
use f5mon_common::sink::MetricSink;
use f5mon_common::types::{MetricKind, Sample};
use f5mon_snmp::SnmpSource;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CycleStats {
    /// Raw samples gathered across all collectors.
    pub collected: usize,
    /// Metrics handed to the sink after rate conversion and rank capping.
    pub reported: usize,
    /// Collectors that failed and were skipped this cycle.
    pub failed_collectors: usize,
}

/// Owns the collector catalogue and the counter state that turns
/// cumulative totals into per-second rates. One instance lives for the
/// whole agent process; losing it resets every rate baseline.
pub struct Poller {
    collectors: Vec<Box<dyn Collector>>,
    rates: RateEngine,
}

impl Poller {
    pub fn new() -> Self {
        Self {
            collectors: catalogue(),
            rates: RateEngine::new(),
        }
    }

    #[cfg(test)]
    fn with_collectors(collectors: Vec<Box<dyn Collector>>) -> Self {
        Self {
            collectors,
            rates: RateEngine::new(),
        }
    }

    pub fn poll(&mut self, snmp: &mut dyn SnmpSource, sink: &mut dyn MetricSink) -> Result<CycleStats> {
        self.poll_at(snmp, sink, Utc::now())
    }

    /// Runs one full cycle with an explicit timestamp.
    ///
    /// # Errors
    ///
    /// Fails when the initial reachability probe or the final sink flush
    /// fails. An unreachable device aborts the cycle before any
    /// collector runs, leaving the rate baselines untouched.
    pub fn poll_at(
        &mut self,
        snmp: &mut dyn SnmpSource,
        sink: &mut dyn MetricSink,
        now: DateTime<Utc>,
    ) -> Result<CycleStats> {
        let probe = snmp
            .get(&[oids::SYS_PRODUCT_NAME])
            .context("device unreachable, aborting cycle")?;
        tracing::debug!(product = ?probe[0].as_str(), "starting poll cycle");

        let mut stats = CycleStats::default();
        let mut samples: Vec<Sample> = Vec::new();
        for collector in &mut self.collectors {
            match collector.collect(snmp) {
                Ok(mut batch) => {
                    tracing::debug!(collector = collector.name(), count = batch.len(), "collected");
                    samples.append(&mut batch);
                }
                Err(e) => {
                    stats.failed_collectors += 1;
                    tracing::warn!(collector = collector.name(), error = %e, "collector failed, skipping");
                }
            }
        }
        stats.collected = samples.len();

        // Rates are derived for every counter before any capping so the
        // baselines of entities outside the top set stay current.
        let mut ranked: BTreeMap<String, Vec<(String, &'static str, f64)>> = BTreeMap::new();
        for sample in samples {
            let value = match sample.kind {
                MetricKind::Counter => self.rates.rate(&sample.name, sample.value, now),
                MetricKind::Gauge => sample.value,
            };
            match sample.rank_group {
                Some(group) => ranked
                    .entry(group)
                    .or_default()
                    .push((sample.name, sample.unit, value)),
                None => {
                    sink.report(&sample.name, sample.unit, value);
                    stats.reported += 1;
                }
            }
        }

        for (group, mut entries) in ranked {
            entries.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(Ordering::Equal));
            if entries.len() > MAX_RANKED_RESULTS {
                tracing::debug!(
                    group = group.as_str(),
                    total = entries.len(),
                    "capping to top {MAX_RANKED_RESULTS}"
                );
                entries.truncate(MAX_RANKED_RESULTS);
            }
            for (name, unit, value) in entries {
                sink.report(&name, unit, value);
                stats.reported += 1;
            }
        }

        sink.flush().context("failed to flush metric sink")?;
        Ok(stats)
    }

    pub fn tracked_counters(&self) -> usize {
        self.rates.len()
    }
}

impl Default for Poller {
    fn default() -> Self {
        Self::new()
    }
}
