use serde::{Deserialize, Serialize};

/// How a raw SNMP value is to be interpreted downstream.
///
/// Gauges are reported as-is. Counters are cumulative device totals and
/// must be converted to per-second rates before reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Gauge,
    Counter,
}

/// One metric observation produced by a collector during a polling cycle.
///
/// `name` is a `/`-delimited hierarchical path (e.g.
/// `"Pools/Current Connections/my-pool"`). The exact path grammar is the
/// wire contract with the monitoring backend and is never rewritten after
/// a collector builds it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub name: String,
    pub unit: &'static str,
    pub kind: MetricKind,
    pub value: f64,
    /// Set to the statistic prefix (e.g. `"Pools/Requests"`) when only the
    /// top entities of this statistic should reach the sink. `None` means
    /// the sample is always reported.
    pub rank_group: Option<String>,
}

impl Sample {
    pub fn gauge(name: impl Into<String>, unit: &'static str, value: f64) -> Self {
        Self {
            name: name.into(),
            unit,
            kind: MetricKind::Gauge,
            value,
            rank_group: None,
        }
    }

    pub fn counter(name: impl Into<String>, unit: &'static str, value: f64) -> Self {
        Self {
            name: name.into(),
            unit,
            kind: MetricKind::Counter,
            value,
            rank_group: None,
        }
    }

    pub fn ranked(mut self, group: impl Into<String>) -> Self {
        self.rank_group = Some(group.into());
        self
    }
}

/// Wire form of a reported metric, serialized by the HTTP sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportedMetric {
    pub name: String,
    pub unit: String,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_sets_group() {
        let s = Sample::counter("Pools/Requests/a", "req/sec", 1.0).ranked("Pools/Requests");
        assert_eq!(s.rank_group.as_deref(), Some("Pools/Requests"));
        assert_eq!(s.kind, MetricKind::Counter);
    }

    #[test]
    fn gauge_has_no_group() {
        let s = Sample::gauge("Memory/Host", "bytes", 42.0);
        assert!(s.rank_group.is_none());
    }
}
