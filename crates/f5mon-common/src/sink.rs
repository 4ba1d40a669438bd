use crate::types::ReportedMetric;

/// Destination for finished metrics.
///
/// The orchestrator calls [`report`](MetricSink::report) once per metric
/// per cycle and [`flush`](MetricSink::flush) at the end of the cycle.
/// `report` buffers and never fails; transport errors surface from `flush`.
pub trait MetricSink {
    fn report(&mut self, name: &str, unit: &str, value: f64);

    fn flush(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Sink that retains everything in memory. Used by tests and `--once` runs.
#[derive(Debug, Default)]
pub struct BufferSink {
    pub metrics: Vec<ReportedMetric>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&ReportedMetric> {
        self.metrics.iter().find(|m| m.name == name)
    }
}

impl MetricSink for BufferSink {
    fn report(&mut self, name: &str, unit: &str, value: f64) {
        self.metrics.push(ReportedMetric {
            name: name.to_string(),
            unit: unit.to_string(),
            value,
        });
    }
}
