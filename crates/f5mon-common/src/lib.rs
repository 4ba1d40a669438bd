//! Shared types for the f5mon workspace.
//!
//! A [`Sample`](types::Sample) is the unit every collector produces and
//! every sink consumes; [`MetricSink`](sink::MetricSink) is the seam
//! between the poll orchestrator and the monitoring backend.

pub mod sink;
pub mod types;
