//! Node monitor status histogram.

use anyhow::Result;
use f5mon_common::types::Sample;
use f5mon_snmp::SnmpSource;

use crate::oids;
use crate::status::status_histogram;

/// ltmNodeAddrMonitorStatus codes, per the F5 LTM MIB.
const MONITOR_STATES: &[(i64, &str)] = &[
    (0, "unchecked"),
    (1, "checking"),
    (2, "inband"),
    (3, "forced-up"),
    (4, "up"),
    (19, "down"),
    (20, "forced-down"),
    (21, "maint"),
    (22, "irule-down"),
    (23, "inband-down"),
    (24, "down-manual-resume"),
    (25, "disabled"),
];

pub struct NodesCollector;

impl NodesCollector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NodesCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::Collector for NodesCollector {
    fn name(&self) -> &str {
        "nodes"
    }

    fn collect(&mut self, snmp: &mut dyn SnmpSource) -> Result<Vec<Sample>> {
        let samples = status_histogram(
            snmp,
            oids::LTM_NODE_MONITOR_STATUS,
            "Nodes/Monitor Status",
            "nodes",
            MONITOR_STATES,
        )?;
        Ok(samples)
    }
}
