//! Per-virtual-server statistics. Every statistic is computed for every
//! virtual server, but only the top entries per statistic are forwarded;
//! the rest exist to keep counter baselines warm across cycles.

use anyhow::Result;
use f5mon_common::types::Sample;
use f5mon_snmp::SnmpSource;

use crate::names::NameCache;
use crate::oids;
use crate::table::{gather_by_name, TableStat};

pub struct VirtualsCollector {
    names: NameCache,
}

impl VirtualsCollector {
    pub fn new() -> Self {
        Self {
            names: NameCache::new(),
        }
    }

    fn stats() -> Vec<TableStat> {
        vec![
            TableStat::counter("Virtual Servers/Requests", oids::LTM_VIRTUAL_STAT_TOT_REQUESTS, "req/sec").ranked(),
            TableStat::gauge("Virtual Servers/Current Connections", oids::LTM_VIRTUAL_STAT_CUR_CONNS, "conns").ranked(),
            TableStat::counter("Virtual Servers/Connection Rate", oids::LTM_VIRTUAL_STAT_TOT_CONNS, "conn/sec").ranked(),
            TableStat::counter("Virtual Servers/Packets/In", oids::LTM_VIRTUAL_STAT_PKTS_IN, "packets/sec").ranked(),
            TableStat::counter("Virtual Servers/Packets/Out", oids::LTM_VIRTUAL_STAT_PKTS_OUT, "packets/sec").ranked(),
            TableStat::counter("Virtual Servers/Throughput/In", oids::LTM_VIRTUAL_STAT_BYTES_IN, "bits/sec").bits().ranked(),
            TableStat::counter("Virtual Servers/Throughput/Out", oids::LTM_VIRTUAL_STAT_BYTES_OUT, "bits/sec").bits().ranked(),
            TableStat::gauge("Virtual Servers/CPU Usage/1m", oids::LTM_VIRTUAL_STAT_USAGE_RATIO_1M, "%").ranked(),
        ]
    }
}

impl Default for VirtualsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::Collector for VirtualsCollector {
    fn name(&self) -> &str {
        "virtuals"
    }

    fn collect(&mut self, snmp: &mut dyn SnmpSource) -> Result<Vec<Sample>> {
        self.names.clear();
        let names = self.names.ensure(snmp, oids::LTM_VIRTUAL_STAT_NAME)?.to_vec();
        if names.is_empty() {
            return Ok(Vec::new());
        }
        tracing::debug!(count = names.len(), "found virtual servers");

        let mut samples = Vec::new();
        for stat in Self::stats() {
            samples.extend(gather_by_name(snmp, &names, &stat)?);
        }
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Collector;
    use f5mon_snmp::testing::StaticSource;

    #[test]
    fn empty_table_yields_nothing() {
        let mut snmp = StaticSource::new();
        let samples = VirtualsCollector::new().collect(&mut snmp).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn every_stat_is_rank_capped() {
        let mut snmp = StaticSource::new()
            .walk_names(oids::LTM_VIRTUAL_STAT_NAME, &["/Common/vs1"])
            .walk_nums(oids::LTM_VIRTUAL_STAT_TOT_REQUESTS, &[7])
            .walk_nums(oids::LTM_VIRTUAL_STAT_CUR_CONNS, &[3]);
        let samples = VirtualsCollector::new().collect(&mut snmp).unwrap();
        assert!(!samples.is_empty());
        assert!(samples.iter().all(|s| s.rank_group.is_some()));

        let reqs = samples
            .iter()
            .find(|s| s.name == "Virtual Servers/Requests//Common/vs1")
            .unwrap();
        assert_eq!(reqs.value, 7.0);
        assert_eq!(reqs.rank_group.as_deref(), Some("Virtual Servers/Requests"));
    }

    #[test]
    fn throughput_scales_to_bits() {
        let mut snmp = StaticSource::new()
            .walk_names(oids::LTM_VIRTUAL_STAT_NAME, &["vs"])
            .walk_nums(oids::LTM_VIRTUAL_STAT_BYTES_IN, &[125]);
        let samples = VirtualsCollector::new().collect(&mut snmp).unwrap();
        let t = samples
            .iter()
            .find(|s| s.name == "Virtual Servers/Throughput/In/vs")
            .unwrap();
        assert_eq!(t.value, 1000.0);
        assert_eq!(t.unit, "bits/sec");
    }
}
