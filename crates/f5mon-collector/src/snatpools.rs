//! Per-SNAT-pool statistics. SNAT pool tables stay small, so nothing
//! here is rank-capped.

use anyhow::Result;
use f5mon_common::types::Sample;
use f5mon_snmp::SnmpSource;

use crate::names::NameCache;
use crate::oids;
use crate::table::{gather_by_name, TableStat};

pub struct SnatPoolsCollector {
    names: NameCache,
}

impl SnatPoolsCollector {
    pub fn new() -> Self {
        Self {
            names: NameCache::new(),
        }
    }

    fn stats() -> Vec<TableStat> {
        vec![
            TableStat::gauge("SnatPools/Max Connections", oids::LTM_SNAT_POOL_STAT_MAX_CONNS, "conns"),
            TableStat::gauge("SnatPools/Current Connections", oids::LTM_SNAT_POOL_STAT_CUR_CONNS, "conns"),
            TableStat::counter("SnatPools/Connection Rate", oids::LTM_SNAT_POOL_STAT_TOT_CONNS, "conn/sec"),
            TableStat::counter("SnatPools/Throughput/In", oids::LTM_SNAT_POOL_STAT_BYTES_IN, "bits/sec").bits(),
            TableStat::counter("SnatPools/Throughput/Out", oids::LTM_SNAT_POOL_STAT_BYTES_OUT, "bits/sec").bits(),
            TableStat::counter("SnatPools/Packets/In", oids::LTM_SNAT_POOL_STAT_PKTS_IN, "pkts/sec"),
            TableStat::counter("SnatPools/Packets/Out", oids::LTM_SNAT_POOL_STAT_PKTS_OUT, "pkts/sec"),
        ]
    }
}

impl Default for SnatPoolsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::Collector for SnatPoolsCollector {
    fn name(&self) -> &str {
        "snatpools"
    }

    fn collect(&mut self, snmp: &mut dyn SnmpSource) -> Result<Vec<Sample>> {
        self.names.clear();
        let names = self
            .names
            .ensure(snmp, oids::LTM_SNAT_POOL_STAT_NAME)?
            .to_vec();
        if names.is_empty() {
            return Ok(Vec::new());
        }

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
    fn snat_samples_are_never_ranked() {
        let mut snmp = StaticSource::new()
            .walk_names(oids::LTM_SNAT_POOL_STAT_NAME, &["/Common/snat"])
            .walk_nums(oids::LTM_SNAT_POOL_STAT_CUR_CONNS, &[12])
            .walk_nums(oids::LTM_SNAT_POOL_STAT_BYTES_OUT, &[125]);
        let samples = SnatPoolsCollector::new().collect(&mut snmp).unwrap();
        assert!(samples.iter().all(|s| s.rank_group.is_none()));

        let find = |name: &str| samples.iter().find(|s| s.name == name).unwrap().value;
        assert_eq!(find("SnatPools/Current Connections//Common/snat"), 12.0);
        assert_eq!(find("SnatPools/Throughput/Out//Common/snat"), 1000.0);
    }

    #[test]
    fn empty_table_yields_nothing() {
        let mut snmp = StaticSource::new();
        assert!(SnatPoolsCollector::new().collect(&mut snmp).unwrap().is_empty());
    }
}
