//! Per-pool statistics, rank-capped the same way as virtual servers.

use anyhow::Result;
use f5mon_common::types::Sample;
use f5mon_snmp::SnmpSource;

use crate::names::NameCache;
use crate::oids;
use crate::table::{gather_by_name, TableStat};

pub struct PoolsCollector {
    names: NameCache,
}

impl PoolsCollector {
    pub fn new() -> Self {
        Self {
            names: NameCache::new(),
        }
    }

    fn stats() -> Vec<TableStat> {
        vec![
            TableStat::counter("Pools/Requests", oids::LTM_POOL_STAT_TOT_REQUESTS, "req/sec").ranked(),
            TableStat::gauge("Pools/Current Connections", oids::LTM_POOL_STAT_CUR_CONNS, "conns").ranked(),
            TableStat::counter("Pools/Connection Rate", oids::LTM_POOL_STAT_TOT_CONNS, "conn/sec").ranked(),
            TableStat::counter("Pools/Packets/In", oids::LTM_POOL_STAT_PKTS_IN, "packets/sec").ranked(),
            TableStat::counter("Pools/Packets/Out", oids::LTM_POOL_STAT_PKTS_OUT, "packets/sec").ranked(),
            TableStat::counter("Pools/Throughput/In", oids::LTM_POOL_STAT_BYTES_IN, "bits/sec").bits().ranked(),
            TableStat::counter("Pools/Throughput/Out", oids::LTM_POOL_STAT_BYTES_OUT, "bits/sec").bits().ranked(),
        ]
    }
}

impl Default for PoolsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::Collector for PoolsCollector {
    fn name(&self) -> &str {
        "pools"
    }

    fn collect(&mut self, snmp: &mut dyn SnmpSource) -> Result<Vec<Sample>> {
        self.names.clear();
        let names = self.names.ensure(snmp, oids::LTM_POOL_STAT_NAME)?.to_vec();
        if names.is_empty() {
            return Ok(Vec::new());
        }
        tracing::debug!(count = names.len(), "found pools");

        let mut samples = Vec::new();
        for stat in Self::stats() {
            samples.extend(gather_by_name(snmp, &names, &stat)?);
        }
        Ok(samples)
    }
}
