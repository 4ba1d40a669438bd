//! Physical interface counters and link status.

use anyhow::Result;
use f5mon_common::types::Sample;
use f5mon_snmp::SnmpSource;

use crate::names::NameCache;
use crate::oids;
use crate::status::status_histogram;
use crate::table::{gather_by_name, TableStat};

/// sysInterfaceStatus codes.
const STATUS_STATES: &[(i64, &str)] = &[
    (0, "Up"),
    (1, "Down"),
    (3, "Uninitialized"),
    (5, "Unpopulated"),
];

pub struct InterfacesCollector {
    names: NameCache,
}

impl InterfacesCollector {
    pub fn new() -> Self {
        Self {
            names: NameCache::new(),
        }
    }

    fn stats() -> Vec<TableStat> {
        vec![
            TableStat::counter("Interfaces/Throughput/In", oids::SYS_INTERFACE_STAT_BYTES_IN, "bits/sec").bits(),
            TableStat::counter("Interfaces/Throughput/Out", oids::SYS_INTERFACE_STAT_BYTES_OUT, "bits/sec").bits(),
            TableStat::counter("Interfaces/Packets/In", oids::SYS_INTERFACE_STAT_PKTS_IN, "pkts/sec"),
            TableStat::counter("Interfaces/Packets/Out", oids::SYS_INTERFACE_STAT_PKTS_OUT, "pkts/sec"),
            TableStat::counter("Interfaces/Multicast/In", oids::SYS_INTERFACE_STAT_MCAST_IN, "pkts/sec"),
            TableStat::counter("Interfaces/Multicast/Out", oids::SYS_INTERFACE_STAT_MCAST_OUT, "pkts/sec"),
            TableStat::counter("Interfaces/Errors/In", oids::SYS_INTERFACE_STAT_ERRORS_IN, "errors/sec"),
            TableStat::counter("Interfaces/Errors/Out", oids::SYS_INTERFACE_STAT_ERRORS_OUT, "errors/sec"),
            TableStat::counter("Interfaces/Drops/In", oids::SYS_INTERFACE_STAT_DROPS_IN, "drops/sec"),
            TableStat::counter("Interfaces/Drops/Out", oids::SYS_INTERFACE_STAT_DROPS_OUT, "drops/sec"),
            TableStat::counter("Interfaces/Collisions", oids::SYS_INTERFACE_STAT_COLLISIONS, "collisions/sec"),
        ]
    }
}

impl Default for InterfacesCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::Collector for InterfacesCollector {
    fn name(&self) -> &str {
        "interfaces"
    }

    fn collect(&mut self, snmp: &mut dyn SnmpSource) -> Result<Vec<Sample>> {
        self.names.clear();
        let names = self.names.ensure(snmp, oids::SYS_INTERFACE_NAME)?.to_vec();
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let mut samples = Vec::new();
        for stat in Self::stats() {
            samples.extend(gather_by_name(snmp, &names, &stat)?);
        }
        samples.extend(status_histogram(
            snmp,
            oids::SYS_INTERFACE_STATUS,
            "Interfaces/Status",
            "interfaces",
            STATUS_STATES,
        )?);
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Collector;
    use f5mon_snmp::testing::StaticSource;

    #[test]
    fn no_interfaces_means_no_samples() {
        let mut snmp = StaticSource::new();
        let samples = InterfacesCollector::new().collect(&mut snmp).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn throughput_is_bits_and_status_is_seeded() {
        let mut snmp = StaticSource::new()
            .walk_names(oids::SYS_INTERFACE_NAME, &["1.1", "mgmt"])
            .walk_nums(oids::SYS_INTERFACE_STAT_BYTES_IN, &[125, 0])
            .walk_nums(oids::SYS_INTERFACE_STATUS, &[0, 1]);
        let samples = InterfacesCollector::new().collect(&mut snmp).unwrap();

        let find = |name: &str| samples.iter().find(|s| s.name == name).unwrap().value;
        assert_eq!(find("Interfaces/Throughput/In/1.1"), 1000.0);
        assert_eq!(find("Interfaces/Status/Up"), 1.0);
        assert_eq!(find("Interfaces/Status/Down"), 1.0);
        assert_eq!(find("Interfaces/Status/Unpopulated"), 0.0);
    }

    #[test]
    fn names_are_rewalked_every_cycle() {
        let mut snmp = StaticSource::new()
            .walk_names(oids::SYS_INTERFACE_NAME, &["1.1"])
            .walk_nums(oids::SYS_INTERFACE_STAT_BYTES_IN, &[8]);
        let mut collector = InterfacesCollector::new();
        collector.collect(&mut snmp).unwrap();

        // A port added between cycles shows up on the very next poll.
        snmp.set_walk(
            oids::SYS_INTERFACE_NAME,
            vec![
                f5mon_snmp::SnmpValue::Str("1.1".into()),
                f5mon_snmp::SnmpValue::Str("1.2".into()),
            ],
        );
        snmp.set_walk(
            oids::SYS_INTERFACE_STAT_BYTES_IN,
            vec![
                f5mon_snmp::SnmpValue::Counter64(8),
                f5mon_snmp::SnmpValue::Counter64(16),
            ],
        );
        let samples = collector.collect(&mut snmp).unwrap();
        assert!(samples.iter().any(|s| s.name == "Interfaces/Throughput/In/1.1"));
        assert!(samples.iter().any(|s| s.name == "Interfaces/Throughput/In/1.2"));
    }
}
