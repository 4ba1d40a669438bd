//! Per-profile client-SSL statistics, including the session cache hit
//! ratio derived from the raw hit and lookup counters.

use anyhow::Result;
use f5mon_common::types::Sample;
use f5mon_snmp::SnmpSource;

use crate::names::NameCache;
use crate::oids;
use crate::table::{gather_by_name, TableStat};

pub struct ClientSslCollector {
    names: NameCache,
}

impl ClientSslCollector {
    pub fn new() -> Self {
        Self {
            names: NameCache::new(),
        }
    }

    fn stats() -> Vec<TableStat> {
        vec![
            TableStat::gauge("Client SSL Profiles/Current Connections", oids::LTM_CLIENTSSL_STAT_CUR_CONNS, "conns"),
            TableStat::gauge("Client SSL Profiles/Current Cache Entries", oids::LTM_CLIENTSSL_STAT_CACHE_CUR_ENTRIES, "entries"),
            TableStat::counter("Client SSL Profiles/Session Cache Hits", oids::LTM_CLIENTSSL_STAT_CACHE_HITS, "hits/sec"),
            TableStat::counter("Client SSL Profiles/Session Cache Lookups", oids::LTM_CLIENTSSL_STAT_CACHE_LOOKUPS, "lookups/sec"),
            TableStat::counter("Client SSL Profiles/Session Cache Overflows", oids::LTM_CLIENTSSL_STAT_CACHE_OVERFLOWS, "overflows/sec"),
            TableStat::counter("Client SSL Profiles/Session Cache Invalidations", oids::LTM_CLIENTSSL_STAT_CACHE_INVALIDATIONS, "invld/sec"),
        ]
    }

    /// Lifetime cache hit ratio in percent, from the raw cumulative
    /// counters. Only profiles with both a hits and a lookups row get a
    /// ratio; zero lookups means a ratio of zero, not a division.
    fn hit_ratios(
        &self,
        snmp: &mut dyn SnmpSource,
        names: &[String],
    ) -> f5mon_snmp::Result<Vec<Sample>> {
        let hits = snmp.walk(oids::LTM_CLIENTSSL_STAT_CACHE_HITS)?;
        let lookups = snmp.walk(oids::LTM_CLIENTSSL_STAT_CACHE_LOOKUPS)?;
        Ok(names
            .iter()
            .zip(hits.iter().zip(lookups.iter()))
            .filter_map(|(name, (h, l))| {
                let hits = h.as_f64()?;
                let lookups = l.as_f64()?;
                let ratio = if lookups > 0.0 {
                    hits / lookups * 100.0
                } else {
                    0.0
                };
                Some(Sample::gauge(
                    format!("Client SSL Profiles/Session Cache Hit Ratio/{name}"),
                    "%",
                    ratio,
                ))
            })
            .collect())
    }
}

impl Default for ClientSslCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::Collector for ClientSslCollector {
    fn name(&self) -> &str {
        "client_ssl"
    }

    fn collect(&mut self, snmp: &mut dyn SnmpSource) -> Result<Vec<Sample>> {
        self.names.clear();
        let names = self
            .names
            .ensure(snmp, oids::LTM_CLIENTSSL_STAT_NAME)?
            .to_vec();
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let mut samples = Vec::new();
        for stat in Self::stats() {
            samples.extend(gather_by_name(snmp, &names, &stat)?);
        }
        samples.extend(self.hit_ratios(snmp, &names)?);
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Collector;
    use f5mon_snmp::testing::StaticSource;

    fn find(samples: &[Sample], name: &str) -> f64 {
        samples.iter().find(|s| s.name == name).unwrap().value
    }

    #[test]
    fn hit_ratio_from_raw_counters() {
        let mut snmp = StaticSource::new()
            .walk_names(oids::LTM_CLIENTSSL_STAT_NAME, &["/Common/clientssl"])
            .walk_nums(oids::LTM_CLIENTSSL_STAT_CACHE_HITS, &[75])
            .walk_nums(oids::LTM_CLIENTSSL_STAT_CACHE_LOOKUPS, &[100]);
        let samples = ClientSslCollector::new().collect(&mut snmp).unwrap();
        assert_eq!(
            find(&samples, "Client SSL Profiles/Session Cache Hit Ratio//Common/clientssl"),
            75.0
        );
    }

    #[test]
    fn zero_lookups_gives_zero_ratio() {
        let mut snmp = StaticSource::new()
            .walk_names(oids::LTM_CLIENTSSL_STAT_NAME, &["p"])
            .walk_nums(oids::LTM_CLIENTSSL_STAT_CACHE_HITS, &[0])
            .walk_nums(oids::LTM_CLIENTSSL_STAT_CACHE_LOOKUPS, &[0]);
        let samples = ClientSslCollector::new().collect(&mut snmp).unwrap();
        assert_eq!(
            find(&samples, "Client SSL Profiles/Session Cache Hit Ratio/p"),
            0.0
        );
    }

    #[test]
    fn profile_without_lookup_row_gets_no_ratio() {
        let mut snmp = StaticSource::new()
            .walk_names(oids::LTM_CLIENTSSL_STAT_NAME, &["a", "b"])
            .walk_nums(oids::LTM_CLIENTSSL_STAT_CACHE_HITS, &[10, 20])
            .walk_nums(oids::LTM_CLIENTSSL_STAT_CACHE_LOOKUPS, &[40]);
        let samples = ClientSslCollector::new().collect(&mut snmp).unwrap();
        assert!(samples
            .iter()
            .any(|s| s.name == "Client SSL Profiles/Session Cache Hit Ratio/a"));
        assert!(!samples
            .iter()
            .any(|s| s.name == "Client SSL Profiles/Session Cache Hit Ratio/b"));
    }

    #[test]
    fn cache_counters_keep_their_units() {
        let mut snmp = StaticSource::new()
            .walk_names(oids::LTM_CLIENTSSL_STAT_NAME, &["p"])
            .walk_nums(oids::LTM_CLIENTSSL_STAT_CACHE_OVERFLOWS, &[3])
            .walk_nums(oids::LTM_CLIENTSSL_STAT_CACHE_INVALIDATIONS, &[1]);
        let samples = ClientSslCollector::new().collect(&mut snmp).unwrap();
        let overflow = samples
            .iter()
            .find(|s| s.name == "Client SSL Profiles/Session Cache Overflows/p")
            .unwrap();
        assert_eq!(overflow.unit, "overflows/sec");
        let invld = samples
            .iter()
            .find(|s| s.name == "Client SSL Profiles/Session Cache Invalidations/p")
            .unwrap();
        assert_eq!(invld.unit, "invld/sec");
    }
}
