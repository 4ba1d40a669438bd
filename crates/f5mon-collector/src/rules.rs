//! iRule execution statistics. A rule row is keyed by rule name plus the
//! event it fires on, so the entity name is the two joined with `/`.

use anyhow::Result;
use f5mon_common::types::Sample;
use f5mon_snmp::SnmpSource;

use crate::names::NameCache;
use crate::oids;
use crate::table::{gather_by_name, TableStat};

pub struct RulesCollector {
    names: NameCache,
}

impl RulesCollector {
    pub fn new() -> Self {
        Self {
            names: NameCache::new(),
        }
    }

    fn stats() -> Vec<TableStat> {
        vec![
            TableStat::counter("Rules/Executions", oids::LTM_RULE_STAT_TOT_EXECUTIONS, "execs/sec"),
            TableStat::counter("Rules/Failures", oids::LTM_RULE_STAT_FAILURES, "failures/sec"),
            TableStat::counter("Rules/Aborts", oids::LTM_RULE_STAT_ABORTS, "aborts/sec"),
            TableStat::gauge("Rules/Time", oids::LTM_RULE_STAT_AVG_CYCLES, "cycles"),
        ]
    }
}

impl Default for RulesCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::Collector for RulesCollector {
    fn name(&self) -> &str {
        "rules"
    }

    fn collect(&mut self, snmp: &mut dyn SnmpSource) -> Result<Vec<Sample>> {
        self.names.clear();
        let names = self
            .names
            .ensure_joined(snmp, oids::LTM_RULE_STAT_NAME, oids::LTM_RULE_STAT_EVENT_TYPE)?
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
    fn entity_name_is_rule_and_event() {
        let mut snmp = StaticSource::new()
            .walk_names(oids::LTM_RULE_STAT_NAME, &["/Common/redirect", "/Common/redirect"])
            .walk_names(oids::LTM_RULE_STAT_EVENT_TYPE, &["HTTP_REQUEST", "HTTP_RESPONSE"])
            .walk_nums(oids::LTM_RULE_STAT_TOT_EXECUTIONS, &[40, 2]);
        let samples = RulesCollector::new().collect(&mut snmp).unwrap();

        let find = |name: &str| samples.iter().find(|s| s.name == name).unwrap().value;
        assert_eq!(find("Rules/Executions//Common/redirect/HTTP_REQUEST"), 40.0);
        assert_eq!(find("Rules/Executions//Common/redirect/HTTP_RESPONSE"), 2.0);
    }

    #[test]
    fn average_cycles_reports_as_gauge() {
        use f5mon_common::types::MetricKind;

        let mut snmp = StaticSource::new()
            .walk_names(oids::LTM_RULE_STAT_NAME, &["r"])
            .walk_names(oids::LTM_RULE_STAT_EVENT_TYPE, &["HTTP_REQUEST"])
            .walk_nums(oids::LTM_RULE_STAT_AVG_CYCLES, &[90000]);
        let samples = RulesCollector::new().collect(&mut snmp).unwrap();
        let time = samples
            .iter()
            .find(|s| s.name == "Rules/Time/r/HTTP_REQUEST")
            .unwrap();
        assert_eq!(time.kind, MetricKind::Gauge);
        assert_eq!(time.unit, "cycles");
    }
}
