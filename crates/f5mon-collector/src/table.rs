use f5mon_common::types::{MetricKind, Sample};
use f5mon_snmp::{Result, SnmpSource};

pub(crate) struct TableStat {
    pub prefix: &'static str,
    pub column: &'static str,
    pub unit: &'static str,
    pub kind: MetricKind,
    /// Applied to the raw value before rate conversion (8.0 for byte
    /// counters reported as bits).
    pub scale: f64,
    pub ranked: bool,
}

impl TableStat {
    pub fn gauge(prefix: &'static str, column: &'static str, unit: &'static str) -> Self {
        Self {
            prefix,
            column,
            unit,
            kind: MetricKind::Gauge,
            scale: 1.0,
            ranked: false,
        }
    }

    pub fn counter(prefix: &'static str, column: &'static str, unit: &'static str) -> Self {
        Self {
            prefix,
            column,
            unit,
            kind: MetricKind::Counter,
            scale: 1.0,
            ranked: false,
        }
    }

    pub fn bits(mut self) -> Self {
        self.scale = 8.0;
        self
    }

    pub fn ranked(mut self) -> Self {
        self.ranked = true;
        self
    }
}

/// Fetches a batch of scalar OIDs and binds them to fixed metric names.
/// Absent objects drop out silently so older firmware reports what it has.
pub(crate) fn scalar_group(
    snmp: &mut dyn SnmpSource,
    pairs: &[(&'static str, &'static str)],
    unit: &'static str,
    kind: MetricKind,
    scale: f64,
) -> Result<Vec<Sample>> {
    let oids: Vec<&str> = pairs.iter().map(|(_, oid)| *oid).collect();
    let values = snmp.get(&oids)?;
    Ok(pairs
        .iter()
        .zip(values.iter())
        .filter_map(|((name, _), value)| {
            let value = value.as_f64()? * scale;
            Some(match kind {
                MetricKind::Gauge => Sample::gauge(*name, unit, value),
                MetricKind::Counter => Sample::counter(*name, unit, value),
            })
        })
        .collect())
}

/// Walks one stat column and zips the values against `names` by position
/// to build `"<prefix>/<entity>"` samples. The zip stops at the shorter
/// side; rows without a numeric value are skipped.
pub(crate) fn gather_by_name(
    snmp: &mut dyn SnmpSource,
    names: &[String],
    stat: &TableStat,
) -> Result<Vec<Sample>> {
    let rows = snmp.walk(stat.column)?;
    let samples: Vec<Sample> = names
        .iter()
        .zip(rows.iter())
        .filter_map(|(name, row)| {
            let value = row.as_f64()? * stat.scale;
            let full = format!("{}/{}", stat.prefix, name);
            let mut sample = match stat.kind {
                MetricKind::Gauge => Sample::gauge(full, stat.unit, value),
                MetricKind::Counter => Sample::counter(full, stat.unit, value),
            };
            if stat.ranked {
                sample = sample.ranked(stat.prefix);
            }
            Some(sample)
        })
        .collect();

    tracing::debug!(
        prefix = stat.prefix,
        got = samples.len(),
        names = names.len(),
        "table stat gathered"
    );
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use f5mon_snmp::testing::StaticSource;
    use f5mon_snmp::SnmpValue;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn binds_values_to_names_by_position() {
        let mut snmp = StaticSource::new().walk_nums("9.9", &[10, 20]);
        let stat = TableStat::counter("Pools/Requests", "9.9", "req/sec");
        let samples = gather_by_name(&mut snmp, &names(&["poolA", "poolB"]), &stat).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].name, "Pools/Requests/poolA");
        assert_eq!(samples[0].value, 10.0);
        assert_eq!(samples[1].name, "Pools/Requests/poolB");
        assert_eq!(samples[1].value, 20.0);
    }

    #[test]
    fn bits_scale_applies_before_rates() {
        let mut snmp = StaticSource::new().walk_nums("9.9", &[125]);
        let stat = TableStat::counter("Pools/Throughput/In", "9.9", "bits/sec").bits();
        let samples = gather_by_name(&mut snmp, &names(&["p"]), &stat).unwrap();
        assert_eq!(samples[0].value, 1000.0);
    }

    #[test]
    fn extra_rows_beyond_names_are_dropped() {
        let mut snmp = StaticSource::new().walk_nums("9.9", &[1, 2, 3]);
        let stat = TableStat::gauge("X/Y", "9.9", "conns");
        let samples = gather_by_name(&mut snmp, &names(&["only"]), &stat).unwrap();
        assert_eq!(samples.len(), 1);
    }

    #[test]
    fn non_numeric_rows_are_skipped() {
        let mut snmp = StaticSource::new().walk_rows(
            "9.9",
            vec![SnmpValue::Counter64(5), SnmpValue::NoSuchObject],
        );
        let stat = TableStat::gauge("X/Y", "9.9", "conns");
        let samples = gather_by_name(&mut snmp, &names(&["a", "b"]), &stat).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].name, "X/Y/a");
    }

    #[test]
    fn scalar_group_skips_absent_objects() {
        // "1.2" is not configured, so it answers NoSuchObject.
        let mut snmp = StaticSource::new().scalar_num("1.1", 125);
        let pairs = [("Throughput/Client/In", "1.1"), ("Throughput/Client/Out", "1.2")];
        let samples =
            scalar_group(&mut snmp, &pairs, "bits/sec", MetricKind::Counter, 8.0).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].name, "Throughput/Client/In");
        assert_eq!(samples[0].value, 1000.0);
    }

    #[test]
    fn ranked_stat_tags_its_group() {
        let mut snmp = StaticSource::new().walk_nums("9.9", &[4]);
        let stat = TableStat::counter("Pools/Requests", "9.9", "req/sec").ranked();
        let samples = gather_by_name(&mut snmp, &names(&["p"]), &stat).unwrap();
        assert_eq!(samples[0].rank_group.as_deref(), Some("Pools/Requests"));
    }
}
