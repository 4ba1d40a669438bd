use std::collections::BTreeMap;

use f5mon_common::types::Sample;
use f5mon_snmp::{Result, SnmpSource};

/// Builds a status histogram from one enum-valued column walk. Every
/// known label starts at zero so a state with no members still reports,
/// and codes outside the table land in an "unknown" bucket.
pub(crate) fn status_histogram(
    snmp: &mut dyn SnmpSource,
    column: &str,
    prefix: &str,
    unit: &'static str,
    states: &[(i64, &str)],
) -> Result<Vec<Sample>> {
    let mut counts: BTreeMap<&str, u64> = states.iter().map(|(_, label)| (*label, 0)).collect();
    let mut unknown = 0u64;

    for row in snmp.walk(column)? {
        let code = match row.as_f64() {
            Some(v) => v as i64,
            None => continue,
        };
        match states.iter().find(|(c, _)| *c == code) {
            Some((_, label)) => *counts.entry(*label).or_insert(0) += 1,
            None => unknown += 1,
        }
    }

    let mut samples: Vec<Sample> = states
        .iter()
        .map(|(_, label)| {
            Sample::gauge(format!("{prefix}/{label}"), unit, counts[label] as f64)
        })
        .collect();
    if unknown > 0 {
        samples.push(Sample::gauge(format!("{prefix}/unknown"), unit, unknown as f64));
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use f5mon_snmp::testing::StaticSource;

    const STATES: &[(i64, &str)] = &[(0, "down"), (1, "up")];

    #[test]
    fn unmatched_labels_still_report_zero() {
        let mut snmp = StaticSource::new().walk_nums("1.1", &[1, 1]);
        let samples = status_histogram(&mut snmp, "1.1", "Nodes", "nodes", STATES).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].name, "Nodes/down");
        assert_eq!(samples[0].value, 0.0);
        assert_eq!(samples[1].name, "Nodes/up");
        assert_eq!(samples[1].value, 2.0);
        assert!(samples.iter().all(|s| s.unit == "nodes"));
    }

    #[test]
    fn out_of_table_codes_count_as_unknown() {
        let mut snmp = StaticSource::new().walk_nums("1.1", &[1, 42]);
        let samples = status_histogram(&mut snmp, "1.1", "Nodes", "nodes", STATES).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[2].name, "Nodes/unknown");
        assert_eq!(samples[2].value, 1.0);
    }

    #[test]
    fn empty_walk_reports_all_zeros() {
        let mut snmp = StaticSource::new().walk_nums("1.1", &[]);
        let samples = status_histogram(&mut snmp, "1.1", "Nodes", "nodes", STATES).unwrap();
        assert!(samples.iter().all(|s| s.value == 0.0));
        assert_eq!(samples.len(), 2);
    }
}
