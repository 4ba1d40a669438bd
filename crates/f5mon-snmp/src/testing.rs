//! Canned [`SnmpSource`] for tests. No socket, no device.

use std::collections::{HashMap, HashSet};

use crate::error::{Result, SnmpError};
use crate::value::SnmpValue;
use crate::SnmpSource;

/// In-memory SNMP agent: scalar answers keyed by OID, walk answers keyed
/// by column OID. Unknown scalar OIDs answer `NoSuchObject`, unknown walk
/// OIDs answer an empty subtree — the same shape a live device presents
/// for unconfigured resources.
#[derive(Debug, Default)]
pub struct StaticSource {
    scalars: HashMap<String, SnmpValue>,
    walks: HashMap<String, Vec<SnmpValue>>,
    failing_walks: HashSet<String>,
    fail_all: bool,
    pub get_calls: usize,
    pub walk_calls: usize,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scalar(mut self, oid: &str, value: SnmpValue) -> Self {
        self.scalars.insert(oid.to_string(), value);
        self
    }

    pub fn scalar_num(self, oid: &str, value: u64) -> Self {
        self.scalar(oid, SnmpValue::Counter64(value))
    }

    pub fn scalar_str(self, oid: &str, value: &str) -> Self {
        self.scalar(oid, SnmpValue::Str(value.to_string()))
    }

    pub fn walk_rows(mut self, oid: &str, rows: Vec<SnmpValue>) -> Self {
        self.walks.insert(oid.to_string(), rows);
        self
    }

    pub fn walk_names(self, oid: &str, names: &[&str]) -> Self {
        let rows = names
            .iter()
            .map(|n| SnmpValue::Str(n.to_string()))
            .collect();
        self.walk_rows(oid, rows)
    }

    pub fn walk_nums(self, oid: &str, values: &[u64]) -> Self {
        let rows = values.iter().map(|v| SnmpValue::Counter64(*v)).collect();
        self.walk_rows(oid, rows)
    }

    /// Arms a timeout for every walk against `oid`.
    pub fn failing_walk(mut self, oid: &str) -> Self {
        self.failing_walks.insert(oid.to_string());
        self
    }

    /// Arms a timeout for every call, scalar and walk alike.
    pub fn unreachable(mut self) -> Self {
        self.fail_all = true;
        self
    }

    /// Replaces a scalar answer in place, for multi-cycle tests.
    pub fn set_scalar(&mut self, oid: &str, value: SnmpValue) {
        self.scalars.insert(oid.to_string(), value);
    }

    pub fn set_walk(&mut self, oid: &str, rows: Vec<SnmpValue>) {
        self.walks.insert(oid.to_string(), rows);
    }
}

impl SnmpSource for StaticSource {
    fn get(&mut self, oids: &[&str]) -> Result<Vec<SnmpValue>> {
        self.get_calls += 1;
        if self.fail_all {
            return Err(SnmpError::Timeout);
        }
        Ok(oids
            .iter()
            .map(|oid| {
                self.scalars
                    .get(*oid)
                    .cloned()
                    .unwrap_or(SnmpValue::NoSuchObject)
            })
            .collect())
    }

    fn walk(&mut self, oid: &str) -> Result<Vec<SnmpValue>> {
        self.walk_calls += 1;
        if self.fail_all || self.failing_walks.contains(oid) {
            return Err(SnmpError::Timeout);
        }
        Ok(self.walks.get(oid).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_get_with_absent_slot() {
        let mut src = StaticSource::new().scalar_num("1.2.3", 7);
        let vals = src.get(&["1.2.3", "1.2.4"]).unwrap();
        assert_eq!(vals[0], SnmpValue::Counter64(7));
        assert_eq!(vals[1], SnmpValue::NoSuchObject);
    }

    #[test]
    fn unknown_walk_is_empty_not_error() {
        let mut src = StaticSource::new();
        assert!(src.walk("1.2.3").unwrap().is_empty());
    }

    #[test]
    fn armed_walk_times_out() {
        let mut src = StaticSource::new().failing_walk("1.2.3");
        assert!(matches!(src.walk("1.2.3"), Err(SnmpError::Timeout)));
    }
}
