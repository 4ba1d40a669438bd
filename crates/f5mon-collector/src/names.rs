use f5mon_snmp::{Result, SnmpSource};

/// Entity names for one resource type, in agent row order.
///
/// Row order from the name walk is assumed to match the row order of
/// later value walks against parallel stat columns; that positional
/// correspondence is how values get bound to entity names. The cache is
/// refilled lazily whenever empty, and each table collector clears it at
/// the start of a cycle so reconfiguration shows up on the next poll.
#[derive(Debug, Default)]
pub struct NameCache {
    names: Vec<String>,
}

impl NameCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the cached names, walking `column` to refill first if the
    /// cache is empty. A refill fully replaces the previous contents.
    pub fn ensure(&mut self, snmp: &mut dyn SnmpSource, column: &str) -> Result<&[String]> {
        if self.names.is_empty() {
            self.names = snmp
                .walk(column)?
                .iter()
                .map(|v| v.as_str().unwrap_or_default().to_string())
                .collect();
        }
        Ok(&self.names)
    }

    /// Variant for resources whose identity spans two parallel columns
    /// (iRule name + event type), joined with `/`.
    pub fn ensure_joined(
        &mut self,
        snmp: &mut dyn SnmpSource,
        first: &str,
        second: &str,
    ) -> Result<&[String]> {
        if self.names.is_empty() {
            let left = snmp.walk(first)?;
            let right = snmp.walk(second)?;
            self.names = left
                .iter()
                .zip(right.iter())
                .map(|(a, b)| {
                    format!(
                        "{}/{}",
                        a.as_str().unwrap_or_default(),
                        b.as_str().unwrap_or_default()
                    )
                })
                .collect();
        }
        Ok(&self.names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use f5mon_snmp::testing::StaticSource;

    #[test]
    fn refills_only_when_empty() {
        let mut snmp = StaticSource::new().walk_names("1.2.3", &["a", "b"]);
        let mut cache = NameCache::new();
        assert_eq!(cache.ensure(&mut snmp, "1.2.3").unwrap(), ["a", "b"]);
        assert_eq!(snmp.walk_calls, 1);

        // Cached: the second call does not hit the device.
        cache.ensure(&mut snmp, "1.2.3").unwrap();
        assert_eq!(snmp.walk_calls, 1);

        cache.clear();
        cache.ensure(&mut snmp, "1.2.3").unwrap();
        assert_eq!(snmp.walk_calls, 2);
    }

    #[test]
    fn joined_names_pair_rows_positionally() {
        let mut snmp = StaticSource::new()
            .walk_names("1.1", &["rule_a", "rule_b"])
            .walk_names("1.2", &["HTTP_REQUEST", "HTTP_RESPONSE"]);
        let mut cache = NameCache::new();
        let names = cache.ensure_joined(&mut snmp, "1.1", "1.2").unwrap();
        assert_eq!(names, ["rule_a/HTTP_REQUEST", "rule_b/HTTP_RESPONSE"]);
    }
}
