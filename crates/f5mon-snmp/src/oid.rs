use snmp2::Oid;

use crate::error::{Result, SnmpError};

/// Parses a dotted-numeric OID string into an owned [`Oid`].
pub fn parse_oid(s: &str) -> Result<Oid<'static>> {
    let parts: std::result::Result<Vec<u64>, _> = s
        .trim()
        .split('.')
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<u64>())
        .collect();

    let parts = parts.map_err(|_| SnmpError::InvalidOid(s.to_string()))?;
    if parts.is_empty() {
        return Err(SnmpError::InvalidOid(s.to_string()));
    }
    Oid::from(&parts).map_err(|_| SnmpError::InvalidOid(s.to_string()))
}
