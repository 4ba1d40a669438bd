use std::time::Duration;

use snmp2::{Oid, SyncSession};

use crate::error::{Result, SnmpError};
use crate::oid::parse_oid;
use crate::value::SnmpValue;
use crate::SnmpSource;

/// Blocking SNMPv2c session against a single device endpoint.
///
/// Opened once per polling cycle and dropped at the end of it; every call
/// blocks until the device responds or the socket read timeout fires.
pub struct SnmpSession {
    session: SyncSession,
    target: String,
}

impl SnmpSession {
    pub fn open(host: &str, port: u16, community: &str, timeout: Duration) -> Result<Self> {
        let target = format!("{host}:{port}");
        let session =
            SyncSession::new_v2c(target.as_str(), community.as_bytes(), Some(timeout), 0)?;
        Ok(Self { session, target })
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

// On a datagram socket with a read timeout, a receive failure is the
// timeout case; everything else is a protocol-level failure.
fn convert_err(e: snmp2::Error) -> SnmpError {
    let msg = format!("{e:?}");
    if msg.contains("Receive") {
        SnmpError::Timeout
    } else {
        SnmpError::Protocol(msg)
    }
}

impl SnmpSource for SnmpSession {
    fn get(&mut self, oids: &[&str]) -> Result<Vec<SnmpValue>> {
        let mut out = Vec::with_capacity(oids.len());
        for oid_str in oids {
            let oid = parse_oid(oid_str)?;
            let pdu = self.session.get(&oid).map_err(convert_err)?;
            let value = pdu
                .varbinds
                .into_iter()
                .next()
                .map(|(_, v)| SnmpValue::from(&v))
                .ok_or_else(|| SnmpError::EmptyResponse(oid_str.to_string()))?;
            out.push(value);
        }
        Ok(out)
    }

    fn walk(&mut self, oid: &str) -> Result<Vec<SnmpValue>> {
        let root = parse_oid(oid)?;
        let mut current: Oid<'static> = root.to_owned();
        let mut out = Vec::new();

        loop {
            let pdu = self.session.getnext(&current).map_err(convert_err)?;
            let mut next: Option<Oid<'static>> = None;

            for (name, value) in pdu.varbinds {
                if !name.starts_with(&root) {
                    tracing::trace!(oid, rows = out.len(), "walk complete");
                    return Ok(out);
                }
                let value = SnmpValue::from(&value);
                if value == SnmpValue::NoSuchObject {
                    // EndOfMibView folds into the absent sentinel.
                    return Ok(out);
                }
                out.push(value);
                next = Some(name.to_owned());
            }

            match next {
                Some(n) => current = n,
                None => return Ok(out),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_binds_without_touching_the_device() {
        // UDP socket setup only; no packet leaves until the first request.
        let session =
            SnmpSession::open("127.0.0.1", 161, "public", Duration::from_millis(100)).unwrap();
        assert_eq!(session.target(), "127.0.0.1:161");
    }
}
