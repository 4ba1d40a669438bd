//! SNMP access port for the f5mon collectors.
//!
//! Collectors talk to the device through the [`SnmpSource`] trait: a
//! positional multi-OID `get` and an ordered subtree `walk`. The blocking
//! [`session::SnmpSession`] implements it over a real SNMPv2c socket;
//! [`testing::StaticSource`] implements it over canned data.

pub mod error;
pub mod oid;
pub mod session;
pub mod testing;
pub mod value;

pub use error::{Result, SnmpError};
pub use session::SnmpSession;
pub use value::SnmpValue;

/// Synchronous request/response capability against one device endpoint.
pub trait SnmpSource {
    /// Fetches scalar values for `oids`, positionally aligned with the
    /// input. An OID the device does not implement yields
    /// [`SnmpValue::NoSuchObject`] in its slot rather than failing the
    /// whole call.
    fn get(&mut self, oids: &[&str]) -> Result<Vec<SnmpValue>>;

    /// Returns every value under the `oid` subtree in ascending index
    /// order, terminating when the subtree is exhausted.
    fn walk(&mut self, oid: &str) -> Result<Vec<SnmpValue>>;
}
