//! Metric collection core for the f5mon agent.
//!
//! Each [`Collector`] implementation covers one BIG-IP sub-resource
//! (system globals, interfaces, nodes, virtual servers, pools, SNAT
//! pools, iRules, client-SSL profiles, global SSL) and turns its slice of
//! the F5 enterprise MIB into [`Sample`]s. Cumulative counters stay raw
//! here; the orchestrator pushes them through the [`rate::RateEngine`]
//! before anything reaches a sink.

pub mod client_ssl;
pub mod global_ssl;
pub mod interfaces;
pub mod nodes;
pub mod oids;
pub mod pools;
pub mod rate;
pub mod rules;
pub mod snatpools;
pub mod system;
pub mod virtuals;

mod names;
mod status;
mod table;

use anyhow::Result;
use f5mon_common::types::Sample;
use f5mon_snmp::SnmpSource;

pub use names::NameCache;

/// Per-statistic cap on ranked entity metrics forwarded to the sink.
/// Everything is still computed so counter baselines stay warm.
pub const MAX_RANKED_RESULTS: usize = 100;

/// One device sub-resource collector.
///
/// Instances live as long as the orchestrator and carry their entity name
/// caches across cycles. `collect` runs strictly sequentially within a
/// cycle; a failure isolates to this collector and costs only its metrics.
pub trait Collector: Send {
    /// Collector name used for logging (e.g. `"pools"`).
    fn name(&self) -> &str;

    /// Gathers this resource's raw samples for the current cycle.
    ///
    /// # Errors
    ///
    /// Returns an error when the access port fails outright; partial data
    /// (absent OIDs, empty tables) is not an error.
    fn collect(&mut self, snmp: &mut dyn SnmpSource) -> Result<Vec<Sample>>;
}

/// The full catalogue in its fixed polling order.
pub fn catalogue() -> Vec<Box<dyn Collector>> {
    vec![
        Box::new(system::SystemCollector::new()),
        Box::new(nodes::NodesCollector::new()),
        Box::new(virtuals::VirtualsCollector::new()),
        Box::new(pools::PoolsCollector::new()),
        Box::new(rules::RulesCollector::new()),
        Box::new(snatpools::SnatPoolsCollector::new()),
        Box::new(client_ssl::ClientSslCollector::new()),
        Box::new(global_ssl::GlobalSslCollector::new()),
        Box::new(interfaces::InterfacesCollector::new()),
    ]
}
