/// Errors surfaced by the SNMP access port.
///
/// `Timeout` is the signal the orchestrator uses to abort a cycle at the
/// probe step; everything else is a per-call protocol failure.
#[derive(Debug, thiserror::Error)]
pub enum SnmpError {
    #[error("SNMP request timed out")]
    Timeout,

    #[error("invalid OID `{0}`")]
    InvalidOid(String),

    #[error("SNMP protocol error: {0}")]
    Protocol(String),

    #[error("SNMP response missing varbind for {0}")]
    EmptyResponse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SnmpError>;
