/// Owned SNMP value, decoupled from the session's receive buffer.
///
/// `NoSuchObject` is the defined sentinel for an OID the device firmware
/// does not implement; callers treat it as an absent value, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SnmpValue {
    Integer(i64),
    Counter32(u64),
    Counter64(u64),
    Gauge(u64),
    TimeTicks(u32),
    Str(String),
    Oid(String),
    NoSuchObject,
    Null,
}

impl SnmpValue {
    /// Numeric view of the value. Strings that parse as numbers count;
    /// `NoSuchObject` and `Null` do not.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SnmpValue::Integer(v) => Some(*v as f64),
            SnmpValue::Counter32(v) | SnmpValue::Counter64(v) | SnmpValue::Gauge(v) => {
                Some(*v as f64)
            }
            SnmpValue::TimeTicks(v) => Some(*v as f64),
            SnmpValue::Str(s) => s.trim().parse().ok(),
            SnmpValue::Oid(_) | SnmpValue::NoSuchObject | SnmpValue::Null => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SnmpValue::Str(s) => Some(s),
            SnmpValue::Oid(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, SnmpValue::NoSuchObject | SnmpValue::Null)
    }
}

impl From<&snmp2::Value<'_>> for SnmpValue {
    fn from(v: &snmp2::Value<'_>) -> Self {
        use snmp2::Value;
        match v {
            Value::Integer(i) => SnmpValue::Integer(*i),
            Value::Counter32(c) => SnmpValue::Counter32(*c as u64),
            Value::Counter64(c) => SnmpValue::Counter64(*c),
            Value::Unsigned32(u) => SnmpValue::Gauge(*u as u64),
            Value::Timeticks(t) => SnmpValue::TimeTicks(*t),
            Value::OctetString(bytes) => {
                SnmpValue::Str(String::from_utf8_lossy(bytes).into_owned())
            }
            Value::ObjectIdentifier(oid) => SnmpValue::Oid(oid.to_string()),
            Value::NoSuchObject | Value::NoSuchInstance | Value::EndOfMibView => {
                SnmpValue::NoSuchObject
            }
            _ => SnmpValue::Null,
        }
    }
}
