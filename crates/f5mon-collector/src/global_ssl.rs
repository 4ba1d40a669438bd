//! Device-wide SSL protocol, key exchange, bulk cipher, and digest
//! transaction counters, split by client and server side.

use anyhow::Result;
use f5mon_common::types::{MetricKind, Sample};
use f5mon_snmp::SnmpSource;

use crate::oids;
use crate::table::scalar_group;

const UNIT: &str = "trans/sec";

pub struct GlobalSslCollector;

impl GlobalSslCollector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GlobalSslCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::Collector for GlobalSslCollector {
    fn name(&self) -> &str {
        "global_ssl"
    }

    fn collect(&mut self, snmp: &mut dyn SnmpSource) -> Result<Vec<Sample>> {
        let mut samples = scalar_group(
            snmp,
            &[
                ("SSL/Global/Protocol/Client/SSLv2", oids::SYS_CLIENTSSL_SSLV2),
                ("SSL/Global/Protocol/Client/SSLv3", oids::SYS_CLIENTSSL_SSLV3),
                ("SSL/Global/Protocol/Client/TLSv1", oids::SYS_CLIENTSSL_TLSV1),
                ("SSL/Global/Protocol/Server/SSLv2", oids::SYS_SERVERSSL_SSLV2),
                ("SSL/Global/Protocol/Server/SSLv3", oids::SYS_SERVERSSL_SSLV3),
                ("SSL/Global/Protocol/Server/TLSv1", oids::SYS_SERVERSSL_TLSV1),
            ],
            UNIT,
            MetricKind::Counter,
            1.0,
        )?;

        samples.extend(scalar_group(
            snmp,
            &[
                ("SSL/Global/KeyExchange/Client/Adh", oids::SYS_CLIENTSSL_ADH_KEYXCHG),
                ("SSL/Global/KeyExchange/Client/DhRSA", oids::SYS_CLIENTSSL_DHRSA_KEYXCHG),
                ("SSL/Global/KeyExchange/Client/RSA", oids::SYS_CLIENTSSL_RSA_KEYXCHG),
                ("SSL/Global/KeyExchange/Client/EdhRsa", oids::SYS_CLIENTSSL_EDHRSA_KEYXCHG),
                ("SSL/Global/KeyExchange/Server/Adh", oids::SYS_SERVERSSL_ADH_KEYXCHG),
                ("SSL/Global/KeyExchange/Server/DhRSA", oids::SYS_SERVERSSL_DHRSA_KEYXCHG),
                ("SSL/Global/KeyExchange/Server/RSA", oids::SYS_SERVERSSL_RSA_KEYXCHG),
                ("SSL/Global/KeyExchange/Server/EdhRsa", oids::SYS_SERVERSSL_EDHRSA_KEYXCHG),
            ],
            UNIT,
            MetricKind::Counter,
            1.0,
        )?);

        samples.extend(scalar_group(
            snmp,
            &[
                ("SSL/Global/Bulk/Client/Null", oids::SYS_CLIENTSSL_NULL_BULK),
                ("SSL/Global/Bulk/Client/AES", oids::SYS_CLIENTSSL_AES_BULK),
                ("SSL/Global/Bulk/Client/DES", oids::SYS_CLIENTSSL_DES_BULK),
                ("SSL/Global/Bulk/Client/IDEA", oids::SYS_CLIENTSSL_IDEA_BULK),
                ("SSL/Global/Bulk/Client/RC2", oids::SYS_CLIENTSSL_RC2_BULK),
                ("SSL/Global/Bulk/Client/RC4", oids::SYS_CLIENTSSL_RC4_BULK),
                ("SSL/Global/Bulk/Server/Null", oids::SYS_SERVERSSL_NULL_BULK),
                ("SSL/Global/Bulk/Server/AES", oids::SYS_SERVERSSL_AES_BULK),
                ("SSL/Global/Bulk/Server/DES", oids::SYS_SERVERSSL_DES_BULK),
                ("SSL/Global/Bulk/Server/IDEA", oids::SYS_SERVERSSL_IDEA_BULK),
                ("SSL/Global/Bulk/Server/RC2", oids::SYS_SERVERSSL_RC2_BULK),
                ("SSL/Global/Bulk/Server/RC4", oids::SYS_SERVERSSL_RC4_BULK),
            ],
            UNIT,
            MetricKind::Counter,
            1.0,
        )?);

        samples.extend(scalar_group(
            snmp,
            &[
                ("SSL/Global/Digest/Client/Null", oids::SYS_CLIENTSSL_NULL_DIGEST),
                ("SSL/Global/Digest/Client/MD5", oids::SYS_CLIENTSSL_MD5_DIGEST),
                ("SSL/Global/Digest/Client/SHA", oids::SYS_CLIENTSSL_SHA_DIGEST),
                ("SSL/Global/Digest/Client/NotSSL", oids::SYS_CLIENTSSL_NOTSSL),
                ("SSL/Global/Digest/Server/Null", oids::SYS_SERVERSSL_NULL_DIGEST),
                ("SSL/Global/Digest/Server/MD5", oids::SYS_SERVERSSL_MD5_DIGEST),
                ("SSL/Global/Digest/Server/SHA", oids::SYS_SERVERSSL_SHA_DIGEST),
                ("SSL/Global/Digest/Server/NotSSL", oids::SYS_SERVERSSL_NOTSSL),
            ],
            UNIT,
            MetricKind::Counter,
            1.0,
        )?);

        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Collector;
    use f5mon_snmp::testing::StaticSource;

    #[test]
    fn reports_counters_in_transactions_per_second() {
        let mut snmp = StaticSource::new()
            .scalar_num(oids::SYS_CLIENTSSL_TLSV1, 42)
            .scalar_num(oids::SYS_SERVERSSL_RSA_KEYXCHG, 7);
        let samples = GlobalSslCollector::new().collect(&mut snmp).unwrap();
        assert_eq!(samples.len(), 2);

        let tls = samples
            .iter()
            .find(|s| s.name == "SSL/Global/Protocol/Client/TLSv1")
            .unwrap();
        assert_eq!(tls.value, 42.0);
        assert_eq!(tls.unit, "trans/sec");
        assert_eq!(tls.kind, MetricKind::Counter);
        assert!(samples
            .iter()
            .any(|s| s.name == "SSL/Global/KeyExchange/Server/RSA"));
    }

    #[test]
    fn firmware_without_cipher_detail_reports_nothing() {
        let mut snmp = StaticSource::new();
        assert!(GlobalSslCollector::new().collect(&mut snmp).unwrap().is_empty());
    }
}
