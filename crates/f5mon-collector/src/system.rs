//! Device-global statistics: CPU, memory, connections, throughput, HTTP,
//! compression, SSL transactions, and the TCP stack.

use anyhow::Result;
use f5mon_common::types::{MetricKind, Sample};
use f5mon_snmp::SnmpSource;

use crate::oids;
use crate::table::scalar_group;

pub struct SystemCollector {
    version: String,
}

impl SystemCollector {
    pub fn new() -> Self {
        Self {
            version: String::new(),
        }
    }

    /// Software version as "<version>.<build>", refreshed each cycle.
    /// Drives the CPU scaling decision below.
    fn refresh_version(&mut self, snmp: &mut dyn SnmpSource) -> f5mon_snmp::Result<()> {
        let res = snmp.get(&[oids::SYS_PRODUCT_VERSION, oids::SYS_PRODUCT_BUILD])?;
        if let (Some(version), Some(build)) = (res[0].as_str(), res[1].as_str()) {
            self.version = format!("{version}.{build}");
        }
        Ok(())
    }

    fn cpu(&self, snmp: &mut dyn SnmpSource) -> f5mon_snmp::Result<Vec<Sample>> {
        let res = snmp.get(&[
            oids::SYS_HOST_CPU_COUNT,
            oids::SYS_HOST_CPU_USER_1M,
            oids::SYS_HOST_CPU_NICE_1M,
            oids::SYS_HOST_CPU_SYSTEM_1M,
            oids::SYS_HOST_CPU_IRQ_1M,
            oids::SYS_HOST_CPU_SOFTIRQ_1M,
            oids::SYS_HOST_CPU_IOWAIT_1M,
        ])?;

        let divisor = if accumulates_across_cores(&self.version) {
            match res[0].as_f64() {
                Some(count) if count > 0.0 => count,
                _ => return Ok(Vec::new()),
            }
        } else {
            1.0
        };

        const COMPONENTS: [&str; 6] = [
            "CPU/Global/User",
            "CPU/Global/Nice",
            "CPU/Global/System",
            "CPU/Global/IRQ",
            "CPU/Global/Soft IRQ",
            "CPU/Global/IO Wait",
        ];

        let mut samples = Vec::with_capacity(COMPONENTS.len() + 1);
        let mut total = 0.0;
        for (name, raw) in COMPONENTS.iter().zip(res[1..].iter()) {
            if let Some(v) = raw.as_f64() {
                let v = v / divisor;
                total += v;
                samples.push(Sample::gauge(*name, "%", v));
            }
        }
        if !samples.is_empty() {
            samples.push(Sample::gauge("CPU/Total/Global", "%", total));
        }
        Ok(samples)
    }

    fn throughput(&self, snmp: &mut dyn SnmpSource) -> f5mon_snmp::Result<Vec<Sample>> {
        let pairs = [
            ("Throughput/Client/In", oids::SYS_STAT_CLIENT_BYTES_IN),
            ("Throughput/Client/Out", oids::SYS_STAT_CLIENT_BYTES_OUT),
            ("Throughput/Server/In", oids::SYS_STAT_SERVER_BYTES_IN),
            ("Throughput/Server/Out", oids::SYS_STAT_SERVER_BYTES_OUT),
        ];
        let mut samples = scalar_group(snmp, &pairs, "bits/sec", MetricKind::Counter, 8.0)?;
        if !samples.is_empty() {
            let total: f64 = samples.iter().map(|s| s.value).sum();
            samples.push(Sample::counter("Throughput/Total", "bits/sec", total));
        }
        Ok(samples)
    }

    fn ssl_transactions(&self, snmp: &mut dyn SnmpSource) -> f5mon_snmp::Result<Vec<Sample>> {
        let res = snmp.get(&[
            oids::SYS_CLIENTSSL_TOT_NATIVE,
            oids::SYS_CLIENTSSL_TOT_COMPAT,
            oids::SYS_SERVERSSL_TOT_NATIVE,
            oids::SYS_SERVERSSL_TOT_COMPAT,
        ])?;
        let vals: Vec<f64> = match res.iter().map(|v| v.as_f64()).collect() {
            Some(vals) => vals,
            None => return Ok(Vec::new()),
        };

        let unit = "trans/sec";
        Ok(vec![
            Sample::counter("SSL/Global/Client/Native", unit, vals[0]),
            Sample::counter("SSL/Global/Client/Compat", unit, vals[1]),
            Sample::counter("SSL/Global/Server/Native", unit, vals[2]),
            Sample::counter("SSL/Global/Server/Compat", unit, vals[3]),
            Sample::counter("SSL/Global/Total/Client", unit, vals[0] + vals[1]),
            Sample::counter("SSL/Global/Total/Server", unit, vals[2] + vals[3]),
            Sample::counter("SSL/Global/Total/All", unit, vals.iter().sum()),
        ])
    }
}

impl Default for SystemCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::Collector for SystemCollector {
    fn name(&self) -> &str {
        "system"
    }

    fn collect(&mut self, snmp: &mut dyn SnmpSource) -> Result<Vec<Sample>> {
        self.refresh_version(snmp)?;
        tracing::debug!(version = %self.version, "collecting system globals");

        let mut samples = self.cpu(snmp)?;

        samples.extend(scalar_group(
            snmp,
            &[
                ("Memory/TMM", oids::SYS_STAT_MEMORY_USED),
                ("Memory/Host", oids::SYS_HOST_MEMORY_USED),
            ],
            "bytes",
            MetricKind::Gauge,
            1.0,
        )?);

        samples.extend(scalar_group(
            snmp,
            &[
                ("Connections/Current/Client", oids::SYS_STAT_CLIENT_CUR_CONNS),
                ("Connections/Current/Server", oids::SYS_STAT_SERVER_CUR_CONNS),
                ("Connections/Current/Client SSL", oids::SYS_CLIENTSSL_CUR_CONNS),
                ("Connections/Current/Server SSL", oids::SYS_SERVERSSL_CUR_CONNS),
            ],
            "conn",
            MetricKind::Gauge,
            1.0,
        )?);

        samples.extend(scalar_group(
            snmp,
            &[
                ("Connections/Rate/Client", oids::SYS_STAT_CLIENT_TOT_CONNS),
                ("Connections/Rate/Server", oids::SYS_STAT_SERVER_TOT_CONNS),
            ],
            "conn/sec",
            MetricKind::Counter,
            1.0,
        )?);

        samples.extend(self.throughput(snmp)?);

        samples.extend(scalar_group(
            snmp,
            &[
                ("HTTP/Method/All", oids::SYS_HTTP_STAT_NUMBER_REQS),
                ("HTTP/Method/Get", oids::SYS_HTTP_STAT_GET_REQS),
                ("HTTP/Method/Post", oids::SYS_HTTP_STAT_POST_REQS),
                ("HTTP/Version/v0.9/Request", oids::SYS_HTTP_STAT_V9_REQS),
                ("HTTP/Version/v1.0/Request", oids::SYS_HTTP_STAT_V10_REQS),
                ("HTTP/Version/v1.1/Request", oids::SYS_HTTP_STAT_V11_REQS),
            ],
            "req/sec",
            MetricKind::Counter,
            1.0,
        )?);

        samples.extend(scalar_group(
            snmp,
            &[
                ("HTTP/Response Code/2xx", oids::SYS_HTTP_STAT_RESP_2XX),
                ("HTTP/Response Code/3xx", oids::SYS_HTTP_STAT_RESP_3XX),
                ("HTTP/Response Code/4xx", oids::SYS_HTTP_STAT_RESP_4XX),
                ("HTTP/Response Code/5xx", oids::SYS_HTTP_STAT_RESP_5XX),
                ("HTTP/Version/v0.9/Response", oids::SYS_HTTP_STAT_V9_RESP),
                ("HTTP/Version/v1.0/Response", oids::SYS_HTTP_STAT_V10_RESP),
                ("HTTP/Version/v1.1/Response", oids::SYS_HTTP_STAT_V11_RESP),
                ("HTTP/Response Size/1k Bucket", oids::SYS_HTTP_STAT_RESP_BUCKET_1K),
                ("HTTP/Response Size/4k Bucket", oids::SYS_HTTP_STAT_RESP_BUCKET_4K),
                ("HTTP/Response Size/16k Bucket", oids::SYS_HTTP_STAT_RESP_BUCKET_16K),
                ("HTTP/Response Size/32k Bucket", oids::SYS_HTTP_STAT_RESP_BUCKET_32K),
            ],
            "resp/sec",
            MetricKind::Counter,
            1.0,
        )?);

        samples.extend(scalar_group(
            snmp,
            &[
                ("HTTP/Compression/Total/Pre", oids::SYS_HTTP_COMP_PRE),
                ("HTTP/Compression/Total/Post", oids::SYS_HTTP_COMP_POST),
                ("HTTP/Compression/HTML/Pre", oids::SYS_HTTP_COMP_HTML_PRE),
                ("HTTP/Compression/HTML/Post", oids::SYS_HTTP_COMP_HTML_POST),
                ("HTTP/Compression/CSS/Pre", oids::SYS_HTTP_COMP_CSS_PRE),
                ("HTTP/Compression/CSS/Post", oids::SYS_HTTP_COMP_CSS_POST),
                ("HTTP/Compression/Javascript/Pre", oids::SYS_HTTP_COMP_JS_PRE),
                ("HTTP/Compression/Javascript/Post", oids::SYS_HTTP_COMP_JS_POST),
                ("HTTP/Compression/XML/Pre", oids::SYS_HTTP_COMP_XML_PRE),
                ("HTTP/Compression/XML/Post", oids::SYS_HTTP_COMP_XML_POST),
                ("HTTP/Compression/SGML/Pre", oids::SYS_HTTP_COMP_SGML_PRE),
                ("HTTP/Compression/SGML/Post", oids::SYS_HTTP_COMP_SGML_POST),
                ("HTTP/Compression/Plain/Pre", oids::SYS_HTTP_COMP_PLAIN_PRE),
                ("HTTP/Compression/Plain/Post", oids::SYS_HTTP_COMP_PLAIN_POST),
                ("HTTP/Compression/Octet/Pre", oids::SYS_HTTP_COMP_OCTET_PRE),
                ("HTTP/Compression/Octet/Post", oids::SYS_HTTP_COMP_OCTET_POST),
                ("HTTP/Compression/Image/Pre", oids::SYS_HTTP_COMP_IMAGE_PRE),
                ("HTTP/Compression/Image/Post", oids::SYS_HTTP_COMP_IMAGE_POST),
                ("HTTP/Compression/Video/Pre", oids::SYS_HTTP_COMP_VIDEO_PRE),
                ("HTTP/Compression/Video/Post", oids::SYS_HTTP_COMP_VIDEO_POST),
                ("HTTP/Compression/Audio/Pre", oids::SYS_HTTP_COMP_AUDIO_PRE),
                ("HTTP/Compression/Audio/Post", oids::SYS_HTTP_COMP_AUDIO_POST),
                ("HTTP/Compression/Other/Pre", oids::SYS_HTTP_COMP_OTHER_PRE),
                ("HTTP/Compression/Other/Post", oids::SYS_HTTP_COMP_OTHER_POST),
            ],
            "bits/sec",
            MetricKind::Counter,
            8.0,
        )?);

        samples.extend(self.ssl_transactions(snmp)?);

        samples.extend(scalar_group(
            snmp,
            &[
                ("TCP/Connection State/Open", oids::SYS_TCP_STAT_OPEN),
                ("TCP/Connection State/Wait/Close", oids::SYS_TCP_STAT_CLOSE_WAIT),
                ("TCP/Connection State/Wait/FIN", oids::SYS_TCP_STAT_FIN_WAIT),
                ("TCP/Connection State/Wait/TIME", oids::SYS_TCP_STAT_TIME_WAIT),
            ],
            "conn",
            MetricKind::Gauge,
            1.0,
        )?);

        samples.extend(scalar_group(
            snmp,
            &[("TCP/Accepts", oids::SYS_TCP_STAT_ACCEPTS)],
            "conn/sec",
            MetricKind::Counter,
            1.0,
        )?);

        samples.extend(scalar_group(
            snmp,
            &[
                ("TCP/SYN Cookies/Received", oids::SYS_TCP_STAT_RXCOOKIE),
                ("TCP/SYN Cookies/Bad", oids::SYS_TCP_STAT_RXBADCOOKIE),
                ("TCP/SYN Cookies/Cache Overflows", oids::SYS_TCP_STAT_SYNCACHE_OVER),
            ],
            "SYN/sec",
            MetricKind::Counter,
            1.0,
        )?);

        samples.extend(scalar_group(
            snmp,
            &[
                ("TCP/Segments/Out of Order", oids::SYS_TCP_STAT_RXOOSEG),
                ("TCP/Segments/Retransmitted", oids::SYS_TCP_STAT_TXREXMITS),
            ],
            "segments/sec",
            MetricKind::Counter,
            1.0,
        )?);

        samples.extend(scalar_group(
            snmp,
            &[
                ("TCP/Errors/Accept Fails", oids::SYS_TCP_STAT_ACCEPT_FAILS),
                ("TCP/Errors/Connect Fails", oids::SYS_TCP_STAT_CONNECT_FAILS),
                ("TCP/Errors/Expired", oids::SYS_TCP_STAT_EXPIRES),
                ("TCP/Errors/Abandoned", oids::SYS_TCP_STAT_ABANDONS),
                ("TCP/Errors/RST Received", oids::SYS_TCP_STAT_RXRST),
                ("TCP/Errors/Bad Checksums", oids::SYS_TCP_STAT_RXBADSUM),
                ("TCP/Errors/Bad Segments", oids::SYS_TCP_STAT_RXBADSEG),
            ],
            "errs/sec",
            MetricKind::Counter,
            1.0,
        )?);

        Ok(samples)
    }
}

/// Firmware in the 11.0.0 through 11.4.0 series reports 1-minute CPU
/// percentages summed over all cores; later releases pre-average them.
/// Matches versions of the form `11.<0-4>.0*`.
fn accumulates_across_cores(version: &str) -> bool {
    let Some(rest) = version.strip_prefix("11.") else {
        return false;
    };
    let mut chars = rest.chars();
    matches!(chars.next(), Some('0'..='4')) && matches!(chars.next(), Some('.')) && matches!(chars.next(), Some('0'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Collector;
    use f5mon_snmp::testing::StaticSource;

    fn versioned(version: &str) -> StaticSource {
        StaticSource::new()
            .scalar_str(oids::SYS_PRODUCT_VERSION, version)
            .scalar_str(oids::SYS_PRODUCT_BUILD, "647.0")
    }

    fn value_of(samples: &[Sample], name: &str) -> f64 {
        samples
            .iter()
            .find(|s| s.name == name)
            .unwrap_or_else(|| panic!("missing sample {name}"))
            .value
    }

    #[test]
    fn version_match_for_core_accumulating_firmware() {
        assert!(accumulates_across_cores("11.2.0.2446.0"));
        assert!(accumulates_across_cores("11.0.0.128.0"));
        assert!(!accumulates_across_cores("11.4.1.647.0"));
        assert!(!accumulates_across_cores("11.5.0.100.0"));
        assert!(!accumulates_across_cores("10.2.0.1.0"));
        assert!(!accumulates_across_cores(""));
    }

    #[test]
    fn cpu_divided_by_core_count_on_old_firmware() {
        let mut snmp = versioned("11.2.0")
            .scalar_num(oids::SYS_HOST_CPU_COUNT, 4)
            .scalar_num(oids::SYS_HOST_CPU_USER_1M, 80)
            .scalar_num(oids::SYS_HOST_CPU_NICE_1M, 0)
            .scalar_num(oids::SYS_HOST_CPU_SYSTEM_1M, 40)
            .scalar_num(oids::SYS_HOST_CPU_IRQ_1M, 0)
            .scalar_num(oids::SYS_HOST_CPU_SOFTIRQ_1M, 0)
            .scalar_num(oids::SYS_HOST_CPU_IOWAIT_1M, 0);
        let samples = SystemCollector::new().collect(&mut snmp).unwrap();
        assert_eq!(value_of(&samples, "CPU/Global/User"), 20.0);
        assert_eq!(value_of(&samples, "CPU/Global/System"), 10.0);
        assert_eq!(value_of(&samples, "CPU/Total/Global"), 30.0);
    }

    #[test]
    fn cpu_taken_as_is_on_averaging_firmware() {
        let mut snmp = versioned("11.4.1")
            .scalar_num(oids::SYS_HOST_CPU_COUNT, 4)
            .scalar_num(oids::SYS_HOST_CPU_USER_1M, 80)
            .scalar_num(oids::SYS_HOST_CPU_NICE_1M, 0)
            .scalar_num(oids::SYS_HOST_CPU_SYSTEM_1M, 40)
            .scalar_num(oids::SYS_HOST_CPU_IRQ_1M, 0)
            .scalar_num(oids::SYS_HOST_CPU_SOFTIRQ_1M, 0)
            .scalar_num(oids::SYS_HOST_CPU_IOWAIT_1M, 0);
        let samples = SystemCollector::new().collect(&mut snmp).unwrap();
        assert_eq!(value_of(&samples, "CPU/Global/User"), 80.0);
        assert_eq!(value_of(&samples, "CPU/Total/Global"), 120.0);
    }

    #[test]
    fn throughput_converts_bytes_to_bits_and_totals() {
        let mut snmp = versioned("11.6.0")
            .scalar_num(oids::SYS_STAT_CLIENT_BYTES_IN, 125)
            .scalar_num(oids::SYS_STAT_CLIENT_BYTES_OUT, 250)
            .scalar_num(oids::SYS_STAT_SERVER_BYTES_IN, 0)
            .scalar_num(oids::SYS_STAT_SERVER_BYTES_OUT, 0);
        let samples = SystemCollector::new().collect(&mut snmp).unwrap();
        assert_eq!(value_of(&samples, "Throughput/Client/In"), 1000.0);
        assert_eq!(value_of(&samples, "Throughput/Client/Out"), 2000.0);
        assert_eq!(value_of(&samples, "Throughput/Total"), 3000.0);
    }

    #[test]
    fn ssl_transactions_report_subtotals() {
        let mut snmp = versioned("11.6.0")
            .scalar_num(oids::SYS_CLIENTSSL_TOT_NATIVE, 10)
            .scalar_num(oids::SYS_CLIENTSSL_TOT_COMPAT, 5)
            .scalar_num(oids::SYS_SERVERSSL_TOT_NATIVE, 2)
            .scalar_num(oids::SYS_SERVERSSL_TOT_COMPAT, 1);
        let samples = SystemCollector::new().collect(&mut snmp).unwrap();
        assert_eq!(value_of(&samples, "SSL/Global/Total/Client"), 15.0);
        assert_eq!(value_of(&samples, "SSL/Global/Total/Server"), 3.0);
        assert_eq!(value_of(&samples, "SSL/Global/Total/All"), 18.0);
    }

    #[test]
    fn absent_groups_are_skipped_without_error() {
        // Bare device: only the version answers.
        let mut snmp = versioned("11.6.0");
        let samples = SystemCollector::new().collect(&mut snmp).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn memory_reported_as_gauges() {
        let mut snmp = versioned("11.6.0")
            .scalar_num(oids::SYS_STAT_MEMORY_USED, 1024)
            .scalar_num(oids::SYS_HOST_MEMORY_USED, 2048);
        let samples = SystemCollector::new().collect(&mut snmp).unwrap();
        let tmm = samples.iter().find(|s| s.name == "Memory/TMM").unwrap();
        assert_eq!(tmm.kind, MetricKind::Gauge);
        assert_eq!(tmm.value, 1024.0);
        assert_eq!(value_of(&samples, "Memory/Host"), 2048.0);
    }
}
