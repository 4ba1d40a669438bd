//! F5 BIG-IP enterprise MIB addresses used by the catalogue.
//!
//! Everything lives under `1.3.6.1.4.1.3375`. Which OIDs actually resolve
//! depends on device firmware; collectors tolerate absent objects.

// sysProduct
pub const SYS_PRODUCT_NAME: &str = "1.3.6.1.4.1.3375.2.1.4.1.0";
pub const SYS_PRODUCT_VERSION: &str = "1.3.6.1.4.1.3375.2.1.4.2.0";
pub const SYS_PRODUCT_BUILD: &str = "1.3.6.1.4.1.3375.2.1.4.3.0";

// sysGlobalHostCpu (1-minute averages, accumulated across cores on
// older firmware)
pub const SYS_HOST_CPU_COUNT: &str = "1.3.6.1.4.1.3375.2.1.1.2.20.4.0";
pub const SYS_HOST_CPU_USER_1M: &str = "1.3.6.1.4.1.3375.2.1.1.2.20.22.0";
pub const SYS_HOST_CPU_NICE_1M: &str = "1.3.6.1.4.1.3375.2.1.1.2.20.23.0";
pub const SYS_HOST_CPU_SYSTEM_1M: &str = "1.3.6.1.4.1.3375.2.1.1.2.20.24.0";
pub const SYS_HOST_CPU_IRQ_1M: &str = "1.3.6.1.4.1.3375.2.1.1.2.20.26.0";
pub const SYS_HOST_CPU_SOFTIRQ_1M: &str = "1.3.6.1.4.1.3375.2.1.1.2.20.27.0";
pub const SYS_HOST_CPU_IOWAIT_1M: &str = "1.3.6.1.4.1.3375.2.1.1.2.20.28.0";

// Memory
pub const SYS_STAT_MEMORY_USED: &str = "1.3.6.1.4.1.3375.2.1.1.2.1.45.0";
pub const SYS_HOST_MEMORY_USED: &str = "1.3.6.1.4.1.3375.2.1.7.1.2.0";

// sysGlobalStat connections and byte counters
pub const SYS_STAT_CLIENT_BYTES_IN: &str = "1.3.6.1.4.1.3375.2.1.1.2.1.3.0";
pub const SYS_STAT_CLIENT_BYTES_OUT: &str = "1.3.6.1.4.1.3375.2.1.1.2.1.5.0";
pub const SYS_STAT_CLIENT_TOT_CONNS: &str = "1.3.6.1.4.1.3375.2.1.1.2.1.7.0";
pub const SYS_STAT_CLIENT_CUR_CONNS: &str = "1.3.6.1.4.1.3375.2.1.1.2.1.8.0";
pub const SYS_STAT_SERVER_BYTES_IN: &str = "1.3.6.1.4.1.3375.2.1.1.2.1.10.0";
pub const SYS_STAT_SERVER_BYTES_OUT: &str = "1.3.6.1.4.1.3375.2.1.1.2.1.12.0";
pub const SYS_STAT_SERVER_TOT_CONNS: &str = "1.3.6.1.4.1.3375.2.1.1.2.1.14.0";
pub const SYS_STAT_SERVER_CUR_CONNS: &str = "1.3.6.1.4.1.3375.2.1.1.2.1.15.0";

// sysHttpStat
pub const SYS_HTTP_STAT_RESP_2XX: &str = "1.3.6.1.4.1.3375.2.1.1.2.4.3.0";
pub const SYS_HTTP_STAT_RESP_3XX: &str = "1.3.6.1.4.1.3375.2.1.1.2.4.4.0";
pub const SYS_HTTP_STAT_RESP_4XX: &str = "1.3.6.1.4.1.3375.2.1.1.2.4.5.0";
pub const SYS_HTTP_STAT_RESP_5XX: &str = "1.3.6.1.4.1.3375.2.1.1.2.4.6.0";
pub const SYS_HTTP_STAT_NUMBER_REQS: &str = "1.3.6.1.4.1.3375.2.1.1.2.4.7.0";
pub const SYS_HTTP_STAT_GET_REQS: &str = "1.3.6.1.4.1.3375.2.1.1.2.4.8.0";
pub const SYS_HTTP_STAT_POST_REQS: &str = "1.3.6.1.4.1.3375.2.1.1.2.4.9.0";
pub const SYS_HTTP_STAT_V9_REQS: &str = "1.3.6.1.4.1.3375.2.1.1.2.4.10.0";
pub const SYS_HTTP_STAT_V10_REQS: &str = "1.3.6.1.4.1.3375.2.1.1.2.4.11.0";
pub const SYS_HTTP_STAT_V11_REQS: &str = "1.3.6.1.4.1.3375.2.1.1.2.4.12.0";
pub const SYS_HTTP_STAT_V9_RESP: &str = "1.3.6.1.4.1.3375.2.1.1.2.4.13.0";
pub const SYS_HTTP_STAT_V10_RESP: &str = "1.3.6.1.4.1.3375.2.1.1.2.4.14.0";
pub const SYS_HTTP_STAT_V11_RESP: &str = "1.3.6.1.4.1.3375.2.1.1.2.4.15.0";
pub const SYS_HTTP_STAT_RESP_BUCKET_1K: &str = "1.3.6.1.4.1.3375.2.1.1.2.4.17.0";
pub const SYS_HTTP_STAT_RESP_BUCKET_4K: &str = "1.3.6.1.4.1.3375.2.1.1.2.4.18.0";
pub const SYS_HTTP_STAT_RESP_BUCKET_16K: &str = "1.3.6.1.4.1.3375.2.1.1.2.4.19.0";
pub const SYS_HTTP_STAT_RESP_BUCKET_32K: &str = "1.3.6.1.4.1.3375.2.1.1.2.4.20.0";

// sysHttpCompressionStat (pre/post byte counter pairs)
pub const SYS_HTTP_COMP_PRE: &str = "1.3.6.1.4.1.3375.2.1.1.2.22.2.0";
pub const SYS_HTTP_COMP_POST: &str = "1.3.6.1.4.1.3375.2.1.1.2.22.3.0";
pub const SYS_HTTP_COMP_HTML_PRE: &str = "1.3.6.1.4.1.3375.2.1.1.2.22.5.0";
pub const SYS_HTTP_COMP_HTML_POST: &str = "1.3.6.1.4.1.3375.2.1.1.2.22.6.0";
pub const SYS_HTTP_COMP_CSS_PRE: &str = "1.3.6.1.4.1.3375.2.1.1.2.22.7.0";
pub const SYS_HTTP_COMP_CSS_POST: &str = "1.3.6.1.4.1.3375.2.1.1.2.22.8.0";
pub const SYS_HTTP_COMP_JS_PRE: &str = "1.3.6.1.4.1.3375.2.1.1.2.22.9.0";
pub const SYS_HTTP_COMP_JS_POST: &str = "1.3.6.1.4.1.3375.2.1.1.2.22.10.0";
pub const SYS_HTTP_COMP_XML_PRE: &str = "1.3.6.1.4.1.3375.2.1.1.2.22.11.0";
pub const SYS_HTTP_COMP_XML_POST: &str = "1.3.6.1.4.1.3375.2.1.1.2.22.12.0";
pub const SYS_HTTP_COMP_SGML_PRE: &str = "1.3.6.1.4.1.3375.2.1.1.2.22.13.0";
pub const SYS_HTTP_COMP_SGML_POST: &str = "1.3.6.1.4.1.3375.2.1.1.2.22.14.0";
pub const SYS_HTTP_COMP_PLAIN_PRE: &str = "1.3.6.1.4.1.3375.2.1.1.2.22.15.0";
pub const SYS_HTTP_COMP_PLAIN_POST: &str = "1.3.6.1.4.1.3375.2.1.1.2.22.16.0";
pub const SYS_HTTP_COMP_OCTET_PRE: &str = "1.3.6.1.4.1.3375.2.1.1.2.22.17.0";
pub const SYS_HTTP_COMP_OCTET_POST: &str = "1.3.6.1.4.1.3375.2.1.1.2.22.18.0";
pub const SYS_HTTP_COMP_IMAGE_PRE: &str = "1.3.6.1.4.1.3375.2.1.1.2.22.19.0";
pub const SYS_HTTP_COMP_IMAGE_POST: &str = "1.3.6.1.4.1.3375.2.1.1.2.22.20.0";
pub const SYS_HTTP_COMP_VIDEO_PRE: &str = "1.3.6.1.4.1.3375.2.1.1.2.22.21.0";
pub const SYS_HTTP_COMP_VIDEO_POST: &str = "1.3.6.1.4.1.3375.2.1.1.2.22.22.0";
pub const SYS_HTTP_COMP_AUDIO_PRE: &str = "1.3.6.1.4.1.3375.2.1.1.2.22.23.0";
pub const SYS_HTTP_COMP_AUDIO_POST: &str = "1.3.6.1.4.1.3375.2.1.1.2.22.24.0";
pub const SYS_HTTP_COMP_OTHER_PRE: &str = "1.3.6.1.4.1.3375.2.1.1.2.22.25.0";
pub const SYS_HTTP_COMP_OTHER_POST: &str = "1.3.6.1.4.1.3375.2.1.1.2.22.26.0";

// sysClientsslStat / sysServersslStat (device-global SSL)
pub const SYS_CLIENTSSL_CUR_CONNS: &str = "1.3.6.1.4.1.3375.2.1.1.2.9.2.0";
pub const SYS_CLIENTSSL_TOT_NATIVE: &str = "1.3.6.1.4.1.3375.2.1.1.2.9.6.0";
pub const SYS_CLIENTSSL_TOT_COMPAT: &str = "1.3.6.1.4.1.3375.2.1.1.2.9.9.0";
pub const SYS_CLIENTSSL_SSLV2: &str = "1.3.6.1.4.1.3375.2.1.1.2.9.32.0";
pub const SYS_CLIENTSSL_SSLV3: &str = "1.3.6.1.4.1.3375.2.1.1.2.9.33.0";
pub const SYS_CLIENTSSL_TLSV1: &str = "1.3.6.1.4.1.3375.2.1.1.2.9.34.0";
pub const SYS_CLIENTSSL_ADH_KEYXCHG: &str = "1.3.6.1.4.1.3375.2.1.1.2.9.35.0";
pub const SYS_CLIENTSSL_DHRSA_KEYXCHG: &str = "1.3.6.1.4.1.3375.2.1.1.2.9.37.0";
pub const SYS_CLIENTSSL_RSA_KEYXCHG: &str = "1.3.6.1.4.1.3375.2.1.1.2.9.40.0";
pub const SYS_CLIENTSSL_EDHRSA_KEYXCHG: &str = "1.3.6.1.4.1.3375.2.1.1.2.9.51.0";
pub const SYS_CLIENTSSL_NULL_BULK: &str = "1.3.6.1.4.1.3375.2.1.1.2.9.41.0";
pub const SYS_CLIENTSSL_AES_BULK: &str = "1.3.6.1.4.1.3375.2.1.1.2.9.42.0";
pub const SYS_CLIENTSSL_DES_BULK: &str = "1.3.6.1.4.1.3375.2.1.1.2.9.43.0";
pub const SYS_CLIENTSSL_IDEA_BULK: &str = "1.3.6.1.4.1.3375.2.1.1.2.9.44.0";
pub const SYS_CLIENTSSL_RC2_BULK: &str = "1.3.6.1.4.1.3375.2.1.1.2.9.45.0";
pub const SYS_CLIENTSSL_RC4_BULK: &str = "1.3.6.1.4.1.3375.2.1.1.2.9.46.0";
pub const SYS_CLIENTSSL_NULL_DIGEST: &str = "1.3.6.1.4.1.3375.2.1.1.2.9.47.0";
pub const SYS_CLIENTSSL_MD5_DIGEST: &str = "1.3.6.1.4.1.3375.2.1.1.2.9.48.0";
pub const SYS_CLIENTSSL_SHA_DIGEST: &str = "1.3.6.1.4.1.3375.2.1.1.2.9.49.0";
pub const SYS_CLIENTSSL_NOTSSL: &str = "1.3.6.1.4.1.3375.2.1.1.2.9.50.0";

pub const SYS_SERVERSSL_CUR_CONNS: &str = "1.3.6.1.4.1.3375.2.1.1.2.10.2.0";
pub const SYS_SERVERSSL_TOT_NATIVE: &str = "1.3.6.1.4.1.3375.2.1.1.2.10.6.0";
pub const SYS_SERVERSSL_TOT_COMPAT: &str = "1.3.6.1.4.1.3375.2.1.1.2.10.9.0";
pub const SYS_SERVERSSL_SSLV2: &str = "1.3.6.1.4.1.3375.2.1.1.2.10.32.0";
pub const SYS_SERVERSSL_SSLV3: &str = "1.3.6.1.4.1.3375.2.1.1.2.10.33.0";
pub const SYS_SERVERSSL_TLSV1: &str = "1.3.6.1.4.1.3375.2.1.1.2.10.34.0";
pub const SYS_SERVERSSL_ADH_KEYXCHG: &str = "1.3.6.1.4.1.3375.2.1.1.2.10.35.0";
pub const SYS_SERVERSSL_DHRSA_KEYXCHG: &str = "1.3.6.1.4.1.3375.2.1.1.2.10.37.0";
pub const SYS_SERVERSSL_RSA_KEYXCHG: &str = "1.3.6.1.4.1.3375.2.1.1.2.10.40.0";
pub const SYS_SERVERSSL_EDHRSA_KEYXCHG: &str = "1.3.6.1.4.1.3375.2.1.1.2.10.51.0";
pub const SYS_SERVERSSL_NULL_BULK: &str = "1.3.6.1.4.1.3375.2.1.1.2.10.41.0";
pub const SYS_SERVERSSL_AES_BULK: &str = "1.3.6.1.4.1.3375.2.1.1.2.10.42.0";
pub const SYS_SERVERSSL_DES_BULK: &str = "1.3.6.1.4.1.3375.2.1.1.2.10.43.0";
pub const SYS_SERVERSSL_IDEA_BULK: &str = "1.3.6.1.4.1.3375.2.1.1.2.10.44.0";
pub const SYS_SERVERSSL_RC2_BULK: &str = "1.3.6.1.4.1.3375.2.1.1.2.10.45.0";
pub const SYS_SERVERSSL_RC4_BULK: &str = "1.3.6.1.4.1.3375.2.1.1.2.10.46.0";
pub const SYS_SERVERSSL_NULL_DIGEST: &str = "1.3.6.1.4.1.3375.2.1.1.2.10.47.0";
pub const SYS_SERVERSSL_MD5_DIGEST: &str = "1.3.6.1.4.1.3375.2.1.1.2.10.48.0";
pub const SYS_SERVERSSL_SHA_DIGEST: &str = "1.3.6.1.4.1.3375.2.1.1.2.10.49.0";
pub const SYS_SERVERSSL_NOTSSL: &str = "1.3.6.1.4.1.3375.2.1.1.2.10.50.0";

// sysTcpStat
pub const SYS_TCP_STAT_OPEN: &str = "1.3.6.1.4.1.3375.2.1.1.2.12.2.0";
pub const SYS_TCP_STAT_CLOSE_WAIT: &str = "1.3.6.1.4.1.3375.2.1.1.2.12.3.0";
pub const SYS_TCP_STAT_FIN_WAIT: &str = "1.3.6.1.4.1.3375.2.1.1.2.12.4.0";
pub const SYS_TCP_STAT_TIME_WAIT: &str = "1.3.6.1.4.1.3375.2.1.1.2.12.5.0";
pub const SYS_TCP_STAT_ACCEPTS: &str = "1.3.6.1.4.1.3375.2.1.1.2.12.6.0";
pub const SYS_TCP_STAT_ACCEPT_FAILS: &str = "1.3.6.1.4.1.3375.2.1.1.2.12.7.0";
pub const SYS_TCP_STAT_CONNECTS: &str = "1.3.6.1.4.1.3375.2.1.1.2.12.8.0";
pub const SYS_TCP_STAT_CONNECT_FAILS: &str = "1.3.6.1.4.1.3375.2.1.1.2.12.9.0";
pub const SYS_TCP_STAT_EXPIRES: &str = "1.3.6.1.4.1.3375.2.1.1.2.12.10.0";
pub const SYS_TCP_STAT_ABANDONS: &str = "1.3.6.1.4.1.3375.2.1.1.2.12.11.0";
pub const SYS_TCP_STAT_RXRST: &str = "1.3.6.1.4.1.3375.2.1.1.2.12.12.0";
pub const SYS_TCP_STAT_RXBADSUM: &str = "1.3.6.1.4.1.3375.2.1.1.2.12.13.0";
pub const SYS_TCP_STAT_RXBADSEG: &str = "1.3.6.1.4.1.3375.2.1.1.2.12.14.0";
pub const SYS_TCP_STAT_RXOOSEG: &str = "1.3.6.1.4.1.3375.2.1.1.2.12.15.0";
pub const SYS_TCP_STAT_RXCOOKIE: &str = "1.3.6.1.4.1.3375.2.1.1.2.12.16.0";
pub const SYS_TCP_STAT_RXBADCOOKIE: &str = "1.3.6.1.4.1.3375.2.1.1.2.12.17.0";
pub const SYS_TCP_STAT_SYNCACHE_OVER: &str = "1.3.6.1.4.1.3375.2.1.1.2.12.18.0";
pub const SYS_TCP_STAT_TXREXMITS: &str = "1.3.6.1.4.1.3375.2.1.1.2.12.19.0";

// sysInterface / sysInterfaceStat columns
pub const SYS_INTERFACE_NAME: &str = "1.3.6.1.4.1.3375.2.1.2.4.1.2.1.1";
pub const SYS_INTERFACE_STATUS: &str = "1.3.6.1.4.1.3375.2.1.2.4.1.2.1.17";
pub const SYS_INTERFACE_STAT_PKTS_IN: &str = "1.3.6.1.4.1.3375.2.1.2.4.4.3.1.2";
pub const SYS_INTERFACE_STAT_BYTES_IN: &str = "1.3.6.1.4.1.3375.2.1.2.4.4.3.1.3";
pub const SYS_INTERFACE_STAT_PKTS_OUT: &str = "1.3.6.1.4.1.3375.2.1.2.4.4.3.1.4";
pub const SYS_INTERFACE_STAT_BYTES_OUT: &str = "1.3.6.1.4.1.3375.2.1.2.4.4.3.1.5";
pub const SYS_INTERFACE_STAT_MCAST_IN: &str = "1.3.6.1.4.1.3375.2.1.2.4.4.3.1.6";
pub const SYS_INTERFACE_STAT_MCAST_OUT: &str = "1.3.6.1.4.1.3375.2.1.2.4.4.3.1.7";
pub const SYS_INTERFACE_STAT_ERRORS_IN: &str = "1.3.6.1.4.1.3375.2.1.2.4.4.3.1.8";
pub const SYS_INTERFACE_STAT_ERRORS_OUT: &str = "1.3.6.1.4.1.3375.2.1.2.4.4.3.1.9";
pub const SYS_INTERFACE_STAT_DROPS_IN: &str = "1.3.6.1.4.1.3375.2.1.2.4.4.3.1.10";
pub const SYS_INTERFACE_STAT_DROPS_OUT: &str = "1.3.6.1.4.1.3375.2.1.2.4.4.3.1.11";
pub const SYS_INTERFACE_STAT_COLLISIONS: &str = "1.3.6.1.4.1.3375.2.1.2.4.4.3.1.12";

// ltmNodeAddrMonitorStatus
pub const LTM_NODE_MONITOR_STATUS: &str = "1.3.6.1.4.1.3375.2.2.4.1.2.1.7";

// ltmVirtualServStat columns
pub const LTM_VIRTUAL_STAT_NAME: &str = "1.3.6.1.4.1.3375.2.2.10.2.3.1.1";
pub const LTM_VIRTUAL_STAT_PKTS_IN: &str = "1.3.6.1.4.1.3375.2.2.10.2.3.1.6";
pub const LTM_VIRTUAL_STAT_BYTES_IN: &str = "1.3.6.1.4.1.3375.2.2.10.2.3.1.7";
pub const LTM_VIRTUAL_STAT_PKTS_OUT: &str = "1.3.6.1.4.1.3375.2.2.10.2.3.1.8";
pub const LTM_VIRTUAL_STAT_BYTES_OUT: &str = "1.3.6.1.4.1.3375.2.2.10.2.3.1.9";
pub const LTM_VIRTUAL_STAT_TOT_CONNS: &str = "1.3.6.1.4.1.3375.2.2.10.2.3.1.11";
pub const LTM_VIRTUAL_STAT_CUR_CONNS: &str = "1.3.6.1.4.1.3375.2.2.10.2.3.1.12";
pub const LTM_VIRTUAL_STAT_TOT_REQUESTS: &str = "1.3.6.1.4.1.3375.2.2.10.2.3.1.27";
pub const LTM_VIRTUAL_STAT_USAGE_RATIO_1M: &str = "1.3.6.1.4.1.3375.2.2.10.2.3.1.32";

// ltmPoolStat columns
pub const LTM_POOL_STAT_NAME: &str = "1.3.6.1.4.1.3375.2.2.5.2.3.1.1";
pub const LTM_POOL_STAT_PKTS_IN: &str = "1.3.6.1.4.1.3375.2.2.5.2.3.1.2";
pub const LTM_POOL_STAT_BYTES_IN: &str = "1.3.6.1.4.1.3375.2.2.5.2.3.1.3";
pub const LTM_POOL_STAT_PKTS_OUT: &str = "1.3.6.1.4.1.3375.2.2.5.2.3.1.4";
pub const LTM_POOL_STAT_BYTES_OUT: &str = "1.3.6.1.4.1.3375.2.2.5.2.3.1.5";
pub const LTM_POOL_STAT_TOT_CONNS: &str = "1.3.6.1.4.1.3375.2.2.5.2.3.1.7";
pub const LTM_POOL_STAT_CUR_CONNS: &str = "1.3.6.1.4.1.3375.2.2.5.2.3.1.8";
pub const LTM_POOL_STAT_TOT_REQUESTS: &str = "1.3.6.1.4.1.3375.2.2.5.2.3.1.30";

// ltmSnatPoolStat columns
pub const LTM_SNAT_POOL_STAT_NAME: &str = "1.3.6.1.4.1.3375.2.2.9.8.3.1.1";
pub const LTM_SNAT_POOL_STAT_PKTS_IN: &str = "1.3.6.1.4.1.3375.2.2.9.8.3.1.2";
pub const LTM_SNAT_POOL_STAT_BYTES_IN: &str = "1.3.6.1.4.1.3375.2.2.9.8.3.1.3";
pub const LTM_SNAT_POOL_STAT_PKTS_OUT: &str = "1.3.6.1.4.1.3375.2.2.9.8.3.1.4";
pub const LTM_SNAT_POOL_STAT_BYTES_OUT: &str = "1.3.6.1.4.1.3375.2.2.9.8.3.1.5";
pub const LTM_SNAT_POOL_STAT_MAX_CONNS: &str = "1.3.6.1.4.1.3375.2.2.9.8.3.1.6";
pub const LTM_SNAT_POOL_STAT_TOT_CONNS: &str = "1.3.6.1.4.1.3375.2.2.9.8.3.1.7";
pub const LTM_SNAT_POOL_STAT_CUR_CONNS: &str = "1.3.6.1.4.1.3375.2.2.9.8.3.1.8";

// ltmRuleEventStat columns (entity identity is name + event type)
pub const LTM_RULE_STAT_NAME: &str = "1.3.6.1.4.1.3375.2.2.8.3.3.1.1";
pub const LTM_RULE_STAT_EVENT_TYPE: &str = "1.3.6.1.4.1.3375.2.2.8.3.3.1.2";
pub const LTM_RULE_STAT_FAILURES: &str = "1.3.6.1.4.1.3375.2.2.8.3.3.1.4";
pub const LTM_RULE_STAT_ABORTS: &str = "1.3.6.1.4.1.3375.2.2.8.3.3.1.5";
pub const LTM_RULE_STAT_TOT_EXECUTIONS: &str = "1.3.6.1.4.1.3375.2.2.8.3.3.1.6";
pub const LTM_RULE_STAT_AVG_CYCLES: &str = "1.3.6.1.4.1.3375.2.2.8.3.3.1.7";

// ltmClientSslStat columns
pub const LTM_CLIENTSSL_STAT_NAME: &str = "1.3.6.1.4.1.3375.2.2.6.2.2.3.1.1";
pub const LTM_CLIENTSSL_STAT_CUR_CONNS: &str = "1.3.6.1.4.1.3375.2.2.6.2.2.3.1.2";
pub const LTM_CLIENTSSL_STAT_CACHE_CUR_ENTRIES: &str = "1.3.6.1.4.1.3375.2.2.6.2.2.3.1.21";
pub const LTM_CLIENTSSL_STAT_CACHE_HITS: &str = "1.3.6.1.4.1.3375.2.2.6.2.2.3.1.22";
pub const LTM_CLIENTSSL_STAT_CACHE_LOOKUPS: &str = "1.3.6.1.4.1.3375.2.2.6.2.2.3.1.23";
pub const LTM_CLIENTSSL_STAT_CACHE_OVERFLOWS: &str = "1.3.6.1.4.1.3375.2.2.6.2.2.3.1.24";
pub const LTM_CLIENTSSL_STAT_CACHE_INVALIDATIONS: &str = "1.3.6.1.4.1.3375.2.2.6.2.2.3.1.25";
