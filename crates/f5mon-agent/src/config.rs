use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AgentConfig {
    /// BIG-IP management address.
    pub hostname: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_community")]
    pub community: String,
    /// Label attached to reported batches; defaults to the hostname.
    pub label: Option<String>,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_snmp_timeout")]
    pub snmp_timeout_secs: u64,
    /// Where flushed metric batches go. Without it the agent logs
    /// metrics instead of shipping them.
    pub report_endpoint: Option<String>,
}

fn default_port() -> u16 {
    161
}

fn default_community() -> String {
    "public".to_string()
}

fn default_poll_interval() -> u64 {
    60
}

fn default_snmp_timeout() -> u64 {
    8
}

impl AgentConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.hostname)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn snmp_timeout(&self) -> Duration {
        Duration::from_secs(self.snmp_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_fills_defaults() {
        let config: AgentConfig = toml::from_str(r#"hostname = "10.0.0.5""#).unwrap();
        assert_eq!(config.port, 161);
        assert_eq!(config.community, "public");
        assert_eq!(config.poll_interval_secs, 60);
        assert_eq!(config.snmp_timeout_secs, 8);
        assert_eq!(config.label(), "10.0.0.5");
        assert!(config.report_endpoint.is_none());
    }

    #[test]
    fn explicit_values_win() {
        let config: AgentConfig = toml::from_str(
            r#"
            hostname = "lb1.example.net"
            port = 1161
            community = "s3cret"
            label = "edge-lb"
            poll_interval_secs = 30
            report_endpoint = "http://metrics.example.net/ingest"
            "#,
        )
        .unwrap();
        assert_eq!(config.port, 1161);
        assert_eq!(config.label(), "edge-lb");
        assert_eq!(config.poll_interval(), Duration::from_secs(30));
        assert_eq!(
            config.report_endpoint.as_deref(),
            Some("http://metrics.example.net/ingest")
        );
    }
}
