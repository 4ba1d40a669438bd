mod config;
mod poller;
mod sink;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use anyhow::Result;
use clap::Parser;
use f5mon_common::sink::MetricSink;
use f5mon_snmp::SnmpSession;
use tracing_subscriber::EnvFilter;

use crate::config::AgentConfig;
use crate::poller::Poller;
use crate::sink::{HttpSink, LogSink};

/// Periodic SNMP telemetry agent for F5 BIG-IP devices.
#[derive(Parser)]
#[command(name = "f5mon-agent", version)]
struct Args {
    /// Path to the agent TOML config
    #[arg(short, long, default_value = "config/agent.toml")]
    config: String,

    /// Run a single poll cycle and exit
    #[arg(long)]
    once: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("f5mon=info".parse()?))
        .init();

    let args = Args::parse();
    let config = AgentConfig::load(&args.config)?;
    tracing::info!(
        host = %config.hostname,
        port = config.port,
        label = config.label(),
        interval_secs = config.poll_interval_secs,
        "f5mon-agent starting"
    );

    let mut sink: Box<dyn MetricSink> = match config.report_endpoint.as_deref() {
        Some(endpoint) => Box::new(HttpSink::new(endpoint, config.label())),
        None => Box::new(LogSink::new()),
    };

    let running = Arc::new(AtomicBool::new(true));
    {
        let running = running.clone();
        ctrlc::set_handler(move || {
            tracing::info!("shutdown requested");
            running.store(false, Ordering::SeqCst);
        })?;
    }

    let mut poller = Poller::new();
    while running.load(Ordering::SeqCst) {
        let started = std::time::Instant::now();
        run_cycle(&config, &mut poller, sink.as_mut());
        if args.once {
            break;
        }

        // Sleep out the rest of the interval in short slices so Ctrl-C
        // takes effect promptly.
        let interval = config.poll_interval();
        while running.load(Ordering::SeqCst) && started.elapsed() < interval {
            thread::sleep(std::time::Duration::from_millis(250));
        }
    }

    tracing::info!("f5mon-agent stopped");
    Ok(())
}

/// One cycle over a fresh session. Any failure is logged and charged to
/// this cycle alone; the next cycle starts clean.
fn run_cycle(config: &AgentConfig, poller: &mut Poller, sink: &mut dyn MetricSink) {
    let mut session = match SnmpSession::open(
        &config.hostname,
        config.port,
        &config.community,
        config.snmp_timeout(),
    ) {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(error = %e, "could not open SNMP session");
            return;
        }
    };

    match poller.poll(&mut session, sink) {
        Ok(stats) => tracing::info!(
            collected = stats.collected,
            reported = stats.reported,
            failed_collectors = stats.failed_collectors,
            "poll cycle complete"
        ),
        Err(e) => tracing::warn!(error = %e, "poll cycle aborted"),
    }
}
