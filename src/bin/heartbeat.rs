use anyhow::{Context, Result};
use carbonwire::{logging, Client, ClientConfig, ConfigOverrides, GraphiteClient, Metric};
use clap::Parser;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::time;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Periodically send heartbeat metrics to Graphite", long_about = None)]
struct Args {
    /// Graphite address in host:port notation
    #[arg(short, long, env = "CARBONWIRE_ADDRESS")]
    address: Option<String>,

    /// Prefix prepended to every metric name
    #[arg(short, long, env = "CARBONWIRE_PREFIX")]
    prefix: Option<String>,

    /// Connect timeout in seconds: 0 uses the default, -1 disables it
    #[arg(short, long, env = "CARBONWIRE_TIMEOUT", allow_negative_numbers = true)]
    timeout: Option<i64>,

    /// TOML config file; flags take precedence over its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seconds between heartbeats
    #[arg(short, long, default_value = "10")]
    interval: u64,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let overrides = ConfigOverrides {
        address: args.address,
        prefix: args.prefix,
        timeout: args.timeout,
    };
    let config = ClientConfig::resolve(args.config.as_deref(), overrides)?;

    let mut client = Client::from_config(&config);
    client
        .connect()
        .with_context(|| format!("could not reach graphite at {}", config.address))?;
    info!(address = %config.address, interval = args.interval, "sending heartbeats, press Ctrl+C to stop");

    let started = Instant::now();
    let mut interval = time::interval(Duration::from_secs(args.interval.max(1)));
    let mut beats: i64 = 0;

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                beats += 1;
                let metrics = [
                    Metric::new("heartbeat", 1),
                    Metric::new("heartbeat.count", beats),
                    Metric::new("uptime_seconds", started.elapsed().as_secs_f64().round()),
                ];

                // There is no reconnect; a failed write ends the run.
                if let Err(e) = client.send_all(&metrics) {
                    error!(error = %e, "heartbeat failed");
                    let _ = client.disconnect();
                    return Err(e.into());
                }
            }
            _ = &mut shutdown => {
                info!(beats, "shutting down");
                break;
            }
        }
    }

    client.disconnect()?;
    Ok(())
}
