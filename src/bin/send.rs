use anyhow::{Context, Result};
use carbonwire::metrics::{parse_line, parse_value};
use carbonwire::{logging, Client, ClientConfig, ConfigOverrides, GraphiteClient, Metric};
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputFormat {
    /// `<name> <value> <unix-seconds>` lines
    Plain,
    /// One JSON object per line: {"name": ..., "value": ..., "timestamp": ...}
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Send metrics to a Graphite server in a single write", long_about = None)]
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

    /// Format of metrics read from stdin
    #[arg(short, long, value_enum, default_value = "plain")]
    format: InputFormat,

    #[arg(short, long)]
    verbose: bool,

    /// Metric name; metrics are read from stdin when omitted
    #[arg(requires = "value")]
    name: Option<String>,

    /// Metric value
    value: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let overrides = ConfigOverrides {
        address: args.address.clone(),
        prefix: args.prefix.clone(),
        timeout: args.timeout,
    };
    let config = ClientConfig::resolve(args.config.as_deref(), overrides)?;

    let metrics = match (&args.name, &args.value) {
        (Some(name), Some(value)) => vec![Metric::new(name.as_str(), parse_value(value))],
        _ => read_metrics(io::stdin().lock(), args.format)?,
    };

    let mut client = Client::from_config(&config);
    client.connect()?;
    client.send_all(&metrics)?;
    client.disconnect()?;

    info!(count = metrics.len(), address = %config.address, "sent metrics");
    Ok(())
}

fn read_metrics(input: impl BufRead, format: InputFormat) -> Result<Vec<Metric>> {
    let mut metrics = Vec::new();

    for (number, line) in input.lines().enumerate() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let metric = match format {
            InputFormat::Plain => parse_line(&line).map_err(anyhow::Error::from),
            InputFormat::Json => serde_json::from_str(&line).map_err(anyhow::Error::from),
        }
        .with_context(|| format!("invalid metric on line {}", number + 1))?;
        metrics.push(metric);
    }

    Ok(metrics)
}
