//! Client for the Graphite plaintext protocol.
//!
//! Metrics are written as `<name> <value> <unix-seconds>\n` lines over a single
//! persistent stream connection. Every send call maps to exactly one write.
//!
//! A [`Client`] is not internally synchronized. All lifecycle and send methods
//! take `&mut self`, so callers sharing a client across threads must wrap it in
//! a lock or keep one client per worker.

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod transport;

pub use client::{Client, ConnectTimeout, GraphiteClient, NullClient, DEFAULT_TIMEOUT};
pub use config::{ClientConfig, ConfigOverrides};
pub use error::{ClientError, ConfigError, LineParseError};
pub use metrics::{Metric, MetricValue};
pub use transport::{Connection, Dialer, TcpDialer};
