use std::fmt;
use tracing::{debug, trace};

use super::{ConnectTimeout, GraphiteClient};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::metrics::{encode_batch, Metric};
use crate::transport::{Connection, Dialer, TcpDialer};

/// Graphite client holding at most one connection.
///
/// The client is created disconnected; call [`GraphiteClient::connect`] before
/// sending.
pub struct Client<D = TcpDialer> {
    address: String,
    timeout: ConnectTimeout,
    prefix: String,
    dialer: D,
    connection: Option<Box<dyn Connection>>,
}

impl Client<TcpDialer> {
    /// `address` uses `host:port` notation. No connection is made yet.
    pub fn new(address: impl Into<String>) -> Self {
        Self::with_dialer(address, TcpDialer)
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.address.clone())
            .with_timeout(config.timeout)
            .with_prefix(config.prefix.clone())
    }
}

impl<D: Dialer> Client<D> {
    pub fn with_dialer(address: impl Into<String>, dialer: D) -> Self {
        Self {
            address: address.into(),
            timeout: ConnectTimeout::Default,
            prefix: String::new(),
            dialer,
            connection: None,
        }
    }

    pub fn with_timeout(mut self, timeout: ConnectTimeout) -> Self {
        self.timeout = timeout;
        self
    }

    /// Prepends `prefix` and a dot to every metric name sent. An empty prefix does nothing.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn timeout(&self) -> ConnectTimeout {
        self.timeout
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Adopts a stream that has already been established by the caller.
    pub fn use_connection(&mut self, connection: impl Connection + 'static) -> Result<(), ClientError> {
        if self.connection.is_some() {
            return Err(ClientError::AlreadyConnected);
        }
        self.connection = Some(Box::new(connection));
        Ok(())
    }
}

impl<D: Dialer> GraphiteClient for Client<D> {
    fn connect(&mut self) -> Result<(), ClientError> {
        if self.connection.is_some() {
            return Err(ClientError::AlreadyConnected);
        }

        let timeout = self.timeout.resolve();
        let connection = self
            .dialer
            .dial(&self.address, timeout)
            .map_err(|source| ClientError::Dial {
                address: self.address.clone(),
                source,
            })?;

        debug!(address = %self.address, ?timeout, "connected to graphite");
        self.connection = Some(connection);
        Ok(())
    }

    fn disconnect(&mut self) -> Result<(), ClientError> {
        let Some(mut connection) = self.connection.take() else {
            return Ok(());
        };

        debug!(address = %self.address, "disconnecting from graphite");
        connection.close().map_err(ClientError::Close)
    }

    fn send_all(&mut self, metrics: &[Metric]) -> Result<(), ClientError> {
        let connection = self.connection.as_mut().ok_or(ClientError::NotConnected)?;

        let buffer = encode_batch(&self.prefix, metrics)?;
        if buffer.is_empty() {
            return Ok(());
        }

        let written = connection.write(buffer.as_bytes()).map_err(ClientError::Write)?;
        trace!(metrics = metrics.len(), bytes = written, "sent metrics batch");
        Ok(())
    }
}

impl<D> fmt::Debug for Client<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("address", &self.address)
            .field("timeout", &self.timeout)
            .field("prefix", &self.prefix)
            .field("connected", &self.connection.is_some())
            .finish()
    }
}
