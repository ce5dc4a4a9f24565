pub mod graphite;
pub mod null;
pub mod timeout;

pub use graphite::Client;
pub use null::NullClient;
pub use timeout::{ConnectTimeout, DEFAULT_TIMEOUT};

use crate::error::ClientError;
use crate::metrics::{Metric, MetricValue};

/// Capabilities shared by every client flavour.
///
/// Code that treats monitoring as best-effort can hold a `Box<dyn GraphiteClient>`
/// or an `Option<C>` and call it unconditionally: [`NullClient`] and `None`
/// succeed without doing anything.
pub trait GraphiteClient {
    fn connect(&mut self) -> Result<(), ClientError>;

    fn disconnect(&mut self) -> Result<(), ClientError>;

    /// Sends all metrics in a single write.
    fn send_all(&mut self, metrics: &[Metric]) -> Result<(), ClientError>;

    /// Sends a metric that has been recorded earlier.
    fn send(&mut self, metric: &Metric) -> Result<(), ClientError> {
        self.send_all(std::slice::from_ref(metric))
    }

    /// Captures a metric stamped with the current time and sends it.
    fn send_value(&mut self, name: &str, value: MetricValue) -> Result<(), ClientError> {
        self.send(&Metric::new(name, value))
    }
}

impl<C: GraphiteClient> GraphiteClient for Option<C> {
    fn connect(&mut self) -> Result<(), ClientError> {
        match self {
            Some(client) => client.connect(),
            None => Ok(()),
        }
    }

    fn disconnect(&mut self) -> Result<(), ClientError> {
        match self {
            Some(client) => client.disconnect(),
            None => Ok(()),
        }
    }

    fn send_all(&mut self, metrics: &[Metric]) -> Result<(), ClientError> {
        match self {
            Some(client) => client.send_all(metrics),
            None => Ok(()),
        }
    }

    fn send(&mut self, metric: &Metric) -> Result<(), ClientError> {
        match self {
            Some(client) => client.send(metric),
            None => Ok(()),
        }
    }

    fn send_value(&mut self, name: &str, value: MetricValue) -> Result<(), ClientError> {
        match self {
            Some(client) => client.send_value(name, value),
            None => Ok(()),
        }
    }
}

impl<C: GraphiteClient + ?Sized> GraphiteClient for Box<C> {
    fn connect(&mut self) -> Result<(), ClientError> {
        (**self).connect()
    }

    fn disconnect(&mut self) -> Result<(), ClientError> {
        (**self).disconnect()
    }

    fn send_all(&mut self, metrics: &[Metric]) -> Result<(), ClientError> {
        (**self).send_all(metrics)
    }

    fn send(&mut self, metric: &Metric) -> Result<(), ClientError> {
        (**self).send(metric)
    }

    fn send_value(&mut self, name: &str, value: MetricValue) -> Result<(), ClientError> {
        (**self).send_value(name, value)
    }
}
