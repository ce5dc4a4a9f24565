use super::GraphiteClient;
use crate::error::ClientError;
use crate::metrics::{Metric, MetricValue};

/// A client that accepts every call and sends nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullClient;

impl NullClient {
    pub fn new() -> Self {
        Self
    }
}

impl GraphiteClient for NullClient {
    fn connect(&mut self) -> Result<(), ClientError> {
        Ok(())
    }

    fn disconnect(&mut self) -> Result<(), ClientError> {
        Ok(())
    }

    fn send_all(&mut self, _metrics: &[Metric]) -> Result<(), ClientError> {
        Ok(())
    }

    fn send_value(&mut self, _name: &str, _value: MetricValue) -> Result<(), ClientError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Client;

    fn exercise(client: &mut dyn GraphiteClient) {
        client.connect().unwrap();
        client.send_value("hello.graphite.world", 42.into()).unwrap();
        client.send(&Metric::new("test", 3.14)).unwrap();
        client
            .send_all(&[Metric::new("foo", 1), Metric::new("", 1.23), Metric::new("baz", "456")])
            .unwrap();
        client.disconnect().unwrap();
        client.disconnect().unwrap();
    }

    #[test]
    fn test_null_client_accepts_everything() {
        exercise(&mut NullClient::new());
    }

    #[test]
    fn test_absent_client_is_noop() {
        let mut client: Option<Client> = None;
        exercise(&mut client);
    }

    #[test]
    fn test_boxed_null_client() {
        let mut client: Box<dyn GraphiteClient> = Box::new(NullClient);
        exercise(&mut client);
    }
}
