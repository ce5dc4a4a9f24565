use super::{Connection, Dialer};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct MockState {
    pub writes: Vec<Vec<u8>>,
    pub closed: bool,
    pub fail_writes: bool,
    pub fail_close: bool,
}

/// Records every write. Clones share state, so a test keeps one handle while
/// the client owns the other.
#[derive(Debug, Clone, Default)]
pub struct MockConnection {
    pub state: Arc<Mutex<MockState>>,
}

impl MockConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let conn = Self::new();
        conn.state.lock().unwrap().fail_writes = true;
        conn
    }

    pub fn writes(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .writes
            .iter()
            .map(|w| String::from_utf8(w.clone()).unwrap())
            .collect()
    }

    pub fn bytes_received(&self) -> usize {
        self.state.lock().unwrap().writes.iter().map(Vec::len).sum()
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().unwrap().closed
    }
}

impl Connection for MockConnection {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "connection reset"));
        }
        state.writes.push(buf.to_vec());
        Ok(buf.len())
    }

    fn close(&mut self) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_close {
            return Err(io::Error::new(io::ErrorKind::Other, "close failed"));
        }
        state.closed = true;
        Ok(())
    }
}

/// Hands out clones of one `MockConnection` and records the timeout of every dial.
#[derive(Debug, Clone, Default)]
pub struct MockDialer {
    pub connection: MockConnection,
    pub timeouts: Arc<Mutex<Vec<Option<Duration>>>>,
    pub refuse: bool,
}

impl MockDialer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    pub fn timeouts(&self) -> Vec<Option<Duration>> {
        self.timeouts.lock().unwrap().clone()
    }
}

impl Dialer for MockDialer {
    fn dial(&self, _address: &str, timeout: Option<Duration>) -> io::Result<Box<dyn Connection>> {
        self.timeouts.lock().unwrap().push(timeout);
        if self.refuse {
            return Err(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"));
        }
        Ok(Box::new(self.connection.clone()))
    }
}
