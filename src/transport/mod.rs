use std::io::{self, Write};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::time::Duration;

#[cfg(test)]
pub(crate) mod mock;

/// An established byte stream the client writes protocol lines to.
pub trait Connection: Send {
    /// Writes the whole buffer as one logical write.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;

    fn close(&mut self) -> io::Result<()>;
}

/// Opens connections for a client. `timeout` of `None` means no bound.
pub trait Dialer {
    fn dial(&self, address: &str, timeout: Option<Duration>) -> io::Result<Box<dyn Connection>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TcpDialer;

impl Dialer for TcpDialer {
    fn dial(&self, address: &str, timeout: Option<Duration>) -> io::Result<Box<dyn Connection>> {
        let stream = match timeout {
            None => TcpStream::connect(address)?,
            Some(timeout) => connect_with_timeout(address, timeout)?,
        };
        Ok(Box::new(stream))
    }
}

// connect_timeout takes a single SocketAddr, so every resolved address is tried in turn.
fn connect_with_timeout(address: &str, timeout: Duration) -> io::Result<TcpStream> {
    let mut last_err = None;
    for addr in address.to_socket_addrs()? {
        match TcpStream::connect_timeout(&addr, timeout) {
            Ok(stream) => return Ok(stream),
            Err(e) => last_err = Some(e),
        }
    }

    Err(last_err.unwrap_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("could not resolve {}", address),
        )
    }))
}

impl Connection for TcpStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_all(buf)?;
        self.flush()?;
        Ok(buf.len())
    }

    fn close(&mut self) -> io::Result<()> {
        match self.shutdown(Shutdown::Both) {
            // The peer already went away; there is nothing left to close.
            Err(e) if e.kind() == io::ErrorKind::NotConnected => Ok(()),
            other => other,
        }
    }
}
