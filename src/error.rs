use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("client is already connected, call disconnect first if you want to reconnect")]
    AlreadyConnected,

    #[error("failed to connect to {address}: {source}")]
    Dial {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("client is not connected, call connect first")]
    NotConnected,

    #[error("metric at index {index} has no name")]
    EmptyName { index: usize },

    /// The field would corrupt the line protocol (it contains whitespace).
    #[error("metric at index {index} has whitespace in its {field}")]
    Malformed { index: usize, field: &'static str },

    #[error("failed to write metrics: {0}")]
    Write(#[source] io::Error),

    #[error("failed to close connection: {0}")]
    Close(#[source] io::Error),
}

#[derive(Error, Debug)]
pub enum LineParseError {
    #[error("expected 3 space separated fields, found {0}")]
    FieldCount(usize),

    #[error("metric name is empty")]
    EmptyName,

    #[error("invalid timestamp {0:?}")]
    Timestamp(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{0}")]
    Timeout(String),
}
