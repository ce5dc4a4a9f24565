use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Used when no explicit connect timeout has been configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Bound on connection establishment. Sends are never bounded by it.
///
/// In configuration files this is an integer number of seconds: `0` selects
/// the default and `-1` disables the timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ConnectTimeout {
    #[default]
    Default,
    Bounded(Duration),
    Disabled,
}

impl ConnectTimeout {
    /// The bound handed to the dialer; `None` means wait indefinitely.
    pub fn resolve(self) -> Option<Duration> {
        match self {
            ConnectTimeout::Default => Some(DEFAULT_TIMEOUT),
            ConnectTimeout::Bounded(d) if d.is_zero() => Some(DEFAULT_TIMEOUT),
            ConnectTimeout::Bounded(d) => Some(d),
            ConnectTimeout::Disabled => None,
        }
    }
}

impl TryFrom<i64> for ConnectTimeout {
    type Error = String;

    fn try_from(secs: i64) -> Result<Self, Self::Error> {
        match secs {
            0 => Ok(ConnectTimeout::Default),
            -1 => Ok(ConnectTimeout::Disabled),
            n if n > 0 => Ok(ConnectTimeout::Bounded(Duration::from_secs(n.unsigned_abs()))),
            n => Err(format!(
                "invalid timeout {}: use seconds, 0 for the default or -1 to disable",
                n
            )),
        }
    }
}

impl From<ConnectTimeout> for i64 {
    fn from(timeout: ConnectTimeout) -> Self {
        match timeout {
            ConnectTimeout::Default => 0,
            ConnectTimeout::Disabled => -1,
            // Round up so a sub-second bound never turns into 0, which means the default.
            ConnectTimeout::Bounded(d) => {
                let secs = d.as_secs() + u64::from(d.subsec_nanos() > 0);
                i64::try_from(secs).unwrap_or(i64::MAX)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(ConnectTimeout::Default.resolve(), Some(DEFAULT_TIMEOUT));
        assert_eq!(ConnectTimeout::Bounded(Duration::ZERO).resolve(), Some(DEFAULT_TIMEOUT));
        assert_eq!(
            ConnectTimeout::Bounded(Duration::from_secs(2)).resolve(),
            Some(Duration::from_secs(2))
        );
        assert_eq!(ConnectTimeout::Disabled.resolve(), None);
    }

    #[test]
    fn test_from_seconds() {
        assert_eq!(ConnectTimeout::try_from(0i64), Ok(ConnectTimeout::Default));
        assert_eq!(ConnectTimeout::try_from(-1i64), Ok(ConnectTimeout::Disabled));
        assert_eq!(
            ConnectTimeout::try_from(30i64),
            Ok(ConnectTimeout::Bounded(Duration::from_secs(30)))
        );
        assert!(ConnectTimeout::try_from(-5i64).is_err());
    }

    #[test]
    fn test_to_seconds_rounds_up() {
        assert_eq!(i64::from(ConnectTimeout::Bounded(Duration::from_millis(500))), 1);
        assert_eq!(i64::from(ConnectTimeout::Bounded(Duration::from_millis(2_100))), 3);
        assert_eq!(i64::from(ConnectTimeout::Bounded(Duration::from_secs(4))), 4);
        assert_eq!(i64::from(ConnectTimeout::Default), 0);
        assert_eq!(i64::from(ConnectTimeout::Disabled), -1);
    }
}
