//! Error conversion from internal error types.
//!
//! This module provides conversions from [`taskdeck_core::Error`] to the
//! executor's [`Error`] type.

use crate::Error;

impl From<taskdeck_core::Error> for Error {
    fn from(err: taskdeck_core::Error) -> Self {
        match err {
            taskdeck_core::Error::InvalidInput(reason) => Error::InvalidInput { reason },
            taskdeck_core::Error::Config(reason) => Error::Config { reason },
            taskdeck_core::Error::Io(e) => Error::Io {
                reason: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_invalid_input_maps_to_bad_input() {
        let err: Error = taskdeck_core::Error::invalid_input("unknown kind").into();
        assert_eq!(
            err,
            Error::InvalidInput {
                reason: "unknown kind".into()
            }
        );
        assert_eq!(err.code(), "BAD_INPUT");
    }

    #[test]
    fn test_io_keeps_message() {
        let core = taskdeck_core::Error::Io(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let err: Error = core.into();
        assert!(matches!(err, Error::Io { ref reason } if reason.contains("missing")));
    }

    #[test]
    fn test_config_maps_to_config() {
        let err: Error = taskdeck_core::Error::config("default_limit must be at least 1").into();
        assert!(matches!(err, Error::Config { .. }));
    }
}
