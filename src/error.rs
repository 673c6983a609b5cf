//! Errors raised by the benchmark harness. The data structures themselves never fail.

use std::error;
use std::fmt;
use std::io;
use std::result;

/// Convenience `Error` enum for the harness and the `splay-memo` binary.
#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    SerdeError(bincode::Error),
    LoggerError(log::SetLoggerError),
    PlotError(String),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl From<bincode::Error> for Error {
    fn from(err: bincode::Error) -> Error {
        Error::SerdeError(err)
    }
}

impl From<log::SetLoggerError> for Error {
    fn from(err: log::SetLoggerError) -> Error {
        Error::LoggerError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IOError(error) => Some(error),
            Error::SerdeError(error) => Some(error),
            Error::LoggerError(error) => Some(error),
            Error::PlotError(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IOError(error) => write!(f, "{}", error),
            Error::SerdeError(error) => write!(f, "{}", error),
            Error::LoggerError(error) => write!(f, "{}", error),
            Error::PlotError(message) => write!(f, "could not draw plot: {}", message),
        }
    }
}

/// Convenience `Result` type for the harness.
pub type Result<T> = result::Result<T, Error>;
