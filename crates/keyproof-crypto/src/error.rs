use core::fmt::{Debug, Display};
use std::error::Error as StdError;

use serde_json::error::Category;

/// Kind of error that can occur during key and payload operations.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// The input was not well-formed, e.g. text that is not valid JSON.
    #[error("Malformed input")]
    MalformedInput,
    /// The key material was rejected for the requested algorithm.
    #[error("Invalid key material")]
    KeyMaterial,
    /// The key was used for an operation its usages do not permit.
    #[error("Key usage violation")]
    UsageViolation,
    /// The cryptographic provider failed for any other reason.
    #[error("Provider fault")]
    ProviderFault,
}

/// Represents all possible errors that can occur during key and payload operations.
pub struct Error {
    kind: ErrorKind,
    source: eyre::Report,
}

/// Result type used by every fallible operation of this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

impl Error {
    /// Returns the kind of the error that occurred.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the lowest level error that caused this error.
    pub fn source(&self) -> &(dyn StdError + 'static) {
        self.source.root_cause()
    }

    /// Returns the context of the error.
    pub fn context(&self) -> &dyn StdError {
        self.source.as_ref()
    }

    pub(crate) fn new<E>(kind: ErrorKind, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Error {
            kind,
            source: eyre::Report::new(source),
        }
    }

    pub(crate) fn msg<M>(kind: ErrorKind, msg: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Error {
            kind,
            source: eyre::Report::msg(msg),
        }
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Error")
            .field("kind", &self.kind)
            .field("context", &self.context())
            .field("source", &self.source())
            .finish()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.context())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        let source: &(dyn StdError + 'static) = self.source.as_ref();
        Some(source)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Io => Error::new(ErrorKind::ProviderFault, err),
            _ => Error::new(ErrorKind::MalformedInput, err),
        }
    }
}

impl From<rsa::Error> for Error {
    fn from(err: rsa::Error) -> Self {
        Error::new(ErrorKind::ProviderFault, err)
    }
}
