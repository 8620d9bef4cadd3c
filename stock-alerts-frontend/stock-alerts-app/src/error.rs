use std::{error, fmt::Display};
#[cfg(feature = "csr")]
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum AppError {
    #[error("JSON {0}")]
    Json(String),
    #[error("System error {0}")]
    SystemError(#[from] SystemError),
    #[error("{url} responded with HTTP {status}")]
    HttpStatus { url: String, status: u16 },
    #[error("{url} returned {found} where {expected} was expected")]
    UnexpectedShape {
        url: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("Email address is empty")]
    EmptyEmail,
}

/// Holds the transport errors that are not `Clone` behind an `Rc` so that an
/// [`AppError`] can still be stored in a signal.
#[derive(Clone, Debug)]
pub enum SystemError {
    Message(String),
    #[cfg(feature = "csr")]
    GlooError(Rc<gloo_net::Error>),
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value.to_string())
    }
}

#[cfg(feature = "csr")]
impl From<gloo_net::Error> for SystemError {
    fn from(value: gloo_net::Error) -> Self {
        Self::GlooError(Rc::new(value))
    }
}

#[cfg(feature = "csr")]
impl From<gloo_net::Error> for AppError {
    fn from(value: gloo_net::Error) -> Self {
        // gloo reports body decoding failures through the same error type
        if let gloo_net::Error::SerdeError(e) = value {
            return Self::Json(e.to_string());
        }
        Self::SystemError(value.into())
    }
}

impl Display for SystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemError::Message(message) => write!(f, "{}", message),
            #[cfg(feature = "csr")]
            SystemError::GlooError(g) => write!(f, "{}", g),
        }
    }
}

impl error::Error for SystemError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SystemError::Message(_) => None,
            #[cfg(feature = "csr")]
            SystemError::GlooError(gloo) => Some(gloo.as_ref()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
