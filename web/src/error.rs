use std::error::Error as StdError;
use std::fmt;
use std::io;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors reported to HTTP clients.
#[derive(Debug, PartialEq)]
pub enum Error {
    NotFound,
}

impl StdError for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotFound => write!(f, "resource does not exist"),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
        }
    }
}

/// Errors that stop the server from starting or keep it from serving.
#[derive(Debug)]
pub enum ServerError {
    Bind { address: String, source: io::Error },
    Serve(io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ServerError::Bind { address, source } => {
                write!(f, "Failed to bind to {address}: {source}")
            }
            ServerError::Serve(source) => write!(f, "Server error: {source}"),
        }
    }
}

impl StdError for ServerError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ServerError::Bind { source, .. } => Some(source),
            ServerError::Serve(source) => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = Error::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_bind_error_names_the_address() {
        let err = ServerError::Bind {
            address: "127.0.0.1:8091".to_string(),
            source: io::Error::new(io::ErrorKind::AddrInUse, "address in use"),
        };

        assert!(err.to_string().contains("127.0.0.1:8091"));
        assert!(err.source().is_some());
    }
}
