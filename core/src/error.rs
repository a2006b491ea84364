//! Error types for the movie catalog client.
//!
//! # Design
//! Every failed operation surfaces exactly one `CatalogError`, classified by
//! who is at fault. Client and server faults keep the numeric status so
//! callers can tell "not found" apart from "bad input" without parsing text.
//! Problems building the client itself live in `BuildError` and never reach
//! an operation's result.

use std::fmt;

use thiserror::Error;

/// Which side of the exchange a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    Client,
    Server,
    Transport,
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaultKind::Client => write!(f, "client fault"),
            FaultKind::Server => write!(f, "server fault"),
            FaultKind::Transport => write!(f, "transport fault"),
        }
    }
}

/// Normalized error returned by every `CatalogClient` operation.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The service answered with a 4xx status.
    #[error("{} (HTTP {status}): {detail}", FaultKind::Client)]
    ClientFault { status: u16, detail: String },

    /// The service answered with a 5xx or any other non-2xx status.
    #[error("{} (HTTP {status}): {detail}", FaultKind::Server)]
    ServerFault { status: u16, detail: String },

    /// No usable response: connection failure, timeout, unreadable or
    /// undecodable body, or a request body that could not be encoded.
    #[error("{}: {}", FaultKind::Transport, .0)]
    TransportFault(String),
}

impl CatalogError {
    pub fn kind(&self) -> FaultKind {
        match self {
            CatalogError::ClientFault { .. } => FaultKind::Client,
            CatalogError::ServerFault { .. } => FaultKind::Server,
            CatalogError::TransportFault(_) => FaultKind::Transport,
        }
    }

    /// HTTP status for client and server faults.
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::ClientFault { status, .. } | CatalogError::ServerFault { status, .. } => {
                Some(*status)
            }
            CatalogError::TransportFault(_) => None,
        }
    }

    /// Detail text, `None` when nothing was captured.
    pub fn detail(&self) -> Option<&str> {
        let detail = match self {
            CatalogError::ClientFault { detail, .. } | CatalogError::ServerFault { detail, .. } => {
                detail
            }
            CatalogError::TransportFault(detail) => detail,
        };
        (!detail.is_empty()).then_some(detail.as_str())
    }
}

/// Errors raised while constructing a `CatalogClient`.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid base url {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid value for {name}: {value:?}")]
    InvalidSetting { name: &'static str, value: String },

    #[error("failed to start client runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("failed to build HTTP transport: {0}")]
    Transport(#[from] reqwest::Error),
}
