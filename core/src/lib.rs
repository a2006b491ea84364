//! Blocking client for the movie catalog service.
//!
//! # Overview
//! Exposes the service's seven endpoints as typed, synchronous operations on
//! `CatalogClient`: list, get by id, search by name, search by year, create,
//! update and delete.
//!
//! # Design
//! - `endpoint` turns an `Operation` into a method and URL; it never fails.
//! - `transport` is the async I/O seam; `ReqwestTransport` is the default.
//! - `translate` is the single place where statuses and transport failures
//!   become a decoded value or a `CatalogError`.
//! - `CatalogClient` glues the three together and blocks on the transport.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod translate;
pub mod transport;
pub mod types;

pub use client::CatalogClient;
pub use config::ClientConfig;
pub use endpoint::{EndpointResolver, Operation};
pub use error::{BuildError, CatalogError, FaultKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use translate::{translate, DecodeBody};
pub use transport::{ReqwestTransport, Transport, TransportError};
pub use types::MovieRecord;
