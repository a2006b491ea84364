//! Blocking catalog client over an asynchronous transport.
//!
//! # Design
//! `CatalogClient` holds a resolver, a transport and a small tokio runtime
//! used only to drive the transport future to completion. Every public
//! operation funnels through `invoke`, which resolves the endpoint, encodes
//! the optional body, blocks on exactly one `Transport::send` and hands the
//! outcome to the translator. No state is carried between calls, so a single
//! client can be shared across threads.
//!
//! The operations block the calling thread and must not be called from
//! inside an async runtime.

use tokio::runtime::{Builder, Runtime};
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::endpoint::{EndpointResolver, Operation};
use crate::error::{BuildError, CatalogError};
use crate::translate::{translate, DecodeBody};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::MovieRecord;

pub struct CatalogClient<T = ReqwestTransport> {
    resolver: EndpointResolver,
    transport: T,
    runtime: Runtime,
}

impl CatalogClient<ReqwestTransport> {
    pub fn new(base_url: &str) -> Result<Self, BuildError> {
        Self::from_config(&ClientConfig::new(base_url))
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, BuildError> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> CatalogClient<T> {
    pub fn with_transport(config: &ClientConfig, transport: T) -> Result<Self, BuildError> {
        config.validate()?;
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("movie-client")
            .enable_all()
            .build()?;
        let resolver = EndpointResolver::new(&config.base_url);
        info!(base_url = resolver.base_url(), "catalog client ready");
        Ok(Self {
            resolver,
            transport,
            runtime,
        })
    }

    pub fn base_url(&self) -> &str {
        self.resolver.base_url()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn list_movies(&self) -> Result<Vec<MovieRecord>, CatalogError> {
        self.invoke(Operation::List, None)
    }

    pub fn get_movie(&self, id: u32) -> Result<MovieRecord, CatalogError> {
        self.invoke(Operation::GetById(id), None)
    }

    /// Movies whose name contains `name`. An empty name is sent as is.
    pub fn movies_by_name(&self, name: &str) -> Result<Vec<MovieRecord>, CatalogError> {
        self.invoke(Operation::GetByName(name), None)
    }

    pub fn movies_by_year(&self, year: i32) -> Result<Vec<MovieRecord>, CatalogError> {
        self.invoke(Operation::GetByYear(year), None)
    }

    /// Returns the stored record, including its assigned `movie_id`.
    /// Missing fields are not checked locally; the service rejects them.
    pub fn add_movie(&self, movie: &MovieRecord) -> Result<MovieRecord, CatalogError> {
        self.invoke(Operation::Create, Some(movie))
    }

    pub fn update_movie(&self, id: u32, movie: &MovieRecord) -> Result<MovieRecord, CatalogError> {
        self.invoke(Operation::Update(id), Some(movie))
    }

    /// Returns the service's plain-text confirmation.
    pub fn delete_movie(&self, id: u32) -> Result<String, CatalogError> {
        self.invoke(Operation::Delete(id), None)
    }

    fn invoke<R: DecodeBody>(
        &self,
        operation: Operation<'_>,
        body: Option<&MovieRecord>,
    ) -> Result<R, CatalogError> {
        let mut request = self.resolver.resolve(&operation);
        if let Some(movie) = body {
            let json = serde_json::to_string(movie).map_err(|e| {
                CatalogError::TransportFault(format!("failed to encode request body: {e}"))
            })?;
            request = request.with_json_body(json);
        }

        debug!(
            operation = operation.name(),
            method = %request.method,
            url = %request.url,
            "sending request"
        );
        let outcome = self.runtime.block_on(self.transport.send(request));
        translate(operation.name(), outcome)
    }
}
