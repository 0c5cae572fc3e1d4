//! Connector: turns a [`Config`] into a ready [`Connection`].
//!
//! The connect path is resolve → cache lookup → (on miss) load external
//! config and construct a client → cache insert → wrap in a connection.
//! External configuration loading and client construction never run under
//! a cache lock; see [`crate::cache`] for the accepted double-construction
//! race that buys.

use std::sync::Arc;
use std::time::Instant;

use aws_sdk_athena::types::WorkGroup;
use aws_sdk_athena::Client;
use tracing::{error, info, info_span, Instrument, Span};

use crate::cache::ClientCache;
use crate::config::Config;
use crate::credentials::CredentialStrategy;
use crate::error::DriverError;
use crate::loader::{AwsConfigLoader, ConfigLoader};
use crate::observability::{MetricsSink, Tracer, METRIC_CONNECT, METRIC_SESSION_FAILURE};
use crate::workgroup;

/// Per-call overrides for the connect path.
///
/// Both fields are part of the public contract: `metrics` replaces the
/// connector's metrics scope for this attempt only, and `span` is entered
/// around the whole attempt in place of the default connect span.
#[derive(Default)]
pub struct ConnectOptions {
    pub metrics: Option<Arc<dyn MetricsSink>>,
    pub span: Option<Span>,
}

/// Public entry point of the driver's session layer.
pub struct Connector {
    config: Config,
    cache: Arc<ClientCache>,
    loader: Arc<dyn ConfigLoader>,
    tracer: Tracer,
}

impl Connector {
    /// Connector over the process-wide client cache and the real AWS
    /// configuration loader.
    pub fn new(config: Config) -> Self {
        Self::with_cache(config, ClientCache::process_wide())
    }

    /// Connector over a caller-supplied cache. Embedders and tests that
    /// need isolated client sharing use this instead of [`Connector::new`].
    pub fn with_cache(config: Config, cache: Arc<ClientCache>) -> Self {
        Self {
            config,
            cache,
            loader: Arc::new(AwsConfigLoader),
            tracer: Tracer::default(),
        }
    }

    /// A connector pre-wired with a disabled config, an empty private
    /// cache, and a discarding tracer. Useful wherever a connector value
    /// is required but no remote connectivity is wanted.
    pub fn noop() -> Self {
        Self {
            config: Config::noop(),
            cache: Arc::new(ClientCache::new()),
            loader: Arc::new(AwsConfigLoader),
            tracer: Tracer::noop(),
        }
    }

    /// Replace the configuration-loading collaborator.
    pub fn with_loader(mut self, loader: Arc<dyn ConfigLoader>) -> Self {
        self.loader = loader;
        self
    }

    /// Install a default metrics scope used when a connect call carries no
    /// override.
    pub fn with_metrics(mut self, scope: Arc<dyn MetricsSink>) -> Self {
        self.tracer = self.tracer.with_scope(scope);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Connect with default options.
    ///
    /// The loading/construction steps are not bounded by any deadline here;
    /// callers that need one wrap this future in `tokio::time::timeout`,
    /// which cancels it at the next await point.
    pub async fn connect(&self) -> Result<Connection, DriverError> {
        self.connect_with(ConnectOptions::default()).await
    }

    /// Connect with per-call metrics/span overrides.
    pub async fn connect_with(&self, options: ConnectOptions) -> Result<Connection, DriverError> {
        let span = options
            .span
            .unwrap_or_else(|| info_span!("athena_connect"));
        let tracer = match options.metrics {
            Some(scope) => self.tracer.with_scope(scope),
            None => self.tracer.clone(),
        };
        self.connect_inner(tracer).instrument(span).await
    }

    async fn connect_inner(&self, tracer: Tracer) -> Result<Connection, DriverError> {
        let start = Instant::now();

        let strategy = CredentialStrategy::resolve(&self.config);
        let cache_key = strategy.cache_key();

        let client = match self.cache.lookup(&cache_key) {
            Some(client) => client,
            None => {
                // Slow path: resolve external configuration and build a
                // fresh client, all outside the cache locks.
                let sdk_config = match strategy.load(self.loader.as_ref()).await {
                    Ok(cfg) => cfg,
                    Err(e) => {
                        error!(cache_key = %cache_key, error = %e, "session creation failed");
                        tracer.incr_counter(METRIC_SESSION_FAILURE);
                        return Err(e);
                    }
                };
                let client = Client::new(&sdk_config);
                self.cache.insert(&cache_key, client.clone());
                info!(cache_key = %cache_key, "constructed new Athena client");
                client
            }
        };

        tracer.record_timer(METRIC_CONNECT, start.elapsed());
        Ok(Connection { client, tracer })
    }
}

impl std::fmt::Debug for Connector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connector")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// One logical database connection: a shared Athena client handle plus the
/// tracer of the connector that produced it.
#[derive(Debug, Clone)]
pub struct Connection {
    client: Client,
    tracer: Tracer,
}

impl Connection {
    /// The underlying service client. Treat it as read-only; the same
    /// handle may be shared by any number of concurrent connections.
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// Fetch a workgroup descriptor from the remote service using this
    /// connection's client handle.
    pub async fn workgroup(&self, name: &str) -> Result<WorkGroup, DriverError> {
        workgroup::get_workgroup(Some(&self.client), name).await
    }
}
