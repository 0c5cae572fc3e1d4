//! Session and client acquisition for AWS Athena.
//!
//! The driver resolves which AWS credentials and region to use, builds (or
//! reuses) an `aws_sdk_athena::Client`, and shares that client safely
//! across concurrent connection attempts. Workgroup management rides on an
//! acquired client.

pub mod cache;
pub mod config;
pub mod connector;
pub mod credentials;
pub mod error;
pub mod loader;
pub mod observability;
pub mod workgroup;

#[cfg(test)]
pub(crate) mod testutil;

pub use cache::ClientCache;
pub use config::Config;
pub use connector::{ConnectOptions, Connection, Connector};
pub use credentials::{CredentialStrategy, LOAD_CONFIG_ENV};
pub use error::DriverError;
pub use loader::{AwsConfigLoader, ConfigLoader};
pub use observability::{MetricsSink, NoopMetrics, Tracer, METRIC_CONNECT, METRIC_SESSION_FAILURE};
pub use workgroup::{default_workgroup_config, get_workgroup, WgTags, Workgroup};
