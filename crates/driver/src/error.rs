//! Error taxonomy for the driver.

/// Errors that can occur while acquiring a session or talking to Athena.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// External AWS configuration could not be loaded or its credentials
    /// could not be resolved.
    #[error("failed to load AWS configuration: {0}")]
    ConfigLoad(String),

    /// A remote Athena call failed (stringified SDK error, propagated
    /// without retry or classification).
    #[error("AWS SDK error: {0}")]
    AwsSdk(String),

    /// A remote operation was attempted without an Athena client handle.
    /// This is a caller-side usage bug, not a transient failure.
    #[error("no Athena client handle available")]
    NoClientHandle,

    /// A request could not be assembled from the local inputs.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
