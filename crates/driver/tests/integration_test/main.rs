//! Integration tests for the athena-driver crate.
//!
//! Everything here runs offline: the AWS configuration loader is replaced
//! with in-process doubles, and SDK clients are built from hand-assembled
//! configs that never dial out.

use tracing_subscriber::EnvFilter;

mod connect;
mod workgroup;

/// Install a test subscriber once so failing runs show driver logs
/// (`RUST_LOG=athena_driver=debug`).
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
