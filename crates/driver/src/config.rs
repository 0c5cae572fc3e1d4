//! Driver configuration.
//!
//! [`Config`] carries everything the connector needs to decide how to
//! authenticate: region, optional AWS profile, optional static credentials.
//! Absent string fields are empty strings rather than `Option`s; the
//! credential precedence checks in [`crate::credentials`] are built on that
//! convention.

use std::env;

use serde::{Deserialize, Serialize};

/// Default AWS region when none is configured anywhere.
const DEFAULT_REGION: &str = "us-east-1";

/// Default Athena workgroup.
const DEFAULT_WORKGROUP: &str = "primary";

// ── Env helpers ──────────────────────────────────────────────────

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    env_opt(key).unwrap_or_else(|| default.to_string())
}

// ── Config ───────────────────────────────────────────────────────

/// Connection configuration for the Athena driver.
///
/// Immutable per connection attempt: build it, hand it to a
/// [`crate::connector::Connector`], and do not mutate it while connects are
/// in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// AWS region queries run in.
    region: String,
    /// AWS shared-config profile name; empty means none configured.
    profile: String,
    /// Static credential: access key id; empty means none configured.
    access_id: String,
    /// Static credential: secret access key.
    secret_key: String,
    /// Static credential: session token (optional even when static
    /// credentials are in use).
    session_token: String,
    /// Athena database queries run against.
    database: String,
    /// Athena workgroup name.
    workgroup: String,
    /// S3 location Athena writes query results to.
    output_location: String,
}

impl Config {
    /// Create a config with the given region and S3 output location,
    /// leaving all credential fields unset (the region-only strategy).
    pub fn new(region: impl Into<String>, output_location: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            profile: String::new(),
            access_id: String::new(),
            secret_key: String::new(),
            session_token: String::new(),
            database: "default".to_string(),
            workgroup: DEFAULT_WORKGROUP.to_string(),
            output_location: output_location.into(),
        }
    }

    /// A disabled config for no-op connectors: every field empty, nothing
    /// to authenticate against.
    pub fn noop() -> Self {
        Self {
            region: String::new(),
            profile: String::new(),
            access_id: String::new(),
            secret_key: String::new(),
            session_token: String::new(),
            database: String::new(),
            workgroup: String::new(),
            output_location: String::new(),
        }
    }

    /// Build a config from environment variables.
    ///
    /// `ATHENA_REGION` falls back to `AWS_REGION` before the default.
    /// Profile and static credentials come from the standard
    /// `AWS_PROFILE` / `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY` /
    /// `AWS_SESSION_TOKEN` variables.
    pub fn from_env() -> Self {
        let region = env_opt("ATHENA_REGION")
            .or_else(|| env_opt("AWS_REGION"))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        Self {
            region,
            profile: env_or("AWS_PROFILE", ""),
            access_id: env_or("AWS_ACCESS_KEY_ID", ""),
            secret_key: env_or("AWS_SECRET_ACCESS_KEY", ""),
            session_token: env_or("AWS_SESSION_TOKEN", ""),
            database: env_or("ATHENA_DATABASE", "default"),
            workgroup: env_or("ATHENA_WORKGROUP", DEFAULT_WORKGROUP),
            output_location: env_or("ATHENA_OUTPUT_LOCATION", ""),
        }
    }

    /// Select an AWS shared-config profile for the environment-delegated
    /// credential strategy.
    pub fn set_aws_profile(&mut self, profile: impl Into<String>) {
        self.profile = profile.into();
    }

    /// Install static credentials. The session token may be empty.
    pub fn set_static_credentials(
        &mut self,
        access_id: impl Into<String>,
        secret_key: impl Into<String>,
        session_token: impl Into<String>,
    ) {
        self.access_id = access_id.into();
        self.secret_key = secret_key.into();
        self.session_token = session_token.into();
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn access_id(&self) -> &str {
        &self.access_id
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn session_token(&self) -> &str {
        &self.session_token
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn workgroup(&self) -> &str {
        &self.workgroup
    }

    pub fn output_location(&self) -> &str {
        &self.output_location
    }
}

// ── Tests ────────────────────────────────────────────────────────
