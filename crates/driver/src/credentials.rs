//! Credential strategy resolution.
//!
//! Exactly one of three mutually exclusive strategies is picked per connect
//! attempt, in fixed precedence order:
//!
//! 1. Environment-delegated — `AWS_SDK_LOAD_CONFIG` is set truthy; the SDK's
//!    full shared config (files, env, instance metadata) is used, optionally
//!    scoped to a configured profile.
//! 2. Static credentials — an access key id is configured explicitly.
//! 3. Region-only — default config loading scoped to the configured region.
//!
//! Each strategy maps to a deterministic cache key of the shape
//! `region#profile#accessid` (separators always present, unused segments
//! blank), so two configs that authenticate identically share one cached
//! client.

use aws_types::SdkConfig;
use tracing::debug;

use crate::config::Config;
use crate::error::DriverError;
use crate::loader::ConfigLoader;

/// Environment flag enabling the environment-delegated strategy.
pub const LOAD_CONFIG_ENV: &str = "AWS_SDK_LOAD_CONFIG";

/// One resolved authentication strategy plus the inputs needed to build a
/// client for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialStrategy {
    /// Full SDK shared-config loading, optionally scoped to a profile.
    EnvDelegated { profile: String },
    /// Explicit access id / secret key / optional session token, scoped to
    /// a region.
    Static {
        region: String,
        access_id: String,
        secret_key: String,
        session_token: String,
    },
    /// Default config loading scoped only to a region.
    RegionOnly { region: String },
}

impl CredentialStrategy {
    /// Resolve the strategy for `config`, consulting the
    /// [`LOAD_CONFIG_ENV`] process environment flag.
    ///
    /// Resolution is pure computation: no shared state is touched.
    pub fn resolve(config: &Config) -> Self {
        let strategy = if env_flag_enabled() {
            Self::EnvDelegated {
                profile: config.profile().to_string(),
            }
        } else if !config.access_id().is_empty() {
            Self::Static {
                region: config.region().to_string(),
                access_id: config.access_id().to_string(),
                secret_key: config.secret_key().to_string(),
                session_token: config.session_token().to_string(),
            }
        } else {
            Self::RegionOnly {
                region: config.region().to_string(),
            }
        };
        debug!(cache_key = %strategy.cache_key(), "resolved credential strategy");
        strategy
    }

    /// Deterministic cache key: `region#profile#accessid` with blank
    /// segments for whatever the strategy does not use.
    pub fn cache_key(&self) -> String {
        match self {
            Self::EnvDelegated { profile } => format!("#{profile}#"),
            Self::Static {
                region, access_id, ..
            } => format!("{region}##{access_id}"),
            Self::RegionOnly { region } => format!("{region}##"),
        }
    }

    /// Load external AWS configuration for this strategy through `loader`.
    ///
    /// This is the slow, fallible step: it may hit credential files, env
    /// vars, or instance metadata, and must never run under a cache lock.
    pub async fn load(&self, loader: &dyn ConfigLoader) -> Result<SdkConfig, DriverError> {
        match self {
            Self::EnvDelegated { profile } if profile.is_empty() => loader.load_default().await,
            Self::EnvDelegated { profile } => loader.load_profile(profile).await,
            Self::Static {
                region,
                access_id,
                secret_key,
                session_token,
            } => {
                loader
                    .load_static(region, access_id, secret_key, session_token)
                    .await
            }
            Self::RegionOnly { region } => loader.load_region(region).await,
        }
    }
}

/// Parse [`LOAD_CONFIG_ENV`] with Go-`ParseBool` acceptance: only
/// `1`, `t`, `T`, `true`, `TRUE`, `True` enable the flag; anything else
/// (including unset) is false.
fn env_flag_enabled() -> bool {
    match std::env::var(LOAD_CONFIG_ENV) {
        Ok(v) => matches!(v.as_str(), "1" | "t" | "T" | "true" | "TRUE" | "True"),
        Err(_) => false,
    }
}
