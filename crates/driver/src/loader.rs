//! External AWS configuration loading.
//!
//! [`ConfigLoader`] is the seam between the connector and the AWS SDK's
//! config resolution machinery. Production code uses [`AwsConfigLoader`];
//! tests substitute doubles to observe (or fail) the loading step without
//! touching credential files or the network.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::provider::ProvideCredentials;
use aws_credential_types::Credentials;
use aws_types::region::Region;
use aws_types::SdkConfig;
use tracing::debug;

use crate::error::DriverError;

/// Provider name attached to static credentials built by this driver.
const STATIC_PROVIDER_NAME: &str = "athena-driver-static";

/// Loads external AWS configuration in the three shapes the credential
/// strategies need, plus explicit static credentials.
///
/// Every call may block on file or network I/O and must therefore run
/// outside any cache lock.
#[async_trait]
pub trait ConfigLoader: Send + Sync {
    /// Load full shared config with no overrides (env vars, `~/.aws/*`
    /// files, instance metadata).
    async fn load_default(&self) -> Result<SdkConfig, DriverError>;

    /// Load shared config scoped to a named profile.
    async fn load_profile(&self, profile: &str) -> Result<SdkConfig, DriverError>;

    /// Load default config scoped only to a region.
    async fn load_region(&self, region: &str) -> Result<SdkConfig, DriverError>;

    /// Build config from explicit static credentials, scoped to a region.
    async fn load_static(
        &self,
        region: &str,
        access_id: &str,
        secret_key: &str,
        session_token: &str,
    ) -> Result<SdkConfig, DriverError>;
}

/// Production loader backed by `aws-config`.
///
/// The SDK's loader itself cannot fail; the fallible part of session
/// creation is credential resolution, which this loader performs eagerly so
/// a connect attempt with an unresolvable credential chain fails at connect
/// time rather than on the first query.
#[derive(Debug, Default, Clone, Copy)]
pub struct AwsConfigLoader;

impl AwsConfigLoader {
    /// Probe the loaded config's credential chain once, mapping resolution
    /// failure to [`DriverError::ConfigLoad`].
    async fn validate_credentials(cfg: &SdkConfig) -> Result<(), DriverError> {
        let provider = cfg
            .credentials_provider()
            .ok_or_else(|| DriverError::ConfigLoad("no credentials provider in chain".into()))?;
        provider
            .provide_credentials()
            .await
            .map_err(|e| DriverError::ConfigLoad(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl ConfigLoader for AwsConfigLoader {
    async fn load_default(&self) -> Result<SdkConfig, DriverError> {
        debug!("loading default AWS shared config");
        let cfg = aws_config::defaults(BehaviorVersion::latest()).load().await;
        Self::validate_credentials(&cfg).await?;
        Ok(cfg)
    }

    async fn load_profile(&self, profile: &str) -> Result<SdkConfig, DriverError> {
        debug!(profile = %profile, "loading AWS shared config for profile");
        let cfg = aws_config::defaults(BehaviorVersion::latest())
            .profile_name(profile)
            .load()
            .await;
        Self::validate_credentials(&cfg).await?;
        Ok(cfg)
    }

    async fn load_region(&self, region: &str) -> Result<SdkConfig, DriverError> {
        debug!(region = %region, "loading AWS config for region");
        let cfg = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        Self::validate_credentials(&cfg).await?;
        Ok(cfg)
    }

    async fn load_static(
        &self,
        region: &str,
        access_id: &str,
        secret_key: &str,
        session_token: &str,
    ) -> Result<SdkConfig, DriverError> {
        debug!(region = %region, "building AWS config from static credentials");
        let token = if session_token.is_empty() {
            None
        } else {
            Some(session_token.to_string())
        };
        let creds = Credentials::new(access_id, secret_key, token, None, STATIC_PROVIDER_NAME);
        let cfg = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .credentials_provider(creds)
            .load()
            .await;
        Ok(cfg)
    }
}
