//! Athena workgroup management.
//!
//! A [`Workgroup`] is constructed locally and pushed to the service with an
//! explicit create call; the driver keeps no local workgroup state. Remote
//! errors come back unretried and unclassified.

use aws_sdk_athena::operation::create_work_group::CreateWorkGroupInput;
use aws_sdk_athena::types::{Tag, WorkGroup, WorkGroupConfiguration};
use aws_sdk_athena::Client;
use tracing::{debug, info};

use crate::error::DriverError;

/// Ordered set of tags attached to a workgroup.
#[derive(Debug, Clone, Default)]
pub struct WgTags {
    tags: Vec<Tag>,
}

impl WgTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_tag(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.tags.push(Tag::builder().key(key).value(value).build());
    }

    pub fn get(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// The standard remote configuration for driver-created workgroups:
/// workgroup settings enforced, CloudWatch metrics published, requester
/// pays off.
pub fn default_workgroup_config() -> WorkGroupConfiguration {
    WorkGroupConfiguration::builder()
        .enforce_work_group_configuration(true)
        .publish_cloud_watch_metrics_enabled(true)
        .requester_pays_enabled(false)
        .build()
}

/// A named execution context on the remote service.
#[derive(Debug, Clone)]
pub struct Workgroup {
    pub name: String,
    pub config: WorkGroupConfiguration,
    pub tags: WgTags,
}

impl Workgroup {
    /// Create a workgroup, filling in [`default_workgroup_config`] and an
    /// empty tag set wherever the caller supplies nothing.
    pub fn new_default(
        name: impl Into<String>,
        config: Option<WorkGroupConfiguration>,
        tags: Option<WgTags>,
    ) -> Self {
        Self {
            name: name.into(),
            config: config.unwrap_or_else(default_workgroup_config),
            tags: tags.unwrap_or_default(),
        }
    }

    /// Create a workgroup from caller-supplied configuration and tags,
    /// verbatim.
    pub fn new(name: impl Into<String>, config: WorkGroupConfiguration, tags: WgTags) -> Self {
        Self {
            name: name.into(),
            config,
            tags,
        }
    }

    /// The create request this workgroup produces.
    ///
    /// When the tag set is empty the request carries no tags field at all;
    /// the service validates an explicitly empty tag list differently from
    /// an absent one.
    pub fn create_input(&self) -> Result<CreateWorkGroupInput, DriverError> {
        CreateWorkGroupInput::builder()
            .name(&self.name)
            .set_configuration(Some(self.config.clone()))
            .set_tags(self.tag_payload())
            .build()
            .map_err(|e| DriverError::InvalidRequest(e.to_string()))
    }

    /// Push this workgroup definition to the remote service.
    pub async fn create_remotely(&self, client: &Client) -> Result<(), DriverError> {
        let input = self.create_input()?;
        info!(workgroup = %self.name, tags = self.tags.len(), "creating workgroup remotely");
        client
            .create_work_group()
            .set_name(input.name)
            .set_configuration(input.configuration)
            .set_tags(input.tags)
            .send()
            .await
            .map_err(|e| DriverError::AwsSdk(e.to_string()))?;
        Ok(())
    }

    /// Fetch this workgroup's remote descriptor.
    pub async fn fetch_remote(&self, client: Option<&Client>) -> Result<WorkGroup, DriverError> {
        get_workgroup(client, &self.name).await
    }

    fn tag_payload(&self) -> Option<Vec<Tag>> {
        if self.tags.is_empty() {
            None
        } else {
            Some(self.tags.get().to_vec())
        }
    }
}

/// Fetch a workgroup descriptor from the remote service.
///
/// Fails with [`DriverError::NoClientHandle`] before any remote call when
/// no client handle is available.
pub async fn get_workgroup(client: Option<&Client>, name: &str) -> Result<WorkGroup, DriverError> {
    let client = client.ok_or(DriverError::NoClientHandle)?;
    debug!(workgroup = %name, "fetching workgroup");
    let output = client
        .get_work_group()
        .work_group(name)
        .send()
        .await
        .map_err(|e| DriverError::AwsSdk(e.to_string()))?;
    output
        .work_group
        .ok_or_else(|| DriverError::AwsSdk("no workgroup in response".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constructor_fills_config_and_tags() {
        let wg = Workgroup::new_default("primary", None, None);
        assert_eq!(wg.name, "primary");
        assert!(wg.tags.is_empty());
        assert_eq!(wg.config.enforce_work_group_configuration(), Some(true));
        assert_eq!(wg.config.publish_cloud_watch_metrics_enabled(), Some(true));
        assert_eq!(wg.config.requester_pays_enabled(), Some(false));
    }

    #[test]
    fn explicit_constructor_keeps_inputs_verbatim() {
        let config = WorkGroupConfiguration::builder()
            .requester_pays_enabled(true)
            .build();
        let mut tags = WgTags::new();
        tags.add_tag("team", "data");

        let wg = Workgroup::new("reporting", config, tags);
        assert_eq!(wg.name, "reporting");
        assert_eq!(wg.config.requester_pays_enabled(), Some(true));
        assert_eq!(wg.config.enforce_work_group_configuration(), None);
        assert_eq!(wg.tags.len(), 1);
    }

    #[test]
    fn empty_tag_set_produces_request_without_tags_field() {
        let wg = Workgroup::new_default("untagged", None, Some(WgTags::new()));
        let input = wg.create_input().expect("build input");

        assert_eq!(input.name.as_deref(), Some("untagged"));
        assert!(input.configuration.is_some());
        // Absent field, not an empty list.
        assert!(input.tags.is_none());
    }

    #[test]
    fn populated_tag_set_is_sent_verbatim() {
        let mut tags = WgTags::new();
        tags.add_tag("team", "data");
        tags.add_tag("env", "prod");

        let wg = Workgroup::new_default("tagged", None, Some(tags));
        let input = wg.create_input().expect("build input");

        let sent = input.tags.expect("tags field present");
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].key(), Some("team"));
        assert_eq!(sent[0].value(), Some("data"));
        assert_eq!(sent[1].key(), Some("env"));
        assert_eq!(sent[1].value(), Some("prod"));
    }

    #[tokio::test]
    async fn get_workgroup_without_client_fails_fast() {
        let err = get_workgroup(None, "primary")
            .await
            .expect_err("must fail without a client handle");
        assert!(matches!(err, DriverError::NoClientHandle));
    }

    #[tokio::test]
    async fn fetch_remote_without_client_fails_fast() {
        let wg = Workgroup::new_default("primary", None, None);
        let err = wg
            .fetch_remote(None)
            .await
            .expect_err("must fail without a client handle");
        assert!(matches!(err, DriverError::NoClientHandle));
    }
}
