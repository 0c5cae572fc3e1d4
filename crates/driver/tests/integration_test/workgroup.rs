//! Workgroup request-shaping tests through the public API.

use aws_sdk_athena::types::WorkGroupConfiguration;

use athena_driver::{default_workgroup_config, DriverError, WgTags, Workgroup};

#[test]
fn default_workgroup_gets_standard_config_and_no_tags() {
    let wg = Workgroup::new_default("primary", None, None);
    let input = wg.create_input().expect("build input");

    assert_eq!(input.name.as_deref(), Some("primary"));
    let config = input.configuration.expect("configuration present");
    assert_eq!(config.enforce_work_group_configuration(), Some(true));
    assert_eq!(config.publish_cloud_watch_metrics_enabled(), Some(true));
    assert_eq!(config.requester_pays_enabled(), Some(false));
    assert!(input.tags.is_none());
}

#[test]
fn explicit_empty_tag_set_still_omits_the_tags_field() {
    let wg = Workgroup::new("reporting", default_workgroup_config(), WgTags::new());
    let input = wg.create_input().expect("build input");
    assert!(input.tags.is_none());
}

#[test]
fn populated_tags_appear_exactly_as_added() {
    let mut tags = WgTags::new();
    tags.add_tag("owner", "analytics");
    tags.add_tag("cost-center", "1234");

    let wg = Workgroup::new("reporting", default_workgroup_config(), tags);
    let input = wg.create_input().expect("build input");

    let sent = input.tags.expect("tags field present");
    let pairs: Vec<_> = sent
        .iter()
        .map(|t| (t.key().unwrap_or(""), t.value().unwrap_or("")))
        .collect();
    assert_eq!(pairs, [("owner", "analytics"), ("cost-center", "1234")]);
}

#[test]
fn explicit_config_is_not_rewritten() {
    let config = WorkGroupConfiguration::builder()
        .requester_pays_enabled(true)
        .build();
    let wg = Workgroup::new("raw", config, WgTags::new());
    let input = wg.create_input().expect("build input");

    let sent = input.configuration.expect("configuration present");
    assert_eq!(sent.requester_pays_enabled(), Some(true));
    // Only what the caller set; nothing filled in.
    assert_eq!(sent.enforce_work_group_configuration(), None);
}

#[tokio::test]
async fn fetch_without_client_is_a_precondition_failure() {
    let wg = Workgroup::new_default("primary", None, None);
    let err = wg.fetch_remote(None).await.expect_err("must fail");
    assert!(matches!(err, DriverError::NoClientHandle));
    assert_eq!(err.to_string(), "no Athena client handle available");
}
