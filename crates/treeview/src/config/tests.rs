use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_empty_toml_uses_defaults() {
	let config = TreeViewConfig::from_toml("").unwrap();
	assert_eq!(config, TreeViewConfig::default());
	assert_eq!(config.view_ids, vec!["commands"]);
	assert_eq!(config.request_timeout(), Duration::from_secs(30));
}

#[test]
fn test_toml_overrides() {
	let config = TreeViewConfig::from_toml(
		r#"
view_ids = ["commands", "build"]
command_namespace = "scala"
timeout_secs = 0
refresh_policy = "clear"
"#,
	)
	.unwrap();

	assert_eq!(config.view_ids, vec!["commands", "build"]);
	assert_eq!(config.command_namespace, "scala");
	assert_eq!(config.request_timeout(), Duration::ZERO);
	assert_eq!(config.refresh_policy, CacheRefreshPolicy::Clear);
}

#[test]
fn test_invalid_policy_is_config_error() {
	let err = TreeViewConfig::from_toml(r#"refresh_policy = "sometimes""#).unwrap_err();
	assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_builder() {
	let config = TreeViewConfig::default()
		.view_ids(["a", "b"])
		.command_namespace("ns")
		.timeout(5)
		.refresh_policy(CacheRefreshPolicy::Clear);

	assert_eq!(config.view_ids, vec!["a", "b"]);
	assert_eq!(config.command_namespace, "ns");
	assert_eq!(config.timeout_secs, 5);
	assert_eq!(config.refresh_policy, CacheRefreshPolicy::Clear);
}
