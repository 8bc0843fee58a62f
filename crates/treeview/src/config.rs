//! Configuration for the tree-view client.

use std::time::Duration;

use canopy_protocol::{Error, Result};
use serde::{Deserialize, Serialize};

/// How a children response refreshes the view's cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheRefreshPolicy {
	/// Overwrite the returned nodes and keep everything else.
	#[default]
	Overwrite,
	/// Drop the whole cache before inserting the returned nodes.
	Clear,
}

/// Tree-view client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeViewConfig {
	/// Views to create at startup.
	pub view_ids: Vec<String>,
	/// Prefix joined to backend command names with a `.`.
	pub command_namespace: String,
	/// Request timeout in seconds. Zero disables the timeout.
	pub timeout_secs: u64,
	/// Cache refresh policy for children responses.
	pub refresh_policy: CacheRefreshPolicy,
}

impl Default for TreeViewConfig {
	fn default() -> Self {
		Self {
			view_ids: vec!["commands".to_string()],
			command_namespace: "metals".to_string(),
			timeout_secs: 30,
			refresh_policy: CacheRefreshPolicy::default(),
		}
	}
}

impl TreeViewConfig {
	/// Parse a TOML document. Missing keys take their defaults.
	pub fn from_toml(source: &str) -> Result<Self> {
		toml::from_str(source).map_err(|e| Error::Config(e.to_string()))
	}

	/// Replace the configured views.
	pub fn view_ids(mut self, view_ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
		self.view_ids = view_ids.into_iter().map(Into::into).collect();
		self
	}

	/// Set the command namespace.
	pub fn command_namespace(mut self, namespace: impl Into<String>) -> Self {
		self.command_namespace = namespace.into();
		self
	}

	/// Set request timeout.
	pub fn timeout(mut self, secs: u64) -> Self {
		self.timeout_secs = secs;
		self
	}

	/// Set the cache refresh policy.
	pub fn refresh_policy(mut self, policy: CacheRefreshPolicy) -> Self {
		self.refresh_policy = policy;
		self
	}

	/// Request timeout as a [`Duration`]; [`Duration::ZERO`] means none.
	pub fn request_timeout(&self) -> Duration {
		Duration::from_secs(self.timeout_secs)
	}
}

#[cfg(test)]
mod tests;
