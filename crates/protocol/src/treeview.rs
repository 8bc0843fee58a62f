//! Typed tree-view messages.
//!
//! Field names are the wire contract and use the backend's camelCase spelling.

use lsp_types::notification::Notification;
use lsp_types::request::Request;
use serde::{Deserialize, Serialize};

/// Opaque node identifier, unique within one view.
pub type NodeUri = String;

/// One row of a tree as last reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeViewNode {
	/// Node identifier, used as both cache key and row id.
	pub node_uri: NodeUri,
	/// Human-readable label.
	pub label: String,
	/// Whether the node has (or may have) children.
	pub is_collapsible: bool,
	/// Command to run when the row is activated, without namespace.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub command: Option<String>,
}

impl TreeViewNode {
	/// Build a node without a command.
	pub fn new(node_uri: impl Into<NodeUri>, label: impl Into<String>, is_collapsible: bool) -> Self {
		Self {
			node_uri: node_uri.into(),
			label: label.into(),
			is_collapsible,
			command: None,
		}
	}

	/// Attach a command.
	#[must_use]
	pub fn with_command(mut self, command: impl Into<String>) -> Self {
		self.command = Some(command.into());
		self
	}
}

/// Params of [`TreeViewChildren`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeViewChildrenParams {
	/// View to list children in.
	pub view_id: String,
	/// Parent node; `None` lists the root.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub node_uri: Option<NodeUri>,
}

/// Result of [`TreeViewChildren`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeViewChildrenResult {
	/// Children in display order.
	pub nodes: Vec<TreeViewNode>,
}

/// Params of [`TreeViewDidChange`]: a full node snapshot tagged with its view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeViewDidChangeParams {
	/// View owning the node.
	pub view_id: String,
	/// New node state.
	#[serde(flatten)]
	pub node: TreeViewNode,
}

/// Client → backend request listing the children of a node.
#[derive(Debug)]
pub enum TreeViewChildren {}

impl Request for TreeViewChildren {
	type Params = TreeViewChildrenParams;
	type Result = TreeViewChildrenResult;
	const METHOD: &'static str = "treeViewChildren";
}

/// Backend → client notification that one node changed.
#[derive(Debug)]
pub enum TreeViewDidChange {}

impl Notification for TreeViewDidChange {
	type Params = TreeViewDidChangeParams;
	const METHOD: &'static str = "treeViewDidChange";
}
