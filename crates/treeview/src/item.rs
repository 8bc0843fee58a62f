//! Display items handed to the host UI.

use std::str::FromStr;

use canopy_protocol::lsp_types::Uri;
use canopy_protocol::{NodeUri, TreeViewNode};

/// Title of the command attached to activatable rows.
pub const COMMAND_TITLE: &str = "Run command";
/// Tooltip of the command attached to activatable rows.
pub const COMMAND_TOOLTIP: &str = "Execute this command";

/// Whether a row can be expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollapsibleState {
	/// Leaf row.
	#[default]
	None,
	/// Expandable row, initially collapsed.
	Collapsed,
	/// Expandable row, initially expanded.
	Expanded,
}

/// Command run when a row is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeCommand {
	/// Fully qualified command name (`<namespace>.<command>`).
	pub command: String,
	/// Presentation title.
	pub title: String,
	/// Presentation tooltip.
	pub tooltip: String,
}

/// Display data for one row.
///
/// [`TreeItem::default`] is the placeholder returned for nodes that are not
/// cached.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TreeItem {
	/// Row label.
	pub label: Option<String>,
	/// Row identity, equal to the node URI.
	pub id: Option<NodeUri>,
	/// Resource parsed from the node URI, when it is a valid URI.
	pub resource_uri: Option<Uri>,
	/// Expansion state.
	pub collapsible_state: CollapsibleState,
	/// Activation command.
	pub command: Option<TreeCommand>,
}

impl TreeItem {
	/// Whether this is the cache-miss placeholder.
	pub fn is_placeholder(&self) -> bool {
		self.id.is_none()
	}

	/// Whether the row can be expanded.
	pub fn is_collapsible(&self) -> bool {
		self.collapsible_state != CollapsibleState::None
	}
}

/// Map a backend node to its display item.
pub fn tree_item_from_node(node: &TreeViewNode, command_namespace: &str) -> TreeItem {
	TreeItem {
		label: Some(node.label.clone()),
		id: Some(node.node_uri.clone()),
		resource_uri: Uri::from_str(&node.node_uri).ok(),
		collapsible_state: if node.is_collapsible {
			CollapsibleState::Collapsed
		} else {
			CollapsibleState::None
		},
		command: node.command.as_deref().map(|command| TreeCommand {
			command: format!("{command_namespace}.{command}"),
			title: COMMAND_TITLE.to_string(),
			tooltip: COMMAND_TOOLTIP.to_string(),
		}),
	}
}
