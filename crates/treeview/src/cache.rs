//! Per-view node cache.

use std::collections::HashMap;

use canopy_protocol::{NodeUri, TreeViewNode};
use parking_lot::RwLock;

/// Last-known node data for one view, keyed by node URI.
///
/// Writes overwrite whole entries. Entries are never evicted; nodes that are
/// no longer reachable simply stop being asked for.
#[derive(Debug, Default)]
pub struct NodeCache {
	nodes: RwLock<HashMap<NodeUri, TreeViewNode>>,
}

impl NodeCache {
	/// Create an empty cache.
	pub fn new() -> Self {
		Self::default()
	}

	/// Get the cached node, if any.
	pub fn get(&self, node_uri: &str) -> Option<TreeViewNode> {
		self.nodes.read().get(node_uri).cloned()
	}

	/// Insert or replace one node.
	pub fn put(&self, node_uri: impl Into<NodeUri>, node: TreeViewNode) {
		self.nodes.write().insert(node_uri.into(), node);
	}

	/// Insert or replace a result set under one write lock.
	///
	/// With `clear_first`, the previous contents are dropped in the same
	/// critical section so readers never observe a partially refreshed cache.
	pub fn put_all(&self, nodes: &[TreeViewNode], clear_first: bool) {
		let mut map = self.nodes.write();
		if clear_first {
			map.clear();
		}
		for node in nodes {
			map.insert(node.node_uri.clone(), node.clone());
		}
	}

	/// Check whether a node is cached.
	pub fn contains(&self, node_uri: &str) -> bool {
		self.nodes.read().contains_key(node_uri)
	}

	/// Number of cached nodes.
	pub fn len(&self) -> usize {
		self.nodes.read().len()
	}

	/// Whether the cache is empty.
	pub fn is_empty(&self) -> bool {
		self.nodes.read().is_empty()
	}
}
