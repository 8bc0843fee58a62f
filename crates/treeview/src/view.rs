//! Tree view instances.
//!
//! A [`TreeView`] is the host-facing data provider for one view. It owns the
//! view's [`NodeCache`] and has two inputs:
//!
//! * the pull path, [`TreeDataProvider::children`], which requests children
//!   from the backend and applies the whole result set once it arrives;
//! * the push path, [`TreeView::apply_change`], fed by the registry when the
//!   backend reports that a node changed.
//!
//! Both paths write through short, non-async critical sections, so neither
//! can observe the other half-applied. Last write wins.

use async_trait::async_trait;
use canopy_protocol::{NodeUri, Result, TreeViewNode};
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tracing::debug;

use crate::cache::NodeCache;
use crate::client::TreeViewClient;
use crate::config::{CacheRefreshPolicy, TreeViewConfig};
use crate::item::{TreeItem, tree_item_from_node};

/// Receiver of node URIs whose rows (and subtrees) must be re-rendered.
pub type TreeChangeReceiver = mpsc::UnboundedReceiver<NodeUri>;

/// Data source contract consumed by the host UI.
#[async_trait]
pub trait TreeDataProvider: Send + Sync {
	/// Display data for a node previously returned by [`Self::children`].
	///
	/// Never fetches. Unknown nodes yield [`TreeItem::default`].
	fn tree_item(&self, node_uri: &str) -> TreeItem;

	/// Children of `parent` (the root when `None`), in display order.
	async fn children(&self, parent: Option<&str>) -> Result<Vec<NodeUri>>;

	/// Subscribe to node invalidations.
	fn subscribe(&self) -> TreeChangeReceiver;
}

/// One server-driven tree.
pub struct TreeView {
	view_id: String,
	client: TreeViewClient,
	cache: NodeCache,
	command_namespace: String,
	refresh_policy: CacheRefreshPolicy,
	subscribers: Mutex<Vec<mpsc::UnboundedSender<NodeUri>>>,
}

impl std::fmt::Debug for TreeView {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TreeView")
			.field("view_id", &self.view_id)
			.field("cached", &self.cache.len())
			.field("refresh_policy", &self.refresh_policy)
			.finish_non_exhaustive()
	}
}

impl TreeView {
	/// Create an empty view.
	pub fn new(view_id: impl Into<String>, client: TreeViewClient, config: &TreeViewConfig) -> Self {
		Self {
			view_id: view_id.into(),
			client,
			cache: NodeCache::new(),
			command_namespace: config.command_namespace.clone(),
			refresh_policy: config.refresh_policy,
			subscribers: Mutex::new(Vec::new()),
		}
	}

	/// The view identifier.
	pub fn view_id(&self) -> &str {
		&self.view_id
	}

	/// The view's node cache.
	pub fn cache(&self) -> &NodeCache {
		&self.cache
	}

	/// Store a pushed node snapshot and invalidate its row.
	pub fn apply_change(&self, node: TreeViewNode) {
		let node_uri = node.node_uri.clone();
		self.cache.put(node_uri.clone(), node);
		self.notify_changed(&node_uri);
	}

	/// Tell every live subscriber that `node_uri` is stale.
	pub fn notify_changed(&self, node_uri: &str) {
		self.subscribers
			.lock()
			.retain(|tx| tx.send(node_uri.to_string()).is_ok());
	}

	/// Number of live change subscribers.
	pub fn subscriber_count(&self) -> usize {
		let mut subscribers = self.subscribers.lock();
		subscribers.retain(|tx| !tx.is_closed());
		subscribers.len()
	}
}

#[async_trait]
impl TreeDataProvider for TreeView {
	fn tree_item(&self, node_uri: &str) -> TreeItem {
		debug!(target: "treeview", view_id = %self.view_id, node_uri, "tree_item");
		match self.cache.get(node_uri) {
			Some(node) => tree_item_from_node(&node, &self.command_namespace),
			None => TreeItem::default(),
		}
	}

	async fn children(&self, parent: Option<&str>) -> Result<Vec<NodeUri>> {
		debug!(target: "treeview", view_id = %self.view_id, parent = ?parent, "children");
		let nodes = self.client.children(&self.view_id, parent).await?;
		self.cache
			.put_all(&nodes, self.refresh_policy == CacheRefreshPolicy::Clear);
		Ok(nodes.into_iter().map(|node| node.node_uri).collect())
	}

	fn subscribe(&self) -> TreeChangeReceiver {
		let (tx, rx) = mpsc::unbounded_channel();
		self.subscribers.lock().push(tx);
		rx
	}
}
