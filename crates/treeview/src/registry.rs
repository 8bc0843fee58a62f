//! View registry.
//!
//! Maps view identifiers to their [`TreeView`] and routes backend pushes to
//! the owning view. The set of valid identifiers is fixed at construction.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use canopy_protocol::lsp_types::notification::Notification;
use canopy_protocol::{AnyNotification, TreeViewDidChange, TreeViewDidChangeParams};
use parking_lot::RwLock;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::client::decode_did_change;
use crate::view::TreeView;

/// Registry of live tree views.
///
/// Thread-safe; shared as `Arc<ViewRegistry>` between the host bindings and
/// the notification pump.
#[derive(Debug)]
pub struct ViewRegistry {
	/// Identifiers accepted by [`Self::register`].
	configured: HashSet<String>,
	/// Registered views by identifier.
	views: RwLock<HashMap<String, Arc<TreeView>>>,
}

impl ViewRegistry {
	/// Create an empty registry accepting the given view identifiers.
	pub fn new(view_ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Self {
			configured: view_ids.into_iter().map(Into::into).collect(),
			views: RwLock::new(HashMap::new()),
		}
	}

	/// Register a view.
	///
	/// Views outside the configured set are dropped and `false` is returned.
	/// Re-registering an identifier replaces the previous view.
	pub fn register(&self, view: Arc<TreeView>) -> bool {
		if !self.configured.contains(view.view_id()) {
			warn!(target: "treeview", view_id = view.view_id(), "Ignoring registration of unconfigured view");
			return false;
		}
		self.views.write().insert(view.view_id().to_string(), view);
		true
	}

	/// Remove a view. Later pushes for it are dropped.
	pub fn unregister(&self, view_id: &str) -> Option<Arc<TreeView>> {
		self.views.write().remove(view_id)
	}

	/// Remove `view` unless another view has replaced it under the same id.
	///
	/// Returns `false` only when a different view is registered.
	pub fn unregister_view(&self, view: &Arc<TreeView>) -> bool {
		let mut views = self.views.write();
		let replaced = views
			.get(view.view_id())
			.is_some_and(|current| !Arc::ptr_eq(current, view));
		if replaced {
			return false;
		}
		views.remove(view.view_id());
		true
	}

	/// Get a registered view.
	pub fn get(&self, view_id: &str) -> Option<Arc<TreeView>> {
		self.views.read().get(view_id).cloned()
	}

	/// Whether `view_id` belongs to the configured set.
	pub fn is_configured(&self, view_id: &str) -> bool {
		self.configured.contains(view_id)
	}

	/// Identifiers of the currently registered views.
	pub fn view_ids(&self) -> Vec<String> {
		self.views.read().keys().cloned().collect()
	}

	/// Route a node snapshot to its view.
	///
	/// Returns `false` when no view is registered under `event.view_id`; the
	/// event is dropped without touching any cache.
	pub fn dispatch(&self, event: TreeViewDidChangeParams) -> bool {
		let Some(view) = self.get(&event.view_id) else {
			debug!(
				target: "treeview",
				view_id = %event.view_id,
				node_uri = %event.node.node_uri,
				"Dropping change for unregistered view"
			);
			return false;
		};
		view.apply_change(event.node);
		true
	}

	/// Handle an inbound backend notification.
	///
	/// Returns `true` if it was a `treeViewDidChange` that reached a view.
	/// Other methods and malformed params are logged and ignored.
	pub fn handle_notification(&self, notif: &AnyNotification) -> bool {
		if notif.method != TreeViewDidChange::METHOD {
			debug!(target: "treeview", method = %notif.method, "Unhandled notification");
			return false;
		}
		match decode_did_change(notif) {
			Ok(event) => self.dispatch(event),
			Err(e) => {
				warn!(target: "treeview", error = %e, "Malformed treeViewDidChange");
				false
			}
		}
	}
}

/// Drain inbound notifications into the registry, in order, until the
/// channel closes.
pub async fn run_notifications(registry: Arc<ViewRegistry>, mut rx: mpsc::UnboundedReceiver<AnyNotification>) {
	while let Some(notif) = rx.recv().await {
		registry.handle_notification(&notif);
	}
	debug!(target: "treeview", "Notification channel closed");
}
