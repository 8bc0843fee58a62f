//! Host UI bindings and startup.

use std::collections::HashSet;
use std::sync::Arc;

use canopy_protocol::Result;
use tracing::{debug, info, warn};

use crate::client::TreeViewClient;
use crate::config::TreeViewConfig;
use crate::registry::ViewRegistry;
use crate::view::{TreeDataProvider, TreeView};

/// Tree widget support provided by the host UI toolkit.
pub trait TreeViewHost: Send + Sync {
	/// Bind `provider` to the pre-declared view slot `view_id`.
	fn create_tree_view(&self, view_id: &str, provider: Arc<dyn TreeDataProvider>) -> Result<()>;

	/// Release the binding made by [`Self::create_tree_view`].
	fn dispose_tree_view(&self, view_id: &str);
}

/// Disposal handle for one started view.
///
/// Dropping the handle keeps the view alive; call [`Self::dispose`] to
/// release it.
pub struct ViewRegistration {
	view: Arc<TreeView>,
	registry: Arc<ViewRegistry>,
	host: Arc<dyn TreeViewHost>,
}

impl std::fmt::Debug for ViewRegistration {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ViewRegistration")
			.field("view_id", &self.view.view_id())
			.finish_non_exhaustive()
	}
}

impl ViewRegistration {
	/// The registered view identifier.
	pub fn view_id(&self) -> &str {
		self.view.view_id()
	}

	/// Stop routing pushes to the view and release its host binding.
	///
	/// In-flight children requests still complete against the detached view.
	/// If another view has since been registered under the same id, this
	/// handle is stale and leaves both the registry and the host untouched.
	pub fn dispose(self) {
		let view_id = self.view.view_id();
		if !self.registry.unregister_view(&self.view) {
			debug!(target: "treeview", view_id, "Skipping disposal of replaced tree view");
			return;
		}
		self.host.dispose_tree_view(view_id);
		info!(target: "treeview", view_id, "Disposed tree view");
	}
}

/// Everything produced by [`start_tree_views`].
#[derive(Debug)]
pub struct TreeViews {
	/// Registry to hand to the notification pump.
	pub registry: Arc<ViewRegistry>,
	/// One disposal handle per started view, in configuration order.
	pub registrations: Vec<ViewRegistration>,
}

impl TreeViews {
	/// Dispose every view.
	pub fn dispose_all(self) {
		for registration in self.registrations {
			registration.dispose();
		}
	}
}

/// Create, register and bind one [`TreeView`] per configured view.
///
/// Duplicate identifiers are bound once. If the host refuses a binding,
/// views bound so far are disposed and the error is returned.
pub fn start_tree_views(
	config: &TreeViewConfig,
	client: TreeViewClient,
	host: Arc<dyn TreeViewHost>,
) -> Result<TreeViews> {
	let registry = Arc::new(ViewRegistry::new(config.view_ids.iter().cloned()));
	let mut registrations: Vec<ViewRegistration> = Vec::with_capacity(config.view_ids.len());
	let mut seen = HashSet::new();

	for view_id in &config.view_ids {
		if !seen.insert(view_id.as_str()) {
			warn!(target: "treeview", view_id = %view_id, "Duplicate view id in configuration");
			continue;
		}

		let view = Arc::new(TreeView::new(view_id.clone(), client.clone(), config));
		registry.register(view.clone());

		if let Err(e) = host.create_tree_view(view_id, view.clone()) {
			warn!(target: "treeview", view_id = %view_id, error = %e, "Host refused tree view");
			registry.unregister(view_id);
			for registration in registrations {
				registration.dispose();
			}
			return Err(e);
		}

		info!(target: "treeview", view_id = %view_id, "Started tree view");
		registrations.push(ViewRegistration {
			view,
			registry: registry.clone(),
			host: host.clone(),
		});
	}

	Ok(TreeViews {
		registry,
		registrations,
	})
}
