//! Client-side support for server-driven tree views.
//!
//! A language backend owns the content of one or more trees (for example a
//! "commands" explorer). The client only materializes the rows the host UI
//! asks for, and the backend may push node updates at any time.
//!
//! * [`NodeCache`]: last-known node data for one view.
//! * [`TreeView`]: the [`TreeDataProvider`] for one view. Pulls children
//!   through a [`TreeViewClient`] and applies pushed changes.
//! * [`ViewRegistry`]: maps view identifiers to views and routes
//!   `treeViewDidChange` notifications.
//! * [`start_tree_views`]: builds the registry from a [`TreeViewConfig`] and
//!   binds each view to a [`TreeViewHost`].
//!
//! # Example
//!
//! ```ignore
//! let config = TreeViewConfig::from_toml(&std::fs::read_to_string("treeview.toml")?)?;
//! let (transport, outbound) = OutboxTransport::new(64, config.request_timeout());
//! // hand `outbound` to the task that owns the backend connection
//! let views = start_tree_views(&config, TreeViewClient::new(Arc::new(transport)), host)?;
//! tokio::spawn(run_notifications(views.registry.clone(), inbound_notifications));
//! ```
#![warn(missing_docs)]

pub use canopy_protocol::{Error, NodeUri, Result, TreeViewNode};

pub mod cache;
pub mod client;
pub mod config;
pub mod host;
pub mod item;
pub mod registry;
pub mod transport;
pub mod view;

#[cfg(test)]
pub(crate) mod test_util;

pub use cache::NodeCache;
pub use client::{BackendTransport, TreeViewClient, decode_did_change};
pub use config::{CacheRefreshPolicy, TreeViewConfig};
pub use host::{TreeViewHost, TreeViews, ViewRegistration, start_tree_views};
pub use item::{CollapsibleState, TreeCommand, TreeItem, tree_item_from_node};
pub use registry::{ViewRegistry, run_notifications};
pub use transport::{OutboundRequest, OutboxTransport};
pub use view::{TreeChangeReceiver, TreeDataProvider, TreeView};
