//! Wire-level types for server-driven tree views.
//!
//! Internal crate: use [`canopy_treeview`] for the client-side cache and view registry.
//!
//! This crate provides:
//!
//! * JSON-RPC envelopes: [`AnyRequest`], [`AnyResponse`], [`AnyNotification`].
//! * The typed tree-view messages: [`TreeViewChildren`] (client → backend request) and
//!   [`TreeViewDidChange`] (backend → client notification).
//! * The crate-wide [`enum@Error`] type shared by every layer above the transport.
//!
//! [`canopy_treeview`]: https://docs.rs/canopy-treeview
#![warn(missing_docs)]
/// Re-export of the [`lsp_types`] dependency of this crate.
pub use lsp_types;
pub use serde_json::Value as JsonValue;

mod treeview;
mod types;

pub use treeview::{
	NodeUri, TreeViewChildren, TreeViewChildrenParams, TreeViewChildrenResult, TreeViewDidChange,
	TreeViewDidChangeParams, TreeViewNode,
};
pub use types::{AnyNotification, AnyRequest, AnyResponse, ErrorCode, RequestId, ResponseError};

/// A convenient type alias for `Result` with `E` = [`enum@crate::Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Possible errors.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// The transport or its driving loop stopped.
	#[error("service stopped")]
	ServiceStopped,
	/// The peer replied with an undecodable or invalid payload.
	#[error("deserialization failed: {0}")]
	Deserialize(String),
	/// The peer replied with an error.
	#[error("{0}")]
	Response(#[from] ResponseError),
	/// The request timed out.
	#[error("request timed out: {0}")]
	RequestTimeout(String),
	/// Outbound queue is full. Retry later.
	#[error("outbound queue full (backpressure)")]
	Backpressure,
	/// A view identifier outside the configured set.
	#[error("unknown tree view '{0}'")]
	UnknownView(String),
	/// Configuration could not be loaded.
	#[error("invalid configuration: {0}")]
	Config(String),
}

impl From<serde_json::Error> for Error {
	fn from(e: serde_json::Error) -> Self {
		Self::Deserialize(e.to_string())
	}
}
