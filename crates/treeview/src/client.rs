//! Backend protocol adapter.
//!
//! [`TreeViewClient`] turns typed tree-view calls into JSON-RPC envelopes and
//! hands them to a [`BackendTransport`]. It never retries; every failure is
//! returned to the caller as-is.

use std::sync::Arc;

use async_trait::async_trait;
use canopy_protocol::lsp_types::request::Request;
use canopy_protocol::{
	AnyNotification, AnyRequest, AnyResponse, Error, Result, TreeViewChildren, TreeViewChildrenParams,
	TreeViewDidChangeParams, TreeViewNode,
};
use tracing::trace;

/// Request channel to the backend.
///
/// Implementations own request ID assignment and response correlation.
#[async_trait]
pub trait BackendTransport: Send + Sync {
	/// Send a request and wait for its response.
	async fn request(&self, req: AnyRequest) -> Result<AnyResponse>;
}

/// Typed client for the tree-view protocol.
#[derive(Clone)]
pub struct TreeViewClient {
	transport: Arc<dyn BackendTransport>,
}

impl std::fmt::Debug for TreeViewClient {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TreeViewClient").finish_non_exhaustive()
	}
}

impl TreeViewClient {
	/// Create a client over the given transport.
	pub fn new(transport: Arc<dyn BackendTransport>) -> Self {
		Self { transport }
	}

	/// Send a typed request and decode its result.
	pub async fn request<R: Request>(&self, params: R::Params) -> Result<R::Result> {
		let req = AnyRequest::new(R::METHOD, serde_json::to_value(params)?);
		let resp = self.transport.request(req).await?;
		match resp.error {
			None => Ok(serde_json::from_value(resp.result.unwrap_or_default())?),
			Some(err) => Err(Error::Response(err)),
		}
	}

	/// List the children of `node_uri` (or the root) in `view_id`, in display order.
	pub async fn children(&self, view_id: &str, node_uri: Option<&str>) -> Result<Vec<TreeViewNode>> {
		let params = TreeViewChildrenParams {
			view_id: view_id.to_string(),
			node_uri: node_uri.map(str::to_string),
		};
		let result = self.request::<TreeViewChildren>(params).await?;
		trace!(target: "treeview", view_id, count = result.nodes.len(), "Children response");
		Ok(result.nodes)
	}
}

/// Decode the params of a `treeViewDidChange` notification.
///
/// The caller routes on the method name.
pub fn decode_did_change(notif: &AnyNotification) -> Result<TreeViewDidChangeParams> {
	Ok(serde_json::from_value(notif.params.clone())?)
}

#[cfg(test)]
mod tests;
