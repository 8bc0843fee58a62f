//! Scripted backend used by unit tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use canopy_protocol::{
	AnyRequest, AnyResponse, ErrorCode, Error, JsonValue, ResponseError, Result, TreeViewChildrenParams,
	TreeViewChildrenResult, TreeViewNode,
};
use parking_lot::Mutex;
use tokio::sync::Notify;

use crate::client::{BackendTransport, TreeViewClient};

#[derive(Debug, Clone)]
pub(crate) enum Reply {
	Nodes(Vec<TreeViewNode>),
	Raw(JsonValue),
	Failure(ResponseError),
	Transport(Error),
}

#[derive(Default)]
pub(crate) struct ScriptedTransport {
	replies: Mutex<HashMap<(String, Option<String>), Reply>>,
	requests: Mutex<Vec<AnyRequest>>,
	gate: Mutex<Option<Arc<Notify>>>,
}

impl ScriptedTransport {
	pub(crate) fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub(crate) fn reply(&self, view_id: &str, node_uri: Option<&str>, reply: Reply) {
		self.replies
			.lock()
			.insert((view_id.to_string(), node_uri.map(str::to_string)), reply);
	}

	pub(crate) fn reply_nodes(&self, view_id: &str, node_uri: Option<&str>, nodes: Vec<TreeViewNode>) {
		self.reply(view_id, node_uri, Reply::Nodes(nodes));
	}

	/// Hold every following response until the returned notify fires.
	pub(crate) fn hold_responses(&self) -> Arc<Notify> {
		let gate = Arc::new(Notify::new());
		*self.gate.lock() = Some(gate.clone());
		gate
	}

	pub(crate) fn requests(&self) -> Vec<AnyRequest> {
		self.requests.lock().clone()
	}

	pub(crate) fn client(self: &Arc<Self>) -> TreeViewClient {
		TreeViewClient::new(self.clone())
	}
}

#[async_trait]
impl BackendTransport for ScriptedTransport {
	async fn request(&self, req: AnyRequest) -> Result<AnyResponse> {
		self.requests.lock().push(req.clone());
		let params: TreeViewChildrenParams = serde_json::from_value(req.params.clone())?;
		let reply = self.replies.lock().get(&(params.view_id, params.node_uri)).cloned();

		let gate = self.gate.lock().clone();
		if let Some(gate) = gate {
			gate.notified().await;
		}

		match reply {
			Some(Reply::Nodes(nodes)) => Ok(AnyResponse::ok(
				req.id,
				serde_json::to_value(TreeViewChildrenResult { nodes })?,
			)),
			Some(Reply::Raw(value)) => Ok(AnyResponse::ok(req.id, value)),
			Some(Reply::Failure(err)) => Ok(AnyResponse::err(req.id, err)),
			Some(Reply::Transport(err)) => Err(err),
			None => Ok(AnyResponse::err(
				req.id,
				ResponseError::new(ErrorCode::INVALID_PARAMS, "no scripted reply"),
			)),
		}
	}
}
