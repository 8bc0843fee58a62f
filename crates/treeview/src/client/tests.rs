use canopy_protocol::{ErrorCode, JsonValue, ResponseError};
use pretty_assertions::assert_eq;
use serde_json::json;

use super::*;
use crate::test_util::{Reply, ScriptedTransport};

#[tokio::test]
async fn test_children_sends_wire_params() {
	let transport = ScriptedTransport::new();
	transport.reply_nodes("commands", Some("a"), vec![TreeViewNode::new("a/1", "One", false)]);
	transport.reply_nodes("commands", None, vec![]);
	let client = transport.client();

	client.children("commands", Some("a")).await.unwrap();
	client.children("commands", None).await.unwrap();

	let requests = transport.requests();
	assert_eq!(requests.len(), 2);
	assert_eq!(requests[0].method, "treeViewChildren");
	assert_eq!(requests[0].params, json!({ "viewId": "commands", "nodeUri": "a" }));
	assert_eq!(requests[1].params, json!({ "viewId": "commands" }));
}

#[tokio::test]
async fn test_children_preserves_order() {
	let transport = ScriptedTransport::new();
	let nodes = vec![
		TreeViewNode::new("z", "Zed", false),
		TreeViewNode::new("a", "Alpha", true),
		TreeViewNode::new("m", "Mid", false),
	];
	transport.reply_nodes("commands", None, nodes.clone());

	let result = transport.client().children("commands", None).await.unwrap();
	assert_eq!(result, nodes);
}

#[tokio::test]
async fn test_response_error_surfaces() {
	let transport = ScriptedTransport::new();
	transport.reply(
		"commands",
		None,
		Reply::Failure(ResponseError::new(ErrorCode::INTERNAL_ERROR, "boom")),
	);

	let err = transport.client().children("commands", None).await.unwrap_err();
	assert!(matches!(err, Error::Response(ref e) if e.message == "boom"));
}

#[tokio::test]
async fn test_malformed_result_is_deserialize_error() {
	let transport = ScriptedTransport::new();
	transport.reply("commands", None, Reply::Raw(json!({ "nodes": [{ "label": "no uri" }] })));

	let err = transport.client().children("commands", None).await.unwrap_err();
	assert!(matches!(err, Error::Deserialize(_)));
}

#[tokio::test]
async fn test_missing_result_is_deserialize_error() {
	let transport = ScriptedTransport::new();
	transport.reply("commands", None, Reply::Raw(JsonValue::Null));

	let err = transport.client().children("commands", None).await.unwrap_err();
	assert!(matches!(err, Error::Deserialize(_)));
}

#[test]
fn test_decode_did_change() {
	let notif = AnyNotification::new(
		"treeViewDidChange",
		json!({ "viewId": "commands", "nodeUri": "a", "label": "Alpha", "isCollapsible": true, "command": "run" }),
	);
	let params = decode_did_change(&notif).unwrap();
	assert_eq!(params.view_id, "commands");
	assert_eq!(params.node, TreeViewNode::new("a", "Alpha", true).with_command("run"));
}

#[test]
fn test_decode_did_change_missing_label_is_deserialize_error() {
	let notif = AnyNotification::new(
		"treeViewDidChange",
		json!({ "viewId": "commands", "nodeUri": "a", "isCollapsible": false }),
	);
	assert!(matches!(decode_did_change(&notif), Err(Error::Deserialize(_))));
}
