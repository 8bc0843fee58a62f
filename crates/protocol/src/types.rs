//! JSON-RPC message envelopes.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A request ID, either numeric or textual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
	/// Numeric ID.
	Number(i32),
	/// String ID.
	String(String),
}

impl fmt::Display for RequestId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Number(id) => write!(f, "{id}"),
			Self::String(id) => write!(f, "{id:?}"),
		}
	}
}

/// A request with untyped params.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct AnyRequest {
	/// The request ID.
	pub id: RequestId,
	/// The method to be invoked.
	pub method: String,
	/// The method's params.
	#[serde(default)]
	#[serde(skip_serializing_if = "serde_json::Value::is_null")]
	pub params: JsonValue,
}

impl AnyRequest {
	/// Build a request for `method` with a placeholder ID.
	///
	/// The transport assigns the real ID when the request is sent.
	#[must_use]
	pub fn new(method: impl Into<String>, params: JsonValue) -> Self {
		Self {
			id: RequestId::Number(0),
			method: method.into(),
			params,
		}
	}
}

/// A notification with untyped params.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct AnyNotification {
	/// The method to be invoked.
	pub method: String,
	/// The notification's params.
	#[serde(default)]
	#[serde(skip_serializing_if = "serde_json::Value::is_null")]
	pub params: JsonValue,
}

impl AnyNotification {
	/// Build a notification for `method`.
	#[must_use]
	pub fn new(method: impl Into<String>, params: JsonValue) -> Self {
		Self {
			method: method.into(),
			params,
		}
	}
}

/// A response to a request, carrying either a result or an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct AnyResponse {
	/// The ID of the request this responds to.
	pub id: RequestId,
	/// The result on success.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub result: Option<JsonValue>,
	/// The error on failure.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<ResponseError>,
}

impl AnyResponse {
	/// Successful response.
	#[must_use]
	pub fn ok(id: RequestId, result: JsonValue) -> Self {
		Self {
			id,
			result: Some(result),
			error: None,
		}
	}

	/// Error response.
	#[must_use]
	pub fn err(id: RequestId, error: ResponseError) -> Self {
		Self {
			id,
			result: None,
			error: Some(error),
		}
	}
}

/// The error payload of a failed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message} ({code})")]
#[non_exhaustive]
pub struct ResponseError {
	/// A number indicating the error type that occurred.
	pub code: ErrorCode,
	/// A string providing a short description of the error.
	pub message: String,
	/// Additional information about the error.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub data: Option<JsonValue>,
}

impl ResponseError {
	/// Create a new error object with a JSON-RPC error code and a message.
	#[must_use]
	pub fn new(code: ErrorCode, message: impl fmt::Display) -> Self {
		Self {
			code,
			message: message.to_string(),
			data: None,
		}
	}
}

/// A JSON-RPC error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(pub i32);

impl fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

impl ErrorCode {
	/// The method does not exist or is not available.
	pub const METHOD_NOT_FOUND: Self = Self(-32601);
	/// Invalid method parameter(s).
	pub const INVALID_PARAMS: Self = Self(-32602);
	/// Internal JSON-RPC error.
	pub const INTERNAL_ERROR: Self = Self(-32603);
}
