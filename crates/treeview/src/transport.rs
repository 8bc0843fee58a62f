//! Channel-backed [`BackendTransport`].
//!
//! Requests are queued as [`OutboundRequest`]s for whatever task owns the
//! actual connection. That task writes the request, and sends the matching
//! response back through `response_tx`. A full queue fails the request with
//! [`Error::Backpressure`] instead of waiting.

use std::sync::atomic::{AtomicI32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use canopy_protocol::{AnyRequest, AnyResponse, Error, RequestId, Result};
use tokio::sync::{mpsc, oneshot};

use crate::client::BackendTransport;

/// A request waiting to be written to the backend.
#[derive(Debug)]
pub struct OutboundRequest {
	/// The request, with its ID already assigned.
	pub request: AnyRequest,
	/// Where the response is delivered.
	pub response_tx: oneshot::Sender<AnyResponse>,
}

/// Transport that pushes requests into a bounded outbound queue.
#[derive(Debug)]
pub struct OutboxTransport {
	outbound_tx: mpsc::Sender<OutboundRequest>,
	next_id: AtomicI32,
	timeout: Duration,
}

impl OutboxTransport {
	/// Create a transport and the receiving end of its queue.
	///
	/// A `timeout` of [`Duration::ZERO`] waits forever.
	pub fn new(capacity: usize, timeout: Duration) -> (Self, mpsc::Receiver<OutboundRequest>) {
		let (outbound_tx, outbound_rx) = mpsc::channel(capacity);
		let transport = Self {
			outbound_tx,
			next_id: AtomicI32::new(0),
			timeout,
		};
		(transport, outbound_rx)
	}
}

#[async_trait]
impl BackendTransport for OutboxTransport {
	async fn request(&self, mut req: AnyRequest) -> Result<AnyResponse> {
		req.id = RequestId::Number(self.next_id.fetch_add(1, Ordering::Relaxed));
		let method = req.method.clone();
		let (tx, rx) = oneshot::channel();
		self.outbound_tx
			.try_send(OutboundRequest {
				request: req,
				response_tx: tx,
			})
			.map_err(|err| match err {
				mpsc::error::TrySendError::Closed(_) => Error::ServiceStopped,
				mpsc::error::TrySendError::Full(_) => Error::Backpressure,
			})?;
		if self.timeout == Duration::ZERO {
			rx.await.map_err(|_| Error::ServiceStopped)
		} else {
			match tokio::time::timeout(self.timeout, rx).await {
				Ok(resp) => resp.map_err(|_| Error::ServiceStopped),
				Err(_) => Err(Error::RequestTimeout(method)),
			}
		}
	}
}
