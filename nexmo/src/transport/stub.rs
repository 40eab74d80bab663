use std::cell::RefCell;

use super::{ApiResponse, Transport, TransportError};
use crate::request::ApiRequest;

/// Answers every request with the same canned response and remembers the
/// last request it saw.
pub(crate) struct StubTransport {
	response: ApiResponse,
	last_request: RefCell<Option<ApiRequest>>,
}

impl StubTransport {
	pub fn new(status: u16, body: &str) -> Self {
		Self {
			response: ApiResponse::new(status, body),
			last_request: RefCell::new(None),
		}
	}

	pub fn ok(body: &str) -> Self {
		Self::new(200, body)
	}

	pub fn last_request(&self) -> Option<ApiRequest> {
		self.last_request.borrow().clone()
	}
}

impl Transport for StubTransport {
	fn send_request(&self, req: ApiRequest) -> Result<ApiResponse, TransportError> {
		self.last_request.replace(Some(req));
		Ok(self.response.clone())
	}
}
