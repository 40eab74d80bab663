pub mod webapi;

#[cfg(test)]
pub(crate) mod stub;

use thiserror::Error;
pub use webapi::WebApiTransport;

use crate::request::ApiRequest;

/// Executes requests. Clients are generic over this so tests can swap in a
/// canned transport.
pub trait Transport {
	fn send_request(&self, req: ApiRequest) -> Result<ApiResponse, TransportError>;
}

impl<T> Transport for &T
where
	T: Transport + ?Sized,
{
	fn send_request(&self, req: ApiRequest) -> Result<ApiResponse, TransportError> {
		(**self).send_request(req)
	}
}

/// Raw HTTP status and body, as handed back by a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
	pub status: u16,
	pub body: String,
}

impl ApiResponse {
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self {
			status,
			body: body.into(),
		}
	}

	pub fn is_throttled(&self) -> bool {
		self.status == 429
	}

	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

#[derive(Debug, Error)]
pub enum TransportError {
	#[error("Network failure: {0}")]
	NetworkFailure(#[from] reqwest::Error),
}
