use log::*;
use serde::de::DeserializeOwned;

use crate::{
	error::ClientError,
	request::ApiRequest,
	transport::{ApiResponse, Transport},
};

/// A single API operation, expressed as a request builder and a response
/// parser. Implementors hold no state, so one value can serve any number of
/// calls.
pub trait Endpoint {
	type Request;
	type Response;

	fn make_request(&self, req: &Self::Request) -> ApiRequest;

	fn parse_response(&self, resp: ApiResponse) -> Result<Self::Response, ClientError>;
}

/// HTTP 429 means throttled, whatever the body says. Any other status
/// outside 2xx is rejected before the body is looked at.
pub(crate) fn check_status(resp: &ApiResponse) -> Result<(), ClientError> {
	if resp.is_throttled() {
		warn!("request throttled, server returned HTTP {}", resp.status);
		return Err(ClientError::Throttled);
	}
	if !resp.is_success() {
		debug!("unexpected HTTP {}: {}", resp.status, resp.body);
		return Err(ClientError::HttpStatus {
			status: resp.status,
			body: resp.body.clone(),
		});
	}
	Ok(())
}

pub(crate) fn deserialize_body<T: DeserializeOwned>(resp: &ApiResponse) -> Result<T, ClientError> {
	let mut deser = serde_json::Deserializer::from_str(resp.body.as_str());
	let body: T = serde_path_to_error::deserialize(&mut deser)?;
	Ok(body)
}

pub(crate) fn execute<T, E>(transport: &T, endpoint: &E, req: &E::Request) -> Result<E::Response, ClientError>
where
	T: Transport,
	E: Endpoint,
{
	let apireq = endpoint.make_request(req);
	let resp = transport.send_request(apireq)?;
	endpoint.parse_response(resp)
}
