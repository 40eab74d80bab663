use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use super::VerifyStatus;
use crate::{
	endpoint::{deserialize_body, check_status, Endpoint},
	error::{ClientError, ResponseParseError},
	request::{ApiHost, ApiRequest},
	transport::ApiResponse,
};

const PATH: &str = "/verify/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum CodeLength {
	Four = 4,
	Six = 6,
}

/// Parameters for `POST /verify/json`, which sends a code to `number`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyRequest {
	pub number: String,
	/// Shown to the user in the message, eg. "Your AcmeInc PIN is ..."
	pub brand: String,
	pub sender_id: Option<String>,
	pub code_length: Option<CodeLength>,
	/// Locale of the message, eg. `en-gb`. Sent as `lg`.
	pub locale: Option<String>,
	pub country: Option<String>,
	/// Seconds before the code expires.
	pub pin_expiry: Option<u32>,
	/// Seconds to wait between delivery attempts.
	pub next_event_wait: Option<u32>,
}

impl VerifyRequest {
	pub fn new(number: impl Into<String>, brand: impl Into<String>) -> Self {
		Self {
			number: number.into(),
			brand: brand.into(),
			sender_id: None,
			code_length: None,
			locale: None,
			country: None,
			pin_expiry: None,
			next_event_wait: None,
		}
	}

	#[must_use]
	pub fn with_sender_id(mut self, sender_id: impl Into<String>) -> Self {
		self.sender_id = Some(sender_id.into());
		self
	}

	#[must_use]
	pub fn with_code_length(mut self, code_length: CodeLength) -> Self {
		self.code_length = Some(code_length);
		self
	}

	#[must_use]
	pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
		self.locale = Some(locale.into());
		self
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyResponse {
	pub request_id: Option<String>,
	pub status: VerifyStatus,
	pub error_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawVerifyResponse {
	request_id: Option<String>,
	status: Option<VerifyStatus>,
	error_text: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VerifyEndpoint;

impl Endpoint for VerifyEndpoint {
	type Request = VerifyRequest;
	type Response = VerifyResponse;

	fn make_request(&self, req: &VerifyRequest) -> ApiRequest {
		ApiRequest::post(ApiHost::Api, PATH)
			.with_param("number", &req.number)
			.with_param("brand", &req.brand)
			.with_optional_param("sender_id", req.sender_id.as_ref())
			.with_optional_param("code_length", req.code_length.map(u8::from))
			.with_optional_param("lg", req.locale.as_ref())
			.with_optional_param("country", req.country.as_ref())
			.with_optional_param("pin_expiry", req.pin_expiry)
			.with_optional_param("next_event_wait", req.next_event_wait)
	}

	fn parse_response(&self, resp: ApiResponse) -> Result<VerifyResponse, ClientError> {
		check_status(&resp)?;
		let raw: RawVerifyResponse = deserialize_body(&resp)?;
		let status = raw.status.ok_or(ResponseParseError::MissingField("status"))?;
		Ok(VerifyResponse {
			request_id: raw.request_id,
			status,
			error_text: raw.error_text,
		})
	}
}
