use std::str::FromStr;

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

use super::VerifyStatus;
use crate::{
	endpoint::{deserialize_body, check_status, Endpoint},
	error::{ClientError, ResponseParseError},
	request::{ApiHost, ApiRequest},
	transport::ApiResponse,
};

const PATH: &str = "/verify/check/json";

/// Parameters for `POST /verify/check/json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
	pub request_id: String,
	pub code: String,
	/// IP address of the end user, when known.
	pub ip_address: Option<String>,
}

impl CheckRequest {
	pub fn new(request_id: impl Into<String>, code: impl Into<String>) -> Self {
		Self {
			request_id: request_id.into(),
			code: code.into(),
			ip_address: None,
		}
	}

	#[must_use]
	pub fn with_ip_address(mut self, ip_address: impl Into<String>) -> Self {
		self.ip_address = Some(ip_address.into());
		self
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResponse {
	pub request_id: Option<String>,
	pub status: VerifyStatus,
	pub event_id: Option<String>,
	/// Cost of the verification. Zero when the server leaves it out.
	pub price: BigDecimal,
	pub currency: Option<String>,
	pub error_text: Option<String>,
}

impl CheckResponse {
	pub fn status_code(&self) -> i32 {
		self.status.code()
	}
}

#[derive(Debug, Deserialize)]
struct RawCheckResponse {
	request_id: Option<String>,
	status: Option<VerifyStatus>,
	event_id: Option<String>,
	price: Option<String>,
	currency: Option<String>,
	error_text: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckEndpoint;

impl Endpoint for CheckEndpoint {
	type Request = CheckRequest;
	type Response = CheckResponse;

	fn make_request(&self, req: &CheckRequest) -> ApiRequest {
		ApiRequest::post(ApiHost::Api, PATH)
			.with_param("request_id", &req.request_id)
			.with_param("code", &req.code)
			.with_optional_param("ip_address", req.ip_address.as_ref())
	}

	fn parse_response(&self, resp: ApiResponse) -> Result<CheckResponse, ClientError> {
		check_status(&resp)?;
		let raw: RawCheckResponse = deserialize_body(&resp)?;

		let status = raw.status.ok_or(ResponseParseError::MissingField("status"))?;
		let price = parse_price(raw.price)?;
		Ok(CheckResponse {
			request_id: raw.request_id,
			status,
			event_id: raw.event_id,
			price,
			currency: raw.currency,
			error_text: raw.error_text,
		})
	}
}

fn parse_price(raw: Option<String>) -> Result<BigDecimal, ResponseParseError> {
	match raw {
		None => Ok(BigDecimal::zero()),
		Some(raw) => BigDecimal::from_str(raw.trim()).map_err(|_| ResponseParseError::InvalidField {
			field: "price",
			value: raw,
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(body: &str) -> Result<CheckResponse, ClientError> {
		CheckEndpoint.parse_response(ApiResponse::new(200, body))
	}

	#[test]
	fn test_make_request_with_ip() {
		let req = CheckRequest::new("a-request-id", "1234").with_ip_address("127.0.0.1");
		let apireq = CheckEndpoint.make_request(&req);

		assert_eq!(apireq.method(), &reqwest::Method::POST);
		assert_eq!(apireq.host(), ApiHost::Api);
		assert_eq!(apireq.path(), "/verify/check/json");
		assert_eq!(apireq.param("request_id"), Some("a-request-id"));
		assert_eq!(apireq.param("code"), Some("1234"));
		assert_eq!(apireq.param("ip_address"), Some("127.0.0.1"));
	}

	#[test]
	fn test_make_request_without_ip() {
		let apireq = CheckEndpoint.make_request(&CheckRequest::new("a-request-id", "1234"));
		assert_eq!(apireq.param("ip_address"), None);
		assert_eq!(apireq.params().len(), 2);
	}

	#[test]
	fn test_valid_response() {
		let resp = parse(include_str!("../fixtures/verify/check-success.json")).unwrap();

		assert_eq!(resp.request_id.as_deref(), Some("a-request-id"));
		assert_eq!(resp.status, VerifyStatus::Ok);
		assert_eq!(resp.status_code(), 0);
		assert_eq!(resp.event_id.as_deref(), Some("an-event-id"));
		assert_eq!(resp.price, BigDecimal::from_str("0.10000000").unwrap());
		assert_eq!(resp.currency.as_deref(), Some("EUR"));
		assert_eq!(resp.error_text, None);
	}

	#[test]
	fn test_without_request_id() {
		let resp = parse(
			r#"{"status": "0", "event_id": "an-event-id", "price": "0.10000000", "currency": "EUR"}"#,
		)
		.unwrap();
		assert_eq!(resp.request_id, None);
	}

	#[test]
	fn test_without_status_is_parse_error() {
		let result = parse(
			r#"{"request_id": "a-request-id", "event_id": "an-event-id", "price": "0.10000000", "currency": "EUR"}"#,
		);
		assert!(
			matches!(
				result,
				Err(ClientError::ResponseParse(ResponseParseError::MissingField("status")))
			),
			"got: {:?}",
			result
		);
	}

	#[test]
	fn test_non_numeric_status() {
		let resp = parse(
			r#"{"request_id": "a-request-id", "status": "test", "event_id": "an-event-id", "price": "0.10000000", "currency": "EUR"}"#,
		)
		.unwrap();
		assert_eq!(resp.status, VerifyStatus::InternalError);
		assert_eq!(resp.status_code(), 5);
	}

	#[test]
	fn test_without_event_id() {
		let resp = parse(
			r#"{"request_id": "a-request-id", "status": "0", "price": "0.10000000", "currency": "EUR"}"#,
		)
		.unwrap();
		assert_eq!(resp.event_id, None);
	}

	#[test]
	fn test_without_price() {
		let resp = parse(
			r#"{"request_id": "a-request-id", "status": "0", "event_id": "an-event-id", "currency": "EUR"}"#,
		)
		.unwrap();
		assert!(resp.price.is_zero());
	}

	#[test]
	fn test_non_numeric_price_is_parse_error() {
		let result = parse(
			r#"{"request_id": "a-request-id", "status": "0", "event_id": "an-event-id", "price": "test", "currency": "EUR"}"#,
		);
		match result {
			Err(ClientError::ResponseParse(ResponseParseError::InvalidField { field, value })) => {
				assert_eq!(field, "price");
				assert_eq!(value, "test");
			}
			other => panic!("expected invalid price error, got {:?}", other),
		}
	}

	#[test]
	fn test_without_currency() {
		let resp = parse(
			r#"{"request_id": "a-request-id", "status": "0", "event_id": "an-event-id", "price": "0.10000000"}"#,
		)
		.unwrap();
		assert_eq!(resp.currency, None);
	}

	#[test]
	fn test_error_response() {
		let resp = parse(include_str!("../fixtures/verify/check-error.json")).unwrap();
		assert_eq!(resp.status, VerifyStatus::MissingParams);
		assert_eq!(resp.status_code(), 2);
		assert_eq!(resp.error_text.as_deref(), Some("There was an error."));
	}

	#[test]
	fn test_unrecognized_numeric_status() {
		let resp = parse(r#"{"status": "5958"}"#).unwrap();
		assert_eq!(resp.status, VerifyStatus::Unknown);
		assert_eq!(resp.status_code(), i32::MAX);
	}

	#[test]
	fn test_malformed_json() {
		let result = parse("{\"status\": ");
		assert!(matches!(result, Err(ClientError::ResponseParse(ResponseParseError::Json(_)))));
	}

	#[test]
	fn test_request_throttle_response() {
		let result = CheckEndpoint.parse_response(ApiResponse::new(
			429,
			include_str!("../fixtures/verify/check-success.json"),
		));
		assert!(matches!(result, Err(ClientError::Throttled)));
	}
}
