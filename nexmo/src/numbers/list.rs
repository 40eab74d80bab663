use serde::{Deserialize, Serialize};

use super::SearchPattern;
use crate::{
	endpoint::{deserialize_body, check_status, Endpoint},
	error::ClientError,
	request::{ApiHost, ApiRequest},
	transport::ApiResponse,
};

const PATH: &str = "/account/numbers";

/// Criteria for `GET /account/numbers`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListNumbersFilter {
	pub pattern: Option<String>,
	pub search_pattern: Option<SearchPattern>,
	pub index: Option<u32>,
	pub size: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListNumbersResponse {
	pub count: u32,
	#[serde(default)]
	pub numbers: Vec<OwnedNumber>,
}

/// A number already rented by the account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnedNumber {
	pub country: String,
	pub msisdn: String,
	#[serde(rename = "type")]
	pub number_type: Option<String>,
	pub features: Vec<String>,
	#[serde(rename = "moHttpUrl")]
	pub mo_http_url: Option<String>,
	#[serde(rename = "voiceCallbackType")]
	pub voice_callback_type: Option<String>,
	#[serde(rename = "voiceCallbackValue")]
	pub voice_callback_value: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListNumbersEndpoint;

impl Endpoint for ListNumbersEndpoint {
	type Request = ListNumbersFilter;
	type Response = ListNumbersResponse;

	fn make_request(&self, filter: &ListNumbersFilter) -> ApiRequest {
		ApiRequest::get(ApiHost::Rest, PATH)
			.with_optional_param("pattern", filter.pattern.as_ref())
			.with_optional_param("search_pattern", filter.search_pattern.map(SearchPattern::code))
			.with_optional_param("index", filter.index)
			.with_optional_param("size", filter.size)
	}

	fn parse_response(&self, resp: ApiResponse) -> Result<ListNumbersResponse, ClientError> {
		check_status(&resp)?;
		deserialize_body(&resp)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_make_request_without_criteria() {
		let req = ListNumbersEndpoint.make_request(&ListNumbersFilter::default());
		assert_eq!(req.method(), &reqwest::Method::GET);
		assert_eq!(req.path(), "/account/numbers");
		assert!(req.params().is_empty());
	}

	#[test]
	fn test_make_request_with_criteria() {
		let filter = ListNumbersFilter {
			pattern: Some("447700".into()),
			search_pattern: Some(SearchPattern::EndsWith),
			index: Some(2),
			size: Some(50),
		};
		let req = ListNumbersEndpoint.make_request(&filter);
		assert_eq!(req.param("pattern"), Some("447700"));
		assert_eq!(req.param("search_pattern"), Some("2"));
		assert_eq!(req.param("index"), Some("2"));
		assert_eq!(req.param("size"), Some("50"));
	}

	#[test]
	fn test_parse_response() {
		let resp = ApiResponse::new(200, include_str!("../fixtures/numbers/list-response.json"));
		let resp = ListNumbersEndpoint.parse_response(resp).unwrap();

		assert_eq!(resp.count, 1);
		let number = &resp.numbers[0];
		assert_eq!(number.msisdn, "447700900001");
		assert_eq!(number.number_type.as_deref(), Some("mobile-lvn"));
		assert_eq!(number.mo_http_url.as_deref(), Some("https://example.com/inbound"));
		assert_eq!(number.voice_callback_type.as_deref(), Some("app"));
		assert_eq!(number.voice_callback_value, None);
	}

	#[test]
	fn test_parse_response_without_numbers() {
		let resp = ApiResponse::new(200, "{\"count\": 0}");
		let resp = ListNumbersEndpoint.parse_response(resp).unwrap();
		assert_eq!(resp.count, 0);
		assert!(resp.numbers.is_empty());
	}

	#[test]
	fn test_parse_response_without_count() {
		let result = ListNumbersEndpoint.parse_response(ApiResponse::new(200, "{}"));
		assert!(matches!(result, Err(ClientError::ResponseParse(_))));
	}

	#[test]
	fn test_parse_authentication_failure() {
		let resp = ApiResponse::new(
			401,
			r#"{"error-code":"401","error-code-label":"authentication failed"}"#,
		);
		let result = ListNumbersEndpoint.parse_response(resp);
		assert!(matches!(result, Err(ClientError::HttpStatus { status: 401, .. })));
	}

	#[test]
	fn test_request_throttle_response() {
		let resp = ApiResponse::new(429, "{\"count\": 0}");
		let result = ListNumbersEndpoint.parse_response(resp);
		assert!(matches!(result, Err(ClientError::Throttled)));
	}
}
