use thiserror::Error;

use crate::transport::TransportError;

#[derive(Debug, Error)]
pub enum ClientError {
	#[error("Request was throttled by the server (HTTP 429).")]
	Throttled,
	#[error("Failed to parse response: {0}")]
	ResponseParse(#[from] ResponseParseError),
	#[error("Server responded with status {status}: {}", .error_text.as_deref().unwrap_or("no error text"))]
	Api {
		status: String,
		error_text: Option<String>,
	},
	#[error("Server responded with HTTP {status}: {body}")]
	HttpStatus { status: u16, body: String },
	#[error("Transport error: {0}")]
	Transport(#[from] TransportError),
}

impl From<serde_path_to_error::Error<serde_json::Error>> for ClientError {
	fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
		ClientError::ResponseParse(err.into())
	}
}

/// The response body could not be turned into the expected type.
#[derive(Debug, Error)]
pub enum ResponseParseError {
	#[error("Failed to deserialize response: {0}")]
	Json(#[from] serde_path_to_error::Error<serde_json::Error>),
	#[error("Missing required field `{0}`")]
	MissingField(&'static str),
	#[error("Field `{field}` has an invalid value: {value:?}")]
	InvalidField { field: &'static str, value: String },
}
