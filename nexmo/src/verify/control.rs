use serde::{Deserialize, Serialize};

use crate::{
	endpoint::{deserialize_body, check_status, Endpoint},
	error::ClientError,
	request::{ApiHost, ApiRequest},
	transport::ApiResponse,
};

const PATH: &str = "/verify/control/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyControlCommand {
	Cancel,
	TriggerNextEvent,
}

impl VerifyControlCommand {
	fn to_cmd(self) -> &'static str {
		match self {
			VerifyControlCommand::Cancel => "cancel",
			VerifyControlCommand::TriggerNextEvent => "trigger_next_event",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlRequest {
	pub request_id: String,
	pub command: VerifyControlCommand,
}

/// Outcome of a successful control command. A failed command never produces
/// one; its `error_text` travels in [`ClientError::Api`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlResponse {
	pub status: String,
	pub command: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawControlResponse {
	status: String,
	command: Option<String>,
	error_text: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ControlEndpoint;

impl Endpoint for ControlEndpoint {
	type Request = ControlRequest;
	type Response = ControlResponse;

	fn make_request(&self, req: &ControlRequest) -> ApiRequest {
		ApiRequest::post(ApiHost::Api, PATH)
			.with_param("request_id", &req.request_id)
			.with_param("cmd", req.command.to_cmd())
	}

	/// A non-zero status comes back as [`ClientError::Api`].
	fn parse_response(&self, resp: ApiResponse) -> Result<ControlResponse, ClientError> {
		check_status(&resp)?;
		let raw: RawControlResponse = deserialize_body(&resp)?;
		if raw.status != "0" {
			return Err(ClientError::Api {
				status: raw.status,
				error_text: raw.error_text,
			});
		}
		Ok(ControlResponse {
			status: raw.status,
			command: raw.command,
		})
	}
}
