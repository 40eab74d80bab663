mod check;
mod control;
mod start;
mod status;

pub use check::{CheckEndpoint, CheckRequest, CheckResponse};
pub use control::{ControlEndpoint, ControlRequest, ControlResponse, VerifyControlCommand};
pub use start::{CodeLength, VerifyEndpoint, VerifyRequest, VerifyResponse};
pub use status::VerifyStatus;

use crate::{endpoint, error::ClientError, transport::Transport};

/// A client for the Verify API.
#[derive(Debug)]
pub struct VerifyClient<T>
where
	T: Transport,
{
	transport: T,
}

impl<T> VerifyClient<T>
where
	T: Transport,
{
	#[must_use]
	pub fn new(transport: T) -> Self {
		Self { transport }
	}

	/// Start a verification, sending a code to the number in `req`.
	///
	/// Host: api.nexmo.com
	/// Endpoint: `POST /verify/json`
	pub fn verify(&self, req: &VerifyRequest) -> Result<VerifyResponse, ClientError> {
		endpoint::execute(&self.transport, &VerifyEndpoint, req)
	}

	/// Check the code the user entered against a verification started with
	/// [`verify`](Self::verify).
	///
	/// Host: api.nexmo.com
	/// Endpoint: `POST /verify/check/json`
	pub fn check(
		&self,
		request_id: &str,
		code: &str,
		ip_address: Option<&str>,
	) -> Result<CheckResponse, ClientError> {
		let mut req = CheckRequest::new(request_id, code);
		if let Some(ip_address) = ip_address {
			req = req.with_ip_address(ip_address);
		}
		endpoint::execute(&self.transport, &CheckEndpoint, &req)
	}

	/// Endpoint: `POST /verify/control/json` with `cmd=cancel`
	pub fn cancel(&self, request_id: &str) -> Result<ControlResponse, ClientError> {
		self.control(request_id, VerifyControlCommand::Cancel)
	}

	/// Skip to the next delivery attempt, eg. from SMS to a voice call.
	///
	/// Endpoint: `POST /verify/control/json` with `cmd=trigger_next_event`
	pub fn advance(&self, request_id: &str) -> Result<ControlResponse, ClientError> {
		self.control(request_id, VerifyControlCommand::TriggerNextEvent)
	}

	fn control(
		&self,
		request_id: &str,
		command: VerifyControlCommand,
	) -> Result<ControlResponse, ClientError> {
		let req = ControlRequest {
			request_id: request_id.to_owned(),
			command,
		};
		endpoint::execute(&self.transport, &ControlEndpoint, &req)
	}
}
