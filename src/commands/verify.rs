use std::convert::TryFrom;

use clap::{Parser, Subcommand};
use log::*;
use nexmo::{
	transport::Transport,
	verify::{CodeLength, VerifyRequest},
	VerifyClient,
};

use super::*;

#[derive(Debug, Clone, Subcommand)]
pub enum VerifyCommand {
	Start(StartArgs),
	Check(CheckArgs),
	#[clap(about = "Cancel a verification")]
	Cancel {
		request_id: String,
	},
	#[clap(about = "Skip to the next delivery attempt of a verification")]
	Next {
		request_id: String,
	},
}

#[derive(Debug, Clone, Parser)]
#[clap(about = "Send a verification code to a phone number")]
pub struct StartArgs {
	#[clap(help = "Phone number in E.164 format, eg. 447700900000")]
	pub number: String,
	#[clap(help = "Name of your company or app, shown in the message.")]
	pub brand: String,
	#[clap(long, help = "Number of digits in the code, 4 or 6.")]
	pub code_length: Option<u8>,
	#[clap(long)]
	pub sender_id: Option<String>,
	#[clap(long, help = "Locale of the message, eg. en-gb")]
	pub locale: Option<String>,
}

impl StartArgs {
	fn to_request(&self) -> anyhow::Result<VerifyRequest> {
		let mut req = VerifyRequest::new(self.number.as_str(), self.brand.as_str());
		if let Some(len) = self.code_length {
			let len = CodeLength::try_from(len)
				.map_err(|_| anyhow::anyhow!("code length must be 4 or 6, got {}", len))?;
			req = req.with_code_length(len);
		}
		if let Some(sender_id) = &self.sender_id {
			req = req.with_sender_id(sender_id.as_str());
		}
		if let Some(locale) = &self.locale {
			req = req.with_locale(locale.as_str());
		}
		Ok(req)
	}
}

#[derive(Debug, Clone, Parser)]
#[clap(about = "Check a code the user entered")]
pub struct CheckArgs {
	pub request_id: String,
	pub code: String,
	#[clap(long, help = "IP address of the user who entered the code.")]
	pub ip: Option<String>,
}

impl ApiCommand for VerifyCommand {
	fn execute(&self, transport: &dyn Transport) -> anyhow::Result<()> {
		let client = VerifyClient::new(transport);
		match self {
			VerifyCommand::Start(args) => {
				let resp = client.verify(&args.to_request()?)?;
				if !resp.status.is_ok() {
					warn!(
						"verification was not started: {}",
						resp.error_text.as_deref().unwrap_or("no error text")
					);
				}
				print_json(&resp)
			}
			VerifyCommand::Check(args) => {
				let resp = client.check(&args.request_id, &args.code, args.ip.as_deref())?;
				if resp.status.is_ok() {
					info!("code accepted");
				} else {
					warn!(
						"code rejected with status {}: {}",
						resp.status_code(),
						resp.error_text.as_deref().unwrap_or("no error text")
					);
				}
				print_json(&resp)
			}
			VerifyCommand::Cancel { request_id } => print_json(&client.cancel(request_id)?),
			VerifyCommand::Next { request_id } => print_json(&client.advance(request_id)?),
		}
	}
}
