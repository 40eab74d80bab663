use std::convert::TryFrom;

use log::*;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Deserializer, Serialize};

/// Result codes reported in the `status` field of Verify responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Serialize)]
#[repr(i32)]
pub enum VerifyStatus {
	Ok = 0,
	Throttled = 1,
	MissingParams = 2,
	InvalidParams = 3,
	InvalidCredentials = 4,
	InternalError = 5,
	InvalidRequest = 6,
	NumberBarred = 7,
	PartnerAccountBarred = 8,
	PartnerQuotaExceeded = 9,
	AlreadyRequested = 10,
	UnsupportedNetwork = 15,
	InvalidCode = 16,
	WrongCodeThrottled = 17,
	TooManyDestinationNumbers = 18,
	NoResponse = 101,
	/// A numeric status that is not one of the codes above. Its code is `i32::MAX`.
	Unknown = 2147483647,
}

impl VerifyStatus {
	pub fn code(self) -> i32 {
		self.into()
	}

	pub fn is_ok(self) -> bool {
		self == VerifyStatus::Ok
	}

	/// Interprets a raw `status` value.
	///
	/// Text that is not an integer becomes [`VerifyStatus::InternalError`],
	/// and so does surrounding whitespace. An integer that is not a known
	/// code, including one too large for an `i32`, becomes
	/// [`VerifyStatus::Unknown`].
	pub fn from_status_str(raw: &str) -> Self {
		if !is_integer_literal(raw) {
			warn!("non-numeric verify status {:?}, treating as internal error", raw);
			return VerifyStatus::InternalError;
		}

		match raw.parse::<i64>() {
			Ok(code) => VerifyStatus::from_code(code),
			Err(_) => {
				warn!("verify status {} is out of range", raw);
				VerifyStatus::Unknown
			}
		}
	}

	/// Same rules as [`from_status_str`](Self::from_status_str), for a status
	/// sent as a bare JSON number.
	pub fn from_json_number(n: &serde_json::Number) -> Self {
		if let Some(code) = n.as_i64() {
			return VerifyStatus::from_code(code);
		}
		if n.as_u64().is_some() {
			warn!("verify status {} is out of range", n);
			return VerifyStatus::Unknown;
		}
		match n.as_f64() {
			Some(f) if f.fract() == 0.0 => VerifyStatus::from_code(f as i64),
			_ => {
				warn!("non-integer verify status {}, treating as internal error", n);
				VerifyStatus::InternalError
			}
		}
	}

	fn from_code(code: i64) -> Self {
		match i32::try_from(code)
			.ok()
			.and_then(|code| VerifyStatus::try_from(code).ok())
		{
			Some(status) => status,
			None => {
				warn!("unrecognized verify status {}", code);
				VerifyStatus::Unknown
			}
		}
	}
}

fn is_integer_literal(s: &str) -> bool {
	let digits = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
	!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// The server sends `status` as a string, but tolerate a bare number too.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawStatus {
	Text(String),
	Number(serde_json::Number),
}

impl<'de> Deserialize<'de> for VerifyStatus {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let status = match RawStatus::deserialize(deserializer)? {
			RawStatus::Text(s) => VerifyStatus::from_status_str(&s),
			RawStatus::Number(n) => VerifyStatus::from_json_number(&n),
		};
		Ok(status)
	}
}
