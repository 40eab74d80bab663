use secrecy::{ExposeSecret, SecretString};

use crate::request::ApiHost;

pub const DEFAULT_API_BASE_URI: &str = "https://api.nexmo.com";
pub const DEFAULT_REST_BASE_URI: &str = "https://rest.nexmo.com";

/// Base URIs for the two API hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
	api_base_uri: String,
	rest_base_uri: String,
}

impl Default for HttpConfig {
	fn default() -> Self {
		Self {
			api_base_uri: DEFAULT_API_BASE_URI.into(),
			rest_base_uri: DEFAULT_REST_BASE_URI.into(),
		}
	}
}

impl HttpConfig {
	#[must_use]
	pub fn with_api_base_uri(mut self, uri: impl Into<String>) -> Self {
		self.api_base_uri = strip_trailing_slash(uri.into());
		self
	}

	#[must_use]
	pub fn with_rest_base_uri(mut self, uri: impl Into<String>) -> Self {
		self.rest_base_uri = strip_trailing_slash(uri.into());
		self
	}

	pub fn api_base_uri(&self) -> &str {
		&self.api_base_uri
	}

	pub fn rest_base_uri(&self) -> &str {
		&self.rest_base_uri
	}

	pub fn base_uri(&self, host: ApiHost) -> &str {
		match host {
			ApiHost::Api => self.api_base_uri(),
			ApiHost::Rest => self.rest_base_uri(),
		}
	}
}

fn strip_trailing_slash(uri: String) -> String {
	uri.trim_end_matches('/').to_owned()
}

/// Account credentials sent with every request.
///
/// The secret is wrapped so it never shows up in `Debug` output or logs.
#[derive(Debug, Clone)]
pub struct Credentials {
	api_key: String,
	api_secret: SecretString,
}

impl Credentials {
	pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
		Self {
			api_key: api_key.into(),
			api_secret: SecretString::new(api_secret.into()),
		}
	}

	pub fn api_key(&self) -> &str {
		&self.api_key
	}

	pub(crate) fn api_secret(&self) -> &str {
		self.api_secret.expose_secret()
	}
}
