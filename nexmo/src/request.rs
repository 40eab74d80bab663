use reqwest::Method;

use crate::config::HttpConfig;

/// Which of the two API hosts a request is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiHost {
	/// `api.nexmo.com`, serves Verify.
	Api,
	/// `rest.nexmo.com`, serves Numbers.
	Rest,
}

/// An outbound request, before credentials are attached.
///
/// Parameters keep the order they were added in. The transport decides
/// whether they travel in the query string or a form body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
	method: Method,
	host: ApiHost,
	path: &'static str,
	params: Vec<(&'static str, String)>,
}

impl ApiRequest {
	pub fn new(method: Method, host: ApiHost, path: &'static str) -> Self {
		Self {
			method,
			host,
			path,
			params: vec![],
		}
	}

	pub fn get(host: ApiHost, path: &'static str) -> Self {
		Self::new(Method::GET, host, path)
	}

	pub fn post(host: ApiHost, path: &'static str) -> Self {
		Self::new(Method::POST, host, path)
	}

	#[must_use]
	pub fn with_param(mut self, name: &'static str, value: impl ToString) -> Self {
		self.params.push((name, value.to_string()));
		self
	}

	/// Adds the parameter only when `value` is `Some`.
	#[must_use]
	pub fn with_optional_param<V: ToString>(self, name: &'static str, value: Option<V>) -> Self {
		match value {
			Some(value) => self.with_param(name, value),
			None => self,
		}
	}

	pub fn method(&self) -> &Method {
		&self.method
	}

	pub fn host(&self) -> ApiHost {
		self.host
	}

	pub fn path(&self) -> &str {
		self.path
	}

	pub fn params(&self) -> &[(&'static str, String)] {
		&self.params
	}

	/// Looks up the first parameter with the given name.
	pub fn param(&self, name: &str) -> Option<&str> {
		self.params
			.iter()
			.find(|(k, _)| *k == name)
			.map(|(_, v)| v.as_str())
	}

	pub fn build_url(&self, config: &HttpConfig) -> String {
		format!("{}{}", config.base_uri(self.host), self.path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_optional_param_is_skipped_when_none() {
		let req = ApiRequest::get(ApiHost::Rest, "/number/search")
			.with_param("country", "GB")
			.with_optional_param("size", None::<u32>)
			.with_optional_param("index", Some(3));

		assert_eq!(req.param("country"), Some("GB"));
		assert_eq!(req.param("size"), None);
		assert_eq!(req.param("index"), Some("3"));
		assert_eq!(req.params().len(), 2);
	}

	#[test]
	fn test_build_url() {
		let req = ApiRequest::post(ApiHost::Api, "/verify/check/json");
		let config = HttpConfig::default().with_api_base_uri("http://localhost:9000");
		assert_eq!(req.build_url(&config), "http://localhost:9000/verify/check/json");
		assert_eq!(req.method(), &Method::POST);
	}
}
