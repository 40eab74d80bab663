use log::*;
use reqwest::Method;

use super::{ApiResponse, Transport, TransportError};
use crate::{
	config::{Credentials, HttpConfig},
	request::ApiRequest,
};

/// Sends requests over HTTPS with a blocking `reqwest` client.
#[derive(Debug)]
pub struct WebApiTransport {
	client: reqwest::blocking::Client,
	config: HttpConfig,
	credentials: Credentials,
}

impl WebApiTransport {
	pub fn new(credentials: Credentials, config: HttpConfig) -> Result<Self, TransportError> {
		let client = reqwest::blocking::ClientBuilder::new()
			.user_agent(concat!("nexmo-rs/", env!("CARGO_PKG_VERSION")))
			.build()?;
		Ok(Self {
			client,
			config,
			credentials,
		})
	}

	pub fn config(&self) -> &HttpConfig {
		&self.config
	}
}

impl WebApiTransport {
	/// Attaches credentials to `apireq` and lays out its parameters: in the
	/// query string for GET, as a urlencoded form body otherwise.
	fn build_request(&self, apireq: &ApiRequest) -> reqwest::blocking::RequestBuilder {
		let url = apireq.build_url(&self.config);
		debug!("HTTP Request: {} {}", apireq.method(), url);

		let mut params: Vec<(&str, &str)> = apireq
			.params()
			.iter()
			.map(|(k, v)| (*k, v.as_str()))
			.collect();
		trace!("Request params: {:?}", params);
		params.push(("api_key", self.credentials.api_key()));
		params.push(("api_secret", self.credentials.api_secret()));

		let req = self.client.request(apireq.method().clone(), &url);
		if *apireq.method() == Method::GET {
			req.query(&params)
		} else {
			req.form(&params)
		}
	}
}

impl Transport for WebApiTransport {
	fn send_request(&self, apireq: ApiRequest) -> Result<ApiResponse, TransportError> {
		let resp = self.build_request(&apireq).send()?;
		let status = resp.status().as_u16();
		debug!("Response HTTP status: {}", status);

		let body = resp.text()?;
		trace!("Response body: {}", body);
		Ok(ApiResponse::new(status, body))
	}
}
