use std::str::FromStr;

use num_enum::IntoPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
	endpoint::{deserialize_body, check_status, Endpoint},
	error::ClientError,
	request::{ApiHost, ApiRequest},
	transport::ApiResponse,
};

const PATH: &str = "/number/search";

/// How `pattern` is matched against candidate numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive)]
#[repr(u8)]
pub enum SearchPattern {
	StartsWith = 0,
	Anywhere = 1,
	EndsWith = 2,
}

impl SearchPattern {
	pub fn code(self) -> u8 {
		self.into()
	}
}

#[derive(Debug, Error)]
#[error("Unknown search pattern: {0:?}")]
pub struct ParseSearchPatternError(String);

impl FromStr for SearchPattern {
	type Err = ParseSearchPatternError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"starts-with" | "0" => Ok(SearchPattern::StartsWith),
			"anywhere" | "contains" | "1" => Ok(SearchPattern::Anywhere),
			"ends-with" | "2" => Ok(SearchPattern::EndsWith),
			_ => Err(ParseSearchPatternError(s.to_owned())),
		}
	}
}

/// Criteria for `GET /number/search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNumbersFilter {
	country: String,
	pattern: Option<String>,
	search_pattern: Option<SearchPattern>,
	features: Vec<String>,
	index: Option<u32>,
	size: Option<u32>,
}

impl SearchNumbersFilter {
	/// `country` is a two letter ISO 3166-1 code, eg. `GB`.
	pub fn new(country: impl Into<String>) -> Self {
		Self {
			country: country.into(),
			pattern: None,
			search_pattern: None,
			features: vec![],
			index: None,
			size: None,
		}
	}

	#[must_use]
	pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
		self.pattern = Some(pattern.into());
		self
	}

	#[must_use]
	pub fn with_search_pattern(mut self, search_pattern: SearchPattern) -> Self {
		self.search_pattern = Some(search_pattern);
		self
	}

	/// Replaces the feature set. Duplicates are dropped, first occurrence wins.
	#[must_use]
	pub fn with_features<I, S>(mut self, features: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.features.clear();
		for feature in features {
			let feature = feature.into();
			if !self.features.contains(&feature) {
				self.features.push(feature);
			}
		}
		self
	}

	#[must_use]
	pub fn with_index(mut self, index: u32) -> Self {
		self.index = Some(index);
		self
	}

	#[must_use]
	pub fn with_size(mut self, size: u32) -> Self {
		self.size = Some(size);
		self
	}

	pub fn country(&self) -> &str {
		&self.country
	}

	pub fn features(&self) -> &[String] {
		&self.features
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchNumbersResponse {
	pub count: u32,
	#[serde(default)]
	pub numbers: Vec<AvailableNumber>,
}

/// A number that can be bought.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailableNumber {
	pub country: String,
	pub msisdn: String,
	/// Monthly cost, kept exactly as the server formats it.
	pub cost: Option<String>,
	#[serde(rename = "type")]
	pub number_type: Option<String>,
	pub features: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchNumbersEndpoint;

impl Endpoint for SearchNumbersEndpoint {
	type Request = SearchNumbersFilter;
	type Response = SearchNumbersResponse;

	fn make_request(&self, filter: &SearchNumbersFilter) -> ApiRequest {
		let features = if filter.features.is_empty() {
			None
		} else {
			Some(filter.features.join(","))
		};

		ApiRequest::get(ApiHost::Rest, PATH)
			.with_param("country", &filter.country)
			.with_optional_param("pattern", filter.pattern.as_ref())
			.with_optional_param("search_pattern", filter.search_pattern.map(SearchPattern::code))
			.with_optional_param("features", features)
			.with_optional_param("index", filter.index)
			.with_optional_param("size", filter.size)
	}

	fn parse_response(&self, resp: ApiResponse) -> Result<SearchNumbersResponse, ClientError> {
		check_status(&resp)?;
		deserialize_body(&resp)
	}
}
