mod list;
mod search;

pub use list::{ListNumbersEndpoint, ListNumbersFilter, ListNumbersResponse, OwnedNumber};
pub use search::{
	AvailableNumber, ParseSearchPatternError, SearchNumbersEndpoint, SearchNumbersFilter,
	SearchNumbersResponse, SearchPattern,
};

use crate::{endpoint, error::ClientError, transport::Transport};

/// A client for the Numbers API.
#[derive(Debug)]
pub struct NumbersClient<T>
where
	T: Transport,
{
	transport: T,
}

impl<T> NumbersClient<T>
where
	T: Transport,
{
	#[must_use]
	pub fn new(transport: T) -> Self {
		Self { transport }
	}

	/// Search for numbers that are available to buy.
	///
	/// Host: rest.nexmo.com
	/// Endpoint: `GET /number/search`
	pub fn search_numbers(
		&self,
		filter: &SearchNumbersFilter,
	) -> Result<SearchNumbersResponse, ClientError> {
		endpoint::execute(&self.transport, &SearchNumbersEndpoint, filter)
	}

	/// List the numbers owned by the account.
	///
	/// Host: rest.nexmo.com
	/// Endpoint: `GET /account/numbers`
	pub fn list_numbers(&self, filter: &ListNumbersFilter) -> Result<ListNumbersResponse, ClientError> {
		endpoint::execute(&self.transport, &ListNumbersEndpoint, filter)
	}
}
