use clap::{Parser, Subcommand};
use log::*;
use nexmo::{
	numbers::{ListNumbersFilter, SearchNumbersFilter, SearchPattern},
	transport::Transport,
	NumbersClient,
};

use super::*;

#[derive(Debug, Clone, Subcommand)]
pub enum NumbersCommand {
	Search(SearchArgs),
	List(ListArgs),
}

#[derive(Debug, Clone, Parser)]
#[clap(about = "Search for numbers available to buy")]
pub struct SearchArgs {
	#[clap(help = "Two letter country code, eg. GB")]
	pub country: String,
	#[clap(long, help = "Digits the number should contain.")]
	pub pattern: Option<String>,
	#[clap(
		long,
		help = "Where to match the pattern: starts-with, anywhere, or ends-with."
	)]
	pub search_pattern: Option<SearchPattern>,
	#[clap(
		long,
		value_delimiter = ',',
		help = "Required capabilities, comma separated. eg. SMS,VOICE"
	)]
	pub features: Vec<String>,
	#[clap(long)]
	pub index: Option<u32>,
	#[clap(long)]
	pub size: Option<u32>,
}

impl SearchArgs {
	fn to_filter(&self) -> SearchNumbersFilter {
		let mut filter = SearchNumbersFilter::new(self.country.to_uppercase())
			.with_features(self.features.iter().cloned());
		if let Some(pattern) = &self.pattern {
			filter = filter.with_pattern(pattern.clone());
		}
		if let Some(search_pattern) = self.search_pattern {
			filter = filter.with_search_pattern(search_pattern);
		}
		if let Some(index) = self.index {
			filter = filter.with_index(index);
		}
		if let Some(size) = self.size {
			filter = filter.with_size(size);
		}
		filter
	}
}

#[derive(Debug, Clone, Parser)]
#[clap(about = "List the numbers your account owns")]
pub struct ListArgs {
	#[clap(long)]
	pub pattern: Option<String>,
	#[clap(long)]
	pub search_pattern: Option<SearchPattern>,
	#[clap(long)]
	pub index: Option<u32>,
	#[clap(long)]
	pub size: Option<u32>,
}

impl ApiCommand for NumbersCommand {
	fn execute(&self, transport: &dyn Transport) -> anyhow::Result<()> {
		let client = NumbersClient::new(transport);
		match self {
			NumbersCommand::Search(args) => {
				let filter = args.to_filter();
				debug!("searching numbers: {:?}", filter);
				let resp = client.search_numbers(&filter)?;
				info!("{} numbers match, showing {}", resp.count, resp.numbers.len());
				print_json(&resp)
			}
			NumbersCommand::List(args) => {
				let filter = ListNumbersFilter {
					pattern: args.pattern.clone(),
					search_pattern: args.search_pattern,
					index: args.index,
					size: args.size,
				};
				let resp = client.list_numbers(&filter)?;
				info!("account owns {} numbers", resp.count);
				print_json(&resp)
			}
		}
	}
}
