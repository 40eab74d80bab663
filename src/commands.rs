use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use nexmo::transport::Transport;

pub mod completions;
pub mod numbers;
pub mod verify;

pub use completions::CompletionsCommand;
pub use numbers::NumbersCommand;
pub use verify::VerifyCommand;

/// A command that does not talk to the API.
pub(crate) trait ConstCommand {
	fn execute(&self) -> anyhow::Result<()>;
}

/// A command that sends requests through a transport.
pub(crate) trait ApiCommand {
	fn execute(&self, transport: &dyn Transport) -> anyhow::Result<()>;
}

pub(crate) enum CommandType {
	Const(Box<dyn ConstCommand>),
	Api(Box<dyn ApiCommand>),
}

#[derive(Debug, Clone, Parser)]
#[clap(name="nexmo-cli", bin_name="nexmo", author, version, about = "Search Nexmo numbers and run Verify requests from the command line.", long_about = None)]
pub(crate) struct Args {
	#[clap(flatten)]
	pub global: GlobalArgs,

	#[clap(subcommand)]
	pub sub: Subcommands,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct GlobalArgs {
	#[clap(
		short,
		long,
		help = "Path to the config file. Default: ~/.config/nexmo-cli/config.json"
	)]
	pub config: Option<PathBuf>,
	#[clap(long, env = "NEXMO_API_KEY", help = "Your account's API key.")]
	pub api_key: Option<String>,
	#[clap(
		long,
		env = "NEXMO_API_SECRET",
		hide_env_values = true,
		help = "Your account's API secret."
	)]
	pub api_secret: Option<String>,
	#[clap(long, help = "Override the base URI of the Verify host.")]
	pub api_base_uri: Option<String>,
	#[clap(long, help = "Override the base URI of the Numbers host.")]
	pub rest_base_uri: Option<String>,
	#[clap(short, long, value_enum, default_value_t=Verbosity::Info, help = "Set the log level. Be warned, trace will print request parameters.")]
	pub verbosity: Verbosity,
}

#[derive(Debug, Clone, Parser)]
pub(crate) enum Subcommands {
	Completion(CompletionsCommand),
	/// Search for and list phone numbers
	#[clap(subcommand)]
	Numbers(NumbersCommand),
	/// Send and check verification codes
	#[clap(subcommand)]
	Verify(VerifyCommand),
}

impl From<Subcommands> for CommandType {
	fn from(sub: Subcommands) -> Self {
		match sub {
			Subcommands::Completion(cmd) => CommandType::Const(Box::new(cmd)),
			Subcommands::Numbers(cmd) => CommandType::Api(Box::new(cmd)),
			Subcommands::Verify(cmd) => CommandType::Api(Box::new(cmd)),
		}
	}
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Verbosity {
	Error = 0,
	Warn = 1,
	Info = 2,
	Debug = 3,
	Trace = 4,
}

impl std::fmt::Display for Verbosity {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_fmt(format_args!(
			"{}",
			match self {
				Verbosity::Error => "error",
				Verbosity::Warn => "warn",
				Verbosity::Info => "info",
				Verbosity::Debug => "debug",
				Verbosity::Trace => "trace",
			}
		))
	}
}

/// Prints a response as pretty JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}
