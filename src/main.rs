use clap::Parser;
use log::*;
use nexmo::transport::WebApiTransport;

use crate::commands::{Args, CommandType};

mod commands;
mod config;

fn main() {
	std::process::exit(match run() {
		Ok(_) => 0,
		Err(e) => {
			error!("{:?}", e);
			255
		}
	});
}

fn run() -> anyhow::Result<()> {
	let args = Args::parse();
	stderrlog::new()
		.verbosity(args.global.verbosity as usize)
		.module(module_path!())
		.init()?;

	let cmd: CommandType = args.sub.into();
	match cmd {
		CommandType::Const(cmd) => cmd.execute(),
		CommandType::Api(cmd) => {
			let path = match &args.global.config {
				Some(path) => path.clone(),
				None => config::default_config_path()
					.ok_or_else(|| anyhow::anyhow!("could not find a config directory, pass --config"))?,
			};
			let file = config::ConfigFile::load(&path)?;
			let settings = config::resolve(&args.global, file)?;
			trace!("using base URIs {:?}", settings.http);

			let transport = WebApiTransport::new(settings.credentials, settings.http)?;
			cmd.execute(&transport)
		}
	}
}
