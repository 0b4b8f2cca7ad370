use clap::Parser;
use log::*;
use phonetrack::{BundledProvider, Iso3166Registry, NumberLookupService};

use crate::commands::{CommandType, GlobalArgs, LookupCommand, Subcommands};

mod commands;
mod errors;
mod panel;
mod render;
mod tui;

type BundledService = NumberLookupService<BundledProvider, Iso3166Registry>;

fn main() {
	std::process::exit(match run() {
		Ok(_) => 0,
		Err(e) => {
			error!("{}", e);
			1
		}
	});
}

fn run() -> anyhow::Result<()> {
	let args = commands::Args::parse();

	stderrlog::new()
		.verbosity(args.global.verbosity as usize)
		.module(module_path!())
		.module("phonetrack")
		.init()?;
	debug!("{:?}", args);

	let cmd: CommandType<BundledProvider, Iso3166Registry> = match args.sub.clone() {
		Some(Subcommands::Lookup(cmd)) => CommandType::Service(Box::new(cmd)),
		Some(Subcommands::Interactive(cmd)) => CommandType::Service(Box::new(cmd)),
		Some(Subcommands::Completion(cmd)) => CommandType::Const(Box::new(cmd)),
		None => CommandType::Service(Box::new(LookupCommand::from(args.clone()))),
	};

	match cmd {
		CommandType::Const(cmd) => cmd.execute(),
		CommandType::Service(cmd) => {
			let service = load_service(&args.global)?;
			cmd.execute(&service, &args.global)
		}
	}
}

fn load_service(args: &GlobalArgs) -> anyhow::Result<BundledService> {
	let service = match &args.data_dir {
		Some(dir) => {
			info!("Loading extra phone metadata from {}", dir);
			NumberLookupService::bundled_with_data_dir(dir)?
		}
		None => NumberLookupService::bundled()?,
	};
	Ok(service)
}
