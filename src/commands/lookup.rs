use std::io::{stdout, Write};

use log::*;
use phonetrack::{CountryRegistry, LookupError, MetadataProvider, NumberLookupService};

use crate::{errors::UserError, panel::ResultPanel, render, tui};

use super::*;

#[derive(Debug, Clone, Parser, Default)]
#[clap(about = "Look up one or more phone numbers")]
pub struct LookupCommand {
	#[clap(
		value_name = "NUMBER",
		help = "Phone numbers in international format, eg. \"+12015550123\" or \"+44 121 234 5678\""
	)]
	pub numbers: Vec<String>,
}

impl<P, R> ServiceCommand<P, R> for LookupCommand
where
	P: MetadataProvider,
	R: CountryRegistry,
{
	fn execute(
		&self,
		service: &NumberLookupService<P, R>,
		args: &GlobalArgs,
	) -> anyhow::Result<()> {
		if self.numbers.is_empty() {
			return Err(UserError::NoNumbers.into());
		}

		let color = args.format == OutputFormat::Text && tui::stdout_is_tty();
		let stdout = stdout();
		let mut out = stdout.lock();
		let failed = lookup_all(service, &self.numbers, &mut out, args.format, color)?;
		if failed > 0 {
			return Err(UserError::LookupsFailed {
				failed,
				total: self.numbers.len(),
			}
			.into());
		}
		Ok(())
	}
}

/// Look up every number and print the results. Returns how many lookups failed.
pub(crate) fn lookup_all<P, R, W>(
	service: &NumberLookupService<P, R>,
	numbers: &[String],
	out: &mut W,
	format: OutputFormat,
	color: bool,
) -> anyhow::Result<usize>
where
	P: MetadataProvider,
	R: CountryRegistry,
	W: Write,
{
	let mut failed = 0;
	for (i, number) in numbers.iter().enumerate() {
		info!("Tracking {}", number);
		let outcome = service.lookup(number);
		if let Err(err) = &outcome {
			report_failure(err);
			failed += 1;
		}

		match format {
			OutputFormat::Json => render::write_json(out, number, &outcome)?,
			OutputFormat::Text => {
				if outcome.is_err() {
					continue;
				}
				if numbers.len() > 1 {
					if i > 0 {
						writeln!(out)?;
					}
					render::write_heading(out, number, color)?;
				}
				let mut panel = ResultPanel::new();
				panel.apply(&outcome);
				render::write_panel(out, &panel, color)?;
				debug!("{}", panel.status());
			}
		}
	}
	Ok(failed)
}

pub(crate) fn report_failure(err: &LookupError) {
	if err.is_warning() {
		warn!("{}", err.user_message());
	} else {
		error!("{}", err.user_message());
	}
}
