use std::io::{stdin, stdout, BufRead, Write};

use log::*;
use phonetrack::{CountryRegistry, MetadataProvider, NumberLookupService};

use crate::{commands::lookup::report_failure, panel::ResultPanel, render, tui};

use super::*;

const CLEAR: &str = "clear";
const QUIT: &[&str] = &["quit", "exit"];

#[derive(Debug, Clone, Parser)]
#[clap(
	about = "Look up phone numbers one at a time",
	long_about = "Look up phone numbers one at a time. Enter a number to track it, \"clear\" to reset the results, or \"quit\" to leave."
)]
pub struct InteractiveCommand;

impl<P, R> ServiceCommand<P, R> for InteractiveCommand
where
	P: MetadataProvider,
	R: CountryRegistry,
{
	fn execute(
		&self,
		service: &NumberLookupService<P, R>,
		args: &GlobalArgs,
	) -> anyhow::Result<()> {
		let color = args.format == OutputFormat::Text && tui::stdout_is_tty();
		let stdin = stdin();
		let stdout = stdout();
		run_session(
			service,
			&mut stdin.lock(),
			&mut stdout.lock(),
			args.format,
			color,
		)?;
		Ok(())
	}
}

/// Read numbers from `input` until it closes or the user quits, printing results to `out`.
pub(crate) fn run_session<P, R, I, W>(
	service: &NumberLookupService<P, R>,
	input: &mut I,
	out: &mut W,
	format: OutputFormat,
	color: bool,
) -> anyhow::Result<ResultPanel>
where
	P: MetadataProvider,
	R: CountryRegistry,
	I: BufRead,
	W: Write,
{
	let mut panel = ResultPanel::new();
	info!("{}", panel.status());

	loop {
		eprint!("Enter Phone Number: ");
		let line = match tui::prompt(input)? {
			Some(line) => line,
			None => {
				eprintln!();
				break;
			}
		};

		let command = line.trim();
		if QUIT.contains(&command) {
			break;
		}

		if command == CLEAR {
			panel.clear();
		} else {
			let outcome = service.lookup(command);
			if let Err(err) = &outcome {
				report_failure(err);
			}
			panel.apply(&outcome);
			if format == OutputFormat::Json {
				render::write_json(out, command, &outcome)?;
				continue;
			}
		}

		if format == OutputFormat::Text {
			render::write_panel(out, &panel, color)?;
		}
		info!("{}", panel.status());
	}

	Ok(panel)
}
