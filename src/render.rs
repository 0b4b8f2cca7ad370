use std::io::Write;

use crossterm::{
	queue,
	style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use phonetrack::{LookupError, LookupResult};
use serde::Serialize;

use crate::panel::ResultPanel;

fn label_color(label: &str) -> Color {
	match label {
		"Country" => Color::Blue,
		"Region" => Color::DarkYellow,
		"Carrier" => Color::Magenta,
		_ => Color::Cyan,
	}
}

/// Print the panel's fields as labelled lines.
pub(crate) fn write_panel<W: Write>(
	out: &mut W,
	panel: &ResultPanel,
	color: bool,
) -> anyhow::Result<()> {
	for (label, value) in panel.fields().iter() {
		if color {
			queue!(
				out,
				SetForegroundColor(label_color(label)),
				SetAttribute(Attribute::Bold),
				Print(format!("{}: ", label)),
				SetAttribute(Attribute::Reset),
				ResetColor,
				Print(format!("{}\n", value)),
			)?;
		} else {
			writeln!(out, "{}: {}", label, value)?;
		}
	}
	out.flush()?;
	Ok(())
}

pub(crate) fn write_heading<W: Write>(out: &mut W, text: &str, color: bool) -> anyhow::Result<()> {
	if color {
		queue!(
			out,
			SetForegroundColor(Color::Green),
			SetAttribute(Attribute::Bold),
			Print(format!("{}\n", text)),
			SetAttribute(Attribute::Reset),
			ResetColor,
		)?;
	} else {
		writeln!(out, "{}", text)?;
	}
	Ok(())
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
	input: &'a str,
	#[serde(flatten)]
	result: Option<&'a LookupResult>,
	#[serde(skip_serializing_if = "Option::is_none")]
	error: Option<String>,
}

/// Print one lookup as a single line of JSON.
pub(crate) fn write_json<W: Write>(
	out: &mut W,
	input: &str,
	outcome: &Result<LookupResult, LookupError>,
) -> anyhow::Result<()> {
	let report = match outcome {
		Ok(result) => JsonReport {
			input,
			result: Some(result),
			error: None,
		},
		Err(err) => JsonReport {
			input,
			result: None,
			error: Some(err.user_message()),
		},
	};
	serde_json::to_writer(&mut *out, &report)?;
	writeln!(out)?;
	out.flush()?;
	Ok(())
}
