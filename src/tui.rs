use crossterm::tty::IsTty;
use std::io::{stderr, stdout, BufRead, Write};

/// Read one line of input, without the line ending. Returns `None` once the input is closed.
pub(crate) fn prompt<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
	stdout().flush()?;
	stderr().flush()?;

	let mut line = String::new();
	if input.read_line(&mut line)? == 0 {
		return Ok(None);
	}
	let len = line.trim_end_matches(&['\r', '\n'][..]).len();
	line.truncate(len);
	Ok(Some(line))
}

/// Whether stdout is a terminal, and can take colours.
pub(crate) fn stdout_is_tty() -> bool {
	stdout().is_tty()
}
