use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum UserError {
	#[error("No phone numbers given. Pass one or more numbers in international format, eg. `phonetrack +12015550123`, or run `phonetrack interactive`.")]
	NoNumbers,
	#[error("{failed} of {total} lookups failed.")]
	LookupsFailed { failed: usize, total: usize },
}
