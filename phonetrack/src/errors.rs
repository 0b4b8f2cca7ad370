use std::path::PathBuf;

use thiserror::Error;

/// Why a lookup did not produce a [`crate::LookupResult`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
	/// Nothing was entered. This is a warning, not a failure of the service.
	#[error("Please enter a phone number!")]
	EmptyInput,
	/// The input could not be parsed, or it parsed but is not a valid number for any region.
	#[error("{0}")]
	InvalidFormat(String),
	/// The metadata provider could not answer for a number it had already accepted.
	#[error("{0}")]
	MetadataUnavailable(String),
}

impl LookupError {
	/// Whether this should be presented as a warning rather than an error.
	pub fn is_warning(&self) -> bool {
		matches!(self, LookupError::EmptyInput)
	}

	/// The message shown to the user.
	pub fn user_message(&self) -> String {
		match self {
			LookupError::EmptyInput => self.to_string(),
			_ => format!("Error tracking number: {}", self),
		}
	}
}

impl From<ProviderError> for LookupError {
	fn from(err: ProviderError) -> Self {
		match err {
			ProviderError::InvalidNumber(reason) => LookupError::InvalidFormat(reason),
			other => LookupError::MetadataUnavailable(other.to_string()),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
	#[error("{0}")]
	InvalidNumber(String),
	#[error("No {kind} data is available for locale {locale:?}")]
	MissingLocale { kind: &'static str, locale: String },
}

/// Failure to load one of the datasets backing the bundled provider or registry.
#[derive(Debug, Error)]
pub enum DataError {
	#[error("Failed to read {path:?}: {source}")]
	Io {
		path: PathBuf,
		source: std::io::Error,
	},
	#[error("Failed to parse {name}: {source}")]
	Malformed {
		name: String,
		source: serde_json::Error,
	},
}
