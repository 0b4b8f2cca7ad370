use phonetrack::{LookupError, LookupResult};

pub(crate) const NOT_TRACKED: &str = "Not tracked yet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Status {
	Ready,
	Completed,
	Failed,
	Cleared,
}

impl Status {
	pub fn message(&self) -> &'static str {
		match self {
			Status::Ready => "Ready to track phone numbers",
			Status::Completed => "Tracking completed successfully!",
			Status::Failed => "Tracking failed",
			Status::Cleared => "Fields cleared - Ready for new search",
		}
	}
}

impl std::fmt::Display for Status {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.message())
	}
}

/// The four result fields and status line shown to the user. Only ever shows one lookup at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResultPanel {
	country: String,
	region: String,
	carrier: String,
	line_type: String,
	status: Status,
}

impl ResultPanel {
	pub fn new() -> Self {
		Self {
			country: NOT_TRACKED.into(),
			region: NOT_TRACKED.into(),
			carrier: NOT_TRACKED.into(),
			line_type: NOT_TRACKED.into(),
			status: Status::Ready,
		}
	}

	/// Show the outcome of a lookup. Empty input leaves the panel alone, any other failure wipes the previous result.
	pub fn apply(&mut self, outcome: &Result<LookupResult, LookupError>) {
		match outcome {
			Ok(result) => {
				self.country = result.country_display().to_owned();
				self.region = result.region().to_owned();
				self.carrier = result.carrier_name().to_owned();
				self.line_type = result.line_type().to_string();
				self.status = Status::Completed;
			}
			Err(LookupError::EmptyInput) => {}
			Err(_) => {
				self.reset_fields();
				self.status = Status::Failed;
			}
		}
	}

	pub fn clear(&mut self) {
		self.reset_fields();
		self.status = Status::Cleared;
	}

	fn reset_fields(&mut self) {
		self.country = NOT_TRACKED.into();
		self.region = NOT_TRACKED.into();
		self.carrier = NOT_TRACKED.into();
		self.line_type = NOT_TRACKED.into();
	}

	/// `(label, value)` pairs in display order.
	pub fn fields(&self) -> [(&'static str, &str); 4] {
		[
			("Country", self.country.as_str()),
			("Region", self.region.as_str()),
			("Carrier", self.carrier.as_str()),
			("Number Type", self.line_type.as_str()),
		]
	}

	pub fn status(&self) -> Status {
		self.status
	}
}

impl Default for ResultPanel {
	fn default() -> Self {
		Self::new()
	}
}
