use crate::errors::ProviderError;
use crate::linetype::LineType;

mod bundled;

pub use bundled::BundledProvider;

/// The locale lookups are performed in.
pub const DEFAULT_LOCALE: &str = "en";

/// Parses phone numbers and answers questions about them.
///
/// Implementations are expected to work on local data only. Nothing here should block on the network.
pub trait MetadataProvider {
	/// A parsed phone number. Only lives for the duration of one lookup.
	type Number;

	/// Parse a number in international format. No default region is assumed.
	fn parse(&self, raw: &str) -> Result<Self::Number, ProviderError>;

	/// Whether the number is assigned in its region's numbering plan.
	fn is_valid(&self, number: &Self::Number) -> bool;

	/// The numeric country calling code, eg. `44`.
	fn country_code(&self, number: &Self::Number) -> u16;

	/// The ISO 3166-1 alpha-2 code of the region the number belongs to, if it can be resolved.
	fn region_alpha2(&self, number: &Self::Number) -> Option<String>;

	/// A human readable location, eg. "Birmingham".
	fn description_for(
		&self,
		number: &Self::Number,
		locale: &str,
	) -> Result<Option<String>, ProviderError>;

	/// The name of the carrier the number was originally assigned to.
	fn carrier_for(
		&self,
		number: &Self::Number,
		locale: &str,
	) -> Result<Option<String>, ProviderError>;

	fn line_type(&self, number: &Self::Number) -> LineType;
}
