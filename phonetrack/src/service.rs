use std::path::Path;

use log::*;
use serde::{Deserialize, Serialize};

use crate::country::{CountryRegistry, Iso3166Registry};
use crate::errors::{DataError, LookupError};
use crate::linetype::LineType;
use crate::provider::{BundledProvider, MetadataProvider, DEFAULT_LOCALE};

pub const LOCATION_UNAVAILABLE: &str = "Location information not available";
pub const CARRIER_UNAVAILABLE: &str = "Carrier information not available";
pub const UNKNOWN_COUNTRY: &str = "Unknown Country";
const INVALID_NUMBER: &str = "Invalid phone number format";

/// Everything that is known about a valid phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
	country: String,
	region: String,
	carrier: String,
	line_type: LineType,
}

impl LookupResult {
	/// Country name and calling code, eg. "Japan (+81)".
	pub fn country_display(&self) -> &str {
		&self.country
	}

	pub fn region(&self) -> &str {
		&self.region
	}

	pub fn carrier_name(&self) -> &str {
		&self.carrier
	}

	pub fn line_type(&self) -> LineType {
		self.line_type
	}
}

/// Looks up phone numbers using a [`MetadataProvider`] for the numbers themselves and a [`CountryRegistry`] for country names.
pub struct NumberLookupService<P, R> {
	provider: P,
	registry: R,
}

impl NumberLookupService<BundledProvider, Iso3166Registry> {
	/// A service backed entirely by data compiled into this crate.
	pub fn bundled() -> Result<Self, DataError> {
		Ok(Self::new(BundledProvider::load()?, Iso3166Registry::bundled()?))
	}

	/// Like [`Self::bundled`], with extra geocoding and carrier tables read from `dir`.
	pub fn bundled_with_data_dir(dir: impl AsRef<Path>) -> Result<Self, DataError> {
		let provider = BundledProvider::load()?.with_data_dir(dir)?;
		Ok(Self::new(provider, Iso3166Registry::bundled()?))
	}
}

impl<P, R> NumberLookupService<P, R>
where
	P: MetadataProvider,
	R: CountryRegistry,
{
	pub fn new(provider: P, registry: R) -> Self {
		Self { provider, registry }
	}

	pub fn provider(&self) -> &P {
		&self.provider
	}

	pub fn registry(&self) -> &R {
		&self.registry
	}

	/// Look up a phone number in international format, eg. `+12015550123`.
	///
	/// Surrounding whitespace is ignored. Numbers that don't parse, or parse but aren't valid, fail with [`LookupError::InvalidFormat`].
	pub fn lookup(&self, raw: &str) -> Result<LookupResult, LookupError> {
		let raw = raw.trim();
		if raw.is_empty() {
			return Err(LookupError::EmptyInput);
		}

		let number = self.provider.parse(raw)?;
		if !self.provider.is_valid(&number) {
			debug!("{:?} parsed, but is not a valid number", raw);
			return Err(LookupError::InvalidFormat(INVALID_NUMBER.into()));
		}

		let calling_code = format!("+{}", self.provider.country_code(&number));
		let country = self.country_display(&number, &calling_code);

		let region = self
			.provider
			.description_for(&number, DEFAULT_LOCALE)?
			.filter(|s| !s.is_empty())
			.unwrap_or_else(|| LOCATION_UNAVAILABLE.to_owned());

		let carrier = self
			.provider
			.carrier_for(&number, DEFAULT_LOCALE)?
			.filter(|s| !s.is_empty())
			.unwrap_or_else(|| CARRIER_UNAVAILABLE.to_owned());

		let line_type = self.provider.line_type(&number);

		Ok(LookupResult {
			country,
			region,
			carrier,
			line_type,
		})
	}

	fn country_display(&self, number: &P::Number, calling_code: &str) -> String {
		let region = self.provider.region_alpha2(number);
		debug!("resolved region: {:?}", region);
		match region.as_deref().and_then(|r| self.registry.get(r)) {
			Some(country) => format!("{} ({})", country.display_name(), calling_code),
			None => {
				if let Some(region) = region {
					warn!("no country named for region {}", region);
				}
				format!("{} ({})", UNKNOWN_COUNTRY, calling_code)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::country::Country;
	use crate::errors::ProviderError;
	use proptest::prelude::*;

	fn bundled() -> NumberLookupService<BundledProvider, Iso3166Registry> {
		NumberLookupService::bundled().unwrap()
	}

	#[test]
	fn test_us_number() {
		let result = bundled().lookup("+12015550123").unwrap();
		assert_eq!(result.country_display(), "United States of America (+1)");
		assert_eq!(result.region(), "New Jersey");
		assert_eq!(result.carrier_name(), CARRIER_UNAVAILABLE);
		assert!(matches!(
			result.line_type(),
			LineType::FixedLineOrMobile | LineType::FixedLine
		));
	}

	#[test]
	fn test_uk_mobile() {
		let result = bundled().lookup("+44 7400 123456").unwrap();
		assert_eq!(
			result.country_display(),
			"United Kingdom of Great Britain and Northern Ireland (+44)"
		);
		assert_eq!(result.region(), "United Kingdom");
		assert_eq!(result.carrier_name(), "Three");
		assert_eq!(result.line_type(), LineType::Mobile);
	}

	#[test]
	fn test_uk_fixed_line() {
		let result = bundled().lookup("+441212345678").unwrap();
		assert_eq!(result.region(), "Birmingham");
		assert_eq!(result.carrier_name(), CARRIER_UNAVAILABLE);
		assert_eq!(result.line_type(), LineType::FixedLine);
	}

	#[test]
	fn test_india_mobile() {
		let result = bundled().lookup("+918123456789").unwrap();
		assert_eq!(result.country_display(), "Republic of India (+91)");
		assert_eq!(result.region(), "India");
		assert_eq!(result.carrier_name(), "Tata Docomo");
		assert_eq!(result.line_type(), LineType::Mobile);
	}

	#[test]
	fn test_nigeria_mobile() {
		let result = bundled().lookup("+2348031234567").unwrap();
		assert_eq!(result.country_display(), "Federal Republic of Nigeria (+234)");
		assert_eq!(result.region(), "Nigeria");
		assert_eq!(result.carrier_name(), "MTN");
	}

	#[test]
	fn test_kosovo_mobile() {
		let result = bundled().lookup("+38344123456").unwrap();
		assert_eq!(result.country_display(), "Unknown Country (+383)");
		assert_eq!(result.region(), "Kosovo");
		assert_eq!(result.line_type(), LineType::Mobile);
	}

	#[test]
	fn test_input_is_trimmed() {
		let service = bundled();
		assert_eq!(
			service.lookup("  +441212345678\n").unwrap(),
			service.lookup("+441212345678").unwrap()
		);
	}

	#[test]
	fn test_empty_input() {
		let service = bundled();
		assert_eq!(service.lookup(""), Err(LookupError::EmptyInput));
		assert_eq!(service.lookup("   \t"), Err(LookupError::EmptyInput));
	}

	#[test]
	fn test_garbage_is_invalid_format() {
		assert!(matches!(
			bundled().lookup("abc"),
			Err(LookupError::InvalidFormat(_))
		));
	}

	#[test]
	fn test_missing_country_code_is_invalid_format() {
		assert!(matches!(
			bundled().lookup("2015550123"),
			Err(LookupError::InvalidFormat(_))
		));
	}

	#[test]
	fn test_unassigned_number_is_invalid_format() {
		assert_eq!(
			bundled().lookup("+11234567890"),
			Err(LookupError::InvalidFormat(INVALID_NUMBER.into()))
		);
	}

	#[test]
	fn test_service_usable_after_failure() {
		let service = bundled();
		assert!(service.lookup("abc").is_err());
		assert!(service.lookup("+441212345678").is_ok());
	}

	proptest! {
		#[test]
		fn lookup_is_idempotent(raw in "\\+[1-9][0-9]{6,13}") {
			let service = bundled();
			prop_assert_eq!(service.lookup(&raw), service.lookup(&raw));
		}
	}

	/// A provider that answers from its fields, for exercising the service's composition rules.
	#[derive(Debug, Clone)]
	struct FakeProvider {
		valid: bool,
		code: u16,
		region: Option<String>,
		description: Result<Option<String>, ProviderError>,
		carrier: Result<Option<String>, ProviderError>,
		line_type: LineType,
	}

	impl Default for FakeProvider {
		fn default() -> Self {
			Self {
				valid: true,
				code: 1,
				region: Some("US".into()),
				description: Ok(Some("New Jersey".into())),
				carrier: Ok(Some("Example Wireless".into())),
				line_type: LineType::Mobile,
			}
		}
	}

	impl MetadataProvider for FakeProvider {
		type Number = String;

		fn parse(&self, raw: &str) -> Result<String, ProviderError> {
			if raw.starts_with('+') {
				Ok(raw.to_owned())
			} else {
				Err(ProviderError::InvalidNumber("not a number".into()))
			}
		}

		fn is_valid(&self, _number: &String) -> bool {
			self.valid
		}

		fn country_code(&self, _number: &String) -> u16 {
			self.code
		}

		fn region_alpha2(&self, _number: &String) -> Option<String> {
			self.region.clone()
		}

		fn description_for(
			&self,
			_number: &String,
			_locale: &str,
		) -> Result<Option<String>, ProviderError> {
			self.description.clone()
		}

		fn carrier_for(
			&self,
			_number: &String,
			_locale: &str,
		) -> Result<Option<String>, ProviderError> {
			self.carrier.clone()
		}

		fn line_type(&self, _number: &String) -> LineType {
			self.line_type
		}
	}

	fn registry() -> Iso3166Registry {
		Iso3166Registry::from_countries(vec![
			Country {
				alpha_2: "US".into(),
				name: "United States".into(),
				official_name: Some("United States of America".into()),
			},
			Country {
				alpha_2: "JP".into(),
				name: "Japan".into(),
				official_name: None,
			},
		])
	}

	fn fake(provider: FakeProvider) -> NumberLookupService<FakeProvider, Iso3166Registry> {
		NumberLookupService::new(provider, registry())
	}

	#[test]
	fn test_composes_all_fields() {
		let result = fake(FakeProvider::default()).lookup("+1").unwrap();
		assert_eq!(result.country_display(), "United States of America (+1)");
		assert_eq!(result.region(), "New Jersey");
		assert_eq!(result.carrier_name(), "Example Wireless");
		assert_eq!(result.line_type(), LineType::Mobile);
	}

	#[test]
	fn test_country_without_official_name() {
		let result = fake(FakeProvider {
			code: 81,
			region: Some("JP".into()),
			..Default::default()
		})
		.lookup("+81")
		.unwrap();
		assert_eq!(result.country_display(), "Japan (+81)");
	}

	#[test]
	fn test_unregistered_region() {
		let result = fake(FakeProvider {
			code: 383,
			region: Some("XK".into()),
			..Default::default()
		})
		.lookup("+383")
		.unwrap();
		assert_eq!(result.country_display(), "Unknown Country (+383)");
	}

	#[test]
	fn test_unresolvable_region() {
		let result = fake(FakeProvider {
			code: 979,
			region: None,
			..Default::default()
		})
		.lookup("+979")
		.unwrap();
		assert_eq!(result.country_display(), "Unknown Country (+979)");
	}

	#[test]
	fn test_placeholders_for_missing_data() {
		let result = fake(FakeProvider {
			description: Ok(None),
			carrier: Ok(Some(String::new())),
			..Default::default()
		})
		.lookup("+1")
		.unwrap();
		assert_eq!(result.region(), LOCATION_UNAVAILABLE);
		assert_eq!(result.carrier_name(), CARRIER_UNAVAILABLE);
	}

	#[test]
	fn test_unknown_line_type_is_reported() {
		let result = fake(FakeProvider {
			line_type: LineType::Unknown,
			..Default::default()
		})
		.lookup("+1")
		.unwrap();
		assert_eq!(result.line_type().to_string(), "Unknown");
	}

	#[test]
	fn test_invalid_numbers_are_rejected() {
		let service = fake(FakeProvider {
			valid: false,
			..Default::default()
		});
		assert_eq!(
			service.lookup("+1"),
			Err(LookupError::InvalidFormat(INVALID_NUMBER.into()))
		);
		assert_eq!(
			service.lookup("1"),
			Err(LookupError::InvalidFormat("not a number".into()))
		);
	}

	#[test]
	fn test_provider_failure_is_metadata_unavailable() {
		let service = fake(FakeProvider {
			carrier: Err(ProviderError::MissingLocale {
				kind: "carrier",
				locale: DEFAULT_LOCALE.into(),
			}),
			..Default::default()
		});
		let err = service.lookup("+1").unwrap_err();
		assert_eq!(
			err,
			LookupError::MetadataUnavailable(
				"No carrier data is available for locale \"en\"".into()
			)
		);
		assert_eq!(
			err.user_message(),
			"Error tracking number: No carrier data is available for locale \"en\""
		);
	}

	#[test]
	fn test_result_serializes_with_labels() {
		let result = fake(FakeProvider::default()).lookup("+1").unwrap();
		let json = serde_json::to_value(&result).unwrap();
		assert_eq!(
			json,
			serde_json::json!({
				"country": "United States of America (+1)",
				"region": "New Jersey",
				"carrier": "Example Wireless",
				"line_type": "Mobile",
			})
		);
	}
}
