//! Look up the country, region, carrier and line type of international phone numbers.
//!
//! ```no_run
//! use phonetrack::NumberLookupService;
//!
//! let service = NumberLookupService::bundled()?;
//! let result = service.lookup("+44 121 234 5678")?;
//! println!("{}", result.country_display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use country::{Country, CountryRegistry, Iso3166Registry};
pub use errors::{DataError, LookupError, ProviderError};
pub use linetype::LineType;
pub use prefix::PrefixTable;
pub use provider::{BundledProvider, MetadataProvider, DEFAULT_LOCALE};
pub use service::{
	LookupResult, NumberLookupService, CARRIER_UNAVAILABLE, LOCATION_UNAVAILABLE, UNKNOWN_COUNTRY,
};

pub mod country;
pub mod errors;
pub mod linetype;
pub mod prefix;
pub mod provider;
mod service;
