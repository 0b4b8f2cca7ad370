use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use log::*;
use phonenumber::{metadata::DATABASE, Mode, PhoneNumber};

use super::{MetadataProvider, DEFAULT_LOCALE};
use crate::country::Iso3166Registry;
use crate::errors::{DataError, ProviderError};
use crate::linetype::LineType;
use crate::prefix::PrefixTable;

const BUNDLED_GEOCODING_EN: &str = include_str!("../../data/geocoding/en.json");
const BUNDLED_CARRIER_EN: &str = include_str!("../../data/carrier/en.json");

/// Calling codes of countries where mobile numbers carry a geographic area code.
const GEO_MOBILE_COUNTRIES: &[u16] = &[52, 54, 55, 62, 86];

/// Regions of the numbering plan that have no ISO 3166 entry.
const EXTRA_REGION_NAMES: &[(&str, &str)] = &[
	("AC", "Ascension Island"),
	("TA", "Tristan da Cunha"),
	("XK", "Kosovo"),
];

const GEOCODING: &str = "geocoding";
const CARRIER: &str = "carrier";

/// A [`MetadataProvider`] that uses the `phonenumber` crate for parsing, validation and classification,
/// and prefix tables compiled into this crate for locations and carriers.
#[derive(Debug, Clone)]
pub struct BundledProvider {
	geocoding: HashMap<String, PrefixTable>,
	carriers: HashMap<String, PrefixTable>,
	/// Short region names, used as the location when no area matches.
	region_names: HashMap<String, String>,
}

impl BundledProvider {
	pub fn load() -> Result<Self, DataError> {
		let geocoding = PrefixTable::from_reader(BUNDLED_GEOCODING_EN.as_bytes()).map_err(|source| {
			DataError::Malformed {
				name: "bundled geocoding data".into(),
				source,
			}
		})?;
		let carriers = PrefixTable::from_reader(BUNDLED_CARRIER_EN.as_bytes()).map_err(|source| {
			DataError::Malformed {
				name: "bundled carrier data".into(),
				source,
			}
		})?;
		let mut region_names: HashMap<String, String> = Iso3166Registry::bundled()?
			.iter()
			.map(|c| (c.alpha_2.clone(), c.name.clone()))
			.collect();
		region_names.extend(
			EXTRA_REGION_NAMES
				.iter()
				.map(|(id, name)| ((*id).to_owned(), (*name).to_owned())),
		);

		debug!(
			"loaded {} geocoding prefixes, {} carrier prefixes",
			geocoding.len(),
			carriers.len()
		);

		let mut provider = Self {
			geocoding: HashMap::new(),
			carriers: HashMap::new(),
			region_names,
		};
		provider.geocoding.insert(DEFAULT_LOCALE.to_owned(), geocoding);
		provider.carriers.insert(DEFAULT_LOCALE.to_owned(), carriers);
		Ok(provider)
	}

	/// Overlay tables found in `dir` on top of the bundled ones.
	///
	/// Tables are read from `dir/geocoding/<locale>.json` and `dir/carrier/<locale>.json`. Either directory may be missing.
	pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Result<Self, DataError> {
		let dir = dir.as_ref();
		overlay_tables(&mut self.geocoding, &dir.join(GEOCODING))?;
		overlay_tables(&mut self.carriers, &dir.join(CARRIER))?;
		Ok(self)
	}

	/// Digits of the number in E.164 form, without the leading `+`.
	fn digits(number: &PhoneNumber) -> String {
		number
			.format()
			.mode(Mode::E164)
			.to_string()
			.trim_start_matches('+')
			.to_owned()
	}

	fn is_geographical(line_type: LineType, country_code: u16) -> bool {
		match line_type {
			LineType::FixedLine | LineType::FixedLineOrMobile => true,
			LineType::Mobile => GEO_MOBILE_COUNTRIES.contains(&country_code),
			_ => false,
		}
	}

	fn region_name(&self, number: &PhoneNumber) -> Option<String> {
		self.region_alpha2(number)
			.and_then(|id| self.region_names.get(&id).cloned())
	}
}

fn overlay_tables(tables: &mut HashMap<String, PrefixTable>, dir: &Path) -> Result<(), DataError> {
	if !dir.is_dir() {
		debug!("no data directory at {:?}, skipping", dir);
		return Ok(());
	}
	let entries = std::fs::read_dir(dir).map_err(|source| DataError::Io {
		path: dir.to_path_buf(),
		source,
	})?;
	for entry in entries {
		let path = entry
			.map_err(|source| DataError::Io {
				path: dir.to_path_buf(),
				source,
			})?
			.path();
		if path.extension().and_then(|e| e.to_str()) != Some("json") {
			continue;
		}
		let locale = match path.file_stem().and_then(|s| s.to_str()) {
			Some(locale) => locale.to_owned(),
			None => continue,
		};
		let file = File::open(&path).map_err(|source| DataError::Io {
			path: path.clone(),
			source,
		})?;
		let table = PrefixTable::from_reader(file).map_err(|source| DataError::Malformed {
			name: path.display().to_string(),
			source,
		})?;
		info!("loaded {} prefixes from {:?}", table.len(), path);
		tables.entry(locale).or_default().extend(table);
	}
	Ok(())
}

impl MetadataProvider for BundledProvider {
	type Number = PhoneNumber;

	fn parse(&self, raw: &str) -> Result<PhoneNumber, ProviderError> {
		let number = phonenumber::parse(None, raw)
			.map_err(|err| ProviderError::InvalidNumber(err.to_string()))?;
		trace!("parsed {:?} as {:?}", raw, number);
		Ok(number)
	}

	fn is_valid(&self, number: &PhoneNumber) -> bool {
		phonenumber::is_valid(number)
	}

	fn country_code(&self, number: &PhoneNumber) -> u16 {
		number.code().value()
	}

	fn region_alpha2(&self, number: &PhoneNumber) -> Option<String> {
		number.country().id().map(|id| format!("{:?}", id))
	}

	fn description_for(
		&self,
		number: &PhoneNumber,
		locale: &str,
	) -> Result<Option<String>, ProviderError> {
		let table = self
			.geocoding
			.get(locale)
			.ok_or_else(|| ProviderError::MissingLocale {
				kind: GEOCODING,
				locale: locale.to_owned(),
			})?;

		let line_type = self.line_type(number);
		if line_type == LineType::Unknown {
			return Ok(None);
		}
		if !Self::is_geographical(line_type, self.country_code(number)) {
			return Ok(self.region_name(number));
		}

		match table.lookup(&Self::digits(number)) {
			Some(name) => Ok(Some(name.to_owned())),
			None => Ok(self.region_name(number)),
		}
	}

	fn carrier_for(
		&self,
		number: &PhoneNumber,
		locale: &str,
	) -> Result<Option<String>, ProviderError> {
		let table = self
			.carriers
			.get(locale)
			.ok_or_else(|| ProviderError::MissingLocale {
				kind: CARRIER,
				locale: locale.to_owned(),
			})?;

		if !self.line_type(number).may_have_carrier() {
			return Ok(None);
		}

		Ok(table.lookup(&Self::digits(number)).map(str::to_owned))
	}

	fn line_type(&self, number: &PhoneNumber) -> LineType {
		number.number_type(&DATABASE).into()
	}
}
