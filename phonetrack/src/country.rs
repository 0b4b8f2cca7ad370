use std::collections::HashMap;
use std::io::Read;

use log::*;
use serde::{Deserialize, Serialize};

use crate::errors::DataError;

const BUNDLED_ISO3166: &str = include_str!("../data/iso3166.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
	pub alpha_2: String,
	/// Common short name, eg. "United Kingdom".
	pub name: String,
	/// Formal name, eg. "United Kingdom of Great Britain and Northern Ireland". Not every country has one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub official_name: Option<String>,
}

impl Country {
	/// The official name if there is one, otherwise the short name.
	pub fn display_name(&self) -> &str {
		self.official_name.as_deref().unwrap_or(&self.name)
	}
}

/// Maps ISO 3166-1 alpha-2 codes to countries.
pub trait CountryRegistry {
	fn get(&self, alpha_2: &str) -> Option<&Country>;
}

/// A [`CountryRegistry`] backed by an ISO 3166-1 dataset.
#[derive(Debug, Clone, Default)]
pub struct Iso3166Registry {
	countries: HashMap<String, Country>,
}

impl Iso3166Registry {
	/// Load the dataset that is compiled into this crate.
	pub fn bundled() -> Result<Self, DataError> {
		Self::from_reader(BUNDLED_ISO3166.as_bytes()).map_err(|source| DataError::Malformed {
			name: "bundled ISO 3166 dataset".into(),
			source,
		})
	}

	/// Reads a JSON array of [`Country`] records.
	pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
		let countries: Vec<Country> = serde_json::from_reader(reader)?;
		Ok(Self::from_countries(countries))
	}

	pub fn from_countries<I>(countries: I) -> Self
	where
		I: IntoIterator<Item = Country>,
	{
		let countries: HashMap<String, Country> = countries
			.into_iter()
			.map(|c| (c.alpha_2.to_ascii_uppercase(), c))
			.collect();
		debug!("loaded {} countries", countries.len());
		Self { countries }
	}

	pub fn len(&self) -> usize {
		self.countries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.countries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Country> {
		self.countries.values()
	}
}

impl CountryRegistry for Iso3166Registry {
	fn get(&self, alpha_2: &str) -> Option<&Country> {
		self.countries.get(&alpha_2.to_ascii_uppercase())
	}
}
