use std::collections::HashMap;
use std::io::Read;
use std::iter::FromIterator;

use log::*;

/// Maps prefixes of E.164 digit strings (no leading `+`) to names, and answers with the longest matching prefix.
#[derive(Debug, Clone, Default)]
pub struct PrefixTable {
	entries: HashMap<String, String>,
	longest: usize,
}

impl PrefixTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Reads a JSON object of `"prefix": "name"` pairs. Keys that aren't all digits are skipped.
	pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
		let raw: HashMap<String, String> = serde_json::from_reader(reader)?;
		let mut table = Self::new();
		for (prefix, name) in raw {
			if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_digit()) {
				warn!("ignoring invalid prefix {:?}", prefix);
				continue;
			}
			table.insert(prefix, name);
		}
		Ok(table)
	}

	pub fn insert(&mut self, prefix: impl Into<String>, name: impl Into<String>) {
		let prefix = prefix.into();
		self.longest = self.longest.max(prefix.len());
		self.entries.insert(prefix, name.into());
	}

	/// Overlay `other` on top of this table. Entries in `other` win.
	pub fn extend(&mut self, other: PrefixTable) {
		for (prefix, name) in other.entries {
			self.insert(prefix, name);
		}
	}

	pub fn lookup(&self, digits: &str) -> Option<&str> {
		let max = digits.len().min(self.longest);
		for len in (1..=max).rev() {
			let prefix = match digits.get(..len) {
				Some(p) => p,
				None => continue,
			};
			if let Some(name) = self.entries.get(prefix) {
				trace!("prefix {} matched {:?}", prefix, name);
				return Some(name.as_str());
			}
		}
		None
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<K, V> FromIterator<(K, V)> for PrefixTable
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut table = Self::new();
		for (prefix, name) in iter {
			table.insert(prefix, name);
		}
		table
	}
}
