use serde::{Deserialize, Serialize};

/// The service category of a phone number.
///
/// Serializes as its display label, eg. `"Fixed Line or Mobile"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineType {
	Mobile,
	#[serde(rename = "Fixed Line")]
	FixedLine,
	#[serde(rename = "Fixed Line or Mobile")]
	FixedLineOrMobile,
	#[serde(rename = "Toll Free")]
	TollFree,
	#[serde(rename = "Premium Rate")]
	PremiumRate,
	#[serde(rename = "Shared Cost")]
	SharedCost,
	#[serde(rename = "VoIP")]
	VoIP,
	#[serde(rename = "Personal Number")]
	PersonalNumber,
	Pager,
	#[serde(rename = "Universal Access Number")]
	UniversalAccessNumber,
	Voicemail,
	Unknown,
}

impl LineType {
	pub fn label(&self) -> &'static str {
		match self {
			LineType::Mobile => "Mobile",
			LineType::FixedLine => "Fixed Line",
			LineType::FixedLineOrMobile => "Fixed Line or Mobile",
			LineType::TollFree => "Toll Free",
			LineType::PremiumRate => "Premium Rate",
			LineType::SharedCost => "Shared Cost",
			LineType::VoIP => "VoIP",
			LineType::PersonalNumber => "Personal Number",
			LineType::Pager => "Pager",
			LineType::UniversalAccessNumber => "Universal Access Number",
			LineType::Voicemail => "Voicemail",
			LineType::Unknown => "Unknown",
		}
	}

	/// Types that a carrier can be looked up for. Other numbers may have been ported, or never belonged to a carrier.
	pub fn may_have_carrier(&self) -> bool {
		matches!(
			self,
			LineType::Mobile | LineType::FixedLineOrMobile | LineType::Pager
		)
	}
}

impl std::fmt::Display for LineType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.label())
	}
}

impl From<phonenumber::Type> for LineType {
	fn from(t: phonenumber::Type) -> Self {
		use phonenumber::Type;
		match t {
			Type::Mobile => LineType::Mobile,
			Type::FixedLine => LineType::FixedLine,
			Type::FixedLineOrMobile => LineType::FixedLineOrMobile,
			Type::TollFree => LineType::TollFree,
			Type::PremiumRate => LineType::PremiumRate,
			Type::SharedCost => LineType::SharedCost,
			Type::Voip => LineType::VoIP,
			Type::PersonalNumber => LineType::PersonalNumber,
			Type::Pager => LineType::Pager,
			Type::Uan => LineType::UniversalAccessNumber,
			Type::Voicemail => LineType::Voicemail,
			_ => LineType::Unknown,
		}
	}
}
