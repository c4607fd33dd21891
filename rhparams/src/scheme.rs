//! Mitigation schemes

// Imports
use {
	crate::DeriveError,
	std::{fmt, str::FromStr},
};

/// RowHammer mitigation scheme
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MitigationScheme {
	/// Probabilistic adjacent row activation
	Para,

	/// Idealized TWiCe, with unbounded counter tables
	TwiceIdeal,

	/// Graphene, Misra-Gries counter table
	Graphene,

	/// Mithril, adaptive refresh management
	Mithril(MithrilVariant),

	/// Oracle with perfect knowledge of every row's activations
	OracleRh,

	/// Hydra, hybrid group and per-row tracking
	Hydra,

	/// Randomized row swap
	Rrs,
}

impl MitigationScheme {
	/// All supported schemes
	pub const ALL: [Self; 8] = [
		Self::Para,
		Self::TwiceIdeal,
		Self::Graphene,
		Self::Mithril(MithrilVariant::Cache),
		Self::Mithril(MithrilVariant::Ddr4),
		Self::OracleRh,
		Self::Hydra,
		Self::Rrs,
	];

	/// Returns the name of this scheme, as used by the simulator's plugins.
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Para => "PARA",
			Self::TwiceIdeal => "TWiCe-Ideal",
			Self::Graphene => "Graphene",
			Self::Mithril(MithrilVariant::Cache) => "MithrilCache",
			Self::Mithril(MithrilVariant::Ddr4) => "MithrilDDR4",
			Self::OracleRh => "OracleRH",
			Self::Hydra => "Hydra",
			Self::Rrs => "RRS",
		}
	}
}

impl FromStr for MitigationScheme {
	type Err = DeriveError;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		// Note: The whole mithril family is matched by containment, with the
		//       variant then picked from its tag.
		if name.contains("Mithril") {
			return match MithrilVariant::from_tag(name) {
				Some(variant) => Ok(Self::Mithril(variant)),
				None => Err(DeriveError::UnsupportedScheme { name: name.to_owned() }),
			};
		}

		let scheme = match name {
			"PARA" => Self::Para,
			"TWiCe-Ideal" => Self::TwiceIdeal,
			"Graphene" => Self::Graphene,
			"OracleRH" => Self::OracleRh,
			"Hydra" => Self::Hydra,
			"RRS" => Self::Rrs,
			_ => return Err(DeriveError::UnsupportedScheme { name: name.to_owned() }),
		};

		Ok(scheme)
	}
}

impl TryFrom<String> for MitigationScheme {
	type Error = DeriveError;

	fn try_from(name: String) -> Result<Self, Self::Error> {
		name.parse()
	}
}

impl From<MitigationScheme> for String {
	fn from(scheme: MitigationScheme) -> Self {
		scheme.name().to_owned()
	}
}

impl fmt::Display for MitigationScheme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Mithril deployment variant
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub enum MithrilVariant {
	/// Tracking table backed by an on-die cache
	Cache,

	/// DDR4 timings
	Ddr4,
}

impl MithrilVariant {
	/// Finds the variant tag within a scheme name
	fn from_tag(name: &str) -> Option<Self> {
		match (name.contains("Cache"), name.contains("DDR4")) {
			(true, false) => Some(Self::Cache),
			(false, true) => Some(Self::Ddr4),
			// Note: Both or neither means we can't tell which one was meant
			_ => None,
		}
	}

	/// Returns the dram timing preset this variant forces, if any
	#[must_use]
	pub const fn dram_timing_preset(self) -> Option<&'static str> {
		match self {
			Self::Cache => Some("DDR4_2400R_AL16"),
			Self::Ddr4 => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn mithril_tag() {
		assert_eq!(MithrilVariant::from_tag("MithrilCache"), Some(MithrilVariant::Cache));
		assert_eq!(MithrilVariant::from_tag("MithrilDDR4"), Some(MithrilVariant::Ddr4));
		assert_eq!(MithrilVariant::from_tag("Mithril"), None);
		assert_eq!(MithrilVariant::from_tag("MithrilCacheDDR4"), None);
	}
}
