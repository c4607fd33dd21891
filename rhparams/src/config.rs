//! Configuration

// Imports
use crate::{MitigationScheme, MithrilVariant};

/// Sweep configuration
#[derive(PartialEq, Eq, Clone, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct SweepConfig {
	/// Schemes to derive parameters for
	pub schemes: Vec<MitigationScheme>,

	/// RowHammer thresholds to derive each scheme for
	pub thresholds: Vec<u64>,
}

impl Default for SweepConfig {
	fn default() -> Self {
		Self {
			schemes:    vec![
				MitigationScheme::Graphene,
				MitigationScheme::Rrs,
				MitigationScheme::Mithril(MithrilVariant::Cache),
				MitigationScheme::Mithril(MithrilVariant::Ddr4),
			],
			thresholds: vec![256],
		}
	}
}
