//! Parameter sets
//!
//! Field names match the keys each of the simulator's controller plugins
//! expects, so they can be serialized directly into a plugin entry.

// Imports
use {
	crate::{MitigationScheme, MithrilVariant},
	std::fmt,
};

/// Parameters of a scheme
#[derive(PartialEq, Clone, Debug)]
pub enum ParameterSet {
	Para(ParaParams),
	TwiceIdeal(TwiceIdealParams),
	Graphene(GrapheneParams),
	Mithril {
		variant: MithrilVariant,
		params:  MithrilParams,
	},
	OracleRh(OracleRhParams),
	Hydra(HydraParams),
	Rrs(RrsParams),
}

impl ParameterSet {
	/// Returns the scheme these parameters are for
	#[must_use]
	pub const fn scheme(&self) -> MitigationScheme {
		match self {
			Self::Para(_) => MitigationScheme::Para,
			Self::TwiceIdeal(_) => MitigationScheme::TwiceIdeal,
			Self::Graphene(_) => MitigationScheme::Graphene,
			Self::Mithril { variant, .. } => MitigationScheme::Mithril(*variant),
			Self::OracleRh(_) => MitigationScheme::OracleRh,
			Self::Hydra(_) => MitigationScheme::Hydra,
			Self::Rrs(_) => MitigationScheme::Rrs,
		}
	}
}

/// PARA parameters
#[derive(PartialEq, Clone, Copy, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ParaParams {
	/// Probability of refreshing the neighbors on each activation
	pub threshold: f64,
}

/// TWiCe-Ideal parameters
#[derive(PartialEq, Clone, Copy, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct TwiceIdealParams {
	/// Activations before a row's neighbors are refreshed
	pub twice_rh_threshold: u64,

	/// Minimum activations per refresh interval for an entry to avoid pruning
	pub twice_pruning_interval_threshold: f64,
}

/// Graphene parameters
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct GrapheneParams {
	pub num_table_entries:    u64,
	pub activation_threshold: u64,
	pub reset_period_ns:      u64,
}

/// Mithril parameters
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct MithrilParams {
	pub adaptive_threshold: u64,
	pub rfm_threshold:      u64,
	pub num_table_entries:  u64,
}

/// OracleRH parameters
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct OracleRhParams {
	#[serde(rename = "tRH")]
	pub trh: u64,
}

/// Hydra parameters
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct HydraParams {
	/// Per-row activations before the neighbors are refreshed
	pub hydra_tracking_threshold: u64,

	/// Group activations before the group's rows are tracked individually
	pub hydra_group_threshold: u64,

	pub hydra_row_group_size:   u64,
	pub hydra_reset_period_ns:  u64,
	pub hydra_rcc_num_per_rank: u64,

	/// Row count cache eviction policy
	pub hydra_rcc_policy: EvictionPolicy,
}

/// Cache eviction policy
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum EvictionPolicy {
	#[serde(rename = "RANDOM")]
	Random,
}

impl fmt::Display for EvictionPolicy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Random => f.write_str("RANDOM"),
		}
	}
}

/// RRS parameters
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RrsParams {
	/// Hot-row tracker entries
	pub num_hrt_entries: u64,

	/// Row indirection table entries
	pub num_rit_entries: u64,

	/// Activations before a row is swapped
	pub rss_threshold: u64,

	pub reset_period_ns: u64,
}
