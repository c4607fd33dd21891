//! Controller plugin entries
//!
//! Renders a [`ParameterSet`] as the entry the simulator expects in its
//! memory controller's plugin list:
//!
//! ```json
//! { "ControllerPlugin": { "impl": "RRS", "num_hrt_entries": 8, ... } }
//! ```

// Imports
use crate::{
	params::{GrapheneParams, HydraParams, MithrilParams, OracleRhParams, ParaParams, RrsParams, TwiceIdealParams},
	MitigationScheme,
	MithrilVariant,
	ParameterSet,
};

/// Number of entries in the Mithril cache
pub const MITHRIL_CACHE_ENTRIES: u64 = 512;

/// Associativity of the Mithril cache
pub const MITHRIL_CACHE_ASSOCIATIVITY: u64 = 512;

/// Plugin list entry
#[derive(PartialEq, Clone, Debug)]
#[derive(serde::Serialize)]
pub struct PluginEntry {
	#[serde(rename = "ControllerPlugin")]
	pub controller_plugin: ControllerPlugin,
}

impl PluginEntry {
	/// Creates the plugin entry for `params`
	#[must_use]
	pub fn new(params: &ParameterSet) -> Self {
		let plugin_params = match *params {
			ParameterSet::Para(params) => PluginParams::Para(params),
			ParameterSet::TwiceIdeal(params) => PluginParams::TwiceIdeal(params),
			ParameterSet::Graphene(params) => PluginParams::Graphene(params),
			ParameterSet::Mithril {
				variant: MithrilVariant::Cache,
				params,
			} => PluginParams::MithrilCache(MithrilCacheParams {
				params,
				num_cache_entries: MITHRIL_CACHE_ENTRIES,
				associativity: MITHRIL_CACHE_ASSOCIATIVITY,
				write_back_en: false,
			}),
			ParameterSet::Mithril {
				variant: MithrilVariant::Ddr4,
				params,
			} => PluginParams::Mithril(params),
			ParameterSet::OracleRh(params) => PluginParams::OracleRh(params),
			ParameterSet::Hydra(params) => PluginParams::Hydra(params),
			ParameterSet::Rrs(params) => PluginParams::Rrs(params),
		};

		Self {
			controller_plugin: ControllerPlugin {
				scheme: params.scheme(),
				params: plugin_params,
			},
		}
	}

	/// Returns the scheme of this plugin
	#[must_use]
	pub const fn scheme(&self) -> MitigationScheme {
		self.controller_plugin.scheme
	}

	/// Returns the dram timing preset this plugin requires, if any.
	///
	/// This replaces the preset of the dram, not of the plugin.
	#[must_use]
	pub const fn dram_timing_preset(&self) -> Option<&'static str> {
		match self.controller_plugin.scheme {
			MitigationScheme::Mithril(variant) => variant.dram_timing_preset(),
			_ => None,
		}
	}
}

/// Controller plugin
#[derive(PartialEq, Clone, Debug)]
#[derive(serde::Serialize)]
pub struct ControllerPlugin {
	/// Scheme, as the plugin's implementation
	#[serde(rename = "impl")]
	pub scheme: MitigationScheme,

	/// Parameters
	#[serde(flatten)]
	pub params: PluginParams,
}

/// Controller plugin parameters
#[derive(PartialEq, Clone, Debug)]
#[derive(serde::Serialize)]
#[serde(untagged)]
pub enum PluginParams {
	Para(ParaParams),
	TwiceIdeal(TwiceIdealParams),
	Graphene(GrapheneParams),
	Mithril(MithrilParams),
	MithrilCache(MithrilCacheParams),
	OracleRh(OracleRhParams),
	Hydra(HydraParams),
	Rrs(RrsParams),
}

/// Mithril parameters, with the cache configuration
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(serde::Serialize)]
pub struct MithrilCacheParams {
	#[serde(flatten)]
	pub params: MithrilParams,

	pub num_cache_entries: u64,
	pub associativity:     u64,
	pub write_back_en:     bool,
}
