//! Sweeps
//!
//! Derives the parameters for every combination of scheme and threshold in a
//! [`SweepConfig`]. Combinations that fail are skipped, so a single bad
//! threshold doesn't stop the rest of the sweep.

// Imports
use {
	crate::{derive, MitigationScheme, PluginEntry, SweepConfig},
	itertools::Itertools,
};

/// Output of [`sweep`]
#[derive(PartialEq, Clone, Debug)]
#[derive(serde::Serialize)]
pub struct SweepOutput {
	/// Derived entries, scheme-major
	pub entries: Vec<SweepEntry>,

	/// Skipped combinations
	pub skipped: Vec<SweepSkipped>,
}

/// Derived sweep entry
#[derive(PartialEq, Clone, Debug)]
#[derive(serde::Serialize)]
pub struct SweepEntry {
	pub scheme: MitigationScheme,
	pub trh:    u64,
	pub plugin: PluginEntry,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub dram_timing_preset: Option<&'static str>,
}

/// Skipped sweep combination
#[derive(PartialEq, Eq, Clone, Debug)]
#[derive(serde::Serialize)]
pub struct SweepSkipped {
	pub scheme: MitigationScheme,
	pub trh:    u64,
	pub error:  String,
}

/// Runs a sweep over all schemes and thresholds of `config`
pub fn sweep(config: &SweepConfig) -> SweepOutput {
	let mut entries = vec![];
	let mut skipped = vec![];
	for (&scheme, &trh) in config.schemes.iter().cartesian_product(&config.thresholds) {
		match derive(scheme, trh) {
			Ok(params) => {
				let plugin = PluginEntry::new(&params);
				tracing::debug!(%scheme, trh, ?plugin, "Derived plugin");
				entries.push(SweepEntry {
					scheme,
					trh,
					dram_timing_preset: plugin.dram_timing_preset(),
					plugin,
				});
			},

			Err(err) => {
				tracing::warn!(%scheme, trh, %err, "Skipping combination");
				skipped.push(SweepSkipped {
					scheme,
					trh,
					error: err.to_string(),
				});
			},
		}
	}

	tracing::info!(derived = entries.len(), skipped = skipped.len(), "Sweep finished");

	SweepOutput { entries, skipped }
}
