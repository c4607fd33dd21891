//! RowHammer mitigation parameters (`rhparams`)
//!
//! Derives the configuration of a RowHammer mitigation scheme for a DRAM
//! memory-controller simulator from the RowHammer threshold (`tRH`).

// Modules
pub mod config;
pub mod derive;
pub mod error;
pub mod params;
pub mod plugin;
pub mod scheme;
pub mod sweep;

// Exports
pub use self::{
	config::SweepConfig,
	derive::{derive, derive_by_name},
	error::DeriveError,
	params::ParameterSet,
	plugin::PluginEntry,
	scheme::{MitigationScheme, MithrilVariant},
	sweep::{sweep, SweepOutput},
};
