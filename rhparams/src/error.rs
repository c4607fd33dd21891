//! Errors

// Imports
use crate::MitigationScheme;

/// Error deriving the parameters of a scheme
#[derive(PartialEq, Eq, Clone, Debug)]
#[derive(thiserror::Error)]
pub enum DeriveError {
	/// Scheme name isn't recognized
	#[error("Unsupported mitigation scheme: {name:?}")]
	UnsupportedScheme { name: String },

	/// Threshold isn't in the scheme's lookup table
	#[error("Unsupported threshold for {scheme}: tRH = {trh}")]
	UnsupportedThreshold { scheme: MitigationScheme, trh: u64 },

	/// A derived parameter was zero, negative or otherwise out of range
	#[error("Degenerate parameter `{param}` for {scheme} with tRH = {trh}")]
	DegenerateParameter {
		scheme: MitigationScheme,
		param:  &'static str,
		trh:    u64,
	},
}
