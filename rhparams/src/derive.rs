//! Parameter derivation

// Imports
use crate::{
	params::{
		EvictionPolicy,
		GrapheneParams,
		HydraParams,
		MithrilParams,
		OracleRhParams,
		ParaParams,
		RrsParams,
		TwiceIdealParams,
	},
	DeriveError,
	MitigationScheme,
	ParameterSet,
};

/// Refresh window (`tREFW`), in nanoseconds
pub const REFRESH_WINDOW_NS: u64 = 64_000_000;

/// Refresh interval (`tREFI`), in nanoseconds
pub const REFRESH_INTERVAL_NS: u64 = 7_800;

/// Row cycle time (`tRC`), in nanoseconds
pub const ROW_CYCLE_NS: u64 = 55;

/// Maximum probability of missing a refresh within `tRH` activations, for PARA
pub const PARA_FAILURE_PROBABILITY: f64 = 1e-15;

/// Graphene's `k`, which accounts for the blast range
pub const GRAPHENE_K: f64 = 1.5;

/// Rows per Hydra group
pub const HYDRA_ROW_GROUP_SIZE: u64 = 128;

/// Hydra row count cache entries, per rank
pub const HYDRA_RCC_NUM_PER_RANK: u64 = 4096;

/// Mithril parameters, by `tRH`.
///
/// These are computed offline, there is no closed form for them.
pub const MITHRIL_TABLE: [(u64, MithrilParams); 5] = [
	(2048, MithrilParams {
		adaptive_threshold: 200,
		rfm_threshold:      64,
		num_table_entries:  3390,
	}),
	(1024, MithrilParams {
		adaptive_threshold: 200,
		rfm_threshold:      32,
		num_table_entries:  9800,
	}),
	(512, MithrilParams {
		adaptive_threshold: 100,
		rfm_threshold:      16,
		num_table_entries:  10200,
	}),
	(256, MithrilParams {
		adaptive_threshold: 50,
		rfm_threshold:      8,
		num_table_entries:  11000,
	}),
	(128, MithrilParams {
		adaptive_threshold: 25,
		rfm_threshold:      4,
		num_table_entries:  14000,
	}),
];

/// Derives the parameters of `scheme` for a RowHammer threshold of `trh`.
///
/// # Errors
/// Returns [`DeriveError::UnsupportedThreshold`] if `scheme` uses a lookup table without `trh`.
/// Returns [`DeriveError::DegenerateParameter`] if `trh` is 0, or if any parameter ends up
/// out of range for `trh`.
/// A `trh` of 0 is rejected before any table lookup, so it's always degenerate, even for
/// schemes with a lookup table.
pub fn derive(scheme: MitigationScheme, trh: u64) -> Result<ParameterSet, DeriveError> {
	let cx = Cx { scheme, trh };
	let trh = trh.positive_or(cx, "tRH")?;

	let params = match scheme {
		MitigationScheme::Para => {
			// Note: `1 - p^(1/tRH)`, written as `-(e^(ln(p)/tRH) - 1)` so it doesn't
			//       cancel out to 0 for large `tRH`.
			let threshold = -(PARA_FAILURE_PROBABILITY.ln() / trh as f64).exp_m1();
			if !(threshold > 0.0 && threshold < 1.0) {
				return Err(cx.degenerate("threshold"));
			}

			ParameterSet::Para(ParaParams { threshold })
		},

		MitigationScheme::TwiceIdeal => {
			let twice_rh_threshold = (trh / 4).positive_or(cx, "twice_rh_threshold")?;
			let refresh_intervals = REFRESH_WINDOW_NS as f64 / REFRESH_INTERVAL_NS as f64;
			let twice_pruning_interval_threshold = twice_rh_threshold as f64 / refresh_intervals;

			ParameterSet::TwiceIdeal(TwiceIdealParams {
				twice_rh_threshold,
				twice_pruning_interval_threshold,
			})
		},

		MitigationScheme::Graphene => {
			// Note: Only the final value is rounded, rounding any of the terms
			//       would give different results.
			let max_activations = REFRESH_WINDOW_NS as f64 / ROW_CYCLE_NS as f64;
			let num_table_entries =
				(2.0 * max_activations / trh as f64 * ((GRAPHENE_K + 1.0) / GRAPHENE_K) - 1.0).ceil() as u64;
			let activation_threshold = (trh as f64 / (2.0 * (GRAPHENE_K + 1.0))).floor() as u64;

			ParameterSet::Graphene(GrapheneParams {
				num_table_entries:    num_table_entries.positive_or(cx, "num_table_entries")?,
				activation_threshold: activation_threshold.positive_or(cx, "activation_threshold")?,
				reset_period_ns:      REFRESH_WINDOW_NS,
			})
		},

		MitigationScheme::Mithril(variant) => {
			let (_, params) = MITHRIL_TABLE
				.iter()
				.find(|&&(table_trh, _)| table_trh == trh)
				.ok_or(DeriveError::UnsupportedThreshold { scheme, trh })?;

			ParameterSet::Mithril {
				variant,
				params: *params,
			}
		},

		MitigationScheme::OracleRh => ParameterSet::OracleRh(OracleRhParams { trh }),

		MitigationScheme::Hydra => {
			let hydra_tracking_threshold = (trh / 2).positive_or(cx, "hydra_tracking_threshold")?;
			let hydra_group_threshold = (u128::from(hydra_tracking_threshold) * 4 / 5) as u64;
			let hydra_group_threshold = hydra_group_threshold.positive_or(cx, "hydra_group_threshold")?;

			ParameterSet::Hydra(HydraParams {
				hydra_tracking_threshold,
				hydra_group_threshold,
				hydra_row_group_size: HYDRA_ROW_GROUP_SIZE,
				hydra_reset_period_ns: REFRESH_WINDOW_NS,
				hydra_rcc_num_per_rank: HYDRA_RCC_NUM_PER_RANK,
				hydra_rcc_policy: EvictionPolicy::Random,
			})
		},

		MitigationScheme::Rrs => {
			let rss_threshold = (trh / 6).positive_or(cx, "rss_threshold")?;
			let max_activations = REFRESH_WINDOW_NS as f64 / ROW_CYCLE_NS as f64;
			let num_hrt_entries = (max_activations / rss_threshold as f64).ceil() as u64;
			let num_hrt_entries = num_hrt_entries.positive_or(cx, "num_hrt_entries")?;

			ParameterSet::Rrs(RrsParams {
				num_hrt_entries,
				num_rit_entries: 2 * num_hrt_entries,
				rss_threshold,
				reset_period_ns: REFRESH_WINDOW_NS,
			})
		},
	};

	tracing::trace!(%scheme, trh, ?params, "Derived parameters");
	Ok(params)
}

/// Derives the parameters of the scheme named `name` for a RowHammer threshold of `trh`.
///
/// # Errors
/// Returns [`DeriveError::UnsupportedScheme`] if `name` isn't a supported scheme.
/// Otherwise, see [`derive`].
pub fn derive_by_name(name: &str, trh: u64) -> Result<ParameterSet, DeriveError> {
	let scheme = name.parse::<MitigationScheme>()?;
	self::derive(scheme, trh)
}

/// Derivation context, for errors
#[derive(Clone, Copy, Debug)]
struct Cx {
	scheme: MitigationScheme,
	trh:    u64,
}

impl Cx {
	/// Creates a degenerate parameter error for `param`
	fn degenerate(self, param: &'static str) -> DeriveError {
		DeriveError::DegenerateParameter {
			scheme: self.scheme,
			param,
			trh: self.trh,
		}
	}
}

/// Extension trait to require a derived value to be positive
#[extend::ext(name = PositiveOr)]
impl u64 {
	/// Returns this value if it's positive, or a degenerate `param` error otherwise
	fn positive_or(self, cx: Cx, param: &'static str) -> Result<u64, DeriveError> {
		match self {
			0 => Err(cx.degenerate(param)),
			value => Ok(value),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn positive_or() {
		let cx = Cx {
			scheme: MitigationScheme::Rrs,
			trh:    5,
		};

		assert_eq!(7_u64.positive_or(cx, "value"), Ok(7));
		assert_eq!(
			0_u64.positive_or(cx, "value"),
			Err(DeriveError::DegenerateParameter {
				scheme: MitigationScheme::Rrs,
				param:  "value",
				trh:    5,
			})
		);
	}

	#[test]
	fn mithril_table_is_sorted_and_unique() {
		assert!(MITHRIL_TABLE.windows(2).all(|window| window[0].0 > window[1].0));
	}
}
