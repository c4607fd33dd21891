//! Scheme name tests

use rhparams::{DeriveError, MitigationScheme, MithrilVariant};

#[test]
fn test_names_round_trip() {
	for scheme in MitigationScheme::ALL {
		assert_eq!(scheme.name().parse::<MitigationScheme>(), Ok(scheme));
		assert_eq!(scheme.to_string(), scheme.name());
	}
}

#[test]
fn test_exact_names() {
	assert_eq!("PARA".parse::<MitigationScheme>(), Ok(MitigationScheme::Para));
	assert_eq!("TWiCe-Ideal".parse::<MitigationScheme>(), Ok(MitigationScheme::TwiceIdeal));
	assert_eq!("OracleRH".parse::<MitigationScheme>(), Ok(MitigationScheme::OracleRh));
	assert_eq!("RRS".parse::<MitigationScheme>(), Ok(MitigationScheme::Rrs));
}

#[test]
fn test_names_are_case_sensitive() {
	for name in ["para", "graphene", "HYDRA", "rrs", "Twice-Ideal", " PARA", "Graphene "] {
		assert_eq!(
			name.parse::<MitigationScheme>(),
			Err(DeriveError::UnsupportedScheme { name: name.to_owned() })
		);
	}
}

#[test]
fn test_mithril_family_by_containment() {
	assert_eq!(
		"MithrilCache-512".parse::<MitigationScheme>(),
		Ok(MitigationScheme::Mithril(MithrilVariant::Cache))
	);
	assert_eq!(
		"Baseline-MithrilDDR4".parse::<MitigationScheme>(),
		Ok(MitigationScheme::Mithril(MithrilVariant::Ddr4))
	);
	assert_eq!(
		"Mithril".parse::<MitigationScheme>(),
		Err(DeriveError::UnsupportedScheme {
			name: "Mithril".to_owned(),
		})
	);
}

#[test]
fn test_serde() {
	let schemes = serde_json::from_str::<Vec<MitigationScheme>>(r#"["PARA", "MithrilDDR4", "Hydra"]"#)
		.expect("Unable to parse schemes");
	assert_eq!(schemes, [
		MitigationScheme::Para,
		MitigationScheme::Mithril(MithrilVariant::Ddr4),
		MitigationScheme::Hydra,
	]);
	assert_eq!(
		serde_json::to_string(&schemes).expect("Unable to serialize schemes"),
		r#"["PARA","MithrilDDR4","Hydra"]"#
	);

	assert!(serde_json::from_str::<MitigationScheme>(r#""NoDefense""#).is_err());
}
