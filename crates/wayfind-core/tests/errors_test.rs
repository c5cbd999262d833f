use wayfind_core::errors::*;

#[test]
fn invalid_parameter_carries_name_and_reason() {
    let err = WayfindError::invalid("rho", "must be > 0");
    let msg = err.to_string();
    assert!(msg.contains("rho"));
    assert!(msg.contains("must be > 0"));
}

#[test]
fn length_mismatch_carries_both_lengths() {
    let err = WayfindError::LengthMismatch {
        predicted: 3,
        actual: 5,
    };
    let msg = err.to_string();
    assert!(msg.contains('3'));
    assert!(msg.contains('5'));
}

// --- From impls ---

#[test]
fn dataset_error_converts_to_wayfind_error() {
    let err: WayfindError = DatasetError::WeightCountMismatch {
        records: 4,
        weights: 2,
    }
    .into();
    assert!(matches!(err, WayfindError::Dataset(_)));
    assert!(err.to_string().contains("4 records"));
}

#[test]
fn config_error_converts_to_wayfind_error() {
    let err: WayfindError = ConfigError::ParseFailed {
        reason: "bad".into(),
    }
    .into();
    assert!(matches!(err, WayfindError::Config(_)));
}
