use test_fixtures::{load_scenario, trip};
use wayfind_core::config::EvaporationConfig;
use wayfind_core::errors::WayfindError;
use wayfind_core::traits::IWeightCalculator;
use wayfind_decay::EvaporationEngine;

// ── Parameter validation ─────────────────────────────────────────────────

#[test]
fn rejects_non_positive_rho() {
    for rho in [0.0, -0.01, f64::NAN] {
        let err = EvaporationEngine::with_rho(rho).unwrap_err();
        assert!(
            matches!(err, WayfindError::InvalidParameter { .. }),
            "rho {rho} should be an invalid parameter"
        );
    }
}

// ── Retention cutoff ─────────────────────────────────────────────────────

#[test]
fn two_hundred_recordings_are_all_retained_at_default_rho() {
    // The curve only reaches zero at k = 217 for rho = 0.0032.
    let engine = EvaporationEngine::with_rho(0.0032).unwrap();
    assert_eq!(engine.retention_cutoff_index(200).unwrap(), 0);
    assert_eq!(engine.retention_cutoff_index(216).unwrap(), 0);
    assert_eq!(engine.retention_cutoff_index(217).unwrap(), 1);
}

#[test]
fn cutoff_grows_with_dataset_length() {
    let engine = EvaporationEngine::with_rho(0.0032).unwrap();
    assert_eq!(engine.retention_cutoff_index(300).unwrap(), 84);
    assert_eq!(engine.retention_cutoff_index(1_000).unwrap(), 784);
}

#[test]
fn cutoff_when_everything_evaporated_is_dataset_length() {
    let engine = EvaporationEngine::with_rho(1.0).unwrap();
    assert_eq!(engine.retention_cutoff_index(10).unwrap(), 10);
}

// ── Weights ──────────────────────────────────────────────────────────────

#[test]
fn weights_align_with_dataset_and_start_at_one() {
    let engine = EvaporationEngine::with_rho(0.0032).unwrap();
    let weights = engine.weights(150).unwrap();
    assert_eq!(weights.len(), 150);
    assert_eq!(weights[0], 1);
    assert_eq!(*weights.iter().min().unwrap(), 1);
    // newest: round(150 · (2 - e^0.0032)) = 150, oldest: round(150 · (2 - e^0.48)) = 58
    assert_eq!(*weights.last().unwrap(), 150 - 58 + 1);
}

// ── Retain ───────────────────────────────────────────────────────────────

#[test]
fn retain_drops_prefix_and_weights_the_rest() {
    let records: Vec<_> = (0..5)
        .map(|i| trip(i, "A", &format!("D{i}"), false, 1, 0))
        .collect();
    // rho = 0.3: er(k) > 0 only for k <= 2, so the 3 oldest go.
    let engine = EvaporationEngine::with_rho(0.3).unwrap();
    let retained = engine.retain(records).unwrap();
    assert_eq!(retained.cutoff_index, 3);
    assert_eq!(retained.dataset.len(), 2);
    assert_eq!(retained.dataset.records()[0].end_location.as_str(), "D3");
    assert_eq!(retained.dataset.weights()[0], 1);
}

#[test]
fn retain_without_cutoff_keeps_everything() {
    let records: Vec<_> = (0..5)
        .map(|i| trip(i, "A", "B", false, 1, 0))
        .collect();
    let config = EvaporationConfig {
        rho: 0.3,
        apply_retention_cutoff: false,
    };
    let engine = EvaporationEngine::new(&config).unwrap();
    let retained = engine.retain(records).unwrap();
    assert_eq!(retained.cutoff_index, 0);
    assert_eq!(retained.dataset.len(), 5);
    // er for k = 5..1: 0, 0, 0, 0.1779, 0.6501
    // round(5 · er) = 0, 0, 0, 1, 3 -> shifted: 1, 1, 1, 2, 4
    assert_eq!(retained.dataset.weights(), &[1, 1, 1, 2, 4]);
}

#[test]
fn retain_everything_evaporated_yields_empty_dataset() {
    let records = vec![trip(1, "A", "B", false, 1, 0); 4];
    let engine = EvaporationEngine::with_rho(1.0).unwrap();
    let retained = engine.retain(records).unwrap();
    assert_eq!(retained.cutoff_index, 4);
    assert!(retained.dataset.is_empty());
}

#[test]
fn golden_scenario_cutoff() {
    let scenario = load_scenario("commute_weeks.json");
    let engine = EvaporationEngine::with_rho(scenario.rho).unwrap();
    let retained = engine.retain(scenario.training.clone()).unwrap();
    assert_eq!(retained.cutoff_index, scenario.expected.cutoff_index);
    assert_eq!(
        retained.dataset.len(),
        scenario.training.len() - scenario.expected.cutoff_index
    );
}
