use test_fixtures::{features, load_scenario, locations, trip, two_to_one_history};
use wayfind_core::constants::SELF_LOOP_FACTOR;
use wayfind_core::errors::WayfindError;
use wayfind_core::models::{CandidateSet, Evidence, Location, WeightedDataset};
use wayfind_decay::EvaporationEngine;
use wayfind_prediction::{DestinationPredictor, IncrementalScorer, ScanScorer};

fn predictor(names: &[&str]) -> DestinationPredictor {
    DestinationPredictor::new(CandidateSet::from_locations(locations(names))).unwrap()
}

#[test]
fn empty_candidate_set_is_rejected() {
    let err = DestinationPredictor::new(CandidateSet::default()).unwrap_err();
    assert!(matches!(err, WayfindError::EmptyCandidateSet));
}

#[test]
fn picks_majority_destination_and_excludes_self_loop() {
    let engine = EvaporationEngine::with_rho(0.01).unwrap();
    let retained = engine.retain(two_to_one_history()).unwrap();
    let scorer = ScanScorer::new(retained.dataset.full());
    let query = features(1, "A", false, 1, 0);

    let prediction = predictor(&["A", "B", "C"]).predict(&scorer, &query);
    assert_eq!(prediction.destination, Location::from("B"));
    assert_eq!(prediction.evidence, Evidence::Supported);
    assert!(prediction.is_supported());
}

#[test]
fn self_loop_scores_sentinel() {
    let dataset = WeightedDataset::new(two_to_one_history(), vec![1; 4]).unwrap();
    let scorer = ScanScorer::new(dataset.full());
    let scores = predictor(&["A", "B", "C"]).score_candidates(&scorer, &features(1, "A", false, 1, 0));
    assert_eq!(scores[0], (Location::from("A"), SELF_LOOP_FACTOR));
    assert!(scores[1].1 > scores[2].1);
}

#[test]
fn zero_evidence_takes_first_eligible_candidate() {
    let dataset = WeightedDataset::new(two_to_one_history(), vec![1; 4]).unwrap();
    let scorer = ScanScorer::new(dataset.full());
    // Day 9 never occurs: every eligible factor is 0.
    let query = features(9, "A", false, 1, 0);

    let prediction = predictor(&["A", "C", "B"]).predict(&scorer, &query);
    assert_eq!(prediction.destination, Location::from("C"));
    assert_eq!(prediction.factor, 0.0);
    assert_eq!(prediction.evidence, Evidence::NoEvidence);
}

#[test]
fn all_candidates_excluded_returns_first() {
    let dataset = WeightedDataset::new(two_to_one_history(), vec![1; 4]).unwrap();
    let scorer = ScanScorer::new(dataset.full());
    let prediction = predictor(&["A"]).predict(&scorer, &features(1, "A", false, 1, 0));
    assert_eq!(prediction.destination, Location::from("A"));
    assert_eq!(prediction.factor, SELF_LOOP_FACTOR);
    assert_eq!(prediction.evidence, Evidence::AllExcluded);
}

#[test]
fn exact_tie_goes_to_candidate_order() {
    let records = vec![
        trip(1, "home", "work", false, 1, 0),
        trip(1, "home", "gym", false, 1, 0),
    ];
    let dataset = WeightedDataset::new(records, vec![1, 1]).unwrap();
    let scorer = ScanScorer::new(dataset.full());
    let query = features(1, "home", false, 1, 0);

    assert_eq!(
        predictor(&["gym", "work"]).predict(&scorer, &query).destination,
        Location::from("gym")
    );
    assert_eq!(
        predictor(&["work", "gym"]).predict(&scorer, &query).destination,
        Location::from("work")
    );
}

#[test]
fn parallel_and_sequential_agree_in_order() {
    let scenario = load_scenario("commute_weeks.json");
    let engine = EvaporationEngine::with_rho(scenario.rho).unwrap();
    let retained = engine.retain(scenario.training.clone()).unwrap();
    let scorer = IncrementalScorer::from_window(retained.dataset.full());
    let predictor =
        DestinationPredictor::new(CandidateSet::from_end_locations(&scenario.test)).unwrap();

    let sequential = predictor.predict_all(&scorer, &scenario.test, false);
    let parallel = predictor.predict_all(&scorer, &scenario.test, true);
    assert_eq!(sequential, parallel);

    let destinations: Vec<Location> = sequential.into_iter().map(|p| p.destination).collect();
    assert_eq!(destinations, scenario.expected.final_predictions);
}

#[test]
fn works_through_trait_object() {
    let dataset = WeightedDataset::new(two_to_one_history(), vec![1; 4]).unwrap();
    let scan = ScanScorer::new(dataset.full());
    let scorer: &dyn wayfind_core::traits::ITransitionScorer = &scan;
    let prediction = predictor(&["A", "B", "C"]).predict(scorer, &features(1, "A", false, 1, 0));
    assert_eq!(prediction.destination, Location::from("B"));
}
