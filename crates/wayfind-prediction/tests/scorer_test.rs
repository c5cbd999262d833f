use test_fixtures::{features, load_scenario, trip, two_to_one_history};
use wayfind_core::models::{Location, WeightedDataset};
use wayfind_core::traits::ITransitionScorer;
use wayfind_prediction::{IncrementalScorer, ScanScorer};

fn unit_weighted(records: Vec<wayfind_core::models::TripRecord>) -> WeightedDataset {
    let weights = vec![1; records.len()];
    WeightedDataset::new(records, weights).unwrap()
}

#[test]
fn factor_is_product_of_five_ratios() {
    let dataset = unit_weighted(two_to_one_history());
    let scorer = ScanScorer::new(dataset.full());
    let query = features(1, "A", false, 1, 0);

    let to_b = scorer.factor(&query, &Location::from("B"));
    let to_c = scorer.factor(&query, &Location::from("C"));
    assert!((to_b - (2.0f64 / 3.0).powi(5)).abs() < 1e-12);
    assert!((to_c - (1.0f64 / 3.0).powi(5)).abs() < 1e-12);
}

#[test]
fn unseen_feature_value_zeroes_factor() {
    let dataset = unit_weighted(two_to_one_history());
    let scorer = ScanScorer::new(dataset.full());
    // No record ever had 7 passengers.
    let query = features(1, "A", false, 7, 0);
    assert_eq!(scorer.factor(&query, &Location::from("B")), 0.0);
}

#[test]
fn empty_window_scores_zero() {
    let dataset = unit_weighted(two_to_one_history());
    let scorer = ScanScorer::new(dataset.window(0).unwrap());
    let query = features(1, "A", false, 1, 0);
    assert_eq!(scorer.factor(&query, &Location::from("B")), 0.0);
    assert_eq!(IncrementalScorer::new().factor(&query, &Location::from("B")), 0.0);
}

#[test]
fn weights_shift_the_balance() {
    // One heavy recent A -> C outweighs two light A -> B.
    let records = two_to_one_history();
    let dataset = WeightedDataset::new(records, vec![1, 1, 10, 1]).unwrap();
    let scorer = ScanScorer::new(dataset.full());
    let query = features(1, "A", false, 1, 0);
    assert!(
        scorer.factor(&query, &Location::from("C")) > scorer.factor(&query, &Location::from("B"))
    );
}

#[test]
fn destination_never_seen_scores_zero_with_full_evidence() {
    let dataset = unit_weighted(two_to_one_history());
    let scorer = ScanScorer::new(dataset.full());
    let query = features(1, "A", false, 1, 0);
    assert_eq!(scorer.factor(&query, &Location::from("Z")), 0.0);
}

#[test]
fn incremental_matches_scan_while_window_grows() {
    let scenario = load_scenario("commute_weeks.json");
    let weights: Vec<u64> = (1..=scenario.training.len() as u64).collect();
    let dataset = WeightedDataset::new(scenario.training.clone(), weights).unwrap();

    let mut incremental = IncrementalScorer::new();
    for (i, (record, weight)) in dataset.full().iter().enumerate() {
        incremental.push(record, weight);
        let scan = ScanScorer::new(dataset.window(i + 1).unwrap());
        assert_eq!(incremental.window_len(), scan.window_len());
        for query in &scenario.test {
            for destination in ["home", "work", "gym", "other"] {
                let d = Location::from(destination);
                assert_eq!(
                    incremental.factor(&query.features, &d),
                    scan.factor(&query.features, &d),
                    "window {} destination {}",
                    i + 1,
                    destination
                );
            }
        }
    }
}

#[test]
fn from_window_equals_pushing_each_record() {
    let records = vec![
        trip("Mon", "home", "work", false, 1, 2),
        trip("Mon", "work", "home", false, 1, 4),
        trip("Sat", "home", "gym", true, 2, 3),
    ];
    let dataset = WeightedDataset::new(records, vec![1, 2, 3]).unwrap();
    let built = IncrementalScorer::from_window(dataset.full());
    let query = features("Mon", "home", false, 1, 2);
    let work = Location::from("work");
    assert_eq!(
        built.tally(&query, &work),
        ScanScorer::new(dataset.full()).tally(&query, &work)
    );
}
