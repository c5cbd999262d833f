//! # wayfind-prediction
//!
//! Destination prediction from weighted trip history.
//!
//! ## Transition factor
//!
//! For a query and a candidate destination, every feature `f` contributes
//!
//! ```text
//! ratio_f = Σ w(r) [r.f = q.f ∧ r.end = dst]  /  Σ w(r) [r.f = q.f]
//! ```
//!
//! and the factor is `Π ratio_f` over day, start location, holiday,
//! passengers and time bucket. If any denominator is zero the factor is 0.
//!
//! ## Two scorers
//!
//! | Scorer | Cost per (query, candidate) | Use |
//! |--------|-----------------------------|-----|
//! | [`ScanScorer`] | O(window) | reference, one-off predictions |
//! | [`IncrementalScorer`] | O(1) lookups | growing-window evaluation |
//!
//! Both produce the same factor for the same window.

pub mod predictor;
pub mod scorer;
pub mod tally;

pub use predictor::DestinationPredictor;
pub use scorer::{IncrementalScorer, ScanScorer};
pub use tally::FeatureTally;
