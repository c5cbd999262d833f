//! # wayfind-evaluation
//!
//! Measures how well the estimator predicts destinations as its training
//! window grows.
//!
//! - [`accuracy`]: exact-match success ratio of predicted vs actual labels
//! - [`bucketing`]: clock readings to integer time-of-day classes
//! - [`Evaluator`]: retention, weighting, and the window-by-window loop

pub mod accuracy;
pub mod bucketing;
pub mod driver;

pub use accuracy::accuracy;
pub use bucketing::TimeBucketer;
pub use driver::Evaluator;
