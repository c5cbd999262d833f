//! # wayfind-decay
//!
//! Evaporation weighting of chronologically ordered trip records.
//!
//! For a dataset of `n` records the oldest sits at `k = n` and the newest at
//! `k = 1`. Each gets an evaporation rate `er(k) = 2 - e^(k·rho)` clamped to
//! `[0, 1]`:
//!
//! - records with `er = 0` are dropped by the retention cutoff
//! - the rest are weighted `round(n · er)`, shifted so the smallest weight is 1

pub mod engine;
pub mod formula;
pub mod retention;
pub mod weights;

pub use engine::{EvaporationEngine, RetainedDataset};
