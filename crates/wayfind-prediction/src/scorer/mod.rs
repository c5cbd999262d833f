//! Transition-factor scorers over a weighted window of trip history.

pub mod incremental;
pub mod scan;

pub use incremental::IncrementalScorer;
pub use scan::ScanScorer;
