use crate::errors::WayfindResult;

/// Time-decay weighting over a chronologically ordered dataset.
pub trait IWeightCalculator: Send + Sync {
    /// Index of the oldest record whose influence has not fully evaporated.
    fn retention_cutoff_index(&self, dataset_len: usize) -> WayfindResult<usize>;

    /// One positive integer weight per record, oldest first.
    fn weights(&self, dataset_len: usize) -> WayfindResult<Vec<u64>>;
}
