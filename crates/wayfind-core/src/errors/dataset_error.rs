/// Dataset construction errors.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("weight count mismatch: {records} records but {weights} weights")]
    WeightCountMismatch { records: usize, weights: usize },

    #[error("window of {requested} records exceeds dataset length {available}")]
    WindowOutOfRange { requested: usize, available: usize },
}
