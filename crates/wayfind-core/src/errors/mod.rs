mod config_error;
mod dataset_error;

pub use config_error::ConfigError;
pub use dataset_error::DatasetError;

/// Top-level error for every Wayfind operation.
///
/// Zero-evidence outcomes (an empty window, a feature value never seen) and the
/// all-candidates-excluded tie are not errors. They surface as a `0.0` factor or
/// as an [`Evidence`](crate::models::Evidence) marker on the prediction.
#[derive(Debug, thiserror::Error)]
pub enum WayfindError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("length mismatch: {predicted} predictions vs {actual} actual labels")]
    LengthMismatch { predicted: usize, actual: usize },

    #[error("candidate set is empty; nothing to predict")]
    EmptyCandidateSet,

    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl WayfindError {
    /// Shorthand for an [`WayfindError::InvalidParameter`].
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias used across the workspace.
pub type WayfindResult<T> = Result<T, WayfindError>;
