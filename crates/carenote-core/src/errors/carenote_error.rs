use super::{ConfigError, InputError};

/// Top-level error for every fallible carenote operation.
#[derive(Debug, thiserror::Error)]
pub enum CarenoteError {
    #[error("input error: {0}")]
    Input(#[from] InputError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type CarenoteResult<T> = Result<T, CarenoteError>;

impl CarenoteError {
    /// Index of the offending note when the error is tied to one.
    pub fn note_index(&self) -> Option<usize> {
        match self {
            Self::Input(InputError::InvalidInput { index, .. }) => Some(*index),
            Self::Config(_) => None,
        }
    }
}
