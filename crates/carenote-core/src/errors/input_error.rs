/// Errors raised while validating the notes handed to the engine.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("invalid input at index {index}: {reason}")]
    InvalidInput { index: usize, reason: String },
}
