//! Error handling for carenote.
//! One error enum per subsystem, `thiserror` only, aggregated by `CarenoteError`.

pub mod carenote_error;
pub mod config_error;
pub mod input_error;

pub use carenote_error::{CarenoteError, CarenoteResult};
pub use config_error::ConfigError;
pub use input_error::InputError;
