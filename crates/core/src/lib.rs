//! Outcome container, configuration shape, handler contracts and errors.
//!
//! Foundation crate -- no async runtime or I/O dependencies.

pub mod config;
pub mod error;
pub mod handlers;
pub mod outcome;

pub use config::ConfigOptions;
pub use error::{StrictkitError, StrictkitResult};
pub use handlers::{AsyncOperation, EventHandler, Validator};
pub use outcome::{create_error_result, create_success_result, Outcome};
