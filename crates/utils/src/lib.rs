//! String helpers, timers and a retrying runner built on `strictkit-core`.

pub mod holder;
pub mod runner;
pub mod text;
pub mod timing;
pub mod validation;

pub use holder::ValueHolder;
pub use runner::{run_with_options, try_run_with_options};
pub use text::{example_function, is_not_empty};
pub use timing::delay;
pub use validation::validate_all;
