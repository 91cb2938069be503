mod domain;
pub use domain::*;

mod error;
pub use error::ModelError;

pub mod date;
pub mod labels;
pub mod pay;
pub mod remaining;

pub use remaining::{RemainingDuration, format_compact};
