use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown order status: {0} (expected: on-the-way|reschedule|completed)")]
    UnknownStatus(String),
}
