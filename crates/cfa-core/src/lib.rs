pub mod error;
pub use error::{ApiError, CoreError};

mod api;
pub use api::TechApi;

pub mod secret;
pub use secret::{FileStore, MemoryStore, SecretStore, StoreError};

mod session;
pub use session::{Session, TOKEN_KEY, USER_ID_KEY, jwt_subject};

pub mod board;
pub use board::{RemainingState, RemainingUpdate, ScheduleBoard, ScheduledEntry};

pub mod refresh;
pub use refresh::spawn_refresher;

mod compensation;
pub use compensation::{CompensationRow, CompensationSummary};

mod technician;
pub use technician::Technician;

#[cfg(test)]
pub(crate) mod testing;
