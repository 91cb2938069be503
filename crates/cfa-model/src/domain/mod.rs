mod order_id;
pub use order_id::OrderId;

mod address;
pub use address::GuestAddress;

mod order;
pub use order::Order;

mod page;
pub use page::OrderPage;

mod status;
pub use status::StatusChange;

mod remaining_time;
pub use remaining_time::{RemainingTimeComponents, RemainingTimeResponse};

/// Identifier of the technician, as carried in the `sub` claim of the login token.
pub type TechnicianId = String;
