pub mod activity;
pub mod roster_messages;

pub use activity::Activity;
pub use roster_messages::{ErrorDetail, MessageResponse, SignupRequest};
