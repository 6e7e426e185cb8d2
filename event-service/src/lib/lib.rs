pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::access;
pub use domain::account;
pub use domain::comment;
pub use domain::event;
