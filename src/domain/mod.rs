pub mod entities;
pub mod errors;
pub mod ports;

// Re-export the domain boundary types and ports.
pub use entities::User;
pub use errors::Failure;
pub use ports::{Clock, UserRepository};
