//! Backend services.

pub mod session;

pub use session::{SessionRecord, SessionStore};
