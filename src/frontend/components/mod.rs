//! UI components and layouts.

pub mod guard;
pub mod layout;

pub use guard::Protected;
