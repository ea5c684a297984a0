//! Layout components.

pub mod frame;
pub mod navbar;
pub mod sidebar;

pub use frame::Frame;
pub use navbar::Navbar;
pub use sidebar::Sidebar;
