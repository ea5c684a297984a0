//! Frontend services: context scopes shared by every page.

pub mod context;
pub mod events;
pub mod sidebar;
pub mod socket;
