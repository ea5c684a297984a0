//! Backend utilities.

pub mod config;
pub mod paths;
pub mod preferences;
pub mod route;
