//! Backend of the application: storage, configuration and routing.

pub mod services;
pub mod utils;
