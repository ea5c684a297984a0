//! Frontend module for the `EventPulse` application.

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
