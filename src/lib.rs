//! Tmeon: a minimal tabbed desktop web browser shell.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod ipc_handler;
pub mod managers;
pub mod services;
pub mod surface;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
