// Tmeon shared type definitions
// Each submodule defines types used across the application.

pub mod chrome;
pub mod command;
pub mod config;
pub mod download;
pub mod errors;
pub mod menu;
pub mod tab;
