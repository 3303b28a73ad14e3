//! SEEDGATE service shell.
//!
//! Configuration, logging setup and the command layer that turns
//! `seedgate-store` results into camelCase JSON DTOs. The `seedgate`
//! binary is a thin CLI over [`commands`].

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod commands;
pub mod config;
pub mod logging;

pub use config::Config;
