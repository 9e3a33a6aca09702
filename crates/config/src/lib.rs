//! Configuration management for the Niord admin tools.
//!
//! This crate provides types and loaders for the Niord server connection,
//! the bearer token used to authenticate against it, and the view defaults
//! (page sizes, languages, polling intervals) shared by the admin view models.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig, ViewConfig};
