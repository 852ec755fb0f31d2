//! Heroforge Engine library.
//!
//! Hosts the domain: reads configuration, forges the roster and renders it.
//!
//! ## Structure
//!
//! - `config` - Environment-driven configuration
//! - `roster` - Builder reuse through the director, plus safety probes
//! - `render` - Text and JSON presentation

pub mod config;
pub mod render;
pub mod roster;

pub use config::{ConfigError, ForgeConfig, OutputFormat};
pub use roster::{forge_roster, ForgeReport};
