//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! compiled-in literals (defaults.rs)
//!     + secrets (SecretsProvider: env vars, .env, secrets.json)
//!     → loader.rs (assemble)
//!     → validation.rs (semantic checks)
//!     → ToplevelConfig (immutable, passed by reference to consumers)
//! ```
//!
//! # Design Decisions
//! - Config is built once per process and never mutated
//! - Only a missing or malformed secrets record fails a load
//! - Plugin and compiler options are literal, not environment-overridable

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_validated, ConfigError, ConfigLoader};
pub use schema::{
    AbiExportOptions, AccountSource, CompilerSettings, ForkingConfig, HdAccounts, NetworkProfile,
    NetworkRegistry, PluginOptions, SizeReportOptions, ToplevelConfig,
};
pub use validation::{validate_config, ValidationError};
