//! Secrets resolution.
//!
//! # Data Flow
//! ```text
//! process environment ──┐
//!                       ├─→ env.rs (EnvSource, process wins over .env)
//! .env file (optional) ─┘
//!                            ╲
//! secrets.json ─→ file.rs ────→ provider.rs (SecretsProvider) ─→ Secrets
//! ```
//!
//! # Security Constraints
//! - Secret values are never logged, only their presence
//! - `Secrets` redacts itself in `Debug` output
//! - The `.env` file is read into memory and never exported to the process env
//! - Only the secrets file is a hard requirement; absent env vars become ""

pub mod env;
pub mod file;
pub mod provider;
pub mod types;

pub use env::{DotenvOverlay, EnvSource, ProcessEnv};
pub use file::SecretsFile;
pub use provider::{EnvSecrets, SecretsProvider, DEPLOY_KEY_ENV_VAR, SEED_PHRASE_ENV_VAR};
pub use types::{LoadError, Secrets};
