//! Environment variable sources.

use std::collections::HashMap;
use std::path::Path;

/// Read-only view of environment variables.
pub trait EnvSource {
    /// Look up a variable. `None` means unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-unicode values are treated as unset.
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Layers the variables of a dotenv file underneath another source.
///
/// Values from `base` win; the file only fills in what `base` lacks.
#[derive(Debug, Clone)]
pub struct DotenvOverlay<E> {
    base: E,
    file_vars: HashMap<String, String>,
}

impl<E: EnvSource> DotenvOverlay<E> {
    /// Read `path` and layer it under `base`.
    ///
    /// A missing file yields an empty overlay. Unparsable lines are logged
    /// and skipped. When a key repeats, the last occurrence wins.
    pub fn from_path(base: E, path: &Path) -> Self {
        let mut file_vars = HashMap::new();

        match dotenvy::from_path_iter(path) {
            Ok(iter) => {
                for item in iter {
                    match item {
                        Ok((key, value)) => {
                            file_vars.insert(key, value);
                        }
                        Err(e @ dotenvy::Error::LineParse(..)) => {
                            tracing::warn!(
                                path = %path.display(),
                                error = %e,
                                "Skipping unparsable dotenv line"
                            );
                        }
                        Err(e) => {
                            tracing::warn!(
                                path = %path.display(),
                                error = %e,
                                "Stopped reading dotenv file"
                            );
                            break;
                        }
                    }
                }
                tracing::debug!(
                    path = %path.display(),
                    variables = file_vars.len(),
                    "Dotenv file loaded"
                );
            }
            Err(e) if e.not_found() => {
                tracing::debug!(path = %path.display(), "No dotenv file, using process environment only");
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to open dotenv file");
            }
        }

        Self { base, file_vars }
    }

    /// Build an overlay from already-parsed variables.
    pub fn with_vars(base: E, file_vars: HashMap<String, String>) -> Self {
        Self { base, file_vars }
    }
}

impl<E: EnvSource> EnvSource for DotenvOverlay<E> {
    fn var(&self, key: &str) -> Option<String> {
        self.base
            .var(key)
            .or_else(|| self.file_vars.get(key).cloned())
    }
}
