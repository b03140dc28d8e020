//! Configuration for classr
//!
//! Server settings plus model artifact path resolution.

mod server;

pub use server::ServerConfig;

use std::path::PathBuf;

/// Environment variable overriding the artifact location.
pub const MODEL_PATH_ENV: &str = "CLASSR_MODEL_PATH";

/// Artifact location used when neither flag nor environment sets one.
pub const DEFAULT_MODEL_PATH: &str = "models/model.bin";

/// Resolve the artifact path: explicit flag, then environment, then default.
pub fn resolve_model_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| {
        std::env::var(MODEL_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let path = resolve_model_path(Some(PathBuf::from("/tmp/custom.bin")));
        assert_eq!(path, PathBuf::from("/tmp/custom.bin"));
    }

    #[test]
    fn defaults_without_flag_or_env() {
        // Env var reads are process-wide; only assert the no-env fallback
        // when the variable is genuinely absent.
        if std::env::var(MODEL_PATH_ENV).is_err() {
            assert_eq!(resolve_model_path(None), PathBuf::from(DEFAULT_MODEL_PATH));
        }
    }
}
