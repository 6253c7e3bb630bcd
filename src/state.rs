use crate::config::ServerConfig;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state
///
/// Everything here is immutable after startup; handlers own all per-request
/// data, so cloning the state only bumps the config refcount.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Directory served under `/static`
    pub static_root: PathBuf,

    /// Document served at `/`
    pub index_file: PathBuf,
}

impl AppState {
    /// Create new application state
    pub fn new(config: ServerConfig) -> Self {
        // Resolve the frontend paths once at startup
        let static_root = PathBuf::from(&config.static_dir);
        let index_file = static_root.join("index.html");

        if !index_file.is_file() {
            tracing::warn!(
                dir = %static_root.display(),
                "no index.html in the static directory; / and /static/* will return 404"
            );
        }

        Self {
            config: Arc::new(config),
            static_root,
            index_file,
        }
    }

    /// Check if the frontend bundle is present on disk
    pub fn frontend_available(&self) -> bool {
        self.index_file.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_resolves_paths_from_config() {
        let cfg = ServerConfig {
            static_dir: "assets/web".to_string(),
            ..Default::default()
        };
        let state = AppState::new(cfg);
        assert_eq!(state.static_root, PathBuf::from("assets/web"));
        assert_eq!(state.index_file, PathBuf::from("assets/web/index.html"));
    }

    #[test]
    fn test_frontend_available_tracks_index_file() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = ServerConfig {
            static_dir: dir.path().to_string_lossy().into_owned(),
            ..Default::default()
        };

        let state = AppState::new(cfg.clone());
        assert!(!state.frontend_available());

        fs::write(dir.path().join("index.html"), "<!doctype html>").unwrap();
        let state = AppState::new(cfg);
        assert!(state.frontend_available());
    }
}
