//! Console configuration: endpoint locations read from an optional RON file.
//!
//! A missing file is the normal case and silently falls back to the built-in
//! defaults. A file that exists but cannot be read or parsed is logged and
//! the defaults are used, so a typo never prevents startup.

use std::fs;
use std::path::Path;

use desk_logging::desk_warn;
use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_FILENAME: &str = "dubdesk.ron";

/// Where the console points its purge and submission calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub base_url: String,
    pub purge_path: String,
    pub submit_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            purge_path: "/purge_temp".to_string(),
            submit_path: "/".to_string(),
        }
    }
}

/// Loads the configuration, falling back to defaults when the file is absent
/// or unusable.
pub(crate) fn load(path: &Path) -> AppConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return AppConfig::default();
        }
        Err(err) => {
            desk_warn!("Failed to read config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => config,
        Err(err) => {
            desk_warn!("Failed to parse config from {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");

        let config = load(&dir.path().join(CONFIG_FILENAME));

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn file_overrides_are_applied_over_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILENAME);
        let mut file = std::fs::File::create(&path).expect("create config");
        write!(
            file,
            r#"(base_url: "http://dub.example:8080", submit_path: "/process_video")"#
        )
        .expect("write config");

        let config = load(&path);

        assert_eq!(config.base_url, "http://dub.example:8080");
        assert_eq!(config.purge_path, "/purge_temp");
        assert_eq!(config.submit_path, "/process_video");
    }

    #[test]
    fn unparsable_file_yields_defaults() {
        desk_logging::initialize_for_tests();
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "definitely not ron").expect("write config");

        assert_eq!(load(&path), AppConfig::default());
    }
}
