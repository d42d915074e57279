//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the preference data directory
pub const DATA_DIR_ENV: &str = "HELLO_WORLD_DATA_DIR";

/// File name of the preference store inside the data directory
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Persistence configuration
    pub persistence: PersistenceConfig,
    /// Window configuration
    pub window: WindowConfig,
}

/// Persistence configuration
#[derive(Debug, Clone)]
pub struct PersistenceConfig {
    /// Directory holding the preference store
    pub data_dir: PathBuf,
}

/// Native window configuration
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial inner size (width, height)
    pub inner_size: [f32; 2],
    /// Minimum inner size (width, height)
    pub min_inner_size: [f32; 2],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hello World App".to_string(),
            inner_size: [420.0, 640.0],
            min_inner_size: [320.0, 480.0],
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            persistence: PersistenceConfig {
                data_dir: env::var_os(DATA_DIR_ENV)
                    .map(PathBuf::from)
                    .unwrap_or_else(default_data_dir),
            },
            window: WindowConfig::default(),
        }
    }

    /// Full path of the preference store file
    pub fn preferences_path(&self) -> PathBuf {
        self.persistence.data_dir.join(PREFERENCES_FILE)
    }
}

// ~/.hello-world-app, or a relative directory when HOME is unset
fn default_data_dir() -> PathBuf {
    match env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".hello-world-app"),
        None => PathBuf::from(".hello-world-app"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_data_dir_from_env() {
        env::set_var(DATA_DIR_ENV, "/tmp/hello-world-test");
        let config = Config::from_env();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(
            config.persistence.data_dir,
            PathBuf::from("/tmp/hello-world-test")
        );
        assert_eq!(
            config.preferences_path(),
            PathBuf::from("/tmp/hello-world-test/preferences.json")
        );
    }

    #[test]
    #[serial]
    fn test_default_data_dir_under_home() {
        env::remove_var(DATA_DIR_ENV);
        let config = Config::from_env();

        assert!(config.persistence.data_dir.ends_with(".hello-world-app"));
        assert!(config.preferences_path().ends_with("preferences.json"));
    }

    #[test]
    fn test_window_defaults() {
        let window = WindowConfig::default();
        assert_eq!(window.title, "Hello World App");
        assert!(window.inner_size[0] >= window.min_inner_size[0]);
        assert!(window.inner_size[1] >= window.min_inner_size[1]);
    }
}
