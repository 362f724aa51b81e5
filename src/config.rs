//! Generator settings
//!
//! [`GeneratorConfig::load`] reads the `[generator]` section of
//! `config/sql2entity.toml` when present and layers `SQL2ENTITY__GENERATOR__*`
//! environment variables over it.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/sql2entity.toml";
const ENV_PREFIX: &str = "SQL2ENTITY";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Text written verbatim before the generated class
    #[serde(default = "default_prefix_path")]
    pub prefix_path: PathBuf,
    /// Text written verbatim after the generated class
    #[serde(default = "default_suffix_path")]
    pub suffix_path: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Extension of the generated file, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_prefix_path() -> PathBuf {
    PathBuf::from("prefix")
}

fn default_suffix_path() -> PathBuf {
    PathBuf::from("suffix")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_extension() -> String {
    "cs".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            prefix_path: default_prefix_path(),
            suffix_path: default_suffix_path(),
            output_dir: default_output_dir(),
            extension: default_extension(),
        }
    }
}

impl GeneratorConfig {
    /// Load from [`DEFAULT_CONFIG_PATH`] and the environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load from an explicit config file (optional) and the environment
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

        let settings = match builder.build() {
            Ok(cfg) => cfg,
            Err(err) => {
                if path.exists() {
                    log::warn!(
                        "Failed to load config file {}, falling back to env: {}",
                        path.display(),
                        err
                    );
                }
                Config::builder()
                    .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
                    .build()
                    .map_err(|env_err| {
                        ConfigError::Message(format!(
                            "Failed to load configuration from file and env: {}, then env-only error: {}",
                            err, env_err
                        ))
                    })?
            }
        };

        match settings.get::<GeneratorConfig>("generator") {
            Ok(cfg) => Ok(cfg),
            Err(ConfigError::NotFound(_)) => Ok(GeneratorConfig::default()),
            Err(e) => Err(ConfigError::Message(format!(
                "Generator configuration is invalid: {}",
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Loading reads the process environment, so tests touching it run one at a time
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct EnvVar(&'static str);

    impl EnvVar {
        fn set(key: &'static str, value: &str) -> Self {
            std::env::set_var(key, value);
            Self(key)
        }
    }

    impl Drop for EnvVar {
        fn drop(&mut self) {
            std::env::remove_var(self.0);
        }
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let temp_dir = TempDir::new().unwrap();
        let cfg = GeneratorConfig::load_from(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg, GeneratorConfig::default());
    }

    #[test]
    fn test_file_overrides_and_defaults_fill_in() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sql2entity.toml");
        fs::write(
            &path,
            "[generator]\noutput_dir = \"generated\"\nprefix_path = \"templates/prefix.txt\"\n",
        )
        .unwrap();

        let cfg = GeneratorConfig::load_from(&path).unwrap();
        assert_eq!(cfg.output_dir, PathBuf::from("generated"));
        assert_eq!(cfg.prefix_path, PathBuf::from("templates/prefix.txt"));
        assert_eq!(cfg.suffix_path, PathBuf::from("suffix"));
        assert_eq!(cfg.extension, "cs");
    }

    #[test]
    fn test_malformed_file_falls_back_to_env() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sql2entity.toml");
        fs::write(&path, "[generator\nbroken").unwrap();

        let cfg = GeneratorConfig::load_from(&path).unwrap();
        assert_eq!(cfg, GeneratorConfig::default());

        let _extension = EnvVar::set("SQL2ENTITY__GENERATOR__EXTENSION", "txt");
        let cfg = GeneratorConfig::load_from(&path).unwrap();
        assert_eq!(cfg.extension, "txt");
        assert_eq!(cfg.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_env_overrides_file() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sql2entity.toml");
        fs::write(
            &path,
            "[generator]\noutput_dir = \"generated\"\nextension = \"cs\"\n",
        )
        .unwrap();

        let _extension = EnvVar::set("SQL2ENTITY__GENERATOR__EXTENSION", "txt");
        let cfg = GeneratorConfig::load_from(&path).unwrap();
        assert_eq!(cfg.extension, "txt");
        assert_eq!(cfg.output_dir, PathBuf::from("generated"));
    }
}
