use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::AppConfig;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "TRANSIT_OPS_CONFIG";

/// Config file picked up from the working directory when nothing else is given
pub const DEFAULT_CONFIG_FILE: &str = "transit-ops.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Where the config comes from, in priority order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` flag or environment variable: must exist
    Explicit(PathBuf),
    /// Default file in the working directory: optional
    Default(PathBuf),
}

/// Pick the config path: flag, then environment, then `./transit-ops.toml`.
pub fn resolve_config_path(
    flag: Option<&Path>,
    env_value: Option<&str>,
    cwd: &Path,
) -> ConfigSource {
    if let Some(path) = flag {
        return ConfigSource::Explicit(path.to_path_buf());
    }
    if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        return ConfigSource::Explicit(PathBuf::from(value));
    }
    ConfigSource::Default(cwd.join(DEFAULT_CONFIG_FILE))
}

/// Parse config text. Every section is optional.
pub fn parse_config(text: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Read the config from `source`. A missing default file yields the default
/// config; a missing explicit file is an error.
pub fn read_config(source: &ConfigSource) -> Result<AppConfig, ConfigError> {
    let (path, required) = match source {
        ConfigSource::Explicit(p) => (p, true),
        ConfigSource::Default(p) => (p, false),
    };
    if !path.exists() {
        if required {
            return Err(ConfigError::NotFound(path.clone()));
        }
        return Ok(AppConfig::default());
    }
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    let mut config = parse_config(&text)?;
    if let Some(dir) = path.parent() {
        config.catalog.anchor_to(dir);
    }
    Ok(config)
}

/// Resolve and read the config for this process. Also returns where it came
/// from so the caller can log it once logging is up.
pub fn load_config(flag: Option<&Path>) -> Result<(AppConfig, ConfigSource), ConfigError> {
    let cwd = std::env::current_dir().map_err(|e| ConfigError::ReadError {
        path: PathBuf::from("."),
        source: e,
    })?;
    let env_value = std::env::var(CONFIG_ENV).ok();
    let source = resolve_config_path(flag, env_value.as_deref(), &cwd);
    let config = read_config(&source)?;
    Ok((config, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_config() -> &'static str {
        r##"[ui]
show_key_hints = false

[ui.colors]
background = "#000000"

[picker]
max_results = 20
chip_limit = 3

[catalog]
rail_file = "rail.toml"

[log]
level = "debug"
"##
    }

    #[test]
    fn parse_full_config() {
        let config = parse_config(sample_config()).unwrap();
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("background").unwrap(), "#000000");
        assert_eq!(config.picker.max_results, 20);
        assert_eq!(config.picker.chip_limit, 3);
        // unspecified field keeps its default
        assert_eq!(config.picker.max_popup_height, 12);
        assert_eq!(config.catalog.rail_file, Some(PathBuf::from("rail.toml")));
        assert!(config.catalog.routes_file.is_none());
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let config = parse_config("").unwrap();
        assert!(config.ui.show_key_hints);
        assert_eq!(config.picker.max_results, 50);
        assert_eq!(config.picker.chip_limit, 8);
        assert_eq!(config.log.level, "warn");
        assert!(config.log.file.is_none());
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let err = parse_config("[picker\nmax_results = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn resolve_prefers_flag_then_env() {
        let cwd = Path::new("/work");
        assert_eq!(
            resolve_config_path(Some(Path::new("a.toml")), Some("b.toml"), cwd),
            ConfigSource::Explicit(PathBuf::from("a.toml"))
        );
        assert_eq!(
            resolve_config_path(None, Some("b.toml"), cwd),
            ConfigSource::Explicit(PathBuf::from("b.toml"))
        );
        assert_eq!(
            resolve_config_path(None, Some("  "), cwd),
            ConfigSource::Default(PathBuf::from("/work/transit-ops.toml"))
        );
    }

    #[test]
    fn missing_default_file_is_fine() {
        let tmp = TempDir::new().unwrap();
        let source = ConfigSource::Default(tmp.path().join(DEFAULT_CONFIG_FILE));
        let config = read_config(&source).unwrap();
        assert_eq!(config.picker.max_results, 50);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let source = ConfigSource::Explicit(tmp.path().join("nope.toml"));
        assert!(matches!(read_config(&source), Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn read_from_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, sample_config()).unwrap();
        let config = read_config(&ConfigSource::Explicit(path)).unwrap();
        assert_eq!(config.picker.max_results, 20);
    }

    #[test]
    fn catalog_paths_follow_the_config_file() {
        let tmp = TempDir::new().unwrap();
        let conf = tmp.path().join("conf");
        fs::create_dir(&conf).unwrap();
        let path = conf.join("transit-ops.toml");
        fs::write(
            &path,
            "[catalog]\nrail_file = \"rail.toml\"\nroutes_file = \"/srv/routes.toml\"\n",
        )
        .unwrap();

        let config = read_config(&ConfigSource::Explicit(path)).unwrap();
        assert_eq!(config.catalog.rail_file, Some(conf.join("rail.toml")));
        assert_eq!(
            config.catalog.routes_file,
            Some(PathBuf::from("/srv/routes.toml"))
        );
    }
}
