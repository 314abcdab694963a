use anyhow::{Context, Result};
use confyg::{env, Confygery};
use reelview_core::{Catalog, ViewConfig};
use serde::Deserialize;
use std::path::PathBuf;

/// Keys accepted by `reelview config get|set`.
pub const VIEW_KEYS: [&str; 9] = [
    "root",
    "search_input",
    "search_form",
    "year_handler",
    "year_submitter",
    "year_box",
    "genre_handler",
    "genre_submitter",
    "genre_box",
];

/// Configuration for reelview.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (REELVIEW_* prefix)
/// 3. Config file (~/.config/reelview/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON file holding the movie catalog.
    ///
    /// Can be set via:
    /// - CLI: --data /path/to/movies.json
    /// - ENV: REELVIEW_DATA_PATH
    /// - Config: data_path = "/path/to/movies.json"
    /// - Default: the bundled sample catalog
    pub data_path: Option<PathBuf>,

    /// Presentation target and control group names.
    pub view: ViewConfig,

    pub logging: twyg::Opts,
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("reelview");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder
            .build()
            .context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration, letting `--data` override the catalog path.
    pub fn load_with_data_path(data_path: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::load()?;
        if data_path.is_some() {
            config.data_path = data_path;
        }
        Ok(config)
    }

    /// Load the configured catalog, or the bundled sample when none is set.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.data_path {
            Some(path) => Catalog::load(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display())),
            None => {
                log::debug!("No data_path configured, using the bundled sample catalog");
                Catalog::sample().context("Failed to load the bundled sample catalog")
            }
        }
    }
}

/// Look up a `view.*` setting by field name.
pub fn view_value<'a>(view: &'a ViewConfig, key: &str) -> Option<&'a str> {
    let value = match key {
        "root" => &view.root,
        "search_input" => &view.search_input,
        "search_form" => &view.search_form,
        "year_handler" => &view.year_handler,
        "year_submitter" => &view.year_submitter,
        "year_box" => &view.year_box,
        "genre_handler" => &view.genre_handler,
        "genre_submitter" => &view.genre_submitter,
        "genre_box" => &view.genre_box,
        _ => return None,
    };
    Some(value.as_str())
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/reelview/config.toml
/// - macOS: ~/Library/Application Support/reelview/config.toml
/// - Windows: %APPDATA%\reelview\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("reelview")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Reelview Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (REELVIEW_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# JSON file with the movie catalog: an array of
# { "id", "title", "genre", "year", "image" } objects.
#
# Can also be set via:
# - CLI: reelview --data /path/to/movies.json list
# - Environment: REELVIEW_DATA_PATH=/path/to/movies.json
#
# Default: the sample catalog bundled with reelview
#data_path = "/path/to/movies.json"

# Names of the presentation targets the catalog view binds to.
# The terminal screens expose the default names; renaming a target here
# without a matching surface is reported as a configuration error.
[view]
root = "movies-table"
search_input = "searchInput"
search_form = "searchForm"
year_handler = "year"
year_submitter = "yearSubmitter"
year_box = "yearBox"
genre_handler = "genre"
genre_submitter = "genreSubmitter"
genre_box = "genreBox"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.data_path.is_none());
        assert_eq!(config.view, ViewConfig::default());
    }

    #[test]
    fn test_config_load() {
        // Should not fail even if config file doesn't exist
        let result = Config::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_with_custom_data_path() {
        let custom_path = PathBuf::from("/tmp/movies.json");
        let config = Config::load_with_data_path(Some(custom_path.clone())).unwrap();
        assert_eq!(config.data_path, Some(custom_path));
    }

    #[test]
    fn test_default_catalog_is_sample() {
        let catalog = Config::default().load_catalog().unwrap();
        assert_eq!(catalog.len(), Catalog::sample().unwrap().len());
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        let config = Config {
            data_path: Some(PathBuf::from("/nonexistent/movies.json")),
            ..Config::default()
        };
        let err = config.load_catalog().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/movies.json"));
    }

    #[test]
    fn test_view_value_lookup() {
        let view = ViewConfig::default();
        for key in VIEW_KEYS {
            assert!(view_value(&view, key).is_some(), "{key}");
        }
        assert_eq!(view_value(&view, "genre_box"), Some("genreBox"));
        assert_eq!(view_value(&view, "colour"), None);
    }

    #[test]
    fn test_example_config_view_section_matches_defaults() {
        let doc: toml_edit::DocumentMut = example_config().parse().unwrap();
        let view = ViewConfig::default();
        for key in VIEW_KEYS {
            assert_eq!(doc["view"][key].as_str(), view_value(&view, key));
        }
    }
}
