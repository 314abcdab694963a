use std::path::Path;

use anyhow::{Context, Result};
use toml_edit::DocumentMut;

use crate::config::{self, view_value, Config, VIEW_KEYS};

/// Show the current effective configuration.
pub fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!(
        "File exists: {}\n",
        if exists { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!(
        "  data_path: {}",
        config
            .data_path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<bundled sample>".to_string())
    );
    for key in VIEW_KEYS {
        println!(
            "  view.{}: {}",
            key,
            view_value(&config.view, key).unwrap_or_default()
        );
    }
    println!("  logging.level: {:?}", config.logging.level());
    println!("  logging.coloured: {}", config.logging.coloured());
    println!("  logging.output: {:?}", config.logging.output());

    println!("\nPriority: CLI args > ENV vars (REELVIEW_*) > Config file > Defaults");

    Ok(())
}

/// Get a specific config value.
pub fn get_config(key: Option<String>) -> Result<()> {
    if let Some(key) = key {
        let config = Config::load()?;

        if key == "data_path" {
            match &config.data_path {
                Some(path) => println!("{}", path.display()),
                None => println!("<not set>"),
            }
        } else {
            let value = key
                .strip_prefix("view.")
                .and_then(|field| view_value(&config.view, field))
                .ok_or_else(|| unknown_key(&key))?;
            println!("{}", value);
        }
    } else {
        // No key provided, show entire config file contents
        let config_path = config::config_file_path();

        if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).context("Failed to read config file")?;
            print!("{}", contents);
        } else {
            println!("Config file does not exist: {}", config_path.display());
            println!("\nRun 'reelview config init' to create it.");
        }
    }

    Ok(())
}

/// Set a config value, keeping the rest of the file (comments included) intact.
pub fn set_config(key: &str, value: &str) -> Result<()> {
    let config_path = config::config_file_path();

    config::ensure_config_file()?;
    update_file(&config_path, key, value)?;

    println!("✓ Updated {} = {}", key, value);
    println!("  in {}", config_path.display());

    Ok(())
}

/// Rewrite the config file at `path` with `key` set to `value`.
fn update_file(path: &Path, key: &str, value: &str) -> Result<()> {
    let contents = std::fs::read_to_string(path).context("Failed to read config file")?;
    let updated = set_value(&contents, key, value)?;

    std::fs::write(path, updated).context("Failed to write config file")?;
    log::info!("Set {} in {}", key, path.display());
    Ok(())
}

/// Return `contents` with `key` set to `value`.
fn set_value(contents: &str, key: &str, value: &str) -> Result<String> {
    let mut doc: DocumentMut = contents.parse().context("Config file is not valid TOML")?;

    if key == "data_path" {
        doc["data_path"] = toml_edit::value(value);
    } else {
        let field = key
            .strip_prefix("view.")
            .filter(|field| VIEW_KEYS.contains(field))
            .ok_or_else(|| unknown_key(key))?;
        let view = doc
            .entry("view")
            .or_insert(toml_edit::table())
            .as_table_mut()
            .ok_or_else(|| anyhow::anyhow!("'view' in the config file is not a table"))?;
        view[field] = toml_edit::value(value);
    }

    Ok(doc.to_string())
}

fn unknown_key(key: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Unknown config key: {}\n\nValid keys: data_path, view.{}",
        key,
        VIEW_KEYS.join(", view.")
    )
}

/// Show the config file path.
pub fn show_path() -> Result<()> {
    let config_path = config::config_file_path();
    println!("{}", config_path.display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure reelview.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_set_data_path_keeps_comments() {
        let updated = set_value(config::example_config(), "data_path", "/srv/movies.json").unwrap();
        assert!(updated.contains("# Reelview Configuration File"));
        assert!(updated.contains(r#"data_path = "/srv/movies.json""#));
    }

    #[test]
    fn test_set_view_key_replaces_existing() {
        let updated = set_value(config::example_config(), "view.year_box", "years").unwrap();
        let doc: DocumentMut = updated.parse().unwrap();
        assert_eq!(doc["view"]["year_box"].as_str(), Some("years"));
        assert_eq!(updated.matches("year_box").count(), 1);
    }

    #[test]
    fn test_set_view_key_creates_table() {
        let updated = set_value("", "view.genre_handler", "genres").unwrap();
        let doc: DocumentMut = updated.parse().unwrap();
        assert_eq!(doc["view"]["genre_handler"].as_str(), Some("genres"));
    }

    #[test]
    fn test_set_unknown_key_fails() {
        let err = set_value("", "view.colour", "red").unwrap_err();
        assert!(err.to_string().contains("Unknown config key"));
        assert!(set_value("", "database_path", "x").is_err());
    }

    #[test]
    fn test_update_file_round_trip() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(config::example_config().as_bytes()).unwrap();

        update_file(file.path(), "view.genre_box", "genres").unwrap();
        update_file(file.path(), "data_path", "/srv/movies.json").unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert!(contents.contains("# Reelview Configuration File"));
        let doc: DocumentMut = contents.parse().unwrap();
        assert_eq!(doc["view"]["genre_box"].as_str(), Some("genres"));
        assert_eq!(doc["view"]["year_box"].as_str(), Some("yearBox"));
        assert_eq!(doc["data_path"].as_str(), Some("/srv/movies.json"));
    }

    #[test]
    fn test_update_file_leaves_file_alone_on_bad_key() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(config::example_config().as_bytes()).unwrap();

        assert!(update_file(file.path(), "view.colour", "red").is_err());
        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, config::example_config());
    }

    #[test]
    fn test_set_on_invalid_toml_fails() {
        assert!(set_value("view = [", "data_path", "x").is_err());
    }
}
