use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;
mod config;
mod surface;
mod tui;

use config::Config;

#[derive(Debug, Parser)]
#[command(name = "reelview", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Movie catalog JSON file (default: the bundled sample catalog)
    #[arg(long, global = true)]
    data: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Print the movie table
    List,
    /// Print the year and genre panels with their counts
    ///
    /// Values are listed in order of first appearance in the catalog. Counts
    /// cover the whole catalog.
    Options,
    /// Highlight movies whose title contains a term
    ///
    /// Matching is case-insensitive. An empty term highlights every movie.
    Search {
        /// Part of a title
        #[arg(default_value = "")]
        term: String,
    },
    /// Highlight movies released in exactly this year
    Year {
        /// Year label as shown by `reelview options`
        year: String,
    },
    /// Highlight movies in any of the given genres
    ///
    /// With no genres nothing is highlighted.
    Genre {
        /// Genre names as shown by `reelview options`
        genres: Vec<String>,
    },
    /// Browse the catalog interactively
    ///
    /// Type in the search box and press Enter to search, check a year
    /// (Space) and press Enter to filter by year, or check any number of
    /// genres and press Enter to filter by genre. Tab moves between panels.
    Tui,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print one value, or the whole config file when no key is given
    Get {
        /// `data_path` or `view.<name>`
        key: Option<String>,
    },
    /// Set a value in the config file
    Set {
        /// `data_path` or `view.<name>`
        key: String,
        value: String,
    },
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let data = cli.data;

    match cli.command {
        // Config maintenance must keep working when the config file is broken.
        Commands::Config { action } => run_config(action),
        Commands::List => commands::run_list(&setup(data)?),
        Commands::Options => commands::run_options(&setup(data)?),
        Commands::Search { term } => commands::run_search(&setup(data)?, &term),
        Commands::Year { year } => commands::run_year(&setup(data)?, &year),
        Commands::Genre { genres } => commands::run_genre(&setup(data)?, &genres),
        Commands::Tui => commands::run_tui(&setup(data)?),
    }
}

/// Load configuration and start logging for the catalog commands.
fn setup(data: Option<PathBuf>) -> Result<Config> {
    let config = Config::load_with_data_path(data)?;
    twyg::setup(config.logging.clone())
        .map_err(|e| anyhow::anyhow!("Failed to set up logging: {:?}", e))?;
    Ok(config)
}

fn run_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => commands::config::show_config(),
        ConfigAction::Get { key } => commands::config::get_config(key),
        ConfigAction::Set { key, value } => commands::config::set_config(&key, &value),
        ConfigAction::Path => commands::config::show_path(),
        ConfigAction::Example => commands::config::show_example(),
        ConfigAction::Init => commands::config::init_config(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_genre_with_global_data() {
        let cli = Cli::try_parse_from(["reelview", "genre", "Action", "Drama", "--data", "m.json"])
            .unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("m.json")));
        assert!(matches!(cli.command, Commands::Genre { ref genres } if genres.len() == 2));
    }

    #[test]
    fn test_parse_config_set() {
        let cli = Cli::try_parse_from(["reelview", "config", "set", "view.year_box", "years"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigAction::Set { ref key, ref value }
            } if key == "view.year_box" && value == "years"
        ));
    }

    #[test]
    fn test_search_term_defaults_to_empty() {
        let cli = Cli::try_parse_from(["reelview", "search"]).unwrap();
        assert!(matches!(cli.command, Commands::Search { ref term } if term.is_empty()));
    }
}
