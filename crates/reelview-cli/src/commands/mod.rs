pub mod config;
pub mod filter;
pub mod list;
pub mod tui;

pub use filter::{run_genre, run_search, run_year};
pub use list::{run_list, run_options};
pub use tui::run_tui;

use anyhow::{Context, Result};
use reelview_core::CatalogView;

use crate::config::Config;
use crate::surface::TerminalSurface;

/// Load the catalog and bind a fully rendered view to the terminal.
pub(crate) fn build_view(config: &Config) -> Result<CatalogView> {
    let catalog = config.load_catalog()?;
    let mut view = CatalogView::new(catalog, config.view.clone(), &TerminalSurface)
        .context("Invalid [view] configuration")?;
    view.init();
    Ok(view)
}
