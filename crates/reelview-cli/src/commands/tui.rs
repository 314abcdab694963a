use anyhow::Result;

use super::build_view;
use crate::config::Config;

/// Run the interactive catalog browser.
pub fn run_tui(config: &Config) -> Result<()> {
    let view = build_view(config)?;
    crate::tui::run_tui(view)
}
