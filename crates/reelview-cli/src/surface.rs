use reelview_core::Surface;

/// Region names exposed by the terminal screens.
///
/// Both the interactive screen and the plain printer lay out the same
/// regions, so a config that renames one of them fails to bind.
pub const REGIONS: [&str; 7] = [
    "movies-table",
    "searchInput",
    "searchForm",
    "yearBox",
    "yearSubmitter",
    "genreBox",
    "genreSubmitter",
];

/// The terminal presentation surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalSurface;

impl Surface for TerminalSurface {
    fn has_target(&self, name: &str) -> bool {
        REGIONS.contains(&name)
    }
}
