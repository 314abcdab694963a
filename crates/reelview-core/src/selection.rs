/// Snapshot of what the user has entered in the filter controls.
///
/// The presentation layer feeds control changes into the view; filter
/// actions read from this snapshot instead of querying widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// The checked year, if any. At most one year is ever selected.
    pub year: Option<String>,
    /// Checked genres in panel order.
    pub genres: Vec<String>,
    /// Pending free-text search term.
    pub search: String,
}
