//! Core model and view state for reelview.
//!
//! This crate defines the movie record model, the read-only catalog
//! handle, option-panel derivation, filter predicates and
//! [`CatalogView`], which owns the rendered rows, the year/genre
//! controls and the highlight state.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod error;
pub mod filter;
pub mod model;
pub mod options;
pub mod selection;
pub mod view;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use filter::Filter;
pub use model::{MovieId, MovieRecord};
pub use options::FilterOption;
pub use selection::Selection;
pub use view::{
    CatalogView, ControlKind, FilterAction, FilterOutcome, OptionControl, RenderedRow, Surface,
    TargetRole, ViewConfig,
};
