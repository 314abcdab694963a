use thiserror::Error;

use crate::view::TargetRole;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate movie id {0} in catalog")]
    DuplicateId(String),

    #[error("presentation target {name:?} for {role} is missing")]
    MissingTarget { role: TargetRole, name: String },

    #[error("invalid view configuration: {0}")]
    InvalidConfig(String),

    #[error("no {group} option with value {value:?}")]
    UnknownOption { group: String, value: String },

    #[error("no year selected")]
    NoYearSelected,
}

pub type Result<T> = std::result::Result<T, Error>;
