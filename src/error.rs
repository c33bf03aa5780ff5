use thiserror::Error;

/// Library error type for deck operations, catalog files and config files.
#[derive(Debug, Error)]
pub enum Error {
    /// A catalog with zero items was offered to `load` or `replace_catalog`.
    #[error("catalog contains no items")]
    EmptyCatalog,

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catalog file could not be parsed as a JSON array of profiles.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML/serde configuration error.
    #[error(transparent)]
    Config(#[from] serde_yaml::Error),
}
