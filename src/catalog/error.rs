use thiserror::Error;

/// Problems with the catalog configuration, found when the catalog is built.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog configuration is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("project \"{title}\" has an empty id")]
    EmptyId { title: String },

    #[error("project id \"{0}\" is used more than once")]
    DuplicateId(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
