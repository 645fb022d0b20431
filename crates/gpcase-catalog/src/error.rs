use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog provider unavailable: {0}")]
    Unavailable(String),

    #[error("malformed catalog response: {0}")]
    Malformed(String),
}
