use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error(
        "Malformed depth spec '{0}': expected PARENTS:CHILDREN where each side \
         is '*', empty, or a hop count (e.g. '*:*', '2:3', '*:0')"
    )]
    MalformedDepthSpec(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
