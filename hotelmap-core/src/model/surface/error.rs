use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum MapSurfaceError {
    #[error("failure serializing map surface output: {0}")]
    Serialize(String),
    #[error("error writing to '{path}': {message}")]
    Write { path: PathBuf, message: String },
    #[error("{0}")]
    Internal(String),
}
