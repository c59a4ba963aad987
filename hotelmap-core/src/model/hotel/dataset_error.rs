use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum HotelDatasetError {
    #[error("failure reading hotel dataset from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse hotel dataset '{source_name}' due to: {message}")]
    Parse {
        source_name: String,
        message: String,
    },
}
