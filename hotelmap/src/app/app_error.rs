use std::path::PathBuf;

use hotelmap_core::model::{hotel::HotelDatasetError, surface::MapSurfaceError};

#[derive(thiserror::Error, Debug)]
pub enum HotelMapAppError {
    #[error("Invalid input: {0}")]
    InvalidUserInput(String),
    #[error("failure loading configuration '{path}': {message}")]
    Config { path: PathBuf, message: String },
    #[error(transparent)]
    Dataset(#[from] HotelDatasetError),
    #[error(transparent)]
    Surface(#[from] MapSurfaceError),
    #[error("Error reading from '{path}': {message}")]
    ReadError { path: PathBuf, message: String },
    #[error("Error writing to '{path}': {message}")]
    WriteError { path: PathBuf, message: String },
}
