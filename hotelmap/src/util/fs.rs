use std::path::Path;

use hotelmap_core::model::surface::MapSurfaceError;
use serde::Serialize;

/// helper function to "mkdir -p path" - make all directories along a path
pub fn create_dirs<P>(path: P) -> Result<(), MapSurfaceError>
where
    P: AsRef<Path>,
{
    let dirspath = path.as_ref();
    if dirspath.as_os_str().is_empty() || dirspath.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(dirspath).map_err(|e| MapSurfaceError::Write {
        path: dirspath.to_path_buf(),
        message: format!("error building output directory: {e}"),
    })
}

/// writes a value as pretty-printed JSON, replacing any existing file.
pub fn write_json<T>(value: &T, path: &Path) -> Result<(), MapSurfaceError>
where
    T: Serialize + ?Sized,
{
    let contents = serde_json::to_string_pretty(value).map_err(|e| {
        MapSurfaceError::Serialize(format!("failure serializing '{}': {e}", path.display()))
    })?;
    std::fs::write(path, contents).map_err(|e| MapSurfaceError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
