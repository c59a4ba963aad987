use std::{io::Write, path::Path};

use super::{HotelMapAppError, HotelRow};
use hotelmap_core::model::hotel::Hotel;

/// writes the hotels as CSV rows to a file, or to stdout when no file is given.
pub fn run(hotels: &[&Hotel], output_file: Option<&Path>) -> Result<(), HotelMapAppError> {
    match output_file {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(|e| HotelMapAppError::WriteError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            write_rows(hotels, file, path)?;
            log::info!("wrote {} hotels to {}", hotels.len(), path.display());
            Ok(())
        }
        None => write_rows(hotels, std::io::stdout(), Path::new("<stdout>")),
    }
}

fn write_rows<W: Write>(hotels: &[&Hotel], sink: W, path: &Path) -> Result<(), HotelMapAppError> {
    let to_error = |message: String| HotelMapAppError::WriteError {
        path: path.to_path_buf(),
        message,
    };
    let mut writer = csv::Writer::from_writer(sink);
    for hotel in hotels {
        writer
            .serialize(HotelRow::from(*hotel))
            .map_err(|e| to_error(format!("failure writing hotel {}: {e}", hotel.hotel_id)))?;
    }
    writer.flush().map_err(|e| to_error(e.to_string()))
}
