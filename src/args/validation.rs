use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::CourseCatalog;

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &Path) -> Result<PathBuf, String> {
    if !file.is_file() || fs::metadata(file).is_err() {
        return Err(format!("The file '{}' is not readable.", file.display()));
    }
    Ok(file.to_path_buf())
}

/// # Errors
///
/// Will return `Err` if the file is not readable or does not hold a valid
/// course catalog
pub fn check_courses_json(file: &Path) -> Result<CourseCatalog, String> {
    let path = check_readable_file(file)?;
    CourseCatalog::from_json_file(&path)
        .map_err(|e| format!("The courses json '{}' is not valid: {e}", path.display()))
}

/// # Errors
///
/// Will return `Err` for port 0
pub fn check_port(port: u16) -> Result<u16, String> {
    if port == 0 {
        return Err("The port must be between 1 and 65535.".to_string());
    }
    Ok(port)
}
