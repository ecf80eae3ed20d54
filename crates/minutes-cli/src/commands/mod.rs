//! Command implementations.
//!
//! Each command returns the text to print on stdout.

pub mod extract;
pub mod import;
pub mod prompt;

pub use self::extract::execute_extract;
pub use self::import::execute_import;
pub use self::prompt::execute_prompt;

use crate::error::{CliError, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read a file, or stdin when no path (or "-") is given.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path).map_err(|e| {
            CliError::InvalidInput(format!("Cannot read {}: {}", path.display(), e))
        }),
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_input_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "- book the room").unwrap();

        assert_eq!(read_input(Some(file.path())).unwrap(), "- book the room");
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_input(Some(Path::new("/nonexistent/minutes.txt")));
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
