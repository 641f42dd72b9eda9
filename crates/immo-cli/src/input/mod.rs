pub mod file;
pub mod stdin;

use serde::de::DeserializeOwned;

/// Resolve a command's input: `--input` file first, then piped stdin.
/// Returns `None` when neither is present so the caller can fall back to flags.
pub fn from_file_or_stdin<T: DeserializeOwned>(
    path: Option<&str>,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Some(file::read_input(path)?)),
        None => stdin::read_stdin(),
    }
}
