//! Whole-file load and save helpers.
//!
//! These read or write an entire file in one blocking call. They do not stream.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::Error;

/// Reads the entire file at `path` into memory.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, Error> {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(data) => {
            debug!(path = %path.display(), len = data.len(), "loaded file");
            Ok(data)
        }
        Err(source) => {
            warn!(path = %path.display(), error = %source, "failed to load file");
            Err(Error::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Reads the entire file at `path` as UTF-8 text.
///
/// Contents that are not valid UTF-8 are reported as `Error::Read` with
/// `io::ErrorKind::InvalidData`.
pub fn load_text<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let path = path.as_ref();
    let data = load(path)?;
    String::from_utf8(data).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidData, e),
    })
}

/// Creates (or truncates) the file at `path` and writes all of `data` to it.
///
/// A short write is an error; `write_all` retries until every byte is written or the
/// underlying writer fails.
pub fn save<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<(), Error> {
    let path = path.as_ref();
    let result = fs::File::create(path).and_then(|mut file| {
        file.write_all(data)?;
        file.flush()
    });
    match result {
        Ok(()) => {
            debug!(path = %path.display(), len = data.len(), "saved file");
            Ok(())
        }
        Err(source) => {
            warn!(path = %path.display(), error = %source, "failed to save file");
            Err(Error::Write {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
