//! Static file resolution.

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::SystemTime;

use crate::http::mime;

/// A resolved static asset: raw bytes plus the metadata the response needs.
///
/// Read fresh on every request; nothing is cached, and the resource is
/// dropped once the response bytes have been produced.
pub struct FileResource {
    pub content: Vec<u8>,
    pub last_modified: SystemTime,
    pub media_type: &'static str,
    pub encoding: Option<&'static str>,
}

/// Why a request path did not yield a file.
#[derive(Debug)]
pub enum ResolveError {
    /// The path does not exist under the document root.
    NotFound,
    /// The file exists but opening or reading it failed. Reported, not
    /// retried.
    Io(std::io::Error),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NotFound => f.write_str("file not found"),
            ResolveError::Io(err) => write!(f, "{}", err),
        }
    }
}

/// Maps a request path onto the document root and reads the file.
///
/// Only a single leading `/` is stripped; no further normalization is done
/// and `..` segments are not rejected (known scope limitation).
pub fn resolve(root: &str, path: &str) -> Result<FileResource, ResolveError> {
    let relative = path.strip_prefix('/').unwrap_or(path);

    // An empty relative path (a request for "/") names no file.
    if relative.is_empty() {
        return Err(ResolveError::NotFound);
    }

    let file_path = Path::new(root).join(relative);
    if !file_path.exists() {
        return Err(ResolveError::NotFound);
    }

    let content = fs::read(&file_path).map_err(ResolveError::Io)?;
    let last_modified = fs::metadata(&file_path)
        .and_then(|meta| meta.modified())
        .map_err(ResolveError::Io)?;

    let (media_type, encoding) = mime::guess_type(relative);

    Ok(FileResource {
        content,
        last_modified,
        media_type,
        encoding,
    })
}
