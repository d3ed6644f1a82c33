//! Where the image to resize comes from.
//!
//! A [`Source`] is resolved once, at the edge of the program, and carried as
//! a tagged value from then on. Nothing downstream sniffs strings.

use std::fmt;
use std::path::PathBuf;

/// Image input for a fill resize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// File on the local filesystem.
    LocalPath(PathBuf),
    /// `http://` or `https://` URL, fetched before decoding.
    RemoteUrl(String),
    /// Encoded image already in memory.
    Bytes(Vec<u8>),
}

impl Source {
    /// Classify a user-supplied reference.
    ///
    /// References with an `http` or `https` scheme (case-insensitive) are
    /// remote; everything else is a local path.
    pub fn from_reference(reference: &str) -> Self {
        if has_http_scheme(reference) {
            Source::RemoteUrl(reference.to_string())
        } else {
            Source::LocalPath(PathBuf::from(reference))
        }
    }
}

fn has_http_scheme(reference: &str) -> bool {
    reference
        .split_once("://")
        .is_some_and(|(scheme, rest)| {
            !rest.is_empty()
                && (scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https"))
        })
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::LocalPath(path) => write!(f, "{}", path.display()),
            Source::RemoteUrl(url) => f.write_str(url),
            Source::Bytes(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}
