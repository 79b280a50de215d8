//! Access token loading
//!
//! Reads the Graph API access token from a file on local disk:
//! - Default location: ~/.private/FB_ACCESS_TOKEN
//! - Contents are kept exactly as stored (no trimming, no validation)

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory under the user's home that holds private credentials
pub const PRIVATE_DIR: &str = ".private";

/// File name of the stored access token
pub const TOKEN_FILE_NAME: &str = "FB_ACCESS_TOKEN";

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Failed to read access token from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not determine the home directory")]
    NoHomeDir,
}

impl CredentialError {
    /// The underlying I/O error kind, if the failure came from the read itself
    pub fn kind(&self) -> Option<io::ErrorKind> {
        match self {
            CredentialError::Read { source, .. } => Some(source.kind()),
            CredentialError::NoHomeDir => None,
        }
    }
}

/// Characters of a token shown in a preview
const PREVIEW_CHARS: usize = 4;

/// Tokens shorter than this are never partially shown
pub const MIN_PREVIEW_CHARS: usize = 12;

/// An opaque Graph API access token.
///
/// Holds the file contents byte-for-byte. `Debug` is redacted so the token
/// never ends up in log output.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in characters, the unit used on the terminal
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// True when the stored token ends with a line break.
    ///
    /// The token is not trimmed, so a file saved by an editor usually carries
    /// one. Callers decide what to do about it.
    pub fn has_trailing_newline(&self) -> bool {
        self.0.ends_with('\n')
    }

    /// Short preview safe to show on a terminal, e.g. `EAAJ…(212 chars)`.
    ///
    /// Tokens shorter than [`MIN_PREVIEW_CHARS`] show their length only.
    pub fn masked(&self) -> String {
        let count = self.char_count();
        if self.0.trim_end().chars().count() < MIN_PREVIEW_CHARS {
            return format!("…({} chars)", count);
        }
        let visible: String = self.0.chars().take(PREVIEW_CHARS).collect();
        format!("{}…({} chars)", visible, count)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken")
            .field(&format_args!("<redacted, {} bytes>", self.0.len()))
            .finish()
    }
}

/// Default token location: `<home>/.private/FB_ACCESS_TOKEN`
pub fn default_token_path() -> Result<PathBuf, CredentialError> {
    dirs::home_dir()
        .map(|home| home.join(PRIVATE_DIR).join(TOKEN_FILE_NAME))
        .ok_or(CredentialError::NoHomeDir)
}

/// Load the access token from the default location
pub fn load_access_token() -> Result<AccessToken, CredentialError> {
    let path = default_token_path()?;
    load_access_token_from(&path)
}

/// Load the access token from `path`, returning the full file contents
pub fn load_access_token_from(path: impl AsRef<Path>) -> Result<AccessToken, CredentialError> {
    let path = path.as_ref();

    let contents = std::fs::read_to_string(path).map_err(|source| CredentialError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let token = AccessToken(contents);

    tracing::debug!(path = %path.display(), bytes = token.len(), "Loaded access token");

    if token.is_empty() {
        tracing::warn!(path = %path.display(), "Access token file is empty");
    } else if token.has_trailing_newline() {
        tracing::warn!(
            path = %path.display(),
            "Access token ends with a newline; it is kept as-is"
        );
    }

    Ok(token)
}
