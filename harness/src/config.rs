//! Policy file loading.
//!
//! A policy file is a JSON object with any subset of the
//! [`SearchPolicy`] fields; missing fields take their defaults and unknown
//! fields are rejected.

use std::path::{Path, PathBuf};

use waypoint_search::{SearchError, SearchPolicy};

/// Error loading a policy file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file parsed but the engine cannot run with it.
    #[error("invalid policy: {0}")]
    Invalid(#[from] SearchError),
}

/// Read, parse and validate a JSON policy file.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read,
/// [`ConfigError::Parse`] if it is not a valid policy object, and
/// [`ConfigError::Invalid`] if the policy fails validation.
pub fn load_policy(path: impl AsRef<Path>) -> Result<SearchPolicy, ConfigError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let policy: SearchPolicy =
        serde_json::from_slice(&bytes).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    policy.validate()?;
    Ok(policy)
}
