//! Error taxonomy for the provisioning pipeline

use std::io;
use std::path::{Path, PathBuf};
use url::Url;

/// Errors raised while provisioning a project
///
/// Every variant is terminal for the run. Layers pass them through unchanged;
/// the failing path or URL is attached where the error is first observed.
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    /// Directory or file creation, working context resolution, or a write failed
    #[error("Filesystem error at {}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The request could not be sent or the connection broke
    #[error("Failed to fetch {url}")]
    Network {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status
    #[error("Failed to download {url}: HTTP {status}")]
    RemoteStatus { url: Url, status: String },
}

impl ScaffoldError {
    pub(crate) fn filesystem(path: impl AsRef<Path>) -> impl FnOnce(io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        move |source| ScaffoldError::Filesystem { path, source }
    }

    pub(crate) fn network(url: &Url) -> impl FnOnce(reqwest::Error) -> Self + '_ {
        move |source| ScaffoldError::Network {
            url: url.clone(),
            source,
        }
    }
}

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filesystem_error_names_path() {
        let err = ScaffoldError::filesystem("acme/src")(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "permission denied",
        ));
        assert!(err.to_string().contains("acme/src"));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "permission denied");
    }

    #[test]
    fn test_remote_status_error_carries_status_text() {
        let err = ScaffoldError::RemoteStatus {
            url: Url::parse("https://example.com/react-wrapper.js").unwrap(),
            status: "404 Not Found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to download https://example.com/react-wrapper.js: HTTP 404 Not Found"
        );
    }
}
