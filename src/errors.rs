//! Error handling for the gitlab2gogs crate.
use std::{error::Error as StdError, fmt};

/// Remote service an error originated from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RemoteType {
    /// The GitLab side (read-only)
    Gitlab,

    /// The Gogs side (read/write)
    Gogs,
}

impl fmt::Display for RemoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteType::Gitlab => write!(f, "gitlab"),
            RemoteType::Gogs => write!(f, "gogs"),
        }
    }
}

/// Error type for the gitlab2gogs crate.
#[derive(Debug)]
pub struct Gitlab2GogsError {
    /// Inner error.
    inner: Box<Inner>,
}

impl Gitlab2GogsError {
    /// Create a new error.
    pub(crate) fn new(kind: Gitlab2GogsErrorKind) -> Self {
        Self {
            inner: Box::new(Inner {
                kind,
                source: None,
                remote: None,
            }),
        }
    }

    /// Create a new error with a message and a source error.
    pub(crate) fn new_with_source<E>(text: &str, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            inner: Box::new(Inner {
                kind: Gitlab2GogsErrorKind::Message,
                source: Some(Box::new(std::io::Error::other(format!(
                    "{text}: {source}"
                )))),
                remote: None,
            }),
        }
    }

    /// Attach a text (typically the response body) as the source.
    pub(crate) fn with_text(mut self, text: &str) -> Self {
        self.inner.source = Some(Box::new(std::io::Error::other(text)));
        self
    }

    /// Tag the error with the remote it came from.
    pub(crate) fn with_remote(mut self, remote: RemoteType) -> Self {
        self.inner.remote = Some(remote);
        self
    }
}

/// Type alias for a boxed error.
pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

/// Inner error type for the gitlab2gogs crate.
#[derive(Debug)]
struct Inner {
    /// Error kind.
    kind: Gitlab2GogsErrorKind,

    /// Remote the error came from.
    remote: Option<RemoteType>,

    /// Source error.
    source: Option<BoxError>,
}

#[derive(Debug)]
pub(crate) enum Gitlab2GogsErrorKind {
    /// Error wrapping a plain diagnostic message.
    Message,

    /// Error related to configuration handling.
    Config,

    /// Error related to the reqwest crate.
    Reqwest,

    /// Error related to serde.
    Serde,

    /// Error while listing gitlab projects.
    GetProjects,

    /// Error while looking up a gogs organization.
    GetOrg,

    /// Error while creating a gogs organization.
    OrgCreation,

    /// Error while looking up a gogs repository.
    GetRepo,

    /// Error while requesting a repository migration.
    Migration,
}

impl fmt::Display for Gitlab2GogsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Gitlab2GogsErrorKind::Message = self.inner.kind {
            return match &self.inner.source {
                Some(source) => write!(f, "{source}"),
                None => write!(f, "error"),
            };
        }
        write!(f, "{:?}", self.inner.kind)?;
        if let Some(remote) = &self.inner.remote {
            write!(f, " ({remote})")?;
        }
        if let Some(source) = &self.inner.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl StdError for Gitlab2GogsError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source.as_ref().map(|e| &**e as _)
    }
}

impl From<&str> for Gitlab2GogsError {
    fn from(text: &str) -> Self {
        Self::new(Gitlab2GogsErrorKind::Message).with_text(text)
    }
}

impl From<String> for Gitlab2GogsError {
    fn from(text: String) -> Self {
        Self::new(Gitlab2GogsErrorKind::Message).with_text(&text)
    }
}

impl From<reqwest::Error> for Gitlab2GogsError {
    fn from(e: reqwest::Error) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: Gitlab2GogsErrorKind::Reqwest,
                source: Some(Box::new(e)),
                remote: None,
            }),
        }
    }
}

impl From<serde_json::Error> for Gitlab2GogsError {
    fn from(e: serde_json::Error) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: Gitlab2GogsErrorKind::Serde,
                source: Some(Box::new(e)),
                remote: None,
            }),
        }
    }
}

impl From<toml::de::Error> for Gitlab2GogsError {
    fn from(e: toml::de::Error) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: Gitlab2GogsErrorKind::Config,
                source: Some(Box::new(e)),
                remote: None,
            }),
        }
    }
}

impl From<std::io::Error> for Gitlab2GogsError {
    fn from(e: std::io::Error) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: Gitlab2GogsErrorKind::Config,
                source: Some(Box::new(e)),
                remote: None,
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn wrapped_source_displays_as_plain_message() {
        let source = std::io::Error::other("stream closed");
        let err = Gitlab2GogsError::new_with_source("Error reading password", source);
        assert_eq!(err.to_string(), "Error reading password: stream closed");
    }

    #[test]
    fn api_error_displays_kind_and_remote() {
        let err = Gitlab2GogsError::new(Gitlab2GogsErrorKind::GetOrg)
            .with_remote(RemoteType::Gogs)
            .with_text("server on fire");
        assert_eq!(err.to_string(), "GetOrg (gogs): server on fire");
    }
}
