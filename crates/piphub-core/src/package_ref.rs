//! GitHub package reference, e.g. `jtriley/StarCluster/starcluster`.

use std::fmt;

use thiserror::Error;

/// Separator between the segments of a reference token.
pub const SEPARATOR: char = '/';

/// Error returned when a package reference string cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The token has more than two separators.
    #[error("Unrecognized repo: {0}")]
    Malformed(String),
    /// One of the segments is empty (`a//b`, `/b`, or the empty token).
    #[error("Unrecognized repo: {0} (empty segment)")]
    EmptySegment(String),
}

/// A package living at `github.com/<org>/<repo>`, installed as distribution `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRef {
    /// GitHub organization or user.
    pub org: String,
    /// Repository name; also the checkout directory name.
    pub repo: String,
    /// Distribution name passed as `#egg=`.
    pub name: String,
}

impl PackageRef {
    /// Parse a reference from `name`, `org/repo` or `org/repo/name`.
    ///
    /// `name` alone means org, repo and name are all equal; `org/repo` uses
    /// the repository as the distribution name.
    ///
    /// Every segment must be non-empty, so `""`, `"a/"` and `"a//b"` are
    /// rejected even though their separator count is otherwise valid: an
    /// empty repository would make the checkout path the source root itself.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Malformed`] if the token has three or more
    /// separators and [`ParseError::EmptySegment`] if any segment is empty.
    pub fn parse(token: &str) -> Result<Self, ParseError> {
        let parts: Vec<&str> = token.split(SEPARATOR).collect();
        let (org, repo, name) = match parts.as_slice() {
            [only] => (*only, *only, *only),
            [org, repo] => (*org, *repo, *repo),
            [org, repo, name] => (*org, *repo, *name),
            _ => return Err(ParseError::Malformed(token.to_owned())),
        };

        if org.is_empty() || repo.is_empty() || name.is_empty() {
            return Err(ParseError::EmptySegment(token.to_owned()));
        }

        Ok(Self {
            org: org.to_owned(),
            repo: repo.to_owned(),
            name: name.to_owned(),
        })
    }
}

impl fmt::Display for PackageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.org, self.repo)?;
        if self.name != self.repo {
            write!(f, "/{}", self.name)?;
        }
        Ok(())
    }
}
