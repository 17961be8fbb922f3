//! Transport used by pip/git to reach GitHub, and the editable-install URL.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::package_ref::PackageRef;

/// Host every package is fetched from.
pub const HOST: &str = "github.com";

/// Version-control scheme prefix understood by pip.
pub const VCS_SCHEME: &str = "git";

/// Protocol part of a `git+<protocol>://` URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// `git+https://`
    #[default]
    Https,
    /// `git+git://`
    Git,
    /// `git+http://`
    Http,
}

impl Protocol {
    /// Return the lowercase spelling used in URLs and the config file.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Https => "https",
            Self::Git => "git",
            Self::Http => "http",
        }
    }

    /// Build the pip requirement URL for `pkg_ref`,
    /// e.g. `git+https://github.com/ipython/ipython.git#egg=ipython`.
    #[must_use]
    pub fn source_url(self, pkg_ref: &PackageRef) -> String {
        format!(
            "{VCS_SCHEME}+{}://{HOST}/{}/{}.git#egg={}",
            self.as_str(),
            pkg_ref.org,
            pkg_ref.repo,
            pkg_ref.name
        )
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
