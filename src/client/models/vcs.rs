//! Version control provider tags

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Version control provider an account is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VcsProvider {
    GitHub,
    Bitbucket,
}

impl VcsProvider {
    /// Human-readable provider name
    pub fn display_name(self) -> &'static str {
        match self {
            VcsProvider::GitHub => "GitHub",
            VcsProvider::Bitbucket => "Bitbucket",
        }
    }
}

impl FromStr for VcsProvider {
    type Err = Error;

    /// Accepts the long tag or its short alias, case-insensitively.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_ascii_lowercase().as_str() {
            "github" | "gh" => Ok(VcsProvider::GitHub),
            "bitbucket" | "bb" => Ok(VcsProvider::Bitbucket),
            _ => Err(Error::UnknownVcs(tag.to_string())),
        }
    }
}

impl fmt::Display for VcsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
