use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Output convention a generation run targets. Selected once per run and
/// passed explicitly to everything that depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Engine {
    /// Nested `<directory>/<dotted.name>.md` layout with plain anchors.
    #[default]
    Default,
    /// One flat namespace of pages, home page is `Home.md`.
    GithubWiki,
    /// Anchors address bitbucket's generated `markdown-header-*` ids.
    Bitbucket,
    /// Default layout plus a `SUMMARY.md` navigation manifest.
    Gitbook,
}

impl Engine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::Default => "default",
            Engine::GithubWiki => "githubWiki",
            Engine::Bitbucket => "bitbucket",
            Engine::Gitbook => "gitbook",
        }
    }

    pub fn is_flat(&self) -> bool {
        matches!(self, Engine::GithubWiki)
    }

    /// File name of the project landing page.
    pub fn home_file(&self) -> &'static str {
        match self {
            Engine::GithubWiki => "Home.md",
            _ => "README.md",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown markdown engine '{0}', expected one of: default, githubWiki, bitbucket, gitbook")]
pub struct UnknownEngine(pub String);

impl FromStr for Engine {
    type Err = UnknownEngine;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Engine::Default),
            "githubWiki" => Ok(Engine::GithubWiki),
            "bitbucket" => Ok(Engine::Bitbucket),
            "gitbook" => Ok(Engine::Gitbook),
            other => Err(UnknownEngine(other.to_string())),
        }
    }
}
