//! Run configuration.
//!
//! Options can be built in code or loaded from a toon file:
//!
//! ```text
//! engine: bitbucket
//! readme: none
//! entry_point: Foo
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::engine::Engine;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse toon config: {0}")]
    Parse(#[from] toon_format::ToonError),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemeOptions {
    #[serde(default)]
    pub engine: Engine,

    /// Path of the readme to show on the home page; `none` hides it.
    #[serde(default)]
    pub readme: Option<String>,

    /// Dotted name of the reflection the home page is built from instead of
    /// the project root.
    #[serde(default)]
    pub entry_point: Option<String>,
}

impl ThemeOptions {
    pub fn new(engine: Engine) -> Self {
        Self { engine, ..Self::default() }
    }

    pub fn with_readme(mut self, readme: impl Into<String>) -> Self {
        self.readme = Some(readme.into());
        self
    }

    pub fn with_entry_point(mut self, entry_point: impl Into<String>) -> Self {
        self.entry_point = Some(entry_point.into());
        self
    }

    pub fn display_readme(&self) -> bool {
        self.readme.as_deref() != Some("none")
    }

    pub fn from_toon_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toon_format::decode_default(input)?)
    }

    pub fn from_toon_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toon_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readme_none_hides_readme() {
        assert!(ThemeOptions::default().display_readme());
        assert!(ThemeOptions::default().with_readme("README.md").display_readme());
        assert!(!ThemeOptions::default().with_readme("none").display_readme());
    }

    #[test]
    fn loads_options_from_toon() {
        let opts = ThemeOptions::from_toon_str("engine: bitbucket\nreadme: none\n").unwrap();
        assert_eq!(opts.engine, Engine::Bitbucket);
        assert!(!opts.display_readme());
        assert_eq!(opts.entry_point, None);
    }

    #[test]
    fn missing_engine_defaults() {
        let opts = ThemeOptions::from_toon_str("entry_point: Foo\n").unwrap();
        assert_eq!(opts.engine, Engine::Default);
        assert_eq!(opts.entry_point.as_deref(), Some("Foo"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ThemeOptions::from_toon_file(dir.path().join("nope.toon")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
