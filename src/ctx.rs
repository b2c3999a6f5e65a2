use anyhow::{Context, Result};
use std::path::PathBuf;

/// Immutable bag of filesystem paths used throughout the app.
/// Constructed once at startup; never mutated after that.
#[derive(Clone, Debug)]
pub struct Ctx {
    pub home: PathBuf,
    pub config_dir: PathBuf,
}

impl Ctx {
    /// Construct paths from `$HOME`.
    ///
    /// Theme roots and the config dir all hang off the home directory,
    /// so a missing or empty `$HOME` is a startup error.
    pub fn new() -> Result<Self> {
        let home = std::env::var("HOME")
            .ok()
            .filter(|s| !s.is_empty())
            .context("$HOME is not set")?;

        let home = PathBuf::from(home);
        let config_dir = home.join(".config");

        Ok(Self { home, config_dir })
    }

    /// Absolute path of a theme-storage root given its home-relative path.
    pub fn themes_dir(&self, rel: &str) -> PathBuf {
        self.home.join(rel)
    }
}
