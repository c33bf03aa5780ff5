use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Result, ensure};
use serde::Deserialize;

use crate::deck::DEFAULT_WINDOW_SIZE;
use crate::environment::ApiUrls;
use crate::error::Error;
use crate::render::MAX_STACK_DEPTH;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Configuration {
    /// JSON array of profiles loaded at startup.
    pub catalog_path: PathBuf,
    /// Externally computed recommendations; swapped in whenever the file changes.
    pub recommendations_path: Option<PathBuf>,
    /// How many cards are stacked on screen.
    pub window_size: NonZeroUsize,
    /// Quiet period after a change to the recommendations file before re-reading it.
    #[serde(with = "humantime_serde")]
    pub reload_debounce: Duration,
    /// Host name the widget is served from; selects the API environment.
    pub host: String,
    /// API base URLs per environment.
    pub api: ApiUrls,
}

impl Configuration {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let s = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&s)?)
    }

    /// Validate runtime invariants that cannot be expressed via serde defaults alone.
    pub fn validated(self) -> Result<Self> {
        ensure!(
            !self.catalog_path.as_os_str().is_empty(),
            "catalog-path must not be empty"
        );
        ensure!(
            self.window_size.get() <= MAX_STACK_DEPTH,
            "window-size must be at most {MAX_STACK_DEPTH}, got {}",
            self.window_size
        );
        if let Some(recs) = &self.recommendations_path {
            ensure!(
                !recs.as_os_str().is_empty(),
                "recommendations-path must not be empty when set"
            );
            ensure!(
                *recs != self.catalog_path,
                "recommendations-path must differ from catalog-path"
            );
        }
        ensure!(
            self.reload_debounce <= Duration::from_secs(60),
            "reload-debounce must be at most 60s"
        );
        for (name, url) in [
            ("api.development", &self.api.development),
            ("api.production", &self.api.production),
        ] {
            ensure!(
                url.starts_with("http://") || url.starts_with("https://"),
                "{name} must be an http(s) URL, got {url:?}"
            );
        }
        Ok(self)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("users_database.json"),
            recommendations_path: None,
            window_size: DEFAULT_WINDOW_SIZE,
            reload_debounce: Duration::from_millis(250),
            host: "localhost".to_string(),
            api: ApiUrls::default(),
        }
    }
}
