use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::taxonomy::TagRegistry;

/// The name of the configuration file at the root of a site.
pub const CONFIG_FILE_NAME: &str = "plover.toml";

const DEFAULT_RELATED_POSTS: usize = 4;
const DEFAULT_HOME_POSTS: usize = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// The fully-qualified URL the site is served from, e.g.
    /// `https://www.example.com`. Canonical URLs are built on top of it.
    pub base_url: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub pages: PagesConfig,

    /// Display names and descriptions for tags, keyed by the tag as it is
    /// written in post front matter.
    #[serde(default)]
    pub tags: TagRegistry,

    /// The maximum number of same-category posts linked from each post.
    #[serde(default = "default_related_posts")]
    pub related_posts: usize,

    /// The number of most recent posts summarized on the home page.
    #[serde(default = "default_home_posts")]
    pub home_posts: usize,
}

fn default_related_posts() -> usize {
    DEFAULT_RELATED_POSTS
}

fn default_home_posts() -> usize {
    DEFAULT_HOME_POSTS
}

/// Base paths for the sections of the site.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    pub home: String,
    pub blog: String,
    pub tag: String,
    pub courses: String,
    pub not_found: String,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            home: "/".to_string(),
            blog: "blog".to_string(),
            tag: "tag".to_string(),
            courses: "courses".to_string(),
            not_found: "404".to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum LoadConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl SiteConfig {
    /// Returns a [`SiteConfig`] for `base_url` with every other setting at its
    /// default.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            title: None,
            pages: PagesConfig::default(),
            tags: TagRegistry::default(),
            related_posts: DEFAULT_RELATED_POSTS,
            home_posts: DEFAULT_HOME_POSTS,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| LoadConfigError::Io {
            path: path.to_owned(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| LoadConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }
}

impl FromStr for SiteConfig {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}
