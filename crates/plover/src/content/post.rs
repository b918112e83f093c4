use std::fs;
use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use indexmap::IndexSet;
use serde::Deserialize;
use thiserror::Error;

use crate::content::{from_toml_datetime, parse_front_matter, ContentRecord, FrontMatterError};
use crate::date::{parse_date, DateError};

/// The file name of a post bundle's source, e.g. `gatling-tutorial/index.md`.
pub const BUNDLE_INDEX: &str = "index.md";

#[derive(Debug, Deserialize)]
pub struct PostFrontMatter {
    pub title: String,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "from_toml_datetime")]
    pub date: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: IndexSet<String>,
    pub next: Option<String>,
    pub prev: Option<String>,
    pub summary: Option<String>,
}

#[derive(Error, Debug)]
pub enum ParsePostError {
    #[error("failed to read post '{filepath}': {source}")]
    Io {
        filepath: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid front matter in '{filepath}': {source}")]
    InvalidFrontMatter {
        filepath: PathBuf,
        source: FrontMatterError,
    },

    #[error("invalid date in '{filepath}': {source}")]
    InvalidDate {
        filepath: PathBuf,
        source: DateError,
    },

    #[error("cannot derive a slug from '{filepath}'")]
    MissingSlug { filepath: PathBuf },
}

impl ContentRecord {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ParsePostError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ParsePostError::Io {
            filepath: path.to_owned(),
            source,
        })?;

        Self::parse(&contents, path)
    }

    pub fn parse(text: &str, filepath: &Path) -> Result<Self, ParsePostError> {
        let (front_matter, body) =
            parse_front_matter::<PostFrontMatter>(text).map_err(|source| {
                ParsePostError::InvalidFrontMatter {
                    filepath: filepath.to_owned(),
                    source,
                }
            })?;

        if let Some(date) = front_matter.date.as_deref() {
            parse_date(date, Tz::UTC).map_err(|source| ParsePostError::InvalidDate {
                filepath: filepath.to_owned(),
                source,
            })?;
        }

        let slug = match front_matter.slug {
            Some(slug) => slug,
            None => slug_from_path(filepath).ok_or_else(|| ParsePostError::MissingSlug {
                filepath: filepath.to_owned(),
            })?,
        };

        Ok(Self {
            slug,
            title: front_matter.title,
            category: front_matter.category,
            tags: front_matter.tags,
            next: front_matter.next,
            prev: front_matter.prev,
            date: front_matter.date,
            summary: front_matter.summary,
            body: body.to_string(),
        })
    }
}

/// Bundles take their slug from the directory, other posts from the file stem.
fn slug_from_path(filepath: &Path) -> Option<String> {
    let stem_source = if filepath.file_name().is_some_and(|name| name == BUNDLE_INDEX) {
        filepath.parent()?.file_name()?
    } else {
        filepath.file_stem()?
    };

    Some(stem_source.to_string_lossy().to_string())
}
