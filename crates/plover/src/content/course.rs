use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// A course, as listed in the course data file.
///
/// Apart from the slug and title, the course's fields are only of interest to
/// the renderer and are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CourseRecord {
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub meta: serde_json::Map<String, serde_json::Value>,
}

#[derive(Error, Debug)]
pub enum LoadCoursesError {
    #[error("failed to read courses from '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid course data in '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl CourseRecord {
    /// Loads the courses from a JSON file holding an array of course objects.
    ///
    /// Every course must have a `slug`.
    pub fn load_all(path: impl AsRef<Path>) -> Result<Vec<Self>, LoadCoursesError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| LoadCoursesError::Io {
            path: path.to_owned(),
            source,
        })?;

        Self::parse_all(&contents).map_err(|source| LoadCoursesError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    pub fn parse_all(text: &str) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(text)
    }
}
