use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, instrument};
use walkdir::WalkDir;

use crate::compiler::{compile_routes, CompileError};
use crate::config::{LoadConfigError, SiteConfig, CONFIG_FILE_NAME};
use crate::content::{
    sort_records_by_date, ContentRecord, CourseRecord, LoadCoursesError, ParsePostError,
};
use crate::date::DateError;
use crate::route::Routes;
use crate::storage::{store_routes, Store, StoreRoutesError};

/// Where course data lives, relative to the site root.
pub const COURSES_FILE: &str = "data/course-details.json";

/// Where posts live, relative to the site root.
pub const POSTS_DIR: &str = "content/posts";

#[derive(Error, Debug)]
pub enum LoadSiteError {
    #[error(transparent)]
    Config(#[from] LoadConfigError),

    #[error("failed to walk content directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to parse post: {0}")]
    ParsePost(#[from] ParsePostError),

    #[error("failed to load courses: {0}")]
    LoadCourses(#[from] LoadCoursesError),

    #[error("failed to sort posts: {0}")]
    SortPosts(#[from] DateError),
}

#[derive(Error, Debug)]
pub enum BuildSiteError {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Store(#[from] StoreRoutesError),
}

/// A site's configuration and content, loaded into memory.
#[derive(Debug)]
pub struct Site {
    pub root_path: PathBuf,
    pub config: SiteConfig,
    /// Newest first.
    pub posts: Vec<ContentRecord>,
    pub courses: Vec<CourseRecord>,
}

impl Site {
    /// Loads the site rooted at `root_path`.
    ///
    /// The root must contain a [`CONFIG_FILE_NAME`]. Posts are read from
    /// [`POSTS_DIR`] and courses from [`COURSES_FILE`]; both are optional.
    #[instrument(skip_all, fields(root = %root_path.as_ref().display()))]
    pub fn load(root_path: impl AsRef<Path>) -> Result<Self, LoadSiteError> {
        let root_path = root_path.as_ref().to_owned();
        let config = SiteConfig::from_path(root_path.join(CONFIG_FILE_NAME))?;

        let mut posts = load_posts(&root_path.join(POSTS_DIR))?;
        sort_records_by_date(&mut posts)?;

        let courses_path = root_path.join(COURSES_FILE);
        let courses = if courses_path.is_file() {
            CourseRecord::load_all(&courses_path)?
        } else {
            debug!(path = %courses_path.display(), "no course data found");
            Vec::new()
        };

        info!(posts = posts.len(), courses = courses.len(), "loaded site");

        Ok(Self {
            root_path,
            config,
            posts,
            courses,
        })
    }

    pub fn compile_routes(&self) -> Result<Routes, CompileError> {
        compile_routes(&self.posts, &self.courses, &self.config)
    }

    /// Compiles the site's routes and hands them to `storage`.
    pub fn build(&self, storage: &impl Store) -> Result<Routes, BuildSiteError> {
        let routes = self.compile_routes()?;
        store_routes(&routes, storage)?;

        Ok(routes)
    }
}

fn load_posts(posts_path: &Path) -> Result<Vec<ContentRecord>, LoadSiteError> {
    if !posts_path.is_dir() {
        debug!(path = %posts_path.display(), "no posts directory found");
        return Ok(Vec::new());
    }

    let walker = WalkDir::new(posts_path)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();

    let mut posts = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        let Some(filename) = entry.file_name().to_str() else {
            continue;
        };

        if !filename.ends_with(".md") || filename.starts_with('.') {
            continue;
        }

        debug!(path = %entry.path().display(), "parsing post");
        posts.push(ContentRecord::from_path(entry.path())?);
    }

    Ok(posts)
}
