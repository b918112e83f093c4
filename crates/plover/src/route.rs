//! The route descriptors handed to the page-rendering collaborator.

use std::collections::HashMap;
use std::fmt;

use derive_more::Deref;
use serde::Serialize;

use crate::content::ReadTime;
use crate::permalink::Permalink;

/// A normalized site path.
///
/// Paths always start with `/`, never end with one (except the root) and never
/// contain empty segments, so `courses/`, `/courses` and `courses` are the same
/// path.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Serialize)]
#[serde(transparent)]
pub struct RoutePath(String);

impl RoutePath {
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Joins the given segments into a path, e.g. `["tag", "scala"]` becomes
    /// `/tag/scala`.
    pub fn from_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> Self {
        let joined = segments
            .into_iter()
            .flat_map(|segment| segment.split('/'))
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("/");

        Self(format!("/{joined}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// The path's segments, without the leading `/`. The root has none.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|segment| !segment.is_empty())
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies the template that renders a route.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    Home,
    Blog,
    Courses,
    NotFound,
    Course,
    Tag,
    Post,
}

impl TemplateId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Blog => "blog",
            Self::Courses => "courses",
            Self::NotFound => "not_found",
            Self::Course => "course",
            Self::Tag => "tag",
            Self::Post => "post",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct RouteDescriptor {
    pub path: RoutePath,
    pub template: TemplateId,
    pub context: RouteContext,
}

/// The data passed through to the template. The renderer treats it as an
/// opaque JSON object.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(untagged)]
pub enum RouteContext {
    Home(HomeContext),
    Blog(BlogContext),
    Courses(CoursesContext),
    NotFound(EmptyContext),
    Course(CourseContext),
    Tag(TagContext),
    Post(PostContext),
}

#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize)]
pub struct EmptyContext {}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct HomeContext {
    pub posts: Vec<PostSummary>,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub time_to_read: ReadTime,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct BlogContext {
    pub tags: Vec<TagSummary>,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct TagSummary {
    pub tag: String,
    pub name: String,
    pub description: String,
    pub posts: usize,
    pub path: RoutePath,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct CoursesContext {
    pub courses: Vec<CourseSummary>,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct CourseSummary {
    pub slug: String,
    pub title: String,
    pub path: RoutePath,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct CourseContext {
    pub slug: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct TagContext {
    pub tag: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct PostContext {
    pub slug: String,
    pub canonical: Permalink,
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<LinkedPost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<LinkedPost>,
    pub related: Vec<LinkedPost>,
}

/// A reference from one post to another, resolved to the target's title.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct LinkedPost {
    pub slug: String,
    pub canonical: Permalink,
    pub title: String,
}

/// The complete, ordered set of routes produced by one build.
#[derive(Debug, PartialEq, Eq, Clone, Default, Deref, Serialize)]
#[serde(transparent)]
pub struct Routes(pub(crate) Vec<RouteDescriptor>);

impl Routes {
    pub fn get(&self, path: &RoutePath) -> Option<&RouteDescriptor> {
        self.0.iter().find(|route| &route.path == path)
    }

    pub fn with_template(&self, template: TemplateId) -> impl Iterator<Item = &RouteDescriptor> {
        self.0.iter().filter(move |route| route.template == template)
    }

    pub fn into_inner(self) -> Vec<RouteDescriptor> {
        self.0
    }

    /// Returns the number of routes per template.
    pub fn counts(&self) -> HashMap<TemplateId, usize> {
        let mut counts = HashMap::new();
        for route in &self.0 {
            *counts.entry(route.template).or_insert(0) += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a Routes {
    type Item = &'a RouteDescriptor;
    type IntoIter = std::slice::Iter<'a, RouteDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_route_path_normalization() {
        assert_eq!(RoutePath::from_segments(["courses", "gatling"]).as_str(), "/courses/gatling");
        assert_eq!(RoutePath::from_segments(["/tag/", "/scala/"]).as_str(), "/tag/scala");
        assert_eq!(RoutePath::from_segments(["/"]), RoutePath::root());
        assert_eq!(RoutePath::from_segments(["blog//archive"]).as_str(), "/blog/archive");
        assert!(RoutePath::from_segments(Vec::<&str>::new()).is_root());
        assert_eq!(
            RoutePath::from_segments(["tag", "scala"]).segments().collect::<Vec<_>>(),
            vec!["tag", "scala"]
        );
        assert_eq!(RoutePath::root().segments().count(), 0);
    }

    #[test]
    fn test_template_id_serialization() {
        assert_eq!(
            serde_json::to_string(&TemplateId::NotFound).unwrap(),
            r#""not_found""#
        );
        assert_eq!(TemplateId::Post.to_string(), "post");
    }

    #[test]
    fn test_empty_context_serializes_as_object() {
        let context = RouteContext::NotFound(EmptyContext::default());
        assert_eq!(serde_json::to_string(&context).unwrap(), "{}");
    }
}
