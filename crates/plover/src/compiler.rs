//! Derives the routes of a site from its posts and courses.
//!
//! Routes are produced in four groups, each in a deterministic order:
//!
//! 1. Section pages (home, blog, courses listing, not found)
//! 2. Course pages, in source order
//! 3. Tag pages, in the order each tag is first used
//! 4. Post pages, in the order the posts were supplied (newest first)
//!
//! A post's `next` and `prev` must name another post. A dangling reference,
//! a reused slug or two routes claiming the same path abort the whole build.

use std::collections::HashMap;

use chrono_tz::Tz;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::content::{ContentRecord, CourseRecord};
use crate::date::{format_date, DateError};
use crate::permalink::Permalink;
use crate::route::{
    BlogContext, CourseContext, CourseSummary, CoursesContext, EmptyContext, HomeContext,
    LinkedPost, PostContext, PostSummary, RouteContext, RouteDescriptor, RoutePath, Routes,
    TagContext, TemplateId,
};
use crate::taxonomy::{tag_summaries, TagIndex};
use crate::SiteConfig;

/// The format of the dates shown in post summaries, e.g. `Mar 1, 2019`.
pub const SUMMARY_DATE_FORMAT: &str = "%b %-d, %Y";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LinkDirection {
    Next,
    Prev,
}

impl std::fmt::Display for LinkDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Next => f.write_str("next"),
            Self::Prev => f.write_str("prev"),
        }
    }
}

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("could not find {direction} article with slug {target} for article {referrer}")]
    BrokenCrossReference {
        direction: LinkDirection,
        target: String,
        referrer: String,
    },

    #[error("route path '{path}' is claimed by both a {first} page and a {second} page")]
    DuplicateRoutePath {
        path: RoutePath,
        first: TemplateId,
        second: TemplateId,
    },

    #[error("route path '{path}' has an invalid segment '{segment}'")]
    InvalidRouteSegment { path: RoutePath, segment: String },

    #[error("slug '{slug}' is used by more than one article")]
    DuplicateSlug { slug: String },

    #[error("{entity} #{index} is missing required field `{field}`")]
    MissingRequiredField {
        entity: &'static str,
        index: usize,
        field: &'static str,
    },

    #[error("invalid URL for '{path}': {source}")]
    InvalidUrl {
        path: String,
        source: url::ParseError,
    },

    #[error("invalid date for article {slug}: {source}")]
    InvalidDate { slug: String, source: DateError },
}

/// Compiles the routes for `posts` and `courses`.
///
/// `posts` must already be sorted newest first.
pub fn compile_routes(
    posts: &[ContentRecord],
    courses: &[CourseRecord],
    config: &SiteConfig,
) -> Result<Routes, CompileError> {
    RouteCompiler::new(config).compile(posts, courses)
}

pub struct RouteCompiler<'a> {
    config: &'a SiteConfig,
}

impl<'a> RouteCompiler<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    pub fn compile(
        &self,
        posts: &[ContentRecord],
        courses: &[CourseRecord],
    ) -> Result<Routes, CompileError> {
        validate_slugs(posts, courses)?;

        let mut routes = RouteSet::default();

        for route in self.section_routes(posts, courses)? {
            routes.push(route)?;
        }
        for route in self.course_routes(courses) {
            routes.push(route)?;
        }
        for route in self.tag_routes(posts) {
            routes.push(route)?;
        }
        for route in self.post_routes(posts)? {
            routes.push(route)?;
        }

        let routes = routes.finish();
        info!(
            routes = routes.len(),
            posts = posts.len(),
            courses = courses.len(),
            "compiled routes"
        );

        Ok(routes)
    }

    fn section_routes(
        &self,
        posts: &[ContentRecord],
        courses: &[CourseRecord],
    ) -> Result<Vec<RouteDescriptor>, CompileError> {
        let pages = &self.config.pages;

        let home_posts = posts
            .iter()
            .take(self.config.home_posts)
            .map(summarize_post)
            .collect::<Result<Vec<_>, _>>()?;

        let courses = courses
            .iter()
            .map(|course| CourseSummary {
                slug: course.slug.clone(),
                title: course.title.clone(),
                path: self.course_path(course),
            })
            .collect();

        Ok(vec![
            RouteDescriptor {
                path: RoutePath::from_segments([pages.home.as_str()]),
                template: TemplateId::Home,
                context: RouteContext::Home(HomeContext { posts: home_posts }),
            },
            RouteDescriptor {
                path: RoutePath::from_segments([pages.blog.as_str()]),
                template: TemplateId::Blog,
                context: RouteContext::Blog(BlogContext {
                    tags: tag_summaries(posts, &self.config.tags, &pages.tag),
                }),
            },
            RouteDescriptor {
                path: RoutePath::from_segments([pages.courses.as_str()]),
                template: TemplateId::Courses,
                context: RouteContext::Courses(CoursesContext { courses }),
            },
            RouteDescriptor {
                path: RoutePath::from_segments([pages.not_found.as_str()]),
                template: TemplateId::NotFound,
                context: RouteContext::NotFound(EmptyContext::default()),
            },
        ])
    }

    fn course_path(&self, course: &CourseRecord) -> RoutePath {
        RoutePath::from_segments([self.config.pages.courses.as_str(), course.slug.as_str()])
    }

    fn course_routes(&self, courses: &[CourseRecord]) -> Vec<RouteDescriptor> {
        courses
            .iter()
            .map(|course| RouteDescriptor {
                path: self.course_path(course),
                template: TemplateId::Course,
                context: RouteContext::Course(CourseContext {
                    slug: course.slug.clone(),
                }),
            })
            .collect()
    }

    fn tag_routes(&self, posts: &[ContentRecord]) -> Vec<RouteDescriptor> {
        let tags = TagIndex::from_records(posts);

        tags.iter()
            .map(|tag| {
                if !self.config.tags.contains_key(tag) {
                    warn!(
                        %tag,
                        name = %self.config.tags.name(tag),
                        "tag is not registered, using fallback name"
                    );
                }

                RouteDescriptor {
                    path: RoutePath::from_segments([
                        self.config.pages.tag.as_str(),
                        tag.as_str(),
                    ]),
                    template: TemplateId::Tag,
                    context: RouteContext::Tag(TagContext { tag: tag.clone() }),
                }
            })
            .collect()
    }

    fn post_routes(&self, posts: &[ContentRecord]) -> Result<Vec<RouteDescriptor>, CompileError> {
        let titles = posts
            .iter()
            .map(|post| (post.slug.as_str(), post.title.as_str()))
            .collect::<HashMap<_, _>>();

        posts
            .iter()
            .map(|post| -> Result<RouteDescriptor, CompileError> {
                let canonical = self.permalink(&post.slug)?;
                let next = post
                    .next
                    .as_deref()
                    .map(|target| self.link(&titles, post, target, LinkDirection::Next))
                    .transpose()?;
                let prev = post
                    .prev
                    .as_deref()
                    .map(|target| self.link(&titles, post, target, LinkDirection::Prev))
                    .transpose()?;

                Ok(RouteDescriptor {
                    path: RoutePath::from_segments([post.slug.as_str()]),
                    template: TemplateId::Post,
                    context: RouteContext::Post(PostContext {
                        slug: post.slug.clone(),
                        canonical,
                        category: post.category.clone(),
                        next,
                        prev,
                        related: self.related_posts(posts, post)?,
                    }),
                })
            })
            .collect()
    }

    fn link(
        &self,
        titles: &HashMap<&str, &str>,
        referrer: &ContentRecord,
        target: &str,
        direction: LinkDirection,
    ) -> Result<LinkedPost, CompileError> {
        let title = titles
            .get(target)
            .ok_or_else(|| CompileError::BrokenCrossReference {
                direction,
                target: target.to_string(),
                referrer: referrer.slug.clone(),
            })?;

        Ok(LinkedPost {
            slug: target.to_string(),
            canonical: self.permalink(target)?,
            title: title.to_string(),
        })
    }

    /// Other posts in the same category, newest first.
    fn related_posts(
        &self,
        posts: &[ContentRecord],
        post: &ContentRecord,
    ) -> Result<Vec<LinkedPost>, CompileError> {
        let Some(category) = post.category.as_deref() else {
            return Ok(Vec::new());
        };

        posts
            .iter()
            .filter(|other| other.slug != post.slug && other.category.as_deref() == Some(category))
            .take(self.config.related_posts)
            .map(|other| -> Result<LinkedPost, CompileError> {
                Ok(LinkedPost {
                    slug: other.slug.clone(),
                    canonical: self.permalink(&other.slug)?,
                    title: other.title.clone(),
                })
            })
            .collect()
    }

    fn permalink(&self, slug: &str) -> Result<Permalink, CompileError> {
        Permalink::from_path(self.config, slug).map_err(|source| CompileError::InvalidUrl {
            path: slug.to_string(),
            source,
        })
    }
}

fn summarize_post(post: &ContentRecord) -> Result<PostSummary, CompileError> {
    let date = post
        .date
        .as_deref()
        .map(|date| format_date(date, SUMMARY_DATE_FORMAT, Tz::UTC))
        .transpose()
        .map_err(|source| CompileError::InvalidDate {
            slug: post.slug.clone(),
            source,
        })?;

    Ok(PostSummary {
        slug: post.slug.clone(),
        title: post.title.clone(),
        date,
        summary: post.summary.clone(),
        time_to_read: post.reading_metrics().read_time,
    })
}

fn validate_slugs(posts: &[ContentRecord], courses: &[CourseRecord]) -> Result<(), CompileError> {
    let mut seen = HashMap::with_capacity(posts.len());

    for (index, post) in posts.iter().enumerate() {
        if post.slug.trim().is_empty() {
            return Err(CompileError::MissingRequiredField {
                entity: "article",
                index,
                field: "slug",
            });
        }

        if seen.insert(post.slug.as_str(), index).is_some() {
            return Err(CompileError::DuplicateSlug {
                slug: post.slug.clone(),
            });
        }
    }

    for (index, course) in courses.iter().enumerate() {
        if course.slug.trim().is_empty() {
            return Err(CompileError::MissingRequiredField {
                entity: "course",
                index,
                field: "slug",
            });
        }
    }

    Ok(())
}

/// Accumulates routes, rejecting any path that has already been claimed.
#[derive(Default)]
struct RouteSet {
    claimed: HashMap<RoutePath, TemplateId>,
    routes: Vec<RouteDescriptor>,
}

impl RouteSet {
    fn push(&mut self, route: RouteDescriptor) -> Result<(), CompileError> {
        let invalid = route.path.segments().find(|segment| !is_valid_segment(segment));
        if let Some(segment) = invalid {
            return Err(CompileError::InvalidRouteSegment {
                segment: segment.to_string(),
                path: route.path,
            });
        }

        if let Some(first) = self.claimed.get(&route.path) {
            return Err(CompileError::DuplicateRoutePath {
                path: route.path,
                first: *first,
                second: route.template,
            });
        }

        debug!(path = %route.path, template = %route.template, "registered route");
        self.claimed.insert(route.path.clone(), route.template);
        self.routes.push(route);

        Ok(())
    }

    fn finish(self) -> Routes {
        Routes(self.routes)
    }
}

/// Segments must not climb the output tree or carry a query or fragment into
/// the canonical URL.
fn is_valid_segment(segment: &str) -> bool {
    segment != "." && segment != ".." && !segment.contains(['?', '#', '\\'])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::taxonomy::TagInfo;

    const BASE_URL: &str = "https://example.com";

    fn make_config() -> SiteConfig {
        SiteConfig::new(BASE_URL)
    }

    fn make_post(slug: &str, title: &str) -> ContentRecord {
        ContentRecord {
            slug: slug.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn with_tags(mut post: ContentRecord, tags: &[&str]) -> ContentRecord {
        post.tags = tags.iter().map(|tag| tag.to_string()).collect();
        post
    }

    fn make_course(slug: &str, title: &str) -> CourseRecord {
        CourseRecord {
            slug: slug.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn post_context<'r>(routes: &'r Routes, slug: &str) -> &'r PostContext {
        match &routes
            .get(&RoutePath::from_segments([slug]))
            .expect("post route")
            .context
        {
            RouteContext::Post(context) => context,
            other => panic!("expected a post context, got {other:?}"),
        }
    }

    #[test]
    fn test_next_resolves_to_target_title() {
        let posts = vec![
            ContentRecord {
                next: Some("b".to_string()),
                ..make_post("a", "Post A")
            },
            make_post("b", "Post B"),
        ];

        let routes = compile_routes(&posts, &[], &make_config()).unwrap();
        let context = post_context(&routes, "a");

        let next = context.next.as_ref().unwrap();
        assert_eq!(next.slug, "b");
        assert_eq!(next.title, "Post B");
        assert_eq!(next.canonical.as_str(), "https://example.com/b");
        assert_eq!(context.canonical.as_str(), "https://example.com/a");
        assert_eq!(context.prev, None);
    }

    #[test]
    fn test_prev_resolves_to_target_title() {
        let posts = vec![
            make_post("part-2", "Part 2"),
            ContentRecord {
                prev: Some("part-2".to_string()),
                ..make_post("part-3", "Part 3")
            },
        ];

        let routes = compile_routes(&posts, &[], &make_config()).unwrap();
        let prev = post_context(&routes, "part-3").prev.clone().unwrap();

        assert_eq!(prev.title, "Part 2");
        assert_eq!(prev.canonical.as_str(), "https://example.com/part-2");
    }

    #[test]
    fn test_missing_next_fails_the_build() {
        let posts = vec![ContentRecord {
            next: Some("missing".to_string()),
            ..make_post("a", "Post A")
        }];

        let err = compile_routes(&posts, &[], &make_config()).unwrap_err();

        assert!(matches!(
            err,
            CompileError::BrokenCrossReference {
                direction: LinkDirection::Next,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "could not find next article with slug missing for article a"
        );
    }

    #[test]
    fn test_missing_prev_fails_the_build() {
        let posts = vec![
            make_post("a", "Post A"),
            ContentRecord {
                prev: Some("gone".to_string()),
                ..make_post("b", "Post B")
            },
        ];

        let err = compile_routes(&posts, &[], &make_config()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "could not find prev article with slug gone for article b"
        );
    }

    #[test]
    fn test_tags_are_deduplicated() {
        let posts = vec![
            with_tags(make_post("a", "A"), &["x", "y"]),
            with_tags(make_post("b", "B"), &["y", "z"]),
        ];

        let routes = compile_routes(&posts, &[], &make_config()).unwrap();
        let tag_paths = routes
            .with_template(TemplateId::Tag)
            .map(|route| route.path.as_str())
            .collect::<Vec<_>>();

        assert_eq!(tag_paths, vec!["/tag/x", "/tag/y", "/tag/z"]);
    }

    #[test]
    fn test_tag_routes_cover_every_tag() {
        let posts = vec![
            with_tags(make_post("a", "A"), &["gatling", "articles"]),
            with_tags(make_post("b", "B"), &[]),
            with_tags(make_post("c", "C"), &["scala", "gatling", "scala_fp_series"]),
        ];

        let routes = compile_routes(&posts, &[], &make_config()).unwrap();

        let expected = posts
            .iter()
            .flat_map(|post| post.tags.iter().cloned())
            .collect::<HashSet<_>>();
        let actual = routes
            .with_template(TemplateId::Tag)
            .map(|route| match &route.context {
                RouteContext::Tag(TagContext { tag }) => tag.clone(),
                other => panic!("expected a tag context, got {other:?}"),
            })
            .collect::<Vec<_>>();

        assert_eq!(actual.len(), expected.len());
        assert_eq!(actual.into_iter().collect::<HashSet<_>>(), expected);
    }

    #[test]
    fn test_one_route_per_course() {
        let courses = vec![
            make_course("gatling-fundamentals", "Gatling Fundamentals"),
            make_course("rest-assured", "REST Assured"),
        ];

        let routes = compile_routes(&[], &courses, &make_config()).unwrap();
        let course_routes = routes.with_template(TemplateId::Course).collect::<Vec<_>>();

        assert_eq!(course_routes.len(), courses.len());
        for (route, course) in course_routes.iter().zip(&courses) {
            assert_eq!(route.path.as_str(), format!("/courses/{}", course.slug));
            assert_eq!(
                route.context,
                RouteContext::Course(CourseContext {
                    slug: course.slug.clone()
                })
            );
        }
    }

    #[test]
    fn test_course_without_slug_fails_the_build() {
        let courses = vec![make_course("ok", "Ok"), make_course("", "Nameless")];

        let err = compile_routes(&[], &courses, &make_config()).unwrap_err();
        assert_eq!(err.to_string(), "course #1 is missing required field `slug`");
    }

    #[test]
    fn test_duplicate_slug_is_flagged() {
        let posts = vec![make_post("same", "First"), make_post("same", "Second")];

        let err = compile_routes(&posts, &[], &make_config()).unwrap_err();
        assert!(matches!(err, CompileError::DuplicateSlug { slug } if slug == "same"));
    }

    #[test]
    fn test_post_colliding_with_section_fails_the_build() {
        let posts = vec![make_post("blog", "A post called blog")];

        let err = compile_routes(&posts, &[], &make_config()).unwrap_err();
        assert!(matches!(
            err,
            CompileError::DuplicateRoutePath {
                first: TemplateId::Blog,
                second: TemplateId::Post,
                ..
            }
        ));
    }

    #[test]
    fn test_course_colliding_with_tag_fails_the_build() {
        let mut config = make_config();
        config.pages.tag = "courses".to_string();

        let posts = vec![with_tags(make_post("a", "A"), &["gatling"])];
        let courses = vec![make_course("gatling", "Gatling")];

        let err = compile_routes(&posts, &courses, &config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "route path '/courses/gatling' is claimed by both a course page and a tag page"
        );
    }

    #[test]
    fn test_dot_segments_fail_the_build() {
        let posts = vec![with_tags(make_post("a", "A"), &[".."])];

        let err = compile_routes(&posts, &[], &make_config()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "route path '/tag/..' has an invalid segment '..'"
        );

        let posts = vec![make_post("../../x", "Escape")];
        let err = compile_routes(&posts, &[], &make_config()).unwrap_err();
        assert!(matches!(
            err,
            CompileError::InvalidRouteSegment { segment, .. } if segment == ".."
        ));
    }

    #[test]
    fn test_query_and_fragment_slugs_fail_the_build() {
        for slug in ["what?", "c#-intro"] {
            let posts = vec![make_post(slug, "Odd")];

            let err = compile_routes(&posts, &[], &make_config()).unwrap_err();
            assert!(matches!(
                err,
                CompileError::InvalidRouteSegment { segment, .. } if segment == slug
            ));
        }
    }

    #[test]
    fn test_unregistered_tag_uses_fallback_name() {
        let posts = vec![with_tags(make_post("a", "A"), &["functional"])];

        let routes = compile_routes(&posts, &[], &make_config()).unwrap();

        assert_eq!(
            routes
                .get(&RoutePath::from_segments(["tag", "functional"]))
                .unwrap()
                .context,
            RouteContext::Tag(TagContext {
                tag: "functional".to_string()
            })
        );

        let RouteContext::Blog(blog) = &routes
            .get(&RoutePath::from_segments(["blog"]))
            .unwrap()
            .context
        else {
            panic!("expected a blog context");
        };
        assert_eq!(blog.tags.len(), 1);
        assert_eq!(blog.tags[0].name, "Functional");
        assert_eq!(blog.tags[0].description, "");
    }

    #[test]
    fn test_compilation_is_idempotent() {
        let posts = vec![
            ContentRecord {
                category: Some("scala".to_string()),
                next: Some("b".to_string()),
                ..with_tags(make_post("a", "A"), &["scala", "articles"])
            },
            ContentRecord {
                category: Some("scala".to_string()),
                prev: Some("a".to_string()),
                ..with_tags(make_post("b", "B"), &["scala"])
            },
        ];
        let courses = vec![make_course("scala-course", "Scala")];
        let config = make_config();

        assert_eq!(
            compile_routes(&posts, &courses, &config).unwrap(),
            compile_routes(&posts, &courses, &config).unwrap()
        );
    }

    #[test]
    fn test_related_posts_share_category() {
        let mut config = make_config();
        config.related_posts = 2;

        let in_category = |slug: &str, category: &str| ContentRecord {
            category: Some(category.to_string()),
            ..make_post(slug, &slug.to_uppercase())
        };
        let posts = vec![
            in_category("s4", "scala"),
            in_category("g1", "gatling"),
            in_category("s3", "scala"),
            in_category("s2", "scala"),
            in_category("s1", "scala"),
            make_post("loose", "Loose"),
        ];

        let routes = compile_routes(&posts, &[], &config).unwrap();

        let related = post_context(&routes, "s2")
            .related
            .iter()
            .map(|post| post.slug.as_str())
            .collect::<Vec<_>>();
        assert_eq!(related, vec!["s4", "s3"]);

        assert!(post_context(&routes, "g1").related.is_empty());
        assert!(post_context(&routes, "loose").related.is_empty());
    }

    #[test]
    fn test_section_routes() {
        let mut config = make_config();
        config.home_posts = 1;
        config.tags.insert(
            "gatling",
            TagInfo {
                name: Some("Gatling".to_string()),
                description: Some("Load testing".to_string()),
            },
        );

        let posts = vec![
            ContentRecord {
                date: Some("2020-05-03".to_string()),
                summary: Some("Newest".to_string()),
                body: "one two three".to_string(),
                ..with_tags(make_post("newest", "Newest"), &["gatling", "articles"])
            },
            with_tags(make_post("older", "Older"), &["gatling"]),
        ];
        let courses = vec![make_course("gatling-fundamentals", "Gatling Fundamentals")];

        let routes = compile_routes(&posts, &courses, &config).unwrap();

        assert_eq!(
            routes.get(&RoutePath::root()).unwrap().context,
            RouteContext::Home(HomeContext {
                posts: vec![PostSummary {
                    slug: "newest".to_string(),
                    title: "Newest".to_string(),
                    date: Some("May 3, 2020".to_string()),
                    summary: Some("Newest".to_string()),
                    time_to_read: crate::content::ReadTime(1),
                }]
            })
        );

        let RouteContext::Blog(blog) = &routes
            .get(&RoutePath::from_segments(["blog"]))
            .unwrap()
            .context
        else {
            panic!("expected a blog context");
        };
        assert_eq!(
            blog.tags
                .iter()
                .map(|tag| (tag.name.as_str(), tag.posts))
                .collect::<Vec<_>>(),
            vec![("Articles", 1), ("Gatling", 2)]
        );
        assert_eq!(blog.tags[1].description, "Load testing");

        assert_eq!(
            routes
                .get(&RoutePath::from_segments(["courses"]))
                .unwrap()
                .context,
            RouteContext::Courses(CoursesContext {
                courses: vec![CourseSummary {
                    slug: "gatling-fundamentals".to_string(),
                    title: "Gatling Fundamentals".to_string(),
                    path: RoutePath::from_segments(["courses", "gatling-fundamentals"]),
                }]
            })
        );

        assert_eq!(
            routes
                .get(&RoutePath::from_segments(["404"]))
                .unwrap()
                .template,
            TemplateId::NotFound
        );
    }

    #[test]
    fn test_route_table() {
        let posts = vec![
            ContentRecord {
                next: Some("scala-basics-2".to_string()),
                ..with_tags(make_post("scala-basics-1", "Scala Basics 1"), &["scala"])
            },
            ContentRecord {
                prev: Some("scala-basics-1".to_string()),
                ..with_tags(make_post("scala-basics-2", "Scala Basics 2"), &["scala", "articles"])
            },
        ];
        let courses = vec![make_course("scala-course", "Scala")];

        let routes = compile_routes(&posts, &courses, &make_config()).unwrap();
        let table = routes
            .iter()
            .map(|route| format!("{} {}", route.template, route.path))
            .collect::<Vec<_>>()
            .join("\n");

        insta::assert_snapshot!(table, @r###"
        home /
        blog /blog
        courses /courses
        not_found /404
        course /courses/scala-course
        tag /tag/scala
        tag /tag/articles
        post /scala-basics-1
        post /scala-basics-2
        "###);
    }

    #[test]
    fn test_post_context_json() {
        let posts = vec![
            ContentRecord {
                category: Some("gatling".to_string()),
                next: Some("b".to_string()),
                ..make_post("a", "Post A")
            },
            make_post("b", "Post B"),
        ];

        let routes = compile_routes(&posts, &[], &make_config()).unwrap();
        let route = routes.get(&RoutePath::from_segments(["a"])).unwrap();

        assert_eq!(
            serde_json::to_value(route).unwrap(),
            serde_json::json!({
                "path": "/a",
                "template": "post",
                "context": {
                    "slug": "a",
                    "canonical": "https://example.com/a",
                    "category": "gatling",
                    "next": {
                        "slug": "b",
                        "canonical": "https://example.com/b",
                        "title": "Post B"
                    },
                    "related": []
                }
            })
        );
    }
}
