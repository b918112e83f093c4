use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use url::Url;

use crate::SiteConfig;

/// A fully-qualified URL for a piece of content.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Permalink(Url);

impl Permalink {
    /// Returns the [`Permalink`] for `path` beneath the site's base URL.
    ///
    /// A trailing `/` on the base URL and a leading `/` on the path are both
    /// ignored, so `https://example.com/` and `gatling` produce
    /// `https://example.com/gatling`.
    ///
    /// The result is a parsed [`Url`], so the host is lowercased and characters
    /// outside the URL path set are percent-encoded (`café` becomes
    /// `caf%C3%A9`). Route paths never contain `?` or `#`, which would
    /// otherwise start a query or fragment.
    pub fn from_path(config: &SiteConfig, path: &str) -> Result<Self, url::ParseError> {
        let base_url = config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');

        Url::from_str(&format!("{base_url}/{path}")).map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn path(&self) -> &str {
        self.0.path()
    }
}

impl fmt::Display for Permalink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Permalink {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
