use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

static TOML_REGEX: OnceLock<Regex> = OnceLock::new();

fn toml_regex() -> &'static Regex {
    TOML_REGEX.get_or_init(|| {
        let pattern = r"^[[:space:]]*\+\+\+(\r?\n(?s).*?(?-s))\+\+\+[[:space:]]*(?:$|(?:\r?\n((?s).*(?-s))$))";
        Regex::new(pattern).expect("failed to compile regex for TOML front matter")
    })
}

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("missing `+++` front matter block")]
    Missing,

    #[error("invalid front matter: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Splits `content` into its deserialized `+++`-fenced TOML front matter and
/// the remaining body.
pub fn parse_front_matter<T>(content: &str) -> Result<(T, &str), FrontMatterError>
where
    T: serde::de::DeserializeOwned,
{
    let captures = toml_regex()
        .captures(content)
        .ok_or(FrontMatterError::Missing)?;

    let raw_front_matter = captures.get(1).map_or("", |m| m.as_str());
    let body = captures.get(2).map_or("", |m| m.as_str());

    Ok((toml::from_str(raw_front_matter)?, body))
}

/// Deserializes a date that may be written either as a TOML datetime
/// (`date = 2020-04-01`) or as a string (`date = "2020-04-01"`).
pub fn from_toml_datetime<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DatetimeOrString {
        Datetime(toml::value::Datetime),
        String(String),
    }

    match Option::<DatetimeOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(DatetimeOrString::Datetime(datetime)) => Ok(Some(datetime.to_string())),
        Some(DatetimeOrString::String(string)) => match toml::value::Datetime::from_str(&string) {
            Ok(datetime) => Ok(Some(datetime.to_string())),
            Err(err) => Err(D::Error::custom(err)),
        },
    }
}
