//! Document-fragment link targets.
//!
//! Table-of-contents links point at headings through `href="#id"`. These types
//! separate the raw attribute value from the decoded heading id so that a
//! malformed link can be rejected before anything touches the DOM.

use percent_encoding::percent_decode_str;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Reasons a link `href` cannot be used as an in-page heading target.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FragmentError {
    #[error("link has no href attribute")]
    Missing,

    #[error("href '{0}' is not a document fragment")]
    NotAFragment(String),

    #[error("href '#' names no element")]
    Empty,

    #[error("fragment '{0}' contains whitespace")]
    Whitespace(String),

    #[error("fragment '{0}' is not valid percent-encoded UTF-8")]
    Encoding(String),
}

/// The id of a heading element, as stored in its `id` attribute.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct HeadingId(Arc<str>);

impl HeadingId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HeadingId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<String> for HeadingId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for HeadingId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HeadingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated `#id` link target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fragment {
    href: String,
    id: HeadingId,
}

impl Fragment {
    /// Parses the value of a link's `href` attribute.
    ///
    /// Only same-document fragments are accepted. The part after `#` is
    /// percent-decoded, so `#caf%C3%A9` targets the element with id `café`.
    pub fn parse(href: &str) -> Result<Self, FragmentError> {
        let raw = href
            .strip_prefix('#')
            .ok_or_else(|| FragmentError::NotAFragment(href.to_string()))?;
        if raw.is_empty() {
            return Err(FragmentError::Empty);
        }

        let decoded = percent_decode_str(raw)
            .decode_utf8()
            .map_err(|_| FragmentError::Encoding(raw.to_string()))?;
        if decoded.chars().any(char::is_whitespace) {
            return Err(FragmentError::Whitespace(decoded.into_owned()));
        }

        Ok(Self {
            href: href.to_string(),
            id: HeadingId::from(decoded.into_owned()),
        })
    }

    /// Parses an optional attribute value, treating an absent `href` as an error.
    pub fn from_attribute(href: Option<&str>) -> Result<Self, FragmentError> {
        Self::parse(href.ok_or(FragmentError::Missing)?)
    }

    /// The attribute value exactly as it appeared on the link.
    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn id(&self) -> &HeadingId {
        &self.id
    }
}

impl FromStr for Fragment {
    type Err = FragmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href)
    }
}
