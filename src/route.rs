//! Route types and validation
//!
//! Routes are absolute, `/`-separated paths (e.g. `/teacher/assignments/create`).
//! The guard uses the segment structure to decide dashboard adjacency, so
//! parsing keeps both the raw string and the split segments.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors that can occur while parsing a route
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("route must start with '/'")]
    MissingLeadingSlash,

    #[error("route contains empty segment")]
    EmptySegment,

    #[error("invalid route segment: {segment} (allowed: alphanumeric, underscore, hyphen)")]
    InvalidSegment { segment: String },
}

fn segment_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap())
}

/// An absolute application route
///
/// The root route `/` has zero segments. Every other route is a leading
/// slash followed by validated segments.
///
/// # Examples
///
/// ```
/// use hubnav::Route;
///
/// let route = Route::new("/teacher/assignments/create").unwrap();
/// assert_eq!(route.as_str(), "/teacher/assignments/create");
/// assert_eq!(route.depth(), 3);
/// assert_eq!(route.first_segment(), Some("teacher"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    raw: String,
    segments: Vec<String>,
}

impl Route {
    /// Parses and validates a route string
    ///
    /// # Errors
    ///
    /// Returns `RouteError` if:
    /// - The route does not start with `/`
    /// - The route contains empty segments (`//` or a trailing slash)
    /// - Segments contain invalid characters
    pub fn new(route: impl Into<String>) -> Result<Self, RouteError> {
        let raw = route.into();

        let rest = raw
            .strip_prefix('/')
            .ok_or(RouteError::MissingLeadingSlash)?;

        if rest.is_empty() {
            return Ok(Self {
                raw,
                segments: Vec::new(),
            });
        }

        let segments: Vec<String> = rest.split('/').map(|s| s.to_string()).collect();

        for segment in &segments {
            if segment.is_empty() {
                return Err(RouteError::EmptySegment);
            }
            if !segment_regex().is_match(segment) {
                return Err(RouteError::InvalidSegment {
                    segment: segment.clone(),
                });
            }
        }

        Ok(Self { raw, segments })
    }

    /// Returns the raw route string
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the route segments
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the depth (number of segments) of the route
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Checks if this is the root route `/`
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the first path segment, if any
    ///
    /// The first segment names the role area a route belongs to
    /// (e.g. `teacher` for `/teacher/assignments/create`).
    pub fn first_segment(&self) -> Option<&str> {
        self.segments.first().map(|s| s.as_str())
    }

    /// Checks if this route is a prefix of another route
    ///
    /// The root route is a prefix of every route.
    ///
    /// # Examples
    ///
    /// ```
    /// use hubnav::Route;
    ///
    /// let area = Route::new("/teacher").unwrap();
    /// let page = Route::new("/teacher/assignments").unwrap();
    /// assert!(area.is_prefix_of(&page));
    /// assert!(!page.is_prefix_of(&area));
    /// ```
    pub fn is_prefix_of(&self, other: &Route) -> bool {
        if self.segments.len() > other.segments.len() {
            return false;
        }

        self.segments
            .iter()
            .zip(other.segments.iter())
            .all(|(a, b)| a == b)
    }

    /// Returns the parent route (one level up)
    ///
    /// # Examples
    ///
    /// ```
    /// use hubnav::Route;
    ///
    /// let route = Route::new("/teacher/assignments").unwrap();
    /// let parent = route.parent().unwrap();
    /// assert_eq!(parent.as_str(), "/teacher");
    /// assert!(parent.parent().unwrap().is_root());
    /// ```
    pub fn parent(&self) -> Option<Route> {
        if self.segments.is_empty() {
            return None;
        }

        let parent_segments = &self.segments[..self.segments.len() - 1];
        let raw = format!("/{}", parent_segments.join("/"));
        Some(Route {
            raw,
            segments: parent_segments.to_vec(),
        })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl From<Route> for String {
    fn from(route: Route) -> Self {
        route.raw
    }
}

impl AsRef<str> for Route {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
