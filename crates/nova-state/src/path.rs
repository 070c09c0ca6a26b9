//! Dot-delimited key paths into a state mapping.
//!
//! A path such as `"status.isFetching"` is a sequence of mapping keys. Paths
//! only address mapping entries; there is no array index syntax.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// A complete path into a state mapping.
///
/// Paths are immutable sequences of key segments. Use builder methods to
/// construct paths incrementally, or [`Path::parse`] for the dotted form.
///
/// # Examples
///
/// ```
/// use nova_state::Path;
///
/// let path = Path::root().key("status").key("isFetching");
/// assert_eq!(path.len(), 2);
/// assert_eq!(path, Path::parse("status.isFetching"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path(Vec<String>);

impl Path {
    /// Create an empty path (root).
    #[inline]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Parse the dotted form.
    ///
    /// The string is split on every `.`; empty segments are kept as the empty
    /// key, so `""` is a one-segment path naming the key `""`.
    pub fn parse(dotted: &str) -> Self {
        Self(dotted.split(SEPARATOR).map(str::to_owned).collect())
    }

    /// Append a key segment and return self (builder pattern).
    #[inline]
    pub fn key(mut self, k: impl Into<String>) -> Self {
        self.0.push(k.into());
        self
    }

    /// Push a key segment onto the path (mutating).
    #[inline]
    pub fn push(&mut self, k: impl Into<String>) {
        self.0.push(k.into());
    }

    /// Get the segments of this path.
    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Check if this path is empty (root).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of segments in this path.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the path names a single top-level key (no separator).
    #[inline]
    pub fn is_top_level(&self) -> bool {
        self.0.len() == 1
    }

    /// Get a slice of segments from start to end.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> Path {
        Path(self.0[start..end].to_vec())
    }

    /// Leading sub-paths from longest (the path itself) to shortest (one segment).
    pub fn prefixes(&self) -> impl Iterator<Item = Path> + '_ {
        (1..=self.0.len()).rev().map(move |end| self.slice(0, end))
    }

    /// Iterate over the segments.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            f.write_str(seg)?;
        }
        Ok(())
    }
}

impl std::ops::Index<usize> for Path {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dotted = String::deserialize(deserializer)?;
        Ok(Path::parse(&dotted))
    }
}

/// Construct a `Path` from a sequence of key segments.
///
/// # Examples
///
/// ```
/// use nova_state::path;
///
/// let p = path!("status", "isFetching");
/// assert_eq!(p.to_string(), "status.isFetching");
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::root()
    };
    ($($seg:expr),+ $(,)?) => {{
        let mut p = $crate::Path::root();
        $(
            p.push($seg);
        )+
        p
    }};
}
