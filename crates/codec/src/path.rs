//! Location of a value inside a nested document.

use std::fmt;

/// One step into a container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A key of a keyed container.
    Key(String),
    /// A position in a sequence.
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// The chain of keys and indices leading to a decoded or encoded value.
///
/// Renders as `a.b[2]`; the empty path renders as `<root>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodingPath {
    segments: Vec<PathSegment>,
}

impl CodingPath {
    /// Returns the empty path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a copy of this path extended by one segment.
    pub fn join(&self, segment: impl Into<PathSegment>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// Appends a segment in place.
    pub fn push(&mut self, segment: impl Into<PathSegment>) {
        self.segments.push(segment.into());
    }

    /// Returns the segments from outermost to innermost.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns each segment as a string; indices are rendered in decimal.
    pub fn keys(&self) -> Vec<String> {
        self.segments
            .iter()
            .map(|segment| match segment {
                PathSegment::Key(key) => key.clone(),
                PathSegment::Index(index) => index.to_string(),
            })
            .collect()
    }

    /// Returns `true` for the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl<S: Into<PathSegment>> FromIterator<S> for CodingPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CodingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => f.write_str(key)?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let path = CodingPath::root().join("a").join("b").join(2usize);
        assert_eq!(path.to_string(), "a.b[2]");
        assert_eq!(CodingPath::root().to_string(), "<root>");
        assert_eq!(CodingPath::root().join(0usize).join("x").to_string(), "[0].x");
    }

    #[test]
    fn keys() {
        let path: CodingPath = ["dmy"].into_iter().collect();
        assert_eq!(path.keys(), vec!["dmy".to_string()]);
        assert!(!path.is_root());
    }

    #[test]
    fn join_does_not_mutate() {
        let base = CodingPath::root().join("outer");
        let inner = base.join("inner");
        assert_eq!(base.segments().len(), 1);
        assert_eq!(inner.segments().len(), 2);
    }
}
