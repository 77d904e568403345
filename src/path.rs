//! Parsed request paths.
//!
//! A path is the ordered list of segments a request navigated through to reach
//! the queried elements. Parsing request URLs into paths happens upstream; this
//! module only models the result and derives the navigation source it carries.

use std::fmt;

use crate::model::{EntitySet, NavigationSource, SchemaType, Singleton};

/// One step of a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// `Orders`
    EntitySet(EntitySet),
    /// `Me`
    Singleton(Singleton),
    /// `(1)` or `(Id=1,Region='EU')`
    Key(Vec<(String, String)>),
    /// `Items`; `target` is `None` when the navigation target is not a
    /// declared source (contained or unbound navigation)
    Navigation {
        property: String,
        target: Option<NavigationSource>,
    },
    /// `Name`
    Property(String),
    /// `Shop.SpecialOrder`
    TypeCast(SchemaType),
    /// `$count`
    Count,
    /// `$value`
    Value,
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::EntitySet(set) => f.write_str(set.name()),
            PathSegment::Singleton(singleton) => f.write_str(singleton.name()),
            PathSegment::Key(parts) => {
                let rendered: Vec<String> = match parts.as_slice() {
                    [(_, value)] => vec![value.clone()],
                    _ => parts.iter().map(|(k, v)| format!("{}={}", k, v)).collect(),
                };
                write!(f, "({})", rendered.join(","))
            }
            PathSegment::Navigation { property, .. } => f.write_str(property),
            PathSegment::Property(name) => f.write_str(name),
            PathSegment::TypeCast(ty) => write!(f, "{}", ty),
            PathSegment::Count => f.write_str("$count"),
            PathSegment::Value => f.write_str("$value"),
        }
    }
}

/// A parsed request path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ODataPath {
    segments: Vec<PathSegment>,
    navigation_source: Option<NavigationSource>,
}

impl ODataPath {
    pub fn new(segments: Vec<PathSegment>) -> Self {
        let navigation_source = derive_navigation_source(&segments);
        Self {
            segments,
            navigation_source,
        }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The navigation source the path resolved to, if any.
    pub fn navigation_source(&self) -> Option<&NavigationSource> {
        self.navigation_source.as_ref()
    }
}

impl From<NavigationSource> for ODataPath {
    fn from(source: NavigationSource) -> Self {
        let segment = match source {
            NavigationSource::EntitySet(set) => PathSegment::EntitySet(set),
            NavigationSource::Singleton(singleton) => PathSegment::Singleton(singleton),
        };
        ODataPath::new(vec![segment])
    }
}

impl FromIterator<PathSegment> for ODataPath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        ODataPath::new(iter.into_iter().collect())
    }
}

impl fmt::Display for ODataPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            // keys attach to the previous segment
            if i > 0 && !matches!(segment, PathSegment::Key(_)) {
                f.write_str("/")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// Last source-bearing segment wins; an unresolved navigation clears it.
fn derive_navigation_source(segments: &[PathSegment]) -> Option<NavigationSource> {
    segments.iter().fold(None, |current, segment| match segment {
        PathSegment::EntitySet(set) => Some(NavigationSource::EntitySet(set.clone())),
        PathSegment::Singleton(singleton) => Some(NavigationSource::Singleton(singleton.clone())),
        PathSegment::Navigation { target, .. } => target.clone(),
        _ => current,
    })
}
