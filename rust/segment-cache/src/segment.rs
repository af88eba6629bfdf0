use std::{fmt::Display, str::FromStr};

use crate::SegmentCacheError;

/// The name of a parallel route slot.
pub type SlotName = String;

/// The normalized identifier of a segment within a slot's segment map.
pub type SegmentKey = String;

/// The slot that holds a segment's primary content.
pub const DEFAULT_SLOT: &str = "children";

/// The key prefix of a page segment. Page segments may carry their search
/// parameters after this prefix.
pub const PAGE_SEGMENT_KEY: &str = "__PAGE__";

/// The key of a slot's fallback segment, rendered when a parallel slot has no
/// match for the current URL.
pub const DEFAULT_SEGMENT_KEY: &str = "__DEFAULT__";

/// How a dynamic segment captures its part of the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DynamicParamKind {
    /// `[...param]`, one or more path parts.
    CatchAll,
    /// `[[...param]]`, zero or more path parts.
    OptionalCatchAll,
    /// `[param]`, exactly one path part.
    Dynamic,
}

impl DynamicParamKind {
    /// The short code used for this kind inside segment keys.
    pub fn code(&self) -> &'static str {
        match self {
            DynamicParamKind::CatchAll => "c",
            DynamicParamKind::OptionalCatchAll => "oc",
            DynamicParamKind::Dynamic => "d",
        }
    }
}

impl Display for DynamicParamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DynamicParamKind {
    type Err = SegmentCacheError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "c" => Ok(DynamicParamKind::CatchAll),
            "oc" => Ok(DynamicParamKind::OptionalCatchAll),
            "d" => Ok(DynamicParamKind::Dynamic),
            other => Err(SegmentCacheError::UnknownParamKind(other.to_string())),
        }
    }
}

/// One segment of a route, as declared by a [`crate::RouteState`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A segment whose name is fixed, including layouts and page segments.
    Static(String),
    /// A segment resolved from a dynamic route parameter.
    Dynamic {
        /// The parameter name, e.g. `slug`.
        param: String,
        /// The value the parameter resolved to for this navigation.
        value: String,
        /// How the parameter captures the URL.
        kind: DynamicParamKind,
    },
}

impl Segment {
    /// Creates a dynamic segment.
    pub fn dynamic(
        param: impl Into<String>,
        value: impl Into<String>,
        kind: DynamicParamKind,
    ) -> Self {
        Segment::Dynamic {
            param: param.into(),
            value: value.into(),
            kind,
        }
    }

    /// Returns true if this is a page segment.
    pub fn is_page(&self) -> bool {
        matches!(self, Segment::Static(name) if name.starts_with(PAGE_SEGMENT_KEY))
    }

    /// Normalizes this segment into the key it is cached under.
    ///
    /// Dynamic segments become `param|value|kind`. When
    /// `without_search_parameters` is set, page segments collapse to
    /// [`PAGE_SEGMENT_KEY`] so that pages differing only in their search
    /// parameters share a cache entry.
    pub fn cache_key(&self, without_search_parameters: bool) -> SegmentKey {
        match self {
            Segment::Dynamic { param, value, kind } => format!("{param}|{value}|{kind}"),
            Segment::Static(_) if without_search_parameters && self.is_page() => {
                PAGE_SEGMENT_KEY.to_string()
            }
            Segment::Static(name) => name.clone(),
        }
    }
}

impl From<&str> for Segment {
    fn from(name: &str) -> Self {
        Segment::Static(name.to_string())
    }
}

impl From<String> for Segment {
    fn from(name: String) -> Self {
        Segment::Static(name)
    }
}
