use indexmap::IndexMap;

use crate::{Segment, SegmentKey, SlotName};

/// What the server asked the client to do with a segment's cached data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefetchDirective {
    /// Fetch the segment again, discarding what is cached.
    Refetch,
    /// Refresh the segment's data in place.
    Refresh,
}

/// The declared shape of a pending navigation.
///
/// A [`RouteState`] names one segment and, per parallel slot, the route state
/// of the child segment the navigation will render there. It is produced by
/// the navigation layer and only ever read by this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteState {
    segment: Segment,
    slots: IndexMap<SlotName, RouteState>,
    url: Option<String>,
    refetch: Option<RefetchDirective>,
    root_layout: bool,
}

impl RouteState {
    /// Creates a route state for `segment` with no slots.
    pub fn new(segment: Segment) -> Self {
        Self {
            segment,
            slots: IndexMap::new(),
            url: None,
            refetch: None,
            root_layout: false,
        }
    }

    /// Declares `child` as the route state of the slot named `slot`.
    ///
    /// Declaring the same slot twice replaces the earlier child.
    pub fn with_slot(mut self, slot: impl Into<SlotName>, child: RouteState) -> Self {
        self.slots.insert(slot.into(), child);
        self
    }

    /// Sets the URL that overrides the one derived from the segment path.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the refetch directive for this segment.
    pub fn with_refetch(mut self, directive: RefetchDirective) -> Self {
        self.refetch = Some(directive);
        self
    }

    /// Marks this segment as the root layout.
    pub fn as_root_layout(mut self) -> Self {
        self.root_layout = true;
        self
    }

    /// The segment this route state identifies.
    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    /// The normalized key of this route state's segment.
    pub fn cache_key(&self, without_search_parameters: bool) -> SegmentKey {
        self.segment.cache_key(without_search_parameters)
    }

    /// The child route states, in declaration order.
    pub fn slots(&self) -> &IndexMap<SlotName, RouteState> {
        &self.slots
    }

    /// The child route state of the slot named `slot`, if declared.
    pub fn slot(&self, slot: &str) -> Option<&RouteState> {
        self.slots.get(slot)
    }

    /// The override URL, if any.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// The refetch directive, if any.
    pub fn refetch(&self) -> Option<RefetchDirective> {
        self.refetch
    }

    /// Whether this segment is the root layout.
    pub fn is_root_layout(&self) -> bool {
        self.root_layout
    }

    /// The number of levels in this route state, counting itself.
    ///
    /// Navigation code uses this to size the traversal it hands to the fetch
    /// layer; the walker only reports it in its debug events.
    pub fn depth(&self) -> usize {
        1 + self
            .slots
            .values()
            .map(RouteState::depth)
            .max()
            .unwrap_or_default()
    }
}
