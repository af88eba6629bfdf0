use std::sync::Arc;

use hashbrown::HashMap;
use indexmap::IndexMap;

use crate::{SegmentKey, SlotName};

/// The cached children of one slot, keyed by segment.
pub type SegmentMap<Content, Fetch> = HashMap<SegmentKey, Arc<CacheNode<Content, Fetch>>>;

/// The slots of a [`CacheNode`], in the order they were first populated.
pub type ParallelRoutes<Content, Fetch> = IndexMap<SlotName, SegmentMap<Content, Fetch>>;

/// Whether a [`CacheNode`] holds rendered content.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderState<Content, Fetch> {
    /// Nothing has been rendered for this segment yet. Rendering it triggers a
    /// fetch, unless `pending` already holds one that is in flight.
    Lazy {
        /// The fetch that will produce this segment's content
        pending: Option<Fetch>,
    },
    /// The rendered content of this segment.
    Ready(Content),
}

/// The cached render state of a single segment and its parallel slots.
///
/// Children are shared through [`Arc`], so a subtree that survives a
/// navigation is referenced by both the previous and the next cache tree
/// rather than copied.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheNode<Content, Fetch> {
    render_state: RenderState<Content, Fetch>,
    head: Option<Content>,
    slots: ParallelRoutes<Content, Fetch>,
}

impl<Content, Fetch> Default for CacheNode<Content, Fetch> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<Content, Fetch> CacheNode<Content, Fetch> {
    /// Creates a node with no content, no pending fetch and no slots.
    pub fn empty() -> Self {
        Self::lazy(None)
    }

    /// Creates a node without content, optionally tracking the fetch that
    /// will produce it.
    pub fn lazy(pending: Option<Fetch>) -> Self {
        Self {
            render_state: RenderState::Lazy { pending },
            head: None,
            slots: IndexMap::new(),
        }
    }

    /// Creates a node holding rendered `content`.
    pub fn ready(content: Content) -> Self {
        Self {
            render_state: RenderState::Ready(content),
            head: None,
            slots: IndexMap::new(),
        }
    }

    /// Attaches head content to this node.
    pub fn with_head(mut self, head: Content) -> Self {
        self.head = Some(head);
        self
    }

    /// Places `child` under `key` in the slot named `slot`.
    pub fn with_child(
        self,
        slot: impl Into<SlotName>,
        key: impl Into<SegmentKey>,
        child: CacheNode<Content, Fetch>,
    ) -> Self {
        self.with_shared_child(slot, key, Arc::new(child))
    }

    /// Places an already shared `child` under `key` in the slot named `slot`.
    pub fn with_shared_child(
        mut self,
        slot: impl Into<SlotName>,
        key: impl Into<SegmentKey>,
        child: Arc<CacheNode<Content, Fetch>>,
    ) -> Self {
        self.slots
            .entry(slot.into())
            .or_default()
            .insert(key.into(), child);
        self
    }

    /// The render state of this node.
    pub fn render_state(&self) -> &RenderState<Content, Fetch> {
        &self.render_state
    }

    /// The rendered content, if this node is ready.
    pub fn content(&self) -> Option<&Content> {
        match &self.render_state {
            RenderState::Ready(content) => Some(content),
            RenderState::Lazy { .. } => None,
        }
    }

    /// The in-flight fetch, if this node is lazy and one has been started.
    pub fn pending_fetch(&self) -> Option<&Fetch> {
        match &self.render_state {
            RenderState::Lazy { pending } => pending.as_ref(),
            RenderState::Ready(_) => None,
        }
    }

    /// Returns true if this node holds rendered content.
    pub fn is_ready(&self) -> bool {
        matches!(self.render_state, RenderState::Ready(_))
    }

    /// The head content attached to this node, if any.
    pub fn head(&self) -> Option<&Content> {
        self.head.as_ref()
    }

    /// All slots of this node.
    pub fn slots(&self) -> &ParallelRoutes<Content, Fetch> {
        &self.slots
    }

    /// The segment map of the slot named `slot`, if present.
    pub fn slot(&self, slot: &str) -> Option<&SegmentMap<Content, Fetch>> {
        self.slots.get(slot)
    }

    /// The child cached under `key` in the slot named `slot`, if present.
    pub fn child(&self, slot: &str, key: &str) -> Option<&Arc<CacheNode<Content, Fetch>>> {
        self.slot(slot).and_then(|segments| segments.get(key))
    }

    /// Returns the segment map of the slot named `slot`, creating an empty one
    /// if the slot is not present yet.
    pub fn ensure_slot_map(&mut self, slot: &str) -> &mut SegmentMap<Content, Fetch> {
        self.slots.entry(slot.to_string()).or_default()
    }
}
