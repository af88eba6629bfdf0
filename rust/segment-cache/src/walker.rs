use std::sync::Arc;

use crate::{CacheNode, InvalidationConfig, RouteState, SiblingPolicy};

/// Writes the structure a navigation to `route_state` should render against
/// into `target`, using [`InvalidationConfig::default`].
///
/// See [`InvalidationWalker::invalidate`].
pub fn invalidate<Content, Fetch>(
    target: &mut CacheNode<Content, Fetch>,
    existing: &CacheNode<Content, Fetch>,
    route_state: &RouteState,
) {
    InvalidationWalker::default().invalidate(target, existing, route_state)
}

/// Decides which parts of a cache tree a navigation invalidates.
#[derive(Debug, Clone, Default)]
pub struct InvalidationWalker {
    config: InvalidationConfig,
}

impl InvalidationWalker {
    /// Creates a walker with the given configuration.
    pub fn new(config: InvalidationConfig) -> Self {
        Self { config }
    }

    /// The configuration of this walker.
    pub fn config(&self) -> &InvalidationConfig {
        &self.config
    }

    /// For every slot `route_state` declares, marks the segment it targets as
    /// uncached in `target`.
    ///
    /// A declared slot that `existing` has no segment map for is skipped:
    /// nothing was cached there, so nothing is written. Otherwise the slot's
    /// segment map is ensured in `target`, the untargeted siblings are carried
    /// over according to [`InvalidationConfig::siblings`], and the targeted
    /// segment is removed so rendering fetches it. Slots that `route_state`
    /// does not declare are left alone.
    ///
    /// Running this again with the same arguments makes no further change.
    pub fn invalidate<Content, Fetch>(
        &self,
        target: &mut CacheNode<Content, Fetch>,
        existing: &CacheNode<Content, Fetch>,
        route_state: &RouteState,
    ) {
        tracing::debug!(
            segment = ?route_state.segment(),
            slots = route_state.slots().len(),
            depth = route_state.depth(),
            "Invalidating cache by route state"
        );

        for (slot, child_route_state) in route_state.slots() {
            let key = child_route_state.cache_key(self.config.key_without_search_parameters);

            let Some(existing_segments) = existing.slot(slot) else {
                tracing::trace!(slot = %slot, key = %key, "No cached segments for slot");
                continue;
            };

            let segments = target.ensure_slot_map(slot);

            if self.config.siblings == SiblingPolicy::Retain {
                for (sibling_key, sibling) in existing_segments {
                    if sibling_key != &key {
                        segments
                            .entry(sibling_key.clone())
                            .or_insert_with(|| Arc::clone(sibling));
                    }
                }
            }

            if segments.remove(&key).is_some() || existing_segments.contains_key(&key) {
                tracing::trace!(slot = %slot, key = %key, "Dropped cached segment");
            } else {
                tracing::trace!(slot = %slot, key = %key, "Segment was not cached");
            }
        }
    }
}
