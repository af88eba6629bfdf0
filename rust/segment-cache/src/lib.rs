#![warn(missing_docs)]

//! A client-held cache of rendered page segments, and the walker that decides
//! which parts of it a navigation invalidates.
//!
//! Pages are shaped as a segment tree: every segment may host several named
//! parallel slots, and every slot holds one child segment per segment key. The
//! cache mirrors that shape with [`CacheNode`]s. A navigation is described by a
//! [`RouteState`] tree, and [`invalidate`] writes into a fresh target node the
//! structure the next render should see: slots along the navigation path are
//! materialized and the segments the navigation targets are left out, so the
//! render layer treats them as uncached and fetches them.
//!
//! ```
//! use segment_cache::{CacheNode, DEFAULT_SLOT, RouteState, Segment, invalidate};
//!
//! let existing = CacheNode::<&str, ()>::ready("root layout").with_child(
//!     DEFAULT_SLOT,
//!     "linking",
//!     CacheNode::ready("linking").with_child(DEFAULT_SLOT, "", CacheNode::ready("page")),
//! );
//!
//! let route_state = RouteState::new(Segment::from("")).with_slot(
//!     DEFAULT_SLOT,
//!     RouteState::new(Segment::from("linking"))
//!         .with_slot(DEFAULT_SLOT, RouteState::new(Segment::from("about"))),
//! );
//!
//! let mut target = CacheNode::empty();
//! invalidate(&mut target, &existing, &route_state);
//!
//! // The slot exists, but the segment being navigated to must be fetched again
//! let children = target.slot(DEFAULT_SLOT).unwrap();
//! assert!(children.is_empty());
//! ```
//!
//! Content population is not a concern of this crate. The `Content` and
//! `Fetch` type parameters of [`CacheNode`] stand in for whatever the render
//! and fetch layers produce.

mod error;
pub use error::*;

mod segment;
pub use segment::*;

mod route;
pub use route::*;

mod node;
pub use node::*;

mod config;
pub use config::*;

mod walker;
pub use walker::*;
