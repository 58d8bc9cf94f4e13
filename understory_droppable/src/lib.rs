// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_droppable --heading-base-level=0

//! Understory Droppable: view state for drop-target regions.
//!
//! A drag-and-drop surface has one global drag session and many regions that items
//! can be dropped into. Each region only needs a small record to draw itself: is
//! something over it, which item, is the item from here, how much space to reserve,
//! and whether that space may animate. This crate derives that record.
//!
//! The core pieces are:
//!
//! - [`SessionState`]: the drag session, one variant per phase. It is produced by
//!   whatever tracks pointer input and collisions; this crate only reads it.
//! - [`resolve_target`], [`lookup`], and [`should_collapse_origin_after_drop`]: small
//!   rules over session records.
//! - [`DropTargetSelector`]: a per-region, memoized function from session state to
//!   [`ViewProps`]. Unchanged inputs yield the same [`Rc`](alloc::rc::Rc), so hosts
//!   can skip redraws with a pointer comparison.
//! - [`DropTargetConfig`] and [`DropTargetBinding`]: region configuration with
//!   explicit defaults, plus a small helper that owns a selector and reports only
//!   changed props.
//!
//! The crate does not handle pointer input, hit testing, or layout.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_droppable::{
//!     BoxModel, CriticalReference, DimensionCatalog, DragImpact, DraggableDescriptor,
//!     DraggableDimension, DropTargetSelector, Placeholder, RegionIdentity, SessionState,
//!     TypeTag,
//! };
//!
//! let item = DraggableDescriptor {
//!     id: "card-1",
//!     origin_region_id: "todo",
//!     index: 0,
//!     type_tag: TypeTag::DEFAULT,
//! };
//! let dimensions: DimensionCatalog<_, _> = [DraggableDimension {
//!     descriptor: item.clone(),
//!     placeholder: Placeholder::block(BoxModel::from_border_box(Rect::new(
//!         0.0, 0.0, 200.0, 40.0,
//!     ))),
//! }]
//! .into_iter()
//! .collect();
//!
//! let state = SessionState::Dragging {
//!     critical: CriticalReference {
//!         draggable: item,
//!         region: RegionIdentity::new("todo", TypeTag::DEFAULT),
//!     },
//!     dimensions,
//!     impact: DragImpact::reorder("done", 0),
//! };
//!
//! // One selector per region.
//! let mut todo = DropTargetSelector::new();
//! let mut done = DropTargetSelector::new();
//!
//! let done_props = done.select(&state, &RegionIdentity::new("done", TypeTag::DEFAULT));
//! assert!(done_props.is_dragging_over);
//! assert_eq!(done_props.dragging_over_with, Some("card-1"));
//!
//! // The origin keeps its placeholder but is not hovered.
//! let todo_props = todo.select(&state, &RegionIdentity::new("todo", TypeTag::DEFAULT));
//! assert!(!todo_props.is_dragging_over);
//! assert_eq!(todo_props.dragging_from_this_with, Some("card-1"));
//! assert!(todo_props.placeholder.is_some());
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` builds.
//! - `tracing`: emit `tracing` events for derived states and collapse decisions.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod binding;
mod config;
mod error;
mod memo;
mod resolve;
mod selector;
mod session;
mod types;

pub use binding::{Action, DropTargetBinding, update_viewport_max_scroll};
pub use config::{Direction, DropTargetConfig};
pub use error::{SelectError, UnknownPhase};
pub use resolve::{lookup, resolve_target, should_collapse_origin_after_drop, try_lookup};
pub use selector::{DropTargetSelector, ViewProps};
pub use session::{
    Combine, CompletedDrag, CriticalReference, DimensionCatalog, DragImpact,
    DraggableLocation, Phase, SessionState,
};
pub use types::{
    BoxModel, DraggableDescriptor, DraggableDimension, Placeholder, RegionIdentity, TypeTag,
};
