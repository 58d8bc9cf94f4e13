// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-region view-state derivation.
//!
//! ## Usage
//!
//! 1) Create one [`DropTargetSelector`] per mounted region. Never share an instance
//!    between regions: each one keeps its own memo slots.
//! 2) On every session change, call [`DropTargetSelector::select`] with the session
//!    and the region's identity.
//! 3) Compare the returned `Rc` against the previous one with [`Rc::ptr_eq`]; only a
//!    different pointer needs a redraw.
//!
//! ## Phases
//!
//! - Idle with nothing settling: the idle-with-animation record.
//! - Dragging, drop pending, drop animating: regions of another type stay idle. The
//!   hovered region gets a dragging-over record. The origin region, when not hovered,
//!   keeps its placeholder without animating it. Everything else is idle.
//! - Idle while a completed drop settles: only the origin region can differ from
//!   idle, and whether its placeholder animates closed is decided by
//!   [`should_collapse_origin_after_drop`].

use alloc::rc::Rc;
use core::fmt;
use core::hash::Hash;

use crate::error::SelectError;
use crate::memo::LastValue;
use crate::resolve::{resolve_target, should_collapse_origin_after_drop, try_lookup};
use crate::session::{
    CompletedDrag, CriticalReference, DimensionCatalog, DragImpact, SessionState,
};
use crate::types::{DraggableDimension, Placeholder, RegionIdentity};

/// What a renderer needs to draw one region.
///
/// `dragging_over_with` is set exactly when `is_dragging_over` is. `placeholder` is set
/// when the region is hovered or is the drag's origin.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewProps<D> {
    /// Something is being dragged over this region.
    pub is_dragging_over: bool,
    /// The draggable over this region.
    pub dragging_over_with: Option<D>,
    /// The draggable that was picked up from this region.
    pub dragging_from_this_with: Option<D>,
    /// Space to reserve in layout.
    pub placeholder: Option<Placeholder>,
    /// Whether the placeholder may animate in or out.
    pub should_animate_placeholder: bool,
}

impl<D> ViewProps<D> {
    /// Nothing to show; placeholder changes animate.
    pub const IDLE_WITH_ANIMATION: Self = Self {
        is_dragging_over: false,
        dragging_over_with: None,
        dragging_from_this_with: None,
        placeholder: None,
        should_animate_placeholder: true,
    };

    /// Nothing to show; a placeholder that was visible disappears without animating.
    pub const IDLE_WITHOUT_ANIMATION: Self = Self {
        is_dragging_over: false,
        dragging_over_with: None,
        dragging_from_this_with: None,
        placeholder: None,
        should_animate_placeholder: false,
    };
}

type OverKey<D, R> = (R, D, bool, Placeholder);
type HomeKey<D> = (D, Placeholder);

/// Memoized view-state selector for one region.
///
/// The dragging-over and home records each have their own single-slot cache, so a
/// region alternating between the two keeps reusing both.
#[derive(Debug)]
pub struct DropTargetSelector<D, R> {
    idle_with_animation: Rc<ViewProps<D>>,
    idle_without_animation: Rc<ViewProps<D>>,
    over: LastValue<OverKey<D, R>, ViewProps<D>>,
    home: LastValue<HomeKey<D>, ViewProps<D>>,
}

impl<D, R> Default for DropTargetSelector<D, R> {
    fn default() -> Self {
        Self {
            idle_with_animation: Rc::new(ViewProps::IDLE_WITH_ANIMATION),
            idle_without_animation: Rc::new(ViewProps::IDLE_WITHOUT_ANIMATION),
            over: LastValue::default(),
            home: LastValue::default(),
        }
    }
}

impl<D, R> DropTargetSelector<D, R>
where
    D: Clone + Eq + Hash,
    R: Clone + PartialEq,
{
    /// Creates a selector with empty caches. Call once per region.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the view props of `region` for `state`.
    ///
    /// # Panics
    ///
    /// Panics if a live or settling session names a dragged item that its dimension
    /// catalog does not contain.
    pub fn select(
        &mut self,
        state: &SessionState<D, R>,
        region: &RegionIdentity<R>,
    ) -> Rc<ViewProps<D>>
    where
        D: fmt::Debug,
    {
        match self.try_select(state, region) {
            Ok(props) => props,
            Err(err) => panic!("{err}"),
        }
    }

    /// Derives the view props of `region` for `state`, reporting an inconsistent
    /// session instead of panicking.
    pub fn try_select(
        &mut self,
        state: &SessionState<D, R>,
        region: &RegionIdentity<R>,
    ) -> Result<Rc<ViewProps<D>>, SelectError<D>> {
        match state {
            SessionState::Dragging {
                critical,
                dimensions,
                impact,
            }
            | SessionState::DropPending {
                critical,
                dimensions,
                impact,
            } => self.derive_live(region, critical, dimensions, impact),
            SessionState::DropAnimating {
                completed,
                dimensions,
            } => self.derive_live(region, &completed.critical, dimensions, &completed.impact),
            SessionState::Idle {
                completed: Some(completed),
            } => Ok(self.derive_settled(region, completed)),
            SessionState::Idle { completed: None } => Ok(self.idle_with_animation()),
        }
    }

    fn derive_live(
        &mut self,
        region: &RegionIdentity<R>,
        critical: &CriticalReference<D, R>,
        dimensions: &DimensionCatalog<D, R>,
        impact: &DragImpact<D, R>,
    ) -> Result<Rc<ViewProps<D>>, SelectError<D>> {
        if !region.accepts(critical.type_tag()) {
            return Ok(self.idle_with_animation());
        }

        let dragging = try_lookup(critical, dimensions)?;
        let is_over = resolve_target(impact) == Some(&region.id);
        let is_origin = dragging.descriptor.origin_region_id == region.id;

        #[cfg(feature = "tracing")]
        tracing::trace!(is_over, is_origin, "derived live drop target state");

        if is_over {
            return Ok(self.dragging_over(&region.id, dragging, is_origin));
        }
        if !is_origin {
            return Ok(self.idle_with_animation());
        }
        Ok(self.home(dragging))
    }

    fn derive_settled(
        &self,
        region: &RegionIdentity<R>,
        completed: &CompletedDrag<D, R>,
    ) -> Rc<ViewProps<D>> {
        if !region.accepts(completed.critical.type_tag()) {
            return self.idle_with_animation();
        }
        if completed.critical.draggable.origin_region_id != region.id {
            return self.idle_with_animation();
        }

        let collapse = should_collapse_origin_after_drop(&region.id, completed);

        #[cfg(feature = "tracing")]
        tracing::debug!(collapse, "origin placeholder settled");

        if collapse {
            self.idle_with_animation()
        } else {
            Rc::clone(&self.idle_without_animation)
        }
    }

    fn dragging_over(
        &mut self,
        region_id: &R,
        dragging: &DraggableDimension<D, R>,
        is_origin: bool,
    ) -> Rc<ViewProps<D>> {
        let key = (
            region_id.clone(),
            dragging.descriptor.id.clone(),
            is_origin,
            dragging.placeholder.clone(),
        );
        self.over
            .get_or_insert_with(key, |(_, id, is_origin, placeholder)| ViewProps {
                is_dragging_over: true,
                dragging_over_with: Some(id.clone()),
                dragging_from_this_with: is_origin.then(|| id.clone()),
                placeholder: Some(placeholder.clone()),
                // The origin already showed its placeholder before the drag began.
                should_animate_placeholder: !is_origin,
            })
    }

    fn home(&mut self, dragging: &DraggableDimension<D, R>) -> Rc<ViewProps<D>> {
        let key = (dragging.descriptor.id.clone(), dragging.placeholder.clone());
        self.home
            .get_or_insert_with(key, |(id, placeholder)| ViewProps {
                is_dragging_over: false,
                dragging_over_with: None,
                dragging_from_this_with: Some(id.clone()),
                placeholder: Some(placeholder.clone()),
                should_animate_placeholder: false,
            })
    }

    fn idle_with_animation(&self) -> Rc<ViewProps<D>> {
        Rc::clone(&self.idle_with_animation)
    }
}
