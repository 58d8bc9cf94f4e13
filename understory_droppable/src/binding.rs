// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Connects one region's configuration to its selector and suppresses unchanged
//! results.

use alloc::rc::Rc;
use core::fmt;
use core::hash::Hash;

use kurbo::Vec2;

use crate::config::DropTargetConfig;
use crate::selector::{DropTargetSelector, ViewProps};
use crate::session::SessionState;
use crate::types::RegionIdentity;

/// Actions a region may hand back to whoever owns the session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Action {
    /// Record the maximum scroll offset of the viewport the region lives in.
    UpdateViewportMaxScroll {
        /// Largest reachable scroll offset.
        max_scroll: Vec2,
    },
}

/// Builds an [`Action::UpdateViewportMaxScroll`].
#[must_use]
pub fn update_viewport_max_scroll(max_scroll: Vec2) -> Action {
    Action::UpdateViewportMaxScroll { max_scroll }
}

/// A mounted region: its config, its private selector, and the last props it produced.
///
/// ```
/// use understory_droppable::{DropTargetBinding, DropTargetConfig, SessionState};
///
/// let mut binding = DropTargetBinding::<u32, &str>::new(DropTargetConfig::new("todo"));
/// let idle = SessionState::idle();
///
/// // The first notification always produces props.
/// assert!(binding.update(&idle).is_some());
/// // Nothing changed for this region: no redraw.
/// assert!(binding.update(&idle).is_none());
/// ```
pub struct DropTargetBinding<D, R> {
    config: DropTargetConfig<R>,
    identity: RegionIdentity<R>,
    selector: DropTargetSelector<D, R>,
    current: Option<Rc<ViewProps<D>>>,
}

impl<D: fmt::Debug, R: fmt::Debug> fmt::Debug for DropTargetBinding<D, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropTargetBinding")
            .field("config", &self.config)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl<D, R> DropTargetBinding<D, R>
where
    D: Clone + Eq + Hash + fmt::Debug,
    R: Clone + PartialEq,
{
    /// Mounts a region with a fresh selector.
    pub fn new(config: DropTargetConfig<R>) -> Self {
        Self {
            identity: config.identity(),
            config,
            selector: DropTargetSelector::new(),
            current: None,
        }
    }

    /// The region's configuration.
    #[must_use]
    pub fn config(&self) -> &DropTargetConfig<R> {
        &self.config
    }

    /// Props from the most recent update, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Rc<ViewProps<D>>> {
        self.current.as_ref()
    }

    /// Runs the selector for `state`.
    ///
    /// Returns the new props only when they are a different allocation from the last
    /// ones, which is exactly when the renderer has something new to draw.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`DropTargetSelector::select`].
    pub fn update(&mut self, state: &SessionState<D, R>) -> Option<Rc<ViewProps<D>>> {
        let next = self.selector.select(state, &self.identity);
        if self
            .current
            .as_ref()
            .is_some_and(|current| Rc::ptr_eq(current, &next))
        {
            return None;
        }
        self.current = Some(Rc::clone(&next));
        Some(next)
    }

    /// Action reporting the viewport's maximum scroll, for the host to dispatch.
    #[must_use]
    pub fn viewport_max_scroll_changed(&self, max_scroll: Vec2) -> Action {
        update_viewport_max_scroll(max_scroll)
    }
}
