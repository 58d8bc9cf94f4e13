// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-region configuration with explicit defaults.

use crate::types::{RegionIdentity, TypeTag};

/// Axis along which a region lays out its items.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Items stack top to bottom.
    #[default]
    Vertical,
    /// Items run left to right.
    Horizontal,
}

/// Configuration of one drop-target region.
///
/// [`DropTargetConfig::new`] applies the defaults: [`TypeTag::DEFAULT`],
/// [`Direction::Vertical`], enabled, and clipped by its scroll container.
/// Only `id` and `type_tag` affect derived view state; the rest is carried for the
/// renderer and for whatever computes the drag impact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropTargetConfig<R> {
    /// Region id.
    pub id: R,
    /// Type tag the region accepts.
    pub type_tag: TypeTag,
    /// Layout axis.
    pub direction: Direction,
    /// Disabled regions never become a drop target.
    pub is_disabled: bool,
    /// Treat the region as visible even where a scroll container clips it.
    pub ignore_container_clipping: bool,
}

impl<R> DropTargetConfig<R> {
    /// Creates a config for `id` with default settings.
    pub fn new(id: R) -> Self {
        Self {
            id,
            type_tag: TypeTag::DEFAULT,
            direction: Direction::Vertical,
            is_disabled: false,
            ignore_container_clipping: false,
        }
    }

    /// Sets the accepted type tag.
    #[must_use]
    pub fn with_type(mut self, type_tag: impl Into<TypeTag>) -> Self {
        self.type_tag = type_tag.into();
        self
    }

    /// Sets the layout axis.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Enables or disables the region.
    #[must_use]
    pub fn with_disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }

    /// Sets whether container clipping is ignored.
    #[must_use]
    pub fn with_ignore_container_clipping(mut self, ignore: bool) -> Self {
        self.ignore_container_clipping = ignore;
        self
    }
}

impl<R: Clone> DropTargetConfig<R> {
    /// The identity the selector matches against.
    #[must_use]
    pub fn identity(&self) -> RegionIdentity<R> {
        RegionIdentity {
            id: self.id.clone(),
            type_tag: self.type_tag.clone(),
        }
    }
}
