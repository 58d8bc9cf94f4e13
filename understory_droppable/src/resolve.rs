// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small lookups over session records: current target, dragged entry, and the
//! post-drop collapse rule.

use core::fmt;
use core::hash::Hash;

use crate::error::SelectError;
use crate::session::{CompletedDrag, CriticalReference, DimensionCatalog, DragImpact};
use crate::types::DraggableDimension;

/// Returns the region currently targeted by `impact`, if any.
///
/// A reorder destination wins over a combine target.
#[must_use]
pub fn resolve_target<D, R>(impact: &DragImpact<D, R>) -> Option<&R> {
    if let Some(destination) = &impact.destination {
        return Some(&destination.region_id);
    }
    impact.merge.as_ref().map(|merge| &merge.region_id)
}

/// Finds the catalog entry for the dragged item named by `critical`.
pub fn try_lookup<'a, D, R>(
    critical: &CriticalReference<D, R>,
    catalog: &'a DimensionCatalog<D, R>,
) -> Result<&'a DraggableDimension<D, R>, SelectError<D>>
where
    D: Clone + Eq + Hash,
{
    catalog
        .draggable(&critical.draggable.id)
        .ok_or_else(|| SelectError::MissingDraggable {
            id: critical.draggable.id.clone(),
        })
}

/// Finds the catalog entry for the dragged item named by `critical`.
///
/// # Panics
///
/// Panics if the catalog has no entry for the dragged item. A live session always
/// collects its critical draggable, so a miss means the session state is corrupt.
#[must_use]
pub fn lookup<'a, D, R>(
    critical: &CriticalReference<D, R>,
    catalog: &'a DimensionCatalog<D, R>,
) -> &'a DraggableDimension<D, R>
where
    D: Clone + Eq + Hash + fmt::Debug,
{
    match try_lookup(critical, catalog) {
        Ok(dimension) => dimension,
        Err(err) => panic!("{err}"),
    }
}

/// Decides whether the origin region's placeholder animates closed after a drop.
///
/// - Dropped onto `region_id` as a combine: the list absorbs the item, collapse.
/// - Dropped onto another region: the gap left behind closes, collapse.
/// - Dropped back into `region_id` without combining, or onto nothing: the
///   placeholder is removed without animation.
#[must_use]
pub fn should_collapse_origin_after_drop<D, R: PartialEq>(
    region_id: &R,
    completed: &CompletedDrag<D, R>,
) -> bool {
    match resolve_target(&completed.impact) {
        Some(target) if target == region_id => completed.impact.is_combine(),
        Some(_) => true,
        None => false,
    }
}
