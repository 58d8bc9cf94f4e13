// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The global drag-session record.
//!
//! Session state is produced by whatever tracks pointer input and collision; this
//! crate only reads it. Each [`SessionState`] variant carries exactly the fields that
//! are meaningful for that phase.

use core::fmt;
use core::hash::Hash;
use core::str::FromStr;

use hashbrown::HashMap;

use crate::error::UnknownPhase;
use crate::types::{DraggableDescriptor, DraggableDimension, RegionIdentity, TypeTag};

/// A position within a region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraggableLocation<R> {
    /// Region the location is in.
    pub region_id: R,
    /// Index within the region.
    pub index: usize,
}

/// A merge of the dragged item onto another draggable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combine<D, R> {
    /// Draggable being combined with.
    pub draggable_id: D,
    /// Region that draggable lives in.
    pub region_id: R,
}

/// Live effect of the current drag position.
///
/// At most one of `destination` and `merge` is expected to be set at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragImpact<D, R> {
    /// Where the item would land if dropped as a reorder.
    pub destination: Option<DraggableLocation<R>>,
    /// The item it would merge with if dropped as a combine.
    pub merge: Option<Combine<D, R>>,
}

impl<D, R> DragImpact<D, R> {
    /// An impact with no target.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            destination: None,
            merge: None,
        }
    }

    /// An impact reordering into `region_id` at `index`.
    #[must_use]
    pub fn reorder(region_id: R, index: usize) -> Self {
        Self {
            destination: Some(DraggableLocation { region_id, index }),
            merge: None,
        }
    }

    /// An impact combining with `draggable_id` in `region_id`.
    #[must_use]
    pub fn combine(draggable_id: D, region_id: R) -> Self {
        Self {
            destination: None,
            merge: Some(Combine {
                draggable_id,
                region_id,
            }),
        }
    }

    /// Returns `true` if the impact is a merge.
    #[must_use]
    pub fn is_combine(&self) -> bool {
        self.merge.is_some()
    }
}

impl<D, R> Default for DragImpact<D, R> {
    fn default() -> Self {
        Self::none()
    }
}

/// The draggable/region pair that started a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CriticalReference<D, R> {
    /// The dragged item.
    pub draggable: DraggableDescriptor<D, R>,
    /// The region it was picked up from.
    pub region: RegionIdentity<R>,
}

impl<D, R> CriticalReference<D, R> {
    /// Type tag of the session.
    #[must_use]
    pub fn type_tag(&self) -> &TypeTag {
        &self.region.type_tag
    }
}

/// The impact frozen at the moment a drag ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletedDrag<D, R> {
    /// Pair that started the drag.
    pub critical: CriticalReference<D, R>,
    /// Final impact.
    pub impact: DragImpact<D, R>,
}

/// Draggable dimensions collected for one session.
#[derive(Clone, Debug)]
pub struct DimensionCatalog<D, R> {
    draggables: HashMap<D, DraggableDimension<D, R>>,
}

impl<D, R> Default for DimensionCatalog<D, R> {
    fn default() -> Self {
        Self {
            draggables: HashMap::new(),
        }
    }
}

impl<D: Clone + Eq + Hash, R> DimensionCatalog<D, R> {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the entry for the dimension's draggable id.
    pub fn insert(&mut self, dimension: DraggableDimension<D, R>) {
        self.draggables
            .insert(dimension.descriptor.id.clone(), dimension);
    }

    /// Returns the entry for `id`, if collected.
    #[must_use]
    pub fn draggable(&self, id: &D) -> Option<&DraggableDimension<D, R>> {
        self.draggables.get(id)
    }

    /// Number of collected draggables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draggables.len()
    }

    /// Returns `true` if nothing has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draggables.is_empty()
    }
}

impl<D: Clone + Eq + Hash, R> FromIterator<DraggableDimension<D, R>> for DimensionCatalog<D, R> {
    fn from_iter<I: IntoIterator<Item = DraggableDimension<D, R>>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for dimension in iter {
            catalog.insert(dimension);
        }
        catalog
    }
}

/// The global drag session, one variant per phase.
#[derive(Clone, Debug)]
pub enum SessionState<D, R> {
    /// No drag in progress. `completed` is set while the last drop is settling.
    Idle {
        /// Record of the drag that just ended, until cleared.
        completed: Option<CompletedDrag<D, R>>,
    },
    /// A drag is live.
    Dragging {
        /// Pair that started the drag.
        critical: CriticalReference<D, R>,
        /// Collected dimensions.
        dimensions: DimensionCatalog<D, R>,
        /// Current impact.
        impact: DragImpact<D, R>,
    },
    /// The item was released but a dimension collection is still in flight.
    DropPending {
        /// Pair that started the drag.
        critical: CriticalReference<D, R>,
        /// Collected dimensions.
        dimensions: DimensionCatalog<D, R>,
        /// Impact at release.
        impact: DragImpact<D, R>,
    },
    /// The item is animating to its resting place.
    DropAnimating {
        /// Frozen result of the drag.
        completed: CompletedDrag<D, R>,
        /// Collected dimensions.
        dimensions: DimensionCatalog<D, R>,
    },
}

impl<D, R> SessionState<D, R> {
    /// Idle with nothing settling.
    #[must_use]
    pub const fn idle() -> Self {
        Self::Idle { completed: None }
    }

    /// Phase tag of this state.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            Self::Idle { .. } => Phase::Idle,
            Self::Dragging { .. } => Phase::Dragging,
            Self::DropPending { .. } => Phase::DropPending,
            Self::DropAnimating { .. } => Phase::DropAnimating,
        }
    }

    /// Returns `true` for every phase in which the drag is still live.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. } | Self::DropPending { .. })
    }
}

impl<D, R> Default for SessionState<D, R> {
    fn default() -> Self {
        Self::idle()
    }
}

/// Session phase tags, as exchanged with hosts that serialize session state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// `IDLE`
    Idle,
    /// `DRAGGING`
    Dragging,
    /// `DROP_PENDING`
    DropPending,
    /// `DROP_ANIMATING`
    DropAnimating,
}

impl Phase {
    /// Every recognized phase.
    pub const ALL: [Self; 4] = [
        Self::Idle,
        Self::Dragging,
        Self::DropPending,
        Self::DropAnimating,
    ];

    /// Wire name of the phase.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Dragging => "DRAGGING",
            Self::DropPending => "DROP_PENDING",
            Self::DropAnimating => "DROP_ANIMATING",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = UnknownPhase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|phase| phase.as_str() == s)
            .ok_or_else(|| UnknownPhase::new(s))
    }
}
