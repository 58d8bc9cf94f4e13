// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Internal-consistency faults in session state.

use alloc::string::{String, ToString};
use core::fmt;

/// Error returned when session state is inconsistent with its dimension catalog.
#[derive(Clone, PartialEq, Eq)]
pub enum SelectError<D> {
    /// The critical reference names a draggable the catalog has no entry for.
    MissingDraggable {
        /// The draggable that could not be found.
        id: D,
    },
}

impl<D: fmt::Debug> fmt::Debug for SelectError<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDraggable { id } => write!(f, "MissingDraggable {{ id: {id:?} }}"),
        }
    }
}

impl<D: fmt::Debug> fmt::Display for SelectError<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDraggable { id } => {
                write!(f, "draggable {id:?} is not in the dimension catalog")
            }
        }
    }
}

impl<D: fmt::Debug> core::error::Error for SelectError<D> {}

/// Error returned when parsing a phase tag outside the recognized set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownPhase {
    tag: String,
}

impl UnknownPhase {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
        }
    }

    /// The tag that failed to parse.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for UnknownPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown drag session phase {:?}", self.tag)
    }
}

impl core::error::Error for UnknownPhase {}
