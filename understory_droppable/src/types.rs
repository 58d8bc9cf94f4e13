// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identity and geometry records shared by the session and the selector.

use alloc::borrow::Cow;
use core::fmt;

use kurbo::{Insets, Rect, Size};

/// Tag partitioning drag sessions: a region only reacts to draggables of the same type.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TypeTag(Cow<'static, str>);

impl TypeTag {
    /// The tag used when a region or draggable does not specify one.
    pub const DEFAULT: Self = Self(Cow::Borrowed("DEFAULT"));

    /// Creates a tag from a static or owned string.
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self(tag.into())
    }

    /// Returns the tag text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TypeTag {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeTag({:?})", self.as_str())
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&'static str> for TypeTag {
    fn from(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }
}

/// Static identity of one drop-target region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionIdentity<R> {
    /// Region id.
    pub id: R,
    /// Type tag the region accepts.
    pub type_tag: TypeTag,
}

impl<R> RegionIdentity<R> {
    /// Creates an identity with an explicit type tag.
    pub fn new(id: R, type_tag: impl Into<TypeTag>) -> Self {
        Self {
            id,
            type_tag: type_tag.into(),
        }
    }

    /// Returns `true` if this region reacts to draggables of `type_tag`.
    #[must_use]
    pub fn accepts(&self, type_tag: &TypeTag) -> bool {
        self.type_tag == *type_tag
    }
}

/// Identifies a draggable and the region it was picked up from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraggableDescriptor<D, R> {
    /// Draggable id.
    pub id: D,
    /// Region the draggable originates from.
    pub origin_region_id: R,
    /// Index of the draggable within its origin region.
    pub index: usize,
    /// Type tag of the draggable.
    pub type_tag: TypeTag,
}

/// A CSS-style box: border box plus the margin, border, and padding around it.
///
/// The other boxes are derived on construction so that lookups are plain field reads.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxModel {
    /// Border box grown by the margin.
    pub margin_box: Rect,
    /// The element's border box.
    pub border_box: Rect,
    /// Border box shrunk by the border.
    pub padding_box: Rect,
    /// Padding box shrunk by the padding.
    pub content_box: Rect,
    /// Margin widths.
    pub margin: Insets,
    /// Border widths.
    pub border: Insets,
    /// Padding widths.
    pub padding: Insets,
}

impl BoxModel {
    /// Builds a box model from a border box and its surrounding insets.
    #[must_use]
    pub fn new(border_box: Rect, margin: Insets, border: Insets, padding: Insets) -> Self {
        let padding_box = border_box - border;
        Self {
            margin_box: border_box + margin,
            border_box,
            padding_box,
            content_box: padding_box - padding,
            margin,
            border,
            padding,
        }
    }

    /// A box with no margin, border, or padding.
    #[must_use]
    pub fn from_border_box(border_box: Rect) -> Self {
        Self::new(border_box, Insets::ZERO, Insets::ZERO, Insets::ZERO)
    }

    /// Size of the margin box, which is what a placeholder needs to reserve.
    #[must_use]
    pub fn reserved_size(&self) -> Size {
        self.margin_box.size()
    }
}

/// Geometry reserved in layout for a dragged item.
#[derive(Clone, Debug, PartialEq)]
pub struct Placeholder {
    /// Box model of the item as it was measured before the drag.
    pub client: BoxModel,
    /// Element tag the host should render for the placeholder.
    pub tag_name: Cow<'static, str>,
    /// Display mode of the original item.
    pub display: Cow<'static, str>,
}

impl Placeholder {
    /// A `div` placeholder with `block` display.
    #[must_use]
    pub fn block(client: BoxModel) -> Self {
        Self {
            client,
            tag_name: Cow::Borrowed("div"),
            display: Cow::Borrowed("block"),
        }
    }
}

/// Catalog entry for one draggable.
#[derive(Clone, Debug, PartialEq)]
pub struct DraggableDimension<D, R> {
    /// Draggable identity.
    pub descriptor: DraggableDescriptor<D, R>,
    /// Geometry to reserve while the draggable is away.
    pub placeholder: Placeholder,
}
