// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `DropTargetSelector` across the drag session lifecycle.
//!
//! These walk regions through dragging, drop animation, and settling, checking both
//! the derived values and when the selector hands back the same allocation.

use std::rc::Rc;

use kurbo::Rect;
use understory_droppable::{
    BoxModel, CompletedDrag, CriticalReference, DimensionCatalog, DragImpact,
    DraggableDescriptor, DraggableDimension, DropTargetSelector, Placeholder, RegionIdentity,
    SessionState, TypeTag, ViewProps, should_collapse_origin_after_drop,
};

type Id = &'static str;
type State = SessionState<Id, Id>;

const ITEM: Id = "item";

fn descriptor(origin: Id) -> DraggableDescriptor<Id, Id> {
    DraggableDescriptor {
        id: ITEM,
        origin_region_id: origin,
        index: 1,
        type_tag: TypeTag::DEFAULT,
    }
}

fn placeholder() -> Placeholder {
    Placeholder::block(BoxModel::from_border_box(Rect::new(0.0, 0.0, 120.0, 32.0)))
}

fn critical(origin: Id) -> CriticalReference<Id, Id> {
    CriticalReference {
        draggable: descriptor(origin),
        region: RegionIdentity::new(origin, TypeTag::DEFAULT),
    }
}

fn catalog(origin: Id) -> DimensionCatalog<Id, Id> {
    [DraggableDimension {
        descriptor: descriptor(origin),
        placeholder: placeholder(),
    }]
    .into_iter()
    .collect()
}

fn dragging(origin: Id, impact: DragImpact<Id, Id>) -> State {
    SessionState::Dragging {
        critical: critical(origin),
        dimensions: catalog(origin),
        impact,
    }
}

fn drop_animating(origin: Id, impact: DragImpact<Id, Id>) -> State {
    SessionState::DropAnimating {
        completed: CompletedDrag {
            critical: critical(origin),
            impact,
        },
        dimensions: catalog(origin),
    }
}

fn settled(origin: Id, impact: DragImpact<Id, Id>) -> State {
    SessionState::Idle {
        completed: Some(CompletedDrag {
            critical: critical(origin),
            impact,
        }),
    }
}

fn region(id: Id) -> RegionIdentity<Id> {
    RegionIdentity::new(id, TypeTag::DEFAULT)
}

#[test]
fn idle_is_idle_with_animation_for_every_region() {
    let mut selector = DropTargetSelector::new();
    for id in ["A", "B", "C"] {
        let props = selector.select(&State::idle(), &region(id));
        assert_eq!(*props, ViewProps::IDLE_WITH_ANIMATION);
    }
    let typed = selector.select(&State::idle(), &RegionIdentity::new("A", "other"));
    assert_eq!(*typed, ViewProps::IDLE_WITH_ANIMATION);
}

#[test]
fn other_type_stays_idle_while_dragging() {
    let mut selector = DropTargetSelector::new();
    let other = RegionIdentity::new("A", "other");
    for impact in [
        DragImpact::reorder("A", 0),
        DragImpact::combine("x", "A"),
        DragImpact::none(),
    ] {
        let props = selector.select(&dragging("A", impact), &other);
        assert_eq!(*props, ViewProps::IDLE_WITH_ANIMATION);
    }
}

#[test]
fn foreign_target_animates_without_origin_marker() {
    let mut selector = DropTargetSelector::new();
    let props = selector.select(&dragging("A", DragImpact::reorder("B", 0)), &region("B"));

    assert!(props.is_dragging_over);
    assert_eq!(props.dragging_over_with, Some(ITEM));
    assert_eq!(props.dragging_from_this_with, None);
    assert_eq!(props.placeholder, Some(placeholder()));
    assert!(props.should_animate_placeholder);
}

#[test]
fn origin_target_does_not_animate() {
    let mut selector = DropTargetSelector::new();
    let props = selector.select(&dragging("A", DragImpact::reorder("A", 0)), &region("A"));

    assert!(props.is_dragging_over);
    assert_eq!(props.dragging_over_with, Some(ITEM));
    assert_eq!(props.dragging_from_this_with, Some(ITEM));
    assert!(!props.should_animate_placeholder);
}

#[test]
fn combine_target_counts_as_dragging_over() {
    let mut selector = DropTargetSelector::new();
    let props = selector.select(&dragging("A", DragImpact::combine("other", "B")), &region("B"));
    assert!(props.is_dragging_over);
    assert_eq!(props.dragging_over_with, Some(ITEM));
}

#[test]
fn origin_not_hovered_keeps_placeholder_still() {
    let mut selector = DropTargetSelector::new();
    let props = selector.select(&dragging("A", DragImpact::reorder("B", 0)), &region("A"));

    assert!(!props.is_dragging_over);
    assert_eq!(props.dragging_over_with, None);
    assert_eq!(props.dragging_from_this_with, Some(ITEM));
    assert_eq!(props.placeholder, Some(placeholder()));
    assert!(!props.should_animate_placeholder);
}

#[test]
fn unrelated_region_is_idle_while_dragging() {
    let mut selector = DropTargetSelector::new();
    let props = selector.select(&dragging("A", DragImpact::reorder("B", 0)), &region("C"));
    assert_eq!(*props, ViewProps::IDLE_WITH_ANIMATION);
}

#[test]
fn repeated_inputs_return_same_allocation() {
    let mut selector = DropTargetSelector::new();
    let state = dragging("A", DragImpact::reorder("A", 0));

    let first = selector.select(&state, &region("A"));
    // A structurally identical but freshly built session.
    let second = selector.select(&dragging("A", DragImpact::reorder("A", 4)), &region("A"));
    assert!(Rc::ptr_eq(&first, &second));
}

#[test]
fn alternating_over_and_home_never_mixes_caches() {
    let mut selector = DropTargetSelector::new();
    let over = dragging("A", DragImpact::reorder("A", 0));
    let home = dragging("A", DragImpact::reorder("B", 0));

    let over_1 = selector.select(&over, &region("A"));
    let home_1 = selector.select(&home, &region("A"));
    let over_2 = selector.select(&over, &region("A"));
    let home_2 = selector.select(&home, &region("A"));

    assert!(over_1.is_dragging_over);
    assert!(!home_1.is_dragging_over);
    assert!(Rc::ptr_eq(&over_1, &over_2));
    assert!(Rc::ptr_eq(&home_1, &home_2));
    assert!(!Rc::ptr_eq(&over_1, &home_1));
}

#[test]
fn selectors_do_not_share_caches() {
    let mut first = DropTargetSelector::new();
    let mut second = DropTargetSelector::new();
    let state = dragging("A", DragImpact::reorder("A", 0));

    let a = first.select(&state, &region("A"));
    let b = second.select(&state, &region("A"));
    assert_eq!(*a, *b);
    assert!(!Rc::ptr_eq(&a, &b));
}

#[test]
fn drop_animating_freezes_final_relationship() {
    let mut selector = DropTargetSelector::new();

    let target = selector.select(&drop_animating("A", DragImpact::reorder("B", 0)), &region("B"));
    assert!(target.is_dragging_over);
    assert!(target.should_animate_placeholder);

    let origin = selector.select(&drop_animating("A", DragImpact::reorder("B", 0)), &region("A"));
    assert!(!origin.is_dragging_over);
    assert_eq!(origin.dragging_from_this_with, Some(ITEM));
}

#[test]
fn settled_non_origin_is_idle() {
    let mut selector = DropTargetSelector::new();
    let props = selector.select(&settled("A", DragImpact::reorder("B", 0)), &region("B"));
    assert_eq!(*props, ViewProps::IDLE_WITH_ANIMATION);
}

#[test]
fn settled_origin_follows_collapse_decision() {
    let cases = [
        (DragImpact::combine("other", "A"), true),
        (DragImpact::reorder("B", 0), true),
        (DragImpact::combine("other", "B"), true),
        (DragImpact::reorder("A", 2), false),
        (DragImpact::none(), false),
    ];

    for (impact, collapse) in cases {
        let completed = CompletedDrag {
            critical: critical("A"),
            impact: impact.clone(),
        };
        assert_eq!(should_collapse_origin_after_drop(&"A", &completed), collapse);

        let mut selector = DropTargetSelector::new();
        let props = selector.select(&settled("A", impact), &region("A"));
        let expected = if collapse {
            ViewProps::IDLE_WITH_ANIMATION
        } else {
            ViewProps::IDLE_WITHOUT_ANIMATION
        };
        assert_eq!(*props, expected);
    }
}

#[test]
fn settled_other_type_is_idle() {
    let mut selector = DropTargetSelector::new();
    let props = selector.select(
        &settled("A", DragImpact::reorder("A", 0)),
        &RegionIdentity::new("A", "other"),
    );
    assert_eq!(*props, ViewProps::IDLE_WITH_ANIMATION);
}

#[test]
fn drop_back_into_origin_end_to_end() {
    let mut selector = DropTargetSelector::new();
    let origin = region("A");

    let live = selector.select(&dragging("A", DragImpact::reorder("A", 0)), &origin);
    assert!(live.is_dragging_over);
    assert_eq!(live.dragging_from_this_with, Some(ITEM));
    assert!(!live.should_animate_placeholder);

    let animating = selector.select(&drop_animating("A", DragImpact::reorder("A", 0)), &origin);
    assert!(Rc::ptr_eq(&live, &animating));

    let done = selector.select(&settled("A", DragImpact::reorder("A", 0)), &origin);
    assert_eq!(*done, ViewProps::IDLE_WITHOUT_ANIMATION);
    assert_ne!(*done, ViewProps::IDLE_WITH_ANIMATION);
}

#[test]
fn drop_pending_derives_like_dragging() {
    let mut selector = DropTargetSelector::new();
    let pending = SessionState::DropPending {
        critical: critical("A"),
        dimensions: catalog("A"),
        impact: DragImpact::reorder("A", 0),
    };
    let live = selector.select(&dragging("A", DragImpact::reorder("A", 0)), &region("A"));
    let held = selector.select(&pending, &region("A"));
    assert!(Rc::ptr_eq(&live, &held));
}
