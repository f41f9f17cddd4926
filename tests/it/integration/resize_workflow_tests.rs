//! Resize Workflow Integration Tests

use crate::helpers::{TestSessionBuilder, position_of, resize, size_of};
use codingnode::geometry::{Point, Size};
use codingnode::types::GestureTarget;

const MIN: Size = Size::new(150.0, 75.0);

#[test]
fn test_resize_grows_from_start_size() {
    let (mut session, ids) = TestSessionBuilder::new()
        .with_viewport(800.0, 600.0)
        .with_node("a", (200.0, 200.0))
        .build();

    resize(&mut session, ids[0], &[(20.0, 10.0), (100.0, 50.0)]);

    assert_eq!(size_of(&session, ids[0]), Size::new(250.0, 125.0));
    // resizing does not move or select the node
    assert_eq!(position_of(&session, ids[0]), Point::new(200.0, 200.0));
    assert_eq!(session.selected(), None);
}

#[test]
fn test_resize_floor_applies_live() {
    let (mut session, ids) = TestSessionBuilder::new()
        .with_sized_node("a", (300.0, 300.0), (200.0, 100.0))
        .build();
    let a = ids[0];

    session.on_gesture_start(a, Point::new(400.0, 350.0), GestureTarget::ResizeHandle);
    session.on_gesture_move(a, Point::new(-500.0, -10.0));

    let controller = session.node(a).expect("node should be on canvas");
    assert!(controller.is_resizing());
    assert_eq!(controller.displayed_size(), Size::new(150.0, 90.0));
    assert_eq!(controller.size(), Size::new(200.0, 100.0));

    session.on_gesture_end(a);
    assert_eq!(size_of(&session, a), Size::new(150.0, 90.0));
    assert!(session.node(a).is_some_and(|c| !c.is_resizing()));
}

#[test]
fn test_committed_size_never_below_minimum() {
    let sequences: [&[(f32, f32)]; 5] = [
        &[(-1000.0, -1000.0)],
        &[(10.0, 10.0), (-200.0, 5.0), (-151.0, -76.0)],
        &[(0.0, -80.0), (-0.5, -75.5)],
        &[(300.0, 300.0), (-300.0, -300.0), (-1.0, -1.0)],
        &[(f32::MIN, 0.0)],
    ];

    for deltas in sequences {
        let (mut session, ids) = TestSessionBuilder::new()
            .with_node("a", (400.0, 400.0))
            .build();
        let a = ids[0];

        session.on_gesture_start(a, Point::new(475.0, 437.5), GestureTarget::ResizeHandle);
        for &(dx, dy) in deltas {
            session.on_gesture_move(a, Point::new(dx, dy));
            let shown = session.node(a).map(|c| c.displayed_size()).unwrap_or_default();
            assert!(shown.width >= MIN.width && shown.height >= MIN.height, "{deltas:?}");
        }
        session.on_gesture_end(a);

        let size = size_of(&session, a);
        assert!(size.width >= MIN.width && size.height >= MIN.height, "{deltas:?}");
    }
}

#[test]
fn test_resize_cancel_restores_size() {
    let (mut session, ids) = TestSessionBuilder::new()
        .with_node("a", (400.0, 400.0))
        .build();
    let a = ids[0];

    session.on_gesture_start(a, Point::new(475.0, 437.5), GestureTarget::ResizeHandle);
    session.on_gesture_move(a, Point::new(120.0, 60.0));
    assert_eq!(
        session.node(a).map(|c| c.displayed_size()),
        Some(Size::new(270.0, 135.0))
    );

    session.on_gesture_cancel(a);
    assert_eq!(size_of(&session, a), MIN);
    let controller = session.node(a).expect("node should be on canvas");
    assert_eq!(controller.displayed_size(), MIN);
    assert!(!controller.is_resizing());
}

#[test]
fn test_request_resize_through_session() {
    let (mut session, ids) = TestSessionBuilder::new()
        .with_node("a", (400.0, 400.0))
        .build();

    let applied = session
        .node_mut(ids[0])
        .map(|c| c.request_resize(Size::new(0.0, 500.0)));

    assert_eq!(applied, Some(Size::new(150.0, 500.0)));
    // the hit test sees the new committed size
    assert!(session.hit_test(Point::new(400.0, 640.0)).is_some());
}

#[test]
fn test_handle_press_starts_resize() {
    let (mut session, ids) = TestSessionBuilder::new()
        .with_viewport(800.0, 600.0)
        .with_node("a", (200.0, 200.0))
        .build();
    let a = ids[0];

    // bottom-right corner of a is (275, 237.5)
    assert_eq!(session.pointer_down(Point::new(270.0, 235.0)), Some(a));
    session.on_gesture_move(a, Point::new(30.0, 15.0));
    assert!(session.gesture_state(a).is_resizing());
    session.on_gesture_end(a);

    assert_eq!(size_of(&session, a), Size::new(180.0, 90.0));
    assert_eq!(position_of(&session, a), Point::new(200.0, 200.0));
}

#[test]
fn test_non_finite_resize_sample_is_ignored() {
    let (mut session, ids) = TestSessionBuilder::new()
        .with_node("a", (400.0, 400.0))
        .build();

    resize(&mut session, ids[0], &[(50.0, 25.0), (f32::NAN, f32::INFINITY)]);

    assert_eq!(size_of(&session, ids[0]), Size::new(200.0, 100.0));
}
