//! Drag Workflow Integration Tests

use crate::helpers::{
    TestSessionBuilder, describe, drag, position_of, record_events, selected_count,
};
use codingnode::events::CanvasEvent;
use codingnode::geometry::{Point, Size};
use codingnode::types::GestureTarget;

#[test]
fn test_drag_is_clamped_to_viewport() {
    let (mut session, ids) = TestSessionBuilder::new()
        .with_viewport(400.0, 300.0)
        .with_node("a", (200.0, 150.0))
        .build();

    drag(&mut session, ids[0], &[(500.0, 0.0)]);

    assert_eq!(position_of(&session, ids[0]), Point::new(325.0, 150.0));
}

#[test]
fn test_drag_without_viewport_is_unclamped() {
    let (mut session, ids) = TestSessionBuilder::new()
        .with_node("a", (200.0, 150.0))
        .build();

    drag(&mut session, ids[0], &[(5000.0, -500.0)]);

    assert_eq!(position_of(&session, ids[0]), Point::new(5200.0, -350.0));
}

#[test]
fn test_drag_state_while_overlapping() {
    let (mut session, ids) = TestSessionBuilder::new()
        .with_viewport(400.0, 300.0)
        .with_node("a", (200.0, 150.0))
        .with_node("b", (100.0, 100.0))
        .build();
    let a = ids[0];

    session.on_gesture_start(a, Point::new(200.0, 150.0), GestureTarget::Body);
    session.on_gesture_move(a, Point::new(-80.0, -40.0));

    insta::assert_snapshot!(describe(&session), @r"
    a @ (120, 110) 150x75 [selected, overlapping]
    b @ (100, 100) 150x75 []
    ");
    // committed state is untouched mid-drag
    assert_eq!(position_of(&session, a), Point::new(200.0, 150.0));

    session.on_gesture_end(a);

    insta::assert_snapshot!(describe(&session), @r"
    a @ (120, 110) 150x75 [selected]
    b @ (100, 100) 150x75 []
    ");
}

#[test]
fn test_overlap_never_blocks_commit() {
    let build = || {
        TestSessionBuilder::new()
            .with_viewport(800.0, 600.0)
            .with_node("a", (200.0, 200.0))
            .with_node("b", (400.0, 200.0))
            .build()
    };
    let (mut crowded, crowded_ids) = build();
    let (mut alone, alone_ids) = build();
    alone.remove_node(alone_ids[1]);

    let moves = [(100.0, 0.0), (190.0, 5.0)];
    let a = crowded_ids[0];
    crowded.on_gesture_start(a, Point::new(200.0, 200.0), GestureTarget::Body);
    for m in moves {
        crowded.on_gesture_move(a, Point::from(m));
    }
    assert!(crowded.node(a).is_some_and(|c| c.is_overlapping()));
    crowded.on_gesture_end(a);

    drag(&mut alone, alone_ids[0], &moves);

    assert_eq!(position_of(&crowded, a), Point::new(390.0, 205.0));
    assert_eq!(position_of(&crowded, a), position_of(&alone, alone_ids[0]));
    assert!(!crowded.node(a).is_some_and(|c| c.is_overlapping()));
}

#[test]
fn test_drag_start_selects_once() {
    let (mut session, ids) = TestSessionBuilder::new()
        .with_viewport(800.0, 600.0)
        .with_node("a", (200.0, 200.0))
        .with_node("b", (500.0, 400.0))
        .build();
    session.select_node(ids[1]);
    let events = record_events(&session);

    drag(&mut session, ids[0], &[(1.0, 0.0), (2.0, 0.0), (3.0, 1.0)]);

    let selection_changes = events
        .lock()
        .iter()
        .filter(|e| matches!(e, CanvasEvent::SelectionChanged { .. }))
        .count();
    assert_eq!(selection_changes, 1);
    assert_eq!(session.selected(), Some(ids[0]));
    assert_eq!(selected_count(&session), 1);
}

#[test]
fn test_press_without_movement_does_not_select() {
    let (mut session, ids) = TestSessionBuilder::new()
        .with_viewport(800.0, 600.0)
        .with_node("a", (200.0, 200.0))
        .build();

    drag(&mut session, ids[0], &[]);

    assert_eq!(session.selected(), None);
    assert_eq!(position_of(&session, ids[0]), Point::new(200.0, 200.0));
}

#[test]
fn test_drag_threshold_defers_start() {
    let (mut session, ids) = TestSessionBuilder::new()
        .with_viewport(800.0, 600.0)
        .with_drag_threshold(10.0)
        .with_node("a", (200.0, 200.0))
        .build();
    let a = ids[0];

    session.on_gesture_start(a, Point::new(200.0, 200.0), GestureTarget::Body);
    session.on_gesture_move(a, Point::new(3.0, 4.0));
    assert!(session.gesture_state(a).is_pending());
    assert_eq!(session.selected(), None);
    assert_eq!(session.node(a).map(|c| c.drag_offset()), Some(Point::ZERO));

    session.on_gesture_move(a, Point::new(6.0, 8.0));
    assert!(session.gesture_state(a).is_dragging());
    assert_eq!(session.selected(), Some(a));

    session.on_gesture_end(a);
    assert_eq!(position_of(&session, a), Point::new(206.0, 208.0));
}

#[test]
fn test_samples_apply_in_order() {
    let (mut session, ids) = TestSessionBuilder::new()
        .with_viewport(400.0, 300.0)
        .with_node("a", (200.0, 150.0))
        .build();

    // the last sample wins, even after passing through a clamped region
    drag(&mut session, ids[0], &[(500.0, 0.0), (-20.0, 10.0)]);

    assert_eq!(position_of(&session, ids[0]), Point::new(180.0, 160.0));
}

#[test]
fn test_commit_emits_single_consistent_event() {
    let (mut session, ids) = TestSessionBuilder::new()
        .with_viewport(800.0, 600.0)
        .with_node("a", (200.0, 200.0))
        .with_node("b", (230.0, 200.0))
        .build();
    let a = ids[0];

    session.on_gesture_start(a, Point::new(200.0, 200.0), GestureTarget::Body);
    session.on_gesture_move(a, Point::new(10.0, 10.0));
    let events = record_events(&session);
    session.on_gesture_end(a);

    let events = events.lock();
    assert_eq!(events.len(), 1);
    let CanvasEvent::NodeChanged(snapshot) = &events[0] else {
        panic!("expected NodeChanged, got {:?}", events[0]);
    };
    assert_eq!(snapshot.position, Point::new(210.0, 210.0));
    assert!(!snapshot.is_overlapping);
}

#[test]
fn test_overlap_reads_committed_state_of_others() {
    let (mut session, ids) = TestSessionBuilder::new()
        .with_viewport(1000.0, 1000.0)
        .with_node("a", (100.0, 100.0))
        .with_node("b", (400.0, 400.0))
        .build();
    let (a, b) = (ids[0], ids[1]);

    session.on_gesture_start(a, Point::new(100.0, 100.0), GestureTarget::Body);
    session.on_gesture_start(b, Point::new(400.0, 400.0), GestureTarget::Body);

    // b is shown on top of a's committed rectangle
    session.on_gesture_move(b, Point::new(-290.0, -290.0));
    assert!(session.node(b).is_some_and(|c| c.is_overlapping()));

    // a moves onto b's committed spot, away from b's in-flight position
    session.on_gesture_move(a, Point::new(300.0, 300.0));
    assert!(session.node(a).is_some_and(|c| c.is_overlapping()));

    session.on_gesture_cancel(b);
    session.on_gesture_end(a);
    assert_eq!(position_of(&session, a), Point::new(400.0, 400.0));
    assert_eq!(position_of(&session, b), Point::new(400.0, 400.0));
}

#[test]
fn test_malformed_sequences_are_ignored() {
    let (mut session, ids) = TestSessionBuilder::new()
        .with_viewport(800.0, 600.0)
        .with_node("a", (200.0, 200.0))
        .build();
    let a = ids[0];

    session.on_gesture_end(a);
    session.on_gesture_move(a, Point::new(50.0, 50.0));
    session.on_gesture_cancel(a);
    assert_eq!(position_of(&session, a), Point::new(200.0, 200.0));

    // a second start while dragging does not reset the gesture
    session.on_gesture_start(a, Point::new(200.0, 200.0), GestureTarget::Body);
    session.on_gesture_move(a, Point::new(10.0, 0.0));
    session.on_gesture_start(a, Point::new(0.0, 0.0), GestureTarget::ResizeHandle);
    assert!(session.gesture_state(a).is_dragging());
    session.on_gesture_end(a);
    session.on_gesture_end(a);

    assert_eq!(position_of(&session, a), Point::new(210.0, 200.0));
}

#[test]
fn test_removing_node_mid_drag() {
    let (mut session, ids) = TestSessionBuilder::new()
        .with_viewport(800.0, 600.0)
        .with_node("a", (200.0, 200.0))
        .with_node("b", (500.0, 400.0))
        .build();
    let a = ids[0];

    session.on_gesture_start(a, Point::new(200.0, 200.0), GestureTarget::Body);
    session.on_gesture_move(a, Point::new(10.0, 0.0));
    assert!(session.remove_node(a).is_some());

    session.on_gesture_move(a, Point::new(20.0, 0.0));
    session.on_gesture_end(a);
    assert_eq!(session.len(), 1);
    assert_eq!(session.selected(), None);
    assert!(session.gesture_state(a).is_idle());
}

#[test]
fn test_viewport_shrink_applies_to_next_sample() {
    let (mut session, ids) = TestSessionBuilder::new()
        .with_viewport(800.0, 600.0)
        .with_node("a", (200.0, 150.0))
        .build();
    let a = ids[0];

    session.on_gesture_start(a, Point::new(200.0, 150.0), GestureTarget::Body);
    session.on_gesture_move(a, Point::new(300.0, 0.0));
    session.set_visible_size(Size::new(400.0, 300.0));
    session.on_gesture_move(a, Point::new(300.0, 0.0));
    session.on_gesture_end(a);

    assert_eq!(position_of(&session, a), Point::new(325.0, 150.0));
}

#[test]
fn test_pointer_down_routes_to_topmost_node() {
    let (mut session, ids) = TestSessionBuilder::new()
        .with_viewport(800.0, 600.0)
        .with_node("a", (200.0, 200.0))
        .with_node("b", (220.0, 200.0))
        .build();

    assert_eq!(
        session.hit_test(Point::new(210.0, 200.0)),
        Some((ids[1], GestureTarget::Body))
    );
    // only a covers x = 130
    assert_eq!(
        session.hit_test(Point::new(130.0, 200.0)),
        Some((ids[0], GestureTarget::Body))
    );
    // b's bottom-right corner: right = 295, bottom = 237.5
    assert_eq!(
        session.hit_test(Point::new(290.0, 230.0)),
        Some((ids[1], GestureTarget::ResizeHandle))
    );

    assert_eq!(session.pointer_down(Point::new(210.0, 200.0)), Some(ids[1]));
    assert!(session.gesture_state(ids[1]).is_pending());
}

#[test]
fn test_pointer_down_on_empty_canvas_deselects() {
    let (mut session, ids) = TestSessionBuilder::new()
        .with_viewport(800.0, 600.0)
        .with_node("a", (200.0, 200.0))
        .build();
    session.select_node(ids[0]);

    assert_eq!(session.pointer_down(Point::new(700.0, 500.0)), None);
    assert_eq!(session.selected(), None);
    assert_eq!(selected_count(&session), 0);
}

#[test]
fn test_non_finite_viewport_disables_clamping() {
    let (mut session, ids) = TestSessionBuilder::new()
        .with_node("a", (200.0, 150.0))
        .build();
    session.set_visible_size(Size::new(f32::NAN, 300.0));

    drag(&mut session, ids[0], &[(500.0, 0.0)]);

    assert_eq!(position_of(&session, ids[0]), Point::new(700.0, 150.0));
}

#[test]
fn test_non_finite_samples_never_reach_committed_state() {
    let mut builder = TestSessionBuilder::new();
    for i in 0..40 {
        let (col, row) = ((i % 8) as f32, (i / 8) as f32);
        builder = builder.with_node(&format!("n{i}"), (col * 200.0 + 100.0, row * 100.0 + 100.0));
    }
    let (mut session, ids) = builder.build();

    drag(&mut session, ids[0], &[(f32::NAN, 0.0)]);
    assert_eq!(position_of(&session, ids[0]), Point::new(100.0, 100.0));

    drag(&mut session, ids[1], &[(10.0, 0.0), (f32::INFINITY, 0.0)]);
    assert_eq!(position_of(&session, ids[1]), Point::new(310.0, 100.0));

    // later gestures on other nodes still query the index safely
    drag(&mut session, ids[5], &[(5.0, 0.0)]);
    assert_eq!(position_of(&session, ids[5]), Point::new(1105.0, 100.0));
    assert_eq!(session.hit_test(Point::new(1105.0, 100.0)).map(|(id, _)| id), Some(ids[5]));
}
