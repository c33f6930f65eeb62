use padcontrol::pad::{
    Axis, Direction, DirectionSet, PadControl, PadScene, PadValues, PlaneAnimator, Point, Size,
    TouchId, TouchKind,
};
use std::time::{Duration, Instant};

fn laid_out(directions: DirectionSet, width: f64, height: f64) -> PadControl {
    let mut pad = PadControl::new(directions);
    pad.set_bounds(Size::new(width, height)).expect("bounds");
    pad
}

#[test]
fn host_polls_values_after_each_notification() {
    let mut pad = laid_out(DirectionSet::ALL, 200.0, 200.0);
    let finger = TouchId(42);
    let mut seen = Vec::new();

    let path = [
        Point::new(100.0, 100.0),
        Point::new(150.0, 100.0),
        Point::new(200.0, 0.0),
        Point::new(260.0, -40.0),
    ];

    let began = pad.touch_begin(finger, path[0]).expect("began");
    seen.push(began.kind);
    assert_eq!(pad.values(), PadValues::default());

    for point in &path[1..] {
        let moved = pad.touch_move(finger, *point).expect("moved");
        seen.push(moved.kind);
        assert_eq!(moved.values, pad.values());
    }

    // Clamped to the top-right corner
    assert_eq!(pad.touch_point(), Some(Point::new(200.0, 0.0)));
    assert_eq!(pad.value_for_direction(Direction::Right), 1.0);
    assert_eq!(pad.value_for_direction(Direction::Up), 1.0);
    assert_eq!(pad.value_for_axis(Axis::X), 1.0);

    let ended = pad.touch_end(finger).expect("ended");
    seen.push(ended.kind);

    assert_eq!(
        seen,
        vec![TouchKind::Began, TouchKind::Moved, TouchKind::Moved, TouchKind::Moved, TouchKind::Ended]
    );
    assert!(!pad.is_selected());
    assert_eq!(pad.touch_point(), None);
    assert_eq!(pad.values(), PadValues::default());
}

#[test]
fn second_finger_waits_for_the_first_to_lift() {
    let mut pad = laid_out(DirectionSet::HORIZONTAL, 100.0, 40.0);

    pad.touch_begin(TouchId(1), Point::new(10.0, 20.0)).expect("first");
    assert!(pad.touch_begin(TouchId(2), Point::new(90.0, 20.0)).is_none());
    assert_eq!(pad.value_for_direction(Direction::Left), 0.8);

    pad.touch_end(TouchId(1)).expect("first ends");
    let second = pad.touch_begin(TouchId(2), Point::new(90.0, 20.0)).expect("second");
    assert_eq!(second.values.right, 0.8);
    assert_eq!(second.values.left, 0.0);
}

#[test]
fn planes_return_to_rest_after_release() {
    let mut pad = PadControl::with_planes(DirectionSet::RIGHT, 4).expect("pad");
    pad.set_bounds(Size::new(300.0, 60.0)).expect("bounds");
    let start = Instant::now();

    let mut animator = PlaneAnimator::new(PadScene::build(&pad));
    let began = pad.touch_begin(TouchId::POINTER, Point::new(150.0, 30.0)).expect("began");
    animator.apply(&began, &pad, start);

    let top = animator.sample(start).planes[3].rect;
    assert_eq!(top.size.width, 150.0);
    assert_eq!(top.size.height, 60.0);

    let ended = pad.touch_end(TouchId::POINTER).expect("ended");
    animator.apply(&ended, &pad, start);

    let settled = animator.sample(start + Duration::from_secs(1));
    assert_eq!(settled, PadScene::build(&pad));
    assert_eq!(settled.planes[3].rect, pad.peak_rect());
    assert_eq!(settled.planes[3].rect.origin.x, 300.0 - 75.0);
}
