use super::*;

#[test]
fn default_spec_slides_up_without_delay() {
    let spec = RevealSpec::default();
    assert_eq!(spec.direction, Direction::Up);
    assert_eq!(spec.duration_ms, REVEAL_DURATION_MS);
    assert_eq!(spec.delay_ms, 0);
}

#[test]
fn hidden_class_omits_visible_marker() {
    let spec = RevealSpec::new(Direction::Left);
    assert_eq!(spec.class(false), "reveal reveal-left");
    assert_eq!(spec.class(true), "reveal reveal-left is-visible");
}

#[test]
fn style_carries_duration_and_delay() {
    let spec = RevealSpec::new(Direction::Right).duration(600).delay(200);
    assert_eq!(spec.style(), "transition-duration: 600ms; transition-delay: 200ms;");
}

#[test]
fn stagger_steps_by_index() {
    assert_eq!(stagger(200, 100, 0), 200);
    assert_eq!(stagger(200, 100, 3), 500);
}

#[test]
fn stagger_saturates() {
    assert_eq!(stagger(1, u32::MAX, 2), u32::MAX);
    assert_eq!(stagger(0, 1, usize::MAX), u32::MAX);
}

#[test]
fn direction_classes_are_distinct() {
    let classes = [Direction::Up.class(), Direction::Left.class(), Direction::Right.class()];
    assert_ne!(classes[0], classes[1]);
    assert_ne!(classes[1], classes[2]);
}
