use deck_core::{classify_release, SwipeAction, SWIPE_THRESHOLD};

#[test]
fn threshold_is_exact() {
    assert_eq!(SWIPE_THRESHOLD, 120.0);
}

#[test]
fn release_past_right_threshold_is_apply() {
    assert_eq!(classify_release(121.0), Some(SwipeAction::Apply));
    assert_eq!(classify_release(150.0), Some(SwipeAction::Apply));
    assert_eq!(classify_release(1_000.0), Some(SwipeAction::Apply));
}

#[test]
fn release_past_left_threshold_is_skip() {
    assert_eq!(classify_release(-121.0), Some(SwipeAction::Skip));
    assert_eq!(classify_release(-300.0), Some(SwipeAction::Skip));
}

#[test]
fn boundary_is_exclusive() {
    assert_eq!(classify_release(120.0), None);
    assert_eq!(classify_release(-120.0), None);
}

#[test]
fn releases_inside_the_band_spring_back() {
    assert_eq!(classify_release(0.0), None);
    assert_eq!(classify_release(42.0), None);
    assert_eq!(classify_release(-119.9), None);
}

#[test]
fn classification_is_deterministic() {
    for _ in 0..3 {
        assert_eq!(classify_release(121.0), Some(SwipeAction::Apply));
        assert_eq!(classify_release(119.0), None);
    }
}
