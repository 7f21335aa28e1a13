use crate::SwipeAction;

/// Horizontal distance the visible card must travel past, in either
/// direction, for a release to commit a decision. Exclusive boundary:
/// a release at exactly the threshold springs back.
pub const SWIPE_THRESHOLD: f32 = 120.0;

/// Classifies the final horizontal offset of a drag release.
///
/// Pure step function; each release is evaluated independently and no state
/// is kept between gestures. `None` means the card springs back and the
/// queue is untouched.
pub fn classify_release(offset_x: f32) -> Option<SwipeAction> {
    if offset_x > SWIPE_THRESHOLD {
        Some(SwipeAction::Apply)
    } else if offset_x < -SWIPE_THRESHOLD {
        Some(SwipeAction::Skip)
    } else {
        None
    }
}
