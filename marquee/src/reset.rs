use crate::{Behavior, ScrollDirection};

/// Computes the scroll position that means "just started moving `toward`".
///
/// `current` is the direction the marquee is travelling in right now; `Slide` consults it,
/// `Alternate` and `Scroll` do not.
///
/// - `Alternate`: `Forward` starts at `content_extent - 2 * viewport_extent`, `Backward` at
///   `viewport_extent`.
/// - `Slide`: `Backward` starts at `content_extent` when already moving backward, otherwise at
///   `viewport_extent`; `Forward` starts at `0` when moving backward, otherwise at
///   `content_extent - 2 * viewport_extent`.
/// - `Scroll`: `Backward` starts at `content_extent`, `Forward` at `0`.
pub fn reset_position(
    behavior: Behavior,
    current: ScrollDirection,
    toward: ScrollDirection,
    content_extent: i64,
    viewport_extent: i64,
) -> i64 {
    let far = content_extent.saturating_sub(viewport_extent.saturating_mul(2));
    match (behavior, toward) {
        (Behavior::Alternate, ScrollDirection::Forward) => far,
        (Behavior::Alternate, ScrollDirection::Backward) => viewport_extent,
        (Behavior::Slide, ScrollDirection::Backward) => match current {
            ScrollDirection::Backward => content_extent,
            ScrollDirection::Forward => viewport_extent,
        },
        (Behavior::Slide, ScrollDirection::Forward) => match current {
            ScrollDirection::Backward => 0,
            ScrollDirection::Forward => far,
        },
        (Behavior::Scroll, ScrollDirection::Backward) => content_extent,
        (Behavior::Scroll, ScrollDirection::Forward) => 0,
    }
}
