use egui::{Rect, Vec2};

/// Expanded bounding region around an interactive element, used for
/// proximity tests instead of the exact geometry to ease acquisition.
pub fn hit_zone(rect: Rect, margin: f32) -> Rect {
    rect.expand(margin)
}

/// Target size for a resize drag.
///
/// `grab_size` is the panel size recorded at grab time and `dx` the pointer's
/// horizontal displacement since the grab. The width is clamped to
/// `[min_width, max_width]` and the height derived from the grab-time aspect
/// ratio. `dx` itself is unbounded; only the clamp limits the result.
pub fn resize_target(grab_size: Vec2, dx: f32, min_width: f32, max_width: f32) -> Vec2 {
    let width = (grab_size.x + dx).clamp(min_width, max_width);
    Vec2::new(width, width * grab_size.y / grab_size.x)
}
