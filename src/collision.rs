//! Axis-aligned box tests and edge reflection.

use crate::entities::{Entity, Rect, Sweep};

/// Strict overlap: boxes that only touch along an edge do not collide, and
/// a zero-size box never collides with anything.
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    let non_empty = a.w > 0.0 && a.h > 0.0 && b.w > 0.0 && b.h > 0.0;
    non_empty && a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

/// Advance `pos` one frame along `sweep`, staying inside `[0, limit - len]`.
///
/// When the move lands on either edge the direction is pointed back into
/// the range, so the very next frame moves away from that edge. An object
/// longer than `limit` is pinned at 0.
pub fn sweep_axis(pos: f32, len: f32, limit: f32, sweep: Sweep) -> (f32, Sweep) {
    let max = (limit - len).max(0.0);
    let next = (pos + sweep.speed * sweep.dir).clamp(0.0, max);
    let dir = if next <= 0.0 {
        1.0
    } else if next >= max {
        -1.0
    } else {
        sweep.dir
    };
    (next, Sweep { dir, ..sweep })
}

/// Top edge of the highest platform overlapping `body`, if any.
pub fn landing_top<'a, I>(body: &Rect, entities: I) -> Option<f32>
where
    I: IntoIterator<Item = &'a Entity>,
{
    entities
        .into_iter()
        .filter(|e| e.is_platform() && intersects(body, &e.rect))
        .map(|e| e.rect.y)
        .min_by(|a, b| a.total_cmp(b))
}
