//! Collision detection and response for moving rectangles
//!
//! The tricky part of Burger Bash: predicting when two drifting bears are
//! about to overlap, then bouncing them apart before they visibly do.

use glam::Vec2;

use super::rect::Rect;

/// A moving rectangular body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub rect: Rect,
    /// Pixels per second
    pub velocity: Vec2,
}

impl Body {
    pub fn new(rect: Rect, velocity: Vec2) -> Self {
        Self { rect, velocity }
    }

    /// Rectangle after moving for `time` seconds
    #[inline]
    fn advanced(&self, time: f32) -> Rect {
        self.rect.translated(self.velocity * time)
    }
}

/// Outcome of a predicted collision between two bodies
///
/// A body flagged out of bounds is returned untouched; the caller is expected
/// to retire it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResolution {
    pub first: Body,
    pub first_out_of_bounds: bool,
    pub second: Body,
    pub second_out_of_bounds: bool,
}

/// Check two bodies for a collision within the next `lookahead` seconds
///
/// Each body is advanced by its own velocity. A collision is reported when the
/// advanced rectangles overlap or when a moving body would leave the
/// `bounds_width` x `bounds_height` arena. Overlaps between two in-bounds
/// bodies are resolved by exchanging their velocity components along the axis
/// they approached on, then stepping each body one lookahead along its new
/// velocity from where it started.
///
/// Returns `None` when nothing happens, which is the common case.
pub fn check_collision(
    lookahead: f32,
    bounds_width: f32,
    bounds_height: f32,
    first: Body,
    second: Body,
) -> Option<CollisionResolution> {
    if first.rect.is_empty() || second.rect.is_empty() {
        return None;
    }

    let arena = Rect::new(0.0, 0.0, bounds_width, bounds_height);
    let first_next = first.advanced(lookahead);
    let second_next = second.advanced(lookahead);

    let first_out_of_bounds = first.velocity != Vec2::ZERO && !arena.contains(&first_next);
    let second_out_of_bounds = second.velocity != Vec2::ZERO && !arena.contains(&second_next);
    let overlapping = first_next.intersects(&second_next);

    if !overlapping && !first_out_of_bounds && !second_out_of_bounds {
        return None;
    }

    let mut resolution = CollisionResolution {
        first,
        first_out_of_bounds,
        second,
        second_out_of_bounds,
    };

    if overlapping && !first_out_of_bounds && !second_out_of_bounds {
        let (first_vel, second_vel) = exchange_velocities(&first, &second, lookahead);
        resolution.first = Body::new(first.rect.translated(first_vel * lookahead), first_vel);
        resolution.second = Body::new(second.rect.translated(second_vel * lookahead), second_vel);
    }

    Some(resolution)
}

/// True if `candidate` overlaps none of `existing`
pub fn is_collision_free<'a>(
    candidate: &Rect,
    existing: impl IntoIterator<Item = &'a Rect>,
) -> bool {
    existing.into_iter().all(|rect| !candidate.intersects(rect))
}

/// Axis along which two overlapping rectangles are separated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// Axis two bodies run into each other on
///
/// If the bodies are apart now, that is the axis they are still separated on;
/// keeping them apart on it is enough to keep them apart. A corner approach
/// (apart on both) or an existing overlap falls back to least penetration.
fn resolution_axis(first: &Body, second: &Body, lookahead: f32) -> Axis {
    let before = first.rect.overlap(&second.rect);
    match (before.x <= 0.0, before.y <= 0.0) {
        (true, false) => Axis::X,
        (false, true) => Axis::Y,
        _ => {
            let after = first.advanced(lookahead).overlap(&second.advanced(lookahead));
            if after.x < after.y { Axis::X } else { Axis::Y }
        }
    }
}

/// Equal-mass 1D elastic bounce along the approach axis
fn exchange_velocities(first: &Body, second: &Body, lookahead: f32) -> (Vec2, Vec2) {
    let offset = first.rect.center() - second.rect.center();
    let (mut a, mut b) = (first.velocity, second.velocity);
    match resolution_axis(first, second, lookahead) {
        Axis::X => exchange_component(&mut a.x, &mut b.x, offset.x),
        Axis::Y => exchange_component(&mut a.y, &mut b.y, offset.y),
    }
    (a, b)
}

/// Swap one velocity component; if the bodies still close in, point each away
/// from the other. `offset` is first-center minus second-center on that axis.
fn exchange_component(a: &mut f32, b: &mut f32, offset: f32) {
    std::mem::swap(a, b);
    if offset == 0.0 {
        return;
    }
    let closing = (*a - *b) * offset < 0.0;
    if closing {
        *a = a.abs().copysign(offset);
        *b = b.abs().copysign(-offset);
    }
}
