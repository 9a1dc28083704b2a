use egui::{Color32, Vec2};
use instant::Instant;

use crate::easing::Easing;

/// Linear interpolation between two values of the same kind.
///
/// `t` may leave `[0, 1]` when the driving easing curve overshoots;
/// implementations must extrapolate (or clamp where the value type cannot
/// represent the overshoot, as [`Color32`] does).
pub trait Lerp: Copy + PartialEq {
    fn lerp(from: Self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Lerp for Color32 {
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        let from = from.to_array();
        let to = to.to_array();
        let channel = |i: usize| {
            let a = f32::from(from[i]);
            let b = f32::from(to[i]);
            (a + (b - a) * t).round().clamp(0., 255.) as u8
        };
        Self::from_rgba_premultiplied(channel(0), channel(1), channel(2), channel(3))
    }
}

/// A retargetable, time-based interpolation of a single visual property.
///
/// A new target supersedes a running animation, taking the current
/// interpolated value as the new starting point. There is no other
/// cancellation; a tween with an elapsed duration simply reports its target.
#[derive(Clone, Debug)]
pub struct Tween<V: Lerp> {
    from: V,
    to: V,
    started: Instant,
    duration: f32,
    easing: Easing,
}

impl<V: Lerp> Tween<V> {
    /// A tween already settled at `value`.
    pub fn settled(value: V) -> Self {
        Self {
            from: value,
            to: value,
            started: Instant::now(),
            duration: 0.,
            easing: Easing::Linear,
        }
    }

    pub fn target(&self) -> V {
        self.to
    }

    /// Starts animating towards `to` from the current value.
    ///
    /// Retargeting to the target already in place is a no-op, so calling this
    /// every frame with an unchanged target does not restart the animation.
    pub fn retarget(&mut self, now: Instant, to: V, duration: f32, easing: Easing) {
        if to == self.to {
            return;
        }
        self.from = self.value(now);
        self.to = to;
        self.started = now;
        self.duration = duration;
        self.easing = easing;
    }

    /// The interpolated value at `now`. Exactly the target once the duration
    /// has elapsed.
    pub fn value(&self, now: Instant) -> V {
        if self.duration <= 0. {
            return self.to;
        }
        let elapsed = now.duration_since(self.started).as_secs_f32();
        let t = elapsed / self.duration;
        if t >= 1. {
            return self.to;
        }
        V::lerp(self.from, self.to, self.easing.apply(t))
    }

    /// Whether the animation has reached its target.
    pub fn is_settled(&self, now: Instant) -> bool {
        self.duration <= 0.
            || now.duration_since(self.started).as_secs_f32() >= self.duration
    }
}
