//! Linear interpolation for opacity and anchored positions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D coordinate or size in canvas units
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Linear interpolation with `t` clamped to `[0, 1]`
#[inline]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    start + (end - start) * t
}

/// Value at `elapsed` seconds into a `duration`-second transition.
///
/// Callers stop sampling once `elapsed >= duration` and snap to the end value
/// themselves; this function only clamps. A zero duration yields `end`.
#[inline]
pub fn interpolate(start: f32, end: f32, elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return end;
    }
    lerp(start, end, elapsed / duration)
}

/// Component-wise [`interpolate`] for positions
#[inline]
pub fn interpolate_vec2(start: Vec2, end: Vec2, elapsed: f32, duration: f32) -> Vec2 {
    Vec2::new(
        interpolate(start.x, end.x, elapsed, duration),
        interpolate(start.y, end.y, elapsed, duration),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(0.0, 1.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 1.0, 1.0), 1.0);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    }

    #[test]
    fn test_lerp_clamps_t() {
        assert_eq!(lerp(0.0, 10.0, -1.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 3.0), 10.0);
    }

    #[test]
    fn test_interpolate_midway() {
        assert_eq!(interpolate(1.0, 0.0, 0.25, 1.0), 0.75);
    }

    #[test]
    fn test_interpolate_zero_duration_is_end() {
        assert_eq!(interpolate(0.0, 1.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn test_interpolate_vec2() {
        let p = interpolate_vec2(Vec2::new(-100.0, 20.0), Vec2::new(100.0, 20.0), 0.5, 1.0);
        assert_eq!(p, Vec2::new(0.0, 20.0));
    }
}
