//! 2D vector helpers on top of `glam::DVec2`.
//!
//! glam already covers add/sub/scale/length/dot through operators and
//! methods. The helpers here pin down the degenerate-input policy the aim
//! math relies on: a zero-length vector normalizes to itself, and cosines
//! are clamped before `acos`.

use glam::DVec2;

/// A point or direction in table-local space.
pub type Point = DVec2;

/// `a + b`.
#[inline]
pub fn add(a: Point, b: Point) -> Point {
    a + b
}

/// `a - b`.
#[inline]
pub fn subtract(a: Point, b: Point) -> Point {
    a - b
}

/// `v * k`.
#[inline]
pub fn scale(v: Point, k: f64) -> Point {
    v * k
}

#[inline]
pub fn length(v: Point) -> f64 {
    v.length()
}

#[inline]
pub fn dot(a: Point, b: Point) -> f64 {
    a.dot(b)
}

/// Unit vector in the direction of `v`.
/// A zero-length input is divided by 1 instead of 0, so it comes back unchanged.
pub fn normalize(v: Point) -> Point {
    let len = v.length();
    let len = if len == 0.0 { 1.0 } else { len };
    v / len
}

/// Unsigned angle between `a` and `b` in radians, in `[0, PI]`.
pub fn angle_between(a: Point, b: Point) -> f64 {
    let cos = dot(normalize(a), normalize(b)).clamp(-1.0, 1.0);
    cos.acos()
}

/// Reflect `v` across the line whose normal is `n` (normalized internally).
pub fn reflect(v: Point, n: Point) -> Point {
    let n = normalize(n);
    v - n * (2.0 * dot(v, n))
}
