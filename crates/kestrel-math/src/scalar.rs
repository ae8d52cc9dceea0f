// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar helpers shared by the vector, matrix and transform types.
//!
//! Trigonometry delegates to the standard library for the chosen precision.
//! The square root is the exception: [`sqrt_f32`] and [`sqrt_f64`] are `const`
//! Newton–Raphson implementations, so the very same algorithm runs whether an
//! expression is folded by the compiler or evaluated at run time, and both
//! paths agree bit-for-bit.
//!
//! Domain contract for the square root:
//! - NaN, negative and infinite inputs yield NaN (no panic, no error).
//! - `±0.0` yields the input unchanged.
//! - `sqrt_f32` is correctly rounded (identical to `f32::sqrt`); `sqrt_f64` is
//!   within one ULP of `f64::sqrt` for normal inputs.

use core::f32::consts::TAU;
use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Upper bound on Newton steps; halving from `f64::MAX` down to its root
/// takes a little over 512, so finite inputs never reach it.
const NEWTON_STEP_LIMIT: u32 = 2048;

/// Veltkamp splitting constant for `f64` (`2^27 + 1`).
const SPLITTER: f64 = 134_217_729.0;

/// Floating-point precision the kernel can be instantiated with.
///
/// Arithmetic comes from the standard operator traits; the transcendental
/// functions forward to the platform implementations, except [`Real::sqrt`],
/// which uses the crate's `const` Newton iteration.
pub trait Real:
    Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Archimedes' constant in this precision.
    const PI: Self;

    /// Positive infinity in this precision.
    const INFINITY: Self;

    /// Sine of `self` (radians).
    fn sin(self) -> Self;

    /// Cosine of `self` (radians).
    fn cos(self) -> Self;

    /// Tangent of `self` (radians).
    fn tan(self) -> Self;

    /// Arcsine of `self`, in radians.
    fn asin(self) -> Self;

    /// Arccosine of `self`, in radians.
    fn acos(self) -> Self;

    /// Arctangent of `self`, in radians.
    fn atan(self) -> Self;

    /// Four-quadrant arctangent of `self / x`.
    fn atan2(self, x: Self) -> Self;

    /// Square root via the `const` Newton iteration.
    fn sqrt(self) -> Self;
}

impl Real for f32 {
    const PI: Self = core::f32::consts::PI;
    const INFINITY: Self = f32::INFINITY;

    fn sin(self) -> Self {
        f32::sin(self)
    }

    fn cos(self) -> Self {
        f32::cos(self)
    }

    fn tan(self) -> Self {
        f32::tan(self)
    }

    fn asin(self) -> Self {
        f32::asin(self)
    }

    fn acos(self) -> Self {
        f32::acos(self)
    }

    fn atan(self) -> Self {
        f32::atan(self)
    }

    fn atan2(self, x: Self) -> Self {
        f32::atan2(self, x)
    }

    fn sqrt(self) -> Self {
        sqrt_f32(self)
    }
}

impl Real for f64 {
    const PI: Self = core::f64::consts::PI;
    const INFINITY: Self = f64::INFINITY;

    fn sin(self) -> Self {
        f64::sin(self)
    }

    fn cos(self) -> Self {
        f64::cos(self)
    }

    fn tan(self) -> Self {
        f64::tan(self)
    }

    fn asin(self) -> Self {
        f64::asin(self)
    }

    fn acos(self) -> Self {
        f64::acos(self)
    }

    fn atan(self) -> Self {
        f64::atan(self)
    }

    fn atan2(self, x: Self) -> Self {
        f64::atan2(self, x)
    }

    fn sqrt(self) -> Self {
        sqrt_f64(self)
    }
}

/// π in the requested precision.
pub fn pi<T: Real>() -> T {
    T::PI
}

/// Positive infinity in the requested precision.
pub fn infinity<T: Real>() -> T {
    T::INFINITY
}

/// Sine of `x` (radians).
pub fn sin<T: Real>(x: T) -> T {
    x.sin()
}

/// Cosine of `x` (radians).
pub fn cos<T: Real>(x: T) -> T {
    x.cos()
}

/// Tangent of `x` (radians).
pub fn tan<T: Real>(x: T) -> T {
    x.tan()
}

/// Arcsine of `x`, in radians.
pub fn asin<T: Real>(x: T) -> T {
    x.asin()
}

/// Arccosine of `x`, in radians.
pub fn acos<T: Real>(x: T) -> T {
    x.acos()
}

/// Arctangent of `x`, in radians.
pub fn atan<T: Real>(x: T) -> T {
    x.atan()
}

/// Four-quadrant arctangent of `y / x`, in radians.
pub fn atan2<T: Real>(y: T, x: T) -> T {
    y.atan2(x)
}

/// Square root of `x`; see [`sqrt_f32`] and [`sqrt_f64`] for the contract.
pub fn sqrt<T: Real>(x: T) -> T {
    x.sqrt()
}

/// Converts degrees to radians with float32 precision.
pub const fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub const fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}

/// Correctly rounded `f32` square root usable in `const` contexts.
///
/// # Examples
/// ```
/// use kestrel_math::scalar::sqrt_f32;
/// const FIVE: f32 = sqrt_f32(25.0);
/// assert_eq!(FIVE, 5.0);
/// assert_eq!(sqrt_f32(std::hint::black_box(25.0)), FIVE);
/// assert!(sqrt_f32(-1.0).is_nan());
/// ```
pub const fn sqrt_f32(x: f32) -> f32 {
    if x.is_nan() || x.is_infinite() || x < 0.0 {
        return f32::NAN;
    }
    if x == 0.0 {
        return x;
    }

    let mut previous = x;
    let mut current = x;
    let mut steps = 0;
    while steps < NEWTON_STEP_LIMIT {
        let next = 0.5 * (current + x / current);
        if next == current {
            break;
        }
        if next == previous {
            // Two-cycle between neighbours: settle on the lower one.
            if next < current {
                current = next;
            }
            break;
        }
        previous = current;
        current = next;
        steps += 1;
    }
    round_to_nearest_f32(x, current)
}

/// `f64` square root usable in `const` contexts, within one ULP of
/// `f64::sqrt` for normal inputs.
pub const fn sqrt_f64(x: f64) -> f64 {
    if x.is_nan() || x.is_infinite() || x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return x;
    }

    let mut previous = x;
    let mut current = x;
    let mut steps = 0;
    while steps < NEWTON_STEP_LIMIT {
        let next = 0.5 * (current + x / current);
        if next == current {
            break;
        }
        if next == previous {
            if next < current {
                current = next;
            }
            break;
        }
        previous = current;
        current = next;
        steps += 1;
    }
    round_to_nearest_f64(x, current)
}

/// Moves `estimate` to the `f32` whose rounding interval contains `√x`.
///
/// Midpoints between adjacent `f32` values carry 25 significant bits, so their
/// squares are exact in `f64` and the comparison against `x` is exact.
#[allow(clippy::cast_lossless)]
const fn round_to_nearest_f32(x: f32, estimate: f32) -> f32 {
    let target = x as f64;
    let mut root = estimate;
    loop {
        let below = root.next_down();
        let midpoint = 0.5 * (root as f64 + below as f64);
        if midpoint * midpoint > target {
            root = below;
        } else {
            break;
        }
    }
    loop {
        let above = root.next_up();
        let midpoint = 0.5 * (root as f64 + above as f64);
        if midpoint * midpoint < target {
            root = above;
        } else {
            break;
        }
    }
    root
}

/// Moves `estimate` to the neighbour with the smallest exact residual `x - r²`.
const fn round_to_nearest_f64(x: f64, estimate: f64) -> f64 {
    let mut root = estimate;
    loop {
        let below = root.next_down();
        if square_residual(x, below).abs() < square_residual(x, root).abs() {
            root = below;
        } else {
            break;
        }
    }
    loop {
        let above = root.next_up();
        if square_residual(x, above).abs() < square_residual(x, root).abs() {
            root = above;
        } else {
            break;
        }
    }
    root
}

/// `x - root²` with `root²` expanded without rounding (Dekker product).
const fn square_residual(x: f64, root: f64) -> f64 {
    let product = root * root;
    let scaled = SPLITTER * root;
    let hi = scaled - (scaled - root);
    let lo = root - hi;
    let error = ((hi * hi - product) + 2.0 * hi * lo) + lo * lo;
    (x - product) - error
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residual_is_zero_for_perfect_squares() {
        assert_eq!(square_residual(49.0, 7.0), 0.0);
        assert_eq!(square_residual(2.25, 1.5), 0.0);
    }

    #[test]
    fn residual_sign_brackets_the_root() {
        let root = 2.0_f64.sqrt();
        let low = square_residual(2.0, root.next_down());
        let high = square_residual(2.0, root.next_up());
        assert!(low > 0.0, "below the root the residual is positive: {low}");
        assert!(high < 0.0, "above the root the residual is negative: {high}");
    }

    #[test]
    fn rounding_step_recovers_from_a_one_ulp_overshoot() {
        let exact = 3.0_f32;
        assert_eq!(round_to_nearest_f32(9.0, exact.next_up()), exact);
        assert_eq!(round_to_nearest_f32(9.0, exact.next_down()), exact);
        assert_eq!(round_to_nearest_f64(9.0, 3.0_f64.next_up()), 3.0);
    }

    #[test]
    fn newton_handles_extremes_of_the_range() {
        assert_eq!(sqrt_f32(f32::MAX), f32::MAX.sqrt());
        assert_eq!(sqrt_f32(f32::MIN_POSITIVE), f32::MIN_POSITIVE.sqrt());
        let smallest = f32::from_bits(1);
        assert_eq!(sqrt_f32(smallest), smallest.sqrt());
    }
}
