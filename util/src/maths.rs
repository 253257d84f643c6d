//! Utility maths functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use num_traits::{Float, FloatConst};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Tolerance used for all approximate floating point comparisons.
pub const EPSILON: f64 = 1e-9;

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Returns true if `a` and `b` are within `epsilon` of one another.
pub fn epsilon_equals_with<T>(a: T, b: T, epsilon: T) -> bool
where
    T: Float
{
    (a - epsilon <= b) && (a + epsilon >= b)
}

/// Returns true if `a` and `b` are within [`EPSILON`] of one another.
pub fn epsilon_equals(a: f64, b: f64) -> bool {
    epsilon_equals_with(a, b, EPSILON)
}

/// Linearly interpolate between `a` and `b`.
///
/// `t` is clamped to `[0, 1]` so the result never leaves the segment.
pub fn lin_interp<T>(a: T, b: T, t: T) -> T
where
    T: Float
{
    let t = clamp(&t, &T::zero(), &T::one());
    a + (b - a) * t
}

pub fn clamp<T>(value: &T, min: &T, max: &T) -> T
where
    T: Float
{
    let mut ret = *value;

    if ret > *max {
        ret = *max
    }
    if ret < *min {
        ret = *min
    }

    ret
}

/// Wrap an angle into the range (-pi, pi].
pub fn wrap_pi<T>(angle: T) -> T
where
    T: Float + FloatConst
{
    let pi_t = T::PI();
    let tau_t = pi_t + pi_t;

    // rem_euclid puts us in [-pi, pi), so only -pi itself needs moving
    let wrapped = rem_euclid(angle + pi_t, tau_t) - pi_t;

    if wrapped <= -pi_t {
        wrapped + tau_t
    }
    else {
        wrapped
    }
}

/// Calculates the least nonnegative remainder of `lhs (mod rhs)`.
///
/// This function is taken from the std library as num is missing it.
///
/// In particular, the return value `r` satisfies `0.0 <= r < rhs.abs()` in
/// most cases. However, due to a floating point round-off error it can
/// result in `r == rhs.abs()`, violating the mathematical definition, if
/// `self` is much smaller than `rhs.abs()` in magnitude and `self < 0.0`.
/// This result is not an element of the function's codomain, but it is the
/// closest floating point number in the real numbers and thus fulfills the
/// property `self == self.div_euclid(rhs) * rhs + self.rem_euclid(rhs)`
/// approximatively.
pub fn rem_euclid<T>(lhs: T, rhs: T) -> T
where
    T: Float
{
    let r = lhs % rhs;
    if r < T::zero() { r + rhs.abs() } else { r }
}
