//! Shaping functions
//!
//! A shaping function reparameterises the linear progress `t ∈ [0, 1]` of a
//! keyframe segment into an eased interpolation factor. The result is fed
//! straight into [`lerp`] and is not clamped, so a shaping function may
//! return values outside `[0, 1]`.
//!
//! Any `fn(f32) -> f32` can be used as a shaping function; the ones here are
//! the premade set.

/// Signature shared by every shaping function.
pub type ShapingFn = fn(f32) -> f32;

/// `a * (1 - t) + b * t`.
#[inline]
#[must_use]
pub const fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Always `0`. Marks a shaping function that is never evaluated, such as the
/// one on the first keyframe of a sequence.
#[inline]
#[must_use]
pub const fn none(_t: f32) -> f32 {
    0.0
}

/// Always `1`: snap to the destination regardless of elapsed time.
#[inline]
#[must_use]
pub const fn instant(_t: f32) -> f32 {
    1.0
}

#[inline]
#[must_use]
pub const fn linear(t: f32) -> f32 {
    t
}

/// `t^N` for positive `N`.
#[inline]
#[must_use]
pub const fn polynomial<const N: u32>(t: f32) -> f32 {
    let mut result = t;
    let mut degree = 1;
    while degree < N {
        result *= t;
        degree += 1;
    }
    result
}

/// `1 - (1 - t)^N`.
#[inline]
#[must_use]
pub const fn polynomial_ease_out<const N: u32>(t: f32) -> f32 {
    1.0 - polynomial::<N>(1.0 - t)
}

/// Blend between ease-in `t²` and ease-out `1 - (1 - t)²` by `t` itself.
///
/// Evaluated in this blended-power form rather than as `3t² - 2t³`. The two
/// are algebraically equal, but rounding follows the blended form.
#[inline]
#[must_use]
pub const fn smoothstep(t: f32) -> f32 {
    let ease_in = polynomial::<2>(t);
    let ease_out = 1.0 - polynomial::<2>(1.0 - t);
    lerp(ease_in, ease_out, t)
}
