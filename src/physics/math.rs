/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// 2D vector type for screen-space positions
pub type Vector = bevy::math::DVec2;

pub const PI: Scalar = std::f64::consts::PI;

/// Converts degrees to radians as `degrees * π / 180`.
///
/// Kept separate from `f64::to_radians`, which multiplies by a pre-rounded
/// `π / 180` and can land one ulp away from the initial condition.
#[inline]
pub fn degrees_to_radians(degrees: Scalar) -> Scalar {
    degrees * PI / 180.0
}

#[inline]
pub fn radians_to_degrees(radians: Scalar) -> Scalar {
    radians * 180.0 / PI
}
