//! Vector and matrix helpers shared by the coordinate code
//!
//! The hex grid is flat-topped. Its pixel basis is fixed here once so that
//! cell centers, picking and polygon corners all agree on orientation.

use glam::{DMat2, DVec2, IVec2};

/// √3, not yet a stable constant in `std`.
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Flat-top hex basis `M`, column-major.
///
/// Column 0 is the pixel offset of one step along `q`, column 1 of one step
/// along `r`, both for a hex of circumradius 1.
pub const HEX_BASIS: DMat2 = DMat2::from_cols_array(&[1.5, SQRT_3 / 2.0, 0.0, SQRT_3]);

/// Inverse of [`HEX_BASIS`], maps unit-size pixel space back to fractional
/// axial coordinates.
pub const HEX_BASIS_INV: DMat2 =
    DMat2::from_cols_array(&[2.0 / 3.0, -1.0 / 3.0, 0.0, SQRT_3 / 3.0]);

/// Dot product of two pixel-space vectors.
#[inline]
pub fn dot(a: DVec2, b: DVec2) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Multiply `v` by the 2×2 matrix `m` and scale the result.
///
/// Each output component is the dot product of a matrix row with `v`.
#[inline]
pub fn transform(m: DMat2, v: DVec2, scale: f64) -> DVec2 {
    DVec2::new(dot(m.row(0), v), dot(m.row(1), v)) * scale
}

/// Componentwise sum of two integer coordinate pairs.
#[inline]
pub fn combine(a: IVec2, b: IVec2) -> IVec2 {
    IVec2::new(a.x + b.x, a.y + b.y)
}
