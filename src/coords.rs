//! Hex cell addressing
//!
//! Cells are addressed with axial coordinates `(q, r)`. The third cube
//! coordinate `s = -q - r` is implicit. Offset coordinates are an alternate
//! "column-shoved" addressing of the same cells, handy for walking a
//! rectangular screen area column by column.

use std::fmt;
use std::num::TryFromIntError;
use std::ops::{Add, Mul, Neg, Sub};

use glam::IVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::combine;

/// Axial hex coordinate
///
/// Immutable value type. Distance and rotation work through the cube
/// embedding `(q, r, s)` with `q + r + s == 0`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

/// The six unit steps between adjacent cells.
///
/// Ordered so that rotating entry `i` by one 60° step yields entry `i + 1`.
pub const DIRECTIONS: [Axial; 6] = [
    Axial::new(1, 0),
    Axial::new(1, -1),
    Axial::new(0, -1),
    Axial::new(-1, 0),
    Axial::new(-1, 1),
    Axial::new(0, 1),
];

impl Axial {
    pub const ORIGIN: Axial = Axial::new(0, 0);

    #[inline]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Implicit third cube coordinate.
    ///
    /// Widened to `i64` so that it exists for every pair of `i32` axial
    /// coordinates.
    #[inline]
    pub const fn s(self) -> i64 {
        -(self.q as i64) - (self.r as i64)
    }

    #[inline]
    pub fn to_cube(self) -> Cube {
        Cube {
            q: self.q as i64,
            r: self.r as i64,
            s: self.s(),
        }
    }

    /// Hex distance to the origin.
    #[inline]
    pub fn length(self) -> i64 {
        self.to_cube().length()
    }

    /// Hex distance, the Chebyshev distance of the cube embedding.
    #[inline]
    pub fn distance(self, other: Axial) -> i64 {
        let dq = self.q as i64 - other.q as i64;
        let dr = self.r as i64 - other.r as i64;
        Cube {
            q: dq,
            r: dr,
            s: -dq - dr,
        }
        .length()
    }

    /// Rotate about the origin by `steps` increments of 60°.
    ///
    /// `(q, r, s)` becomes `(-s, -q, -r)` per step. Results outside the
    /// `i32` range wrap around, which keeps six steps the identity.
    pub fn rotate(self, steps: u32) -> Axial {
        let (mut q, mut r) = (self.q, self.r);
        for _ in 0..steps % 6 {
            (q, r) = (q.wrapping_add(r), q.wrapping_neg());
        }
        Axial::new(q, r)
    }

    /// The six adjacent cells, in [`DIRECTIONS`] order.
    pub fn neighbors(self) -> [Axial; 6] {
        DIRECTIONS.map(|d| self + d)
    }

    /// Column-shoved offset form of this cell.
    ///
    /// Rows wrap around at the ends of the `i32` range, so the conversion
    /// stays a bijection for every cell.
    pub fn to_offset(self) -> Offset {
        Offset {
            x: self.q,
            y: self.r.wrapping_add(self.q.div_euclid(2)),
        }
    }
}

impl fmt::Display for Axial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

impl Add for Axial {
    type Output = Axial;

    fn add(self, rhs: Axial) -> Axial {
        combine(self.into(), rhs.into()).into()
    }
}

impl Sub for Axial {
    type Output = Axial;

    fn sub(self, rhs: Axial) -> Axial {
        self + -rhs
    }
}

impl Neg for Axial {
    type Output = Axial;

    fn neg(self) -> Axial {
        Axial::new(-self.q, -self.r)
    }
}

impl Mul<i32> for Axial {
    type Output = Axial;

    fn mul(self, rhs: i32) -> Axial {
        Axial::new(self.q * rhs, self.r * rhs)
    }
}

impl From<IVec2> for Axial {
    fn from(v: IVec2) -> Self {
        Axial::new(v.x, v.y)
    }
}

impl From<Axial> for IVec2 {
    fn from(c: Axial) -> Self {
        IVec2::new(c.q, c.r)
    }
}

impl From<[i32; 2]> for Axial {
    fn from([q, r]: [i32; 2]) -> Self {
        Axial::new(q, r)
    }
}

impl From<(i32, i32)> for Axial {
    fn from((q, r): (i32, i32)) -> Self {
        Axial::new(q, r)
    }
}

/// Cube form of an axial coordinate, `q + r + s == 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cube {
    pub q: i64,
    pub r: i64,
    pub s: i64,
}

impl Cube {
    /// Hex distance to the origin.
    #[inline]
    pub fn length(self) -> i64 {
        self.q.abs().max(self.r.abs()).max(self.s.abs())
    }
}

impl TryFrom<Cube> for Axial {
    type Error = TryFromIntError;

    fn try_from(c: Cube) -> std::result::Result<Self, Self::Error> {
        debug_assert_eq!(c.q + c.r + c.s, 0);
        Ok(Axial::new(i32::try_from(c.q)?, i32::try_from(c.r)?))
    }
}

/// Round fractional axial coordinates to the nearest cell.
///
/// All three cube coordinates are rounded, then the one that moved the most
/// is rebuilt from the other two so that `q + r + s == 0` holds exactly.
pub fn cube_round(q: f64, r: f64) -> Axial {
    let s = -q - r;

    let (mut rq, mut rr, rs) = (q.round(), r.round(), s.round());
    let (dq, dr, ds) = ((rq - q).abs(), (rr - r).abs(), (rs - s).abs());

    if dq > dr && dq > ds {
        rq = -rr - rs;
    } else if dr > ds {
        rr = -rq - rs;
    }
    // Otherwise s carries the largest error and stays implicit.

    Axial::new(rq as i32, rr as i32)
}

/// Column-shoved offset coordinate
///
/// Column `x` equals axial `q`, rows are shifted so that each column is a
/// straight vertical line of cells on screen.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn to_axial(self) -> Axial {
        Axial::new(self.x, self.y.wrapping_sub(self.x.div_euclid(2)))
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// Convert an axial coordinate to its offset form.
pub fn axial_to_offset(c: Axial) -> Offset {
    c.to_offset()
}

/// Convert an offset coordinate back to axial form.
pub fn offset_to_axial(o: Offset) -> Axial {
    o.to_axial()
}

/// Rotate `c` about the origin by `steps` increments of 60°.
pub fn rotate(c: Axial, steps: u32) -> Axial {
    c.rotate(steps)
}

/// Hex distance between two cells.
pub fn distance(a: Axial, b: Axial) -> i64 {
    a.distance(b)
}

#[cfg(test)]
impl quickcheck::Arbitrary for Axial {
    fn arbitrary(g: &mut quickcheck::Gen) -> Axial {
        // Stay well inside i32 so sums and mirror offsets can't overflow.
        let q = <i16 as quickcheck::Arbitrary>::arbitrary(g);
        let r = <i16 as quickcheck::Arbitrary>::arbitrary(g);
        Axial::new(q as i32, r as i32)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(
            quickcheck::Arbitrary::shrink(&(self.q, self.r)).map(|(q, r)| Axial::new(q, r)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_offset_worked_example() {
        assert_eq!(axial_to_offset(Axial::new(2, -1)), Offset::new(2, 0));
        assert_eq!(offset_to_axial(Offset::new(2, 0)), Axial::new(2, -1));
    }

    #[test]
    fn test_offset_negative_columns() {
        // floor(-1 / 2) is -1, not 0.
        assert_eq!(axial_to_offset(Axial::new(-1, 0)), Offset::new(-1, -1));
        assert_eq!(offset_to_axial(Offset::new(-1, -1)), Axial::new(-1, 0));
        assert_eq!(axial_to_offset(Axial::new(-3, 2)), Offset::new(-3, 0));
    }

    #[quickcheck]
    fn offset_round_trip(c: Axial) -> bool {
        offset_to_axial(axial_to_offset(c)) == c
    }

    #[quickcheck]
    fn axial_round_trip(x: i16, y: i16) -> bool {
        let o = Offset::new(x as i32, y as i32);
        axial_to_offset(offset_to_axial(o)) == o
    }

    #[quickcheck]
    fn offset_round_trip_full_range(q: i32, r: i32) -> bool {
        let c = Axial::new(q, r);
        let o = Offset::new(q, r);
        offset_to_axial(axial_to_offset(c)) == c && axial_to_offset(offset_to_axial(o)) == o
    }

    #[test]
    fn test_extreme_coordinates() {
        let max = Axial::new(i32::MAX, i32::MAX);
        assert_eq!(offset_to_axial(axial_to_offset(max)), max);
        let min = Axial::new(i32::MIN, i32::MIN);
        assert_eq!(offset_to_axial(axial_to_offset(min)), min);

        assert_eq!(max.s(), -2 * i32::MAX as i64);
        assert_eq!(max.length(), 2 * i32::MAX as i64);
        assert_eq!(distance(Axial::new(i32::MIN, 0), Axial::ORIGIN), 1 << 31);
        assert_eq!(distance(min, max), 2 * (u32::MAX as i64));
        assert_eq!(rotate(max, 6), max);
        assert_eq!(rotate(Axial::new(i32::MIN, 5), 3), Axial::new(i32::MIN, -5));
    }

    #[quickcheck]
    fn cube_sums_to_zero(c: Axial) -> bool {
        let cube = c.to_cube();
        cube.q + cube.r + cube.s == 0 && Axial::try_from(cube) == Ok(c)
    }

    #[quickcheck]
    fn full_turn_is_identity(c: Axial) -> bool {
        rotate(c, 6) == c && rotate(c, 0) == c && rotate(c, 7) == rotate(c, 1)
    }

    #[quickcheck]
    fn rotation_preserves_length(c: Axial, steps: u8) -> bool {
        rotate(c, steps as u32).length() == c.length()
    }

    #[test]
    fn test_rotation_cycles_directions() {
        for (i, d) in DIRECTIONS.iter().enumerate() {
            assert_eq!(rotate(*d, 1), DIRECTIONS[(i + 1) % 6]);
        }
    }

    #[test]
    fn test_directions_are_unit_steps() {
        for d in DIRECTIONS {
            assert_eq!(d.length(), 1);
        }
        let neighbors = Axial::new(3, -2).neighbors();
        for n in neighbors {
            assert_eq!(distance(n, Axial::new(3, -2)), 1);
        }
    }

    #[test]
    fn test_distance_examples() {
        assert_eq!(distance(Axial::ORIGIN, Axial::new(3, -1)), 3);
        assert_eq!(distance(Axial::new(1, 1), Axial::new(-1, -1)), 4);
        assert_eq!(distance(Axial::new(2, 0), Axial::new(0, 2)), 2);
    }

    #[quickcheck]
    fn distance_is_zero_iff_equal(a: Axial, b: Axial) -> bool {
        distance(a, a) == 0 && ((distance(a, b) == 0) == (a == b))
    }

    #[quickcheck]
    fn distance_is_symmetric(a: Axial, b: Axial) -> bool {
        distance(a, b) == distance(b, a) && distance(a, b) >= 0
    }

    #[test]
    fn test_triangle_inequality() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut random_cell = || Axial::new(rng.gen_range(-1000..1000), rng.gen_range(-1000..1000));

        for _ in 0..100 {
            let (a, b, c) = (random_cell(), random_cell(), random_cell());
            assert!(
                distance(a, c) <= distance(a, b) + distance(b, c),
                "triangle inequality fails for {} {} {}",
                a,
                b,
                c
            );
        }
    }

    #[test]
    fn test_cube_round_exact() {
        assert_eq!(cube_round(2.0, -1.0), Axial::new(2, -1));
        assert_eq!(cube_round(0.1, -0.05), Axial::ORIGIN);
    }

    #[test]
    fn test_cube_round_fixes_largest_error() {
        // Naive rounding gives (0, 0, -1), which doesn't sum to zero.
        // q has the largest error (0.4) and gets rebuilt from r and s.
        assert_eq!(cube_round(0.4, 0.3), Axial::new(1, 0));
        // r has the largest error here.
        assert_eq!(cube_round(0.3, 0.4), Axial::new(0, 1));
    }

    #[test]
    fn test_conversions() {
        let c = Axial::new(4, -7);
        assert_eq!(Axial::from(IVec2::from(c)), c);
        assert_eq!(Axial::from([4, -7]), c);
        assert_eq!(Axial::from((4, -7)), c);
        assert_eq!(c.to_string(), "(4, -7)");
        assert_eq!(-c + c, Axial::ORIGIN);
        assert_eq!(c * 2 - c, c);
    }
}
