//! Pixel space layout of the hex grid
//!
//! Maps cells to pixel positions and back for a given hex size (circumradius
//! in pixels). Hexes are flat-topped: the first corner of every cell points
//! along +x, matching the basis in [`crate::math::HEX_BASIS`].

use std::f64::consts::FRAC_PI_3;

use glam::DVec2;

use crate::coords::{cube_round, Axial, Offset};
use crate::error::{HexError, Result};
use crate::math::{transform, HEX_BASIS, HEX_BASIS_INV, SQRT_3};

/// Pixel layout for hexes of a fixed size
///
/// The size is validated once on construction, so every conversion on a
/// layout is infallible.
///
/// # Example
///
/// ```
/// use hex_wrap_world::*;
///
/// let layout = HexLayout::new(10.0).unwrap();
/// let cell = Axial::new(2, -1);
/// let center = layout.axial_to_pixel(cell);
/// assert_eq!(layout.pixel_to_axial(center), cell);
///
/// assert!(HexLayout::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexLayout {
    size: f64,
}

impl HexLayout {
    /// Create a layout for hexes of circumradius `size`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` unless `size` is positive and finite.
    pub fn new(size: f64) -> Result<Self> {
        if !(size > 0.0 && size.is_finite()) {
            return Err(HexError::InvalidSize(size));
        }
        Ok(Self { size })
    }

    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Pixel position of a cell's center.
    #[inline]
    pub fn axial_to_pixel(&self, cell: Axial) -> DVec2 {
        transform(HEX_BASIS, cell.q_r(), self.size)
    }

    /// The cell whose center is nearest to the pixel position.
    pub fn pixel_to_axial(&self, p: DVec2) -> Axial {
        let f = transform(HEX_BASIS_INV, p, 1.0 / self.size);
        cube_round(f.x, f.y)
    }

    /// Vertices of a hexagon centered at `center`, at angles `k * 60°`.
    pub fn corners(&self, center: DVec2) -> [DVec2; 6] {
        std::array::from_fn(|k| {
            let angle = FRAC_PI_3 * k as f64;
            center + DVec2::new(angle.cos(), angle.sin()) * self.size
        })
    }

    /// Outline polygon of a cell.
    pub fn cell_corners(&self, cell: Axial) -> [DVec2; 6] {
        self.corners(self.axial_to_pixel(cell))
    }

    /// Iterate every cell that overlaps the pixel rectangle `min..max`.
    ///
    /// Walks offset rows top to bottom, columns left to right. The range is
    /// padded by one cell on each side so partially visible hexes are
    /// included. Yields nothing if the rectangle is inverted.
    pub fn cells_in_rect(&self, min: DVec2, max: DVec2) -> impl Iterator<Item = Axial> {
        let (x0, x1, y0, y1) = if min.x <= max.x && min.y <= max.y {
            let col_width = 1.5 * self.size;
            let row_height = SQRT_3 * self.size;
            (
                (min.x / col_width).floor() as i32 - 1,
                (max.x / col_width).ceil() as i32 + 1,
                (min.y / row_height).floor() as i32 - 1,
                (max.y / row_height).ceil() as i32 + 1,
            )
        } else {
            (0, -1, 0, -1)
        };

        (y0..=y1).flat_map(move |y| (x0..=x1).map(move |x| Offset::new(x, y).to_axial()))
    }
}

impl Axial {
    /// Axial components as a float vector, for pixel transforms.
    #[inline]
    pub(crate) fn q_r(self) -> DVec2 {
        DVec2::new(self.q as f64, self.r as f64)
    }
}

/// Pixel position of a cell's center for hexes of circumradius `size`.
pub fn axial_to_pixel(cell: Axial, size: f64) -> Result<DVec2> {
    Ok(HexLayout::new(size)?.axial_to_pixel(cell))
}

/// Nearest cell to a pixel position for hexes of circumradius `size`.
pub fn pixel_to_axial(p: DVec2, size: f64) -> Result<Axial> {
    Ok(HexLayout::new(size)?.pixel_to_axial(p))
}

/// Hexagon vertices around `center` for circumradius `size`.
pub fn corners(center: DVec2, size: f64) -> Result<[DVec2; 6]> {
    Ok(HexLayout::new(size)?.corners(center))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::DIRECTIONS;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_rejects_bad_size() {
        assert_eq!(HexLayout::new(0.0), Err(HexError::InvalidSize(0.0)));
        assert!(HexLayout::new(-3.0).is_err());
        assert!(HexLayout::new(f64::NAN).is_err());
        assert!(HexLayout::new(f64::INFINITY).is_err());
        assert!(axial_to_pixel(Axial::ORIGIN, -1.0).is_err());
        assert!(pixel_to_axial(DVec2::ZERO, 0.0).is_err());
        assert!(corners(DVec2::ZERO, 0.0).is_err());
    }

    #[test]
    fn test_known_centers() {
        let layout = HexLayout::new(2.0).unwrap();
        assert_eq!(layout.axial_to_pixel(Axial::ORIGIN), DVec2::ZERO);
        assert_eq!(layout.axial_to_pixel(Axial::new(1, 0)), DVec2::new(3.0, SQRT_3));
        assert_eq!(layout.axial_to_pixel(Axial::new(0, 1)), DVec2::new(0.0, 2.0 * SQRT_3));
    }

    #[test]
    fn test_center_round_trip() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..1000 {
            let size = rng.gen_range(0.5..50.0);
            let layout = HexLayout::new(size).unwrap();
            let cell = Axial::new(rng.gen_range(-500..500), rng.gen_range(-500..500));

            let p = layout.axial_to_pixel(cell);
            assert_eq!(layout.pixel_to_axial(p), cell);

            let back = layout.axial_to_pixel(layout.pixel_to_axial(p));
            assert!(back.distance(p) <= size * 1e-9, "{} drifted to {}", p, back);
        }
    }

    #[test]
    fn test_picking_is_nearest_centroid() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let layout = HexLayout::new(7.5).unwrap();

        for _ in 0..2000 {
            let p = DVec2::new(rng.gen_range(-300.0..300.0), rng.gen_range(-300.0..300.0));
            let cell = layout.pixel_to_axial(p);
            let d = p.distance(layout.axial_to_pixel(cell));

            // Hexes are the Voronoi cells of their centers, so no neighbor
            // center may be strictly closer.
            for n in cell.neighbors() {
                let dn = p.distance(layout.axial_to_pixel(n));
                assert!(d <= dn + 1e-9, "{} picked {} but {} is closer", p, cell, n);
            }
        }
    }

    #[test]
    fn test_corner_point_rounds_to_adjacent_cell() {
        let layout = HexLayout::new(1.0).unwrap();
        // Shared corner of the origin and two of its neighbors.
        let corner = layout.cell_corners(Axial::ORIGIN)[0];
        let cell = layout.pixel_to_axial(corner);
        assert!(cell == Axial::ORIGIN || DIRECTIONS.contains(&cell));
    }

    #[test]
    fn test_corners_shape() {
        let layout = HexLayout::new(4.0).unwrap();
        let center = DVec2::new(10.0, -3.0);
        let pts = layout.corners(center);

        // First corner points along +x.
        assert!(pts[0].abs_diff_eq(DVec2::new(14.0, -3.0), 1e-12));
        for (i, p) in pts.iter().enumerate() {
            assert!((p.distance(center) - 4.0).abs() < 1e-12);
            // Regular hexagon: side length equals circumradius.
            assert!((p.distance(pts[(i + 1) % 6]) - 4.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_neighbors_share_an_edge() {
        let layout = HexLayout::new(3.0).unwrap();
        let a = layout.cell_corners(Axial::ORIGIN);

        for d in DIRECTIONS {
            let b = layout.cell_corners(d);
            let shared = a
                .iter()
                .filter(|p| b.iter().any(|q| p.abs_diff_eq(*q, 1e-9)))
                .count();
            assert_eq!(shared, 2, "origin and {} should share an edge", d);
        }
    }

    #[test]
    fn test_cells_in_rect_covers_viewport() {
        let layout = HexLayout::new(5.0).unwrap();
        let (min, max) = (DVec2::new(-40.0, -25.0), DVec2::new(60.0, 35.0));
        let cells: Vec<Axial> = layout.cells_in_rect(min, max).collect();

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            let p = DVec2::new(rng.gen_range(min.x..max.x), rng.gen_range(min.y..max.y));
            assert!(cells.contains(&layout.pixel_to_axial(p)));
        }
    }

    #[test]
    fn test_cells_in_rect_inverted_is_empty() {
        let layout = HexLayout::new(5.0).unwrap();
        let mut cells = layout.cells_in_rect(DVec2::new(10.0, 0.0), DVec2::new(0.0, 10.0));
        assert!(cells.next().is_none());
    }
}
