//! Polygon output for renderers
//!
//! Produces engine-agnostic cell outlines for a pixel viewport. The viewport
//! may cover any part of the unbounded plane; each visible cell is folded
//! into the region to look up whether it is open, so the world repeats
//! seamlessly when panned past its edge.

use glam::DVec2;

use crate::coords::Axial;
use crate::layout::HexLayout;
use crate::world::HexWorld;

/// One hexagon to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPolygon {
    /// Cell position on the unbounded plane, where it is drawn.
    pub cell: Axial,
    /// The same cell folded into the region.
    pub folded: Axial,
    /// Pixel center of the hexagon.
    pub center: DVec2,
    /// Hexagon vertices, counter-clockwise from +x.
    pub corners: [DVec2; 6],
    /// Whether the cell is open.
    pub open: bool,
}

/// Outlines of every cell overlapping a viewport
#[derive(Debug, Clone, Default)]
pub struct OutlineData {
    pub polygons: Vec<CellPolygon>,
}

impl OutlineData {
    /// Number of polygons.
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Number of polygons for open cells.
    pub fn open_count(&self) -> usize {
        self.polygons.iter().filter(|p| p.open).count()
    }

    /// Flattened vertex positions, six per polygon.
    pub fn positions(&self) -> Vec<[f64; 2]> {
        self.polygons
            .iter()
            .flat_map(|p| p.corners.iter().map(|c| [c.x, c.y]))
            .collect()
    }
}

/// Outline every cell overlapping the pixel rectangle `min..max`.
pub fn visible_polygons(
    world: &HexWorld,
    layout: &HexLayout,
    min: DVec2,
    max: DVec2,
) -> OutlineData {
    let region = world.region();

    let polygons = layout
        .cells_in_rect(min, max)
        .map(|cell| {
            let folded = region.wrap(cell);
            let center = layout.axial_to_pixel(cell);
            CellPolygon {
                cell,
                folded,
                center,
                corners: layout.corners(center),
                open: world.is_open(folded),
            }
        })
        .collect();

    OutlineData { polygons }
}
