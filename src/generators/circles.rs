//! Circle families: concentric rings, overlapping discs and overlapping
//! outline rings. The overlapping pair wraps at every edge.

use super::{flat, grid, ring, tile, Generator, Seams, PALETTE};
use crate::hashing::Digest;
use crate::palette::remap;
use crate::svg::{SvgDocument, SvgNode};

pub struct ConcentricCircles;

impl Generator for ConcentricCircles {
    fn name(&self) -> &'static str {
        "ConcentricCircles"
    }

    fn generate(&self, digest: &Digest, svg: &mut SvgDocument) {
        let ring_size = remap(f64::from(digest.gene(0)), 0.0, 15.0, 10.0, 60.0);
        let stroke_width = ring_size / 5.0;
        let pitch = ring_size + stroke_width;
        svg.set_size(pitch * 6.0, pitch * 6.0);

        for cell in grid(6, 6) {
            let cx = cell.fx() * ring_size + cell.fx() * stroke_width + pitch / 2.0;
            let cy = cell.fy() * ring_size + cell.fy() * stroke_width + pitch / 2.0;

            svg.add(
                SvgNode::circle(cx, cy, ring_size / 2.0)
                    .with_attributes(&ring(digest.gene(cell.index), stroke_width)),
            );

            let dot = digest.gene(39 - cell.index);
            svg.add(SvgNode::circle(cx, cy, ring_size / 4.0).with_attributes(&[
                ("fill", PALETTE.fill_color(dot).into()),
                ("fill-opacity", PALETTE.fill_opacity(dot).into()),
            ]));
        }
    }
}

pub struct OverlappingCircles;

impl Generator for OverlappingCircles {
    fn name(&self) -> &'static str {
        "OverlappingCircles"
    }

    fn seams(&self) -> Seams {
        Seams::ALL
    }

    fn generate(&self, digest: &Digest, svg: &mut SvgDocument) {
        let diameter = remap(f64::from(digest.gene(0)), 0.0, 15.0, 25.0, 200.0);
        let radius = diameter / 2.0;
        svg.set_size(radius * 6.0, radius * 6.0);

        tile(svg, 6, 6, self.seams(), |cell| {
            SvgNode::circle(cell.fx() * radius, cell.fy() * radius, radius)
                .with_attributes(&flat(digest.gene(cell.index)))
        });
    }
}

pub struct OverlappingRings;

impl Generator for OverlappingRings {
    fn name(&self) -> &'static str {
        "OverlappingRings"
    }

    fn seams(&self) -> Seams {
        Seams::ALL
    }

    fn generate(&self, digest: &Digest, svg: &mut SvgDocument) {
        let ring_size = remap(f64::from(digest.gene(0)), 0.0, 15.0, 10.0, 60.0);
        let stroke_width = ring_size / 4.0;
        svg.set_size(ring_size * 6.0, ring_size * 6.0);

        tile(svg, 6, 6, self.seams(), |cell| {
            SvgNode::circle(
                cell.fx() * ring_size,
                cell.fy() * ring_size,
                ring_size - stroke_width / 2.0,
            )
            .with_attributes(&ring(digest.gene(cell.index), stroke_width))
        });
    }
}
