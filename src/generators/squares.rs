//! Square-grid generators: plain squares, corner-cut octagons and
//! nested outline squares. All fit the canvas exactly, so no edge copies.

use super::{grid, ring, solid, tile, Generator};
use crate::hashing::Digest;
use crate::palette::remap;
use crate::svg::{points, SvgDocument, SvgNode, Transform};

fn square_size(digest: &Digest) -> f64 {
    remap(f64::from(digest.gene(0)), 0.0, 15.0, 10.0, 60.0)
}

pub struct Squares;

impl Generator for Squares {
    fn name(&self) -> &'static str {
        "Squares"
    }

    fn generate(&self, digest: &Digest, svg: &mut SvgDocument) {
        let size = square_size(digest);
        svg.set_size(size * 6.0, size * 6.0);

        tile(svg, 6, 6, self.seams(), |cell| {
            SvgNode::rect(cell.fx() * size, cell.fy() * size, size, size)
                .with_attributes(&solid(digest.gene(cell.index)))
        });
    }
}

pub struct Octogons;

impl Octogons {
    fn shape(size: f64) -> String {
        let s = size;
        let c = s * 0.33;
        points(&[
            c, 0.0,
            s - c, 0.0,
            s, c,
            s, s - c,
            s - c, s,
            c, s,
            0.0, s - c,
            0.0, c,
            c, 0.0,
        ])
    }
}

impl Generator for Octogons {
    fn name(&self) -> &'static str {
        "Octogons"
    }

    fn generate(&self, digest: &Digest, svg: &mut SvgDocument) {
        let size = square_size(digest);
        let shape = Self::shape(size);
        svg.set_size(size * 6.0, size * 6.0);

        tile(svg, 6, 6, self.seams(), |cell| {
            SvgNode::polyline(shape.as_str())
                .with_attributes(&solid(digest.gene(cell.index)))
                .with_transform(&[Transform::Translate(cell.fx() * size, cell.fy() * size)])
        });
    }
}

pub struct NestedSquares;

impl Generator for NestedSquares {
    fn name(&self) -> &'static str {
        "NestedSquares"
    }

    fn generate(&self, digest: &Digest, svg: &mut SvgDocument) {
        let block = remap(f64::from(digest.gene(0)), 0.0, 15.0, 4.0, 12.0);
        let square = block * 7.0;
        let extent = (square + block) * 6.0 + block * 6.0;
        svg.set_size(extent, extent);

        for cell in grid(6, 6) {
            let x = cell.fx() * square + cell.fx() * block * 2.0 + block / 2.0;
            let y = cell.fy() * square + cell.fy() * block * 2.0 + block / 2.0;

            svg.add(
                SvgNode::rect(x, y, square, square)
                    .with_attributes(&ring(digest.gene(cell.index), block)),
            );

            // inner square takes its tone from the mirrored gene
            svg.add(
                SvgNode::rect(x + block * 2.0, y + block * 2.0, block * 3.0, block * 3.0)
                    .with_attributes(&ring(digest.gene(39 - cell.index), block)),
            );
        }
    }
}
