//! Four-triangle mosaic tiles laid out as a two-by-two checkerboard.

use super::{grid, tiled, Generator};
use crate::hashing::Digest;
use crate::palette::remap;
use crate::svg::{points, SvgDocument, SvgNode, Transform};

/// Checkerboard of four-triangle tiles. "Outer" tiles point their
/// triangles outwards in one tone; "inner" tiles meet in the middle in
/// two tones.
pub struct MosaicSquares;

impl MosaicSquares {
    fn shape(size: f64) -> String {
        points(&[0.0, 0.0, size, size, 0.0, size, 0.0, 0.0])
    }

    fn triangle(shape: &str, gene: u32, placement: [Transform; 2]) -> SvgNode {
        SvgNode::polyline(shape)
            .with_attributes(&tiled(gene))
            .with_transform(&placement)
    }

    fn inner_tile(svg: &mut SvgDocument, shape: &str, x: f64, y: f64, t: f64, genes: (u32, u32)) {
        use Transform::{Scale, Translate};
        let (a, b) = genes;

        svg.add(Self::triangle(shape, a, [Translate(x + t, y), Scale(-1.0, 1.0)]));
        svg.add(Self::triangle(shape, a, [Translate(x + t, y + t * 2.0), Scale(1.0, -1.0)]));
        svg.add(Self::triangle(shape, b, [Translate(x + t, y + t * 2.0), Scale(-1.0, -1.0)]));
        svg.add(Self::triangle(shape, b, [Translate(x + t, y), Scale(1.0, 1.0)]));
    }

    fn outer_tile(svg: &mut SvgDocument, shape: &str, x: f64, y: f64, t: f64, gene: u32) {
        use Transform::{Scale, Translate};

        svg.add(Self::triangle(shape, gene, [Translate(x, y + t), Scale(1.0, -1.0)]));
        svg.add(Self::triangle(shape, gene, [Translate(x + t * 2.0, y + t), Scale(-1.0, -1.0)]));
        svg.add(Self::triangle(shape, gene, [Translate(x, y + t), Scale(1.0, 1.0)]));
        svg.add(Self::triangle(shape, gene, [Translate(x + t * 2.0, y + t), Scale(-1.0, 1.0)]));
    }
}

impl Generator for MosaicSquares {
    fn name(&self) -> &'static str {
        "MosaicSquares"
    }

    fn generate(&self, digest: &Digest, svg: &mut SvgDocument) {
        let t = remap(f64::from(digest.gene(0)), 0.0, 15.0, 15.0, 50.0);
        let shape = Self::shape(t);

        svg.set_size(t * 8.0, t * 8.0);

        for cell in grid(4, 4) {
            let x = cell.fx() * t * 2.0;
            let y = cell.fy() * t * 2.0;
            let a = digest.gene(cell.index);

            if cell.even_x() == cell.even_y() {
                Self::outer_tile(svg, &shape, x, y, t, a);
            } else {
                let b = digest.gene(cell.index + 1);
                Self::inner_tile(svg, &shape, x, y, t, (a, b));
            }
        }
    }
}
