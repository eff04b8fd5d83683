//! Isometric cube tiling.

use super::{outlined, tile, Generator, Seams};
use crate::hashing::Digest;
use crate::palette::remap;
use crate::svg::{points, SvgDocument, SvgNode, Transform};

/// Isometric cubes, three faces each, in offset rows.
pub struct Cubes;

impl Cubes {
    /// One cube whose left, right and top faces take genes
    /// `first`, `first + 1` and `first + 2`.
    fn cube(digest: &Digest, first: usize, size: f64) -> SvgNode {
        let s = size;
        let faces = [
            // left
            [0.0, 0.25 * s, 0.0, 0.75 * s, 0.5 * s, s, 0.5 * s, 0.5 * s, 0.0, 0.25 * s],
            // right
            [0.5 * s, 0.5 * s, 0.5 * s, s, s, 0.75 * s, s, 0.25 * s, 0.5 * s, 0.5 * s],
            // top
            [0.5 * s, 0.0, 0.0, 0.25 * s, 0.5 * s, 0.5 * s, s, 0.25 * s, 0.5 * s, 0.0],
        ];

        faces
            .iter()
            .enumerate()
            .fold(SvgNode::group(), |group, (offset, face)| {
                group.with_child(
                    SvgNode::polyline(points(face))
                        .with_attributes(&outlined(digest.gene(first + offset))),
                )
            })
    }
}

impl Generator for Cubes {
    fn name(&self) -> &'static str {
        "Cubes"
    }

    fn seams(&self) -> Seams {
        Seams::ALL
    }

    fn generate(&self, digest: &Digest, svg: &mut SvgDocument) {
        let size = remap(f64::from(digest.gene(0)), 0.0, 15.0, 25.0, 200.0);
        svg.set_size(size * 6.0, size * 6.0 * 0.75);

        tile(svg, 6, 6, self.seams(), |cell| {
            let dx = if cell.even_y() { size / 2.0 } else { 0.0 };

            Self::cube(digest, cell.index, size).with_transform(&[Transform::Translate(
                cell.fx() * size - size / 2.0 + dx,
                cell.fy() * 0.75 * size - size / 2.0,
            )])
        });
    }
}
