//! Plus signs, upright and rotated into crosses.

use super::{flat, tile, toned, Generator, Seams};
use crate::hashing::Digest;
use crate::palette::remap;
use crate::svg::{SvgDocument, SvgNode, Transform};

fn arm_size(digest: &Digest) -> f64 {
    remap(f64::from(digest.gene(0)), 0.0, 15.0, 10.0, 25.0)
}

/// A plus built from a vertical and a horizontal bar, `3 * square` across.
fn plus(square: f64) -> SvgNode {
    SvgNode::group()
        .with_child(SvgNode::rect(square, 0.0, square, square * 3.0))
        .with_child(SvgNode::rect(0.0, square, square * 3.0, square))
}

pub struct PlusSigns;

impl Generator for PlusSigns {
    fn name(&self) -> &'static str {
        "PlusSigns"
    }

    fn seams(&self) -> Seams {
        Seams::ALL
    }

    fn generate(&self, digest: &Digest, svg: &mut SvgDocument) {
        let square = arm_size(digest);
        let plus_size = square * 3.0;
        svg.set_size(square * 12.0, square * 12.0);

        tile(svg, 6, 6, self.seams(), |cell| {
            let dx = if cell.even_y() { 0.0 } else { 1.0 };

            plus(square)
                .with_attributes(&toned(digest.gene(cell.index)))
                .with_transform(&[Transform::Translate(
                    cell.fx() * plus_size - cell.fx() * square + dx * square - square,
                    cell.fy() * plus_size - cell.fy() * square - plus_size / 2.0,
                )])
        });
    }
}

pub struct Xes;

impl Generator for Xes {
    fn name(&self) -> &'static str {
        "Xes"
    }

    fn seams(&self) -> Seams {
        Seams {
            top: true,
            ..Seams::ALL
        }
    }

    fn generate(&self, digest: &Digest, svg: &mut SvgDocument) {
        let square = arm_size(digest);
        let x_size = square * 3.0 * 0.943;
        svg.set_size(x_size * 3.0, x_size * 3.0);

        // rotation bleeds over the top edge, hence the extra top row
        tile(svg, 6, 6, self.seams(), |cell| {
            let dy = if cell.even_x() {
                cell.fy() * x_size - x_size / 2.0
            } else {
                cell.fy() * x_size - x_size / 2.0 + x_size / 4.0
            };

            plus(square)
                .with_attributes(&flat(digest.gene(cell.index)))
                .with_transform(&[
                    Transform::Translate(
                        cell.fx() * x_size / 2.0 - x_size / 2.0,
                        dy - cell.fy() * x_size / 2.0,
                    ),
                    Transform::Rotate(45.0, x_size / 2.0, x_size / 2.0),
                ])
        });
    }
}
