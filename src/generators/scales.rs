//! Fish-scale scallops and the four-petal wave variant.

use super::{outlined, tile, Generator, Seams};
use crate::hashing::Digest;
use crate::palette::remap;
use crate::svg::{Num, SvgDocument, SvgNode, Transform};

fn scale_diameter(digest: &Digest) -> f64 {
    remap(f64::from(digest.gene(0)), 0.0, 15.0, 25.0, 200.0)
}

/// Scallop outline: a three-quarter arc closed by two quarter arcs.
fn scale_path(diameter: f64) -> String {
    let r = Num(diameter / 2.0);
    let d = Num(diameter);
    format!(
        "M0 {r} A {r} {r} 0 1 0 {d} {r} A {r} {r} 0 0 1 {r} 0 A {r} {r} 0 0 1 0 {r} Z",
        r = r,
        d = d
    )
}

pub struct FishScales;

impl Generator for FishScales {
    fn name(&self) -> &'static str {
        "FishScales"
    }

    fn seams(&self) -> Seams {
        Seams::ALL
    }

    fn generate(&self, digest: &Digest, svg: &mut SvgDocument) {
        let diameter = scale_diameter(digest);
        let radius = diameter / 2.0;
        let path = scale_path(diameter);

        svg.set_size(diameter * 6.0, radius * 6.0);

        tile(svg, 6, 6, self.seams(), |cell| {
            let dx = if cell.even_y() { -radius } else { 0.0 };

            SvgNode::path(path.as_str())
                .with_attributes(&outlined(digest.gene(cell.index)))
                .with_transform(&[Transform::Translate(
                    cell.fx() * diameter + dx,
                    cell.fy() * radius - radius,
                )])
        });
    }
}

pub struct WaveFishScales;

impl WaveFishScales {
    /// Four scales rotated about a shared centre, toned by genes
    /// `first..first + 4`.
    fn flower(digest: &Digest, first: usize, diameter: f64) -> SvgNode {
        let radius = diameter / 2.0;
        let path = scale_path(diameter);
        let petal = |offset: usize, placement: &[Transform]| {
            let node = SvgNode::path(path.as_str())
                .with_attributes(&outlined(digest.gene(first + offset)));
            if placement.is_empty() {
                node
            } else {
                node.with_transform(placement)
            }
        };

        SvgNode::group()
            .with_child(petal(0, &[]))
            .with_child(petal(1, &[
                Transform::Rotate(-90.0, radius, radius),
                Transform::Translate(-radius, radius),
            ]))
            .with_child(petal(2, &[
                Transform::Rotate(90.0, radius, radius),
                Transform::Translate(radius, radius),
            ]))
            .with_child(petal(3, &[
                Transform::Rotate(180.0, radius, radius),
                Transform::Translate(0.0, -diameter),
            ]))
    }
}

impl Generator for WaveFishScales {
    fn name(&self) -> &'static str {
        "WaveFishScales"
    }

    fn seams(&self) -> Seams {
        Seams::ALL
    }

    fn generate(&self, digest: &Digest, svg: &mut SvgDocument) {
        let diameter = scale_diameter(digest);
        let radius = diameter / 2.0;

        svg.set_size(diameter * 6.0, diameter * 6.0);

        tile(svg, 3, 6, self.seams(), |cell| {
            let dx = if cell.even_y() { -diameter } else { 0.0 };

            Self::flower(digest, cell.index, diameter).with_transform(&[Transform::Translate(
                cell.fx() * diameter * 2.0 + dx - radius,
                cell.fy() * diameter - diameter,
            )])
        });
    }
}
