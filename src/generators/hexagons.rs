//! Staggered flat-topped hexagons. Odd columns drop half a hexagon.

use std::f64::consts::PI;

use super::{solid, tile, Generator, Seams};
use crate::hashing::Digest;
use crate::palette::remap;
use crate::svg::{points, SvgDocument, SvgNode, Transform};

/// Flat-topped hexagons in staggered columns.
pub struct Hexagons;

impl Hexagons {
    fn shape(side: f64) -> String {
        let c = side;
        let a = c / 2.0;
        let b = (60.0 * PI / 180.0).sin() * c;
        points(&[
            0.0, b,
            a, 0.0,
            a + c, 0.0,
            2.0 * c, b,
            a + c, 2.0 * b,
            a, 2.0 * b,
            0.0, b,
        ])
    }
}

impl Generator for Hexagons {
    fn name(&self) -> &'static str {
        "Hexagons"
    }

    fn seams(&self) -> Seams {
        Seams::ALL
    }

    fn generate(&self, digest: &Digest, svg: &mut SvgDocument) {
        let side = remap(f64::from(digest.gene(0)), 0.0, 15.0, 8.0, 60.0);
        let hex_height = side * 3.0_f64.sqrt();
        let hex_width = side * 2.0;
        let hex = Self::shape(side);

        svg.set_size(hex_width * 3.0 + side * 3.0, hex_height * 6.0);

        tile(svg, 6, 6, self.seams(), |cell| {
            // odd columns sit half a hexagon lower
            let dy = if cell.even_x() {
                cell.fy() * hex_height
            } else {
                cell.fy() * hex_height + hex_height / 2.0
            };

            SvgNode::polyline(hex.as_str())
                .with_attributes(&solid(digest.gene(cell.index)))
                .with_transform(&[Transform::Translate(
                    cell.fx() * side * 1.5 - hex_width / 2.0,
                    dy - hex_height / 2.0,
                )])
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hexagon_shape_closes() {
        let shape = Hexagons::shape(10.0);
        let coords: Vec<&str> = shape.split(',').collect();
        assert_eq!(coords.len(), 14);
        assert_eq!(coords[..2], coords[12..]);
        assert_eq!(coords[4], "15");
    }

    #[test]
    fn test_hexagons_canvas() {
        let digest = Digest::of("hello");
        let mut svg = SvgDocument::new();
        Hexagons.generate(&digest, &mut svg);

        let side = remap(10.0, 0.0, 15.0, 8.0, 60.0);
        assert_eq!(svg.width(), (side * 2.0 * 3.0 + side * 3.0).floor() as u32);
        assert_eq!(svg.height(), (side * 3.0_f64.sqrt() * 6.0).floor() as u32);
        assert_eq!(svg.nodes().len(), 49);
    }
}
