//! Hexagonal tessellation of squares and triangles.
//!
//! One repeat unit is assembled from 20 hand-placed pieces, each toned by
//! its own gene. Pieces on the boundary are drawn on every edge they touch,
//! so the unit repeats without extra copies.

use super::{outlined, Generator, Style};
use crate::hashing::Digest;
use crate::palette::remap;
use crate::svg::{points, AttrValue, SvgDocument, SvgNode, Transform};

pub struct Tessellation;

/// Derived measurements of one repeat unit.
struct Unit {
    side: f64,
    hex_height: f64,
    hex_width: f64,
    triangle_height: f64,
    width: f64,
    height: f64,
    triangle: String,
}

impl Unit {
    fn new(side: f64) -> Self {
        let triangle_height = side / 2.0 * 3.0_f64.sqrt();
        let hex_height = side * 3.0_f64.sqrt();
        Self {
            side,
            hex_height,
            hex_width: side * 2.0,
            triangle_height,
            width: side * 3.0 + triangle_height * 2.0,
            height: hex_height * 2.0 + side * 2.0,
            triangle: points(&[0.0, 0.0, triangle_height, side / 2.0, 0.0, side, 0.0, 0.0]),
        }
    }

    fn square(&self, x: f64, y: f64) -> SvgNode {
        SvgNode::rect(x, y, self.side, self.side)
    }

    /// A square at the origin moved into place by `placement`.
    fn placed_square(&self, placement: &[Transform]) -> SvgNode {
        SvgNode::rect(0, 0, self.side, self.side).with_transform(placement)
    }

    fn placed_triangle(&self, placement: &[Transform]) -> SvgNode {
        SvgNode::polyline(self.triangle.as_str()).with_transform(placement)
    }

    /// Pieces for step `step` of the 20-step layout.
    fn pieces(&self, step: usize) -> Vec<SvgNode> {
        use Transform::{Rotate, Scale, Translate};

        let s = self.side;
        let half = s / 2.0;
        let (w, h) = (self.width, self.height);
        let th = self.triangle_height;
        let pivot = Rotate(0.0, half, th / 2.0);

        match step {
            // corners
            0 => vec![
                self.square(-half, -half),
                self.square(w - half, -half),
                self.square(-half, h - half),
                self.square(w - half, h - half),
            ],
            // centre top square
            1 => vec![self.square(self.hex_width / 2.0 + th, self.hex_height / 2.0)],
            // side squares
            2 => vec![
                self.square(-half, h / 2.0 - half),
                self.square(w - half, h / 2.0 - half),
            ],
            // centre bottom square
            3 => vec![self.square(self.hex_width / 2.0 + th, self.hex_height * 1.5 + s)],
            // left top and bottom triangles
            4 => vec![
                self.placed_triangle(&[Translate(half, -half), pivot]),
                self.placed_triangle(&[Translate(half, h + half), pivot, Scale(1.0, -1.0)]),
            ],
            // right top and bottom triangles
            5 => vec![
                self.placed_triangle(&[Translate(w - half, -half), pivot, Scale(-1.0, 1.0)]),
                self.placed_triangle(&[Translate(w - half, h + half), pivot, Scale(-1.0, -1.0)]),
            ],
            // centre top right triangle
            6 => vec![self.placed_triangle(&[Translate(w / 2.0 + half, self.hex_height / 2.0)])],
            // centre top left triangle
            7 => vec![self.placed_triangle(&[
                Translate(-half, self.hex_height / 2.0),
                Scale(-1.0, 1.0),
            ])],
            // centre bottom right triangle
            8 => vec![self.placed_triangle(&[
                Translate(w / 2.0 + half, h - self.hex_height / 2.0),
                Scale(1.0, -1.0),
            ])],
            // centre bottom left triangle
            9 => vec![self.placed_triangle(&[
                Translate(w - w / 2.0 - half, h - self.hex_height / 2.0),
                Scale(-1.0, -1.0),
            ])],
            // left middle triangle
            10 => vec![self.placed_triangle(&[Translate(half, h / 2.0 - half)])],
            // right middle triangle
            11 => vec![self.placed_triangle(&[
                Translate(w - half, h / 2.0 - half),
                Scale(-1.0, 1.0),
            ])],
            // left top square
            12 => vec![self.placed_square(&[Translate(half, half), Rotate(-30.0, 0.0, 0.0)])],
            // right top square
            13 => vec![self.placed_square(&[
                Scale(-1.0, 1.0),
                Translate(-w + half, half),
                Rotate(-30.0, 0.0, 0.0),
            ])],
            // left centre-top square
            14 => vec![self.placed_square(&[
                Translate(half, h / 2.0 - half - s),
                Rotate(30.0, 0.0, s),
            ])],
            // right centre-top square
            15 => vec![self.placed_square(&[
                Scale(-1.0, 1.0),
                Translate(-w + half, h / 2.0 - half - s),
                Rotate(30.0, 0.0, s),
            ])],
            // left centre-bottom square
            16 => vec![self.placed_square(&[
                Scale(1.0, -1.0),
                Translate(half, -h + h / 2.0 - half - s),
                Rotate(30.0, 0.0, s),
            ])],
            // right centre-bottom square
            17 => vec![self.placed_square(&[
                Scale(-1.0, -1.0),
                Translate(-w + half, -h + h / 2.0 - half - s),
                Rotate(30.0, 0.0, s),
            ])],
            // left bottom square
            18 => vec![self.placed_square(&[
                Scale(1.0, -1.0),
                Translate(half, -h + half),
                Rotate(-30.0, 0.0, 0.0),
            ])],
            // right bottom square
            19 => vec![self.placed_square(&[
                Scale(-1.0, -1.0),
                Translate(-w + half, -h + half),
                Rotate(-30.0, 0.0, 0.0),
            ])],
            _ => Vec::new(),
        }
    }
}

impl Generator for Tessellation {
    fn name(&self) -> &'static str {
        "Tessellation"
    }

    fn generate(&self, digest: &Digest, svg: &mut SvgDocument) {
        let side = remap(f64::from(digest.gene(0)), 0.0, 15.0, 5.0, 40.0);
        let unit = Unit::new(side);

        svg.set_size(unit.width, unit.height);

        for step in 0..20 {
            let mut style: Style = outlined(digest.gene(step));
            style.push(("stroke-width", AttrValue::Number(1.0)));

            for piece in unit.pieces(step) {
                svg.add(piece.with_attributes(&style));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::Tag;

    #[test]
    fn test_piece_counts() {
        let unit = Unit::new(20.0);
        let counts: Vec<_> = (0..20).map(|step| unit.pieces(step).len()).collect();
        assert_eq!(counts, [4, 1, 2, 1, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]);
        assert!(unit.pieces(20).is_empty());
    }

    #[test]
    fn test_corner_squares_straddle_edges() {
        let unit = Unit::new(20.0);
        let corners = unit.pieces(0);
        let x = |n: &SvgNode| n.attribute("x").and_then(AttrValue::as_number).unwrap();
        assert_eq!(x(&corners[0]), -10.0);
        assert_eq!(x(&corners[1]), unit.width - 10.0);
    }

    #[test]
    fn test_tessellation_document() {
        let digest = Digest::of("hello");
        let mut svg = SvgDocument::new();
        Tessellation.generate(&digest, &mut svg);

        assert_eq!(svg.nodes().len(), 26);
        assert!(svg
            .nodes()
            .iter()
            .all(|n| matches!(n.tag(), Tag::Rect | Tag::Polyline)));
        assert!(svg.nodes().iter().all(|n| n.attribute("stroke-width").is_some()));
    }
}
