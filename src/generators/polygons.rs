//! Polyline generators: triangles, diamonds and chevrons.

use super::{outlined, solid, tile, Generator, Seams};
use crate::hashing::Digest;
use crate::palette::remap;
use crate::svg::{points, AttrValue, SvgDocument, SvgNode, Transform};

pub struct Triangles;

impl Triangles {
    fn shape(side: f64, height: f64) -> String {
        let half = side / 2.0;
        points(&[half, 0.0, side, height, 0.0, height, half, 0.0])
    }
}

impl Generator for Triangles {
    fn name(&self) -> &'static str {
        "Triangles"
    }

    fn seams(&self) -> Seams {
        Seams::RIGHT
    }

    fn generate(&self, digest: &Digest, svg: &mut SvgDocument) {
        let side = remap(f64::from(digest.gene(0)), 0.0, 15.0, 15.0, 80.0);
        let height = side / 2.0 * 3.0_f64.sqrt();
        let triangle = Self::shape(side, height);

        svg.set_size(side * 3.0, height * 6.0);

        tile(svg, 6, 6, self.seams(), |cell| {
            // neighbours alternate pointing up and down
            let rotation = if cell.even_x() == cell.even_y() { 180.0 } else { 0.0 };

            SvgNode::polyline(triangle.as_str())
                .with_attributes(&solid(digest.gene(cell.index)))
                .with_transform(&[
                    Transform::Translate(cell.fx() * side * 0.5 - side / 2.0, height * cell.fy()),
                    Transform::Rotate(rotation, side / 2.0, height / 2.0),
                ])
        });
    }
}

pub struct Diamonds;

impl Diamonds {
    fn shape(width: f64, height: f64) -> String {
        points(&[
            width / 2.0, 0.0,
            width, height / 2.0,
            width / 2.0, height,
            0.0, height / 2.0,
        ])
    }
}

impl Generator for Diamonds {
    fn name(&self) -> &'static str {
        "Diamonds"
    }

    fn seams(&self) -> Seams {
        Seams::ALL
    }

    fn generate(&self, digest: &Digest, svg: &mut SvgDocument) {
        let width = remap(f64::from(digest.gene(0)), 0.0, 15.0, 10.0, 50.0);
        let height = remap(f64::from(digest.gene(1)), 0.0, 15.0, 10.0, 50.0);
        let diamond = Self::shape(width, height);

        svg.set_size(width * 6.0, height * 3.0);

        tile(svg, 6, 6, self.seams(), |cell| {
            let dx = if cell.even_y() { 0.0 } else { width / 2.0 };

            SvgNode::polyline(diamond.as_str())
                .with_attributes(&solid(digest.gene(cell.index)))
                .with_transform(&[Transform::Translate(
                    cell.fx() * width - width / 2.0 + dx,
                    height / 2.0 * cell.fy() - height / 2.0,
                )])
        });
    }
}

pub struct Chevrons;

impl Chevrons {
    fn shape(width: f64, height: f64) -> [String; 2] {
        let e = height * 0.66;
        [
            points(&[
                0.0, 0.0,
                width / 2.0, height - e,
                width / 2.0, height,
                0.0, e,
                0.0, 0.0,
            ]),
            points(&[
                width / 2.0, height - e,
                width, 0.0,
                width, e,
                width / 2.0, height,
                width / 2.0, height - e,
            ]),
        ]
    }
}

impl Generator for Chevrons {
    fn name(&self) -> &'static str {
        "Chevrons"
    }

    fn seams(&self) -> Seams {
        Seams::BOTTOM
    }

    fn generate(&self, digest: &Digest, svg: &mut SvgDocument) {
        let width = remap(f64::from(digest.gene(0)), 0.0, 15.0, 30.0, 80.0);
        let height = width;
        let [left, right] = Self::shape(width, height);

        svg.set_size(width * 6.0, height * 6.0 * 0.66);

        tile(svg, 6, 6, self.seams(), |cell| {
            let mut style = outlined(digest.gene(cell.index));
            style.push(("stroke-width", AttrValue::Number(1.0)));

            SvgNode::group()
                .with_attributes(&style)
                .with_transform(&[Transform::Translate(
                    cell.fx() * width,
                    cell.fy() * height * 0.66 - height / 2.0,
                )])
                .with_child(SvgNode::polyline(left.as_str()))
                .with_child(SvgNode::polyline(right.as_str()))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(generator: &dyn Generator, input: &str) -> SvgDocument {
        let mut svg = SvgDocument::new();
        generator.generate(&Digest::of(input), &mut svg);
        svg
    }

    fn transform(node: &SvgNode) -> &str {
        node.attribute("transform").and_then(AttrValue::as_text).unwrap()
    }

    #[test]
    fn test_triangles_alternate_rotation() {
        let svg = render(&Triangles, "hello");
        // 36 cells + one right-hand copy per row
        assert_eq!(svg.nodes().len(), 42);

        // cell (0,0), its copy, then cell (1,0)
        assert!(transform(&svg.nodes()[0]).contains("rotate(180,"));
        assert!(transform(&svg.nodes()[1]).contains("rotate(180,"));
        assert!(transform(&svg.nodes()[2]).contains("rotate(0,"));
    }

    #[test]
    fn test_diamonds_use_two_genes_for_size() {
        let digest = Digest::of("hello");
        let svg = render(&Diamonds, "hello");
        let width = remap(f64::from(digest.gene(0)), 0.0, 15.0, 10.0, 50.0);
        let height = remap(f64::from(digest.gene(1)), 0.0, 15.0, 10.0, 50.0);
        assert_eq!(svg.width(), (width * 6.0).floor() as u32);
        assert_eq!(svg.height(), (height * 3.0).floor() as u32);
        assert_eq!(svg.nodes().len(), 49);
    }

    #[test]
    fn test_chevron_groups_hold_two_polylines() {
        let svg = render(&Chevrons, "hello");
        // 36 cells + 6 bottom copies
        assert_eq!(svg.nodes().len(), 42);
        for group in svg.nodes() {
            assert_eq!(group.children().len(), 2);
            assert_eq!(group.attribute("stroke-width").and_then(AttrValue::as_number), Some(1.0));
        }
    }
}
