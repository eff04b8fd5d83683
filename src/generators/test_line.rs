//! Single-stroke diagnostic generator, reachable only by name.

use super::{Generator, PALETTE};
use crate::hashing::Digest;
use crate::palette::remap;
use crate::svg::{AttrValue, Num, SvgDocument, SvgNode};

/// Diagnostic pattern: one thick diagonal stroke across the canvas.
pub struct Test;

impl Generator for Test {
    fn name(&self) -> &'static str {
        "Test"
    }

    fn generate(&self, digest: &Digest, svg: &mut SvgDocument) {
        let size = remap(f64::from(digest.gene(0)), 0.0, 15.0, 25.0, 200.0);
        svg.set_size(size, size);

        let tone = digest.gene(8);
        svg.add(
            SvgNode::polyline(format!("0,0 {s},{s}", s = Num(size))).with_attributes(&[
                ("stroke", PALETTE.stroke.into()),
                ("stroke-opacity", PALETTE.stroke_opacity.into()),
                ("stroke-width", AttrValue::Number(40.0)),
                ("fill", PALETTE.fill_color(tone).into()),
                ("fill-opacity", PALETTE.fill_opacity(tone).into()),
            ]),
        );
    }
}
