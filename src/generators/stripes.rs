//! Linear generators: plaid stripes and stacked sine waves. Neither uses a
//! cell grid, so neither needs edge copies.

use super::{banded, ring, Generator};
use crate::hashing::{Digest, DIGEST_LEN};
use crate::palette::remap;
use crate::svg::{Num, SvgDocument, SvgNode, Transform};

pub struct Plaid;

impl Plaid {
    /// Walk the digest in (gap, thickness) gene pairs, returning each
    /// stripe's offset, thickness and tone gene plus the total extent.
    fn stripes(digest: &Digest) -> (Vec<(f64, f64, u32)>, f64) {
        let mut extent = 0.0;
        let stripes = (0..DIGEST_LEN)
            .step_by(2)
            .map(|i| {
                extent += f64::from(digest.gene(i) + 5);
                let tone = digest.gene(i + 1);
                let thickness = f64::from(tone + 5);
                let stripe = (extent, thickness, tone);
                extent += thickness;
                stripe
            })
            .collect();
        (stripes, extent)
    }
}

impl Generator for Plaid {
    fn name(&self) -> &'static str {
        "Plaid"
    }

    fn generate(&self, digest: &Digest, svg: &mut SvgDocument) {
        let (stripes, extent) = Self::stripes(digest);

        for &(offset, thickness, tone) in &stripes {
            let stripe = SvgNode::rect(0.0, offset, "100%", thickness);
            svg.add(stripe.with_attributes(&banded(tone)));
        }
        for &(offset, thickness, tone) in &stripes {
            let stripe = SvgNode::rect(offset, 0.0, thickness, "100%");
            svg.add(stripe.with_attributes(&banded(tone)));
        }

        svg.set_size(extent, extent);
    }
}

pub struct SineWaves;

impl SineWaves {
    fn wave(period: f64, amplitude: f64) -> String {
        let x_offset = period / 4.0 * 0.7;
        format!(
            "M0 {a} C {} 0, {} 0, {} {a} S {} {}, {} {a} S {} 0, {}, {a}",
            Num(x_offset),
            Num(period / 2.0 - x_offset),
            Num(period / 2.0),
            Num(period - x_offset),
            Num(amplitude * 2.0),
            Num(period),
            Num(period * 1.5 - x_offset),
            Num(period * 1.5),
            a = Num(amplitude),
        )
    }
}

impl Generator for SineWaves {
    fn name(&self) -> &'static str {
        "SineWaves"
    }

    fn generate(&self, digest: &Digest, svg: &mut SvgDocument) {
        let period = remap(f64::from(digest.gene(0)), 0.0, 15.0, 100.0, 400.0).floor();
        let amplitude = remap(f64::from(digest.gene(1)), 0.0, 15.0, 30.0, 100.0).floor();
        let wave_width = remap(f64::from(digest.gene(2)), 0.0, 15.0, 3.0, 30.0).floor();
        let wave = Self::wave(period, amplitude);

        svg.set_size(period, wave_width * 32.0);

        for i in 0..96 {
            let tone = digest.gene(i % 32);
            svg.add(
                SvgNode::path(wave.as_str())
                    .with_attributes(&ring(tone, wave_width))
                    .with_transform(&[Transform::Translate(
                        -period / 4.0,
                        -wave_width * 16.0 + wave_width * i as f64 - amplitude * 1.5,
                    )]),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::AttrValue;

    #[test]
    fn test_plaid_walks_whole_digest() {
        let digest = Digest::of("hello");
        let (stripes, extent) = Plaid::stripes(&digest);
        assert_eq!(stripes.len(), 20);

        let expected: u32 = (0..DIGEST_LEN).map(|i| digest.gene(i) + 5).sum();
        assert_eq!(extent, f64::from(expected));

        let (offset, thickness, tone) = stripes[0];
        assert_eq!(offset, f64::from(digest.gene(0) + 5));
        assert_eq!(thickness, f64::from(digest.gene(1) + 5));
        assert_eq!(tone, digest.gene(1));
    }

    #[test]
    fn test_plaid_document() {
        let digest = Digest::of("hello");
        let mut svg = SvgDocument::new();
        Plaid.generate(&digest, &mut svg);

        assert_eq!(svg.nodes().len(), 40);
        assert_eq!(svg.width(), svg.height());
        let first = &svg.nodes()[0];
        assert_eq!(first.attribute("width").and_then(AttrValue::as_text), Some("100%"));
        let last = &svg.nodes()[39];
        assert_eq!(last.attribute("height").and_then(AttrValue::as_text), Some("100%"));
    }

    #[test]
    fn test_sine_wave_path() {
        assert_eq!(
            SineWaves::wave(200.0, 50.0),
            "M0 50 C 35 0, 65 0, 100 50 S 165 100, 200 50 S 265 0, 300, 50"
        );
    }

    #[test]
    fn test_sine_waves_stack() {
        let digest = Digest::of("hello");
        let mut svg = SvgDocument::new();
        SineWaves.generate(&digest, &mut svg);

        assert_eq!(svg.nodes().len(), 96);
        let period = remap(10.0, 0.0, 15.0, 100.0, 400.0).floor();
        assert_eq!(svg.width(), period as u32);
    }

    #[test]
    fn test_plaid_stripe_attribute_order() {
        let mut svg = SvgDocument::new();
        Plaid.generate(&Digest::of("hello"), &mut svg);
        for node in svg.nodes() {
            let keys: Vec<_> = node.attributes().iter().map(|(k, _)| k.as_str()).collect();
            assert_eq!(keys, ["x", "y", "width", "height", "opacity", "fill"]);
        }
    }
}
