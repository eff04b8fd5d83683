//! Pattern Engine - Single Entry Point
//!
//! `Pattern::create` hashes the input, paints the tinted background and runs
//! exactly one generator. The finished pattern is read-only.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::color::Rgb;
use crate::error::PatternError;
use crate::generators::GeneratorKind;
use crate::hashing::Digest;
use crate::palette::{remap, DEFAULT_BASE_COLOR};
use crate::svg::{SvgDocument, SvgNode};

/// Caller-supplied knobs. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    /// Color whose hue and saturation are shifted by the digest.
    #[serde(default)]
    pub base_color: Option<String>,
    /// Background color used verbatim, bypassing the shift.
    #[serde(default)]
    pub color: Option<String>,
    /// Catalog name; chosen from the digest when absent.
    #[serde(default)]
    pub generator: Option<String>,
}

impl GenerationOptions {
    pub fn with_base_color(mut self, color: impl Into<String>) -> Self {
        self.base_color = Some(color.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = Some(generator.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct Pattern {
    digest: Digest,
    options: GenerationOptions,
    generator: GeneratorKind,
    background: Rgb,
    svg: SvgDocument,
}

impl Pattern {
    /// Pattern with default options.
    pub fn new(input: &str) -> Result<Self, PatternError> {
        Self::create(input, GenerationOptions::default())
    }

    pub fn create(input: &str, mut options: GenerationOptions) -> Result<Self, PatternError> {
        let base_color = options
            .base_color
            .get_or_insert_with(|| DEFAULT_BASE_COLOR.to_string())
            .clone();

        let digest = Digest::of(input);
        let mut svg = SvgDocument::new();

        let background = Self::tint_background(&digest, &base_color, options.color.as_deref())?;
        let fill = background.to_css();
        svg.add(SvgNode::rect(0, 0, "100%", "100%").with_attributes(&[("fill", fill.into())]));

        let generator = match options.generator.as_deref() {
            Some(name) => name.parse::<GeneratorKind>()?,
            None => {
                let gene = digest.gene(20);
                let kind = GeneratorKind::from_gene(gene);
                trace!(gene, generator = %kind, "generator selected from digest");
                options.generator = Some(kind.name().to_string());
                kind
            }
        };
        generator.generate(&digest, &mut svg);

        debug!(
            %digest,
            %generator,
            width = svg.width(),
            height = svg.height(),
            background = %background,
            "pattern created"
        );

        Ok(Self {
            digest,
            options,
            generator,
            background,
            svg,
        })
    }

    /// Background color: `color` verbatim, or `base_color` rotated in hue
    /// and nudged in saturation by the digest.
    fn tint_background(
        digest: &Digest,
        base_color: &str,
        color: Option<&str>,
    ) -> Result<Rgb, PatternError> {
        let base = Rgb::from_hex(base_color)?;
        if let Some(color) = color {
            return Rgb::from_hex(color);
        }

        let hue_offset = remap(f64::from(digest.extract(14, 3)), 0.0, 4095.0, 0.0, 359.0);
        let sat_offset = digest.extract(17, 1);
        let mut hsl = base.to_hsl();

        let degrees = (hsl.h * 360.0 - hue_offset + 360.0).floor() as i64;
        hsl.h = degrees.rem_euclid(360) as f64 / 360.0;

        let nudge = f64::from(sat_offset);
        hsl.s = if sat_offset % 2 == 0 {
            ((hsl.s * 100.0 + nudge) / 100.0).min(1.0)
        } else {
            ((hsl.s * 100.0 - nudge) / 100.0).max(0.0)
        };

        Ok(hsl.to_rgb())
    }

    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    /// Options as resolved: default base color and chosen generator filled in.
    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub fn generator(&self) -> GeneratorKind {
        self.generator
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn document(&self) -> &SvgDocument {
        &self.svg
    }

    pub fn width(&self) -> u32 {
        self.svg.width()
    }

    pub fn height(&self) -> u32 {
        self.svg.height()
    }

    pub fn to_data_uri(&self) -> String {
        self.svg.to_data_uri()
    }

    /// CSS `url("data:...")`, usable as a `background-image` value.
    pub fn to_data_url(&self) -> String {
        self.svg.to_data_url()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.svg, f)
    }
}
