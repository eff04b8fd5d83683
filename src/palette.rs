//! Palette - fill/stroke constants and gene remapping
//!
//! Tiles are drawn in a two-tone palette layered over the tinted
//! background; only the background carries real hue.

/// Base color used for background tinting when none is given.
pub const DEFAULT_BASE_COLOR: &str = "#933c3c";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub fill_light: &'static str,
    pub fill_dark: &'static str,
    pub stroke: &'static str,
    pub stroke_opacity: f64,
    pub opacity_min: f64,
    pub opacity_max: f64,
}

impl Palette {
    pub const DEFAULT: Palette = Palette {
        fill_light: "#ddd",
        fill_dark: "#222",
        stroke: "#000",
        stroke_opacity: 0.02,
        opacity_min: 0.02,
        opacity_max: 0.15,
    };

    /// Even genes are light, odd genes dark.
    pub fn fill_color(&self, gene: u32) -> &'static str {
        if gene % 2 == 0 {
            self.fill_light
        } else {
            self.fill_dark
        }
    }

    pub fn fill_opacity(&self, gene: u32) -> f64 {
        remap(f64::from(gene), 0.0, 15.0, self.opacity_min, self.opacity_max)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Linearly re-map `value` from `[from_min, from_max]` onto `[to_min, to_max]`.
pub fn remap(value: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    (value - from_min) * (to_max - to_min) / (from_max - from_min) + to_min
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_remap_midpoint() {
        assert_eq!(remap(7.5, 0.0, 15.0, 10.0, 60.0), 35.0);
        assert_eq!(remap(2.0, 0.0, 4.0, 10.0, 0.0), 5.0);
    }

    #[test]
    fn test_fill_color_parity() {
        let palette = Palette::DEFAULT;
        assert_eq!(palette.fill_color(0), "#ddd");
        assert_eq!(palette.fill_color(7), "#222");
        assert_eq!(palette.fill_color(14), "#ddd");
    }

    #[test]
    fn test_fill_opacity_range() {
        let palette = Palette::default();
        assert_eq!(palette.fill_opacity(0), 0.02);
        assert_eq!(palette.fill_opacity(15), 0.15);
        assert!(palette.fill_opacity(8) > 0.02 && palette.fill_opacity(8) < 0.15);
    }

    proptest! {
        #[test]
        fn prop_remap_hits_bounds(
            from_min in -1000i32..1000,
            span in 1i32..1000,
            to_min in -1000i32..1000,
            to_max in -1000i32..1000,
        ) {
            let from_min = f64::from(from_min);
            let from_max = from_min + f64::from(span);
            let (to_min, to_max) = (f64::from(to_min), f64::from(to_max));
            prop_assert_eq!(remap(from_min, from_min, from_max, to_min, to_max), to_min);
            prop_assert_eq!(remap(from_max, from_min, from_max, to_min, to_max), to_max);
        }
    }
}
