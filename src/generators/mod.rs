//! Generator Catalog
//!
//! Each generator is a pure function of the digest that sizes the document
//! and fills it with tiles. Generators are looked up through
//! [`GeneratorKind`], a closed catalog whose order matters: the hash picks
//! an entry by position.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PatternError;
use crate::hashing::Digest;
use crate::palette::Palette;
use crate::svg::{AttrValue, SvgDocument, SvgNode};

mod circles;
mod crosses;
mod cubes;
mod hexagons;
mod mosaic;
mod polygons;
mod scales;
mod squares;
mod stripes;
mod tessellation;
mod test_line;

const PALETTE: Palette = Palette::DEFAULT;

/// A tiling algorithm.
pub trait Generator {
    fn name(&self) -> &'static str;

    /// Edge copies emitted around the tile grid. Generators that fit the canvas
    /// exactly keep the default.
    fn seams(&self) -> Seams {
        Seams::NONE
    }

    fn generate(&self, digest: &Digest, svg: &mut SvgDocument);
}

/// The fixed generator catalog, in selection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneratorKind {
    Octogons,
    OverlappingCircles,
    PlusSigns,
    Xes,
    SineWaves,
    Hexagons,
    OverlappingRings,
    Plaid,
    Triangles,
    Squares,
    ConcentricCircles,
    Diamonds,
    Tessellation,
    NestedSquares,
    MosaicSquares,
    Chevrons,
    FishScales,
    WaveFishScales,
    Cubes,
    Test,
}

impl GeneratorKind {
    pub const ALL: [GeneratorKind; 20] = [
        GeneratorKind::Octogons,
        GeneratorKind::OverlappingCircles,
        GeneratorKind::PlusSigns,
        GeneratorKind::Xes,
        GeneratorKind::SineWaves,
        GeneratorKind::Hexagons,
        GeneratorKind::OverlappingRings,
        GeneratorKind::Plaid,
        GeneratorKind::Triangles,
        GeneratorKind::Squares,
        GeneratorKind::ConcentricCircles,
        GeneratorKind::Diamonds,
        GeneratorKind::Tessellation,
        GeneratorKind::NestedSquares,
        GeneratorKind::MosaicSquares,
        GeneratorKind::Chevrons,
        GeneratorKind::FishScales,
        GeneratorKind::WaveFishScales,
        GeneratorKind::Cubes,
        GeneratorKind::Test,
    ];

    /// Catalog entry for a selection gene. Indices wrap around the catalog,
    /// so a single hex gene only ever reaches the first 16 entries.
    pub fn from_gene(gene: u32) -> Self {
        Self::ALL[gene as usize % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        self.implementation().name()
    }

    pub fn implementation(self) -> &'static dyn Generator {
        match self {
            GeneratorKind::Octogons => &squares::Octogons,
            GeneratorKind::OverlappingCircles => &circles::OverlappingCircles,
            GeneratorKind::PlusSigns => &crosses::PlusSigns,
            GeneratorKind::Xes => &crosses::Xes,
            GeneratorKind::SineWaves => &stripes::SineWaves,
            GeneratorKind::Hexagons => &hexagons::Hexagons,
            GeneratorKind::OverlappingRings => &circles::OverlappingRings,
            GeneratorKind::Plaid => &stripes::Plaid,
            GeneratorKind::Triangles => &polygons::Triangles,
            GeneratorKind::Squares => &squares::Squares,
            GeneratorKind::ConcentricCircles => &circles::ConcentricCircles,
            GeneratorKind::Diamonds => &polygons::Diamonds,
            GeneratorKind::Tessellation => &tessellation::Tessellation,
            GeneratorKind::NestedSquares => &squares::NestedSquares,
            GeneratorKind::MosaicSquares => &mosaic::MosaicSquares,
            GeneratorKind::Chevrons => &polygons::Chevrons,
            GeneratorKind::FishScales => &scales::FishScales,
            GeneratorKind::WaveFishScales => &scales::WaveFishScales,
            GeneratorKind::Cubes => &cubes::Cubes,
            GeneratorKind::Test => &test_line::Test,
        }
    }

    pub fn generate(self, digest: &Digest, svg: &mut SvgDocument) {
        self.implementation().generate(digest, svg);
    }

    /// Which edge copies this generator emits for seamless repetition.
    pub fn seams(self) -> Seams {
        self.implementation().seams()
    }
}

impl FromStr for GeneratorKind {
    type Err = PatternError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| PatternError::InvalidGenerator(name.to_string()))
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// --- Tiling ---

/// Edge copies emitted around a grid so the tile repeats without gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seams {
    /// Column 0 repeated one grid-width to the right.
    pub right: bool,
    /// Row 0 repeated one grid-height below.
    pub bottom: bool,
    /// Cell (0, 0) repeated at the far corner. Needs `right` and `bottom`.
    pub corner: bool,
    /// Last row repeated one row above row 0.
    pub top: bool,
}

impl Seams {
    pub const NONE: Seams = Seams {
        right: false,
        bottom: false,
        corner: false,
        top: false,
    };
    pub const RIGHT: Seams = Seams {
        right: true,
        ..Seams::NONE
    };
    pub const BOTTOM: Seams = Seams {
        bottom: true,
        ..Seams::NONE
    };
    pub const ALL: Seams = Seams {
        right: true,
        bottom: true,
        corner: true,
        top: false,
    };
}

/// A placement on the grid. `x`/`y` may lie outside the grid for edge
/// copies; `index` always names the source cell's gene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cell {
    pub index: usize,
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn fx(&self) -> f64 {
        f64::from(self.x)
    }

    pub fn fy(&self) -> f64 {
        f64::from(self.y)
    }

    pub fn even_x(&self) -> bool {
        self.x.rem_euclid(2) == 0
    }

    pub fn even_y(&self) -> bool {
        self.y.rem_euclid(2) == 0
    }
}

/// Cells of a `cols` x `rows` grid, row by row.
pub(crate) fn grid(cols: i32, rows: i32) -> impl Iterator<Item = Cell> {
    (0..rows)
        .flat_map(move |y| (0..cols).map(move |x| (x, y)))
        .enumerate()
        .map(|(index, (x, y))| Cell { index, x, y })
}

/// Walk a `cols` x `rows` grid, drawing every cell with `draw` and
/// repeating edge cells as `seams` requests.
pub(crate) fn tile<F>(svg: &mut SvgDocument, cols: i32, rows: i32, seams: Seams, mut draw: F)
where
    F: FnMut(Cell) -> SvgNode,
{
    for cell in grid(cols, rows) {
        let mut place = |x, y| svg.add(draw(Cell { x, y, ..cell }));

        place(cell.x, cell.y);
        if seams.right && cell.x == 0 {
            place(cols, cell.y);
        }
        if seams.bottom && cell.y == 0 {
            place(cell.x, rows);
        }
        if seams.top && cell.y == rows - 1 {
            place(cell.x, -1);
        }
        if seams.corner && cell.x == 0 && cell.y == 0 {
            place(cols, rows);
        }
    }
}

// --- Styles ---

pub(crate) type Style = Vec<(&'static str, AttrValue)>;

/// Translucent fill with a faint outline.
pub(crate) fn solid(gene: u32) -> Style {
    vec![
        ("fill", PALETTE.fill_color(gene).into()),
        ("fill-opacity", PALETTE.fill_opacity(gene).into()),
        ("stroke", PALETTE.stroke.into()),
        ("stroke-opacity", PALETTE.stroke_opacity.into()),
    ]
}

/// Outline first, then translucent fill.
pub(crate) fn outlined(gene: u32) -> Style {
    vec![
        ("stroke", PALETTE.stroke.into()),
        ("stroke-opacity", PALETTE.stroke_opacity.into()),
        ("fill", PALETTE.fill_color(gene).into()),
        ("fill-opacity", PALETTE.fill_opacity(gene).into()),
    ]
}

/// Unfilled shape stroked in the gene's tone.
pub(crate) fn ring(gene: u32, stroke_width: f64) -> Style {
    vec![
        ("fill", "none".into()),
        ("stroke", PALETTE.fill_color(gene).into()),
        ("opacity", PALETTE.fill_opacity(gene).into()),
        ("stroke-width", format!("{}px", crate::svg::Num(stroke_width)).into()),
    ]
}

/// Fill with whole-element opacity and no stroke.
pub(crate) fn flat(gene: u32) -> Style {
    vec![
        ("fill", PALETTE.fill_color(gene).into()),
        ("opacity", PALETTE.fill_opacity(gene).into()),
    ]
}

/// Tone, outline, then fill opacity. Used by plus signs.
pub(crate) fn toned(gene: u32) -> Style {
    vec![
        ("fill", PALETTE.fill_color(gene).into()),
        ("stroke", PALETTE.stroke.into()),
        ("stroke-opacity", PALETTE.stroke_opacity.into()),
        ("fill-opacity", PALETTE.fill_opacity(gene).into()),
    ]
}

/// Outline, then fill opacity before tone. Used by mosaic triangles.
pub(crate) fn tiled(gene: u32) -> Style {
    vec![
        ("stroke", PALETTE.stroke.into()),
        ("stroke-opacity", PALETTE.stroke_opacity.into()),
        ("fill-opacity", PALETTE.fill_opacity(gene).into()),
        ("fill", PALETTE.fill_color(gene).into()),
    ]
}

/// Whole-element opacity, then tone. Used by plaid stripes.
pub(crate) fn banded(gene: u32) -> Style {
    vec![
        ("opacity", PALETTE.fill_opacity(gene).into()),
        ("fill", PALETTE.fill_color(gene).into()),
    ]
}
