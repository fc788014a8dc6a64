//! The motif catalogue.
//!
//! Each motif is a pure function of [`MotifParams`] and a [`Palette`] that
//! draws into the 200×200 logical canvas. Complexity drives the structure
//! (branch length, turn count, recursion depth); the three features only
//! decorate it. Recursive motifs cap their depth with a fixed ceiling.

pub mod cross;
pub mod fractal;
pub mod frames;
pub mod mesh;
pub mod rings;
pub mod spiral;

use crate::drawing::Drawing;
use crate::palette::Palette;
use crate::params::{MAX_COMPLEXITY, MAX_FEATURE, MIN_COMPLEXITY};
use serde::Serialize;

/// Number of motifs in the catalogue.
pub const MOTIF_COUNT: usize = 12;

/// Structural complexity and decorative features for one motif draw.
///
/// Values are clamped on construction, so any input draws something sane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MotifParams {
    complexity: u8,
    features: [u8; 3],
}

impl MotifParams {
    pub fn new(complexity: u8, feature1: u8, feature2: u8, feature3: u8) -> Self {
        Self {
            complexity: complexity.clamp(MIN_COMPLEXITY, MAX_COMPLEXITY),
            features: [feature1, feature2, feature3].map(|f| f.min(MAX_FEATURE)),
        }
    }

    pub fn complexity(&self) -> u8 {
        self.complexity
    }

    pub fn f1(&self) -> u8 {
        self.features[0]
    }

    pub fn f2(&self) -> u8 {
        self.features[1]
    }

    pub fn f3(&self) -> u8 {
        self.features[2]
    }

    /// Complexity as a float, for geometry.
    pub(crate) fn c(&self) -> f64 {
        f64::from(self.complexity)
    }

    /// Recursion depth for a motif with the given ceiling.
    pub(crate) fn depth(&self, ceiling: u8) -> u8 {
        self.complexity.min(ceiling)
    }
}

/// Every motif in catalogue order. The index of a variant is its motif
/// index; index 0 is the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotifKind {
    /// Four orthogonal branches with crossbars at their tips.
    #[default]
    SpecialCross,
    /// Square carpet with recursively punched centres.
    SierpinskiCarpet,
    /// Two nested square frames split on opposite sides.
    SquareResonator,
    /// Dense line mesh over a solid cross.
    Fishnet,
    /// Square spiral winding into the centre.
    SquareSpiral,
    /// Concentric squares, each twisted a little further.
    NestedSquares,
    /// Two arc rings opening away from each other.
    OpenRings,
    /// Solid plus-shaped cross.
    GreekCross,
    /// Triangle subdivided into corner triangles.
    SierpinskiTriangle,
    /// Four trunks branching recursively.
    Dendrite,
    /// Concentric circular rings with alternating splits.
    CircularResonator,
    /// Radial rays around a hub ring.
    Starburst,
}

impl MotifKind {
    pub const fn all() -> &'static [Self; MOTIF_COUNT] {
        &[
            Self::SpecialCross,
            Self::SierpinskiCarpet,
            Self::SquareResonator,
            Self::Fishnet,
            Self::SquareSpiral,
            Self::NestedSquares,
            Self::OpenRings,
            Self::GreekCross,
            Self::SierpinskiTriangle,
            Self::Dendrite,
            Self::CircularResonator,
            Self::Starburst,
        ]
    }

    /// Motif at `index`, or the default motif when out of range.
    pub fn from_index(index: usize) -> Self {
        match Self::all().get(index) {
            Some(&kind) => kind,
            None => {
                tracing::debug!(index, "motif index out of range, using default");
                Self::default()
            }
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::SpecialCross => "special-cross",
            Self::SierpinskiCarpet => "sierpinski-carpet",
            Self::SquareResonator => "square-resonator",
            Self::Fishnet => "fishnet",
            Self::SquareSpiral => "square-spiral",
            Self::NestedSquares => "nested-squares",
            Self::OpenRings => "open-rings",
            Self::GreekCross => "greek-cross",
            Self::SierpinskiTriangle => "sierpinski-triangle",
            Self::Dendrite => "dendrite",
            Self::CircularResonator => "circular-resonator",
            Self::Starburst => "starburst",
        }
    }

    /// Parse a motif from its name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|m| m.name() == lower).copied()
    }

    /// Draw this motif.
    pub fn draw(self, params: &MotifParams, palette: &Palette) -> Drawing {
        match self {
            Self::SpecialCross => cross::special_cross(params, palette),
            Self::SierpinskiCarpet => fractal::sierpinski_carpet(params, palette),
            Self::SquareResonator => frames::square_resonator(params, palette),
            Self::Fishnet => mesh::fishnet(params, palette),
            Self::SquareSpiral => spiral::square_spiral(params, palette),
            Self::NestedSquares => frames::nested_squares(params, palette),
            Self::OpenRings => rings::open_rings(params, palette),
            Self::GreekCross => cross::greek_cross(params, palette),
            Self::SierpinskiTriangle => fractal::sierpinski_triangle(params, palette),
            Self::Dendrite => fractal::dendrite(params, palette),
            Self::CircularResonator => rings::circular_resonator(params, palette),
            Self::Starburst => cross::starburst(params, palette),
        }
    }
}

/// Draw the motif at `index`, falling back to the default motif.
pub fn draw(index: usize, params: &MotifParams, palette: &Palette) -> Drawing {
    MotifKind::from_index(index).draw(params, palette)
}
