//! The design engine: user input in, one fully resolved configuration out.
//!
//! All defaulting happens here, once. Everything downstream reads a
//! [`DesignConfiguration`] whose fields are always present and in range.

use crate::compositor::{Caption, CellTransform, Compositor, Emblem};
use crate::config::EmblemConfig;
use crate::drawing::Drawing;
use crate::hasher::{Digester, HashBackend, HexDigest};
use crate::input::UserInput;
use crate::layout::{self, GridShape};
use crate::motifs::{MotifKind, MotifParams};
use crate::palette::{self, Palette};
use crate::params;
use serde::Serialize;
use std::fmt;

/// Every value needed to draw one emblem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesignConfiguration {
    pub layout: GridShape,
    pub motif_index: usize,
    pub motif: MotifKind,
    pub symmetry: u8,
    pub complexity: u8,
    pub feature1: u8,
    pub feature2: u8,
    pub feature3: u8,
    pub rotation: u16,
    pub scale_percent: u8,
    pub palette: Palette,
    pub footer_text: String,
    pub hash_backend: HashBackend,
    pub digest: HexDigest,
}

impl DesignConfiguration {
    pub fn motif_params(&self) -> MotifParams {
        MotifParams::new(self.complexity, self.feature1, self.feature2, self.feature3)
    }

    pub fn cell_transform(&self) -> CellTransform {
        CellTransform::new(self.rotation, self.scale_percent)
    }

    /// The motif for one cell, before tiling.
    pub fn draw_motif(&self) -> Drawing {
        self.motif.draw(&self.motif_params(), &self.palette)
    }

    pub fn caption(&self) -> Caption {
        Caption::new(self.footer_text.clone(), self.palette.accent)
    }
}

pub struct DesignEngine {
    digester: Box<dyn Digester>,
    footer_text: String,
    layout: Option<String>,
}

impl fmt::Debug for DesignEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DesignEngine")
            .field("backend", &self.backend())
            .field("footer_text", &self.footer_text)
            .field("layout", &self.layout)
            .finish()
    }
}

impl Default for DesignEngine {
    fn default() -> Self {
        Self::from_config(&EmblemConfig::default())
    }
}

impl DesignEngine {
    pub fn new(backend: HashBackend, footer_text: impl Into<String>) -> Self {
        Self {
            digester: backend.digester(),
            footer_text: footer_text.into(),
            layout: None,
        }
    }

    pub fn from_config(config: &EmblemConfig) -> Self {
        Self::new(config.hashing.backend, config.canvas.footer_text.clone())
    }

    /// Use an explicit `RxC` layout instead of deriving it from the
    /// initials. An unparseable string is ignored at design time.
    pub fn with_layout(mut self, layout: Option<String>) -> Self {
        self.layout = layout;
        self
    }

    pub fn backend(&self) -> HashBackend {
        self.digester.backend()
    }

    pub fn design(&self, input: &UserInput) -> DesignConfiguration {
        let digest = self.digester.digest(&input.hash_key());
        let p = params::extract(&digest);
        let layout = layout::resolve_layout(self.layout.as_deref(), input.initials().chars().count());
        let palette = palette::lookup(input.favorite_color().unwrap_or_default());
        let motif = MotifKind::from_index(p.motif_index);

        tracing::debug!(
            backend = self.backend().name(),
            %digest,
            motif = motif.name(),
            complexity = p.complexity,
            %layout,
            "resolved design"
        );

        DesignConfiguration {
            layout,
            motif_index: motif.index(),
            motif,
            symmetry: p.symmetry,
            complexity: p.complexity,
            feature1: p.feature1,
            feature2: p.feature2,
            feature3: p.feature3,
            rotation: p.rotation,
            scale_percent: p.scale_percent,
            palette,
            footer_text: self.footer_text.clone(),
            hash_backend: self.backend(),
            digest,
        }
    }

    pub fn render(&self, design: &DesignConfiguration, compositor: &Compositor) -> Emblem {
        compositor.compose(
            design.layout,
            &design.draw_motif(),
            design.cell_transform(),
            design.caption(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ColorName;

    fn rolling() -> DesignEngine {
        DesignEngine::new(HashBackend::Rolling, "Bionic Metamaterials")
    }

    #[test]
    fn pinned_rolling_design() {
        let input = UserInput::new()
            .with_initials("zs")
            .with_birth_date_str("1990-05-15")
            .with_favorite_color("teal");
        let design = rolling().design(&input);

        assert_eq!(design.motif_index, 2);
        assert_eq!(design.motif, MotifKind::SquareResonator);
        assert_eq!(design.symmetry, 3);
        assert_eq!(design.complexity, 3);
        assert_eq!((design.feature1, design.feature2, design.feature3), (0, 1, 0));
        assert_eq!(design.rotation, 225);
        assert_eq!(design.scale_percent, 100);
        assert_eq!(design.layout, GridShape::new(2, 2));
        assert_eq!(design.palette, ColorName::Blue.palette());
    }

    #[test]
    fn design_is_a_pure_function_of_input() {
        let input = UserInput::new()
            .with_initials("abc")
            .with_birth_date_str("2000-01-01")
            .with_favorite_color("red");
        for backend in [HashBackend::Sha256, HashBackend::Rolling] {
            let engine = DesignEngine::new(backend, "x");
            assert_eq!(engine.design(&input), engine.design(&input));
        }
    }

    #[test]
    fn hobbies_do_not_affect_geometry() {
        let engine = DesignEngine::default();
        let base = UserInput::new().with_birth_date_str("1985-11-02");
        assert_eq!(
            engine.design(&base.clone().with_hobbies("sailing")),
            engine.design(&base.with_hobbies("chess"))
        );
    }

    #[test]
    fn empty_input_still_designs() {
        let design = DesignEngine::default().design(&UserInput::new());
        assert_eq!(design.layout, GridShape::SINGLE);
        assert_eq!(design.palette, Palette::default());
        assert_eq!(design.footer_text, "Bionic Metamaterials");
    }

    #[test]
    fn explicit_layout_wins_when_valid() {
        let input = UserInput::new().with_initials("ab");
        let engine = rolling().with_layout(Some("3x1".into()));
        assert_eq!(engine.design(&input).layout, GridShape::new(3, 1));

        let engine = rolling().with_layout(Some("nonsense".into()));
        assert_eq!(engine.design(&input).layout, GridShape::new(2, 2));
    }

    #[test]
    fn render_tiles_every_cell() {
        let input = UserInput::new()
            .with_initials("abc")
            .with_birth_date_str("1990-05-15");
        let engine = rolling();
        let design = engine.design(&input);
        let emblem = engine.render(&design, &Compositor::default());
        assert_eq!(emblem.cell_count(), 6);
        assert_eq!(emblem.background(), design.palette.secondary);
        assert!(emblem.to_svg().contains("Bionic Metamaterials"));
    }

    #[test]
    fn configuration_serialises_every_field() {
        let design = DesignEngine::default().design(&UserInput::new());
        let json = serde_json::to_value(&design).unwrap();
        for key in [
            "layout",
            "motif_index",
            "motif",
            "symmetry",
            "complexity",
            "feature1",
            "feature2",
            "feature3",
            "rotation",
            "scale_percent",
            "palette",
            "footer_text",
            "hash_backend",
            "digest",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["hash_backend"], "sha256");
    }
}
