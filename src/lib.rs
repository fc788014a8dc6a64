//! Emblem - deterministic geometric emblems from personal inputs.
//!
//! A birth date is hashed into a handful of design parameters that pick one
//! of twelve procedural motifs and shape it. The initials pick the grid the
//! motif is tiled on, and the favourite colour picks the palette. The same
//! input always gives the same emblem.

pub mod compositor;
pub mod config;
pub mod design;
pub mod drawing;
pub mod error;
pub mod export;
pub mod hasher;
pub mod input;
pub mod layout;
pub mod motifs;
pub mod palette;
pub mod params;

pub use compositor::{CellTransform, Compositor, CompositorSettings, Emblem};
pub use config::EmblemConfig;
pub use design::{DesignConfiguration, DesignEngine};
pub use error::{EmblemError, LayoutError, Result};
pub use export::{ExportFormat, Exporter, Renderer};
pub use hasher::{Digester, HashBackend, HexDigest};
pub use input::UserInput;
pub use layout::GridShape;
pub use motifs::{MotifKind, MotifParams};
pub use palette::Palette;
