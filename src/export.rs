//! Writing emblems to disk.
//!
//! Each output format is a [`Renderer`]. Export is best effort: a format
//! that fails is logged and reported, and the remaining formats are still
//! written.

use crate::compositor::Emblem;
use crate::config::OutputConfig;
use crate::error::{EmblemError, Result};
use resvg::{tiny_skia, usvg};
use std::fs;
use std::path::{Path, PathBuf};

/// Trait for all output formats.
pub trait Renderer {
    /// Name of this format.
    fn name(&self) -> &'static str;

    /// File extension for this format's output.
    fn extension(&self) -> &'static str;

    /// Encode the emblem.
    fn render(&self, emblem: &Emblem) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl Renderer for SvgRenderer {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn extension(&self) -> &'static str {
        "svg"
    }

    fn render(&self, emblem: &Emblem) -> Result<Vec<u8>> {
        Ok(emblem.to_svg().into_bytes())
    }
}

/// Rasterises the SVG with resvg.
#[derive(Debug, Clone, Copy)]
pub struct PngRenderer {
    pub pixel_ratio: f32,
}

impl Default for PngRenderer {
    fn default() -> Self {
        Self { pixel_ratio: 3.0 }
    }
}

impl PngRenderer {
    pub fn new(pixel_ratio: f32) -> Self {
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            tracing::warn!(pixel_ratio, "invalid pixel ratio, using 1");
            1.0
        };
        Self { pixel_ratio }
    }

    /// Rasterise an SVG document to PNG bytes.
    pub fn rasterize(&self, svg: &str) -> Result<Vec<u8>> {
        let mut opt = usvg::Options::default();
        opt.fontdb_mut().load_system_fonts();

        let tree = usvg::Tree::from_str(svg, &opt).map_err(|e| EmblemError::Svg(e.to_string()))?;
        let size = tree
            .size()
            .to_int_size()
            .scale_by(self.pixel_ratio)
            .ok_or_else(|| EmblemError::Raster(format!("cannot scale by {}", self.pixel_ratio)))?;

        let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
            EmblemError::Raster(format!("{}x{} pixmap", size.width(), size.height()))
        })?;

        let transform = tiny_skia::Transform::from_scale(self.pixel_ratio, self.pixel_ratio);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        pixmap
            .encode_png()
            .map_err(|e| EmblemError::Encode(e.to_string()))
    }
}

impl Renderer for PngRenderer {
    fn name(&self) -> &'static str {
        "png"
    }

    fn extension(&self) -> &'static str {
        "png"
    }

    fn render(&self, emblem: &Emblem) -> Result<Vec<u8>> {
        self.rasterize(&emblem.to_svg())
    }
}

/// Formats known to the exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Svg,
    Png,
}

impl ExportFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "svg" => Some(Self::Svg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    pub fn renderer(self, pixel_ratio: f32) -> Box<dyn Renderer> {
        match self {
            Self::Svg => Box::new(SvgRenderer),
            Self::Png => Box::new(PngRenderer::new(pixel_ratio)),
        }
    }
}

/// File name for an emblem: the initials, or `emblem` when there are none.
pub fn export_file_name(initials: &str, extension: &str) -> String {
    let stem: String = initials.chars().filter(|c| c.is_alphanumeric()).collect();
    if stem.is_empty() {
        format!("emblem.{extension}")
    } else {
        format!("{stem}.{extension}")
    }
}

/// Outcome of writing one format.
#[derive(Debug)]
pub struct ExportReport {
    pub format: &'static str,
    pub result: Result<PathBuf>,
}

impl ExportReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

pub struct Exporter {
    directory: PathBuf,
    renderers: Vec<Box<dyn Renderer>>,
}

impl Exporter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            renderers: Vec::new(),
        }
    }

    /// Exporter for the formats named in `config`; unknown names are skipped.
    pub fn from_config(config: &OutputConfig) -> Self {
        let formats: Vec<ExportFormat> = config
            .formats
            .iter()
            .filter_map(|name| {
                let format = ExportFormat::from_name(name);
                if format.is_none() {
                    tracing::warn!(format = %name, "unknown export format, skipping");
                }
                format
            })
            .collect();
        Self::new(&config.directory).with_formats(&formats, config.pixel_ratio)
    }

    pub fn with_formats(mut self, formats: &[ExportFormat], pixel_ratio: f32) -> Self {
        for &format in formats {
            self = self.with_renderer(format.renderer(pixel_ratio));
        }
        self
    }

    pub fn with_renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderers.push(renderer);
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Write `emblem` in every configured format.
    pub fn export_all(&self, emblem: &Emblem, initials: &str) -> Vec<ExportReport> {
        self.renderers
            .iter()
            .map(|renderer| {
                let result = self.export_one(renderer.as_ref(), emblem, initials);
                if let Err(err) = &result {
                    tracing::warn!(format = renderer.name(), %err, "export failed");
                }
                ExportReport {
                    format: renderer.name(),
                    result,
                }
            })
            .collect()
    }

    fn export_one(&self, renderer: &dyn Renderer, emblem: &Emblem, initials: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.directory).map_err(|source| EmblemError::Io {
            path: self.directory.clone(),
            source,
        })?;

        let bytes = renderer.render(emblem)?;
        let path = self
            .directory
            .join(export_file_name(initials, renderer.extension()));
        fs::write(&path, bytes).map_err(|source| EmblemError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), "wrote {}", renderer.name());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compositor::Compositor;
    use crate::design::DesignEngine;
    use crate::input::UserInput;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    fn sample_emblem() -> Emblem {
        let engine = DesignEngine::default();
        let design = engine.design(&UserInput::new().with_initials("ab"));
        engine.render(&design, &Compositor::default())
    }

    struct Failing;

    impl Renderer for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn extension(&self) -> &'static str {
            "bin"
        }

        fn render(&self, _emblem: &Emblem) -> Result<Vec<u8>> {
            Err(EmblemError::Encode("always fails".into()))
        }
    }

    #[test]
    fn file_names_use_initials() {
        assert_eq!(export_file_name("ZS", "png"), "ZS.png");
        assert_eq!(export_file_name("", "svg"), "emblem.svg");
        assert_eq!(export_file_name("../", "svg"), "emblem.svg");
    }

    #[test]
    fn format_names_parse() {
        assert_eq!(ExportFormat::from_name(" PNG "), Some(ExportFormat::Png));
        assert_eq!(ExportFormat::from_name("gif"), None);
    }

    #[test]
    fn png_has_scaled_dimensions() {
        let png = PngRenderer::new(0.5).render(&sample_emblem()).unwrap();
        assert!(png.starts_with(PNG_MAGIC));
        // IHDR width and height follow the 8-byte magic and 8-byte chunk header.
        let width = u32::from_be_bytes(png[16..20].try_into().unwrap());
        let height = u32::from_be_bytes(png[20..24].try_into().unwrap());
        assert_eq!((width, height), (300, 324));
    }

    #[test]
    fn broken_svg_is_an_error() {
        let err = PngRenderer::default().rasterize("<svg").unwrap_err();
        assert!(matches!(err, EmblemError::Svg(_)));
    }

    #[test]
    fn export_writes_every_format() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path()).with_formats(&[ExportFormat::Svg, ExportFormat::Png], 0.25);
        let reports = exporter.export_all(&sample_emblem(), "AB");

        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(ExportReport::is_ok));
        assert!(dir.path().join("AB.svg").exists());
        assert!(dir.path().join("AB.png").exists());
    }

    #[test]
    fn one_failure_does_not_stop_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path())
            .with_renderer(Box::new(Failing))
            .with_renderer(Box::new(SvgRenderer));
        let reports = exporter.export_all(&sample_emblem(), "");

        assert!(!reports[0].is_ok());
        assert!(reports[1].is_ok());
        assert!(dir.path().join("emblem.svg").exists());
        assert!(!dir.path().join("emblem.bin").exists());
    }

    #[test]
    fn config_skips_unknown_formats() {
        let config = OutputConfig {
            formats: vec!["svg".into(), "gif".into()],
            ..OutputConfig::default()
        };
        assert_eq!(Exporter::from_config(&config).renderers.len(), 1);
    }
}
