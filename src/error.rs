//! Error types for the parts of Emblem that can actually fail.
//!
//! The design pipeline is total; only layout-string parsing and the export
//! layer return errors.

use std::path::PathBuf;

/// Result type for fallible Emblem operations.
pub type Result<T> = std::result::Result<T, EmblemError>;

/// Errors from parsing an explicit `RxC` layout string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout '{0}' is not of the form RxC")]
    Malformed(String),

    #[error("layout dimension {0} is outside 1..={max}", max = crate::layout::MAX_GRID_DIM)]
    OutOfRange(u32),
}

/// Errors surfaced by the export layer.
#[derive(Debug, thiserror::Error)]
pub enum EmblemError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("SVG could not be parsed for rasterising: {0}")]
    Svg(String),

    #[error("raster surface could not be allocated: {0}")]
    Raster(String),

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::GridShape;

    fn parse(s: &str) -> Result<GridShape> {
        Ok(s.parse::<GridShape>()?)
    }

    #[test]
    fn layout_errors_convert_and_keep_their_message() {
        let err = parse("9x2").unwrap_err();
        assert!(matches!(err, EmblemError::Layout(LayoutError::OutOfRange(9))));
        assert_eq!(err.to_string(), "layout dimension 9 is outside 1..=8");
    }

    #[test]
    fn io_errors_name_the_path() {
        let err = EmblemError::Io {
            path: PathBuf::from("out/AB.png"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to write out/AB.png: denied");
    }
}
