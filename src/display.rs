//! Display handles handed back to the invoking frontend.

use std::path::{Path, PathBuf};

/// Reference to a converted image the frontend can render inline. The
/// raster/vector split mirrors the two converter call sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayHandle {
    /// PNG produced by the raster conversion.
    Raster(PathBuf),
    /// SVG produced by the vector conversion.
    Vector(PathBuf),
}

impl DisplayHandle {
    pub fn path(&self) -> &Path {
        match self {
            DisplayHandle::Raster(p) | DisplayHandle::Vector(p) => p,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            DisplayHandle::Raster(_) => "image/png",
            DisplayHandle::Vector(_) => "image/svg+xml",
        }
    }
}
