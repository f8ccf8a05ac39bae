use crate::geometry::{Path, Rect2};

use super::style::{Style, StyleKind};

/// One homogeneously styled path piece of a drawn shape.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePart {
    pub path: Path,
    pub style: Style,
}

impl StrokePart {
    #[must_use]
    pub fn new(path: Path, style: Style) -> Self {
        Self { path, style }
    }

    /// Path bounding box grown by half the stroke width for outlines.
    #[must_use]
    pub fn bbox(&self) -> Rect2 {
        self.path.exact_bbox().grown_by(self.style.bbox_growth())
    }

    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.style.kind() == StyleKind::Fill
    }

    /// A filled part with fewer than two non-degenerate commands draws
    /// nothing once closed.
    #[must_use]
    pub fn is_visually_empty(&self) -> bool {
        let drawn = self
            .path
            .segments()
            .filter(|seg| !seg.is_degenerate())
            .count();
        drawn < 2
    }

    /// Returns a part with the same style and a new path.
    #[must_use]
    pub fn with_path(&self, path: Path) -> Self {
        Self {
            path,
            style: self.style,
        }
    }
}
