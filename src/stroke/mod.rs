mod part;
mod style;

pub use part::StrokePart;
pub use style::{Color, Style, StyleKind};

use std::cell::RefCell;

use crate::error::{OperationError, Result};
use crate::geometry::Rect2;
use crate::math::Point2;

/// Parts kept for rendering at a given visible rectangle and zoom.
#[derive(Debug, Clone)]
struct RenderCache {
    visible: Rect2,
    pixel_size: f64,
    parts: Vec<StrokePart>,
}

/// A drawn shape: an ordered list of parts sharing one z-order.
///
/// Strokes are never mutated after construction; erasing produces new
/// strokes so the originals stay valid for undo.
#[derive(Debug, Clone)]
pub struct Stroke {
    parts: Vec<StrokePart>,
    z_index: u32,
    render_cache: RefCell<Option<RenderCache>>,
}

impl Stroke {
    /// Creates a stroke from its parts.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `parts` is empty.
    pub fn new(parts: Vec<StrokePart>, z_index: u32) -> Result<Self> {
        if parts.is_empty() {
            return Err(OperationError::InvalidInput("stroke needs at least one part".to_owned()).into());
        }
        Ok(Self {
            parts,
            z_index,
            render_cache: RefCell::new(None),
        })
    }

    /// Creates a stroke wrapping a single part.
    #[must_use]
    pub fn from_part(part: StrokePart, z_index: u32) -> Self {
        Self {
            parts: vec![part],
            z_index,
            render_cache: RefCell::new(None),
        }
    }

    #[must_use]
    pub fn parts(&self) -> &[StrokePart] {
        &self.parts
    }

    #[must_use]
    pub fn z_index(&self) -> u32 {
        self.z_index
    }

    /// Union of every part's style-grown bounding box.
    #[must_use]
    pub fn bbox(&self) -> Rect2 {
        self.parts
            .iter()
            .map(StrokePart::bbox)
            .reduce(|acc, b| acc.union(&b))
            .unwrap_or_else(|| Rect2::from_point(Point2::origin()))
    }

    /// Parts worth rendering inside `visible` at the given pixel size.
    ///
    /// Parts outside the rectangle and parts smaller than half a pixel are
    /// dropped. The result is memoized on this instance for the last
    /// rectangle and pixel size.
    #[must_use]
    pub fn simplified_parts(&self, visible: &Rect2, pixel_size: f64) -> Vec<StrokePart> {
        if let Some(cache) = self.render_cache.borrow().as_ref() {
            if cache.visible == *visible && cache.pixel_size.total_cmp(&pixel_size).is_eq() {
                return cache.parts.clone();
            }
        }

        let parts: Vec<StrokePart> = self
            .parts
            .iter()
            .filter(|part| {
                let bbox = part.bbox();
                bbox.intersects(visible) && bbox.max_dimension() >= pixel_size * 0.5
            })
            .cloned()
            .collect();

        *self.render_cache.borrow_mut() = Some(RenderCache {
            visible: *visible,
            pixel_size,
            parts: parts.clone(),
        });
        parts
    }
}

impl PartialEq for Stroke {
    fn eq(&self, other: &Self) -> bool {
        self.z_index == other.z_index && self.parts == other.parts
    }
}
