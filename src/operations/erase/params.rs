/// Tunable constants for erasing a region out of a stroke.
///
/// Distances suffixed `_pixels` are in screen pixels and are converted to
/// canvas units with the viewport's pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EraseParams {
    /// Largest allowed ratio between the extent of any discarded portion and
    /// the eraser's own extent. Above it the erase is abandoned.
    pub safety_ratio: f64,
    /// Distance sampled along the eraser boundary when deciding which way it
    /// runs into a filled region.
    pub tangent_sample_pixels: f64,
    /// Highest intersection count handled by mirrored pairing; more crossings
    /// use the planar subtraction.
    pub max_lens_intersections: usize,
    /// Flattening tolerance for the eraser outline.
    pub polyline_tolerance_pixels: f64,
    /// Precision new intersection points are rounded to.
    pub rounding_tolerance_pixels: f64,
}

impl Default for EraseParams {
    fn default() -> Self {
        Self {
            safety_ratio: 2.0,
            tangent_sample_pixels: 0.5,
            max_lens_intersections: 4,
            polyline_tolerance_pixels: 1.0,
            rounding_tolerance_pixels: 0.1,
        }
    }
}

impl EraseParams {
    #[must_use]
    pub fn with_safety_ratio(mut self, ratio: f64) -> Self {
        self.safety_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_max_lens_intersections(mut self, count: usize) -> Self {
        self.max_lens_intersections = count;
        self
    }

    #[must_use]
    pub fn with_rounding_tolerance_pixels(mut self, pixels: f64) -> Self {
        self.rounding_tolerance_pixels = pixels;
        self
    }
}
