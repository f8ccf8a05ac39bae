use crate::error::{Result, StyleError};

/// An RGBA color with every channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Creates a new color.
    ///
    /// # Errors
    ///
    /// Returns `StyleError::AlphaOutOfRange` if `a` is outside `[0, 1]`, or
    /// `StyleError::ChannelOutOfRange` for an invalid color channel.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&a) {
            return Err(StyleError::AlphaOutOfRange(a).into());
        }
        for (channel, value) in [("r", r), ("g", g), ("b", b)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(StyleError::ChannelOutOfRange { channel, value }.into());
            }
        }
        Ok(Self { r, g, b, a })
    }

    #[must_use]
    pub fn r(&self) -> f64 {
        self.r
    }

    #[must_use]
    pub fn g(&self) -> f64 {
        self.g
    }

    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Returns the alpha channel.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.a
    }
}

/// Which of the two style variants applies to a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKind {
    Fill,
    Stroke,
}

/// Rendering style of a fragment: a fill or an outline stroke.
///
/// Only built through [`Style::fill`] and [`Style::stroke`], so a stroke
/// width is always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    kind: StyleKind,
    color: Color,
    width: f64,
}

impl Style {
    /// Creates a fill style.
    #[must_use]
    pub fn fill(color: Color) -> Self {
        Self {
            kind: StyleKind::Fill,
            color,
            width: 0.0,
        }
    }

    /// Creates an outline stroke style.
    ///
    /// # Errors
    ///
    /// Returns `StyleError::InvalidWidth` if `width` is negative or not finite.
    pub fn stroke(color: Color, width: f64) -> Result<Self> {
        if !width.is_finite() || width < 0.0 {
            return Err(StyleError::InvalidWidth(width).into());
        }
        Ok(Self {
            kind: StyleKind::Stroke,
            color,
            width,
        })
    }

    #[must_use]
    pub fn kind(&self) -> StyleKind {
        self.kind
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Stroke width, zero for fills.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Distance the path's bounding box grows by when rendered.
    #[must_use]
    pub fn bbox_growth(&self) -> f64 {
        self.width() * 0.5
    }
}
