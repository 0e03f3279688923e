//! Scale-invariant geometry for the annotation overlay
//!
//! Documents are laid out in an abstract space of page-fraction coordinates
//! and rendered at a pixel scale that changes with zoom. The types here keep
//! the two spaces apart and convert between them, so annotation boxes survive
//! re-renders at any scale.

use serde::{Deserialize, Serialize};

/// Visual breathing room added around highlight boxes, in pixels.
pub const HIGHLIGHT_PADDING: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("reference scale must have positive dimensions, got {width}x{height}")]
    InvalidScale { width: f32, height: f32 },
}

/// A position in render space, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

/// A rectangle in render space. `width` and `height` are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PixelRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// Pixel dimensions of a page at the current zoom.
///
/// Used when moving from pixel space into normalized space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelScale {
    pub width: f32,
    pub height: f32,
}

impl PixelScale {
    fn checked(self) -> Result<Self, GeometryError> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(GeometryError::InvalidScale { width: self.width, height: self.height });
        }
        Ok(self)
    }
}

/// Percent-based page scale: dimensions are divided by 100 before use.
///
/// Only the pixel-producing direction uses this convention. It is a separate
/// type from [`PixelScale`] so the two conventions cannot be mixed up at a
/// call site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentScale {
    pub width: f32,
    pub height: f32,
}

/// A position expressed as a fraction of the reference width/height.
///
/// Values are unitless ratios, valid across re-renders at any scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x1: f32,
    pub y1: f32,
}

impl NormalizedPoint {
    pub fn new(x1: f32, y1: f32) -> Self {
        Self { x1, y1 }
    }

    /// Divide each axis by the corresponding scale dimension.
    pub fn from_pixel(point: PixelPoint, scale: PixelScale) -> Result<Self, GeometryError> {
        let scale = scale.checked()?;
        Ok(Self { x1: point.x / scale.width, y1: point.y / scale.height })
    }
}

/// A rectangle in normalized space, with `x1 <= x2` and `y1 <= y2`.
///
/// A degenerate rect (`x1 == x2` or `y1 == y2`) represents a caret or line
/// rather than an area; callers skip filled-rect drawing for those.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRect {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl NormalizedRect {
    /// Build a rect from two arbitrary corner points, sorting each axis.
    pub fn from_corners(p1: NormalizedPoint, p2: NormalizedPoint) -> Self {
        let (x1, x2) = if p1.x1 < p2.x1 { (p1.x1, p2.x1) } else { (p2.x1, p1.x1) };
        let (y1, y2) = if p1.y1 < p2.y1 { (p1.y1, p2.y1) } else { (p2.y1, p1.y1) };

        Self { x1, y1, x2, y2 }
    }

    /// Normalize the top-left and bottom-right corners independently.
    pub fn from_pixel(rect: PixelRect, scale: PixelScale) -> Result<Self, GeometryError> {
        let scale = scale.checked()?;

        Ok(Self {
            x1: rect.x / scale.width,
            y1: rect.y / scale.height,
            x2: (rect.x + rect.width) / scale.width,
            y2: (rect.y + rect.height) / scale.height,
        })
    }

    /// Project into pixel space, expanded by `padding` on every side.
    ///
    /// Degenerate dimensions widen to one unit before padding so a
    /// caret-sized box still produces a visible rect.
    pub fn to_pixel(&self, scale: PercentScale, padding: f32) -> PixelRect {
        let width = scale.width / 100.0;
        let height = scale.height / 100.0;

        let box_width = if self.x2 - self.x1 == 0.0 { 1.0 } else { self.x2 - self.x1 };
        let box_height = if self.y2 - self.y1 == 0.0 { 1.0 } else { self.y2 - self.y1 };

        PixelRect {
            x: self.x1 * width - padding,
            y: self.y1 * height - padding,
            width: box_width * width + 2.0 * padding,
            height: box_height * height + 2.0 * padding,
        }
    }

    /// Caret or line rather than an area.
    pub fn is_degenerate(&self) -> bool {
        self.x1 == self.x2 || self.y1 == self.y2
    }

    /// Strict interior test; points on the boundary do not count.
    ///
    /// Edge clicks deliberately miss, so selecting one annotation never
    /// registers against an adjacent one sharing the edge.
    pub fn contains_point(&self, point: &NormalizedPoint) -> bool {
        point.x1 > self.x1 && point.x1 < self.x2 && point.y1 > self.y1 && point.y1 < self.y2
    }

    /// Open-interval overlap test.
    pub fn intersects(&self, other: &NormalizedRect) -> bool {
        self.x1 < other.x2 && self.x2 > other.x1 && self.y1 < other.y2 && self.y2 > other.y1
    }

    /// The same rect shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self { x1: self.x1 + dx, y1: self.y1 + dy, x2: self.x2 + dx, y2: self.y2 + dy }
    }

    /// Minimal rect enclosing every input, or `None` for an empty iterator.
    pub fn union_all(rects: impl IntoIterator<Item = NormalizedRect>) -> Option<NormalizedRect> {
        rects.into_iter().reduce(|acc, rect| NormalizedRect {
            x1: acc.x1.min(rect.x1),
            y1: acc.y1.min(rect.y1),
            x2: acc.x2.max(rect.x2),
            y2: acc.y2.max(rect.y2),
        })
    }
}

/// Overlap test tolerating absent rects, which never intersect anything.
pub fn rects_intersect(a: Option<&NormalizedRect>, b: Option<&NormalizedRect>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.intersects(b),
        _ => false,
    }
}
