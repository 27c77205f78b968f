//! Rectangle predicates shared by deduplication and span merging.
//!
//! All coordinates are integer pixels in image space with the origin at the
//! top-left corner. A well-formed rectangle satisfies `x1 < x2` and `y1 < y2`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default overlap ratio above which one box counts as contained in another.
pub const DEFAULT_CONTAINMENT_THRESHOLD: f64 = 0.8;

/// An axis-aligned rectangle `(x1, y1, x2, y2)`.
///
/// Serialized as a four-element array, matching the table output schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 4]", into = "[i32; 4]")]
pub struct Rect {
    /// Left edge
    pub x1: i32,
    /// Top edge
    pub y1: i32,
    /// Right edge
    pub x2: i32,
    /// Bottom edge
    pub y2: i32,
}

impl Rect {
    /// Create a rectangle without validating its corners.
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a rectangle, rejecting empty or inverted corners.
    pub fn try_new(x1: i32, y1: i32, x2: i32, y2: i32) -> Result<Self> {
        let rect = Self::new(x1, y1, x2, y2);
        if rect.is_valid() {
            Ok(rect)
        } else {
            Err(Error::InvalidRegion(x1, y1, x2, y2))
        }
    }

    /// Check the `x1 < x2 && y1 < y2` invariant.
    pub fn is_valid(&self) -> bool {
        self.x1 < self.x2 && self.y1 < self.y2
    }

    pub fn width(&self) -> i64 {
        (i64::from(self.x2) - i64::from(self.x1)).max(0)
    }

    pub fn height(&self) -> i64 {
        (i64::from(self.y2) - i64::from(self.y1)).max(0)
    }

    /// Area in square pixels; zero for degenerate rectangles.
    ///
    /// Saturates at `i64::MAX` for rectangles spanning the whole `i32` range.
    pub fn area(&self) -> i64 {
        self.width().saturating_mul(self.height())
    }

    /// Shift by `(dx, dy)`, e.g. from crop-local to page coordinates.
    ///
    /// Returns `None` if any corner leaves the `i32` range.
    pub fn translate(&self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(
            self.x1.checked_add(dx)?,
            self.y1.checked_add(dy)?,
            self.x2.checked_add(dx)?,
            self.y2.checked_add(dy)?,
        ))
    }

    /// Top-left corner.
    pub fn origin(&self) -> (i32, i32) {
        (self.x1, self.y1)
    }

    /// Overlap with `other`, see [`intersect`].
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        intersect(self, other)
    }
}

impl From<[i32; 4]> for Rect {
    fn from([x1, y1, x2, y2]: [i32; 4]) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

impl From<Rect> for [i32; 4] {
    fn from(rect: Rect) -> Self {
        [rect.x1, rect.y1, rect.x2, rect.y2]
    }
}

/// Overlap rectangle of `a` and `b`.
///
/// Returns `None` unless the overlap has strictly positive width and height;
/// boxes that only touch along an edge do not intersect.
pub fn intersect(a: &Rect, b: &Rect) -> Option<Rect> {
    let x1 = a.x1.max(b.x1);
    let y1 = a.y1.max(b.y1);
    let x2 = a.x2.min(b.x2);
    let y2 = a.y2.min(b.y2);

    if x1 < x2 && y1 < y2 {
        Some(Rect::new(x1, y1, x2, y2))
    } else {
        None
    }
}

/// Whether `inner` is substantially covered by `outer`, using
/// [`DEFAULT_CONTAINMENT_THRESHOLD`].
pub fn contained(outer: &Rect, inner: &Rect) -> bool {
    contained_with(outer, inner, DEFAULT_CONTAINMENT_THRESHOLD)
}

/// Whether the overlap of `outer` and `inner`, divided by the area of
/// `inner`, exceeds `threshold`.
///
/// Identical rectangles are always contained, even degenerate ones.
pub fn contained_with(outer: &Rect, inner: &Rect, threshold: f64) -> bool {
    if outer == inner {
        return true;
    }

    let inner_area = inner.area();
    if inner_area == 0 {
        return false;
    }

    match intersect(outer, inner) {
        Some(overlap) => overlap.area() as f64 / inner_area as f64 > threshold,
        None => false,
    }
}
