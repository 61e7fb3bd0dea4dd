//! Axis-aligned rectangles used for hurt-boxes and attack hit-boxes.

use crate::state::{Facing, Position};

/// Axis-aligned rectangle in world pixels (y grows downward).
///
/// Edges are stored explicitly rather than as origin + size so that motion tables
/// can author them the way they are drawn. A well-formed area has
/// `left <= right` and `top <= bottom`; orientation is checked once when motion
/// data is loaded, never per frame.
///
/// Overlap is strict: boxes that only share an edge do not overlap, and a
/// zero-area box never overlaps anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitArea {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl HitArea {
    /// The empty box at the origin.
    pub const EMPTY: Self = Self {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Returns true if the box encloses no area.
    pub const fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Returns true if the edges are ordered (`left <= right`, `top <= bottom`).
    pub const fn is_well_formed(&self) -> bool {
        self.left <= self.right && self.top <= self.bottom
    }

    /// Standard AABB test on both axes.
    pub const fn overlaps(&self, other: &HitArea) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }

    /// Pure offset, no bounds checking.
    #[must_use]
    pub const fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// Reflects the box across the vertical axis through the local origin.
    #[must_use]
    pub const fn mirrored(&self) -> Self {
        Self {
            left: -self.right,
            top: self.top,
            right: -self.left,
            bottom: self.bottom,
        }
    }

    /// Places a character-local box (authored facing right) into world space.
    #[must_use]
    pub const fn placed(&self, origin: Position, facing: Facing) -> Self {
        let local = match facing {
            Facing::Right => *self,
            Facing::Left => self.mirrored(),
        };
        local.translate(origin.x, origin.y)
    }
}

/// Free-function form of [`HitArea::overlaps`].
pub const fn overlaps(a: &HitArea, b: &HitArea) -> bool {
    a.overlaps(b)
}

/// Free-function form of [`HitArea::translate`].
pub const fn translate(area: &HitArea, dx: i32, dy: i32) -> HitArea {
    area.translate(dx, dy)
}
