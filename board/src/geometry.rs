//! Screen-space geometry: points, rectangles, and the fixed board layout.
//!
//! The board is laid out in CSS pixels relative to its top-left corner. There
//! is no camera: the board is a fixed-size surface and pointer coordinates
//! arrive already in board space.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    CARD_GAP, CARD_HEIGHT, CARD_ORIGIN_X, CARD_ORIGIN_Y, CARD_WIDTH, ZONE_GAP, ZONE_HEIGHT, ZONE_ORIGIN_X,
    ZONE_ORIGIN_Y, ZONE_WIDTH,
};

/// A point (or a displacement) in board space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement from `origin` to `self`.
    #[must_use]
    pub fn delta_from(self, origin: Point) -> Point {
        Point { x: self.x - origin.x, y: self.y - origin.y }
    }

    /// Euclidean length when treated as a displacement.
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Axis-aligned rectangle in board space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Whether `pt` lies inside the rectangle. Left/top edges are inclusive,
    /// right/bottom edges exclusive, so adjacent rects never both match.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x < self.x + self.width && pt.y >= self.y && pt.y < self.y + self.height
    }
}

/// Rectangle of the `index`-th card in the unassigned column.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn card_rect(index: usize) -> Rect {
    let y = CARD_ORIGIN_Y + index as f64 * (CARD_HEIGHT + CARD_GAP);
    Rect::new(CARD_ORIGIN_X, y, CARD_WIDTH, CARD_HEIGHT)
}

/// Default rectangle of the `index`-th zone when the roster does not place it.
///
/// The first zone sits at the default board position; later zones extend to the
/// left so every zone stays on the same row.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn default_zone_rect(index: usize) -> Rect {
    let x = ZONE_ORIGIN_X - index as f64 * (ZONE_WIDTH + ZONE_GAP);
    Rect::new(x, ZONE_ORIGIN_Y, ZONE_WIDTH, ZONE_HEIGHT)
}
