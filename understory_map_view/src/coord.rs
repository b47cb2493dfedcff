// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer map-space types: cell addresses, areas and 1D intervals.

use core::fmt;
use core::ops::Range;

use crate::modes::Axis;

/// A cell address in map space.
///
/// Cells on the map satisfy `0 <= x, y < map_size`, but any value is
/// representable so that off-map cells can be described and reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MapCoord {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl MapCoord {
    /// The map origin.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Creates a new cell address.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate along `axis`.
    #[must_use]
    pub const fn get(self, axis: Axis) -> i32 {
        match axis {
            Axis::Rows => self.y,
            Axis::Columns => self.x,
        }
    }
}

impl From<(i32, i32)> for MapCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for MapCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A half-open rectangle of map cells.
///
/// `top_left` is inclusive and `bottom_right` is exclusive on both axes, so
/// an area whose corners coincide on an axis covers no cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MapArea {
    /// Inclusive minimum corner.
    pub top_left: MapCoord,
    /// Exclusive maximum corner.
    pub bottom_right: MapCoord,
}

impl MapArea {
    /// Creates an area from its corners, normalizing so that
    /// `bottom_right >= top_left` on each axis.
    #[must_use]
    pub fn new(a: MapCoord, b: MapCoord) -> Self {
        Self {
            top_left: MapCoord::new(a.x.min(b.x), a.y.min(b.y)),
            bottom_right: MapCoord::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Returns the interval covered along `axis`.
    #[must_use]
    pub fn interval(&self, axis: Axis) -> MapInterval {
        MapInterval::new(self.top_left.get(axis), self.bottom_right.get(axis))
    }

    /// Width in cells.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.interval(Axis::Columns).len()
    }

    /// Height in cells.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.interval(Axis::Rows).len()
    }

    /// Returns `true` if the area covers no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Returns `true` if `coord` lies inside the area.
    #[must_use]
    pub fn contains(&self, coord: MapCoord) -> bool {
        self.interval(Axis::Columns).contains(coord.x) && self.interval(Axis::Rows).contains(coord.y)
    }
}

/// A half-open 1D range `[start, end)` of row or column indices.
///
/// `end >= start` always holds; constructors normalize reversed input to an
/// empty interval at `start`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MapInterval {
    /// First index in the interval.
    pub start: i32,
    /// One past the last index in the interval.
    pub end: i32,
}

impl MapInterval {
    /// The empty interval at index zero.
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    /// Creates an interval, collapsing it to `start..start` if `end < start`.
    #[must_use]
    pub const fn new(start: i32, end: i32) -> Self {
        if end < start {
            Self { start, end: start }
        } else {
            Self { start, end }
        }
    }

    /// Number of indices in the interval.
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.end.abs_diff(self.start)
    }

    /// Returns `true` if the interval contains no indices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns `true` if `index` lies inside the interval.
    #[must_use]
    pub const fn contains(&self, index: i32) -> bool {
        self.start <= index && index < self.end
    }

    /// Returns `true` if both intervals share at least one index.
    ///
    /// Intervals that merely touch (`a.end == b.start`) do not overlap, and an
    /// empty interval overlaps nothing.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty() && !other.is_empty() && self.start < other.end && other.start < self.end
    }

    /// Returns the shared part of both intervals, or `None` if they do not overlap.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if self.overlaps(other) {
            Some(Self::new(self.start.max(other.start), self.end.min(other.end)))
        } else {
            None
        }
    }

    /// Clamps the interval into `bounds`.
    ///
    /// An interval entirely outside `bounds` collapses to an empty interval at
    /// the nearest bound.
    #[must_use]
    pub fn clamp_to(&self, bounds: Range<i32>) -> Self {
        let lo = bounds.start;
        let hi = bounds.end.max(lo);
        let start = self.start.clamp(lo, hi);
        let end = self.end.clamp(start, hi);
        Self { start, end }
    }

    /// Widens a non-empty interval by `amount` indices on each side.
    ///
    /// Empty intervals stay empty so that a degenerate viewport never realizes
    /// overscan cells.
    #[must_use]
    pub fn expand(&self, amount: u32) -> Self {
        if self.is_empty() || amount == 0 {
            return *self;
        }
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        Self {
            start: self.start.saturating_sub(amount),
            end: self.end.saturating_add(amount),
        }
    }

    /// Iterates the indices in ascending order.
    pub fn indices(&self) -> Range<i32> {
        self.start..self.end
    }

    /// Returns the position of `index` in a list that holds this interval's
    /// indices in ascending order.
    #[must_use]
    pub fn position_of(&self, index: i32) -> Option<usize> {
        if self.contains(index) {
            usize::try_from(index.abs_diff(self.start)).ok()
        } else {
            None
        }
    }
}

impl From<Range<i32>> for MapInterval {
    fn from(range: Range<i32>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl fmt::Display for MapInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
