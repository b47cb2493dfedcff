// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-size square map storage.

use alloc::vec::Vec;

use crate::coord::{MapCoord, MapInterval};

/// The kind of terrain a map cell holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Plain ground; every cell starts as ground.
    #[default]
    Ground,
    /// Water.
    Water,
    /// Impassable rock.
    Rock,
}

/// A single map cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Field {
    /// What the cell contains.
    pub kind: FieldKind,
}

/// A `size × size` grid of [`Field`]s addressed by [`MapCoord`].
///
/// Lookups outside `0..size` on either axis return `None`; the grid never
/// clamps or wraps coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapGrid {
    size: u32,
    cells: Vec<Field>,
}

impl MapGrid {
    /// Creates a grid with every cell set to [`FieldKind::Ground`].
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self::filled(size, Field::default())
    }

    /// Creates a grid with every cell set to `field`.
    #[must_use]
    pub fn filled(size: u32, field: Field) -> Self {
        let side = usize::try_from(size).unwrap_or(usize::MAX);
        Self {
            size,
            cells: alloc::vec![field; side.saturating_mul(side)],
        }
    }

    /// Creates a grid by evaluating `f` for every cell, row by row.
    #[must_use]
    pub fn from_fn(size: u32, mut f: impl FnMut(MapCoord) -> Field) -> Self {
        let bounds = MapInterval::new(0, i32::try_from(size).unwrap_or(i32::MAX));
        let cells = bounds
            .indices()
            .flat_map(|y| bounds.indices().map(move |x| MapCoord::new(x, y)))
            .map(&mut f)
            .collect();
        Self { size, cells }
    }

    /// Side length in cells.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Index bounds shared by both axes, `0..size`.
    #[must_use]
    pub fn bounds(&self) -> MapInterval {
        MapInterval::new(0, i32::try_from(self.size).unwrap_or(i32::MAX))
    }

    /// Returns `true` if `coord` addresses a cell on the map.
    #[must_use]
    pub fn contains(&self, coord: MapCoord) -> bool {
        let bounds = self.bounds();
        bounds.contains(coord.x) && bounds.contains(coord.y)
    }

    /// Returns the cell at `(x, y)`, or `None` if it is off the map.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<&Field> {
        self.offset(MapCoord::new(x, y)).and_then(|i| self.cells.get(i))
    }

    /// Returns the cell at `coord`, or `None` if it is off the map.
    #[must_use]
    pub fn cell(&self, coord: MapCoord) -> Option<&Field> {
        self.get(coord.x, coord.y)
    }

    fn offset(&self, coord: MapCoord) -> Option<usize> {
        let bounds = self.bounds();
        let x = bounds.position_of(coord.x)?;
        let y = bounds.position_of(coord.y)?;
        let side = usize::try_from(self.size).ok()?;
        Some(y * side + x)
    }
}
