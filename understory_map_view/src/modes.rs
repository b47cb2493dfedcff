// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Clamp behavior for visible cell ranges relative to the map bounds.
///
/// The viewport calculator never clamps on its own; this mode is the caller's
/// policy, applied with [`crate::MapInterval::clamp_to`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// Do not clamp; indices outside `0..map_size` are realized as off-map cells.
    None,
    /// Clamp visible intervals to `0..map_size` on both axes.
    #[default]
    MapBounds,
}

/// One axis of the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The vertical axis (`y`); its intervals select rows.
    Rows,
    /// The horizontal axis (`x`); its intervals select columns.
    Columns,
}
