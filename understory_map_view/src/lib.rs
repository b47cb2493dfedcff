// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_map_view --heading-base-level=0

//! Understory Map View: projection primitives for fixed-size grid maps.
//!
//! This crate provides small, headless building blocks for showing a window
//! onto a large square grid of cells. It focuses on:
//! - Cell addresses, cell areas and 1D index intervals ([`MapCoord`],
//!   [`MapArea`], [`MapInterval`]).
//! - A per-frame [`Projection`] (center in map units plus a uniform zoom).
//! - Conversion between map cells and view (pixel) space ([`to_view`],
//!   [`to_map`]).
//! - The visible cell range for a viewport size ([`view_area`],
//!   [`map_area`], [`axis_interval`]).
//! - Simple grid storage ([`MapGrid`]).
//!
//! View space is centered on the viewport: the projection center maps to the
//! view origin and one cell spans `cell_pixel_size * zoom` pixels.
//!
//! It does **not** own any rendering surface. Callers are expected to:
//! - Feed the visible intervals into a windowing layer (for example
//!   `understory_map_window`) that realizes and recycles cell views.
//! - Decide whether visible ranges are clamped to the map ([`ClampMode`]).
//! - Wire pan/zoom input into new [`Projection`] values at a higher layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_map_view::{Axis, MapCoord, MapInterval, Projection, axis_interval, to_map, to_view, visible_map_area};
//!
//! // Centered on cell (50, 50), 10 px per cell at zoom 1.
//! let projection = Projection::new((50.0, 50.0), 1.0).unwrap();
//!
//! let view = to_view(MapCoord::new(52, 49), &projection, 10.0).unwrap();
//! assert_eq!((view.x, view.y), (20.0, -10.0));
//! assert_eq!(to_map(view, &projection, 10.0).unwrap(), MapCoord::new(52, 49));
//!
//! // A 300x200 px viewport shows 30 columns and 20 rows.
//! let area = visible_map_area(300.0, 200.0, &projection, 10.0).unwrap();
//! assert_eq!(axis_interval(area, Axis::Columns), MapInterval::new(35, 65));
//! assert_eq!(axis_interval(area, Axis::Rows), MapInterval::new(40, 60));
//! ```
//!
//! ## Design notes
//!
//! - Projections are axis-aligned with a **uniform** zoom factor.
//! - Map-to-view conversion is exact; view-to-map conversion floors each axis,
//!   so every pixel belongs to exactly one cell.
//! - Visible areas are never clamped implicitly. Cells outside the map are a
//!   defined case: [`MapGrid::get`] returns `None` for them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod coord;
mod grid;
mod modes;
mod projection;
mod projector;
mod viewport;

pub use coord::{MapArea, MapCoord, MapInterval};
pub use grid::{Field, FieldKind, MapGrid};
pub use modes::{Axis, ClampMode};
pub use projection::{Projection, ProjectionError};
pub use projector::{Projector, cell_rect, to_map, to_map_point, to_view};
pub use viewport::{axis_interval, map_area, view_area, visible_map_area};
