// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_map_window --heading-base-level=0

//! Understory Map Window: incremental windowing for grid maps.
//!
//! This crate keeps a rendering surface in sync with the part of a grid map
//! that is visible under a pan/zoom [`Projection`]. Instead of rebuilding
//! every cell per frame, it diffs the newly visible index range against the
//! previous one and only creates or drops what entered or left the view.
//!
//! The core concepts are:
//!
//! - [`reconcile`]: given the current and previous visible [`MapInterval`]s,
//!   returns an [`EditScript`] of removals followed by batched prepends and
//!   appends that turns a list mirroring the previous range into one
//!   mirroring the current range.
//! - [`RenderTarget`]: an ordered, position-addressed list of rendered
//!   elements (implemented for [`Vec`](alloc::vec::Vec) and
//!   [`VecDeque`](alloc::collections::VecDeque)).
//! - [`GridFactory`]: the caller's element constructor, invoked exactly once
//!   per newly visible row and cell.
//! - [`MapWindow`]: the two-dimensional engine. It owns the map grid and the
//!   previously visible rows and columns, and on every
//!   [`MapWindow::update`] edits a target of rows, each of which is itself a
//!   target of cells.
//!
//! This crate deliberately does **not** draw anything. Host frameworks are
//! responsible for:
//!
//! - Turning [`CellPlacement`]s into their own views or scene nodes.
//! - Producing a new [`Projection`] when the user pans or zooms.
//! - Clearing the target and calling [`MapWindow::reset`] if it ever stops
//!   mirroring the window (reported as [`WindowError::IndexOutOfRange`]).
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_map_window::{
//!     CellPlacement, GridFactory, MapCoord, MapInterval, MapWindow, Projection, WindowConfig,
//! };
//!
//! struct Coords;
//!
//! impl GridFactory for Coords {
//!     type Cell = MapCoord;
//!     type Row = Vec<MapCoord>;
//!
//!     fn create_row(&mut self, _y: i32) -> Vec<MapCoord> {
//!         Vec::new()
//!     }
//!
//!     fn create_cell(&mut self, placement: CellPlacement<'_>) -> MapCoord {
//!         placement.coord
//!     }
//! }
//!
//! // 100x100 map, 300x300 px viewport, 10 px per cell.
//! let mut window = MapWindow::configure(WindowConfig::default()).unwrap();
//! let mut rows: Vec<Vec<MapCoord>> = Vec::new();
//!
//! let projection = Projection::new((50.0, 50.0), 1.0).unwrap();
//! window.draw(&mut rows, &mut Coords, &projection).unwrap();
//! assert_eq!(window.visible_rows(), MapInterval::new(35, 65));
//! assert_eq!(rows.len(), 30);
//! assert_eq!(rows[0][0], MapCoord::new(35, 35));
//!
//! // Pan one cell right: one column is dropped and one created per row.
//! let stats = window
//!     .draw(&mut rows, &mut Coords, &projection.with_center((51.0, 50.0)))
//!     .unwrap();
//! assert_eq!((stats.cells_removed, stats.cells_added), (30, 30));
//! assert_eq!(rows[0][0], MapCoord::new(36, 35));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `understory_map_view/std`.
//! - `libm`: forwards to `understory_map_view/libm` for `no_std` float math.
//! - `tracing`: emits a `debug` span per [`MapWindow::update`] and `trace`
//!   events with the reconciled ranges and update counters.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod reconcile;
mod target;
mod window;

pub use error::WindowError;
pub use reconcile::{EditOp, EditScript, reconcile};
pub use target::{CellPlacement, GridFactory, RenderTarget};
pub use window::{MapWindow, MapWindowDebugInfo, UpdateStats, WindowConfig};

pub use understory_map_view::{
    Axis, ClampMode, Field, FieldKind, MapArea, MapCoord, MapGrid, MapInterval, Projection,
    ProjectionError,
};
