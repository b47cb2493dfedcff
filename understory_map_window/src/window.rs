// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Size;
use understory_map_view::{
    Axis, ClampMode, MapArea, MapCoord, MapGrid, MapInterval, Projection, Projector,
    axis_interval, visible_map_area,
};

use crate::error::WindowError;
use crate::reconcile::{EditScript, reconcile};
use crate::target::{CellPlacement, GridFactory, RenderTarget};

/// Initialization parameters for a [`MapWindow`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowConfig {
    /// Side length of the square map, in cells.
    pub map_size: u32,
    /// Initial viewport width in pixels, used by [`MapWindow::draw`].
    pub viewport_width: f64,
    /// Initial viewport height in pixels, used by [`MapWindow::draw`].
    pub viewport_height: f64,
    /// Pixels per cell at zoom `1.0`.
    pub cell_pixel_size: f64,
    /// Whether visible ranges are clamped to the map.
    ///
    /// With [`ClampMode::None`] nothing bounds the window: at zoom `z` it
    /// realizes about `(width / (cell_pixel_size * z)) * (height / (cell_pixel_size * z))`
    /// cells, so callers choosing it must keep the zoom within their budget.
    pub clamp_mode: ClampMode,
    /// Extra cells realized on each side of a non-empty visible range.
    ///
    /// Visible ranges floor both viewport edges, so a cell only partly shown at
    /// the right or bottom edge is not realized while one partly shown at the
    /// left or top edge is. An overscan of `1` covers the trailing edge.
    pub overscan: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            map_size: 100,
            viewport_width: 300.0,
            viewport_height: 300.0,
            cell_pixel_size: 10.0,
            clamp_mode: ClampMode::default(),
            overscan: 0,
        }
    }
}

impl WindowConfig {
    /// Sets the map side length.
    #[must_use]
    pub fn with_map_size(mut self, map_size: u32) -> Self {
        self.map_size = map_size;
        self
    }

    /// Sets the initial viewport size.
    #[must_use]
    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Sets the pixels-per-cell scale.
    #[must_use]
    pub fn with_cell_pixel_size(mut self, cell_pixel_size: f64) -> Self {
        self.cell_pixel_size = cell_pixel_size;
        self
    }

    /// Sets the clamp mode.
    #[must_use]
    pub fn with_clamp_mode(mut self, clamp_mode: ClampMode) -> Self {
        self.clamp_mode = clamp_mode;
        self
    }

    /// Sets the overscan, in cells per side.
    #[must_use]
    pub fn with_overscan(mut self, overscan: u32) -> Self {
        self.overscan = overscan;
        self
    }
}

/// Counters describing what one update did to the render target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateStats {
    /// Rows created.
    pub rows_added: usize,
    /// Rows removed.
    pub rows_removed: usize,
    /// Cells created, including those of new rows.
    pub cells_added: usize,
    /// Cells removed, including those of removed rows.
    pub cells_removed: usize,
}

impl UpdateStats {
    /// Returns `true` if the update left the target untouched.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

/// Incrementally maintained two-dimensional window onto a [`MapGrid`].
///
/// The window realizes one row element per visible map row, each holding one
/// cell element per visible column, and keeps them sorted by map index. On
/// every [`MapWindow::update`] it computes the newly visible rows and columns,
/// reconciles them against the previously visible ones and edits the render
/// target in place: only rows and cells that enter or leave visibility are
/// created or dropped.
///
/// A window that is empty on either axis realizes nothing at all: no rows and
/// no cells.
///
/// The trailing partial cell of each axis is only realized with a non-zero
/// [`WindowConfig::overscan`]. Under [`ClampMode::None`] the window size grows
/// with the inverse square of the zoom and is not capped.
///
/// The previous window is owned by this value and only changes when an update
/// succeeds. Updates take `&mut self`, so they cannot interleave.
#[derive(Clone, Debug)]
pub struct MapWindow {
    config: WindowConfig,
    grid: MapGrid,
    rows: MapInterval,
    columns: MapInterval,
}

impl MapWindow {
    /// Creates a window over a fresh all-ground grid of `config.map_size` cells.
    pub fn configure(config: WindowConfig) -> Result<Self, WindowError> {
        let grid = MapGrid::new(config.map_size);
        Self::with_grid(config, grid)
    }

    /// Creates a window over an existing grid.
    ///
    /// The grid's size takes precedence over `config.map_size`.
    pub fn with_grid(mut config: WindowConfig, grid: MapGrid) -> Result<Self, WindowError> {
        let cell_pixel_size = config.cell_pixel_size;
        if !(cell_pixel_size.is_finite() && cell_pixel_size > 0.0) {
            return Err(WindowError::InvalidConfig { cell_pixel_size });
        }
        config.map_size = grid.size();
        Ok(Self {
            config,
            grid,
            rows: MapInterval::EMPTY,
            columns: MapInterval::EMPTY,
        })
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Returns the map grid.
    #[must_use]
    pub fn grid(&self) -> &MapGrid {
        &self.grid
    }

    /// Rows realized by the last successful update.
    #[must_use]
    pub fn visible_rows(&self) -> MapInterval {
        self.rows
    }

    /// Columns realized by the last successful update.
    #[must_use]
    pub fn visible_columns(&self) -> MapInterval {
        self.columns
    }

    /// Returns the stored viewport size used by [`MapWindow::draw`].
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        Size::new(self.config.viewport_width, self.config.viewport_height)
    }

    /// Stores a new viewport size for [`MapWindow::draw`].
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.config.viewport_width = width;
        self.config.viewport_height = height;
    }

    /// Sets the clamp mode used from the next update on.
    pub fn set_clamp_mode(&mut self, mode: ClampMode) {
        self.config.clamp_mode = mode;
    }

    /// Sets the overscan used from the next update on.
    pub fn set_overscan(&mut self, overscan: u32) {
        self.config.overscan = overscan;
    }

    /// Forgets the previously realized window.
    ///
    /// Call this after clearing the render target (for example after an
    /// [`WindowError::IndexOutOfRange`]) so the next update rebuilds it.
    pub fn reset(&mut self) {
        self.rows = MapInterval::EMPTY;
        self.columns = MapInterval::EMPTY;
    }

    /// Computes the cells an update with these parameters would realize,
    /// after overscan and clamping, without touching any state.
    ///
    /// If either axis ends up empty (a zero-size viewport, or a view entirely
    /// off the map under [`ClampMode::MapBounds`]) the whole area is empty.
    pub fn visible_area(
        &self,
        projection: &Projection,
        width: f64,
        height: f64,
    ) -> Result<MapArea, WindowError> {
        let area = visible_map_area(width, height, projection, self.config.cell_pixel_size)?;
        let rows = self.window_interval(axis_interval(area, Axis::Rows));
        let columns = self.window_interval(axis_interval(area, Axis::Columns));
        if rows.is_empty() || columns.is_empty() {
            return Ok(MapArea::default());
        }
        Ok(MapArea::new(
            MapCoord::new(columns.start, rows.start),
            MapCoord::new(columns.end, rows.end),
        ))
    }

    /// Redraws with the stored viewport size. See [`MapWindow::update`].
    pub fn draw<R, F>(
        &mut self,
        target: &mut R,
        factory: &mut F,
        projection: &Projection,
    ) -> Result<UpdateStats, WindowError>
    where
        F: GridFactory,
        R: RenderTarget<Element = F::Row> + ?Sized,
    {
        let size = self.viewport_size();
        self.update(target, factory, projection, size.width, size.height)
    }

    /// Brings `target` in line with the window visible under `projection` in a
    /// `width × height` pixel viewport.
    ///
    /// `target` must hold the rows realized by the previous successful update
    /// (nothing, initially), each holding the previously visible columns.
    ///
    /// Edits happen in this order: rows leaving the window are removed, the
    /// column delta is applied to every retained row, then rows entering the
    /// window are created with all visible columns. `factory` is invoked
    /// exactly once per newly visible row and cell.
    ///
    /// # Errors
    ///
    /// - [`WindowError::InvalidProjection`] if the zoom is not positive; nothing
    ///   is touched.
    /// - [`WindowError::IndexOutOfRange`] if the target does not match the
    ///   previous window; the stored window is left unchanged.
    pub fn update<R, F>(
        &mut self,
        target: &mut R,
        factory: &mut F,
        projection: &Projection,
        width: f64,
        height: f64,
    ) -> Result<UpdateStats, WindowError>
    where
        F: GridFactory,
        R: RenderTarget<Element = F::Row> + ?Sized,
    {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "map_window_update",
            width,
            height,
            zoom = projection.zoom
        );
        #[cfg(feature = "tracing")]
        let _guard = _span.enter();

        let projector = Projector::new(projection, self.config.cell_pixel_size)?;
        let area = self.visible_area(projection, width, height)?;
        let rows = area.interval(Axis::Rows);
        let columns = area.interval(Axis::Columns);

        let row_script = reconcile(rows, self.rows);
        let column_script = reconcile(columns, self.columns);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            rows = %rows,
            columns = %columns,
            row_ops = row_script.len(),
            column_ops = column_script.len(),
            "reconciled window"
        );

        check_target(target, &row_script, &column_script)?;

        let mut stats = UpdateStats::default();
        let previous_columns = batch_len(self.columns);

        stats.rows_removed = row_script.apply_removals(target)?;
        stats.cells_removed = stats.rows_removed * previous_columns;

        let grid = &self.grid;
        if !column_script.is_empty() {
            let retained = rows.intersection(&self.rows).unwrap_or(MapInterval::EMPTY);
            for (position, y) in retained.indices().enumerate() {
                let len = target.len();
                let row = target
                    .get_mut(position)
                    .ok_or(WindowError::IndexOutOfRange { position, len })?;
                stats.cells_removed += column_script.apply_removals(row)?;
                stats.cells_added += column_script.apply_insertions(row, |x| {
                    factory.create_cell(placement(&projector, grid, MapCoord::new(x, y)))
                });
            }
        }

        stats.rows_added = row_script.apply_insertions(target, |y| {
            let mut row = factory.create_row(y);
            let cells: Vec<_> = columns
                .indices()
                .map(|x| factory.create_cell(placement(&projector, grid, MapCoord::new(x, y))))
                .collect();
            row.append(cells);
            row
        });
        stats.cells_added += stats.rows_added * batch_len(columns);

        self.rows = rows;
        self.columns = columns;
        self.set_viewport_size(width, height);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            rows_added = stats.rows_added,
            rows_removed = stats.rows_removed,
            cells_added = stats.cells_added,
            cells_removed = stats.cells_removed,
            "window updated"
        );

        Ok(stats)
    }

    /// Snapshot of the current window state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> MapWindowDebugInfo {
        MapWindowDebugInfo {
            config: self.config,
            visible_rows: self.rows,
            visible_columns: self.columns,
            realized_cells: batch_len(self.rows) * batch_len(self.columns),
        }
    }

    fn window_interval(&self, interval: MapInterval) -> MapInterval {
        let interval = interval.expand(self.config.overscan);
        match self.config.clamp_mode {
            ClampMode::None => interval,
            ClampMode::MapBounds => interval.clamp_to(self.grid.bounds().indices()),
        }
    }
}

/// Verifies the target mirrors the stored window before anything is edited.
fn check_target<R>(
    target: &R,
    row_script: &EditScript,
    column_script: &EditScript,
) -> Result<(), WindowError>
where
    R: RenderTarget + ?Sized,
    R::Element: RenderTarget,
{
    row_script.check_target_len(target.len())?;
    for position in 0..target.len() {
        let row = target.get(position).ok_or(WindowError::IndexOutOfRange {
            position,
            len: target.len(),
        })?;
        column_script.check_target_len(row.len())?;
    }
    Ok(())
}

fn placement<'g>(projector: &Projector, grid: &'g MapGrid, coord: MapCoord) -> CellPlacement<'g> {
    CellPlacement {
        coord,
        rect: projector.cell_rect(coord),
        field: grid.cell(coord),
    }
}

fn batch_len(interval: MapInterval) -> usize {
    usize::try_from(interval.len()).unwrap_or(usize::MAX)
}

/// Debug snapshot of a [`MapWindow`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapWindowDebugInfo {
    /// Current configuration, including the stored viewport size.
    pub config: WindowConfig,
    /// Rows realized by the last successful update.
    pub visible_rows: MapInterval,
    /// Columns realized by the last successful update.
    pub visible_columns: MapInterval,
    /// Number of cell elements the target holds.
    pub realized_cells: usize,
}
