// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible-region calculation for a viewport over the map.

use kurbo::{Point, Rect};

use crate::coord::{MapArea, MapInterval};
use crate::modes::Axis;
use crate::projection::{Projection, ProjectionError};
use crate::projector::Projector;

/// Returns the viewport's pixel rectangle, centered on the view origin.
///
/// The rectangle spans `(-w/2, -h/2)` to `(w/2, h/2)`. Negative or NaN
/// dimensions are treated as zero, which yields a degenerate rectangle that
/// covers nothing.
#[must_use]
pub fn view_area(width: f64, height: f64) -> Rect {
    let half_w = non_negative(width) * 0.5;
    let half_h = non_negative(height) * 0.5;
    Rect::new(-half_w, -half_h, half_w, half_h)
}

/// Returns the cells covered by `view_area` under `projection`.
///
/// Both corners are converted with [`crate::to_map`], so the result is half-open:
/// the top-left cell is included and the bottom-right one is the first cell
/// past the edge. The area is not clamped to the map; see
/// [`crate::ClampMode`].
pub fn map_area(
    view_area: Rect,
    projection: &Projection,
    cell_pixel_size: f64,
) -> Result<MapArea, ProjectionError> {
    let projector = Projector::new(projection, cell_pixel_size)?;
    let view_area = view_area.abs();
    let top_left = projector.to_map(Point::new(view_area.x0, view_area.y0));
    let bottom_right = projector.to_map(Point::new(view_area.x1, view_area.y1));
    Ok(MapArea::new(top_left, bottom_right))
}

/// Projects one axis of `area` into a 1D interval.
#[must_use]
pub fn axis_interval(area: MapArea, axis: Axis) -> MapInterval {
    area.interval(axis)
}

/// Convenience for [`view_area`] followed by [`map_area`].
pub fn visible_map_area(
    width: f64,
    height: f64,
    projection: &Projection,
    cell_pixel_size: f64,
) -> Result<MapArea, ProjectionError> {
    map_area(view_area(width, height), projection, cell_pixel_size)
}

fn non_negative(value: f64) -> f64 {
    if value > 0.0 { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{axis_interval, map_area, view_area, visible_map_area};
    use crate::{Axis, MapCoord, MapInterval, Projection, ProjectionError};

    #[test]
    fn view_area_is_centered_on_origin() {
        let r = view_area(300.0, 200.0);
        assert_eq!(r, Rect::new(-150.0, -100.0, 150.0, 100.0));
        assert_eq!(r.center(), Point::ORIGIN);
        assert!(r.x0 < r.x1 && r.y0 < r.y1);
    }

    #[test]
    fn negative_or_nan_dimensions_are_degenerate() {
        assert_eq!(view_area(-10.0, f64::NAN), Rect::ZERO);
    }

    #[test]
    fn map_area_matches_viewport_in_cells() {
        // 300x300 px at 10 px per cell around the origin: 30x30 cells.
        let p = Projection::default();
        let area = visible_map_area(300.0, 300.0, &p, 10.0).unwrap();
        assert_eq!(area.top_left, MapCoord::new(-15, -15));
        assert_eq!(area.bottom_right, MapCoord::new(15, 15));
        assert_eq!(axis_interval(area, Axis::Rows), MapInterval::new(-15, 15));
        assert_eq!(axis_interval(area, Axis::Columns), MapInterval::new(-15, 15));
    }

    #[test]
    fn map_area_follows_center_and_zoom_per_axis() {
        let p = Projection::new((50.0, 20.0), 2.0).unwrap();
        // 20 px per cell: 200x100 px shows 10x5 cells.
        let area = visible_map_area(200.0, 100.0, &p, 10.0).unwrap();
        assert_eq!(axis_interval(area, Axis::Columns), MapInterval::new(45, 55));
        assert_eq!(axis_interval(area, Axis::Rows), MapInterval::new(17, 22));
    }

    #[test]
    fn zero_size_viewport_yields_empty_intervals() {
        let p = Projection::new((7.25, 3.5), 1.0).unwrap();
        let area = map_area(view_area(0.0, 0.0), &p, 10.0).unwrap();
        let rows = axis_interval(area, Axis::Rows);
        let cols = axis_interval(area, Axis::Columns);
        assert_eq!(rows.start, rows.end);
        assert_eq!(cols.start, cols.end);
        assert!(area.is_empty());
    }

    #[test]
    fn bottom_right_never_precedes_top_left() {
        let p = Projection::new((-3.3, 8.8), 0.7).unwrap();
        for (w, h) in [(0.0, 0.0), (1.0, 0.0), (13.0, 7.0), (640.0, 480.0)] {
            let area = visible_map_area(w, h, &p, 10.0).unwrap();
            assert!(area.bottom_right.x >= area.top_left.x);
            assert!(area.bottom_right.y >= area.top_left.y);
        }
    }

    #[test]
    fn invalid_zoom_propagates() {
        let p = Projection::default().with_zoom(-2.0);
        assert_eq!(
            visible_map_area(100.0, 100.0, &p, 10.0),
            Err(ProjectionError::InvalidProjection { zoom: -2.0 })
        );
    }
}
