// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between map cells and view (pixel) space.
//!
//! View space is centered on the viewport: the projection's `center` maps to
//! the view origin and one cell spans `cell_pixel_size * zoom` pixels. Every
//! axis is converted from its own source coordinate only.

use kurbo::{Point, Rect, Size};

use crate::coord::MapCoord;
use crate::projection::{Projection, ProjectionError};

/// A validated projection together with its derived cell size.
///
/// Construction checks the zoom and cell scale once; all conversions are then
/// infallible. The free functions in this module build one per call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    center: Point,
    cell_size: f64,
}

impl Projector {
    /// Validates `projection` and derives the pixel size of one cell.
    pub fn new(projection: &Projection, cell_pixel_size: f64) -> Result<Self, ProjectionError> {
        Ok(Self {
            center: projection.center,
            cell_size: projection.cell_size(cell_pixel_size)?,
        })
    }

    /// Map point shown at the view origin.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Size of one cell in pixels.
    #[must_use]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Converts a map cell into the view-space position of its minimum corner.
    #[must_use]
    pub fn to_view(&self, cell: MapCoord) -> Point {
        Point::new(
            (f64::from(cell.x) - self.center.x) * self.cell_size,
            (f64::from(cell.y) - self.center.y) * self.cell_size,
        )
    }

    /// Converts a view-space point into continuous map coordinates.
    #[must_use]
    pub fn to_map_point(&self, view: Point) -> Point {
        Point::new(
            view.x / self.cell_size + self.center.x,
            view.y / self.cell_size + self.center.y,
        )
    }

    /// Converts a view-space point into the map cell containing it.
    ///
    /// Each axis is floored toward negative infinity. Results saturate at the
    /// `i32` range.
    #[must_use]
    pub fn to_map(&self, view: Point) -> MapCoord {
        let map = self.to_map_point(view);
        MapCoord::new(floor_to_i32(map.x), floor_to_i32(map.y))
    }

    /// Returns the view-space rectangle covered by a map cell.
    #[must_use]
    pub fn cell_rect(&self, cell: MapCoord) -> Rect {
        Rect::from_origin_size(self.to_view(cell), Size::new(self.cell_size, self.cell_size))
    }
}

/// Converts a map cell into the view-space position of its minimum corner.
pub fn to_view(
    cell: MapCoord,
    projection: &Projection,
    cell_pixel_size: f64,
) -> Result<Point, ProjectionError> {
    Ok(Projector::new(projection, cell_pixel_size)?.to_view(cell))
}

/// Converts a view-space point into the map cell containing it.
///
/// Each axis is floored toward negative infinity, so the view plane is
/// bucketed into cells deterministically.
pub fn to_map(
    view: Point,
    projection: &Projection,
    cell_pixel_size: f64,
) -> Result<MapCoord, ProjectionError> {
    Ok(Projector::new(projection, cell_pixel_size)?.to_map(view))
}

/// Converts a view-space point into continuous (unfloored) map coordinates.
pub fn to_map_point(
    view: Point,
    projection: &Projection,
    cell_pixel_size: f64,
) -> Result<Point, ProjectionError> {
    Ok(Projector::new(projection, cell_pixel_size)?.to_map_point(view))
}

/// Returns the view-space rectangle covered by a map cell.
pub fn cell_rect(
    cell: MapCoord,
    projection: &Projection,
    cell_pixel_size: f64,
) -> Result<Rect, ProjectionError> {
    Ok(Projector::new(projection, cell_pixel_size)?.cell_rect(cell))
}

/// Floors `value` toward negative infinity without relying on `std` float
/// functions. NaN maps to zero.
fn floor_to_i32(value: f64) -> i32 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Saturating float-to-int cast; the fractional part is corrected below"
    )]
    let truncated = value as i32;
    if f64::from(truncated) > value {
        truncated.saturating_sub(1)
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{Projector, cell_rect, floor_to_i32, to_map, to_map_point, to_view};
    use crate::{MapCoord, Projection, ProjectionError};

    #[test]
    fn floor_rounds_toward_negative_infinity() {
        assert_eq!(floor_to_i32(2.7), 2);
        assert_eq!(floor_to_i32(-0.5), -1);
        assert_eq!(floor_to_i32(-3.0), -3);
        assert_eq!(floor_to_i32(0.0), 0);
        assert_eq!(floor_to_i32(f64::NAN), 0);
        assert_eq!(floor_to_i32(1e12), i32::MAX);
        assert_eq!(floor_to_i32(-1e12), i32::MIN);
    }

    #[test]
    fn unit_scale_roundtrip() {
        let p = Projection::default();
        let m = MapCoord::new(5, 5);
        let v = to_view(m, &p, 1.0).unwrap();
        assert_eq!(v, Point::new(5.0, 5.0));
        assert_eq!(to_map(v, &p, 1.0).unwrap(), m);
    }

    #[test]
    fn roundtrip_with_offset_center_and_zoom() {
        let p = Projection::new((12.5, -7.25), 2.0).unwrap();
        for m in [
            MapCoord::new(0, 0),
            MapCoord::new(12, -8),
            MapCoord::new(-40, 33),
            MapCoord::new(99, 99),
        ] {
            let v = to_view(m, &p, 8.0).unwrap();
            assert_eq!(to_map(v, &p, 8.0).unwrap(), m);
        }
    }

    #[test]
    fn axes_are_converted_independently() {
        let p = Projection::new((3.0, 40.0), 1.0).unwrap();
        let v = to_view(MapCoord::new(5, 50), &p, 10.0).unwrap();
        assert_eq!(v, Point::new(20.0, 100.0));

        let m = to_map(Point::new(-25.0, 35.0), &p, 10.0).unwrap();
        assert_eq!(m, MapCoord::new(0, 43));
    }

    #[test]
    fn points_inside_a_cell_bucket_to_that_cell() {
        let p = Projection::new((0.5, 0.5), 1.0).unwrap();
        // Cell (0, 0) spans view x/y in [-5, 5) at 10 px per cell.
        assert_eq!(to_map(Point::new(-5.0, -5.0), &p, 10.0).unwrap(), MapCoord::ORIGIN);
        assert_eq!(to_map(Point::new(4.75, 0.0), &p, 10.0).unwrap(), MapCoord::ORIGIN);
        assert_eq!(to_map(Point::new(5.0, -5.5), &p, 10.0).unwrap(), MapCoord::new(1, -1));
        let exact = to_map_point(Point::new(2.5, -2.5), &p, 10.0).unwrap();
        assert_eq!(exact, Point::new(0.75, 0.25));
    }

    #[test]
    fn cell_rect_spans_one_cell() {
        let p = Projection::new((1.0, 1.0), 2.0).unwrap();
        let r = cell_rect(MapCoord::new(2, 0), &p, 4.0).unwrap();
        assert_eq!(r, Rect::new(8.0, -8.0, 16.0, 0.0));
    }

    #[test]
    fn projector_exposes_derived_cell_size() {
        let p = Projection::new((2.0, 3.0), 4.0).unwrap();
        let projector = Projector::new(&p, 2.5).unwrap();
        assert_eq!(projector.cell_size(), 10.0);
        assert_eq!(projector.center(), Point::new(2.0, 3.0));
        assert_eq!(projector.to_view(MapCoord::new(2, 3)), Point::ORIGIN);
        assert_eq!(
            Projector::new(&p, -1.0),
            Err(ProjectionError::InvalidCellScale {
                cell_pixel_size: -1.0
            })
        );
    }

    #[test]
    fn zero_zoom_is_rejected() {
        let p = Projection::default().with_zoom(0.0);
        assert_eq!(
            to_view(MapCoord::ORIGIN, &p, 1.0),
            Err(ProjectionError::InvalidProjection { zoom: 0.0 })
        );
        assert_eq!(
            to_map(Point::ORIGIN, &p, 1.0),
            Err(ProjectionError::InvalidProjection { zoom: 0.0 })
        );
        assert!(cell_rect(MapCoord::ORIGIN, &p, 1.0).is_err());
    }
}
