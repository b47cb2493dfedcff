// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Vec2};

/// Error returned when projection parameters cannot describe a transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProjectionError {
    /// The zoom factor was zero, negative, or not finite.
    InvalidProjection {
        /// The rejected zoom factor.
        zoom: f64,
    },
    /// The fixed pixels-per-cell scale was zero, negative, or not finite.
    InvalidCellScale {
        /// The rejected scale.
        cell_pixel_size: f64,
    },
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidProjection { zoom } => {
                write!(f, "invalid projection: zoom {zoom} must be finite and > 0")
            }
            Self::InvalidCellScale { cell_pixel_size } => write!(
                f,
                "invalid cell scale: {cell_pixel_size} pixels per cell must be finite and > 0"
            ),
        }
    }
}

impl core::error::Error for ProjectionError {}

/// Viewing state for one frame: the map point at the viewport center and a
/// uniform zoom factor.
///
/// `center` is expressed in map units and may be fractional for sub-cell
/// panning. The projection is a plain value; callers build a new one per frame
/// and every transform validates it before use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Map-space point shown at the viewport center.
    pub center: Point,
    /// Uniform zoom factor; must be finite and `> 0`.
    pub zoom: f64,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            center: Point::ORIGIN,
            zoom: 1.0,
        }
    }
}

impl Projection {
    /// Creates a validated projection.
    pub fn new(center: impl Into<Point>, zoom: f64) -> Result<Self, ProjectionError> {
        let projection = Self {
            center: center.into(),
            zoom,
        };
        projection.validate()?;
        Ok(projection)
    }

    /// Checks that the zoom factor is finite and strictly positive.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        if self.zoom.is_finite() && self.zoom > 0.0 {
            Ok(())
        } else {
            Err(ProjectionError::InvalidProjection { zoom: self.zoom })
        }
    }

    /// Returns the size of one cell in pixels: `cell_pixel_size * zoom`.
    ///
    /// Fails if either factor is not finite and positive.
    pub fn cell_size(&self, cell_pixel_size: f64) -> Result<f64, ProjectionError> {
        self.validate()?;
        if !(cell_pixel_size.is_finite() && cell_pixel_size > 0.0) {
            return Err(ProjectionError::InvalidCellScale { cell_pixel_size });
        }
        Ok(cell_pixel_size * self.zoom)
    }

    /// Returns a copy with a different zoom factor.
    #[must_use]
    pub fn with_zoom(self, zoom: f64) -> Self {
        Self { zoom, ..self }
    }

    /// Returns a copy centered on a different map point.
    #[must_use]
    pub fn with_center(self, center: impl Into<Point>) -> Self {
        Self {
            center: center.into(),
            ..self
        }
    }

    /// Returns a copy panned by `delta` map cells.
    #[must_use]
    pub fn pan_by_cells(self, delta: Vec2) -> Self {
        Self {
            center: self.center + delta,
            ..self
        }
    }
}
