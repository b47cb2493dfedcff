// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use understory_map_view::ProjectionError;

/// Error returned by edit-script application and [`crate::MapWindow`] updates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WindowError {
    /// The projection could not be used; nothing was mutated.
    InvalidProjection(ProjectionError),
    /// A removal addressed a position the render target does not have.
    ///
    /// This means the target no longer mirrors the previously visible window.
    /// The update is aborted; callers usually clear the target and call
    /// [`crate::MapWindow::reset`].
    IndexOutOfRange {
        /// The position that was addressed.
        position: usize,
        /// The target's length at the time.
        len: usize,
    },
    /// The window configuration has an unusable pixels-per-cell scale.
    InvalidConfig {
        /// The rejected scale.
        cell_pixel_size: f64,
    },
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidProjection(err) => err.fmt(f),
            Self::IndexOutOfRange { position, len } => write!(
                f,
                "render target position {position} is out of range (len {len})"
            ),
            Self::InvalidConfig { cell_pixel_size } => write!(
                f,
                "invalid window config: {cell_pixel_size} pixels per cell must be finite and > 0"
            ),
        }
    }
}

impl core::error::Error for WindowError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidProjection(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ProjectionError> for WindowError {
    fn from(err: ProjectionError) -> Self {
        Self::InvalidProjection(err)
    }
}
