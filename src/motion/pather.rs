//! Path geometry: distance along the path to path-space coordinates.

use heapless::Vec;

use crate::error::MotionError;
use crate::pulse::MAX_AXES;

use super::Coords;

/// A straight-line path through path space.
#[derive(Debug, Clone)]
pub struct LinearMove {
    /// Starting position per axis.
    start: Coords,

    /// Travel per axis per unit of path distance.
    unit_vector: Coords,
}

impl LinearMove {
    /// Create a linear path from a start position and a unit direction.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::AxisCountMismatch`] if the vectors differ in
    /// length.
    pub fn new(start: Coords, unit_vector: Coords) -> Result<Self, MotionError> {
        if start.len() != unit_vector.len() {
            return Err(MotionError::AxisCountMismatch {
                expected: start.len(),
                actual: unit_vector.len(),
            });
        }
        Ok(Self { start, unit_vector })
    }

    /// Number of axes this path spans.
    #[inline]
    pub fn axis_count(&self) -> usize {
        self.start.len()
    }

    /// Position along the path: `start + unit_vector * distance`.
    pub fn coords_at(&self, distance: f32) -> Coords {
        let mut coords: Coords = Vec::new();
        for i in 0..self.start.len().min(MAX_AXES) {
            // Capacity equals the input length, the push cannot fail.
            let _ = coords.push(self.start[i] + self.unit_vector[i] * distance);
        }
        coords
    }
}

/// A move's path geometry.
///
/// Arc geometry is not implemented; requesting coordinates from an arc path
/// fails with an explicit error rather than returning stale or zeroed
/// coordinates.
#[derive(Debug, Clone)]
pub enum MovePath {
    /// Straight line through path space.
    Linear(LinearMove),
    /// Circular arc. Unsupported; carries no geometry.
    Arc,
}

impl MovePath {
    /// Map a distance along the path to path-space coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::UnsupportedMoveType`] for arc paths.
    pub fn coords_at(&self, distance: f32) -> Result<Coords, MotionError> {
        match self {
            MovePath::Linear(linear) => Ok(linear.coords_at(distance)),
            MovePath::Arc => Err(MotionError::UnsupportedMoveType),
        }
    }

    /// Number of axes this path spans (zero for unsupported geometry).
    pub fn axis_count(&self) -> usize {
        match self {
            MovePath::Linear(linear) => linear.axis_count(),
            MovePath::Arc => 0,
        }
    }

    /// Whether the geometry of this path is implemented.
    #[inline]
    pub fn is_supported(&self) -> bool {
        matches!(self, MovePath::Linear(_))
    }
}
