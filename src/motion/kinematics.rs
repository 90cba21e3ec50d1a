//! Kinematic transforms: path-space coordinates to per-axis step targets.

use heapless::Vec;

use crate::error::MotionError;
use crate::pulse::MAX_AXES;

use super::Coords;

/// The computation applied by the kinematic stage.
///
/// Cartesian machines with pre-scaled paths use `Passthrough`; the scale
/// variants carry steps-per-mm into this stage instead; `SpatialTransform`
/// additionally corrects the first three coordinates through a 3×3 matrix
/// (tramming / skew correction) while excess axes map one-to-one.
#[derive(Debug, Clone)]
pub enum KinematicModel {
    /// Copy every coordinate unchanged.
    Passthrough,
    /// Multiply every coordinate by its per-axis factor.
    AxisScale(Vec<f32, MAX_AXES>),
    /// Multiply only the first two coordinates; copy the rest unchanged.
    XyScale([f32; 2]),
    /// Row-major 3×3 matrix applied to the first three coordinates; copy the
    /// rest unchanged.
    SpatialTransform([f32; 9]),
}

/// Kinematic parameters for one move. Immutable while the move runs.
#[derive(Debug, Clone)]
pub struct KinematicParams {
    num_axes: usize,
    model: KinematicModel,
}

impl KinematicParams {
    /// Create kinematic parameters with axis-count validation.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::AxisCountMismatch`] when an `AxisScale` factor
    /// vector does not match the axis count, when `XyScale` is used with
    /// fewer than two axes, or when `SpatialTransform` is used with fewer
    /// than three.
    pub fn new(num_axes: usize, model: KinematicModel) -> Result<Self, MotionError> {
        let num_axes = num_axes.min(MAX_AXES);
        match &model {
            KinematicModel::Passthrough => {}
            KinematicModel::AxisScale(factors) => {
                if factors.len() != num_axes {
                    return Err(MotionError::AxisCountMismatch {
                        expected: num_axes,
                        actual: factors.len(),
                    });
                }
            }
            KinematicModel::XyScale(_) => {
                if num_axes < 2 {
                    return Err(MotionError::AxisCountMismatch {
                        expected: 2,
                        actual: num_axes,
                    });
                }
            }
            KinematicModel::SpatialTransform(_) => {
                if num_axes < 3 {
                    return Err(MotionError::AxisCountMismatch {
                        expected: 3,
                        actual: num_axes,
                    });
                }
            }
        }
        Ok(Self { num_axes, model })
    }

    /// Number of axes this transform spans.
    #[inline]
    pub fn axis_count(&self) -> usize {
        self.num_axes
    }

    /// Map path-space coordinates to per-axis step targets.
    ///
    /// Pure and deterministic: the output depends only on the inputs, with no
    /// scratch state observable across calls.
    pub fn transform(&self, coords: &[f32]) -> Coords {
        let n = self.num_axes.min(coords.len());
        let mut out: Coords = Vec::new();

        match &self.model {
            KinematicModel::Passthrough => {
                for &c in coords.iter().take(n) {
                    let _ = out.push(c);
                }
            }
            KinematicModel::AxisScale(factors) => {
                for i in 0..n {
                    let _ = out.push(coords[i] * factors[i]);
                }
            }
            KinematicModel::XyScale(factors) => {
                for i in 0..n.min(2) {
                    let _ = out.push(coords[i] * factors[i]);
                }
                for &c in coords.iter().take(n).skip(2) {
                    let _ = out.push(c);
                }
            }
            KinematicModel::SpatialTransform(matrix) => {
                for row in 0..3.min(n) {
                    let mut dot = 0.0;
                    for (col, &c) in coords.iter().take(3).enumerate() {
                        dot += c * matrix[row * 3 + col];
                    }
                    let _ = out.push(dot);
                }
                for &c in coords.iter().take(n).skip(3) {
                    let _ = out.push(c);
                }
            }
        }

        out
    }
}
