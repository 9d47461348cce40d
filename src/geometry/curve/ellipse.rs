use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::geometry::Frame;
use crate::math::{PointN, VectorN, TOLERANCE};

use super::{Curve, CurveDomain};

/// Newton refinement steps for the closest-point search.
const MAX_NEWTON_STEPS: usize = 16;

/// A full ellipse, in the plane or in space.
///
/// `P(t) = origin + a * cos(t) * x_dir + b * sin(t) * y_dir`
/// where `a` is the first semi axis and `b` the second.
#[derive(Debug, Clone)]
pub struct Ellipse<const D: usize> {
    position: Frame<D>,
    semi_axis1: f64,
    semi_axis2: f64,
}

impl<const D: usize> Ellipse<D> {
    /// Creates a new ellipse.
    ///
    /// # Arguments
    ///
    /// * `position` - Placement; the first semi axis lies along its `x_dir`
    /// * `semi_axis1` - Semi axis along `x_dir` (must be positive)
    /// * `semi_axis2` - Semi axis along `y_dir` (must be positive)
    ///
    /// # Errors
    ///
    /// Returns an error if either axis length is non-positive or not finite.
    pub fn new(position: Frame<D>, semi_axis1: f64, semi_axis2: f64) -> Result<Self> {
        for (name, value) in [("semi_axis1", semi_axis1), ("semi_axis2", semi_axis2)] {
            if !value.is_finite() || value < TOLERANCE {
                return Err(GeometryError::Degenerate(format!(
                    "ellipse {name} must be positive, got {value}"
                ))
                .into());
            }
        }
        Ok(Self {
            position,
            semi_axis1,
            semi_axis2,
        })
    }

    /// Returns the center of the ellipse.
    #[must_use]
    pub fn center(&self) -> &PointN<D> {
        self.position.origin()
    }

    /// Returns the semi axis along the placement's x direction.
    #[must_use]
    pub fn semi_axis1(&self) -> f64 {
        self.semi_axis1
    }

    /// Returns the semi axis along the placement's y direction.
    #[must_use]
    pub fn semi_axis2(&self) -> f64 {
        self.semi_axis2
    }

    /// Returns the placement frame.
    #[must_use]
    pub fn position(&self) -> &Frame<D> {
        &self.position
    }
}

impl<const D: usize> Curve<D> for Ellipse<D> {
    fn evaluate(&self, t: f64) -> Result<PointN<D>> {
        let x = self.position.x_dir().into_inner() * (self.semi_axis1 * t.cos());
        let y = self.position.y_dir().into_inner() * (self.semi_axis2 * t.sin());
        Ok(self.center() + x + y)
    }

    fn tangent(&self, t: f64) -> Result<VectorN<D>> {
        let x = self.position.x_dir().into_inner() * (-self.semi_axis1 * t.sin());
        let y = self.position.y_dir().into_inner() * (self.semi_axis2 * t.cos());
        let tangent = x + y;
        let len = tangent.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(tangent / len)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }

    fn period(&self) -> Option<f64> {
        Some(TAU)
    }

    fn closest_parameter(&self, point: &PointN<D>) -> f64 {
        let v = point - self.center();
        let u = self.position.x_dir().dot(&v);
        let w = self.position.y_dir().dot(&v);
        let (a, b) = (self.semi_axis1, self.semi_axis2);

        // Eccentric angle is exact for points on the ellipse.
        let mut t = (w / b).atan2(u / a);

        // Stationary points of |P(t) - p|^2 in local coordinates.
        for _ in 0..MAX_NEWTON_STEPS {
            let (s, c) = t.sin_cos();
            let f = (b * b - a * a) * s * c + a * u * s - b * w * c;
            let df = (b * b - a * a) * (c * c - s * s) + a * u * c + b * w * s;
            if df.abs() < TOLERANCE {
                break;
            }
            let step = f / df;
            t -= step;
            if step.abs() < 1e-14 {
                break;
            }
        }
        t.rem_euclid(TAU)
    }
}
