use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::geometry::Frame;
use crate::math::{PointN, VectorN, TOLERANCE};

use super::{Curve, CurveDomain};

/// A full circle, in the plane or in space.
///
/// Defined by a placement frame and a radius. The parametric domain is
/// `[0, 2*pi)` and the curve is always closed.
///
/// `P(t) = origin + radius * cos(t) * x_dir + radius * sin(t) * y_dir`
#[derive(Debug, Clone)]
pub struct Circle<const D: usize> {
    position: Frame<D>,
    radius: f64,
}

impl<const D: usize> Circle<D> {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive or not finite.
    pub fn new(position: Frame<D>, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < TOLERANCE {
            return Err(
                GeometryError::Degenerate(format!("circle radius must be positive, got {radius}"))
                    .into(),
            );
        }
        Ok(Self { position, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &PointN<D> {
        self.position.origin()
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the placement frame (t=0 along `x_dir`).
    #[must_use]
    pub fn position(&self) -> &Frame<D> {
        &self.position
    }
}

impl<const D: usize> Curve<D> for Circle<D> {
    fn evaluate(&self, t: f64) -> Result<PointN<D>> {
        let x = self.position.x_dir().into_inner() * (self.radius * t.cos());
        let y = self.position.y_dir().into_inner() * (self.radius * t.sin());
        Ok(self.center() + x + y)
    }

    fn tangent(&self, t: f64) -> Result<VectorN<D>> {
        let x = self.position.x_dir().into_inner() * -t.sin();
        let y = self.position.y_dir().into_inner() * t.cos();
        Ok(x + y)
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
        if u.hypot(w) < TOLERANCE {
            return 0.0;
        }
        w.atan2(u).rem_euclid(TAU)
    }
}
