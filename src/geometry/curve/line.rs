use crate::error::Result;
use crate::math::{DirN, PointN, VectorN};

use super::{Curve, CurveDomain};

/// An infinite line defined by an origin point and a unit direction.
///
/// The parametric form is: `P(t) = origin + t * direction`, so the parameter
/// measures true length. `magnitude` is the length of one schema parametric
/// unit along the line.
#[derive(Debug, Clone)]
pub struct Line<const D: usize> {
    origin: PointN<D>,
    direction: DirN<D>,
    magnitude: f64,
}

impl<const D: usize> Line<D> {
    /// Creates a new line from an origin, a unit direction and a magnitude.
    #[must_use]
    pub fn new(origin: PointN<D>, direction: DirN<D>, magnitude: f64) -> Self {
        Self {
            origin,
            direction,
            magnitude,
        }
    }

    /// Returns the origin point of the line.
    #[must_use]
    pub fn origin(&self) -> &PointN<D> {
        &self.origin
    }

    /// Returns the unit direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &DirN<D> {
        &self.direction
    }

    /// Returns the length of one schema parametric unit.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }
}

impl<const D: usize> Curve<D> for Line<D> {
    fn evaluate(&self, t: f64) -> Result<PointN<D>> {
        Ok(self.origin + self.direction.into_inner() * t)
    }

    fn tangent(&self, _t: f64) -> Result<VectorN<D>> {
        Ok(self.direction.into_inner())
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    fn is_closed(&self) -> bool {
        false
    }

    fn closest_parameter(&self, point: &PointN<D>) -> f64 {
        self.direction.dot(&(point - self.origin))
    }
}
