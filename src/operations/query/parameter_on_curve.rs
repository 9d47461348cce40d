use crate::geometry::{Curve, GeomCurve};
use crate::math::PointN;

/// Result of a successful parameter query.
#[derive(Debug, Clone, Copy)]
pub struct CurveParameter {
    /// The parameter of the closest curve point.
    pub parameter: f64,
    /// The distance from the query point to that curve point.
    pub distance: f64,
}

/// Finds the parameter at which a curve passes through a given point.
///
/// The query succeeds only when the closest curve point is within `tolerance`.
pub struct ParameterOnCurve<const D: usize> {
    point: PointN<D>,
    tolerance: f64,
}

impl<const D: usize> ParameterOnCurve<D> {
    /// Creates a new `ParameterOnCurve` query.
    #[must_use]
    pub fn new(point: PointN<D>, tolerance: f64) -> Self {
        Self { point, tolerance }
    }

    /// Executes the query, returning the parameter of `point` on `curve`.
    ///
    /// Returns `None` if `point` is farther than the tolerance from the curve.
    #[must_use]
    pub fn execute(&self, curve: &GeomCurve<D>) -> Option<f64> {
        self.closest(curve)
            .filter(|found| found.distance <= self.tolerance)
            .map(|found| found.parameter)
    }

    /// Returns the closest parameter and its distance, regardless of tolerance.
    ///
    /// Returns `None` only if the curve cannot be evaluated there.
    #[must_use]
    pub fn closest(&self, curve: &GeomCurve<D>) -> Option<CurveParameter> {
        let parameter = curve.closest_parameter(&self.point);
        let on_curve = curve.evaluate(parameter).ok()?;
        Some(CurveParameter {
            parameter,
            distance: (self.point - on_curve).norm(),
        })
    }
}
