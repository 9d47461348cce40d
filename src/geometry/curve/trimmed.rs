use crate::error::{GeometryError, Result};
use crate::math::{PointN, VectorN, TOLERANCE};

use super::{Curve, CurveDomain, GeomCurve};

/// A bounded portion of a basis curve between two basis parameters.
///
/// The curve runs from `u1` to `u2`. On a periodic basis the end is taken
/// modulo the period: following the basis direction when `sense` is true
/// and against it otherwise, so the span never exceeds one period. On a
/// non-periodic basis the curve always runs from `u1` to `u2`; `sense` is
/// only recorded there and does not change the orientation.
///
/// The trimmed curve is parameterized by the basis parameter itself.
#[derive(Debug, Clone)]
pub struct TrimmedCurve<const D: usize> {
    basis: Box<GeomCurve<D>>,
    u1: f64,
    u2: f64,
    sense: bool,
    end: f64,
}

impl<const D: usize> TrimmedCurve<D> {
    /// Creates a new trimmed curve.
    ///
    /// # Errors
    ///
    /// Returns an error if either parameter is not finite, the parameters are
    /// equal, or the basis curve is itself bounded.
    #[allow(clippy::float_cmp)]
    pub fn new(basis: GeomCurve<D>, u1: f64, u2: f64, sense: bool) -> Result<Self> {
        if !u1.is_finite() || !u2.is_finite() {
            return Err(GeometryError::Degenerate(format!(
                "trim parameters must be finite, got ({u1}, {u2})"
            ))
            .into());
        }
        if u1 == u2 {
            return Err(GeometryError::Degenerate(format!(
                "trim parameters are equal ({u1})"
            ))
            .into());
        }
        if basis.is_bounded() {
            return Err(
                GeometryError::Degenerate("basis curve is already bounded".into()).into(),
            );
        }

        let end = match basis.period() {
            Some(period) if sense => u1 + wrap(u2 - u1, period),
            Some(period) => u1 - wrap(u1 - u2, period),
            None => u2,
        };

        Ok(Self {
            basis: Box::new(basis),
            u1,
            u2,
            sense,
            end,
        })
    }

    /// Returns the basis curve.
    #[must_use]
    pub fn basis(&self) -> &GeomCurve<D> {
        &self.basis
    }

    /// Returns the trim parameters as supplied, `(u1, u2)`.
    #[must_use]
    pub fn trim_parameters(&self) -> (f64, f64) {
        (self.u1, self.u2)
    }

    /// Returns the basis parameter at which the curve starts.
    #[must_use]
    pub fn first_parameter(&self) -> f64 {
        self.u1
    }

    /// Returns the basis parameter at which the curve ends, after periodic
    /// adjustment.
    #[must_use]
    pub fn last_parameter(&self) -> f64 {
        self.end
    }

    /// Returns whether the curve direction agrees with the basis direction.
    #[must_use]
    pub fn sense(&self) -> bool {
        self.sense
    }

    /// Evaluates the start point.
    ///
    /// # Errors
    ///
    /// Returns an error if the basis evaluation fails.
    pub fn start_point(&self) -> Result<PointN<D>> {
        self.basis.evaluate(self.u1)
    }

    /// Evaluates the end point.
    ///
    /// # Errors
    ///
    /// Returns an error if the basis evaluation fails.
    pub fn end_point(&self) -> Result<PointN<D>> {
        self.basis.evaluate(self.end)
    }

    fn check(&self, t: f64) -> Result<()> {
        let domain = self.domain();
        if domain.contains(t, TOLERANCE) {
            Ok(())
        } else {
            Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: domain.t_min,
                max: domain.t_max,
            }
            .into())
        }
    }
}

/// Reduces a non-zero span into `(0, period]`.
fn wrap(span: f64, period: f64) -> f64 {
    let r = span.rem_euclid(period);
    if r < TOLERANCE {
        period
    } else {
        r
    }
}

impl<const D: usize> Curve<D> for TrimmedCurve<D> {
    fn evaluate(&self, t: f64) -> Result<PointN<D>> {
        self.check(t)?;
        self.basis.evaluate(t)
    }

    fn tangent(&self, t: f64) -> Result<VectorN<D>> {
        self.check(t)?;
        let tangent = self.basis.tangent(t)?;
        if self.end < self.u1 {
            Ok(-tangent)
        } else {
            Ok(tangent)
        }
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(self.u1.min(self.end), self.u1.max(self.end))
    }

    fn is_closed(&self) -> bool {
        self.basis
            .period()
            .is_some_and(|period| ((self.end - self.u1).abs() - period).abs() < TOLERANCE)
    }

    fn closest_parameter(&self, point: &PointN<D>) -> f64 {
        let t = self.basis.closest_parameter(point);
        let domain = self.domain();
        let Some(period) = self.basis.period() else {
            return t.clamp(domain.t_min, domain.t_max);
        };

        let t = domain.t_min + (t - domain.t_min).rem_euclid(period);
        if t <= domain.t_max {
            return t;
        }
        // Outside the span: snap to the nearer trim end.
        let distance = |u: f64| {
            self.basis
                .evaluate(u)
                .map_or(f64::INFINITY, |p| (p - point).norm())
        };
        if distance(domain.t_min) <= distance(domain.t_max) {
            domain.t_min
        } else {
            domain.t_max
        }
    }
}
