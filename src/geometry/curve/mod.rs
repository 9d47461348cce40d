mod circle;
mod ellipse;
mod line;
mod trimmed;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use line::Line;
pub use trimmed::TrimmedCurve;

use crate::error::Result;
use crate::math::{PointN, VectorN};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Returns whether `t` lies in the domain, allowing `slack` at both ends.
    #[must_use]
    pub fn contains(&self, t: f64, slack: f64) -> bool {
        t >= self.t_min - slack && t <= self.t_max + slack
    }
}

/// Trait for parametric curves in `D`-dimensional space.
pub trait Curve<const D: usize> {
    /// Evaluates the curve at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is out of range or evaluation fails.
    fn evaluate(&self, t: f64) -> Result<PointN<D>>;

    /// Computes the unit tangent vector at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is out of range or the tangent is degenerate.
    fn tangent(&self, t: f64) -> Result<VectorN<D>>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;

    /// Returns the parameter period of a periodic curve.
    fn period(&self) -> Option<f64> {
        None
    }

    /// Returns the parameter of the curve point nearest to `point`.
    ///
    /// Periodic curves report parameters in `[0, period)`.
    fn closest_parameter(&self, point: &PointN<D>) -> f64;
}

/// The closed set of kernel curve representations.
#[derive(Debug, Clone)]
pub enum GeomCurve<const D: usize> {
    /// An unbounded line.
    Line(Line<D>),
    /// A full circle.
    Circle(Circle<D>),
    /// A full ellipse.
    Ellipse(Ellipse<D>),
    /// A bounded portion of another curve.
    Trimmed(TrimmedCurve<D>),
}

/// Planar kernel curve.
pub type GeomCurve2d = GeomCurve<2>;

/// Spatial kernel curve.
pub type GeomCurve3d = GeomCurve<3>;

impl<const D: usize> GeomCurve<D> {
    fn as_curve(&self) -> &dyn Curve<D> {
        match self {
            Self::Line(c) => c,
            Self::Circle(c) => c,
            Self::Ellipse(c) => c,
            Self::Trimmed(c) => c,
        }
    }

    /// Returns whether this is a bounded curve.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        matches!(self, Self::Trimmed(_))
    }
}

impl<const D: usize> Curve<D> for GeomCurve<D> {
    fn evaluate(&self, t: f64) -> Result<PointN<D>> {
        self.as_curve().evaluate(t)
    }

    fn tangent(&self, t: f64) -> Result<VectorN<D>> {
        self.as_curve().tangent(t)
    }

    fn domain(&self) -> CurveDomain {
        self.as_curve().domain()
    }

    fn is_closed(&self) -> bool {
        self.as_curve().is_closed()
    }

    fn period(&self) -> Option<f64> {
        self.as_curve().period()
    }

    fn closest_parameter(&self, point: &PointN<D>) -> f64 {
        self.as_curve().closest_parameter(point)
    }
}

impl<const D: usize> From<Line<D>> for GeomCurve<D> {
    fn from(c: Line<D>) -> Self {
        Self::Line(c)
    }
}

impl<const D: usize> From<Circle<D>> for GeomCurve<D> {
    fn from(c: Circle<D>) -> Self {
        Self::Circle(c)
    }
}

impl<const D: usize> From<Ellipse<D>> for GeomCurve<D> {
    fn from(c: Ellipse<D>) -> Self {
        Self::Ellipse(c)
    }
}

impl<const D: usize> From<TrimmedCurve<D>> for GeomCurve<D> {
    fn from(c: TrimmedCurve<D>) -> Self {
        Self::Trimmed(c)
    }
}
