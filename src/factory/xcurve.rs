use crate::error::Result;
use crate::geometry::{Curve, GeomCurve, GeomCurve2d, GeomCurve3d};
use crate::math::{Dimension, Point3, Vector3};

use super::CurveKind;

/// A kernel curve tagged with the dimensionality it was built in.
#[derive(Debug, Clone)]
pub enum XCurve {
    Planar(GeomCurve2d),
    Spatial(GeomCurve3d),
}

impl XCurve {
    /// Returns the kind of the wrapped curve.
    #[must_use]
    pub fn kind(&self) -> CurveKind {
        match self {
            Self::Planar(curve) => CurveKind::of(curve),
            Self::Spatial(curve) => CurveKind::of(curve),
        }
    }

    #[must_use]
    pub fn dimension(&self) -> Dimension {
        match self {
            Self::Planar(_) => Dimension::Two,
            Self::Spatial(_) => Dimension::Three,
        }
    }

    #[must_use]
    pub fn as_planar(&self) -> Option<&GeomCurve2d> {
        match self {
            Self::Planar(curve) => Some(curve),
            Self::Spatial(_) => None,
        }
    }

    #[must_use]
    pub fn as_spatial(&self) -> Option<&GeomCurve3d> {
        match self {
            Self::Spatial(curve) => Some(curve),
            Self::Planar(_) => None,
        }
    }

    /// Returns the line magnitude if the curve is a line.
    #[must_use]
    pub fn magnitude(&self) -> Option<f64> {
        self.inspect(|curve| match curve {
            Shape::Line { magnitude, .. } => Some(magnitude),
            _ => None,
        })
    }

    /// Returns the unit direction if the curve is a line; planar lines
    /// report `z = 0`.
    #[must_use]
    pub fn direction(&self) -> Option<Vector3> {
        self.inspect(|curve| match curve {
            Shape::Line { direction, .. } => Some(direction),
            _ => None,
        })
    }

    /// Returns the radius if the curve is a circle.
    #[must_use]
    pub fn radius(&self) -> Option<f64> {
        self.inspect(|curve| match curve {
            Shape::Circle(radius) => Some(radius),
            _ => None,
        })
    }

    /// Returns `(semi_axis1, semi_axis2)` if the curve is an ellipse.
    #[must_use]
    pub fn semi_axes(&self) -> Option<(f64, f64)> {
        self.inspect(|curve| match curve {
            Shape::Ellipse(a, b) => Some((a, b)),
            _ => None,
        })
    }

    /// Returns the resolved `(u1, u2)` if the curve is trimmed.
    #[must_use]
    pub fn trim_parameters(&self) -> Option<(f64, f64)> {
        self.inspect(|curve| match curve {
            Shape::Trimmed { u1, u2, .. } => Some((u1, u2)),
            _ => None,
        })
    }

    /// Returns the sense agreement if the curve is trimmed.
    #[must_use]
    pub fn sense_agreement(&self) -> Option<bool> {
        self.inspect(|curve| match curve {
            Shape::Trimmed { sense, .. } => Some(sense),
            _ => None,
        })
    }

    /// Evaluates the curve in space; planar curves lie in `z = 0`.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is outside the curve domain.
    pub fn point_at(&self, t: f64) -> Result<Point3> {
        match self {
            Self::Planar(curve) => {
                let p = curve.evaluate(t)?;
                Ok(Point3::new(p.x, p.y, 0.0))
            }
            Self::Spatial(curve) => curve.evaluate(t),
        }
    }

    fn inspect<T>(&self, f: impl FnOnce(Shape) -> Option<T>) -> Option<T> {
        match self {
            Self::Planar(curve) => f(Shape::of(curve)),
            Self::Spatial(curve) => f(Shape::of(curve)),
        }
    }
}

/// Dimension-free scalar view of a kernel curve.
enum Shape {
    Line { direction: Vector3, magnitude: f64 },
    Circle(f64),
    Ellipse(f64, f64),
    Trimmed { u1: f64, u2: f64, sense: bool },
}

impl Shape {
    fn of<const D: usize>(curve: &GeomCurve<D>) -> Self {
        match curve {
            GeomCurve::Line(line) => {
                let mut direction = Vector3::zeros();
                for (lifted, component) in direction.iter_mut().zip(line.direction().iter()) {
                    *lifted = *component;
                }
                Self::Line {
                    direction,
                    magnitude: line.magnitude(),
                }
            }
            GeomCurve::Circle(circle) => Self::Circle(circle.radius()),
            GeomCurve::Ellipse(ellipse) => Self::Ellipse(ellipse.semi_axis1(), ellipse.semi_axis2()),
            GeomCurve::Trimmed(trimmed) => {
                let (u1, u2) = trimmed.trim_parameters();
                Self::Trimmed {
                    u1,
                    u2,
                    sense: trimmed.sense(),
                }
            }
        }
    }
}
