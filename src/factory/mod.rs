//! Builds kernel curves from IFC curve entities.
//!
//! [`CurveFactory::build`] reads the entity's dimensionality, resolves its
//! type name to a [`CurveKind`], dispatches to the per-kind builder and
//! wraps the kernel curve in a dimension-tagged [`XCurve`]. Trimmed curves
//! recurse into the factory for their basis curve.

mod conic;
mod kind;
mod line;
pub mod primitive;
mod trimmed;
mod xcurve;

pub use kind::CurveKind;
pub use xcurve::XCurve;

use crate::error::{FactoryError, Result, XCurveError};
use crate::geometry::{GeomCurve, GeomCurve2d, GeomCurve3d};
use crate::math::Dimension;
use crate::schema::IfcCurve;

/// Unit of schema plane-angle measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneAngleUnit {
    Radian,
    Degree,
}

impl PlaneAngleUnit {
    /// Returns the factor converting this unit to radians.
    #[must_use]
    pub fn radians_factor(self) -> f64 {
        match self {
            Self::Radian => 1.0,
            Self::Degree => std::f64::consts::PI / 180.0,
        }
    }
}

/// Model-dependent settings for curve construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactoryOptions {
    /// Maximum distance of a cartesian trim point from its basis curve.
    pub point_on_curve_tolerance: f64,
    /// Factor converting schema plane angles to radians.
    pub radians_factor: f64,
    /// Maximum nesting of basis curves.
    pub max_depth: usize,
}

impl FactoryOptions {
    pub const DEFAULT_POINT_ON_CURVE_TOLERANCE: f64 = 1e-5;
    pub const DEFAULT_MAX_DEPTH: usize = 16;

    #[must_use]
    pub fn with_point_on_curve_tolerance(mut self, tolerance: f64) -> Self {
        self.point_on_curve_tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_plane_angle_unit(self, unit: PlaneAngleUnit) -> Self {
        self.with_radians_factor(unit.radians_factor())
    }

    /// Sets an arbitrary conversion factor, e.g. for a conversion-based unit.
    #[must_use]
    pub fn with_radians_factor(mut self, factor: f64) -> Self {
        self.radians_factor = factor;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

impl Default for FactoryOptions {
    fn default() -> Self {
        Self {
            point_on_curve_tolerance: Self::DEFAULT_POINT_ON_CURVE_TOLERANCE,
            radians_factor: 1.0,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Stateless builder of kernel curves from IFC curve entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurveFactory {
    options: FactoryOptions,
}

impl CurveFactory {
    /// Creates a new factory.
    #[must_use]
    pub fn new(options: FactoryOptions) -> Self {
        Self { options }
    }

    /// Returns the construction settings.
    #[must_use]
    pub fn options(&self) -> &FactoryOptions {
        &self.options
    }

    /// Builds a dimension-tagged curve from any supported IFC curve.
    ///
    /// A 2D entity always yields a [`XCurve::Planar`] curve and a 3D entity
    /// an [`XCurve::Spatial`] one.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::UnsupportedCurveKind`] for an unknown type name,
    /// or the typed error of the failing builder.
    pub fn build(&self, curve: &IfcCurve) -> Result<XCurve> {
        let dim = curve.dim();
        tracing::debug!(express_name = curve.express_name(), %dim, "building curve");
        let built = match dim {
            Dimension::Two => self.build_geom2d(curve).map(XCurve::Planar),
            Dimension::Three => self.build_geom3d(curve).map(XCurve::Spatial),
        };
        if let Err(err) = &built {
            tracing::warn!(express_name = curve.express_name(), %dim, error = %err, "failed to build curve");
        }
        built
    }

    /// Builds a planar kernel curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the type is unsupported or the build fails.
    pub fn build_geom2d(&self, curve: &IfcCurve) -> Result<GeomCurve2d> {
        self.geom2d_at(curve, 0)
    }

    /// Builds a spatial kernel curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the type is unsupported or the build fails.
    pub fn build_geom3d(&self, curve: &IfcCurve) -> Result<GeomCurve3d> {
        self.geom3d_at(curve, 0)
    }

    fn geom2d_at(&self, curve: &IfcCurve, depth: usize) -> Result<GeomCurve2d> {
        self.check_depth(depth)?;
        let kind = CurveKind::resolve(curve.express_name(), Dimension::Two)?;
        let built: GeomCurve2d = match (kind, curve) {
            (CurveKind::Line, IfcCurve::Line(line)) => self.build_line2d(line)?.into(),
            (CurveKind::Circle, IfcCurve::Circle(circle)) => self.build_circle2d(circle)?.into(),
            (CurveKind::Ellipse, IfcCurve::Ellipse(ellipse)) => {
                self.build_ellipse2d(ellipse)?.into()
            }
            (CurveKind::TrimmedCurve, IfcCurve::TrimmedCurve(trimmed)) => {
                self.trimmed2d_at(trimmed, depth)?.into()
            }
            (kind, curve) => return Err(entity_mismatch(kind, curve)),
        };
        Ok(built)
    }

    fn geom3d_at(&self, curve: &IfcCurve, depth: usize) -> Result<GeomCurve3d> {
        self.check_depth(depth)?;
        let kind = CurveKind::resolve(curve.express_name(), Dimension::Three)?;
        let built: GeomCurve3d = match (kind, curve) {
            (CurveKind::Line, IfcCurve::Line(line)) => self.build_line3d(line)?.into(),
            (CurveKind::Circle, IfcCurve::Circle(circle)) => self.build_circle3d(circle)?.into(),
            (CurveKind::Ellipse, IfcCurve::Ellipse(ellipse)) => {
                self.build_ellipse3d(ellipse)?.into()
            }
            (CurveKind::TrimmedCurve, IfcCurve::TrimmedCurve(trimmed)) => {
                self.trimmed3d_at(trimmed, depth)?.into()
            }
            (kind, curve) => return Err(entity_mismatch(kind, curve)),
        };
        Ok(built)
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.options.max_depth {
            return Err(FactoryError::DepthExceeded {
                limit: self.options.max_depth,
            }
            .into());
        }
        Ok(())
    }
}

/// The resolved kind names an entity the object model did not supply.
fn entity_mismatch(kind: CurveKind, curve: &IfcCurve) -> XCurveError {
    tracing::debug!(%kind, express_name = curve.express_name(), "kind does not match entity");
    FactoryError::UnsupportedCurveKind {
        express_name: curve.express_name().to_owned(),
    }
    .into()
}

/// Attaches the schema type being built to kernel failures.
pub(crate) trait BuiltAs<T> {
    fn built_as(self, express_name: &'static str) -> Result<T>;
}

impl<T> BuiltAs<T> for Result<T> {
    fn built_as(self, express_name: &'static str) -> Result<T> {
        self.map_err(|err| match err {
            XCurveError::Geometry(source) => FactoryError::construction(express_name, source).into(),
            other => other,
        })
    }
}

impl<const D: usize> GeomCurve<D> {
    /// Returns the factory kind of this kernel curve.
    #[must_use]
    pub fn kind(&self) -> CurveKind {
        CurveKind::of(self)
    }
}
