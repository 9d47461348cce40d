//! IFC curve entity definitions.
//!
//! An in-memory stand-in for the building-model document: the entities the
//! curve factory reads, with their IFC attribute names. Values are immutable
//! once built and the factory only borrows them.

use crate::math::Dimension;

/// `IfcCartesianPoint` with two or three coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IfcCartesianPoint {
    coordinates: [f64; 3],
    dim: Dimension,
}

impl IfcCartesianPoint {
    /// Creates a 2D point.
    #[must_use]
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            coordinates: [x, y, 0.0],
            dim: Dimension::Two,
        }
    }

    /// Creates a 3D point.
    #[must_use]
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            coordinates: [x, y, z],
            dim: Dimension::Three,
        }
    }

    /// Returns the coordinates; a 2D point reports `z = 0`.
    #[must_use]
    pub fn coordinates(&self) -> [f64; 3] {
        self.coordinates
    }

    #[must_use]
    pub fn dim(&self) -> Dimension {
        self.dim
    }
}

/// `IfcDirection`: direction ratios, not necessarily normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IfcDirection {
    direction_ratios: [f64; 3],
    dim: Dimension,
}

impl IfcDirection {
    /// Creates a 2D direction.
    #[must_use]
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            direction_ratios: [x, y, 0.0],
            dim: Dimension::Two,
        }
    }

    /// Creates a 3D direction.
    #[must_use]
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            direction_ratios: [x, y, z],
            dim: Dimension::Three,
        }
    }

    /// Returns the direction ratios; a 2D direction reports `z = 0`.
    #[must_use]
    pub fn direction_ratios(&self) -> [f64; 3] {
        self.direction_ratios
    }

    #[must_use]
    pub fn dim(&self) -> Dimension {
        self.dim
    }
}

/// `IfcVector`: an orientation and a magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IfcVector {
    pub orientation: IfcDirection,
    pub magnitude: f64,
}

/// `IfcAxis2Placement2D`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IfcAxis2Placement2D {
    pub location: IfcCartesianPoint,
    /// Local X axis; defaults to `(1, 0)`.
    pub ref_direction: Option<IfcDirection>,
}

/// `IfcAxis2Placement3D`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IfcAxis2Placement3D {
    pub location: IfcCartesianPoint,
    /// Local Z axis; defaults to `(0, 0, 1)`.
    pub axis: Option<IfcDirection>,
    /// Approximate local X axis; defaults per `IfcFirstProjAxis`.
    pub ref_direction: Option<IfcDirection>,
}

/// `IfcAxis2Placement` select.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IfcAxis2Placement {
    TwoD(IfcAxis2Placement2D),
    ThreeD(IfcAxis2Placement3D),
}

impl IfcAxis2Placement {
    #[must_use]
    pub fn dim(&self) -> Dimension {
        match self {
            Self::TwoD(_) => Dimension::Two,
            Self::ThreeD(_) => Dimension::Three,
        }
    }
}

/// `IfcLine`: an unbounded line through `pnt` along `dir`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfcLine {
    pub pnt: IfcCartesianPoint,
    pub dir: IfcVector,
}

/// `IfcCircle`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfcCircle {
    pub position: IfcAxis2Placement,
    pub radius: f64,
}

/// `IfcEllipse`; `semi_axis1` lies along the placement's X axis.
#[derive(Debug, Clone, PartialEq)]
pub struct IfcEllipse {
    pub position: IfcAxis2Placement,
    pub semi_axis1: f64,
    pub semi_axis2: f64,
}

/// `IfcPolyline`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfcPolyline {
    pub points: Vec<IfcCartesianPoint>,
}

/// `IfcTrimmingSelect`: one end of a trimmed curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IfcTrimmingSelect {
    CartesianPoint(IfcCartesianPoint),
    /// `IfcParameterValue`; angular for conics, length units for lines.
    ParameterValue(f64),
}

/// `IfcTrimmingPreference`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IfcTrimmingPreference {
    Cartesian,
    Parameter,
    #[default]
    Unspecified,
}

/// `IfcTrimmedCurve`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfcTrimmedCurve {
    pub basis_curve: Box<IfcCurve>,
    pub trim1: Vec<IfcTrimmingSelect>,
    pub trim2: Vec<IfcTrimmingSelect>,
    pub sense_agreement: bool,
    pub master_representation: IfcTrimmingPreference,
}

/// The `IfcCurve` subtypes known to the object model.
#[derive(Debug, Clone, PartialEq)]
pub enum IfcCurve {
    Line(IfcLine),
    Circle(IfcCircle),
    Ellipse(IfcEllipse),
    TrimmedCurve(IfcTrimmedCurve),
    Polyline(IfcPolyline),
}

impl IfcCurve {
    /// Returns the EXPRESS entity name, e.g. `"IfcLine"`.
    #[must_use]
    pub fn express_name(&self) -> &'static str {
        match self {
            Self::Line(_) => "IfcLine",
            Self::Circle(_) => "IfcCircle",
            Self::Ellipse(_) => "IfcEllipse",
            Self::TrimmedCurve(_) => "IfcTrimmedCurve",
            Self::Polyline(_) => "IfcPolyline",
        }
    }

    /// Derived `Dim` attribute.
    #[must_use]
    pub fn dim(&self) -> Dimension {
        match self {
            Self::Line(line) => line.pnt.dim(),
            Self::Circle(circle) => circle.position.dim(),
            Self::Ellipse(ellipse) => ellipse.position.dim(),
            Self::TrimmedCurve(trimmed) => trimmed.basis_curve.dim(),
            Self::Polyline(polyline) => polyline
                .points
                .first()
                .map_or(Dimension::Three, IfcCartesianPoint::dim),
        }
    }

    /// Returns whether the entity is an `IfcBoundedCurve`.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        matches!(self, Self::TrimmedCurve(_) | Self::Polyline(_))
    }
}
