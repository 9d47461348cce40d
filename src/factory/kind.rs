use std::str::FromStr;

use crate::error::FactoryError;
use crate::geometry::GeomCurve;
use crate::math::Dimension;

/// The curve kinds the factory can build.
///
/// Adding a kind means extending this enum, [`GeomCurve`], and the dispatch
/// in [`CurveFactory`](super::CurveFactory); every match over it is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    Line,
    Circle,
    Ellipse,
    TrimmedCurve,
}

impl CurveKind {
    /// Every supported kind, in resolution order.
    pub const ALL: [Self; 4] = [Self::Line, Self::Circle, Self::Ellipse, Self::TrimmedCurve];

    /// Kinds that have a planar kernel representation.
    pub const PLANAR: [Self; 4] = [Self::Line, Self::Circle, Self::Ellipse, Self::TrimmedCurve];

    /// Returns the EXPRESS entity name this kind is built from.
    #[must_use]
    pub fn express_name(self) -> &'static str {
        match self {
            Self::Line => "IfcLine",
            Self::Circle => "IfcCircle",
            Self::Ellipse => "IfcEllipse",
            Self::TrimmedCurve => "IfcTrimmedCurve",
        }
    }

    /// Returns whether parametric trims on this kind are angles.
    #[must_use]
    pub fn is_conic(self) -> bool {
        matches!(self, Self::Circle | Self::Ellipse)
    }

    /// Resolves a type name against the kinds buildable in `dim`.
    ///
    /// EXPRESS names are case-insensitive, so `"IFCLINE"` resolves too.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::UnsupportedCurveKind`] if no kind matches.
    pub fn resolve(express_name: &str, dim: Dimension) -> Result<Self, FactoryError> {
        let candidates: &[Self] = match dim {
            Dimension::Two => &Self::PLANAR,
            Dimension::Three => &Self::ALL,
        };
        candidates
            .iter()
            .copied()
            .find(|kind| kind.express_name().eq_ignore_ascii_case(express_name))
            .ok_or_else(|| FactoryError::UnsupportedCurveKind {
                express_name: express_name.to_owned(),
            })
    }

    /// Returns the kind of a kernel curve.
    #[must_use]
    pub fn of<const D: usize>(curve: &GeomCurve<D>) -> Self {
        match curve {
            GeomCurve::Line(_) => Self::Line,
            GeomCurve::Circle(_) => Self::Circle,
            GeomCurve::Ellipse(_) => Self::Ellipse,
            GeomCurve::Trimmed(_) => Self::TrimmedCurve,
        }
    }
}

impl FromStr for CurveKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s, Dimension::Three)
    }
}

impl std::fmt::Display for CurveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.express_name())
    }
}
