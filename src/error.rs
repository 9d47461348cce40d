use thiserror::Error;

use crate::math::Dimension;

/// Top-level error type for the curve factory.
#[derive(Debug, Error)]
pub enum XCurveError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Factory(#[from] FactoryError),
}

/// Errors raised by the curve kernel constructors and evaluators.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Which end of a trimmed curve a trim selector belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimEnd {
    Trim1,
    Trim2,
}

impl std::fmt::Display for TrimEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trim1 => f.write_str("Trim1"),
            Self::Trim2 => f.write_str("Trim2"),
        }
    }
}

/// Errors raised while turning a schema curve into a kernel curve.
#[derive(Debug, Error)]
pub enum FactoryError {
    #[error("unsupported curve type: {express_name}")]
    UnsupportedCurveKind { express_name: String },

    #[error("cannot build a {expected} {entity} from {found} data")]
    DimensionalityMismatch {
        entity: &'static str,
        expected: Dimension,
        found: Dimension,
    },

    #[error("NoTrimOfBoundedCurves: {basis} is already bounded and shall not be trimmed")]
    IllegalTrim { basis: &'static str },

    #[error("{trim} point is not on the basis curve within tolerance {tolerance}")]
    TrimPointNotOnCurve { trim: TrimEnd, tolerance: f64 },

    #[error(
        "TrimValuesConsistent: a single trim value must be supplied consistently, \
         or both trims supplied as the same type"
    )]
    InconsistentTrim,

    #[error("trim parameters could not be resolved (u1 = {u1}, u2 = {u2})")]
    TrimResolution { u1: f64, u2: f64 },

    #[error("trim parameters are both {parameter} and would produce an empty curve")]
    DegenerateTrim { parameter: f64 },

    #[error("failed to build {express_name}: {source}")]
    Construction {
        express_name: &'static str,
        #[source]
        source: GeometryError,
    },

    #[error("basis curve nesting exceeds the limit of {limit}")]
    DepthExceeded { limit: usize },
}

impl FactoryError {
    /// Wraps a kernel failure with the schema type that was being built.
    #[must_use]
    pub fn construction(express_name: &'static str, source: GeometryError) -> Self {
        Self::Construction {
            express_name,
            source,
        }
    }
}

/// Convenience type alias for results using [`XCurveError`].
pub type Result<T> = std::result::Result<T, XCurveError>;
