/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Point in `D` dimensions.
pub type PointN<const D: usize> = nalgebra::Point<f64, D>;

/// Vector in `D` dimensions.
pub type VectorN<const D: usize> = nalgebra::SVector<f64, D>;

/// Unit-length direction in `D` dimensions.
pub type DirN<const D: usize> = nalgebra::Unit<VectorN<D>>;

/// Unit-length 2D direction.
pub type Dir2 = DirN<2>;

/// Unit-length 3D direction.
pub type Dir3 = DirN<3>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Whether a curve lives in the plane or in space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Two,
    Three,
}

impl Dimension {
    /// Returns the number of coordinates, 2 or 3.
    #[must_use]
    pub fn value(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}D", self.value())
    }
}

/// Normalizes `v`, rejecting vectors shorter than [`TOLERANCE`].
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`](crate::error::GeometryError::ZeroVector)
/// for a zero-length or non-finite vector.
pub fn unit<const D: usize>(v: VectorN<D>) -> crate::Result<DirN<D>> {
    let len = v.norm();
    if !len.is_finite() || len < TOLERANCE {
        return Err(crate::error::GeometryError::ZeroVector.into());
    }
    Ok(DirN::new_unchecked(v / len))
}
