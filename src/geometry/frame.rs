use crate::error::{GeometryError, Result};
use crate::math::{unit, Dir2, Dir3, DirN, Point2, Point3, PointN, Vector2, Vector3, TOLERANCE};

/// A right-handed placement: an origin and two orthonormal in-plane axes.
///
/// Conics are evaluated in this frame, `x_dir` being the zero-angle
/// direction and `y_dir` the quarter-turn direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<const D: usize> {
    origin: PointN<D>,
    x_dir: DirN<D>,
    y_dir: DirN<D>,
}

/// Planar axis placement.
pub type Ax2d = Frame<2>;

/// Spatial axis placement.
pub type Ax2 = Frame<3>;

impl<const D: usize> Frame<D> {
    /// Returns the origin of the frame.
    #[must_use]
    pub fn origin(&self) -> &PointN<D> {
        &self.origin
    }

    /// Returns the zero-angle direction.
    #[must_use]
    pub fn x_dir(&self) -> &DirN<D> {
        &self.x_dir
    }

    /// Returns the quarter-turn direction.
    #[must_use]
    pub fn y_dir(&self) -> &DirN<D> {
        &self.y_dir
    }
}

impl Frame<2> {
    /// Creates a planar frame; `y_dir` is `x_dir` turned counter-clockwise.
    #[must_use]
    pub fn new(origin: Point2, x_dir: Dir2) -> Self {
        let y_dir = Dir2::new_unchecked(Vector2::new(-x_dir.y, x_dir.x));
        Self {
            origin,
            x_dir,
            y_dir,
        }
    }
}

impl Frame<3> {
    /// Creates a spatial frame from a main axis and a reference direction.
    ///
    /// The reference direction is projected onto the plane normal to `axis`;
    /// it does not need to be exactly perpendicular.
    ///
    /// # Errors
    ///
    /// Returns an error if `ref_dir` is parallel to `axis`.
    pub fn new(origin: Point3, axis: Dir3, ref_dir: Dir3) -> Result<Self> {
        let projected: Vector3 =
            ref_dir.into_inner() - axis.into_inner() * axis.dot(&ref_dir.into_inner());
        if projected.norm() < TOLERANCE {
            return Err(GeometryError::Degenerate(
                "reference direction is parallel to the axis".into(),
            )
            .into());
        }
        let x_dir = unit(projected)?;
        let y_dir = unit(axis.cross(&x_dir.into_inner()))?;
        Ok(Self {
            origin,
            x_dir,
            y_dir,
        })
    }

    /// Returns the main direction (`x_dir x y_dir`).
    #[must_use]
    pub fn axis(&self) -> Dir3 {
        Dir3::new_normalize(self.x_dir.cross(&self.y_dir.into_inner()))
    }
}
