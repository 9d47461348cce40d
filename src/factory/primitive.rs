//! Conversions from schema primitives to kernel values.
//!
//! Planar targets reject spatial input; spatial targets accept planar input
//! with `z = 0`.

use crate::error::{FactoryError, Result};
use crate::geometry::{Ax2, Ax2d};
use crate::math::{unit, Dimension, Dir2, Dir3, Point2, Point3, Vector2, Vector3, TOLERANCE};
use crate::schema::{IfcAxis2Placement2D, IfcAxis2Placement3D, IfcCartesianPoint, IfcDirection};

use super::BuiltAs;

fn require_planar(entity: &'static str, found: Dimension) -> Result<()> {
    if found == Dimension::Two {
        Ok(())
    } else {
        Err(FactoryError::DimensionalityMismatch {
            entity,
            expected: Dimension::Two,
            found,
        }
        .into())
    }
}

/// Converts a 2D cartesian point.
///
/// # Errors
///
/// Returns [`FactoryError::DimensionalityMismatch`] for a 3D point.
pub fn point2d(point: &IfcCartesianPoint) -> Result<Point2> {
    require_planar("IfcCartesianPoint", point.dim())?;
    let [x, y, _] = point.coordinates();
    Ok(Point2::new(x, y))
}

/// Converts a cartesian point into space.
#[must_use]
pub fn point3d(point: &IfcCartesianPoint) -> Point3 {
    let [x, y, z] = point.coordinates();
    Point3::new(x, y, z)
}

/// Converts a 2D direction to a unit direction.
///
/// # Errors
///
/// Returns an error for a 3D direction or zero direction ratios.
pub fn direction2d(direction: &IfcDirection) -> Result<Dir2> {
    require_planar("IfcDirection", direction.dim())?;
    let [x, y, _] = direction.direction_ratios();
    unit(Vector2::new(x, y)).built_as("IfcDirection")
}

/// Converts a direction to a unit spatial direction.
///
/// # Errors
///
/// Returns an error for zero direction ratios.
pub fn direction3d(direction: &IfcDirection) -> Result<Dir3> {
    let [x, y, z] = direction.direction_ratios();
    unit(Vector3::new(x, y, z)).built_as("IfcDirection")
}

/// Converts a 2D placement; the X axis defaults to `(1, 0)`.
///
/// # Errors
///
/// Returns an error for spatial location or direction data, or a zero
/// reference direction.
pub fn axis2_placement_2d(placement: &IfcAxis2Placement2D) -> Result<Ax2d> {
    let origin = point2d(&placement.location)?;
    let x_dir = match &placement.ref_direction {
        Some(direction) => direction2d(direction)?,
        None => Dir2::new_unchecked(Vector2::x()),
    };
    Ok(Ax2d::new(origin, x_dir))
}

/// Converts a 3D placement.
///
/// The axis defaults to `(0, 0, 1)`. A missing reference direction defaults
/// to `(1, 0, 0)`, or `(0, 1, 0)` when the axis is along X.
///
/// # Errors
///
/// Returns an error for zero directions or a reference direction parallel
/// to the axis.
pub fn axis2_placement_3d(placement: &IfcAxis2Placement3D) -> Result<Ax2> {
    let origin = point3d(&placement.location);
    let axis = match &placement.axis {
        Some(direction) => direction3d(direction)?,
        None => Dir3::new_unchecked(Vector3::z()),
    };
    let ref_dir = match &placement.ref_direction {
        Some(direction) => direction3d(direction)?,
        None if (axis.x.abs() - 1.0).abs() < TOLERANCE => Dir3::new_unchecked(Vector3::y()),
        None => Dir3::new_unchecked(Vector3::x()),
    };
    Ax2::new(origin, axis, ref_dir).built_as("IfcAxis2Placement3D")
}
