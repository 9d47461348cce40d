use crate::error::{FactoryError, Result};
use crate::geometry::{Ax2, Ax2d, Circle, Ellipse};
use crate::math::Dimension;
use crate::schema::{IfcAxis2Placement, IfcCircle, IfcEllipse};

use super::primitive::{axis2_placement_2d, axis2_placement_3d};
use super::{BuiltAs, CurveFactory};

fn planar_position(entity: &'static str, position: &IfcAxis2Placement) -> Result<Ax2d> {
    match position {
        IfcAxis2Placement::TwoD(placement) => axis2_placement_2d(placement),
        IfcAxis2Placement::ThreeD(_) => Err(FactoryError::DimensionalityMismatch {
            entity,
            expected: Dimension::Two,
            found: Dimension::Three,
        }
        .into()),
    }
}

fn spatial_position(entity: &'static str, position: &IfcAxis2Placement) -> Result<Ax2> {
    match position {
        IfcAxis2Placement::ThreeD(placement) => axis2_placement_3d(placement),
        IfcAxis2Placement::TwoD(_) => Err(FactoryError::DimensionalityMismatch {
            entity,
            expected: Dimension::Three,
            found: Dimension::Two,
        }
        .into()),
    }
}

impl CurveFactory {
    /// Builds a planar circle.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::DimensionalityMismatch`] for a 3D placement,
    /// or a construction error for a non-positive radius.
    pub fn build_circle2d(&self, circle: &IfcCircle) -> Result<Circle<2>> {
        let position = planar_position("IfcCircle", &circle.position)?;
        Circle::new(position, circle.radius).built_as("IfcCircle")
    }

    /// Builds a spatial circle.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::DimensionalityMismatch`] for a 2D placement,
    /// or a construction error for a non-positive radius.
    pub fn build_circle3d(&self, circle: &IfcCircle) -> Result<Circle<3>> {
        let position = spatial_position("IfcCircle", &circle.position)?;
        Circle::new(position, circle.radius).built_as("IfcCircle")
    }

    /// Builds a planar ellipse, `semi_axis1` along the placement X axis.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::DimensionalityMismatch`] for a 3D placement,
    /// or a construction error for non-positive semi-axes.
    pub fn build_ellipse2d(&self, ellipse: &IfcEllipse) -> Result<Ellipse<2>> {
        let position = planar_position("IfcEllipse", &ellipse.position)?;
        Ellipse::new(position, ellipse.semi_axis1, ellipse.semi_axis2).built_as("IfcEllipse")
    }

    /// Builds a spatial ellipse.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::DimensionalityMismatch`] for a 2D placement,
    /// or a construction error for non-positive semi-axes.
    pub fn build_ellipse3d(&self, ellipse: &IfcEllipse) -> Result<Ellipse<3>> {
        let position = spatial_position("IfcEllipse", &ellipse.position)?;
        Ellipse::new(position, ellipse.semi_axis1, ellipse.semi_axis2).built_as("IfcEllipse")
    }
}
