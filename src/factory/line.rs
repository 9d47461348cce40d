use crate::error::{FactoryError, Result};
use crate::geometry::Line;
use crate::math::Dimension;
use crate::schema::IfcLine;

use super::primitive::{direction2d, direction3d, point2d, point3d};
use super::CurveFactory;

impl CurveFactory {
    /// Builds a planar line through `pnt` along `dir`, keeping the vector
    /// magnitude for parametric trims.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::DimensionalityMismatch`] for 3D schema data, or
    /// a construction error for a zero direction.
    pub fn build_line2d(&self, line: &IfcLine) -> Result<Line<2>> {
        let found = line.pnt.dim();
        if found != Dimension::Two {
            return Err(FactoryError::DimensionalityMismatch {
                entity: "IfcLine",
                expected: Dimension::Two,
                found,
            }
            .into());
        }
        let origin = point2d(&line.pnt)?;
        let direction = direction2d(&line.dir.orientation)?;
        Ok(Line::new(origin, direction, line.dir.magnitude))
    }

    /// Builds a spatial line; planar data is lifted to `z = 0`.
    ///
    /// # Errors
    ///
    /// Returns a construction error for a zero direction.
    pub fn build_line3d(&self, line: &IfcLine) -> Result<Line<3>> {
        let origin = point3d(&line.pnt);
        let direction = direction3d(&line.dir.orientation)?;
        Ok(Line::new(origin, direction, line.dir.magnitude))
    }
}
