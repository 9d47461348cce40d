use crate::error::{FactoryError, Result, TrimEnd};
use crate::geometry::{GeomCurve, TrimmedCurve};
use crate::math::PointN;
use crate::operations::query::ParameterOnCurve;
use crate::schema::{
    IfcCartesianPoint, IfcTrimmedCurve, IfcTrimmingPreference, IfcTrimmingSelect,
};

use super::primitive::{point2d, point3d};
use super::{BuiltAs, CurveFactory};

/// The trim forms found in one selector set; the last of each form wins.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct TrimSelection {
    point: Option<IfcCartesianPoint>,
    parameter: Option<f64>,
}

impl TrimSelection {
    fn from_selects(selects: &[IfcTrimmingSelect]) -> Self {
        let mut selection = Self::default();
        for select in selects {
            match *select {
                IfcTrimmingSelect::CartesianPoint(point) => {
                    selection.point = Some(point);
                }
                IfcTrimmingSelect::ParameterValue(value) => {
                    selection.parameter = Some(value);
                }
            }
        }
        selection
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TrimStrategy {
    Cartesian(IfcCartesianPoint, IfcCartesianPoint),
    Parametric(f64, f64),
}

fn select_strategy(
    trim1: &TrimSelection,
    trim2: &TrimSelection,
    master: IfcTrimmingPreference,
) -> std::result::Result<TrimStrategy, FactoryError> {
    let points = trim1.point.zip(trim2.point);
    let parameters = trim1.parameter.zip(trim2.parameter);
    let prefer_cartesian = master == IfcTrimmingPreference::Cartesian;

    match (points, parameters, prefer_cartesian) {
        (Some((p1, p2)), _, true) | (Some((p1, p2)), None, false) => {
            Ok(TrimStrategy::Cartesian(p1, p2))
        }
        (_, Some((u1, u2)), _) => Ok(TrimStrategy::Parametric(u1, u2)),
        (None, None, _) => Err(FactoryError::InconsistentTrim),
    }
}

fn reject_bounded_basis(trimmed: &IfcTrimmedCurve) -> Result<()> {
    if trimmed.basis_curve.is_bounded() {
        return Err(FactoryError::IllegalTrim {
            basis: trimmed.basis_curve.express_name(),
        }
        .into());
    }
    Ok(())
}

impl CurveFactory {
    /// Builds a planar trimmed curve.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::IllegalTrim`] for a bounded basis, an error
    /// from building the basis, or a trim resolution error.
    pub fn build_trimmed2d(&self, trimmed: &IfcTrimmedCurve) -> Result<TrimmedCurve<2>> {
        self.trimmed2d_at(trimmed, 0)
    }

    /// Builds a spatial trimmed curve.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::IllegalTrim`] for a bounded basis, an error
    /// from building the basis, or a trim resolution error.
    pub fn build_trimmed3d(&self, trimmed: &IfcTrimmedCurve) -> Result<TrimmedCurve<3>> {
        self.trimmed3d_at(trimmed, 0)
    }

    pub(super) fn trimmed2d_at(
        &self,
        trimmed: &IfcTrimmedCurve,
        depth: usize,
    ) -> Result<TrimmedCurve<2>> {
        reject_bounded_basis(trimmed)?;
        let basis = self.geom2d_at(&trimmed.basis_curve, depth + 1)?;
        self.resolve_trim(trimmed, basis, point2d)
    }

    pub(super) fn trimmed3d_at(
        &self,
        trimmed: &IfcTrimmedCurve,
        depth: usize,
    ) -> Result<TrimmedCurve<3>> {
        reject_bounded_basis(trimmed)?;
        let basis = self.geom3d_at(&trimmed.basis_curve, depth + 1)?;
        self.resolve_trim(trimmed, basis, |point| Ok(point3d(point)))
    }

    /// Turns the trim selectors into basis parameters and trims the basis.
    #[allow(clippy::float_cmp)]
    fn resolve_trim<const D: usize>(
        &self,
        trimmed: &IfcTrimmedCurve,
        basis: GeomCurve<D>,
        to_point: impl Fn(&IfcCartesianPoint) -> Result<PointN<D>>,
    ) -> Result<TrimmedCurve<D>> {
        let trim1 = TrimSelection::from_selects(&trimmed.trim1);
        let trim2 = TrimSelection::from_selects(&trimmed.trim2);
        let strategy = select_strategy(&trim1, &trim2, trimmed.master_representation)?;
        tracing::trace!(?strategy, basis = %basis.kind(), "trim strategy");

        let (u1, u2) = match strategy {
            TrimStrategy::Cartesian(p1, p2) => (
                self.project(&basis, to_point(&p1)?, TrimEnd::Trim1)?,
                self.project(&basis, to_point(&p2)?, TrimEnd::Trim2)?,
            ),
            TrimStrategy::Parametric(u1, u2) => (
                self.basis_parameter(&basis, u1),
                self.basis_parameter(&basis, u2),
            ),
        };

        if !u1.is_finite() || !u2.is_finite() {
            return Err(FactoryError::TrimResolution { u1, u2 }.into());
        }
        if u1 == u2 {
            return Err(FactoryError::DegenerateTrim { parameter: u1 }.into());
        }
        tracing::trace!(u1, u2, sense = trimmed.sense_agreement, "resolved trim parameters");

        TrimmedCurve::new(basis, u1, u2, trimmed.sense_agreement).built_as("IfcTrimmedCurve")
    }

    fn project<const D: usize>(
        &self,
        basis: &GeomCurve<D>,
        point: PointN<D>,
        trim: TrimEnd,
    ) -> Result<f64> {
        let tolerance = self.options.point_on_curve_tolerance;
        ParameterOnCurve::new(point, tolerance)
            .execute(basis)
            .ok_or_else(|| FactoryError::TrimPointNotOnCurve { trim, tolerance }.into())
    }

    /// Converts a schema parameter value into the kernel parameter of `basis`.
    ///
    /// Conic parameters are plane angles; line parameters count multiples of
    /// the `IfcVector` magnitude.
    fn basis_parameter<const D: usize>(&self, basis: &GeomCurve<D>, value: f64) -> f64 {
        if basis.kind().is_conic() {
            return value * self.options.radians_factor;
        }
        match basis {
            GeomCurve::Line(line) => value * line.magnitude(),
            _ => value,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::XCurveError;
    use crate::factory::{FactoryOptions, PlaneAngleUnit};
    use crate::geometry::Curve;
    use crate::math::{Dimension, Point2};
    use crate::schema::{
        IfcAxis2Placement, IfcAxis2Placement2D, IfcAxis2Placement3D, IfcCircle, IfcCurve,
        IfcDirection, IfcEllipse, IfcLine, IfcPolyline, IfcVector,
    };
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    use IfcTrimmingSelect::{CartesianPoint, ParameterValue};

    fn origin_2d() -> IfcAxis2Placement {
        IfcAxis2Placement::TwoD(IfcAxis2Placement2D {
            location: IfcCartesianPoint::xy(0.0, 0.0),
            ref_direction: None,
        })
    }

    fn unit_circle() -> IfcCurve {
        IfcCurve::Circle(IfcCircle {
            position: origin_2d(),
            radius: 1.0,
        })
    }

    fn x_line(magnitude: f64) -> IfcCurve {
        IfcCurve::Line(IfcLine {
            pnt: IfcCartesianPoint::xy(0.0, 0.0),
            dir: IfcVector {
                orientation: IfcDirection::xy(1.0, 0.0),
                magnitude,
            },
        })
    }

    fn trim(
        basis: IfcCurve,
        trim1: Vec<IfcTrimmingSelect>,
        trim2: Vec<IfcTrimmingSelect>,
        master_representation: IfcTrimmingPreference,
    ) -> IfcTrimmedCurve {
        IfcTrimmedCurve {
            basis_curve: Box::new(basis),
            trim1,
            trim2,
            sense_agreement: true,
            master_representation,
        }
    }

    fn parametric(basis: IfcCurve, u1: f64, u2: f64) -> IfcTrimmedCurve {
        trim(
            basis,
            vec![ParameterValue(u1)],
            vec![ParameterValue(u2)],
            IfcTrimmingPreference::Parameter,
        )
    }

    fn factory_error(err: XCurveError) -> FactoryError {
        match err {
            XCurveError::Factory(err) => err,
            other => panic!("expected a factory error, got {other:?}"),
        }
    }

    #[test]
    fn last_selector_of_each_form_wins() {
        let selection = TrimSelection::from_selects(&[
            ParameterValue(1.0),
            CartesianPoint(IfcCartesianPoint::xy(1.0, 0.0)),
            ParameterValue(2.0),
            CartesianPoint(IfcCartesianPoint::xy(5.0, 0.0)),
        ]);
        assert_eq!(selection.parameter, Some(2.0));
        assert_eq!(selection.point, Some(IfcCartesianPoint::xy(5.0, 0.0)));
    }

    #[test]
    fn repeated_parameter_overrides_earlier_one() {
        let trimmed = trim(
            x_line(1.0),
            vec![ParameterValue(1.0), ParameterValue(2.0)],
            vec![ParameterValue(5.0)],
            IfcTrimmingPreference::Parameter,
        );
        let segment = CurveFactory::default().build_trimmed2d(&trimmed).unwrap();
        assert_eq!(segment.trim_parameters(), (2.0, 5.0));
    }

    #[test]
    fn strategy_table() {
        let p = IfcCartesianPoint::xy(0.0, 0.0);
        let both = TrimSelection {
            point: Some(p),
            parameter: Some(1.0),
        };
        let point_only = TrimSelection {
            point: Some(p),
            parameter: None,
        };
        let parameter_only = TrimSelection {
            point: None,
            parameter: Some(2.0),
        };

        let strategy = |a: &TrimSelection, b: &TrimSelection, master| {
            select_strategy(a, b, master).ok()
        };
        assert_eq!(
            strategy(&both, &both, IfcTrimmingPreference::Cartesian),
            Some(TrimStrategy::Cartesian(p, p))
        );
        assert_eq!(
            strategy(&both, &both, IfcTrimmingPreference::Parameter),
            Some(TrimStrategy::Parametric(1.0, 1.0))
        );
        assert_eq!(
            strategy(&both, &both, IfcTrimmingPreference::Unspecified),
            Some(TrimStrategy::Parametric(1.0, 1.0))
        );
        assert_eq!(
            strategy(&point_only, &both, IfcTrimmingPreference::Parameter),
            Some(TrimStrategy::Cartesian(p, p))
        );
        assert_eq!(
            strategy(&parameter_only, &both, IfcTrimmingPreference::Cartesian),
            Some(TrimStrategy::Parametric(2.0, 1.0))
        );
        assert_eq!(
            strategy(&point_only, &parameter_only, IfcTrimmingPreference::Unspecified),
            None
        );
    }

    #[test]
    fn circle_parameters_in_radians() {
        let arc = CurveFactory::default()
            .build_trimmed2d(&parametric(unit_circle(), 0.0, PI))
            .unwrap();
        assert_eq!(arc.trim_parameters(), (0.0, PI));
    }

    #[test]
    fn circle_parameters_in_degrees() {
        let factory =
            CurveFactory::new(FactoryOptions::default().with_plane_angle_unit(PlaneAngleUnit::Degree));
        let arc = factory
            .build_trimmed2d(&parametric(unit_circle(), 0.0, 180.0))
            .unwrap();
        let (u1, u2) = arc.trim_parameters();
        assert_relative_eq!(u1, 0.0);
        assert_relative_eq!(u2, PI, epsilon = 1e-12);
    }

    #[test]
    fn ellipse_parameters_get_angular_correction() {
        let ellipse = IfcCurve::Ellipse(IfcEllipse {
            position: origin_2d(),
            semi_axis1: 2.0,
            semi_axis2: 1.0,
        });
        let factory =
            CurveFactory::new(FactoryOptions::default().with_plane_angle_unit(PlaneAngleUnit::Degree));
        let arc = factory
            .build_trimmed2d(&parametric(ellipse, 90.0, 180.0))
            .unwrap();
        assert_relative_eq!(arc.trim_parameters().0, FRAC_PI_2, epsilon = 1e-12);
        let end = arc.end_point().unwrap();
        assert_relative_eq!((end - Point2::new(-2.0, 0.0)).norm(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn line_parameters_scale_with_magnitude() {
        let factory = CurveFactory::default();
        let segment = factory
            .build_trimmed2d(&parametric(x_line(2.0), 0.0, 5.0))
            .unwrap();
        assert_eq!(segment.trim_parameters(), (0.0, 10.0));

        let segment = factory
            .build_trimmed3d(&parametric(x_line(2.0), 0.0, 5.0))
            .unwrap();
        assert_eq!(segment.trim_parameters(), (0.0, 10.0));
    }

    #[test]
    fn line_parameters_ignore_angle_unit() {
        let factory =
            CurveFactory::new(FactoryOptions::default().with_plane_angle_unit(PlaneAngleUnit::Degree));
        let segment = factory
            .build_trimmed2d(&parametric(x_line(1.0), 1.0, 3.0))
            .unwrap();
        assert_eq!(segment.trim_parameters(), (1.0, 3.0));
    }

    #[test]
    fn cartesian_trims_on_circle_are_polar_angles() {
        let trimmed = trim(
            unit_circle(),
            vec![CartesianPoint(IfcCartesianPoint::xy(0.0, 1.0))],
            vec![CartesianPoint(IfcCartesianPoint::xy(-1.0, 0.0))],
            IfcTrimmingPreference::Cartesian,
        );
        let arc = CurveFactory::default().build_trimmed2d(&trimmed).unwrap();
        let (u1, u2) = arc.trim_parameters();
        assert_relative_eq!(u1, FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(u2, PI, epsilon = 1e-12);
    }

    #[test]
    fn preferred_cartesian_wins_over_parameters() {
        let trimmed = trim(
            x_line(1.0),
            vec![ParameterValue(0.0), CartesianPoint(IfcCartesianPoint::xy(1.0, 0.0))],
            vec![ParameterValue(9.0), CartesianPoint(IfcCartesianPoint::xy(4.0, 0.0))],
            IfcTrimmingPreference::Cartesian,
        );
        let segment = CurveFactory::default().build_trimmed2d(&trimmed).unwrap();
        let (u1, u2) = segment.trim_parameters();
        assert_relative_eq!(u1, 1.0);
        assert_relative_eq!(u2, 4.0);
    }

    #[test]
    fn parameters_win_when_cartesian_not_preferred() {
        let trimmed = trim(
            x_line(1.0),
            vec![ParameterValue(0.0), CartesianPoint(IfcCartesianPoint::xy(1.0, 0.0))],
            vec![ParameterValue(9.0), CartesianPoint(IfcCartesianPoint::xy(4.0, 0.0))],
            IfcTrimmingPreference::Unspecified,
        );
        let segment = CurveFactory::default().build_trimmed2d(&trimmed).unwrap();
        assert_eq!(segment.trim_parameters(), (0.0, 9.0));
    }

    #[test]
    fn cartesian_trims_on_spatial_line() {
        let line = IfcCurve::Line(IfcLine {
            pnt: IfcCartesianPoint::xyz(0.0, 0.0, 1.0),
            dir: IfcVector {
                orientation: IfcDirection::xyz(0.0, 0.0, 1.0),
                magnitude: 3.0,
            },
        });
        let trimmed = trim(
            line,
            vec![CartesianPoint(IfcCartesianPoint::xyz(0.0, 0.0, 2.0))],
            vec![CartesianPoint(IfcCartesianPoint::xyz(0.0, 0.0, 7.0))],
            IfcTrimmingPreference::Cartesian,
        );
        let segment = CurveFactory::default().build_trimmed3d(&trimmed).unwrap();
        let (u1, u2) = segment.trim_parameters();
        assert_relative_eq!(u1, 1.0, epsilon = 1e-12);
        assert_relative_eq!(u2, 6.0, epsilon = 1e-12);
    }

    #[test]
    fn off_curve_point_is_rejected() {
        let trimmed = trim(
            unit_circle(),
            vec![CartesianPoint(IfcCartesianPoint::xy(1.0, 0.0))],
            vec![CartesianPoint(IfcCartesianPoint::xy(0.0, 1.5))],
            IfcTrimmingPreference::Cartesian,
        );
        let err = factory_error(CurveFactory::default().build_trimmed2d(&trimmed).unwrap_err());
        assert!(matches!(
            err,
            FactoryError::TrimPointNotOnCurve {
                trim: TrimEnd::Trim2,
                ..
            }
        ));
    }

    #[test]
    fn spatial_point_on_planar_curve_is_rejected() {
        let trimmed = trim(
            unit_circle(),
            vec![CartesianPoint(IfcCartesianPoint::xy(1.0, 0.0))],
            vec![CartesianPoint(IfcCartesianPoint::xyz(0.0, 1.0, 0.0))],
            IfcTrimmingPreference::Cartesian,
        );
        let err = factory_error(CurveFactory::default().build_trimmed2d(&trimmed).unwrap_err());
        assert!(matches!(
            err,
            FactoryError::DimensionalityMismatch {
                entity: "IfcCartesianPoint",
                expected: Dimension::Two,
                found: Dimension::Three,
            }
        ));
    }

    #[test]
    fn loose_tolerance_accepts_nearby_point() {
        let trimmed = trim(
            unit_circle(),
            vec![CartesianPoint(IfcCartesianPoint::xy(1.0, 0.0))],
            vec![CartesianPoint(IfcCartesianPoint::xy(0.0, 1.001))],
            IfcTrimmingPreference::Cartesian,
        );
        let factory =
            CurveFactory::new(FactoryOptions::default().with_point_on_curve_tolerance(1e-2));
        let arc = factory.build_trimmed2d(&trimmed).unwrap();
        assert_relative_eq!(arc.trim_parameters().1, FRAC_PI_2, epsilon = 1e-9);
    }

    #[test]
    fn identical_points_are_degenerate() {
        let p = IfcCartesianPoint::xy(2.0, 0.0);
        let trimmed = trim(
            x_line(1.0),
            vec![CartesianPoint(p)],
            vec![CartesianPoint(p)],
            IfcTrimmingPreference::Cartesian,
        );
        let err = factory_error(CurveFactory::default().build_trimmed2d(&trimmed).unwrap_err());
        assert!(matches!(err, FactoryError::DegenerateTrim { .. }));
    }

    #[test]
    fn mixed_single_forms_are_inconsistent() {
        let trimmed = trim(
            unit_circle(),
            vec![CartesianPoint(IfcCartesianPoint::xy(1.0, 0.0))],
            vec![ParameterValue(FRAC_PI_2)],
            IfcTrimmingPreference::Unspecified,
        );
        let err = factory_error(CurveFactory::default().build_trimmed2d(&trimmed).unwrap_err());
        assert!(matches!(err, FactoryError::InconsistentTrim));
    }

    #[test]
    fn empty_trims_are_inconsistent() {
        let trimmed = trim(unit_circle(), vec![], vec![], IfcTrimmingPreference::Parameter);
        let err = factory_error(CurveFactory::default().build_trimmed2d(&trimmed).unwrap_err());
        assert!(matches!(err, FactoryError::InconsistentTrim));
    }

    #[test]
    fn non_finite_parameter_fails_resolution() {
        let err = factory_error(
            CurveFactory::default()
                .build_trimmed2d(&parametric(unit_circle(), 0.0, f64::NAN))
                .unwrap_err(),
        );
        assert!(matches!(err, FactoryError::TrimResolution { .. }));
    }

    #[test]
    fn bounded_basis_is_illegal() {
        let inner = IfcCurve::TrimmedCurve(parametric(unit_circle(), 0.0, 1.0));
        let err = factory_error(
            CurveFactory::default()
                .build_trimmed2d(&parametric(inner, 0.0, 0.5))
                .unwrap_err(),
        );
        assert!(matches!(
            err,
            FactoryError::IllegalTrim {
                basis: "IfcTrimmedCurve"
            }
        ));

        let polyline = IfcCurve::Polyline(IfcPolyline {
            points: vec![IfcCartesianPoint::xy(0.0, 0.0), IfcCartesianPoint::xy(1.0, 0.0)],
        });
        let err = factory_error(
            CurveFactory::default()
                .build_trimmed2d(&trim(polyline, vec![], vec![], IfcTrimmingPreference::Unspecified))
                .unwrap_err(),
        );
        assert!(matches!(
            err,
            FactoryError::IllegalTrim {
                basis: "IfcPolyline"
            }
        ));
    }

    #[test]
    fn basis_failure_propagates() {
        let circle = IfcCurve::Circle(IfcCircle {
            position: IfcAxis2Placement::ThreeD(IfcAxis2Placement3D {
                location: IfcCartesianPoint::xyz(0.0, 0.0, 0.0),
                axis: None,
                ref_direction: None,
            }),
            radius: 1.0,
        });
        let err = factory_error(
            CurveFactory::default()
                .build_trimmed2d(&parametric(circle, 0.0, 1.0))
                .unwrap_err(),
        );
        assert!(matches!(err, FactoryError::DimensionalityMismatch { .. }));
    }

    #[test]
    fn basis_nesting_is_limited() {
        let factory = CurveFactory::new(FactoryOptions::default().with_max_depth(0));
        let err = factory_error(
            factory
                .build_trimmed2d(&parametric(unit_circle(), 0.0, 1.0))
                .unwrap_err(),
        );
        assert!(matches!(err, FactoryError::DepthExceeded { limit: 0 }));
    }

    #[test]
    fn reversed_sense_runs_clockwise() {
        let mut trimmed = parametric(unit_circle(), 0.0, FRAC_PI_2);
        trimmed.sense_agreement = false;
        let arc = CurveFactory::default().build_trimmed2d(&trimmed).unwrap();
        assert!(!arc.sense());
        let mid = arc.evaluate(-PI / 2.0).unwrap();
        assert_relative_eq!((mid - Point2::new(0.0, -1.0)).norm(), 0.0, epsilon = 1e-12);
    }
}
