mod parameter_on_curve;

pub use parameter_on_curve::{CurveParameter, ParameterOnCurve};
