pub mod curve;
pub mod frame;

pub use curve::{
    Circle, Curve, CurveDomain, Ellipse, GeomCurve, GeomCurve2d, GeomCurve3d, Line, TrimmedCurve,
};
pub use frame::{Ax2, Ax2d, Frame};
