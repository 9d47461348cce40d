pub mod error;
pub mod factory;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod schema;

pub use error::{Result, XCurveError};
pub use factory::{CurveFactory, CurveKind, FactoryOptions, PlaneAngleUnit, XCurve};
