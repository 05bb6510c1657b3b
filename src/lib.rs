//! Vector outlines of regular polygons and stars, optionally with rounded corners.
//!
//! [`build`] turns [`ShapeParameters`] and a [`Bound`] into a closed [`Outline`] with the
//! [`ControlPoints`] used for its curves. [`PolygonShape`] wraps the same computation for hosts
//! that update parameters and sizes over time.

pub use lyon;
pub use lyon::math::Point;

mod bound;
mod error;
pub mod geometry;
mod outline;
mod params;
mod shape;

pub use bound::Bound;
pub use error::ShapeError;
pub use outline::{build, ControlPoints, Outline, PathCommand, START_ANGLE};
pub use params::{
    ShapeParameters, ShapeParametersBuilder, DEFAULT_STAR_RATIO, MAX_CORNER_RADIUS,
};
pub use shape::PolygonShape;
