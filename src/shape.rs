//! The `shape` module provides [`PolygonShape`], the host-facing adapter that keeps shape
//! parameters and a bound together with the outline derived from them.
//!
//! The outline is memoized. Setters only discard it when a value actually changes, and the
//! next read rebuilds it from scratch.
//!
//! # Examples
//!
//! ```rust
//! use polyshape::{Bound, PolygonShape, ShapeParameters};
//!
//! let mut shape = PolygonShape::new(ShapeParameters::star(5).unwrap(), Bound::new(100.0, 100.0));
//! assert_eq!(shape.outline().vertices().count(), 10);
//!
//! shape.set_corner_radius(0.2).unwrap();
//! assert_eq!(shape.control_points().len(), 30);
//!
//! // The host hands the lyon path to its tessellator
//! let path = shape.to_path();
//! # let _ = path;
//! ```

use crate::outline::{build, ControlPoints, Outline};
use crate::{Bound, ShapeError, ShapeParameters};
use std::sync::OnceLock;
use tracing::trace;

#[derive(Debug, Clone)]
struct BuiltOutline {
    outline: Outline,
    control_points: ControlPoints,
}

/// A regular polygon or star with its most recently computed outline.
#[derive(Debug, Clone)]
pub struct PolygonShape {
    params: ShapeParameters,
    bound: Bound,
    built: OnceLock<BuiltOutline>,
}

impl PolygonShape {
    pub fn new(params: ShapeParameters, bound: impl Into<Bound>) -> Self {
        Self {
            params,
            bound: bound.into(),
            built: OnceLock::new(),
        }
    }

    pub fn parameters(&self) -> &ShapeParameters {
        &self.params
    }

    pub fn bound(&self) -> Bound {
        self.bound
    }

    /// The outline for the current parameters and bound.
    pub fn outline(&self) -> &Outline {
        &self.built().outline
    }

    /// Control points recorded while building [`PolygonShape::outline`].
    pub fn control_points(&self) -> &ControlPoints {
        &self.built().control_points
    }

    /// The outline as a lyon path, ready for tessellation.
    pub fn to_path(&self) -> lyon::path::Path {
        self.outline().to_path()
    }

    /// True when the next read will rebuild the outline.
    pub fn is_stale(&self) -> bool {
        self.built.get().is_none()
    }

    /// Rebuilds the outline now instead of on the next read.
    pub fn rebuild(&mut self) {
        self.invalidate();
        self.built();
    }

    pub fn set_vertex_count(&mut self, vertex_count: usize) -> Result<(), ShapeError> {
        let changed = self.params.set_vertex_count(vertex_count)?;
        self.apply(changed, "vertex_count");
        Ok(())
    }

    /// Fails with [`ShapeError::InvalidCornerRadius`] outside `[0, 0.5]`, keeping the current
    /// outline.
    pub fn set_corner_radius(&mut self, corner_radius: f32) -> Result<(), ShapeError> {
        let changed = self.params.set_corner_radius(corner_radius)?;
        self.apply(changed, "corner_radius");
        Ok(())
    }

    pub fn set_as_star(&mut self, is_star: bool) {
        let changed = self.params.set_star(is_star);
        self.apply(changed, "is_star");
    }

    pub fn set_star_ratio(&mut self, star_ratio: f32) {
        let changed = self.params.set_star_ratio(star_ratio);
        self.apply(changed, "star_ratio");
    }

    /// Notifies the shape that its bound changed size.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        let bound = Bound::new(width, height);
        let changed = self.bound != bound;
        if changed {
            self.bound = bound;
        }
        self.apply(changed, "bound");
    }

    fn apply(&mut self, changed: bool, property: &'static str) {
        if changed {
            self.invalidate();
        } else {
            trace!(property, "value unchanged, keeping outline");
        }
    }

    fn invalidate(&mut self) {
        self.built.take();
    }

    fn built(&self) -> &BuiltOutline {
        self.built.get_or_init(|| {
            let (outline, control_points) = build(&self.params, self.bound);
            BuiltOutline {
                outline,
                control_points,
            }
        })
    }
}
