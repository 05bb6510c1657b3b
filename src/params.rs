//! Shape parameters and their validation.
//!
//! [`ShapeParameters`] can only be obtained through validating constructors, so an existing
//! value always has at least one vertex and a corner radius inside `[0, MAX_CORNER_RADIUS]`.
//!
//! # Examples
//!
//! ```rust
//! use polyshape::ShapeParameters;
//!
//! // Sharp hexagon
//! let hexagon = ShapeParameters::polygon(6).unwrap();
//!
//! // Rounded five-pointed star with a slimmer waist
//! let star = ShapeParameters::builder()
//!     .vertex_count(5)
//!     .corner_radius(0.25)
//!     .star(true)
//!     .star_ratio(0.5)
//!     .build()
//!     .unwrap();
//!
//! assert!(!hexagon.is_star());
//! assert_eq!(star.star_ratio(), 0.5);
//! ```

use crate::ShapeError;

/// Inner-vertex radius of a star as a fraction of its outer radius, unless overridden.
pub const DEFAULT_STAR_RATIO: f32 = 0.65;

/// Largest corner radius. At this value adjacent corner curves meet at the edge midpoints.
pub const MAX_CORNER_RADIUS: f32 = 0.5;

/// Parameters describing a regular polygon or star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParameters {
    vertex_count: usize,
    corner_radius: f32,
    is_star: bool,
    star_ratio: f32,
}

impl Default for ShapeParameters {
    /// A sharp pentagon.
    fn default() -> Self {
        Self {
            vertex_count: 5,
            corner_radius: 0.0,
            is_star: false,
            star_ratio: DEFAULT_STAR_RATIO,
        }
    }
}

impl ShapeParameters {
    /// Creates parameters, failing if `corner_radius` is outside `[0, 0.5]` or there are no
    /// vertices. `None` for `star_ratio` selects [`DEFAULT_STAR_RATIO`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polyshape::{ShapeError, ShapeParameters};
    ///
    /// assert!(ShapeParameters::new(4, 0.5, false, None).is_ok());
    /// assert_eq!(
    ///     ShapeParameters::new(4, 0.6, false, None),
    ///     Err(ShapeError::InvalidCornerRadius(0.6)),
    /// );
    /// ```
    pub fn new(
        vertex_count: usize,
        corner_radius: f32,
        is_star: bool,
        star_ratio: Option<f32>,
    ) -> Result<Self, ShapeError> {
        validate_vertex_count(vertex_count)?;
        validate_corner_radius(corner_radius)?;
        Ok(Self {
            vertex_count,
            corner_radius,
            is_star,
            star_ratio: star_ratio.unwrap_or(DEFAULT_STAR_RATIO),
        })
    }

    /// A sharp-cornered regular polygon.
    pub fn polygon(vertex_count: usize) -> Result<Self, ShapeError> {
        Self::new(vertex_count, 0.0, false, None)
    }

    /// A sharp-cornered star with the default waist.
    pub fn star(vertex_count: usize) -> Result<Self, ShapeError> {
        Self::new(vertex_count, 0.0, true, None)
    }

    /// Creates a new [`ShapeParametersBuilder`] starting from the defaults.
    pub fn builder() -> ShapeParametersBuilder {
        ShapeParametersBuilder::new()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    pub fn is_star(&self) -> bool {
        self.is_star
    }

    pub fn star_ratio(&self) -> f32 {
        self.star_ratio
    }

    /// Number of corners in the outline: one per vertex, two per point for a star.
    pub fn corner_count(&self) -> usize {
        if self.is_star {
            self.vertex_count * 2
        } else {
            self.vertex_count
        }
    }

    /// Replaces the vertex count. Returns whether the value changed.
    pub fn set_vertex_count(&mut self, vertex_count: usize) -> Result<bool, ShapeError> {
        validate_vertex_count(vertex_count)?;
        Ok(replace_if_changed(&mut self.vertex_count, vertex_count))
    }

    /// Replaces the corner radius. Returns whether the value changed.
    ///
    /// On error the previous radius is kept.
    pub fn set_corner_radius(&mut self, corner_radius: f32) -> Result<bool, ShapeError> {
        validate_corner_radius(corner_radius)?;
        Ok(replace_if_changed(&mut self.corner_radius, corner_radius))
    }

    /// Toggles star mode. Returns whether the value changed.
    pub fn set_star(&mut self, is_star: bool) -> bool {
        replace_if_changed(&mut self.is_star, is_star)
    }

    /// Replaces the star ratio. Returns whether the value changed.
    pub fn set_star_ratio(&mut self, star_ratio: f32) -> bool {
        replace_if_changed(&mut self.star_ratio, star_ratio)
    }
}

fn validate_vertex_count(vertex_count: usize) -> Result<(), ShapeError> {
    if vertex_count == 0 {
        return Err(ShapeError::NoVertices);
    }
    if vertex_count < 3 {
        tracing::warn!(vertex_count, "fewer than 3 vertices, outline will be degenerate");
    }
    Ok(())
}

fn validate_corner_radius(corner_radius: f32) -> Result<(), ShapeError> {
    // NaN fails the range check as well
    if (0.0..=MAX_CORNER_RADIUS).contains(&corner_radius) {
        Ok(())
    } else {
        Err(ShapeError::InvalidCornerRadius(corner_radius))
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

/// A fluent builder for [`ShapeParameters`].
///
/// Validation is deferred to [`ShapeParametersBuilder::build`].
///
/// # Examples
///
/// ```rust
/// use polyshape::ShapeParametersBuilder;
///
/// let params = ShapeParametersBuilder::new()
///     .vertex_count(8)
///     .corner_radius(0.1)
///     .build()
///     .unwrap();
///
/// assert_eq!(params.corner_count(), 8);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ShapeParametersBuilder {
    params: ShapeParameters,
}

impl Default for ShapeParametersBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeParametersBuilder {
    pub fn new() -> Self {
        Self {
            params: ShapeParameters::default(),
        }
    }

    pub fn vertex_count(mut self, vertex_count: usize) -> Self {
        self.params.vertex_count = vertex_count;
        self
    }

    /// Fraction of each edge consumed by the rounding curve, in `[0, 0.5]`.
    pub fn corner_radius(mut self, corner_radius: f32) -> Self {
        self.params.corner_radius = corner_radius;
        self
    }

    pub fn star(mut self, is_star: bool) -> Self {
        self.params.is_star = is_star;
        self
    }

    /// Inner radius of a star relative to the outer radius. Ignored for polygons.
    pub fn star_ratio(mut self, star_ratio: f32) -> Self {
        self.params.star_ratio = star_ratio;
        self
    }

    pub fn build(self) -> Result<ShapeParameters, ShapeError> {
        validate_vertex_count(self.params.vertex_count)?;
        validate_corner_radius(self.params.corner_radius)?;
        Ok(self.params)
    }
}
