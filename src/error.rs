/// Errors raised while constructing or updating shape parameters.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ShapeError {
    /// The corner radius lies outside `[0, 0.5]`, or is NaN.
    #[error("corner radius {0} is outside the range [0, 0.5]")]
    InvalidCornerRadius(f32),
    /// A shape needs at least one vertex to produce an outline.
    #[error("vertex count must be at least 1")]
    NoVertices,
}

impl ShapeError {
    /// True for errors caused by an argument outside its accepted domain.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ShapeError::InvalidCornerRadius(_))
    }

    /// True for inputs that would make the geometry undefined.
    pub fn is_degenerate_input(&self) -> bool {
        matches!(self, ShapeError::NoVertices)
    }
}
