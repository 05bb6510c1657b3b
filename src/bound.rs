use lyon::math::Point;

/// The rectangle a shape is inscribed in, anchored at the origin.
///
/// Dimensions are not validated. Negative sizes give an inverted shape.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bound {
    pub width: f32,
    pub height: f32,
}

impl Bound {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center of the rectangle.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polyshape::Bound;
    /// use lyon::math::point;
    ///
    /// assert_eq!(Bound::new(100.0, 60.0).center(), point(50.0, 30.0));
    /// ```
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }

    /// Half of the smaller side, so the shape always fits without clipping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polyshape::Bound;
    ///
    /// assert_eq!(Bound::new(100.0, 60.0).radius(), 30.0);
    /// ```
    #[inline]
    pub fn radius(&self) -> f32 {
        self.width.min(self.height) * 0.5
    }
}

impl From<(f32, f32)> for Bound {
    fn from((width, height): (f32, f32)) -> Self {
        Self::new(width, height)
    }
}
