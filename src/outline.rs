//! Construction of polygon and star outlines.
//!
//! Every corner of a rounded outline is a quadratic Bézier curve whose control point is the
//! vertex itself, followed by a straight line to the start of the next corner:
//!
//! ```text
//!   /\         \
//!   \/  <----- )   curve: entry -> (vertex) -> exit
//!             /    line:  exit  -> next corner's entry
//! ```
//!
//! The entry and exit points sit `corner_radius` of the way from the vertex toward its two
//! neighbours. Stars alternate outer and inner vertices and run the same construction on both.
//!
//! # Examples
//!
//! ```rust
//! use polyshape::{build, Bound, PathCommand, ShapeParameters};
//!
//! let params = ShapeParameters::new(4, 0.0, false, None).unwrap();
//! let (outline, control_points) = build(&params, Bound::new(100.0, 100.0));
//!
//! assert!(matches!(outline.commands()[0], PathCommand::MoveTo(_)));
//! assert_eq!(outline.commands().last(), Some(&PathCommand::Close));
//! assert!(control_points.is_empty());
//! ```

use crate::geometry::{point_on_circumference, point_on_line};
use crate::{Bound, ShapeParameters};
use lyon::math::Point;
use lyon::path::iterator::PathIterator;
use lyon::path::PathEvent;
use std::f32::consts::{FRAC_PI_2, TAU};
use tracing::debug;

/// Angle of the first outer vertex, pointing up in a y-down coordinate space.
pub const START_ANGLE: f32 = -FRAC_PI_2;

/// A single drawing command of an [`Outline`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadraticCurveTo { ctrl: Point, to: Point },
    Close,
}

impl PathCommand {
    /// The on-path point the command ends at. `None` for [`PathCommand::Close`].
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::QuadraticCurveTo { to, .. } => Some(to),
            PathCommand::Close => None,
        }
    }
}

/// A closed shape boundary.
///
/// Always starts with exactly one [`PathCommand::MoveTo`] and ends with exactly one
/// [`PathCommand::Close`]. Outlines are immutable; changing a shape produces a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    start: Point,
    commands: Vec<PathCommand>,
}

impl Outline {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Never true for an outline produced by [`build`].
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The point of the initial `MoveTo`.
    pub fn start(&self) -> Point {
        self.start
    }

    /// The pen position right before the final `Close`.
    pub fn current_position(&self) -> Point {
        self.vertices().last().unwrap_or(self.start)
    }

    /// On-path anchor points in drawing order, curve control points excluded.
    pub fn vertices(&self) -> impl DoubleEndedIterator<Item = Point> + '_ {
        self.commands.iter().filter_map(PathCommand::end_point)
    }

    /// Converts the outline into a lyon path for tessellation or stroking.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polyshape::{build, Bound, ShapeParameters};
    ///
    /// let params = ShapeParameters::new(6, 0.2, false, None).unwrap();
    /// let (outline, _) = build(&params, Bound::new(64.0, 64.0));
    ///
    /// let path = outline.to_path();
    /// assert!(path.iter().count() > 0);
    /// ```
    pub fn to_path(&self) -> lyon::path::Path {
        let mut builder = lyon::path::Path::builder();
        let mut open = false;
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    if open {
                        builder.end(false);
                    }
                    builder.begin(p);
                    open = true;
                }
                PathCommand::LineTo(p) => {
                    builder.line_to(p);
                }
                PathCommand::QuadraticCurveTo { ctrl, to } => {
                    builder.quadratic_bezier_to(ctrl, to);
                }
                PathCommand::Close => {
                    if open {
                        builder.close();
                        open = false;
                    }
                }
            }
        }
        if open {
            builder.end(false);
        }
        builder.build()
    }

    /// Approximates the outline with line segments no further than `tolerance` from the
    /// curves. Returns the polyline points, starting at [`Outline::start`].
    pub fn flattened(&self, tolerance: f32) -> Vec<Point> {
        let path = self.to_path();
        let mut points = Vec::new();
        for event in path.iter().flattened(tolerance) {
            match event {
                PathEvent::Begin { at } => points.push(at),
                PathEvent::Line { to, .. } => points.push(to),
                _ => {}
            }
        }
        points
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl From<&Outline> for lyon::path::Path {
    fn from(outline: &Outline) -> Self {
        outline.to_path()
    }
}

/// Curve anchors and control points recorded while building an [`Outline`].
///
/// Each rounded corner contributes three points in order: the curve entry, the vertex used as
/// the control point, and the curve exit. Sharp outlines record nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ControlPoints {
    points: Vec<Point>,
}

impl ControlPoints {
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The control points grouped per corner as `[entry, vertex, exit]`.
    pub fn corners(&self) -> std::slice::ChunksExact<'_, Point> {
        self.points.chunks_exact(3)
    }
}

impl<'a> IntoIterator for &'a ControlPoints {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Builds the outline and control points of the shape described by `params`, inscribed in
/// `bound`.
///
/// The result depends only on the inputs: identical inputs give bit-identical output.
pub fn build(params: &ShapeParameters, bound: Bound) -> (Outline, ControlPoints) {
    let ring = vertex_ring(params, bound);
    let corner_radius = params.corner_radius();

    let (commands, points) = if corner_radius == 0.0 {
        (sharp_commands(&ring), Vec::new())
    } else {
        rounded_commands(&ring, corner_radius)
    };

    debug!(
        vertex_count = params.vertex_count(),
        corner_radius,
        is_star = params.is_star(),
        width = bound.width,
        height = bound.height,
        commands = commands.len(),
        control_points = points.len(),
        "built outline"
    );

    let start = match commands.first() {
        Some(PathCommand::MoveTo(p)) => *p,
        _ => bound.center(),
    };

    (Outline { start, commands }, ControlPoints { points })
}

/// Vertices in drawing order. Stars interleave each outer vertex with the inner vertex half a
/// step after it.
fn vertex_ring(params: &ShapeParameters, bound: Bound) -> Vec<Point> {
    let center = bound.center();
    let radius = bound.radius();
    let inner_radius = radius * params.star_ratio();

    let vertex_count = params.vertex_count();
    let angle_step = TAU / vertex_count as f32;
    let half_step = angle_step * 0.5;

    let mut ring = Vec::with_capacity(params.corner_count());
    for i in 0..vertex_count {
        let angle = START_ANGLE + angle_step * i as f32;
        ring.push(point_on_circumference(center, angle, radius));
        if params.is_star() {
            ring.push(point_on_circumference(
                center,
                angle + half_step,
                inner_radius,
            ));
        }
    }
    ring
}

fn sharp_commands(ring: &[Point]) -> Vec<PathCommand> {
    let mut commands = Vec::with_capacity(ring.len() + 1);
    for (i, &vertex) in ring.iter().enumerate() {
        commands.push(if i == 0 {
            PathCommand::MoveTo(vertex)
        } else {
            PathCommand::LineTo(vertex)
        });
    }
    commands.push(PathCommand::Close);
    commands
}

fn rounded_commands(ring: &[Point], corner_radius: f32) -> (Vec<PathCommand>, Vec<Point>) {
    let count = ring.len();
    let mut commands = Vec::with_capacity(count * 2 + 2);
    let mut points = Vec::with_capacity(count * 3);

    for i in 0..count {
        let previous = ring[(i + count - 1) % count];
        let vertex = ring[i];
        let next = ring[(i + 1) % count];

        // Same arguments as the previous corner's line target, so the path stays connected
        let entry = point_on_line(vertex, previous, corner_radius);
        let exit = point_on_line(vertex, next, corner_radius);
        let next_entry = point_on_line(next, vertex, corner_radius);

        if i == 0 {
            commands.push(PathCommand::MoveTo(entry));
        }
        commands.push(PathCommand::QuadraticCurveTo {
            ctrl: vertex,
            to: exit,
        });
        commands.push(PathCommand::LineTo(next_entry));

        points.extend([entry, vertex, exit]);
    }

    commands.push(PathCommand::Close);
    (commands, points)
}
