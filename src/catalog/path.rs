//! SVG path data parsing and arc-length queries.
//!
//! Route shapes arrive as SVG path strings. They are flattened once into a
//! polyline with cumulative lengths so that per-frame queries are a binary
//! search and a lerp.

use bevy::prelude::*;
use kurbo::{BezPath, PathEl, Point, SvgParseError};
use thiserror::Error;

/// Maximum distance, in logical map units, between a curve and its
/// flattened polyline.
const FLATTEN_TOLERANCE: f64 = 0.05;

/// Read-only geometry queries the motion engine and hover sampling need.
///
/// `point_at_length` must be continuous over `[0, total_length()]` and clamp
/// lengths outside it.
pub trait PathGeometry {
    fn total_length(&self) -> f32;
    fn point_at_length(&self, length: f32) -> Vec2;
}

#[derive(Debug, Error)]
pub enum PathError {
    #[error("path data is empty")]
    Empty,

    #[error("path must start with a move-to, found '{0}'")]
    MissingMoveTo(char),

    #[error("malformed path data: {0}")]
    Syntax(#[from] SvgParseError),
}

/// A flattened route shape in logical map coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoutePath {
    points: Vec<Vec2>,
    /// Arc length from the first point to each point.
    cumulative: Vec<f32>,
}

impl RoutePath {
    /// Parse SVG path data. Every command SVG defines is accepted, absolute
    /// or relative; curves and arcs are flattened.
    pub fn parse(data: &str) -> Result<Self, PathError> {
        match data.trim_start().chars().next() {
            None => return Err(PathError::Empty),
            Some('M' | 'm') => {}
            Some(other) => return Err(PathError::MissingMoveTo(other)),
        }

        let bez = BezPath::from_svg(data)?;
        let mut builder = PathBuilder::default();
        bez.flatten(FLATTEN_TOLERANCE, |el| match el {
            PathEl::MoveTo(p) => builder.move_to(to_vec2(p)),
            PathEl::LineTo(p) => builder.line_to(to_vec2(p)),
            PathEl::ClosePath => builder.close(),
            // Flattening only ever yields the three above.
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
        });

        Ok(builder.finish())
    }

    /// Build a path from an already-flat list of points.
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Self {
        let mut builder = PathBuilder::default();
        for point in points {
            if builder.points.is_empty() {
                builder.move_to(point);
            } else {
                builder.line_to(point);
            }
        }
        builder.finish()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }
}

impl PathGeometry for RoutePath {
    fn total_length(&self) -> f32 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    fn point_at_length(&self, length: f32) -> Vec2 {
        let Some(&first) = self.points.first() else {
            return Vec2::ZERO;
        };
        let total = self.total_length();
        if total <= 0.0 || !length.is_finite() {
            return first;
        }

        let target = length.clamp(0.0, total);
        let idx = self.cumulative.partition_point(|&c| c < target);
        if idx == 0 {
            return first;
        }
        if idx >= self.points.len() {
            return self.points[self.points.len() - 1];
        }

        let (start, end) = (self.cumulative[idx - 1], self.cumulative[idx]);
        let span = end - start;
        if span <= f32::EPSILON {
            return self.points[idx];
        }
        self.points[idx - 1].lerp(self.points[idx], (target - start) / span)
    }
}

fn to_vec2(p: Point) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}

/// Accumulates a polyline and its running arc length.
#[derive(Default)]
struct PathBuilder {
    points: Vec<Vec2>,
    cumulative: Vec<f32>,
    cursor: Vec2,
    subpath_start: Vec2,
}

impl PathBuilder {
    /// Moves add a vertex but no length.
    fn move_to(&mut self, p: Vec2) {
        let length = self.cumulative.last().copied().unwrap_or(0.0);
        self.points.push(p);
        self.cumulative.push(length);
        self.cursor = p;
        self.subpath_start = p;
    }

    fn line_to(&mut self, p: Vec2) {
        let length = self.cumulative.last().copied().unwrap_or(0.0) + self.cursor.distance(p);
        self.points.push(p);
        self.cumulative.push(length);
        self.cursor = p;
    }

    fn close(&mut self) {
        let start = self.subpath_start;
        self.line_to(start);
    }

    fn finish(self) -> RoutePath {
        RoutePath {
            points: self.points,
            cumulative: self.cumulative,
        }
    }
}
