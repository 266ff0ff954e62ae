//! Stateless geometric helpers used by the level simulation.
//!
//! Every function in this module is total: degenerate inputs such as
//! zero-length segments or coincident points produce zero movement instead of
//! `NaN` coordinates, so a simulation tick can never be halted by geometry.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Cumulative arc lengths measured along a polyline path.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PathLengths {
    segments: Vec<f32>,
    total: f32,
}

impl PathLengths {
    /// Distance from the path start to each vertex, starting with `0.0`.
    #[must_use]
    pub fn segments(&self) -> &[f32] {
        &self.segments
    }

    /// Total length of the path.
    #[must_use]
    pub const fn total(&self) -> f32 {
        self.total
    }

    /// Index of the vertex that closes the segment containing `distance`.
    ///
    /// This is the first index whose cumulative length exceeds `distance`.
    /// Lookups that fall past the final vertex, for example because of
    /// floating-point drift at the path end, clamp to the last segment.
    /// Paths with fewer than two vertices report `None`.
    #[must_use]
    pub fn segment_end(&self, distance: f32) -> Option<usize> {
        if self.segments.len() < 2 {
            return None;
        }

        let last = self.segments.len() - 1;
        let index = self
            .segments
            .iter()
            .position(|&length| length > distance)
            .unwrap_or(last);
        Some(index.clamp(1, last))
    }
}

/// Computes cumulative arc lengths for every vertex of `path`.
#[must_use]
pub fn path_lengths(path: &[Vec2]) -> PathLengths {
    let mut segments = Vec::with_capacity(path.len());
    let mut total = 0.0;
    let mut previous: Option<Vec2> = None;

    for &point in path {
        if let Some(previous) = previous {
            total += previous.distance(point);
        }
        segments.push(total);
        previous = Some(point);
    }

    PathLengths { segments, total }
}

/// Returns the point `traveled` units from `a` in the direction of `b`.
///
/// Callers keep `traveled` within `0..=|b - a|`. A zero-length segment yields `a`.
#[must_use]
pub fn interpolate_along_segment(a: Vec2, b: Vec2, traveled: f32) -> Vec2 {
    a + (b - a).normalize_or_zero() * traveled
}

/// Locates the point `distance` units along `path`.
///
/// Distances beyond the path end clamp onto the final segment; an empty path
/// yields the origin and a single-vertex path yields that vertex.
#[must_use]
pub fn point_along_path(path: &[Vec2], lengths: &PathLengths, distance: f32) -> Vec2 {
    let Some(end) = lengths.segment_end(distance) else {
        return path.first().copied().unwrap_or(Vec2::ZERO);
    };

    let start = end - 1;
    let traveled = distance - lengths.segments()[start];
    let segment_length = lengths.segments()[end] - lengths.segments()[start];
    interpolate_along_segment(path[start], path[end], traveled.clamp(0.0, segment_length))
}

/// Velocity of magnitude `speed` pointing from `source` toward `target`.
///
/// Coincident points produce a zero vector.
#[must_use]
pub fn velocity_vector(source: Vec2, target: Vec2, speed: f32) -> Vec2 {
    (target - source).normalize_or_zero() * speed
}

/// Reports whether `point` lies in the axis-aligned square around `center`.
#[must_use]
pub fn within_square(point: Vec2, center: Vec2, half_side: f32) -> bool {
    (point.x - center.x).abs() <= half_side && (point.y - center.y).abs() <= half_side
}

/// Reports whether `point` lies inside the circle of `radius` around `center`.
#[must_use]
pub fn within_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    if !within_square(point, center, radius) {
        return false;
    }

    point.distance_squared(center) <= radius * radius
}

/// Reports whether `point` lies in the rectangle spanned by the two corners.
#[must_use]
pub fn within_rect(point: Vec2, lower_left: Vec2, upper_right: Vec2) -> bool {
    point.x >= lower_left.x
        && point.x <= upper_right.x
        && point.y >= lower_left.y
        && point.y <= upper_right.y
}
