//! Axis-aligned bounds of UV point sets.

use bevy::prelude::*;

/// Componentwise minimum of `points`, or `None` if empty.
pub fn smallest(points: &[Vec2]) -> Option<Vec2> {
    let (first, rest) = points.split_first()?;
    Some(rest.iter().fold(*first, |acc, p| acc.min(*p)))
}

/// Componentwise maximum of `points`, or `None` if empty.
pub fn largest(points: &[Vec2]) -> Option<Vec2> {
    let (first, rest) = points.split_first()?;
    Some(rest.iter().fold(*first, |acc, p| acc.max(*p)))
}

/// Bounding rectangle of `points` in a single pass.
pub fn uv_bounds(points: &[Vec2]) -> Option<Rect> {
    let (first, rest) = points.split_first()?;
    let mut min = *first;
    let mut max = *first;
    for &p in rest {
        min = min.min(p);
        max = max.max(p);
    }
    Some(Rect { min, max })
}

/// Width and height of the bounds, zero for an empty set.
pub fn uv_size(points: &[Vec2]) -> Vec2 {
    uv_bounds(points).map_or(Vec2::ZERO, |r| r.size())
}

/// Center of the bounds, zero for an empty set.
pub fn uv_center(points: &[Vec2]) -> Vec2 {
    uv_bounds(points).map_or(Vec2::ZERO, |r| r.center())
}
