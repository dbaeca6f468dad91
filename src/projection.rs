//! Planar UV projection for a single face.
//!
//! Projects a polygon's vertices onto axes lying in the polygon's own plane.
//! The axes are not normalized, so their lengths scale the projected UVs.

use bevy::prelude::*;

use crate::constants::MIN_POLYGON_VERTICES;
use crate::error::HotspotError;

/// Plane through a face, in `normal · p + distance = 0` form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacePlane {
    pub normal: Vec3,
    pub distance: f32,
}

impl FacePlane {
    /// Plane through three points, normal following their winding.
    ///
    /// Collinear points give a zero normal.
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let normal = (b - a).cross(c - a).normalize_or_zero();
        Self {
            normal,
            distance: -normal.dot(a),
        }
    }

    /// World axis most aligned with the normal. X wins ties, then Y over Z.
    pub fn closest_axis(&self) -> Vec3 {
        let n = self.normal.abs();
        if n.x >= n.y && n.x >= n.z {
            Vec3::X
        } else if n.y >= n.z {
            Vec3::Y
        } else {
            Vec3::Z
        }
    }

    /// Normal flipped so it points away from the origin side of the plane.
    pub fn outward_normal(&self) -> Vec3 {
        if self.distance < 0.0 {
            -self.normal
        } else {
            self.normal
        }
    }
}

/// U and V projection axes for a plane.
///
/// V is world up unless the face itself is closest to horizontal, then world right.
// TODO: for floors and ceilings, derive U from the longest edge instead of world right.
pub fn projection_axes(plane: &FacePlane) -> (Vec3, Vec3) {
    let v_axis = if plane.closest_axis() != Vec3::Y {
        Vec3::Y
    } else {
        Vec3::X
    };
    let u_axis = plane.outward_normal().cross(v_axis);
    (u_axis, v_axis)
}

/// Project a face's vertices onto its own plane.
///
/// The plane comes from the first three vertices. Returns one UV per vertex.
pub fn planar_project(vertices: &[Vec3]) -> Result<Vec<Vec2>, HotspotError> {
    if vertices.len() < MIN_POLYGON_VERTICES {
        error!(
            "Cannot planar project for less than {} vertices (got {})",
            MIN_POLYGON_VERTICES,
            vertices.len()
        );
        return Err(HotspotError::NotEnoughVertices {
            count: vertices.len(),
        });
    }

    let plane = FacePlane::from_points(vertices[0], vertices[1], vertices[2]);
    let (u_axis, v_axis) = projection_axes(&plane);

    Ok(vertices
        .iter()
        .map(|&p| Vec2::new(u_axis.dot(p), v_axis.dot(p)))
        .collect())
}
