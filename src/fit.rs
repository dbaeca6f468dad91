//! Fitting projected UVs into a hotspot region.
//!
//! The UVs are moved to the origin, scaled uniformly so the larger ratio
//! matches the region, then moved onto the region's anchor corner. The shape
//! is never stretched, so one axis may end up shorter than the region.

use bevy::prelude::*;

use crate::atlas::{region_bounds, HotspotRegion};
use crate::bounds::{largest, smallest};
use crate::constants::ANCHOR_CORNER;

/// Scale and place `uvs` inside `target` without mirroring.
pub fn fit_uvs(uvs: &mut [Vec2], target: &HotspotRegion) {
    let Some(offset) = smallest(uvs) else {
        return;
    };
    for uv in uvs.iter_mut() {
        *uv -= offset;
    }

    // Recomputed after the shift; the UV min is now the origin.
    let (Some(min), Some(max)) = (smallest(uvs), largest(uvs)) else {
        return;
    };
    let target_bounds = region_bounds(target);

    let ratio = (max - min) / target_bounds.size();
    let scale = ratio.max_element();

    // Zero-size UVs give a zero or NaN scale; a zero-size region gives an
    // infinite one, which collapses the UVs onto the anchor.
    if scale > 0.0 {
        for uv in uvs.iter_mut() {
            *uv /= scale;
        }
    }

    let anchor = target[ANCHOR_CORNER];
    for uv in uvs.iter_mut() {
        *uv += anchor;
    }
}

/// Flip UVs about the center of `target`'s bounds.
pub fn mirror_uvs(uvs: &mut [Vec2], target: &HotspotRegion, flip_x: bool, flip_y: bool) {
    if !flip_x && !flip_y {
        return;
    }
    let center = region_bounds(target).center();
    for uv in uvs.iter_mut() {
        if flip_x {
            uv.x = center.x - (uv.x - center.x);
        }
        if flip_y {
            uv.y = center.y - (uv.y - center.y);
        }
    }
}

/// [`fit_uvs`], then mirror each axis independently with even odds.
pub fn fit_uvs_randomized(uvs: &mut [Vec2], target: &HotspotRegion, rng: &mut fastrand::Rng) {
    fit_uvs(uvs, target);
    let flip_x = rng.bool();
    let flip_y = rng.bool();
    mirror_uvs(uvs, target, flip_x, flip_y);
}
