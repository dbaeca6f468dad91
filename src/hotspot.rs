//! Hotspot UV mapping for a single face.
//!
//! Project the face onto its plane, optionally rotate, ask the atlas for the
//! best hotspot, then fit the UVs into it.

use bevy::prelude::*;

use crate::atlas::{exceeds_fallback_threshold, region_bounds, HotspotSource};
use crate::error::HotspotError;
use crate::fit::{fit_uvs, fit_uvs_randomized};
use crate::orientation::orient_uvs;
use crate::projection::planar_project;
use crate::settings::HotspotSettings;

/// Compute hotspot UVs for a face, one per vertex.
///
/// Uses `settings.seed` for rotation and mirroring, or a fresh seed if unset.
pub fn try_get_hotspot_uvs(
    vertices: &[Vec3],
    atlas: &impl HotspotSource,
    settings: &HotspotSettings,
) -> Result<Vec<Vec2>, HotspotError> {
    let mut rng = settings.rng();
    try_get_hotspot_uvs_with_rng(vertices, atlas, settings, &mut rng)
}

/// [`try_get_hotspot_uvs`] with a caller-owned random source.
///
/// `settings.seed` is ignored.
pub fn try_get_hotspot_uvs_with_rng(
    vertices: &[Vec3],
    atlas: &impl HotspotSource,
    settings: &HotspotSettings,
    rng: &mut fastrand::Rng,
) -> Result<Vec<Vec2>, HotspotError> {
    let mut uvs = planar_project(vertices)?;

    let approximate_size = orient_uvs(&mut uvs, atlas.rotate_mode(), rng);
    let requested = approximate_size * settings.scalar * atlas.hotspot_scalar();

    let Some(region) = atlas.best_region(requested.x, requested.y) else {
        warn!("No hotspot available for requested size {}", requested);
        return Err(HotspotError::NoHotspot);
    };
    let hotspot_size = region_bounds(&region).size();
    debug!(
        "Resolved hotspot of size {} for requested size {}",
        hotspot_size, requested
    );

    if let Some(threshold) = atlas.fallback_threshold() {
        if exceeds_fallback_threshold(requested, hotspot_size, threshold) {
            warn!(
                "Hotspot of size {} is too small for {} (threshold {})",
                hotspot_size, requested, threshold
            );
            return Err(HotspotError::ExceedsFallbackThreshold {
                requested,
                hotspot: hotspot_size,
                threshold,
            });
        }
    }

    if settings.mirror {
        fit_uvs_randomized(&mut uvs, &region, rng);
    } else {
        fit_uvs(&mut uvs, &region);
    }
    Ok(uvs)
}
