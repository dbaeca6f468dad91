//! # Bevy Hotspot UV
//!
//! Hotspot UV mapping for level geometry: faces are textured by fitting their
//! planar projection into the best matching rectangle of a shared atlas,
//! instead of being unwrapped one by one.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bevy::prelude::*;
//! use bevy_hotspot_uv::prelude::*;
//!
//! let atlas = HotspotAtlas::load("assets/hotspots/trim_sheet.ron").unwrap();
//! let face = [
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(128.0, 0.0, 0.0),
//!     Vec3::new(128.0, 32.0, 0.0),
//!     Vec3::new(0.0, 32.0, 0.0),
//! ];
//! let uvs = try_get_hotspot_uvs(&face, &atlas, &HotspotSettings::default()).unwrap();
//! assert_eq!(uvs.len(), face.len());
//! ```
//!
//! ## Pipeline
//!
//! - [`projection`]: project the face onto its own plane
//! - [`orientation`]: optionally rotate the projection in 90° steps
//! - [`atlas`]: pick the hotspot closest in aspect ratio and size
//! - [`fit`]: scale the UVs into the hotspot, optionally mirrored
//!
//! Rotation and mirroring draw from a `fastrand::Rng`; pass a seed in
//! [`HotspotSettings`] or call [`try_get_hotspot_uvs_with_rng`] for
//! repeatable results.

pub mod atlas;
pub mod bounds;
pub mod constants;
pub mod error;
pub mod fit;
pub mod hotspot;
pub mod orientation;
pub mod projection;
pub mod settings;

pub use atlas::{HotspotAtlas, HotspotRegion, HotspotSource};
pub use error::HotspotError;
pub use hotspot::{try_get_hotspot_uvs, try_get_hotspot_uvs_with_rng};
pub use orientation::RotateMode;
pub use settings::HotspotSettings;

/// Convenient re-exports of commonly used types.
pub mod prelude {
    pub use crate::atlas::{HotspotAtlas, HotspotRegion, HotspotSource};
    pub use crate::error::HotspotError;
    pub use crate::fit::{fit_uvs, fit_uvs_randomized};
    pub use crate::hotspot::{try_get_hotspot_uvs, try_get_hotspot_uvs_with_rng};
    pub use crate::orientation::RotateMode;
    pub use crate::projection::planar_project;
    pub use crate::settings::HotspotSettings;
}
