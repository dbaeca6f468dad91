//! Centralized constants for hotspot mapping
//!
//! Default values shared by the settings, the atlas and the pipeline.

/// Base multiplier applied to the projected size before asking the atlas for a hotspot.
///
/// `1 / 32`: one atlas unit per 32 world units.
pub const DEFAULT_SCALAR: f32 = 0.03125;

/// Index of the hotspot corner used as the translation origin when fitting.
pub const ANCHOR_CORNER: usize = 3;

/// Minimum number of vertices a face needs to define a plane.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Defaults for [`crate::atlas::HotspotAtlas`]
pub mod atlas_defaults {
    /// Atlas-specific multiplier on top of the caller's scalar
    pub const HOTSPOT_SCALAR: f32 = 1.0;
    /// Largest requested/hotspot size ratio accepted when the guard is enforced
    pub const FALLBACK_THRESHOLD: f32 = 2.0;
}
