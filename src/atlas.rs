//! Hotspot atlases and best-fit region lookup.
//!
//! An atlas is a list of rectangles in normalized UV space. Given the size a
//! face wants, the atlas picks the rectangle closest in aspect ratio and area
//! and hands it back as four corners.
//!
//! Atlases persist as RON:
//!
//! ```ron
//! (
//!     name: "trim_sheet",
//!     rotate: RotateHorizontalToVertical,
//!     hotspot_scalar: 1.0,
//!     hotspots: [
//!         (min: (0.0, 0.0), max: (1.0, 0.25)),
//!         (min: (0.0, 0.25), max: (0.5, 1.0)),
//!     ],
//! )
//! ```

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::atlas_defaults;
use crate::error::HotspotError;
use crate::orientation::RotateMode;

/// Four corners of a hotspot rectangle in atlas UV space.
///
/// Corner order is significant: index [`ANCHOR_CORNER`](crate::constants::ANCHOR_CORNER)
/// is the origin fitted UVs are placed on.
pub type HotspotRegion = [Vec2; 4];

/// Corners of `rect` as top-left, top-right, bottom-right, bottom-left (V up).
///
/// The last corner, the anchor, is the rectangle's minimum.
pub fn region_from_rect(rect: Rect) -> HotspotRegion {
    [
        Vec2::new(rect.min.x, rect.max.y),
        rect.max,
        Vec2::new(rect.max.x, rect.min.y),
        rect.min,
    ]
}

/// Axis-aligned bounds of a region's corners.
pub fn region_bounds(region: &HotspotRegion) -> Rect {
    let min = region.iter().fold(region[0], |acc, p| acc.min(*p));
    let max = region.iter().fold(region[0], |acc, p| acc.max(*p));
    Rect { min, max }
}

/// True when the requested size is more than `threshold` times the hotspot on either axis.
pub fn exceeds_fallback_threshold(requested: Vec2, hotspot: Vec2, threshold: f32) -> bool {
    let ratio = requested / hotspot;
    ratio.x > threshold || ratio.y > threshold
}

/// Anything that can hand out hotspot regions for a requested size.
pub trait HotspotSource {
    /// Rotation applied to projected UVs before lookup.
    fn rotate_mode(&self) -> RotateMode;

    /// Multiplier applied on top of the caller's scalar.
    fn hotspot_scalar(&self) -> f32;

    /// Ratio limit for rejecting poor fits. `None` disables the check.
    fn fallback_threshold(&self) -> Option<f32> {
        None
    }

    /// Best region for a face of `width` by `height` atlas units.
    fn best_region(&self, width: f32, height: f32) -> Option<HotspotRegion>;
}

/// A texture atlas described by its hotspot rectangles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotspotAtlas {
    /// Display name
    pub name: String,
    /// Rotation applied before lookup
    pub rotate: RotateMode,
    /// Multiplier on the requested size
    pub hotspot_scalar: f32,
    /// Largest accepted requested/hotspot size ratio
    pub fallback_threshold: f32,
    /// Reject fits beyond `fallback_threshold` (off by default)
    pub enforce_fallback: bool,
    /// Hotspot rectangles in normalized UV space
    pub hotspots: Vec<Rect>,
}

impl Default for HotspotAtlas {
    fn default() -> Self {
        Self {
            name: String::new(),
            rotate: RotateMode::default(),
            hotspot_scalar: atlas_defaults::HOTSPOT_SCALAR,
            fallback_threshold: atlas_defaults::FALLBACK_THRESHOLD,
            enforce_fallback: false,
            hotspots: Vec::new(),
        }
    }
}

impl HotspotAtlas {
    /// Create an empty atlas.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Tile the unit square into `columns` x `rows` equal hotspots.
    pub fn from_grid(name: impl Into<String>, columns: u32, rows: u32) -> Self {
        let mut atlas = Self::new(name);
        if columns == 0 || rows == 0 {
            return atlas;
        }
        let cell = Vec2::new(1.0 / columns as f32, 1.0 / rows as f32);
        for row in 0..rows {
            for column in 0..columns {
                let min = Vec2::new(column as f32, row as f32) * cell;
                atlas.hotspots.push(Rect::from_corners(min, min + cell));
            }
        }
        atlas
    }

    /// Set the rotation mode.
    pub fn with_rotate_mode(mut self, mode: RotateMode) -> Self {
        self.rotate = mode;
        self
    }

    /// Set the size multiplier.
    pub fn with_hotspot_scalar(mut self, scalar: f32) -> Self {
        self.hotspot_scalar = scalar;
        self
    }

    /// Enable the fallback check with the given ratio.
    pub fn with_fallback_threshold(mut self, threshold: f32) -> Self {
        self.fallback_threshold = threshold;
        self.enforce_fallback = true;
        self
    }

    /// Add a hotspot rectangle.
    pub fn with_hotspot(mut self, rect: Rect) -> Self {
        self.hotspots.push(rect);
        self
    }

    /// Rectangle closest to the requested size, by aspect ratio and area.
    ///
    /// Ties keep the earlier rectangle. Zero-area rectangles are skipped.
    pub fn best_rect(&self, width: f32, height: f32) -> Option<Rect> {
        let requested = if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Vec2::new(width, height)
        } else {
            Vec2::ONE
        };
        let aspect = requested.x / requested.y;
        let area = requested.x * requested.y;

        let mut best: Option<(f32, Rect)> = None;
        for rect in &self.hotspots {
            let size = rect.size();
            if size.x <= 0.0 || size.y <= 0.0 {
                continue;
            }
            let aspect_score = (aspect / (size.x / size.y)).ln().abs();
            let area_score = (area / (size.x * size.y)).ln().abs();
            let score = aspect_score + area_score;
            if best.is_none_or(|(best_score, _)| score < best_score) {
                best = Some((score, *rect));
            }
        }
        best.map(|(_, rect)| rect)
    }

    /// Parse an atlas from RON text.
    pub fn from_ron_str(contents: &str) -> Result<Self, HotspotError> {
        Ok(ron::from_str(contents)?)
    }

    /// Serialize the atlas as pretty RON.
    pub fn to_ron_string(&self) -> Result<String, HotspotError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Load an atlas from a `.ron` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HotspotError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).inspect_err(|e| {
            warn!("Failed to read hotspot atlas {:?}: {}", path, e);
        })?;
        let atlas = Self::from_ron_str(&contents).inspect_err(|e| {
            warn!("Failed to parse hotspot atlas {:?}: {}", path, e);
        })?;
        debug!(
            "Loaded hotspot atlas '{}' with {} hotspots",
            atlas.name,
            atlas.hotspots.len()
        );
        Ok(atlas)
    }

    /// Write the atlas to a `.ron` file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), HotspotError> {
        let contents = self.to_ron_string()?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

impl HotspotSource for HotspotAtlas {
    fn rotate_mode(&self) -> RotateMode {
        self.rotate
    }

    fn hotspot_scalar(&self) -> f32 {
        self.hotspot_scalar
    }

    fn fallback_threshold(&self) -> Option<f32> {
        self.enforce_fallback.then_some(self.fallback_threshold)
    }

    fn best_region(&self, width: f32, height: f32) -> Option<HotspotRegion> {
        self.best_rect(width, height).map(region_from_rect)
    }
}
