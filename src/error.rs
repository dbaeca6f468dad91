//! Error types for hotspot mapping.

use bevy::prelude::*;
use thiserror::Error;

/// Errors that can occur while mapping a face or loading an atlas.
#[derive(Debug, Error)]
pub enum HotspotError {
    /// The face has too few vertices to define a plane.
    #[error("cannot planar project for less than 3 vertices (got {count})")]
    NotEnoughVertices {
        /// Number of vertices supplied.
        count: usize,
    },

    /// The atlas could not provide any hotspot region.
    #[error("atlas has no hotspot regions")]
    NoHotspot,

    /// The resolved hotspot is too small for the requested size.
    #[error("requested size {requested} exceeds hotspot size {hotspot} by more than {threshold}x")]
    ExceedsFallbackThreshold {
        /// Size passed to the resolver.
        requested: Vec2,
        /// Size of the resolved hotspot.
        hotspot: Vec2,
        /// Ratio limit that was exceeded.
        threshold: f32,
    },

    /// Reading or writing an atlas file failed.
    #[error("atlas io error: {0}")]
    Io(#[from] std::io::Error),

    /// An atlas file was not valid RON.
    #[error("atlas parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// An atlas could not be serialized.
    #[error("atlas serialization error: {0}")]
    Serialize(#[from] ron::Error),
}
