//! Map a few brush faces onto the bundled trim sheet and print their UVs.
//!
//! Run with: `cargo run --example map_face`

use bevy::prelude::*;
use bevy_hotspot_uv::prelude::*;

fn main() -> Result<(), HotspotError> {
    let atlas = HotspotAtlas::load("assets/hotspots/trim_sheet.ron")?;
    let settings = HotspotSettings::default().with_seed(7);

    let faces: [(&str, Vec<Vec3>); 3] = [
        (
            "wall",
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(256.0, 0.0, 0.0),
                Vec3::new(256.0, 32.0, 0.0),
                Vec3::new(0.0, 32.0, 0.0),
            ],
        ),
        (
            "floor",
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 64.0),
                Vec3::new(64.0, 0.0, 64.0),
                Vec3::new(64.0, 0.0, 0.0),
            ],
        ),
        (
            "wedge",
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(32.0, 0.0, 32.0),
                Vec3::new(0.0, 96.0, 0.0),
            ],
        ),
    ];

    for (name, face) in &faces {
        let uvs = try_get_hotspot_uvs(face, &atlas, &settings)?;
        println!("{name}:");
        for uv in &uvs {
            println!("  {uv}");
        }
    }

    Ok(())
}
