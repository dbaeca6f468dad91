//! Pre-fit rotation of projected UVs.
//!
//! Faces can be turned in 90° steps before the hotspot lookup, either at
//! random or to make wide faces tall (and the reverse).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bounds::{uv_bounds, uv_size};

/// How projected UVs are rotated before a hotspot is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RotateMode {
    /// Keep the projection as is.
    #[default]
    None,
    /// Rotate by a random multiple of 90°.
    Random,
    /// Turn wide faces tall by rotating ±90°.
    RotateHorizontalToVertical,
    /// Turn tall faces wide by rotating ±90°.
    RotateVerticalToHorizontal,
}

impl RotateMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            RotateMode::None => "None",
            RotateMode::Random => "Random",
            RotateMode::RotateHorizontalToVertical => "Horizontal to Vertical",
            RotateMode::RotateVerticalToHorizontal => "Vertical to Horizontal",
        }
    }
}

/// Pick a rotation in degrees for UVs of the given size, or `None` to leave them.
pub fn choose_rotation(mode: RotateMode, size: Vec2, rng: &mut fastrand::Rng) -> Option<f32> {
    match mode {
        RotateMode::None => None,
        RotateMode::Random => Some(rng.u32(0..4) as f32 * 90.0),
        RotateMode::RotateHorizontalToVertical if size.x > size.y => Some(quarter_turn(rng)),
        RotateMode::RotateVerticalToHorizontal if size.y > size.x => Some(quarter_turn(rng)),
        _ => None,
    }
}

fn quarter_turn(rng: &mut fastrand::Rng) -> f32 {
    if rng.bool() { -90.0 } else { 90.0 }
}

/// Rotate UVs counter-clockwise by `degrees` about their bounding-box center.
pub fn rotate_uvs(uvs: &mut [Vec2], degrees: f32) {
    let Some(bounds) = uv_bounds(uvs) else {
        return;
    };
    let center = bounds.center();
    let rotation = Vec2::from_angle(degrees.to_radians());
    for uv in uvs.iter_mut() {
        *uv = rotation.rotate(*uv - center) + center;
    }
}

/// Apply the rotation policy in place and return the UV size afterwards.
pub fn orient_uvs(uvs: &mut [Vec2], mode: RotateMode, rng: &mut fastrand::Rng) -> Vec2 {
    let size = uv_size(uvs);
    match choose_rotation(mode, size, rng) {
        Some(degrees) => {
            debug!("Rotating hotspot UVs by {} degrees ({})", degrees, mode.display_name());
            rotate_uvs(uvs, degrees);
            uv_size(uvs)
        }
        None => size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: Vec2, b: Vec2) -> bool {
        (a - b).abs().max_element() < EPSILON
    }

    fn make_rect_uvs(width: f32, height: f32) -> Vec<Vec2> {
        vec![
            Vec2::new(1.0, 2.0),
            Vec2::new(1.0 + width, 2.0),
            Vec2::new(1.0 + width, 2.0 + height),
            Vec2::new(1.0, 2.0 + height),
        ]
    }

    #[test]
    fn quarter_turns_swap_size() {
        for degrees in [90.0, 270.0, -90.0] {
            let mut uvs = make_rect_uvs(4.0, 1.0);
            rotate_uvs(&mut uvs, degrees);
            assert!(approx_eq(uv_size(&uvs), Vec2::new(1.0, 4.0)), "{degrees}");
        }
    }

    #[test]
    fn half_and_full_turns_keep_size() {
        for degrees in [0.0, 180.0, 360.0] {
            let mut uvs = make_rect_uvs(4.0, 1.0);
            rotate_uvs(&mut uvs, degrees);
            assert!(approx_eq(uv_size(&uvs), Vec2::new(4.0, 1.0)), "{degrees}");
        }
    }

    #[test]
    fn rotation_keeps_center() {
        let mut uvs = make_rect_uvs(4.0, 1.0);
        rotate_uvs(&mut uvs, 90.0);
        let center = uv_bounds(&uvs).unwrap().center();
        assert!(approx_eq(center, Vec2::new(3.0, 2.5)));
    }

    #[test]
    fn rotation_is_counter_clockwise() {
        let mut uvs = vec![Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0)];
        rotate_uvs(&mut uvs, 90.0);
        assert!(approx_eq(uvs[0], Vec2::new(0.0, -1.0)));
        assert!(approx_eq(uvs[1], Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn rotating_empty_set_is_a_no_op() {
        let mut uvs: Vec<Vec2> = Vec::new();
        rotate_uvs(&mut uvs, 90.0);
        assert!(uvs.is_empty());
    }

    #[test]
    fn none_never_rotates() {
        let mut rng = fastrand::Rng::with_seed(1);
        for _ in 0..16 {
            assert_eq!(choose_rotation(RotateMode::None, Vec2::new(5.0, 1.0), &mut rng), None);
        }
    }

    #[test]
    fn random_picks_quarter_multiples() {
        let mut rng = fastrand::Rng::with_seed(7);
        let mut seen = [false; 4];
        for _ in 0..64 {
            let degrees = choose_rotation(RotateMode::Random, Vec2::ONE, &mut rng).unwrap();
            let step = (degrees / 90.0) as usize;
            assert_eq!(step as f32 * 90.0, degrees);
            seen[step] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn horizontal_to_vertical_only_for_wide() {
        let mut rng = fastrand::Rng::with_seed(3);
        let mode = RotateMode::RotateHorizontalToVertical;
        assert_eq!(choose_rotation(mode, Vec2::new(1.0, 3.0), &mut rng), None);
        assert_eq!(choose_rotation(mode, Vec2::new(2.0, 2.0), &mut rng), None);
        let degrees = choose_rotation(mode, Vec2::new(3.0, 1.0), &mut rng).unwrap();
        assert_eq!(degrees.abs(), 90.0);
    }

    #[test]
    fn vertical_to_horizontal_only_for_tall() {
        let mut rng = fastrand::Rng::with_seed(3);
        let mode = RotateMode::RotateVerticalToHorizontal;
        assert_eq!(choose_rotation(mode, Vec2::new(3.0, 1.0), &mut rng), None);
        let degrees = choose_rotation(mode, Vec2::new(1.0, 3.0), &mut rng).unwrap();
        assert_eq!(degrees.abs(), 90.0);
    }

    #[test]
    fn quarter_turn_sign_varies() {
        let mut rng = fastrand::Rng::with_seed(11);
        let mut signs = (false, false);
        for _ in 0..64 {
            match quarter_turn(&mut rng) {
                d if d > 0.0 => signs.0 = true,
                _ => signs.1 = true,
            }
        }
        assert!(signs.0 && signs.1);
    }

    #[test]
    fn orient_reports_swapped_size() {
        let mut rng = fastrand::Rng::with_seed(5);
        let mut uvs = make_rect_uvs(4.0, 1.0);
        let size = orient_uvs(&mut uvs, RotateMode::RotateHorizontalToVertical, &mut rng);
        assert!(approx_eq(size, Vec2::new(1.0, 4.0)));
        assert_eq!(uvs.len(), 4);

        let size = orient_uvs(&mut uvs, RotateMode::RotateHorizontalToVertical, &mut rng);
        assert!(approx_eq(size, Vec2::new(1.0, 4.0)));
    }

    #[test]
    fn same_seed_same_rotation() {
        let mut a = fastrand::Rng::with_seed(99);
        let mut b = fastrand::Rng::with_seed(99);
        for _ in 0..8 {
            assert_eq!(
                choose_rotation(RotateMode::Random, Vec2::ONE, &mut a),
                choose_rotation(RotateMode::Random, Vec2::ONE, &mut b)
            );
        }
    }
}
