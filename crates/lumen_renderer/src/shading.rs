//! Local illumination.
//!
//! Ambient term plus one diffuse term per light. Purely local: no shadow
//! rays, no occlusion, no specular highlight, no falloff with distance.

use crate::{Color, Light, Vec3};

/// Shade a hit point.
///
/// Starts from `base * ambient` and adds
/// `intensity * base * dot(normal, light_dir)` per light. The dot
/// product is not clamped at zero, so a light behind the surface
/// subtracts brightness instead of being ignored; the result is likewise
/// never clamped to [0, 1]. Both are part of the renderer's defined
/// output.
pub fn shade(base: Color, normal: Vec3, point: Vec3, lights: &[Light], ambient: f32) -> Color {
    let mut color = base * ambient;

    for light in lights {
        let light_dir = (light.position - point).normalize_or_zero();
        color += base * (light.intensity * normal.dot(light_dir));
    }

    color
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    #[test]
    fn test_ambient_only() {
        let color = shade(WHITE, Vec3::Z, Vec3::ZERO, &[], 0.3);
        assert!((color - Color::new(0.3, 0.3, 0.3)).length() < 1e-6);
    }

    #[test]
    fn test_facing_light_adds_above_ambient() {
        // Light straight along the normal: full diffuse contribution on
        // top of the ambient floor, with no ceiling applied.
        let lights = [Light::new(Vec3::new(0.0, 0.0, 10.0), 1.0)];
        let color = shade(WHITE, Vec3::Z, Vec3::ZERO, &lights, 0.3);
        assert!((color.x - 1.3).abs() < 1e-6);
        assert!(color.x > 1.0);
    }

    #[test]
    fn test_light_behind_surface_subtracts() {
        // Unclamped dot product: a light behind the surface darkens it
        // below the ambient level rather than being ignored.
        let lights = [Light::new(Vec3::new(0.0, 0.0, -10.0), 1.0)];
        let color = shade(WHITE, Vec3::Z, Vec3::ZERO, &lights, 0.3);
        assert!((color.x - (0.3 - 1.0)).abs() < 1e-6);
        assert!(color.x < 0.0);
    }

    #[test]
    fn test_zero_intensity_is_ambient_baseline() {
        let off = [Light::new(Vec3::new(0.0, 0.0, 10.0), 0.0)];
        let color = shade(WHITE, Vec3::Z, Vec3::ZERO, &off, 0.3);
        assert!((color - Color::new(0.3, 0.3, 0.3)).length() < 1e-6);
    }

    #[test]
    fn test_light_at_hit_point_contributes_nothing() {
        // light.position == point gives a zero light_dir after the
        // normalize-or-zero fallback, so the dot product is 0.
        let lights = [Light::new(Vec3::ZERO, 5.0)];
        let color = shade(WHITE, Vec3::Z, Vec3::ZERO, &lights, 0.3);
        assert!((color - Color::new(0.3, 0.3, 0.3)).length() < 1e-6);
    }

    #[test]
    fn test_base_color_scales_per_channel() {
        let base = Color::new(1.0, 0.5, 0.0);
        let lights = [Light::new(Vec3::new(0.0, 0.0, 10.0), 0.4)];
        let color = shade(base, Vec3::Z, Vec3::ZERO, &lights, 0.3);
        // each channel: base * 0.3 + base * 0.4
        assert!((color - base * 0.7).length() < 1e-6);
    }
}
