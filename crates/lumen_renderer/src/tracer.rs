//! Nearest-hit search.

use crate::{shade, Color, Ray, RayHit, Scene};

/// Trace a ray through the scene and return the shaded color of the
/// nearest hit, or `None` when nothing in front of the ray origin is hit.
///
/// This is where hits behind the origin get filtered out: primitives
/// report whatever root they found, and only `0 <= t < closest` counts.
/// The comparison is strict, so when two primitives intersect at exactly
/// the same distance the one declared first in the scene wins.
pub fn trace(ray: &Ray, scene: &Scene) -> Option<Color> {
    let mut closest_t = f32::INFINITY;
    let mut closest: Option<(RayHit, Color)> = None;

    for primitive in &scene.primitives {
        if let Some(hit) = primitive.intersect(ray) {
            if hit.t >= 0.0 && hit.t < closest_t {
                closest_t = hit.t;
                closest = Some((hit, primitive.color()));
            }
        }
    }

    closest.map(|(hit, base)| shade(base, hit.normal, hit.point, &scene.lights, scene.ambient_light))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Scene, Sphere, Vec3};

    fn unlit_scene(primitives: Vec<Sphere>) -> Scene {
        let mut builder = Scene::builder().with_ambient_light(1.0);
        for sphere in primitives {
            builder = builder.with_primitive(sphere);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_trace_miss_returns_none() {
        let scene = unlit_scene(vec![Sphere::new(
            Vec3::new(0.0, 0.0, -60.0),
            10.0,
            Color::new(1.0, 0.0, 0.0),
        )]);
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(trace(&ray, &scene).is_none());
    }

    #[test]
    fn test_trace_picks_nearest() {
        // Far sphere declared first; the near one must still win.
        let scene = unlit_scene(vec![
            Sphere::new(Vec3::new(0.0, 0.0, -100.0), 10.0, Color::new(1.0, 0.0, 0.0)),
            Sphere::new(Vec3::new(0.0, 0.0, -60.0), 10.0, Color::new(0.0, 1.0, 0.0)),
        ]);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        // Ambient 1.0 and no lights: shaded color == base color
        let color = trace(&ray, &scene).unwrap();
        assert_eq!(color, Color::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_trace_tie_break_first_declared_wins() {
        // Identical spheres at the same distance: strict < keeps the
        // first declaration.
        let scene = unlit_scene(vec![
            Sphere::new(Vec3::new(0.0, 0.0, -60.0), 10.0, Color::new(1.0, 0.0, 0.0)),
            Sphere::new(Vec3::new(0.0, 0.0, -60.0), 10.0, Color::new(0.0, 0.0, 1.0)),
        ]);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let color = trace(&ray, &scene).unwrap();
        assert_eq!(color, Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_trace_ignores_negative_roots() {
        // One sphere behind the camera (finite but negative root), one
        // in front. Only the one in front qualifies.
        let scene = unlit_scene(vec![
            Sphere::new(Vec3::new(0.0, 0.0, 30.0), 10.0, Color::new(1.0, 0.0, 0.0)),
            Sphere::new(Vec3::new(0.0, 0.0, -60.0), 10.0, Color::new(0.0, 1.0, 0.0)),
        ]);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let color = trace(&ray, &scene).unwrap();
        assert_eq!(color, Color::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_trace_only_negative_roots_is_a_miss() {
        let scene = unlit_scene(vec![Sphere::new(
            Vec3::new(0.0, 0.0, 60.0),
            10.0,
            Color::new(1.0, 0.0, 0.0),
        )]);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(trace(&ray, &scene).is_none());
    }
}
