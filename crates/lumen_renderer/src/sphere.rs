//! Sphere primitive.

use crate::{Color, RayHit, Ray, Vec3};

/// A sphere defined by center, radius, and base color.
#[derive(Debug, Clone)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub color: Color,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    /// Ray-sphere intersection via the quadratic formula.
    ///
    /// Solves `a*t^2 + b*t + c = 0` with `a = d.d`, `b = 2*(o-c).d`,
    /// `c = (o-c).(o-c) - r^2`, which is correct for unnormalized
    /// directions. Only the near root `(-b - sqrt(disc)) / 2a` is ever
    /// reported; it may be negative (origin inside or past the sphere)
    /// and the tracer filters those, rather than this method falling
    /// back to the far root.
    pub fn intersect(&self, ray: &Ray) -> Option<RayHit> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let t = (-b - discriminant.sqrt()) / (2.0 * a);
        let point = ray.at(t);
        let normal = (point - self.center).normalize_or_zero();

        Some(RayHit { t, point, normal })
    }
}
