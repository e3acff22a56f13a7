//! Primitive dispatch and the geometric hit record.

use crate::{Color, Cuboid, Ray, Sphere, Vec3};

/// Record of a ray-primitive intersection, before shading.
///
/// `t` may be negative: primitives report the root they found and leave
/// the behind-the-origin filter to the tracer.
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    /// Ray parameter where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Surface normal at the intersection (unit length, or zero for a
    /// degenerate hit exactly at the reference point)
    pub normal: Vec3,
}

/// A geometric object that can be intersected by rays.
///
/// The primitive set is closed, so this is an enum rather than a trait
/// object: the renderer only ever deals in spheres and axis-aligned
/// cuboids.
#[derive(Debug, Clone)]
pub enum Primitive {
    Sphere(Sphere),
    Cuboid(Cuboid),
}

impl Primitive {
    /// Test this primitive against a ray.
    ///
    /// Returns `None` on a miss. A returned hit may still lie behind the
    /// ray origin (negative `t`); callers are expected to filter.
    pub fn intersect(&self, ray: &Ray) -> Option<RayHit> {
        match self {
            Primitive::Sphere(sphere) => sphere.intersect(ray),
            Primitive::Cuboid(cuboid) => cuboid.intersect(ray),
        }
    }

    /// Get the primitive's base surface color.
    pub fn color(&self) -> Color {
        match self {
            Primitive::Sphere(sphere) => sphere.color,
            Primitive::Cuboid(cuboid) => cuboid.color,
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Cuboid> for Primitive {
    fn from(cuboid: Cuboid) -> Self {
        Primitive::Cuboid(cuboid)
    }
}
