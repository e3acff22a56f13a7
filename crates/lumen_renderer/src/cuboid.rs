//! Axis-aligned cuboid primitive.

use crate::{Color, RayHit, Ray, Vec3};

/// An axis-aligned box defined by two corners and a base color.
///
/// The corners do not have to be component-wise ordered; the slab test
/// swaps per-axis t-bounds internally, so degenerate (zero-extent) and
/// inverted boxes are legal. `min_corner` is kept exactly as passed
/// because the normal formula references it.
#[derive(Debug, Clone)]
pub struct Cuboid {
    pub min_corner: Vec3,
    pub max_corner: Vec3,
    pub color: Color,
}

impl Cuboid {
    /// Create a new cuboid.
    pub fn new(min_corner: Vec3, max_corner: Vec3, color: Color) -> Self {
        Self {
            min_corner,
            max_corner,
            color,
        }
    }

    /// Ray-cuboid intersection via the slab test.
    ///
    /// Intersects the ray's parametric range against each axis slab in
    /// turn and rejects as soon as the running interval empties. An
    /// axis-parallel ray (zero direction component) gets both t-bounds
    /// for that axis pinned to 0 instead of a divide; that can admit a
    /// hit for a ray lying outside the slab on the parallel axis — a
    /// known deviation from a fully correct slab test that is part of
    /// this renderer's defined output.
    ///
    /// The reported normal is `(point - min_corner)` normalized, not a
    /// face normal. Shading depends on it as-is.
    pub fn intersect(&self, ray: &Ray) -> Option<RayHit> {
        let (mut tmin, mut tmax) =
            Self::slab(self.min_corner.x, self.max_corner.x, ray.origin.x, ray.direction.x);

        let (tymin, tymax) =
            Self::slab(self.min_corner.y, self.max_corner.y, ray.origin.y, ray.direction.y);

        if tmin > tymax || tymin > tmax {
            return None;
        }
        tmin = tmin.max(tymin);
        tmax = tmax.min(tymax);

        let (tzmin, tzmax) =
            Self::slab(self.min_corner.z, self.max_corner.z, ray.origin.z, ray.direction.z);

        if tmin > tzmax || tzmin > tmax {
            return None;
        }
        tmin = tmin.max(tzmin);

        let point = ray.at(tmin);
        let normal = (point - self.min_corner).normalize_or_zero();

        Some(RayHit { t: tmin, point, normal })
    }

    /// Ordered t-bounds of one axis slab, with the axis-parallel
    /// degenerate rule: a zero direction component yields (0, 0).
    #[inline]
    fn slab(min_bound: f32, max_bound: f32, origin: f32, direction: f32) -> (f32, f32) {
        if direction == 0.0 {
            return (0.0, 0.0);
        }
        let t0 = (min_bound - origin) / direction;
        let t1 = (max_bound - origin) / direction;
        if t0 > t1 {
            (t1, t0)
        } else {
            (t0, t1)
        }
    }
}
