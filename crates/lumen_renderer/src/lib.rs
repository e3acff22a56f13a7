//! Lumen Renderer - offline CPU ray tracing
//!
//! A minimal whitted-less ray tracer: one primary ray per pixel, a
//! nearest-hit search over a flat primitive list, and a local Phong-like
//! illumination model (ambient plus unclamped per-light diffuse).
//!
//! There is deliberately no global illumination, no shadow rays, no
//! reflection or refraction, and no acceleration structure. Several
//! shading simplifications (the cuboid normal formula, the unclamped
//! diffuse term, the single-root sphere solve) are part of the renderer's
//! defined output and must not be "corrected" — see the notes on the
//! individual modules.

mod cuboid;
mod light;
mod primitive;
mod renderer;
mod scene;
mod shading;
mod sphere;
mod tracer;

pub use cuboid::Cuboid;
pub use light::Light;
pub use primitive::{Primitive, RayHit};
pub use renderer::{pixel_ray, render, render_parallel, ImageBuffer};
pub use scene::{Scene, SceneBuilder, SceneError};
pub use shading::shade;
pub use sphere::Sphere;
pub use tracer::trace;

/// Re-export Vec3 and Ray from lumen_math
pub use lumen_math::{Ray, Vec3};

/// Colors are linear RGB triples. Shading accumulates without clamping,
/// so components may leave [0, 1]; clamping happens only at the 8-bit
/// output boundary (`ImageBuffer::to_rgba8`).
pub type Color = Vec3;
