//! Scene description.
//!
//! A scene aggregates primitives, lights, the camera position, and the
//! raster settings. It is built once through `SceneBuilder` and stays
//! immutable for the whole render call; rendering the same world from
//! several viewpoints means building one scene per viewpoint rather than
//! mutating a shared one.

use thiserror::Error;

use crate::{Color, Light, Primitive, Vec3};

/// Errors that can occur while building a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("image dimensions must be positive (got {width}x{height})")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("ambient light must be a finite value in [0, 1] (got {0})")]
    InvalidAmbientLight(f32),
}

/// An immutable scene, ready to render.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Primitives in declaration order. Order carries no priority; the
    /// nearest hit wins, and declaration order only breaks exact ties.
    pub primitives: Vec<Primitive>,
    pub lights: Vec<Light>,
    /// Ray origin for every pixel
    pub camera: Vec3,
    pub width: u32,
    pub height: u32,
    /// Z offset of the image plane relative to the camera, typically
    /// negative (the camera looks down -Z)
    pub projection_depth: f32,
    /// Baseline illumination in [0, 1]
    pub ambient_light: f32,
    /// Color written for rays that hit nothing
    pub background_color: Color,
}

impl Scene {
    /// Start building a scene with default raster settings:
    /// 100x100 pixels, camera at the origin, projection depth -100,
    /// ambient light 0.3.
    pub fn builder() -> SceneBuilder {
        SceneBuilder::new()
    }
}

/// Builder for `Scene`, validating at `build()`.
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    primitives: Vec<Primitive>,
    lights: Vec<Light>,
    camera: Vec3,
    width: u32,
    height: u32,
    projection_depth: f32,
    ambient_light: f32,
    background_color: Option<Color>,
}

impl SceneBuilder {
    /// Create a builder with the default settings.
    pub fn new() -> Self {
        Self {
            primitives: Vec::new(),
            lights: Vec::new(),
            camera: Vec3::ZERO,
            width: 100,
            height: 100,
            projection_depth: -100.0,
            ambient_light: 0.3,
            background_color: None,
        }
    }

    /// Add a primitive to the scene.
    pub fn with_primitive(mut self, primitive: impl Into<Primitive>) -> Self {
        self.primitives.push(primitive.into());
        self
    }

    /// Add a light source to the scene.
    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    /// Set the camera position.
    pub fn with_camera(mut self, camera: Vec3) -> Self {
        self.camera = camera;
        self
    }

    /// Set the image resolution in pixels.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the z offset of the image plane.
    pub fn with_projection_depth(mut self, depth: f32) -> Self {
        self.projection_depth = depth;
        self
    }

    /// Set the ambient light level.
    pub fn with_ambient_light(mut self, ambient: f32) -> Self {
        self.ambient_light = ambient;
        self
    }

    /// Set the background color. When unset, the background defaults to
    /// grey at the ambient light level.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Validate the configuration and produce an immutable `Scene`.
    pub fn build(self) -> Result<Scene, SceneError> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !self.ambient_light.is_finite() || !(0.0..=1.0).contains(&self.ambient_light) {
            return Err(SceneError::InvalidAmbientLight(self.ambient_light));
        }

        let background_color = self
            .background_color
            .unwrap_or(Color::splat(self.ambient_light));

        log::debug!(
            "scene: {} primitives, {} lights, {}x{} @ depth {}",
            self.primitives.len(),
            self.lights.len(),
            self.width,
            self.height,
            self.projection_depth
        );

        Ok(Scene {
            primitives: self.primitives,
            lights: self.lights,
            camera: self.camera,
            width: self.width,
            height: self.height,
            projection_depth: self.projection_depth,
            ambient_light: self.ambient_light,
            background_color,
        })
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}
