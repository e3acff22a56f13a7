//! Phong showcase scene.
//!
//! Renders a room of colored spheres and cuboid walls from a sequence of
//! camera positions and writes one PNG per viewpoint.

use anyhow::Context;
use lumen_renderer::{render_parallel, Color, Cuboid, Light, Scene, Sphere, Vec3};

const WALL: Color = Color::new(0.5, 0.5, 0.0);

fn build_scene(camera: Vec3) -> anyhow::Result<Scene> {
    let scene = Scene::builder()
        // Spheres
        .with_primitive(Sphere::new(Vec3::new(0.0, -10.0, -60.0), 12.0, Color::new(0.0, 0.0, 1.0)))
        .with_primitive(Sphere::new(Vec3::new(-10.0, 0.0, -80.0), 10.0, Color::new(1.0, 1.0, 0.0)))
        .with_primitive(Sphere::new(Vec3::new(0.0, 20.0, -100.0), 10.0, Color::new(0.0, 1.0, 0.0)))
        .with_primitive(Sphere::new(Vec3::new(20.0, 0.0, -120.0), 10.0, Color::new(1.0, 0.5, 0.0)))
        .with_primitive(Sphere::new(Vec3::new(10.0, 0.0, -130.0), 10.0, Color::new(1.0, 0.0, 1.0)))
        .with_primitive(Sphere::new(Vec3::new(0.0, 10.0, -140.0), 10.0, Color::new(0.0, 1.0, 1.0)))
        // Back wall and four zero-extent wall slices
        .with_primitive(Cuboid::new(Vec3::new(-100.0, -100.0, -150.0), Vec3::new(100.0, 100.0, -151.0), WALL))
        .with_primitive(Cuboid::new(Vec3::new(-35.0, -35.0, -150.0), Vec3::new(35.0, -35.0, 0.0), WALL))
        .with_primitive(Cuboid::new(Vec3::new(-35.0, 35.0, -150.0), Vec3::new(35.0, 35.0, 0.0), WALL))
        .with_primitive(Cuboid::new(Vec3::new(-35.0, -35.0, -150.0), Vec3::new(-35.0, 35.0, 0.0), WALL))
        .with_primitive(Cuboid::new(Vec3::new(35.0, 35.0, -150.0), Vec3::new(35.0, -35.0, 0.0), WALL))
        // Two pillars (inverted corners on purpose)
        .with_primitive(Cuboid::new(Vec3::new(30.0, 35.0, -80.0), Vec3::new(25.0, 30.0, -100.0), WALL))
        .with_primitive(Cuboid::new(Vec3::new(30.0, -35.0, -80.0), Vec3::new(25.0, -25.0, -100.0), WALL))
        // Lights
        .with_light(Light::new(Vec3::new(-30.0, -30.0, 0.0), 0.2))
        .with_light(Light::new(Vec3::new(30.0, 30.0, -50.0), 0.5))
        .with_light(Light::new(Vec3::new(15.0, -10.0, -50.0), 0.8))
        .with_camera(camera)
        .with_background(Color::new(0.7, 0.5, 0.5))
        .build()?;
    Ok(scene)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let positions = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(5.0, 5.0, -20.0),
        Vec3::new(10.0, 10.0, -40.0),
        Vec3::new(15.0, 15.0, -40.0),
        Vec3::new(20.0, 20.0, -40.0),
        Vec3::new(25.0, 25.0, -40.0),
        Vec3::new(25.0, 25.0, -60.0),
        Vec3::new(20.0, 20.0, -80.0),
        Vec3::new(10.0, 10.0, -100.0),
    ];

    for (i, &camera) in positions.iter().enumerate() {
        // One immutable scene per viewpoint
        let scene = build_scene(camera)?;
        let image = render_parallel(&scene);

        let filename = format!("phong_{i:02}.png");
        image
            .save_png(&filename)
            .with_context(|| format!("failed to write {filename}"))?;
        println!("wrote {filename}");
    }

    Ok(())
}
