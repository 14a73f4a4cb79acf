//! Floating cubes, headless.
//!
//! Scatters twenty randomly sized cubes without overlap, lets them float and
//! spin for a few seconds, and clicks around the window the way a user
//! would. Run with `RUST_LOG=debug` to see every placement and pick.

use std::f32::consts::TAU;

use anyhow::{Context, Result};
use rand::Rng;
use scatterpick::prelude::*;
use winit::dpi::{PhysicalPosition, PhysicalSize};

const CUBE_COUNT: usize = 20;
const FRAME_RATE: f32 = 60.0;

fn build_scene(rng: &mut impl Rng) -> Result<Scene> {
    let sampler = PlacementSampler::new(
        PlacementSettings::default()
            .with_bounds(PlacementBounds::centered(15.0, 0.0, 8.0))
            .with_min_distance(4.0)
            .with_max_attempts(100),
    )
    .context("placement settings")?;

    let mut scene = Scene::with_settings(SceneSettings::default()).context("scene settings")?;

    // Ground plane below the cubes, never selectable
    scene.add(
        TrackedObject::new(
            "floor",
            Shape::cuboid(70.0, 0.01, 70.0),
            Vector3::new(0.0, -5.0, 0.0),
            Color::from_hex(0x444444),
        )
        .with_pickable(false),
    );

    let mut source = RandomCandidates::new(rand::rng());
    for (i, placement) in sampler.scatter(CUBE_COUNT, &mut source).into_iter().enumerate() {
        let shape = Shape::cuboid(
            rng.random::<f32>() * 2.0 + 1.0,
            rng.random::<f32>() * 2.0 + 1.0,
            rng.random::<f32>() * 2.0 + 1.0,
        );
        let color = Color::from_hex(rng.random_range(0..=0xffffff));

        let mut cube = TrackedObject::new(format!("Cube {}", i + 1), shape, placement.position, color)
            .with_float(rng.random::<f32>() * TAU, 0.5);
        if rng.random_bool(0.5) {
            // 0.005..0.015 rad per frame on y, half that on x
            let speed = (rng.random::<f32>() * 0.01 + 0.005) * FRAME_RATE;
            cube = cube.with_spin(Vector3::new(speed * 0.5, speed, 0.0));
        }
        scene.add(cube);
    }

    Ok(scene)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut rng = rand::rng();
    let mut scene = build_scene(&mut rng)?;
    log::info!("Scene ready with {} objects", scene.get_object_count());

    let window = PhysicalSize::new(1200u32, 800u32);
    let mut camera = PerspectiveCamera::new(Vector3::new(25.0, 20.0, 30.0), Vector3::zero(), 1.0);
    camera.resize_projection(window.width, window.height);

    let mut controller = InteractionController::new(PickMode::default())?;

    for frame in 0..(FRAME_RATE as u32 * 5) {
        let elapsed = frame as f32 / FRAME_RATE;

        // One click every half second at a random spot in the window
        if frame % 30 == 0 {
            let click = PhysicalPosition::new(
                rng.random_range(0.0..window.width as f64),
                rng.random_range(0.0..window.height as f64),
            );
            let pointer = PointerNdc::from_window(click, window);
            match controller.on_pick(pointer, &camera, &mut scene.objects) {
                Some(info) => log::info!("{}", info),
                None => log::info!("No object selected."),
            }
        }

        scene.tick(elapsed);
        let instances = scene.instance_data();
        log::trace!(
            "Frame {}: {} instances, {} bytes",
            frame,
            instances.len(),
            bytemuck::cast_slice::<InstanceRaw, u8>(&instances).len()
        );
    }

    Ok(())
}
