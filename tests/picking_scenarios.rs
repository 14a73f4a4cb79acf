use cgmath::{Vector3, Zero};
use scatterpick::prelude::*;

fn camera_down_negative_z() -> PerspectiveCamera {
    PerspectiveCamera::new(Vector3::zero(), Vector3::new(0.0, 0.0, -1.0), 1.0)
}

fn cube(name: &str, position: Vector3<f32>, hex: u32) -> TrackedObject {
    TrackedObject::new(name, Shape::unit_cube(), position, Color::from_hex(hex))
}

#[test]
fn nearest_hit_wins() {
    let camera = camera_down_negative_z();
    let mut scene = Scene::new();
    // Front faces at t = 5 and t = 3 along the center ray
    scene.add(cube("A", Vector3::new(0.0, 0.0, -5.5), 0xff0000));
    let b = scene.add(cube("B", Vector3::new(0.0, 0.0, -3.5), 0x00ff00));

    let mut controller = InteractionController::default();
    let info = controller
        .on_pick(PointerNdc::new(0.0, 0.0), &camera, &mut scene.objects)
        .unwrap();

    assert_eq!(info.object, b);
    assert_eq!(info.name, "B");
    assert!((info.distance - 3.0).abs() < 1e-4);
    assert_eq!(controller.selected(), Some(b));
}

#[test]
fn repeated_pick_is_idempotent() {
    let camera = camera_down_negative_z();
    let mut scene = Scene::new();
    let id = scene.add(cube("A", Vector3::new(0.0, 0.0, -5.0), 0x4caf50));
    let mut controller = InteractionController::default();
    let pointer = PointerNdc::new(0.0, 0.0);

    let first = controller.on_pick(pointer, &camera, &mut scene.objects);
    let state_after_first = scene.get_object(id).unwrap().visual_state();
    let second = controller.on_pick(pointer, &camera, &mut scene.objects);
    let state_after_second = scene.get_object(id).unwrap().visual_state();

    assert_eq!(first, second);
    assert_eq!(state_after_first, state_after_second);
    assert_eq!(state_after_second.color, Color::from_hex(0xffcc00));
    assert_eq!(state_after_second.scale, 1.3);
}

#[test]
fn miss_restores_baseline_color_exactly() {
    let camera = camera_down_negative_z();
    let mut scene = Scene::new();
    let id = scene.add(cube("A", Vector3::new(0.0, 0.0, -5.0), 0x20b2aa));
    let baseline = scene.get_object(id).unwrap().baseline();
    let mut controller = InteractionController::default();

    controller.on_pick(PointerNdc::new(0.0, 0.0), &camera, &mut scene.objects);
    assert_ne!(scene.get_object(id).unwrap().color, baseline.color);

    // Far outside the normalized range: still projected, simply misses
    let miss = controller.on_pick(PointerNdc::new(5.0, 5.0), &camera, &mut scene.objects);
    assert!(miss.is_none());
    assert_eq!(controller.selected(), None);

    let object = scene.get_object(id).unwrap();
    assert_eq!(object.color, baseline.color);
    assert_eq!(object.target_scale, 1.0);
}

#[test]
fn cloned_objects_restore_independently() {
    let camera = camera_down_negative_z();
    let mut scene = Scene::new();
    let template = cube("Cube", Vector3::new(0.0, 0.0, -8.0), 0x2196f3);
    let behind = scene.add(template.clone());
    let mut front = template.clone();
    front.position.z = -4.0;
    let front = scene.add(front);
    assert_ne!(behind, front);

    let mut controller = InteractionController::default();
    let info = controller
        .on_pick(PointerNdc::new(0.0, 0.0), &camera, &mut scene.objects)
        .unwrap();
    assert_eq!(info.object, front);

    assert!(controller
        .on_pick(PointerNdc::new(5.0, 5.0), &camera, &mut scene.objects)
        .is_none());
    assert!(scene.objects.iter().all(TrackedObject::is_at_baseline));
}

#[test]
fn empty_scene_yields_empty_result() {
    let camera = camera_down_negative_z();
    let mut scene = Scene::new();
    let mut controller = InteractionController::default();

    assert!(controller
        .on_pick(PointerNdc::new(0.0, 0.0), &camera, &mut scene.objects)
        .is_none());
}

#[test]
fn at_most_one_object_selected() {
    let camera = PerspectiveCamera::new(
        Vector3::new(25.0, 20.0, 30.0),
        Vector3::zero(),
        16.0 / 9.0,
    );
    let sampler = PlacementSampler::new(PlacementSettings::default()).unwrap();
    let mut source = RandomCandidates::from_seed(11);
    let mut scene = Scene::new();
    for (i, placement) in sampler.scatter(20, &mut source).into_iter().enumerate() {
        scene.add(TrackedObject::new(
            format!("cube {}", i),
            Shape::cuboid(3.0, 3.0, 3.0),
            placement.position,
            Color::from_hex(0x808080),
        ));
    }

    let mut controller = InteractionController::default();
    let mut hits = 0;
    for step in 0..200 {
        let x = ((step * 37) % 200) as f32 / 100.0 - 1.0;
        let y = ((step * 53) % 200) as f32 / 100.0 - 1.0;
        if controller
            .on_pick(PointerNdc::new(x, y), &camera, &mut scene.objects)
            .is_some()
        {
            hits += 1;
        }

        let highlighted: Vec<ObjectId> = scene
            .objects
            .iter()
            .filter(|object| !object.is_at_baseline())
            .map(|object| object.id)
            .collect();
        assert!(highlighted.len() <= 1);
        assert_eq!(highlighted.first().copied(), controller.selected());

        scene.tick(step as f32 / 60.0);
    }
    assert!(hits > 0);
}

#[test]
fn selected_object_eases_up_and_back() {
    let camera = camera_down_negative_z();
    let mut scene = Scene::new();
    let id = scene.add(cube("A", Vector3::new(0.0, 0.0, -5.0), 0xff9800));
    let mut controller = InteractionController::default();

    controller.on_pick(PointerNdc::new(0.0, 0.0), &camera, &mut scene.objects);
    scene.tick(1.0 / 60.0);
    assert!((scene.get_object(id).unwrap().scale - 1.03).abs() < 1e-5);

    for frame in 2..=300 {
        scene.tick(frame as f32 / 60.0);
    }
    let grown = scene.get_object(id).unwrap().scale;
    assert!((grown - 1.3).abs() < 1e-3);

    controller.clear_selection(&mut scene.objects);
    for frame in 301..=600 {
        scene.tick(frame as f32 / 60.0);
    }
    assert!((scene.get_object(id).unwrap().scale - 1.0).abs() < 1e-3);
}

#[test]
fn window_click_maps_through_camera() {
    let camera = camera_down_negative_z();
    let mut scene = Scene::new();
    let id = scene.add(cube("A", Vector3::new(0.0, 0.0, -5.0), 0xffffff));
    let mut controller = InteractionController::new(PickMode::cycle_colors()).unwrap();

    let pointer = PointerNdc::from_window(
        winit::dpi::PhysicalPosition::new(400.0, 300.0),
        winit::dpi::PhysicalSize::new(800, 600),
    );
    let info = controller.on_pick(pointer, &camera, &mut scene.objects).unwrap();

    assert_eq!(info.object, id);
    assert_eq!(scene.get_object(id).unwrap().color, Color::WHITE);
    assert_eq!(scene.get_object(id).unwrap().color_index, 1);
}
