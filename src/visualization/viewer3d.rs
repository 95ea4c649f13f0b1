use bevy::app::AppExit;
use bevy::math::primitives::Cuboid;
use bevy::prelude::*;
use bevy::window::PresentMode;

use crate::simulation::scenario::Scenario;

/// Component tagging each cuboid with its body index into Scenario.state.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

/// Component tagging the auto-rotating camera
#[derive(Component)]
struct OrbitCamera;

/// Distance of the camera from the origin in world units
const CAMERA_DISTANCE: f32 = 15.0;

/// Entrypoint: run the Bevy 3D viewer over an initialized scenario
///
/// The vsync preference degrades silently if the backend ignores it; debug
/// mode requests an uncapped swap rate so frame timings are measurable.
pub fn run_viewer(scenario: Scenario) {
    println!(
        "run_viewer: starting Bevy 3D viewer with {} bodies",
        scenario.state.bodies.len()
    );

    let present_mode = if scenario.parameters.vsync && !scenario.parameters.debug {
        PresentMode::AutoVsync
    } else {
        PresentMode::AutoNoVsync
    };

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "cubefall".into(),
                present_mode,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_scene)
        .add_systems(Update, (physics_step, sync_bodies, orbit_camera).chain())
        .add_systems(Update, quit_on_keypress)
        .run();
}

/// Startup system: spawn camera, light, ground slab, and one cuboid per body
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scenario: Res<Scenario>,
) {
    let params = &scenario.parameters;

    commands.spawn((
        Camera3dBundle {
            camera: Camera {
                clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)), // pure black
                ..Default::default()
            },
            transform: Transform::from_xyz(0.0, params.camera_height_offset, CAMERA_DISTANCE)
                .looking_at(Vec3::ZERO, Vec3::Y),
            ..Default::default()
        },
        OrbitCamera,
    ));

    // Basic point light above the arena
    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 10_000_000.0,
            range: 100.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(params.bound, 16.0, params.bound),
        ..Default::default()
    });

    // Ground slab so the collision plane reads visually
    let arena = params.bound * 2.0;
    commands.spawn(PbrBundle {
        mesh: meshes.add(Cuboid::new(arena, 0.1, arena).mesh()),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.25, 0.25, 0.25),
            ..Default::default()
        }),
        transform: Transform::from_xyz(0.0, params.ground_y - 0.05, 0.0),
        ..Default::default()
    });

    // One entity per body; the mesh is shared since the edge length never
    // changes, while each body gets its own material for per-reset colors
    let edge = params.cube_size;
    let cube_mesh = meshes.add(Cuboid::new(edge, edge, edge).mesh());
    for (i, body) in scenario.state.bodies.iter().enumerate() {
        commands.spawn((
            PbrBundle {
                mesh: cube_mesh.clone(),
                material: materials.add(StandardMaterial {
                    base_color: Color::srgb(body.color.x, body.color.y, body.color.z),
                    ..Default::default()
                }),
                transform: Transform::from_xyz(
                    body.position.x,
                    body.position.y,
                    body.position.z,
                ),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

/// Per-frame physics step driven by the measured frame gap
fn physics_step(time: Res<Time>, mut scenario: ResMut<Scenario>) {
    scenario.step(time.delta_seconds());
}

/// Copy body state into transforms and materials (read-only on the bodies)
fn sync_bodies(
    scenario: Res<Scenario>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut query: Query<(&BodyIndex, &mut Transform, &Handle<StandardMaterial>)>,
) {
    for (BodyIndex(i), mut transform, mat_handle) in &mut query {
        if let Some(b) = scenario.state.bodies.get(*i) {
            transform.translation = Vec3::new(b.position.x, b.position.y, b.position.z);
            transform.rotation = Quat::from_euler(
                EulerRot::XYZ,
                b.rotation.x.to_radians(),
                b.rotation.y.to_radians(),
                b.rotation.z.to_radians(),
            );

            if let Some(mat) = materials.get_mut(mat_handle) {
                mat.base_color = Color::srgb(b.color.x, b.color.y, b.color.z);
            }
        }
    }
}

/// Keep the camera on its orbit at the yaw the stepper advances
fn orbit_camera(scenario: Res<Scenario>, mut query: Query<&mut Transform, With<OrbitCamera>>) {
    let yaw = scenario.state.camera_yaw.to_radians();
    let height = scenario.parameters.camera_height_offset;

    for mut transform in &mut query {
        *transform = Transform::from_xyz(
            CAMERA_DISTANCE * yaw.sin(),
            height,
            CAMERA_DISTANCE * yaw.cos(),
        )
        .looking_at(Vec3::ZERO, Vec3::Y);
    }
}

/// Any key press requests shutdown; the window close button is handled by
/// Bevy itself. No other input touches simulation state.
fn quit_on_keypress(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.get_just_pressed().next().is_some() {
        exit.send(AppExit::Success);
    }
}
