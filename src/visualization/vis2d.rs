use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::scenario::Scenario;
use crate::simulation::integrator::step;
use crate::simulation::states::NVec2;
use crate::simulation::params::Parameters;

/// Component tagging the craft marker entity
#[derive(Component)]
struct CraftMarker;

/// Screen radius of the craft marker
const MARKER_RADIUS: f32 = 5.0;

pub fn run_2d(scenario: Scenario) {
    println!(
        "run_2d: starting viewer, plane {}x{}, craft at ({}, {})",
        scenario.parameters.width,
        scenario.parameters.height,
        scenario.state.position.x,
        scenario.state.position.y,
    );

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_scene_system)
        // One tick = input, integrate, draw, in that order, never interleaved
        .add_systems(
            Update,
            (
                control_input_system,
                tick_system,
                draw_path_system,
                sync_marker_system,
            )
                .chain(),
        )
        .run();
}

/// Map plane coordinates (origin at the plane's corner) to screen
/// coordinates (origin at the plane's center)
fn plane_to_screen(p: NVec2, params: &Parameters) -> Vec2 {
    Vec2::new(
        (p.x - 0.5 * params.width) as f32,
        (p.y - 0.5 * params.height) as f32,
    )
}

/// Startup system: spawn the camera and the craft marker
fn setup_scene_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera clearing to a white canvas each frame
    commands.spawn(Camera2dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(1.0, 1.0, 1.0)),
            ..Default::default()
        },
        ..Default::default()
    });

    // The craft: a red circle above the path (z = 1)
    let start = plane_to_screen(scenario.state.position, &scenario.parameters);
    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Circle::new(MARKER_RADIUS))),
            material: materials.add(ColorMaterial::from(Color::srgb(1.0, 0.0, 0.0))),
            transform: Transform::from_xyz(start.x, start.y, 1.0),
            ..Default::default()
        },
        CraftMarker,
    ));
}

/// Control surface: arrow keys adjust heading/speed, Escape quits
///
/// Clamping to the advertised ranges happens here; the `Controls` store
/// accepts whatever it is given
fn control_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut scenario: ResMut<Scenario>,
    mut exit: EventWriter<AppExit>,
) {
    // Deregister from the tick source; the in-flight frame still completes
    if keys.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
        return;
    }

    let Scenario {
        parameters,
        controls,
        ..
    } = &mut *scenario;

    let mut heading = controls.heading_deg;
    let mut speed = controls.speed;

    if keys.pressed(KeyCode::ArrowLeft) {
        heading -= parameters.heading_step;
    }
    if keys.pressed(KeyCode::ArrowRight) {
        heading += parameters.heading_step;
    }
    if keys.pressed(KeyCode::ArrowDown) {
        speed -= parameters.speed_step;
    }
    if keys.pressed(KeyCode::ArrowUp) {
        speed += parameters.speed_step;
    }

    heading = heading.clamp(0.0, parameters.heading_max);
    speed = speed.clamp(0.0, parameters.speed_max);

    if heading != controls.heading_deg || speed != controls.speed {
        controls.set_heading(heading);
        controls.set_speed(speed);
        info!("heading = {heading:.0} deg, speed = {speed:.0}");
    }
}

/// Per-frame integration: one `step` with the frame clock as timestamp
fn tick_system(time: Res<Time>, mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        parameters,
        state,
        controls,
    } = &mut *scenario;

    // Monotonic timestamp in milliseconds, read once per tick
    let t_ms = time.elapsed_seconds_f64() * 1000.0;

    step(state, controls.heading_deg, controls.speed, t_ms, parameters);
}

/// Draw the plane border and the trajectory polyline
fn draw_path_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let params = &scenario.parameters;

    // Plane border
    gizmos.rect_2d(
        Vec2::ZERO,
        0.0,
        Vec2::new(params.width as f32, params.height as f32),
        Color::srgb(0.0, 0.0, 0.0),
    );

    // Trajectory as a blue polyline, in visit order. A wrap produces a
    // segment crossing the plane, same as the original path rendering
    gizmos.linestrip_2d(
        scenario
            .state
            .trajectory
            .iter()
            .map(|p| plane_to_screen(*p, params)),
        Color::srgb(0.0, 0.0, 1.0),
    );
}

/// Move the craft marker to the current position
///
/// Marker entity not available (not spawned yet): skip this frame's sync,
/// the next tick redraws with updated state
fn sync_marker_system(
    scenario: Res<Scenario>,
    mut query: Query<&mut Transform, With<CraftMarker>>,
) {
    if let Ok(mut transform) = query.get_single_mut() {
        let screen = plane_to_screen(scenario.state.position, &scenario.parameters);
        transform.translation.x = screen.x;
        transform.translation.y = screen.y;
    }
}
