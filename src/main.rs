use clap::Parser;
use log::{debug, info, warn};
use raylib::prelude::*;
use std::path::Path;
use std::time::Instant;

mod arrow;
mod camera;
mod plane;
mod refraction;
mod scene;
mod settings;
mod slab;
mod ui;

use camera::FlyCamera;
use scene::SceneState;
use settings::Settings;
use ui::ControlPanel;

// Camera speeds per frame at the 60 FPS target.
const PAN_SPEED: f32 = 0.25;
const ELEVATE_SPEED: f32 = 0.25;
const YAW_SPEED: f32 = 0.05;

const CAMERA_START: Vector3 = Vector3 {
    x: 0.0,
    y: 1.0,
    z: 16.0,
};
const CAMERA_FOVY: f32 = 75.0;

/// Interactive visualization of Snell's law of refraction.
#[derive(Parser)]
#[command(name = "snell-visualizer")]
struct Args {
    /// Window width in pixels
    #[arg(long, default_value_t = 1300)]
    width: i32,

    /// Window height in pixels
    #[arg(long, default_value_t = 900)]
    height: i32,

    /// Path to an optional startup settings file
    #[arg(long, default_value = "settings.txt")]
    settings: String,
}

fn load_settings(path: &str) -> Settings {
    if !Path::new(path).exists() {
        return Settings::default();
    }
    match Settings::load(Path::new(path)) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("error loading settings from '{path}': {e}");
            warn!("using default settings instead");
            Settings::default()
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = load_settings(&args.settings);

    let polar_degrees = settings.polar_degrees.clamp(0.0, 90.0);
    let azimuth_degrees = settings.azimuth_degrees.clamp(0.0, 360.0);

    info!(
        "starting {}x{}, eta {} -> {}",
        args.width, args.height, settings.eta_entry, settings.eta_exit
    );

    let (mut window, raylib_thread) = raylib::init()
        .size(args.width, args.height)
        .title("Snell's Law Visualizer")
        .log_level(TraceLogLevel::LOG_WARNING)
        .build();
    window.set_target_fps(60);

    let mut scene = SceneState::new(
        polar_degrees.to_radians(),
        azimuth_degrees.to_radians(),
        settings.eta_entry,
        settings.eta_exit,
    );
    scene.set_visibility(settings.show_collision_plane, settings.show_media);

    let mut camera = FlyCamera::new(CAMERA_START, CAMERA_FOVY);

    let mut panel = ControlPanel::new(
        args.width,
        args.height,
        polar_degrees / 90.0 * 100.0,
        azimuth_degrees / 360.0 * 100.0,
        settings.eta_entry,
        settings.eta_exit,
        settings.show_collision_plane,
        settings.show_media,
    );

    let background = Color::new(68, 68, 68, 255);
    let mut was_total_internal = scene.exit.total_internal;

    let mut frame_count = 0;
    let mut fps_timer = Instant::now();

    while !window.window_should_close() {
        // Camera flight: WASD pans in the horizontal plane relative to the
        // look direction, the arrow keys elevate and yaw.
        if window.is_key_down(KeyboardKey::KEY_W) {
            camera.pan(PAN_SPEED, 0.0);
        }
        if window.is_key_down(KeyboardKey::KEY_S) {
            camera.pan(-PAN_SPEED, 0.0);
        }
        if window.is_key_down(KeyboardKey::KEY_A) {
            camera.pan(0.0, -PAN_SPEED);
        }
        if window.is_key_down(KeyboardKey::KEY_D) {
            camera.pan(0.0, PAN_SPEED);
        }
        if window.is_key_down(KeyboardKey::KEY_UP) {
            camera.elevate(ELEVATE_SPEED);
        }
        if window.is_key_down(KeyboardKey::KEY_DOWN) {
            camera.elevate(-ELEVATE_SPEED);
        }
        if window.is_key_down(KeyboardKey::KEY_LEFT) {
            camera.rotate(YAW_SPEED);
        }
        if window.is_key_down(KeyboardKey::KEY_RIGHT) {
            camera.rotate(-YAW_SPEED);
        }

        // Each changed control group feeds exactly one scene setter.
        let changes = panel.update(&window);
        if changes.angles {
            scene.set_entry_angles(panel.polar_angle(), panel.azimuth_angle());
        }
        if changes.indices {
            scene.set_refractive_indices(panel.eta_entry.value, panel.eta_exit.value);
        }
        if changes.visibility {
            scene.set_visibility(panel.collision_plane.checked, panel.media.checked);
        }

        if scene.exit.total_internal != was_total_internal {
            if scene.exit.total_internal {
                debug!("entered total internal reflection");
            } else {
                debug!("back to refraction");
            }
            was_total_internal = scene.exit.total_internal;
        }

        camera.ease();
        let camera3d = camera.to_raylib();

        let mut d = window.begin_drawing(&raylib_thread);
        d.clear_background(background);

        {
            let mut d3 = d.begin_mode3D(camera3d);
            scene.draw(&mut d3);
        }

        panel.draw(&mut d);
        if scene.exit.total_internal {
            d.draw_text("total internal reflection", 10, 10, 20, Color::YELLOW);
        }

        frame_count += 1;
        let elapsed = fps_timer.elapsed().as_secs_f32();
        if elapsed >= 2.0 {
            debug!("FPS: {:.1}", frame_count as f32 / elapsed);
            frame_count = 0;
            fps_timer = Instant::now();
        }
    }
}
