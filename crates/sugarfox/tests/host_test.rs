//! # Host Tests
//!
//! Config files on disk and the headless loop end to end.

use std::path::PathBuf;

use sugarfox::{simulate, ConfigError, HeroConfig, SimulateOptions};
use sugarfox_rendering::{ParticleField, SurfaceSize};
use sugarfox_shared::{SceneConfig, Theme};

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("sugarfox-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).expect("temp dir is writable");
    path
}

#[test]
fn test_load_config_from_disk() {
    let path = write_temp(
        "ok.toml",
        "[scene]\nseed = 3\ntheme = \"light\"\n\n[window]\nwidth = 640\nheight = 480\n",
    );

    let config = HeroConfig::resolve(Some(&path)).expect("loads");
    assert_eq!(config.scene.seed, 3);
    assert_eq!(config.scene.theme, Theme::Light);
    assert_eq!(config.window.width, 640);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_bad_config_names_file() {
    let path = write_temp("bad.toml", "[scene]\nparticle_count = \"many\"\n");

    let err = HeroConfig::resolve(Some(&path)).expect_err("rejects");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("bad.toml"));

    std::fs::remove_file(path).ok();
}

#[test]
fn test_sweep_keeps_particles_contained() {
    let config = SceneConfig {
        sphere_segments: 16,
        ..SceneConfig::default()
    };
    let options = SimulateOptions {
        frames: 3_000,
        scroll: 1.0,
        sweep: true,
        pointer: [0.6, -0.4],
        fps: 60.0,
        surface: SurfaceSize::new(800, 600),
    };

    let report = simulate(&config, &options).expect("null sink never fails");

    assert_eq!(report.frames, 3_000);
    assert!(report.particles_contained(), "{report:?}");
    assert!((report.particle_limit - (10.0 + ParticleField::max_step(1.0))).abs() < 1e-5);
    assert!(report.reflections > 0);
    assert!((report.camera_radius - 26.0).abs() < 1e-3);
}

#[test]
fn test_pointer_steers_camera() {
    let config = SceneConfig {
        sphere_segments: 16,
        ..SceneConfig::default()
    };
    let options = SimulateOptions {
        frames: 400,
        pointer: [1.0, 0.0],
        ..SimulateOptions::default()
    };

    let report = simulate(&config, &options).expect("runs");
    assert!((report.theta - std::f32::consts::FRAC_PI_2).abs() < 1e-3);
    assert!((report.phi - std::f32::consts::FRAC_PI_2).abs() < 1e-3);
}

#[test]
fn test_same_seed_same_run() {
    let config = SceneConfig {
        sphere_segments: 16,
        ..SceneConfig::default()
    };
    let options = SimulateOptions {
        frames: 500,
        scroll: 0.7,
        ..SimulateOptions::default()
    };

    let a = simulate(&config, &options).expect("runs");
    let b = simulate(&config, &options).expect("runs");
    assert_eq!(a, b);
}
