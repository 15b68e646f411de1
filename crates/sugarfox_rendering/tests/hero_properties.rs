//! # Hero Animation Properties
//!
//! Long-running checks of the per-frame update and the mount lifecycle,
//! driven through the public API with recording scheduler/sink doubles.

use std::cell::RefCell;
use std::f32::consts::FRAC_PI_2;
use std::rc::Rc;

use sugarfox_rendering::{
    FrameScheduler, FrameSink, FrameToken, HeroBackground, HeroScene, OrbitCamera, ParticleField,
    RenderFrame, RenderResult, SurfaceSize,
};
use sugarfox_shared::{Damped, SceneConfig, ScrollProgress, Theme};

#[derive(Debug, Default)]
struct Log {
    requested: Vec<FrameToken>,
    cancelled: Vec<FrameToken>,
    submitted: u32,
    resized: Vec<SurfaceSize>,
    themes: Vec<Theme>,
    released: u32,
    dropped: u32,
}

struct RecordingScheduler {
    log: Rc<RefCell<Log>>,
    next: u64,
}

impl FrameScheduler for RecordingScheduler {
    fn request_frame(&mut self) -> FrameToken {
        self.next += 1;
        let token = FrameToken::new(self.next);
        self.log.borrow_mut().requested.push(token);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.log.borrow_mut().cancelled.push(token);
    }
}

struct RecordingSink {
    log: Rc<RefCell<Log>>,
}

impl FrameSink for RecordingSink {
    fn submit(&mut self, frame: &RenderFrame<'_>) -> RenderResult<()> {
        assert_eq!(frame.uniform_bytes().len(), 208);
        self.log.borrow_mut().submitted += 1;
        Ok(())
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.log.borrow_mut().resized.push(size);
    }

    fn set_theme(&mut self, theme: Theme) {
        self.log.borrow_mut().themes.push(theme);
    }

    fn release(&mut self) {
        self.log.borrow_mut().released += 1;
    }
}

impl Drop for RecordingSink {
    fn drop(&mut self) {
        self.log.borrow_mut().dropped += 1;
    }
}

fn mount_recorded() -> (HeroBackground<RecordingScheduler, RecordingSink>, Rc<RefCell<Log>>) {
    let log = Rc::new(RefCell::new(Log::default()));
    let scheduler = RecordingScheduler {
        log: Rc::clone(&log),
        next: 0,
    };
    let sink_log = Rc::clone(&log);
    let hero = HeroBackground::mount(
        Some(SurfaceSize::new(1280, 720)),
        &SceneConfig::default(),
        scheduler,
        move |_, _| Ok(RecordingSink { log: sink_log }),
    )
    .expect("recording sink never fails")
    .expect("surface present");
    (hero, log)
}

fn scene() -> HeroScene {
    HeroScene::new(&SceneConfig::default(), SurfaceSize::new(1280, 720))
}

/// Test: Orbit radius never shrinks as scroll grows.
#[test]
fn test_radius_monotone_in_scroll() {
    let mut last = OrbitCamera::radius_for(0.0);
    for i in 1..=1000 {
        let s = i as f32 / 1000.0;
        let r = OrbitCamera::radius_for(s);
        assert!(r >= last, "radius dropped at s = {s}: {last} -> {r}");
        last = r;
    }
    assert!((OrbitCamera::radius_for(0.0) - 6.0).abs() < 1e-6);
    assert!((OrbitCamera::radius_for(1.0) - 26.0).abs() < 1e-6);
}

/// Test: Particles stay in the cube (plus one step) while scroll jumps around.
#[test]
fn test_particles_stay_bounded() {
    let mut scene = scene();
    let eps = ParticleField::max_step(1.0);
    let limit = scene.particles().boundary() + eps;
    let mut total_reflections = 0u64;

    for frame in 0..15_000u32 {
        // Alternate calm and full scroll in bursts, with abrupt switches.
        let s = match (frame / 700) % 3 {
            0 => 0.0,
            1 => 1.0,
            _ => (frame % 7) as f32 / 6.0,
        };
        scene.set_scroll(ScrollProgress::new(s));
        let frame_data = scene.update(frame as f32 / 60.0);
        total_reflections += u64::from(frame_data.stats.reflections);

        for p in frame_data.particles {
            for c in p.position {
                assert!(
                    c.abs() <= limit,
                    "particle escaped at frame {frame}: {c} > {limit}"
                );
            }
        }
    }

    println!("Reflections over run: {total_reflections}");
    assert!(total_reflections > 0, "run too short to exercise the walls");
}

/// Test: Smoothed inputs close 5% of the gap per frame and converge on time.
#[test]
fn test_smoothed_inputs_converge_geometrically() {
    let mut scene = scene();
    scene.set_scroll(ScrollProgress::FULL);
    scene.set_pointer([1.0, 1.0]);

    let frames = Damped::new(0.0).frames_to_converge(1.0, 1e-3);
    assert_eq!(frames, 135);

    let mut gap = 1.0f32;
    for _ in 0..frames {
        scene.update(0.0);
        let new_gap = 1.0 - scene.smoothed_scroll();
        assert!((new_gap / gap - 0.95).abs() < 1e-3, "ratio {}", new_gap / gap);
        gap = new_gap;
    }

    assert!(1.0 - scene.smoothed_scroll() <= 1e-3);
    let [px, py] = scene.smoothed_pointer();
    assert!(1.0 - px <= 1e-3 && 1.0 - py <= 1e-3);
}

/// Test: A centered pointer settles the camera on the equator facing the origin.
#[test]
fn test_centered_pointer_settles_camera() {
    let mut scene = scene();

    scene.set_pointer([0.8, -0.6]);
    for i in 0..200 {
        scene.update(i as f32 / 60.0);
    }
    assert!(scene.camera().theta().abs() > 0.5);

    scene.set_pointer([0.0, 0.0]);
    for i in 200..800 {
        scene.update(i as f32 / 60.0);
    }

    assert!(scene.camera().theta().abs() < 1e-4, "theta = {}", scene.camera().theta());
    assert!((scene.camera().phi() - FRAC_PI_2).abs() < 1e-4, "phi = {}", scene.camera().phi());

    let pos = scene.camera().position();
    assert!((pos.x - 6.0).abs() < 1e-3 && pos.y.abs() < 1e-3 && pos.z.abs() < 1e-3);
}

/// Test: Unmount cancels the pending callback, releases the sink, and no
/// frame is drawn afterwards.
#[test]
fn test_unmount_releases_and_cancels() {
    let (mut hero, log) = mount_recorded();

    for i in 0..10 {
        let token = hero.pending_frame().expect("mounted hero has a pending frame");
        assert!(hero.on_frame_at(token, i as f32 * 0.016).expect("draws"));
    }
    let last_token = hero.pending_frame().expect("pending");

    hero.unmount();

    {
        let log = log.borrow();
        assert_eq!(log.submitted, 10);
        assert_eq!(log.requested.len(), 11);
        assert_eq!(log.cancelled, vec![last_token]);
        assert_eq!(log.released, 1);
        assert_eq!(log.dropped, 1, "sink must be gone once unmount returns");
    }
    assert!(hero.sink().is_none());
    assert!(hero.scene().is_none());

    // A late callback for the cancelled token does nothing.
    assert!(!hero.on_frame_at(last_token, 1.0).expect("ignored"));
    assert!(hero.pending_frame().is_none());

    drop(hero);
    let log = log.borrow();
    assert_eq!(log.submitted, 10);
    assert_eq!(log.requested.len(), 11);
    assert_eq!(log.released, 1, "drop after unmount must not release twice");
    assert_eq!(log.dropped, 1);
}

/// Test: Dropping a mounted hero tears it down.
#[test]
fn test_drop_unmounts() {
    let (hero, log) = mount_recorded();
    let pending = hero.pending_frame().expect("pending");
    drop(hero);

    let log = log.borrow();
    assert_eq!(log.cancelled, vec![pending]);
    assert_eq!(log.released, 1);
    assert_eq!(log.dropped, 1);
}

/// Test: Theme and resize reach the sink without a rebuild.
#[test]
fn test_theme_and_resize_forwarded() {
    let (mut hero, log) = mount_recorded();
    let particles_before = hero.scene().expect("mounted").particles().positions().to_vec();

    hero.set_theme(Theme::Light);
    hero.set_theme(Theme::Light);
    hero.resize(SurfaceSize::new(640, 480));

    assert_eq!(hero.scene().expect("mounted").particles().positions(), particles_before.as_slice());
    let log = log.borrow();
    assert_eq!(log.themes, vec![Theme::Light]);
    assert_eq!(log.resized, vec![SurfaceSize::new(640, 480)]);
}

/// Test: Pointer events are normalized against the mount surface.
#[test]
fn test_pointer_events_normalized() {
    let (mut hero, _log) = mount_recorded();
    hero.pointer_moved(0.0, 720.0);
    assert_eq!(hero.scene().expect("mounted").pointer(), [-1.0, -1.0]);

    hero.pointer_moved(1280.0, 0.0);
    assert_eq!(hero.scene().expect("mounted").pointer(), [1.0, 1.0]);
}
