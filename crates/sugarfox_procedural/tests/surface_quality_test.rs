//! # Surface Quality Tests
//!
//! The hero sphere should barely breathe at the top of the page and churn
//! visibly once the visitor scrolls. The black/white mask should split the
//! surface roughly in half at any scroll.

use sugarfox_procedural::{DisplacementParams, SurfaceField};
use sugarfox_shared::Vec3;

/// Unit normals spread over the sphere (Fibonacci lattice).
fn sphere_normals(count: usize) -> Vec<Vec3> {
    let golden = std::f32::consts::PI * (3.0 - 5.0_f32.sqrt());
    (0..count)
        .map(|i| {
            let y = 1.0 - (i as f32 + 0.5) / count as f32 * 2.0;
            let r = (1.0 - y * y).sqrt();
            let theta = golden * i as f32;
            Vec3::new(r * theta.cos(), y, r * theta.sin())
        })
        .collect()
}

fn mean_abs_offset(field: &SurfaceField, scroll: f32) -> f32 {
    let params = DisplacementParams::at_scroll(scroll);
    let normals = sphere_normals(2000);
    let mut total = 0.0;
    for (i, n) in normals.iter().enumerate() {
        let t = i as f32 * 0.013;
        total += field.offset(*n * 1.5, t, &params).abs();
    }
    total / normals.len() as f32
}

/// Test: Displacement never exceeds the analytic bound.
#[test]
fn test_offset_within_bound() {
    let field = SurfaceField::new();

    for step in 0..=10 {
        let s = step as f32 / 10.0;
        let params = DisplacementParams::at_scroll(s);
        let bound = params.max_offset(1.1);

        for (i, n) in sphere_normals(500).iter().enumerate() {
            let offset = field.offset(*n * 1.5, i as f32 * 0.37, &params);
            assert!(
                offset.abs() <= bound,
                "offset {offset} exceeds bound {bound} at scroll {s}"
            );
        }
    }
}

/// Test: Scrolling makes the surface wobble harder.
#[test]
fn test_scroll_increases_wobble() {
    let field = SurfaceField::new();

    let calm = mean_abs_offset(&field, 0.0);
    let wild = mean_abs_offset(&field, 1.0);
    println!("Mean offset at top: {calm:.4}, fully scrolled: {wild:.4}");

    assert!(wild > calm * 2.0, "expected churn to grow: {calm} -> {wild}");
}

/// Test: The mask is neither all white nor all black.
#[test]
fn test_mask_is_balanced() {
    let field = SurfaceField::new();

    for scroll in [0.0, 0.5, 1.0] {
        let normals = sphere_normals(4000);
        let white = normals
            .iter()
            .filter(|n| field.mask(**n * 1.5, 3.0, scroll))
            .count();
        let share = white as f32 / normals.len() as f32;
        println!("White share at scroll {scroll}: {:.1}%", share * 100.0);

        assert!(
            (0.25..=0.75).contains(&share),
            "mask too lopsided at scroll {scroll}: {share}"
        );
    }
}

/// Test: The surface is animated (it changes with time alone).
#[test]
fn test_surface_moves_over_time() {
    let field = SurfaceField::new();
    let params = DisplacementParams::at_scroll(0.3);
    let p = Vec3::new(0.2, 0.9, -0.4).normalize();

    let a = field.offset(p * 1.5, 0.0, &params);
    let b = field.offset(p * 1.5, 1.0, &params);
    assert!((a - b).abs() > 1e-4);
}
