// Host-side tests for the pointer force field and per-frame motion.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use zellige_backdrop::core::physics::{self, apply_pointer_field, integrate, wrap, StepInputs};
use zellige_backdrop::core::{
    BackgroundConfig, EntityPools, GeometricShape, Lifetime, Pattern, PointerState, Rgb,
    ScrollState,
};

fn shape_at(pos: Vec2) -> GeometricShape {
    GeometricShape {
        pos,
        base_pos: pos,
        size: 30.0,
        base_size: 30.0,
        rotation: 0.0,
        rotation_speed: 0.0,
        color: Rgb::hex(0x0D9488),
        lifetime: Lifetime::Frames { age: 0, max_age: 100 },
        velocity: Vec2::ZERO,
        pattern: Pattern::Star,
        pulse_phase: 0.0,
    }
}

#[test]
fn repulsion_pushes_away_from_pointer() {
    let mut rng = StdRng::seed_from_u64(2);
    let pointer = Vec2::new(100.0, 100.0);
    for offset in [Vec2::new(10.0, 0.0), Vec2::new(-30.0, 20.0), Vec2::new(0.0, -79.0)] {
        let mut s = shape_at(pointer + offset);
        apply_pointer_field(&mut s, Some(pointer), 200.0, 80.0, &mut rng);
        assert!(
            s.velocity.dot(s.pos - pointer) > 0.0,
            "velocity {:?} not outward at offset {:?}",
            s.velocity,
            offset
        );
        assert!(s.size > s.base_size);
        assert!(s.rotation_speed.abs() <= 0.05);
    }
}

#[test]
fn repulsion_is_strongest_near_the_pointer() {
    let mut rng = StdRng::seed_from_u64(2);
    let pointer = Vec2::ZERO;
    let mut near = shape_at(Vec2::new(5.0, 0.0));
    let mut far = shape_at(Vec2::new(70.0, 0.0));
    apply_pointer_field(&mut near, Some(pointer), 200.0, 80.0, &mut rng);
    apply_pointer_field(&mut far, Some(pointer), 200.0, 80.0, &mut rng);
    assert!(near.velocity.length() > far.velocity.length());
    // (80 - 5) / 80 * 2
    assert!((near.velocity.x - 1.875).abs() < 1e-5);
}

#[test]
fn attraction_pulls_toward_pointer_in_outer_ring() {
    let mut rng = StdRng::seed_from_u64(4);
    let pointer = Vec2::new(400.0, 300.0);
    let mut s = shape_at(Vec2::new(550.0, 300.0));
    apply_pointer_field(&mut s, Some(pointer), 200.0, 80.0, &mut rng);
    assert!(s.velocity.dot(pointer - s.pos) > 0.0);
    // force = 50 / 200, pull = force * 0.3
    assert!((s.velocity.x + 0.075).abs() < 1e-5);
    assert!((s.size - 30.0 * (1.0 + 0.25 * 0.3)).abs() < 1e-4);
    assert_eq!(s.rotation_speed, 0.0);
}

#[test]
fn outside_field_size_relaxes_to_base() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut s = shape_at(Vec2::new(1000.0, 1000.0));
    s.size = 50.0;
    apply_pointer_field(&mut s, Some(Vec2::ZERO), 200.0, 80.0, &mut rng);
    assert_eq!(s.velocity, Vec2::ZERO);
    assert!((s.size - 49.0).abs() < 1e-4);

    // Same relax when there is no pointer at all
    let mut s = shape_at(Vec2::ZERO);
    s.size = 10.0;
    apply_pointer_field(&mut s, None, 200.0, 80.0, &mut rng);
    assert!((s.size - 11.0).abs() < 1e-4);
}

#[test]
fn pointer_exactly_on_shape_applies_no_force() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut s = shape_at(Vec2::new(50.0, 50.0));
    apply_pointer_field(&mut s, Some(Vec2::new(50.0, 50.0)), 200.0, 80.0, &mut rng);
    assert!(s.velocity.is_finite());
    assert_eq!(s.velocity, Vec2::ZERO);
}

#[test]
fn integrate_moves_then_damps() {
    let mut s = shape_at(Vec2::ZERO);
    s.velocity = Vec2::new(10.0, -5.0);
    s.rotation_speed = 0.1;
    integrate(&mut s);
    assert_eq!(s.pos, Vec2::new(10.0, -5.0));
    assert!((s.velocity.x - 9.8).abs() < 1e-5);
    assert!((s.rotation - 0.1).abs() < 1e-6);
}

#[test]
fn wrap_teleports_past_margin() {
    let surface = Vec2::new(800.0, 600.0);
    assert_eq!(wrap(Vec2::new(-51.0, 10.0), surface), Vec2::new(850.0, 10.0));
    assert_eq!(wrap(Vec2::new(851.0, 10.0), surface), Vec2::new(-50.0, 10.0));
    assert_eq!(wrap(Vec2::new(10.0, -60.0), surface), Vec2::new(10.0, 650.0));
    assert_eq!(wrap(Vec2::new(10.0, 700.0), surface), Vec2::new(10.0, -50.0));
    // Inside the margin nothing moves
    assert_eq!(wrap(Vec2::new(-49.0, 649.0), surface), Vec2::new(-49.0, 649.0));
}

fn ambient_at(pos: Vec2) -> GeometricShape {
    GeometricShape {
        lifetime: Lifetime::Unbounded,
        rotation_speed: 0.02,
        ..shape_at(pos)
    }
}

/// One update of a single shape under `scroll`, on an 800x600 surface.
fn step_one(shape: GeometricShape, scroll: ScrollState) -> GeometricShape {
    let config = BackgroundConfig::default();
    let mut pools = EntityPools::new();
    if shape.is_ambient() {
        pools.replace_ambient(vec![shape]);
    } else {
        pools.push_transient(shape);
    }
    let mut rng = StdRng::seed_from_u64(6);
    physics::step(
        &mut pools,
        &mut rng,
        &StepInputs {
            config: &config,
            pointer: PointerState::default(),
            scroll,
            surface: Vec2::new(800.0, 600.0),
        },
    );
    pools.shapes()[0].clone()
}

fn scroll(velocity: f32, progress: f32) -> ScrollState {
    ScrollState {
        offset: 0.0,
        velocity,
        progress,
    }
}

#[test]
fn ambient_pulse_scales_with_scroll_progress() {
    let s = step_one(ambient_at(Vec2::new(400.0, 300.0)), scroll(0.0, 0.5));
    // 0.02 + 0.5 * 0.03
    assert!((s.pulse_phase - 0.035).abs() < 1e-6);
    let want = 30.0 * (1.0 + 0.035_f32.sin() * (0.1 + 0.5 * 0.15));
    assert!((s.size - want).abs() < 1e-4, "size {}", s.size);

    let s = step_one(ambient_at(Vec2::new(400.0, 300.0)), scroll(0.0, 0.0));
    assert!((s.pulse_phase - 0.02).abs() < 1e-6);
    assert!((s.size - 30.0 * (1.0 + 0.02_f32.sin() * 0.1)).abs() < 1e-4);
}

#[test]
fn scrolling_down_nudges_ambient_shapes_up() {
    let s = step_one(ambient_at(Vec2::new(400.0, 300.0)), scroll(3.0, 0.0));
    assert!((s.velocity.y + 0.03).abs() < 1e-6, "vy {}", s.velocity.y);
    assert_eq!(s.velocity.x, 0.0);

    let s = step_one(ambient_at(Vec2::new(400.0, 300.0)), scroll(-3.0, 0.0));
    assert!((s.velocity.y - 0.03).abs() < 1e-6);
}

#[test]
fn spring_weakens_only_above_fast_scroll() {
    let displaced = |v: f32| {
        let mut shape = ambient_at(Vec2::new(500.0, 300.0));
        shape.base_pos = Vec2::new(400.0, 300.0);
        step_one(shape, scroll(v, 0.0)).velocity.x
    };
    // (400 - 500) * spring
    assert!((displaced(0.0) + 0.03).abs() < 1e-6);
    assert!((displaced(5.0) + 0.03).abs() < 1e-6);
    assert!((displaced(-5.0) + 0.03).abs() < 1e-6);
    assert!((displaced(5.5) + 0.01).abs() < 1e-6);
    assert!((displaced(-40.0) + 0.01).abs() < 1e-6);
}

#[test]
fn ambient_spin_decays_and_drifts_with_progress() {
    let s = step_one(ambient_at(Vec2::new(400.0, 300.0)), scroll(0.0, 0.0));
    assert!((s.rotation_speed - 0.02 * 0.99).abs() < 1e-7);
    assert!((s.rotation - 0.02).abs() < 1e-7);

    let s = step_one(ambient_at(Vec2::new(400.0, 300.0)), scroll(0.0, 1.0));
    let drift = s.rotation_speed - 0.02 * 0.99;
    assert!((drift.abs() - 0.01).abs() < 1e-6, "drift {drift}");
}

#[test]
fn fast_scroll_at_full_depth_combines_every_term() {
    let mut shape = ambient_at(Vec2::new(400.0, 300.0));
    shape.rotation_speed = 0.0;
    let s = step_one(shape, scroll(100.0, 1.0));
    assert!((s.pulse_phase - 0.05).abs() < 1e-6);
    assert!((s.size - 30.0 * (1.0 + 0.05_f32.sin() * 0.25)).abs() < 1e-4);
    assert!((s.velocity.y + 1.0).abs() < 1e-6);
    assert!((s.rotation_speed.abs() - 0.01).abs() < 1e-6);
}

#[test]
fn ambient_shape_wraps_during_step() {
    let mut shape = ambient_at(Vec2::new(845.0, 300.0));
    shape.base_pos = shape.pos;
    shape.velocity = Vec2::new(10.0, 0.0);
    let s = step_one(shape, scroll(0.0, 0.0));
    assert_eq!(s.pos.x, -50.0);
    // Spring pulls back toward the base on the far side
    assert!(s.velocity.x > 9.8);
}

#[test]
fn transient_shapes_skip_ambient_motion() {
    let mut shape = shape_at(Vec2::new(400.0, 300.0));
    shape.rotation_speed = 0.02;
    let s = step_one(shape, scroll(100.0, 1.0));
    assert_eq!(s.pulse_phase, 0.0);
    assert_eq!(s.size, 30.0);
    assert_eq!(s.velocity, Vec2::ZERO);
    assert_eq!(s.rotation_speed, 0.02);
}
