//! Integration tests for the rope simulator.
//!
//! These pin the simulator's observable contract: anchor invariance, spring
//! convergence, drag determinism, the progress mapping, the one-shot
//! trigger, and the immediate-fire/tap policies.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;
use pullcord::{RopeConfig, RopeSim};

/// Constants with the noise sources off, for deterministic assertions.
fn quiet_config() -> RopeConfig {
    RopeConfig {
        gravity: 0.0,
        sway_amplitude: 0.0,
        ..RopeConfig::default()
    }
}

#[test]
fn anchor_never_moves() {
    let mut sim = RopeSim::new(800.0);

    for frame in 0..300 {
        let elapsed = frame as f32 / 60.0;
        match frame {
            60 => sim.pointer_down(Vec2::new(40.0, 200.0)),
            90 => sim.pointer_move(Vec2::new(-120.0, 560.0)),
            150 => sim.pointer_up(),
            _ => {}
        }
        sim.step(elapsed);

        let anchor = sim.nodes()[0];
        assert_eq!(anchor.position, Vec2::ZERO);
        assert_eq!(anchor.velocity, Vec2::ZERO);
    }
}

#[test]
fn segments_converge_to_rest_length() {
    let mut sim = RopeSim::new(1000.0).with_config(RopeConfig {
        node_count: 8,
        ..quiet_config()
    });
    let rest = sim.config().rest_length(1000.0);

    // Hold the head a little past the rope's total length. The constraints
    // are one-sided, so a violent stretch would crumple on release; a gentle
    // one relaxes back to rest cleanly.
    sim.pointer_down(Vec2::ZERO);
    sim.pointer_move(Vec2::new(0.0, 410.0));
    for _ in 0..60 {
        sim.step(0.0);
    }

    // While held, the stretch distributes evenly across every segment.
    for pair in sim.nodes().windows(2) {
        let gap = (pair[1].position - pair[0].position).length();
        assert!(
            (gap - 410.0 / 7.0).abs() < 0.5,
            "held segment at {gap}, expected an even split"
        );
    }

    sim.pointer_cancel();
    for _ in 0..600 {
        sim.step(0.0);
    }

    for pair in sim.nodes().windows(2) {
        let gap = (pair[1].position - pair[0].position).length();
        assert!(
            (gap - rest).abs() < rest * 0.02,
            "segment settled at {gap}, rest length is {rest}"
        );
    }
}

#[test]
fn gravity_keeps_the_chain_taut() {
    let mut sim = RopeSim::new(1000.0).with_config(RopeConfig {
        node_count: 8,
        sway_amplitude: 0.0,
        ..RopeConfig::default()
    });
    let rest = sim.config().rest_length(1000.0);

    for _ in 0..600 {
        sim.step(0.0);
    }

    // Hanging weight stretches each segment slightly past rest, never below.
    for pair in sim.nodes().windows(2) {
        let gap = (pair[1].position - pair[0].position).length();
        assert!(
            gap >= rest - 1e-3 && gap < rest + 2.0,
            "segment under gravity at {gap}, rest length is {rest}"
        );
    }
}

#[test]
fn drag_overrides_head_exactly() {
    let mut sim = RopeSim::new(800.0);
    // Leave some momentum in the chain first.
    for frame in 0..30 {
        sim.step(frame as f32 / 60.0);
    }

    let p0 = Vec2::new(10.0, 100.0);
    let p1 = Vec2::new(30.0, 260.0);
    sim.pointer_down(p0);
    sim.pointer_move(p1);
    sim.step(0.5);

    assert_eq!(sim.head().position, p1);
    assert_eq!(sim.head().velocity, Vec2::ZERO);
}

#[test]
fn progress_maps_the_travel_window() {
    let sim = RopeSim::new(1000.0);
    let window = sim.travel_window();
    assert_eq!(window.start, 400.0);
    assert_eq!(window.end, 750.0);

    assert_eq!(window.progress(390.0), 0.0);
    assert_eq!(window.progress(400.0), 0.0);
    assert_eq!(window.progress(575.0), 0.5);
    assert_eq!(window.progress(750.0), 1.0);
    assert_eq!(window.progress(1750.0), 1.0);

    // Resting below travel start, a fresh sim reads zero.
    assert_eq!(sim.progress(), 0.0);
}

#[test]
fn trigger_fires_exactly_once() {
    let fired = Rc::new(Cell::new(0u32));
    let counter = fired.clone();
    let mut sim = RopeSim::new(600.0)
        .with_config(quiet_config())
        .with_unveil(move || counter.set(counter.get() + 1));

    // First crossing.
    sim.pointer_down(Vec2::ZERO);
    sim.pointer_move(Vec2::new(0.0, 600.0));
    sim.step(0.0);
    assert!(sim.triggered());
    assert_eq!(fired.get(), 1);

    // Artificial reset of node positions without touching the latch.
    sim.resize(600.0);
    assert!(sim.triggered());

    // Second crossing attempt: pointer input is ignored once triggered and
    // the latch never refires.
    sim.pointer_down(Vec2::ZERO);
    sim.pointer_move(Vec2::new(0.0, 600.0));
    for _ in 0..10 {
        sim.step(0.0);
    }
    assert_eq!(fired.get(), 1);
}

#[test]
fn trigger_fires_mid_drag_without_release() {
    // Policy pin: the unveil fires the moment progress reaches 1, even while
    // the pointer is still down.
    let mut sim = RopeSim::new(800.0).with_config(quiet_config());
    sim.pointer_down(Vec2::new(0.0, 300.0));
    sim.pointer_move(Vec2::new(0.0, 800.0 * 0.75));
    sim.step(0.0);

    assert!(sim.dragging());
    assert!(sim.triggered());
}

#[test]
fn release_below_threshold_keeps_the_latch_unfired() {
    let mut sim = RopeSim::new(800.0).with_config(quiet_config());
    sim.pointer_down(Vec2::new(0.0, 300.0));
    sim.pointer_move(Vec2::new(0.0, 500.0));
    sim.step(0.0);
    assert!(!sim.triggered());

    sim.pointer_up();
    for _ in 0..120 {
        sim.step(0.0);
    }
    assert!(!sim.triggered());
    // Springs pulled the pendant back above the travel start.
    assert!(sim.progress() < 0.5);
}

#[test]
fn tap_fires_from_rest() {
    let fired = Rc::new(Cell::new(0u32));
    let counter = fired.clone();
    let mut sim = RopeSim::new(800.0)
        .with_config(quiet_config())
        .with_unveil(move || counter.set(counter.get() + 1));

    sim.pointer_down(Vec2::new(0.0, 320.0));
    sim.pointer_move(Vec2::new(2.0, 322.0)); // under the 5 px slop
    sim.pointer_up();

    assert!(sim.triggered());
    assert_eq!(fired.get(), 1);
}

#[test]
fn tap_can_be_disabled() {
    let mut sim = RopeSim::new(800.0).with_config(RopeConfig {
        tap_triggers: false,
        ..quiet_config()
    });
    sim.pointer_down(Vec2::new(0.0, 320.0));
    sim.pointer_up();
    assert!(!sim.triggered());
}

#[test]
fn cancel_never_taps() {
    let mut sim = RopeSim::new(800.0).with_config(quiet_config());
    sim.pointer_down(Vec2::new(0.0, 320.0));
    sim.pointer_cancel();
    assert!(!sim.triggered());
    assert!(!sim.dragging());
}

#[test]
fn resize_mid_drag_cancels_cleanly() {
    let mut sim = RopeSim::new(800.0).with_config(quiet_config());
    sim.pointer_down(Vec2::new(60.0, 400.0));
    sim.pointer_move(Vec2::new(60.0, 500.0));
    sim.step(0.0);
    assert!(sim.dragging());

    sim.resize(600.0);
    assert!(!sim.dragging());

    // The fresh chain steps on without the stale drag target.
    sim.step(0.0);
    assert_eq!(sim.head().position.x, 0.0);
    assert_eq!(sim.nodes().len(), sim.config().node_count);
}

#[test]
fn long_run_stays_bounded() {
    // Regression guard against numerical instability: default constants must
    // not oscillate or diverge over a long idle run.
    let mut sim = RopeSim::new(900.0);
    let rope_length = sim.config().total_length(900.0);

    for frame in 0..10_000 {
        sim.step(frame as f32 / 60.0);
        for node in sim.nodes() {
            assert!(
                node.position.x.abs() < rope_length && node.position.y.abs() < rope_length * 2.0,
                "node escaped at frame {frame}: {:?}",
                node.position
            );
            assert!(node.position.x.is_finite() && node.position.y.is_finite());
        }
    }

    // And the idle rope still hangs: head near the rope's natural depth.
    let head_y = sim.head().position.y;
    assert!(
        (head_y - rope_length).abs() < rope_length * 0.2,
        "head rests at {head_y}, rope length {rope_length}"
    );
}
