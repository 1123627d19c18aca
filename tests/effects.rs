//! Integration tests for the secondary effects: the tag-cloud projector,
//! the spring lattice, and the mascot brain, exercised through the public
//! API the way a scene would.

use glam::Vec2;
use pullcord::cloud::{self, DeviceClass, TagItem, GLOBE_RADIUS, PERSPECTIVE};
use pullcord::{EvadePhase, Lattice, MascotBrain, Side};

fn stack() -> Vec<TagItem> {
    let groups: [&[&str]; 4] = [
        &["wgpu", "winit", "naga", "bytemuck"],
        &["glam", "nalgebra", "rapier", "parry"],
        &["tokio", "hyper", "axum", "tonic"],
        &["serde", "clap", "criterion", "tracing"],
    ];
    groups
        .iter()
        .enumerate()
        .flat_map(|(group, labels)| {
            labels
                .iter()
                .map(move |label| TagItem::new(*label, group))
        })
        .collect()
}

#[test]
fn globe_stays_inside_the_projected_sphere() {
    let items = stack();
    let min_scale = PERSPECTIVE / (PERSPECTIVE + GLOBE_RADIUS);
    let max_scale = PERSPECTIVE / (PERSPECTIVE - GLOBE_RADIUS);

    for rotation in [0.0, 0.5, 1.7, 4.0] {
        for index in 0..items.len() {
            let p = cloud::place(index, &items, rotation, DeviceClass::Desktop).unwrap();
            assert!(p.scale >= min_scale - 1e-4 && p.scale <= max_scale + 1e-4);
            // The projection scales a point at radius <= GLOBE_RADIUS.
            assert!(p.globe.length() <= GLOBE_RADIUS * max_scale + 1e-3);
            let expected_z = (p.scale * 100.0).floor() as i32;
            assert_eq!(p.z_order, expected_z);
        }
    }
}

#[test]
fn a_full_turn_brings_the_globe_home() {
    let items = stack();
    let tau = std::f32::consts::TAU;
    for index in 0..items.len() {
        let at_zero = cloud::place(index, &items, 0.0, DeviceClass::Desktop).unwrap();
        let turned = cloud::place(index, &items, tau, DeviceClass::Desktop).unwrap();
        assert!((at_zero.globe - turned.globe).length() < 1e-2);
    }
}

#[test]
fn grid_orders_columns_by_group() {
    let items = stack();
    let mut column_x = Vec::new();
    for group in 0..4 {
        let index = items.iter().position(|i| i.group == group).unwrap();
        let p = cloud::place(index, &items, 0.0, DeviceClass::Desktop).unwrap();
        column_x.push(p.grid.x);
    }
    for pair in column_x.windows(2) {
        assert!(pair[0] < pair[1], "columns out of order: {column_x:?}");
    }
    // Columns are mirrored around the cloud center.
    assert_eq!(column_x[0], -column_x[3]);
    assert_eq!(column_x[1], -column_x[2]);
}

#[test]
fn grid_rows_pack_each_group_top_down() {
    let items = stack();
    for group in 0..4 {
        let rows: Vec<f32> = (0..items.len())
            .filter(|&i| items[i].group == group)
            .map(|i| {
                cloud::place(i, &items, 0.0, DeviceClass::Desktop)
                    .unwrap()
                    .grid
                    .y
            })
            .collect();
        for pair in rows.windows(2) {
            assert_eq!(pair[1] - pair[0], 50.0);
        }
    }
}

#[test]
fn lattice_recovers_from_a_cursor_sweep() {
    let mut lattice = Lattice::new(600.0, 400.0);

    // Sweep the cursor across the field, then leave.
    for step in 0..120 {
        let x = step as f32 * 5.0;
        lattice.step(Some(Vec2::new(x, 200.0)));
    }
    let stirred = lattice
        .points()
        .iter()
        .any(|p| p.position.distance(p.origin()) > 1.0);
    assert!(stirred, "the sweep never displaced anything");

    for _ in 0..600 {
        lattice.step(None);
    }
    for point in lattice.points() {
        assert!(point.position.distance(point.origin()) < 0.5);
    }
}

#[test]
fn lattice_resize_rebuilds_the_grid() {
    let mut lattice = Lattice::new(600.0, 400.0);
    for _ in 0..30 {
        lattice.step(Some(Vec2::new(300.0, 200.0)));
    }
    lattice.resize(300.0, 300.0);
    let (cols, rows) = lattice.dimensions();
    assert_eq!(lattice.points().len(), cols * rows);
    for point in lattice.points() {
        assert_eq!(point.position, point.origin());
        assert_eq!(point.velocity, Vec2::ZERO);
    }
}

#[test]
fn mascot_round_trip_returns_to_the_first_side() {
    let mut brain = MascotBrain::new();
    assert_eq!(brain.side(), Side::Right);
    let far = Vec2::new(2000.0, 0.0);

    for _ in 0..2 {
        // Provoke a flee, then wait out the whole cycle.
        brain.update(Vec2::new(20.0, 0.0), 0.016);
        assert_eq!(brain.phase(), EvadePhase::Announcing);
        let mut guard = 0;
        while brain.phase() != EvadePhase::Docked {
            brain.update(far, 0.1);
            guard += 1;
            assert!(guard < 100, "flee cycle never settled");
        }
    }

    assert_eq!(brain.side(), Side::Right);
    // Two escapes, two taunts consumed.
    assert_eq!(brain.speech(), "Nope!");
}
