//! Criterion benches for the per-frame hot paths: a rope frame at the
//! default 40 substeps, a full-screen lattice step, and a complete cloud
//! layout pass.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec2;
use pullcord::cloud::{self, DeviceClass, TagItem};
use pullcord::{Lattice, RopeSim};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_rope_step(c: &mut Criterion) {
    let mut sim = RopeSim::new(900.0);
    let mut frame = 0u32;

    c.bench_function("rope_step_idle", |b| {
        b.iter(|| {
            frame += 1;
            sim.step(black_box(frame as f32 / 60.0));
        })
    });

    let mut dragged = RopeSim::new(900.0);
    let mut rng = StdRng::seed_from_u64(7);
    dragged.pointer_down(Vec2::new(0.0, 200.0));
    c.bench_function("rope_step_dragging", |b| {
        b.iter(|| {
            let target = Vec2::new(rng.gen_range(-200.0..200.0), rng.gen_range(100.0..500.0));
            dragged.pointer_move(black_box(target));
            dragged.step(0.0);
        })
    });
}

fn bench_lattice_step(c: &mut Criterion) {
    let mut lattice = Lattice::new(1280.0, 720.0);
    let mut rng = StdRng::seed_from_u64(11);

    c.bench_function("lattice_step_1280x720", |b| {
        b.iter(|| {
            let cursor = Vec2::new(rng.gen_range(0.0..1280.0), rng.gen_range(0.0..720.0));
            lattice.step(black_box(Some(cursor)));
        })
    });
}

fn bench_cloud_layout(c: &mut Criterion) {
    let items: Vec<TagItem> = (0..64)
        .map(|i| TagItem::new(format!("tag-{i}"), i % 4))
        .collect();

    c.bench_function("cloud_layout_64", |b| {
        let mut rotation = 0.0f32;
        b.iter(|| {
            rotation += cloud::ROTATION_STEP;
            for index in 0..items.len() {
                black_box(cloud::place(index, &items, rotation, DeviceClass::Desktop));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_rope_step,
    bench_lattice_step,
    bench_cloud_layout
);
criterion_main!(benches);
