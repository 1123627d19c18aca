//! # Lattice Field
//!
//! The pointer-reactive spring lattice: a grid of dots scatters away from
//! the cursor and springs back home, leaving short motion trails while it
//! settles.
//!
//! Run with: `cargo run --example lattice_field`

use pullcord::prelude::*;
use pullcord::StageError;

const DOT_COLOR: [f32; 3] = [0.13, 0.83, 0.93];
const DOT_RADIUS: f32 = 1.5;

struct FieldScene {
    lattice: Lattice,
    pointer: Option<Vec2>,
}

impl FieldScene {
    fn new() -> Self {
        Self {
            lattice: Lattice::new(1280.0, 720.0),
            pointer: None,
        }
    }
}

impl Scene for FieldScene {
    fn update(&mut self, ctx: &FrameContext<'_>) {
        // Until the cursor first moves, winit reports (0,0); leave the field
        // untouched rather than blasting a corner.
        let cursor = ctx.input.cursor();
        if cursor != Vec2::ZERO {
            self.pointer = Some(cursor);
        }
        self.lattice.step(self.pointer);
    }

    fn draw(&mut self, frame: &mut DrawList) {
        for point in self.lattice.points() {
            let alpha = self.lattice.alpha_of(point, self.pointer);
            let color = [DOT_COLOR[0], DOT_COLOR[1], DOT_COLOR[2], alpha];
            frame.circle(point.position, DOT_RADIUS, color);

            if let Some((from, to)) = self.lattice.trail_of(point) {
                let trail = [DOT_COLOR[0], DOT_COLOR[1], DOT_COLOR[2], alpha * 0.5];
                frame.segment(from, to, 1.0, trail);
            }
        }
    }

    fn resized(&mut self, bounds: Vec2) {
        self.lattice.resize(bounds.x, bounds.y);
    }
}

fn main() -> Result<(), StageError> {
    env_logger::init();
    Stage::new("pullcord - lattice field")
        .with_size(1280, 720)
        .run(FieldScene::new())
}
