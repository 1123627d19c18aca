//! # Pull To Unveil
//!
//! The full pendant interaction: a rope hangs from the top of the window
//! with a draggable head at its free end. Pull the head past the travel
//! window (or just click it) and the standby curtain sweeps away.
//!
//! - Drag the pendant down to build pull progress (bar at the bottom).
//! - Release early and the springs snap it back up.
//! - A plain click fires the unveil immediately.
//!
//! Run with: `cargo run --example pull_to_unveil`

use std::cell::Cell;
use std::rc::Rc;

use pullcord::prelude::*;
use pullcord::StageError;

const ROPE_COLOR: [f32; 4] = [0.33, 0.42, 0.53, 1.0];
const HEAD_COLOR: [f32; 4] = [0.06, 0.09, 0.16, 1.0];
const HEAD_RING: [f32; 4] = [0.12, 0.65, 0.77, 0.55];
const EYE_COLOR: [f32; 4] = [0.13, 0.83, 0.93, 1.0];
const BAR_COLOR: [f32; 4] = [0.13, 0.83, 0.93, 0.9];
const BAR_TRACK: [f32; 4] = [1.0, 1.0, 1.0, 0.08];
const CURTAIN: [f32; 4] = [0.01, 0.03, 0.08, 1.0];

/// Seconds the curtain takes to sweep off screen.
const UNVEIL_SECS: f32 = 0.8;

struct PendantScene {
    sim: RopeSim,
    bounds: Vec2,
    unveiled: Rc<Cell<bool>>,
    /// Curtain sweep progress once the trigger fired.
    sweep: f32,
}

impl PendantScene {
    fn new() -> Self {
        let unveiled = Rc::new(Cell::new(false));
        let flag = unveiled.clone();
        Self {
            sim: RopeSim::new(720.0).with_unveil(move || flag.set(true)),
            bounds: Vec2::new(1280.0, 720.0),
            unveiled,
            sweep: 0.0,
        }
    }

    /// Screen position of an anchor-relative rope point.
    fn to_screen(&self, point: Vec2) -> Vec2 {
        point + Vec2::new(self.bounds.x * 0.5, 0.0)
    }

    /// Pointer position in the rope's anchor-relative space.
    fn to_rope(&self, cursor: Vec2) -> Vec2 {
        cursor - Vec2::new(self.bounds.x * 0.5, 0.0)
    }
}

impl Scene for PendantScene {
    fn update(&mut self, ctx: &FrameContext<'_>) {
        let cursor = self.to_rope(ctx.input.cursor());

        if ctx.input.pointer_cancelled() {
            self.sim.pointer_cancel();
        } else if ctx.input.pressed(PointerButton::Primary) {
            // Only grab when the press lands on the pendant head.
            if cursor.distance(self.sim.head().position) < 48.0 {
                self.sim.pointer_down(cursor);
            }
        } else if ctx.input.released(PointerButton::Primary) {
            self.sim.pointer_up();
        } else if ctx.input.held(PointerButton::Primary) {
            self.sim.pointer_move(cursor);
        }

        self.sim.step(ctx.elapsed);

        if self.unveiled.get() && self.sweep < 1.0 {
            self.sweep = (self.sweep + ctx.delta / UNVEIL_SECS).min(1.0);
            if self.sweep >= 1.0 {
                log::info!("curtain fully open");
            }
        }
    }

    fn draw(&mut self, frame: &mut DrawList) {
        // Ease the whole standby screen upward as the unveil plays out.
        let t = self.sweep;
        let lift = (1.0 - (1.0 - t) * (1.0 - t)) * self.bounds.y;
        let rise = Vec2::new(0.0, -lift);

        if t < 1.0 {
            frame.quad(
                self.bounds * 0.5 + rise,
                self.bounds,
                CURTAIN,
            );

            // Rope, anchor to head.
            let nodes = self.sim.nodes();
            for pair in nodes.windows(2) {
                frame.segment(
                    self.to_screen(pair[0].position) + rise,
                    self.to_screen(pair[1].position) + rise,
                    3.0,
                    ROPE_COLOR,
                );
            }

            // Pendant head with a glow ring and blinking eyes.
            let head = self.to_screen(self.sim.head().position) + rise;
            frame.circle(head, 36.0, HEAD_RING);
            frame.circle(head, 32.0, HEAD_COLOR);
            for dx in [-8.0, 8.0] {
                frame.circle(head + Vec2::new(dx, -2.0), 5.0, EYE_COLOR);
            }

            // Pull progress bar.
            let bar_width = 240.0;
            let bar_center = Vec2::new(self.bounds.x * 0.5, self.bounds.y - 60.0) + rise;
            frame.quad(bar_center, Vec2::new(bar_width, 6.0), BAR_TRACK);
            let fill = bar_width * self.sim.progress();
            if fill > 0.0 {
                frame.quad(
                    bar_center - Vec2::new((bar_width - fill) * 0.5, 0.0),
                    Vec2::new(fill, 6.0),
                    BAR_COLOR,
                );
            }
        }
    }

    fn resized(&mut self, bounds: Vec2) {
        self.bounds = bounds;
        self.sim.resize(bounds.y);
    }
}

fn main() -> Result<(), StageError> {
    env_logger::init();
    Stage::new("pullcord - pull to unveil")
        .with_size(1280, 720)
        .run(PendantScene::new())
}
