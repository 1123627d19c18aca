//! # Mascot Evade
//!
//! The docked mascot head tracking the cursor: its eyes follow you, its ring
//! heats up as you close in, and when you get too close it announces an
//! escape and re-emerges on the other side of the window.
//!
//! Hover directly on the head to pet it — a hovered mascot never flees.
//!
//! Run with: `cargo run --example mascot_evade`

use pullcord::prelude::*;
use pullcord::StageError;

const HEAD_RADIUS: f32 = 32.0;
const DOCK_MARGIN: f32 = 96.0;
const CABLE_DROP: f32 = 100.0;

const HEAD_COLOR: [f32; 4] = [0.06, 0.09, 0.16, 1.0];
const CABLE_COLOR: [f32; 4] = [0.2, 0.27, 0.37, 1.0];
const EYE_SOCKET: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
const PUPIL_CALM: [f32; 3] = [0.13, 0.83, 0.93];
const PUPIL_ANGRY: [f32; 3] = [0.94, 0.27, 0.27];

struct MascotScene {
    brain: MascotBrain,
    bounds: Vec2,
}

impl MascotScene {
    fn new() -> Self {
        Self {
            brain: MascotBrain::new(),
            bounds: Vec2::new(1280.0, 720.0),
        }
    }

    fn dock_position(&self) -> Vec2 {
        let x = match self.brain.side() {
            Side::Right => self.bounds.x - DOCK_MARGIN,
            Side::Left => DOCK_MARGIN,
        };
        Vec2::new(x, CABLE_DROP)
    }

    /// Head center for the current phase; exits slide the head off screen.
    fn head_position(&self) -> Vec2 {
        let docked = self.dock_position();
        match self.brain.phase() {
            EvadePhase::Docked | EvadePhase::Announcing => docked,
            EvadePhase::Fleeing => {
                let t = self.brain.phase_progress();
                let travel = match self.brain.strategy() {
                    EvadeStrategy::Retract => -(CABLE_DROP + HEAD_RADIUS * 2.0),
                    EvadeStrategy::Drop => self.bounds.y,
                };
                docked + Vec2::new(0.0, travel * t * t)
            }
            EvadePhase::Hidden => docked + Vec2::new(0.0, -self.bounds.y),
        }
    }
}

impl Scene for MascotScene {
    fn update(&mut self, ctx: &FrameContext<'_>) {
        let head = self.head_position();
        let offset = ctx.input.cursor() - head;
        self.brain.set_hovered(offset.length() < HEAD_RADIUS);
        self.brain.update(offset, ctx.delta);

        if ctx.input.pressed(PointerButton::Primary) && !self.brain.speech().is_empty() {
            log::info!("mascot says: {}", self.brain.speech());
        }
    }

    fn draw(&mut self, frame: &mut DrawList) {
        if self.brain.phase() == EvadePhase::Hidden {
            return;
        }

        let head = self.head_position();
        let danger = self.brain.danger();

        // Cable, unless the mascot dropped it.
        let cable_gone = self.brain.phase() == EvadePhase::Fleeing
            && self.brain.strategy() == EvadeStrategy::Drop;
        if !cable_gone {
            frame.segment(
                Vec2::new(head.x, head.y - CABLE_DROP),
                head,
                3.0,
                CABLE_COLOR,
            );
        }

        // Danger ring blends calm cyan toward red as the cursor closes in.
        let ring = [
            PUPIL_CALM[0] + (PUPIL_ANGRY[0] - PUPIL_CALM[0]) * danger,
            PUPIL_CALM[1] + (PUPIL_ANGRY[1] - PUPIL_CALM[1]) * danger,
            PUPIL_CALM[2] + (PUPIL_ANGRY[2] - PUPIL_CALM[2]) * danger,
            0.35 + 0.45 * danger,
        ];
        frame.circle(head, HEAD_RADIUS + 4.0 + danger * 6.0, ring);
        frame.circle(head, HEAD_RADIUS, HEAD_COLOR);

        // Eyes with tracked pupils.
        let pupil_color = if danger > 0.8 { PUPIL_ANGRY } else { PUPIL_CALM };
        for dx in [-9.0, 9.0] {
            let eye = head + Vec2::new(dx, -4.0);
            frame.circle(eye, 7.0, EYE_SOCKET);
            frame.circle(
                eye + self.brain.eye_offset(),
                3.0,
                [pupil_color[0], pupil_color[1], pupil_color[2], 1.0],
            );
        }
    }

    fn resized(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }
}

fn main() -> Result<(), StageError> {
    env_logger::init();
    Stage::new("pullcord - mascot evade")
        .with_size(1280, 720)
        .run(MascotScene::new())
}
