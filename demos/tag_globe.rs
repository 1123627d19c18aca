//! # Tag Globe
//!
//! The tag-cloud projector morphing between its three layouts: a rotating
//! Fibonacci globe, a grouped grid, and a phyllotaxis disc.
//!
//! - Click anywhere to cycle globe → grid → disc.
//! - Press M to toggle the mobile grid geometry.
//!
//! Run with: `cargo run --example tag_globe`

use pullcord::prelude::*;
use pullcord::StageError;
use winit::keyboard::KeyCode;

/// Seconds a layout morph takes.
const MORPH_SECS: f32 = 0.7;

const GROUP_COLORS: [[f32; 4]; 4] = [
    [0.13, 0.83, 0.93, 1.0],
    [0.65, 0.55, 0.98, 1.0],
    [0.99, 0.73, 0.25, 1.0],
    [0.42, 0.87, 0.52, 1.0],
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Layout {
    Globe,
    Grid,
    Disc,
}

impl Layout {
    fn next(self) -> Self {
        match self {
            Layout::Globe => Layout::Grid,
            Layout::Grid => Layout::Disc,
            Layout::Disc => Layout::Globe,
        }
    }

    fn of(self, placement: &Placement) -> Vec2 {
        match self {
            Layout::Globe => placement.globe,
            Layout::Grid => placement.grid,
            Layout::Disc => placement.disc,
        }
    }
}

struct CloudScene {
    items: Vec<TagItem>,
    rotation: f32,
    layout: Layout,
    previous: Layout,
    morph: f32,
    device: DeviceClass,
    bounds: Vec2,
}

impl CloudScene {
    fn new() -> Self {
        let items = vec![
            // Rendering (group 0)
            TagItem::new("wgpu", 0),
            TagItem::new("winit", 0),
            TagItem::new("naga", 0),
            TagItem::new("bytemuck", 0),
            // Math & physics (group 1)
            TagItem::new("glam", 1),
            TagItem::new("nalgebra", 1),
            TagItem::new("rapier", 1),
            TagItem::new("parry", 1),
            TagItem::new("ultraviolet", 1),
            // Async & services (group 2)
            TagItem::new("tokio", 2),
            TagItem::new("hyper", 2),
            TagItem::new("axum", 2),
            TagItem::new("tonic", 2),
            TagItem::new("reqwest", 2),
            // Tooling (group 3)
            TagItem::new("serde", 3),
            TagItem::new("clap", 3),
            TagItem::new("criterion", 3),
            TagItem::new("tracing", 3),
            TagItem::new("rand", 3),
        ];
        Self {
            items,
            rotation: 0.0,
            layout: Layout::Globe,
            previous: Layout::Globe,
            morph: 1.0,
            device: DeviceClass::Desktop,
            bounds: Vec2::new(1280.0, 720.0),
        }
    }
}

/// The morph easing from the original component, a gentle overshoot.
fn ease_out_back(t: f32) -> f32 {
    let c1 = 1.70158;
    let c3 = c1 + 1.0;
    1.0 + c3 * (t - 1.0).powi(3) + c1 * (t - 1.0).powi(2)
}

impl Scene for CloudScene {
    fn update(&mut self, ctx: &FrameContext<'_>) {
        if self.layout == Layout::Globe {
            self.rotation += cloud::ROTATION_STEP;
        }
        if ctx.input.pressed(PointerButton::Primary) {
            self.previous = self.layout;
            self.layout = self.layout.next();
            self.morph = 0.0;
        }
        if ctx.input.key_pressed(KeyCode::KeyM) {
            self.device = match self.device {
                DeviceClass::Desktop => DeviceClass::Mobile,
                DeviceClass::Mobile => DeviceClass::Desktop,
            };
        }
        self.morph = (self.morph + ctx.delta / MORPH_SECS).min(1.0);
    }

    fn draw(&mut self, frame: &mut DrawList) {
        let center = self.bounds * 0.5;
        let blend = ease_out_back(self.morph);

        let mut sprites: Vec<(i32, Vec2, f32, [f32; 4])> = Vec::with_capacity(self.items.len());
        for (index, item) in self.items.iter().enumerate() {
            let Some(placement) = cloud::place(index, &self.items, self.rotation, self.device)
            else {
                continue;
            };
            let from = self.previous.of(&placement);
            let to = self.layout.of(&placement);
            let position = from.lerp(to, blend);

            // Grid and disc flatten depth away; the globe keeps it.
            let (scale, z) = match self.layout {
                Layout::Globe => (placement.scale, placement.z_order),
                _ => (1.0, 10),
            };
            sprites.push((z, center + position, scale, GROUP_COLORS[item.group % 4]));
        }

        // Farther items first so near ones draw on top.
        sprites.sort_by_key(|(z, ..)| *z);
        for (_, position, scale, color) in sprites {
            frame.circle(position, 10.0 * scale, color);
        }
    }

    fn resized(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }
}

fn main() -> Result<(), StageError> {
    env_logger::init();
    Stage::new("pullcord - tag globe")
        .with_size(1280, 720)
        .run(CloudScene::new())
}
