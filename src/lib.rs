//! # Pullcord
//!
//! Interactive "pull-to-unveil" UI physics, renderer-agnostic at the core
//! with a winit/wgpu stage on the side.
//!
//! The centerpiece is [`RopeSim`], a mass-spring chain hanging from a fixed
//! anchor: drag the pendant at its free end past the travel window and a
//! one-shot unveil trigger fires. Around it sit the other self-contained
//! effects of the same family: the [`cloud`] layout projector (Fibonacci
//! globe / grouped grid / phyllotaxis disc), the pointer-reactive
//! [`Lattice`] field, and the [`MascotBrain`] evasion state machine.
//!
//! ## Quick Start
//!
//! The cores are plain structs stepped by any ticker:
//!
//! ```
//! use glam::Vec2;
//! use pullcord::RopeSim;
//!
//! let mut sim = RopeSim::new(900.0).with_unveil(|| println!("unveiled"));
//!
//! sim.pointer_down(Vec2::new(0.0, 360.0));
//! sim.pointer_move(Vec2::new(0.0, 700.0));
//! sim.step(0.0);
//! assert!(sim.triggered());
//! ```
//!
//! To put one on screen, host a [`Scene`] on a [`Stage`]:
//!
//! ```ignore
//! use pullcord::{Stage, Scene, FrameContext, DrawList};
//!
//! struct Pendant { sim: pullcord::RopeSim }
//!
//! impl Scene for Pendant {
//!     fn update(&mut self, ctx: &FrameContext<'_>) {
//!         self.sim.step(ctx.elapsed);
//!     }
//!     fn draw(&mut self, frame: &mut DrawList) {
//!         // queue quads/circles/segments from self.sim.nodes()
//!     }
//! }
//!
//! Stage::new("pendant").run(Pendant { sim: pullcord::RopeSim::new(720.0) })?;
//! # Ok::<(), pullcord::StageError>(())
//! ```
//!
//! ## Coordinate spaces
//!
//! The rope works in anchor-relative pixels, `+y` down; the render surface
//! adds half the viewport width and the anchor's vertical offset. The
//! lattice and mascot work in whatever pixel space the consumer feeds them.
//! Device-pixel-ratio handling belongs to the render surface, never the
//! cores.
//!
//! ## Scheduling
//!
//! Every simulator exposes a `step`/`update` method and assumes only that it
//! is called repeatedly — `requestAnimationFrame`, a fixed-rate timer, or a
//! test loop all work. The [`Stage`] drives scenes off winit redraws and a
//! [`FrameClock`].

pub mod chain;
pub mod cloud;
pub mod config;
pub mod error;
pub mod input;
pub mod lattice;
pub mod mascot;
pub mod progress;
pub mod render;
pub mod rope;
pub mod shader;
mod solver;
pub mod stage;
pub mod time;

pub use bytemuck;
pub use chain::{Chain, ChainNode};
pub use cloud::{DeviceClass, Placement, TagItem};
pub use config::RopeConfig;
pub use error::{GpuError, StageError};
pub use glam::Vec2;
pub use input::{Input, PointerButton};
pub use lattice::{Lattice, LatticeConfig, LatticePoint};
pub use mascot::{EvadePhase, EvadeStrategy, MascotBrain, Side};
pub use progress::{TravelWindow, Trigger};
pub use render::{DrawList, Renderer, SpriteInstance};
pub use rope::RopeSim;
pub use stage::{FrameContext, Scene, Stage};
pub use time::FrameClock;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use pullcord::prelude::*;
/// ```
pub mod prelude {
    pub use crate::chain::ChainNode;
    pub use crate::cloud::{self, DeviceClass, Placement, TagItem};
    pub use crate::config::RopeConfig;
    pub use crate::input::{Input, PointerButton};
    pub use crate::lattice::{Lattice, LatticeConfig};
    pub use crate::mascot::{EvadePhase, EvadeStrategy, MascotBrain, Side};
    pub use crate::progress::TravelWindow;
    pub use crate::render::DrawList;
    pub use crate::rope::RopeSim;
    pub use crate::stage::{FrameContext, Scene, Stage};
    pub use crate::time::FrameClock;
    pub use glam::Vec2;
}
