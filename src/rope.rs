//! The rope/pendant simulator.
//!
//! [`RopeSim`] owns the chain, the drag state, and the unveil latch. It is
//! renderer-agnostic and scheduler-agnostic: an external ticker calls
//! [`RopeSim::step`] once per frame with the current elapsed time, a render
//! surface reads node positions back, and a pointer source forwards
//! down/move/up/cancel events in anchor-relative coordinates.
//!
//! # Trigger policy
//!
//! The unveil fires the moment pull progress reaches 1.0, **whether or not a
//! drag is in flight** — releasing is not required. A press-and-release whose
//! pointer travel stays within the configured tap slop also fires it, so a
//! plain click on the pendant unveils. Both behaviors are pinned by tests.
//!
//! # Example
//!
//! ```
//! use pullcord::{RopeSim, RopeConfig};
//!
//! let mut sim = RopeSim::new(900.0).with_config(RopeConfig::default());
//! sim.step(0.0);
//! assert_eq!(sim.progress(), 0.0);
//! assert!(!sim.triggered());
//! ```

use glam::Vec2;

use crate::chain::{Chain, ChainNode};
use crate::config::RopeConfig;
use crate::progress::{TravelWindow, Trigger};
use crate::solver;

/// Ephemeral pointer-drag status.
#[derive(Debug, Default, Clone, Copy)]
struct DragState {
    active: bool,
    /// Latest pointer position, anchor-relative.
    point: Vec2,
    /// Accumulated pointer travel since the press, for tap detection.
    travel: f32,
}

/// An interactively draggable hanging chain with a one-shot unveil trigger.
///
/// Construct with [`RopeSim::new`], feed it pointer events, and call
/// [`RopeSim::step`] every frame.
pub struct RopeSim {
    config: RopeConfig,
    chain: Chain,
    window: TravelWindow,
    drag: DragState,
    trigger: Trigger,
    viewport_height: f32,
    on_unveil: Option<Box<dyn FnMut()>>,
}

impl RopeSim {
    /// Create a simulator for a viewport of the given height, with default
    /// constants. The chain starts at rest along a vertical line.
    pub fn new(viewport_height: f32) -> Self {
        let config = RopeConfig::default();
        Self {
            chain: Chain::vertical(config.node_count, config.total_length(viewport_height)),
            window: TravelWindow::from_viewport(
                viewport_height,
                config.travel_start_fraction,
                config.travel_end_fraction,
            ),
            config,
            drag: DragState::default(),
            trigger: Trigger::default(),
            viewport_height,
            on_unveil: None,
        }
    }

    /// Replace the simulation constants. Reinitializes the chain.
    pub fn with_config(mut self, config: RopeConfig) -> Self {
        self.config = config;
        self.reinit();
        self
    }

    /// Override the node count. Reinitializes the chain.
    pub fn with_node_count(mut self, node_count: usize) -> Self {
        self.config.node_count = node_count;
        self.reinit();
        self
    }

    /// Override the rope length as a fraction of viewport height.
    pub fn with_length_fraction(mut self, fraction: f32) -> Self {
        self.config.length_fraction = fraction;
        self.reinit();
        self
    }

    /// Install the unveil callback, invoked exactly once when the trigger
    /// fires.
    pub fn with_unveil<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.on_unveil = Some(Box::new(callback));
        self
    }

    /// Current simulation constants.
    #[inline]
    pub fn config(&self) -> &RopeConfig {
        &self.config
    }

    /// All chain nodes, anchor first. Positions are anchor-relative with
    /// `+y` down; the render surface adds half the viewport width and the
    /// anchor's vertical offset to get screen coordinates.
    #[inline]
    pub fn nodes(&self) -> &[ChainNode] {
        self.chain.nodes()
    }

    /// The free end carrying the pendant.
    #[inline]
    pub fn head(&self) -> ChainNode {
        self.chain.head()
    }

    /// Whether a drag is currently in flight.
    #[inline]
    pub fn dragging(&self) -> bool {
        self.drag.active
    }

    /// Normalized pull progress in `[0, 1]`, derived from the head's depth.
    pub fn progress(&self) -> f32 {
        self.window.progress(self.chain.head().position.y)
    }

    /// Whether the unveil already fired. Never resets.
    #[inline]
    pub fn triggered(&self) -> bool {
        self.trigger.fired()
    }

    /// The travel window in use, exposed for progress-bar consumers.
    #[inline]
    pub fn travel_window(&self) -> TravelWindow {
        self.window
    }

    /// Advance one frame: run the configured number of substeps, then
    /// re-evaluate progress against the trigger.
    ///
    /// `elapsed` is wall-clock seconds since the simulation started; it only
    /// drives the idle sway phase, so tests pass a constant.
    pub fn step(&mut self, elapsed: f32) {
        let sway = if self.drag.active || self.trigger.fired() {
            0.0
        } else {
            (elapsed * self.config.sway_frequency).sin() * self.config.sway_amplitude
        };
        let drag = self.drag.active.then_some(self.drag.point);
        for _ in 0..self.config.substeps {
            solver::substep(&mut self.chain, &self.config, drag, sway);
        }
        if self.progress() >= 1.0 {
            self.fire();
        }
    }

    /// Begin a drag at an anchor-relative point. Ignored once triggered.
    ///
    /// The surface must capture the pointer so move events keep arriving
    /// outside the pendant's bounds.
    pub fn pointer_down(&mut self, point: Vec2) {
        if self.trigger.fired() {
            return;
        }
        self.drag = DragState {
            active: true,
            point,
            travel: 0.0,
        };
        // Kill any in-flight momentum so the hand-off doesn't spike.
        let head = self.chain.len() - 1;
        self.chain.nodes_mut()[head].velocity = Vec2::ZERO;
    }

    /// Update the drag target. No-op unless dragging.
    pub fn pointer_move(&mut self, point: Vec2) {
        if !self.drag.active {
            return;
        }
        self.drag.travel += (point - self.drag.point).length();
        self.drag.point = point;
    }

    /// End the drag. A release whose total travel stayed within the tap slop
    /// fires the unveil immediately (when `tap_triggers` is set).
    pub fn pointer_up(&mut self) {
        let was_tap = self.drag.active && self.drag.travel <= self.config.tap_slop;
        self.drag.active = false;
        if was_tap && self.config.tap_triggers {
            self.fire();
        }
    }

    /// Abort the drag without tap semantics.
    pub fn pointer_cancel(&mut self) {
        self.drag.active = false;
    }

    /// Reinitialize for a new viewport height.
    ///
    /// Discards all node state (an accepted visual discontinuity), cancels
    /// any drag in flight so the interaction state cannot desync from the
    /// fresh chain, and leaves the trigger latched if it already fired.
    pub fn resize(&mut self, viewport_height: f32) {
        self.viewport_height = viewport_height;
        self.drag.active = false;
        self.reinit();
    }

    fn reinit(&mut self) {
        self.chain.reset(
            self.config.node_count,
            self.config.total_length(self.viewport_height),
        );
        self.window = TravelWindow::from_viewport(
            self.viewport_height,
            self.config.travel_start_fraction,
            self.config.travel_end_fraction,
        );
    }

    fn fire(&mut self) {
        if self.trigger.fire() {
            if let Some(callback) = &mut self.on_unveil {
                callback();
            }
        }
    }
}

impl std::fmt::Debug for RopeSim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RopeSim")
            .field("config", &self.config)
            .field("window", &self.window)
            .field("drag", &self.drag)
            .field("triggered", &self.trigger.fired())
            .field("viewport_height", &self.viewport_height)
            .finish_non_exhaustive()
    }
}
