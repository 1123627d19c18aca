//! Pointer-reactive spring lattice.
//!
//! A grid of points covering an extent, each tethered to its spawn position
//! by a Hooke spring. The pointer repels points inside an influence radius;
//! the spring pulls them home and damping settles the motion. Per-point
//! display values (alpha, trail segment) are derived from speed and pointer
//! proximity so a render surface can draw the field without owning any of
//! its state.

use glam::Vec2;

/// Tuning constants for a lattice field.
#[derive(Debug, Clone, Copy)]
pub struct LatticeConfig {
    /// Distance between neighboring grid points.
    pub spacing: f32,
    /// Pointer influence radius.
    pub influence_radius: f32,
    /// Peak repulsion applied at zero distance from the pointer.
    pub repel_strength: f32,
    /// Hooke pull back toward each point's origin.
    pub stiffness: f32,
    /// Velocity multiplier per step.
    pub damping: f32,
    /// Alpha for a resting point far from the pointer.
    pub base_alpha: f32,
    /// Upper alpha clamp.
    pub max_alpha: f32,
    /// Alpha added per unit of speed.
    pub speed_glow: f32,
    /// Alpha added while inside the influence radius.
    pub near_glow: f32,
    /// Speed above which a point exposes a motion trail.
    pub trail_speed: f32,
    /// Trail length as a multiple of velocity.
    pub trail_stretch: f32,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            spacing: 30.0,
            influence_radius: 180.0,
            repel_strength: 5.0,
            stiffness: 0.08,
            damping: 0.9,
            base_alpha: 0.1,
            max_alpha: 0.8,
            speed_glow: 0.05,
            near_glow: 0.3,
            trail_speed: 0.5,
            trail_stretch: 4.0,
        }
    }
}

/// One spring-tethered point.
#[derive(Debug, Clone, Copy)]
pub struct LatticePoint {
    pub position: Vec2,
    pub velocity: Vec2,
    origin: Vec2,
}

impl LatticePoint {
    /// The spawn position this point springs back to.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Current speed in pixels per step.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// The field of points. Rebuilt wholesale on resize.
#[derive(Debug, Clone)]
pub struct Lattice {
    config: LatticeConfig,
    points: Vec<LatticePoint>,
    cols: usize,
    rows: usize,
}

impl Lattice {
    /// Cover a `width` by `height` extent with the default constants.
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_config(width, height, LatticeConfig::default())
    }

    /// Cover an extent with custom constants.
    pub fn with_config(width: f32, height: f32, config: LatticeConfig) -> Self {
        let mut lattice = Self {
            config,
            points: Vec::new(),
            cols: 0,
            rows: 0,
        };
        lattice.resize(width, height);
        lattice
    }

    /// Rebuild the grid for a new extent, discarding in-flight motion.
    pub fn resize(&mut self, width: f32, height: f32) {
        // One extra column/row past each edge hides the border while points
        // are displaced.
        self.cols = (width / self.config.spacing).floor() as usize + 2;
        self.rows = (height / self.config.spacing).floor() as usize + 2;
        self.points.clear();
        self.points.reserve(self.cols * self.rows);
        for col in 0..self.cols {
            for row in 0..self.rows {
                let origin = Vec2::new(
                    col as f32 * self.config.spacing,
                    row as f32 * self.config.spacing,
                );
                self.points.push(LatticePoint {
                    position: origin,
                    velocity: Vec2::ZERO,
                    origin,
                });
            }
        }
    }

    #[inline]
    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    #[inline]
    pub fn points(&self) -> &[LatticePoint] {
        &self.points
    }

    /// Grid dimensions as (columns, rows).
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Advance every point one step. `pointer` is the cursor position in the
    /// lattice's own coordinate space, or `None` when the cursor is away.
    pub fn step(&mut self, pointer: Option<Vec2>) {
        let config = self.config;
        for point in &mut self.points {
            if let Some(cursor) = pointer {
                let away = point.position - cursor;
                let dist = away.length();
                if dist < config.influence_radius && dist > f32::EPSILON {
                    let force = (config.influence_radius - dist) / config.influence_radius;
                    point.velocity += away / dist * (force * config.repel_strength);
                }
            }
            point.velocity += (point.origin - point.position) * config.stiffness;
            point.velocity *= config.damping;
            point.position += point.velocity;
        }
    }

    /// Display alpha for a point, brighter when moving or near the pointer.
    pub fn alpha_of(&self, point: &LatticePoint, pointer: Option<Vec2>) -> f32 {
        let near = pointer
            .map(|cursor| point.position.distance(cursor) < self.config.influence_radius)
            .unwrap_or(false);
        let glow = if near { self.config.near_glow } else { 0.0 };
        (self.config.base_alpha + point.speed() * self.config.speed_glow + glow)
            .min(self.config.max_alpha)
    }

    /// Motion-trail segment for a fast-moving point, oriented against its
    /// velocity, or `None` below the trail speed.
    pub fn trail_of(&self, point: &LatticePoint) -> Option<(Vec2, Vec2)> {
        if point.speed() > self.config.trail_speed {
            Some((
                point.position,
                point.position - point.velocity * self.config.trail_stretch,
            ))
        } else {
            None
        }
    }
}
