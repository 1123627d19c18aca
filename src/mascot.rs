//! Mascot evasion brain.
//!
//! Drives the docked mascot head's cursor awareness: eye tracking, a danger
//! level that ramps as the cursor closes in, and a timed flee/re-emerge cycle
//! that swaps the mascot to the other side of the screen when the cursor
//! gets too close. The brain owns no visuals; a consumer reads its state
//! every frame and renders however it likes.

use glam::Vec2;

/// Cursor distance at which the mascot starts getting nervous.
pub const SAFE_RADIUS: f32 = 400.0;
/// Cursor distance at which the danger level saturates and a flee starts.
pub const CRITICAL_RADIUS: f32 = 150.0;

/// Pupil travel cap in pixels.
const EYE_RANGE: f32 = 3.0;
/// Pupil travel per pixel of cursor distance.
const EYE_SCALE: f32 = 1.0 / 20.0;

/// Seconds the announcement line stays up before the exit starts.
const ANNOUNCE_SECS: f32 = 0.6;
/// Seconds the exit animation gets to play out.
const FLEE_SECS: f32 = 1.0;
/// Seconds spent off-screen before re-emerging on the other side.
const HIDDEN_SECS: f32 = 0.2;

/// Taunts cycled through on each successful escape.
const TAUNTS: [&str; 5] = [
    "Too slow!",
    "Nope!",
    "Security Breach!",
    "Deploying Evasion...",
    "404: Monkey Moved",
];

/// Which screen edge the mascot is docked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn flipped(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Where the mascot is in its flee cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvadePhase {
    /// Hanging in place, tracking the cursor.
    Docked,
    /// Flee committed; the announcement line is showing.
    Announcing,
    /// Exit animation in flight.
    Fleeing,
    /// Off-screen, about to re-emerge on the other side.
    Hidden,
}

/// How the mascot leaves the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvadeStrategy {
    /// Pull back up past the top edge.
    Retract,
    /// Let go and fall off the bottom.
    Drop,
}

/// The mascot's cursor-awareness state machine.
#[derive(Debug, Clone)]
pub struct MascotBrain {
    side: Side,
    phase: EvadePhase,
    strategy: EvadeStrategy,
    danger: f32,
    eye_offset: Vec2,
    speech: &'static str,
    phase_left: f32,
    phase_total: f32,
    hovered: bool,
    taunt_cursor: usize,
}

impl MascotBrain {
    pub fn new() -> Self {
        Self {
            side: Side::Right,
            phase: EvadePhase::Docked,
            strategy: EvadeStrategy::Retract,
            danger: 0.0,
            eye_offset: Vec2::ZERO,
            speech: "",
            phase_left: 0.0,
            phase_total: 1.0,
            hovered: false,
            taunt_cursor: 0,
        }
    }

    /// Mark the cursor as resting directly on the head. A hovered mascot is
    /// being deliberately engaged and will not flee.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Advance the brain. `cursor` is the cursor offset from the head
    /// center; `dt` is seconds since the last update.
    pub fn update(&mut self, cursor: Vec2, dt: f32) {
        let dist = cursor.length();

        // Cursor sensing only matters while visible and settled.
        if matches!(self.phase, EvadePhase::Docked) {
            self.danger = if dist < SAFE_RADIUS {
                1.0 - ((dist - CRITICAL_RADIUS) / (SAFE_RADIUS - CRITICAL_RADIUS)).max(0.0)
            } else {
                0.0
            };
            self.eye_offset = if dist > f32::EPSILON {
                cursor / dist * EYE_RANGE.min(dist * EYE_SCALE)
            } else {
                Vec2::ZERO
            };

            if dist < CRITICAL_RADIUS && !self.hovered {
                self.begin_flee();
            }
            return;
        }

        self.phase_left -= dt;
        if self.phase_left > 0.0 {
            return;
        }
        match self.phase {
            EvadePhase::Announcing => self.enter(EvadePhase::Fleeing, FLEE_SECS),
            EvadePhase::Fleeing => self.enter(EvadePhase::Hidden, HIDDEN_SECS),
            EvadePhase::Hidden => {
                self.side = self.side.flipped();
                self.speech = TAUNTS[self.taunt_cursor % TAUNTS.len()];
                self.taunt_cursor += 1;
                self.danger = 0.0;
                self.eye_offset = Vec2::ZERO;
                self.phase = EvadePhase::Docked;
            }
            EvadePhase::Docked => {}
        }
    }

    fn begin_flee(&mut self) {
        // Alternate strategies so both exits get screen time.
        self.strategy = match self.strategy {
            EvadeStrategy::Retract => EvadeStrategy::Drop,
            EvadeStrategy::Drop => EvadeStrategy::Retract,
        };
        self.speech = match self.strategy {
            EvadeStrategy::Retract => "PULL UP!",
            EvadeStrategy::Drop => "ABANDON SHIP!",
        };
        self.enter(EvadePhase::Announcing, ANNOUNCE_SECS);
    }

    fn enter(&mut self, phase: EvadePhase, secs: f32) {
        self.phase = phase;
        self.phase_left = secs;
        self.phase_total = secs;
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn phase(&self) -> EvadePhase {
        self.phase
    }

    #[inline]
    pub fn strategy(&self) -> EvadeStrategy {
        self.strategy
    }

    /// Nervousness in `[0, 1]`: 0 outside the safe radius, 1 at the
    /// critical radius.
    #[inline]
    pub fn danger(&self) -> f32 {
        self.danger
    }

    /// Pupil offset from the eye center.
    #[inline]
    pub fn eye_offset(&self) -> Vec2 {
        self.eye_offset
    }

    /// Current speech-bubble line, possibly empty.
    #[inline]
    pub fn speech(&self) -> &'static str {
        self.speech
    }

    /// How far through the current timed phase the brain is, in `[0, 1]`.
    /// Always 1 while docked.
    pub fn phase_progress(&self) -> f32 {
        if matches!(self.phase, EvadePhase::Docked) {
            1.0
        } else {
            (1.0 - self.phase_left / self.phase_total).clamp(0.0, 1.0)
        }
    }
}

impl Default for MascotBrain {
    fn default() -> Self {
        Self::new()
    }
}
