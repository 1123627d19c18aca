//! Tuning constants for the rope simulator.
//!
//! All defaults are empirical: the combination of stiffness, damping, and
//! substep count was tuned for a chain that stays taut under gravity without
//! oscillating. Substeps use a unit timestep, so the substep count is the
//! only stability/speed knob; none of these values are normalized to
//! wall-clock time.

/// Simulation constants for one rope instance.
///
/// Set once at construction and treated as immutable while the simulation
/// runs. Lengths derived from the viewport (rest length, travel window) are
/// recomputed on resize; everything here stays fixed.
#[derive(Debug, Clone, Copy)]
pub struct RopeConfig {
    /// Number of point masses including the anchor.
    pub node_count: usize,
    /// Total rope rest length as a fraction of viewport height.
    pub length_fraction: f32,
    /// Downward velocity added to every free node each substep.
    pub gravity: f32,
    /// Gravity multiplier for the head node, simulating the pendant's mass.
    pub head_weight: f32,
    /// Proportional correction applied to over-long segments.
    pub stiffness: f32,
    /// Velocity multiplier applied to every free node each substep.
    pub damping: f32,
    /// Force-and-integrate iterations per frame.
    pub substeps: u32,
    /// Peak horizontal idle force on the head, per substep.
    pub sway_amplitude: f32,
    /// Idle sway angular frequency in radians per second of elapsed time.
    pub sway_frequency: f32,
    /// Head depth where pull progress starts, as a fraction of viewport height.
    pub travel_start_fraction: f32,
    /// Head depth where pull progress completes, as a fraction of viewport height.
    pub travel_end_fraction: f32,
    /// Pointer travel below which a press-release counts as a tap.
    pub tap_slop: f32,
    /// Whether a tap on the pendant fires the unveil without any pull.
    pub tap_triggers: bool,
}

impl Default for RopeConfig {
    fn default() -> Self {
        Self {
            node_count: 20,
            length_fraction: 0.4,
            gravity: 0.02,
            head_weight: 2.5,
            stiffness: 0.2,
            damping: 0.9,
            substeps: 40,
            sway_amplitude: 0.012,
            sway_frequency: 1.6,
            travel_start_fraction: 0.4,
            travel_end_fraction: 0.75,
            tap_slop: 5.0,
            tap_triggers: true,
        }
    }
}

impl RopeConfig {
    /// Rest length of one segment for the given viewport height.
    pub fn rest_length(&self, viewport_height: f32) -> f32 {
        self.total_length(viewport_height) / (self.node_count.max(2) - 1) as f32
    }

    /// Total rope rest length for the given viewport height.
    pub fn total_length(&self, viewport_height: f32) -> f32 {
        viewport_height * self.length_fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_length_divides_total_across_segments() {
        let config = RopeConfig {
            node_count: 21,
            length_fraction: 0.5,
            ..RopeConfig::default()
        };
        assert_eq!(config.total_length(1000.0), 500.0);
        assert_eq!(config.rest_length(1000.0), 25.0);
    }
}
