//! The force-and-integrate substep.
//!
//! Runs the chain through one iteration of gravity, segment constraints,
//! damping, and integration. The caller loops this a fixed number of times
//! per frame; more substeps let the one-sided spring constraints behave
//! stiffly without exploding.

use glam::Vec2;

use crate::chain::Chain;
use crate::config::RopeConfig;

/// Advance the chain by one substep.
///
/// `drag` hard-overrides the head position after integration, modeling the
/// user's hand; `sway` is the idle horizontal force for this frame (zero
/// while dragging or after the unveil).
pub(crate) fn substep(chain: &mut Chain, config: &RopeConfig, drag: Option<Vec2>, sway: f32) {
    let rest = chain.rest_length();
    let nodes = chain.nodes_mut();
    let head = nodes.len() - 1;

    // Gravity. The head carries the pendant, so it falls harder.
    for (i, node) in nodes.iter_mut().enumerate().skip(1) {
        let weight = if i == head { config.head_weight } else { 1.0 };
        node.velocity.y += config.gravity * weight;
    }

    // Segment constraints, one-sided: only stretched segments pull back.
    // The anchor never receives the opposing share.
    for i in 1..nodes.len() {
        let delta = nodes[i].position - nodes[i - 1].position;
        let length = delta.length();
        if length > rest && length > f32::EPSILON {
            let pull = delta / length * ((length - rest) * config.stiffness);
            nodes[i].velocity -= pull;
            if i > 1 {
                nodes[i - 1].velocity += pull;
            }
        }
    }

    // Damp, then integrate with a unit timestep.
    for node in nodes.iter_mut().skip(1) {
        node.velocity *= config.damping;
        node.position += node.velocity;
    }

    match drag {
        Some(point) => {
            // The solver must not fight the user's hand.
            nodes[head].position = point;
            nodes[head].velocity = Vec2::ZERO;
        }
        None => nodes[head].velocity.x += sway,
    }

    chain.pin_anchor();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_config() -> RopeConfig {
        RopeConfig {
            gravity: 0.0,
            sway_amplitude: 0.0,
            ..RopeConfig::default()
        }
    }

    #[test]
    fn at_rest_chain_stays_at_rest() {
        let config = quiet_config();
        let mut chain = Chain::vertical(6, 300.0);
        let before = chain.nodes().to_vec();
        for _ in 0..100 {
            substep(&mut chain, &config, None, 0.0);
        }
        for (a, b) in before.iter().zip(chain.nodes()) {
            assert!((a.position - b.position).length() < 1e-4);
        }
    }

    #[test]
    fn stretched_segment_contracts() {
        let config = quiet_config();
        let mut chain = Chain::vertical(3, 100.0);
        let drag = Vec2::new(0.0, 180.0);
        for _ in 0..200 {
            substep(&mut chain, &config, Some(drag), 0.0);
        }
        // Middle node gets dragged down toward an even split of the stretch.
        let mid = chain.nodes()[1].position.y;
        assert!(mid > 60.0, "middle node never followed the stretch: {mid}");
    }

    #[test]
    fn anchor_is_repinned_every_substep() {
        let config = RopeConfig::default();
        let mut chain = Chain::vertical(4, 150.0);
        for _ in 0..50 {
            substep(&mut chain, &config, None, 0.3);
            assert_eq!(chain.anchor().position, Vec2::ZERO);
            assert_eq!(chain.anchor().velocity, Vec2::ZERO);
        }
    }
}
