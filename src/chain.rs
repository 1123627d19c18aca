//! Node storage for the hanging chain.
//!
//! A [`Chain`] is a fixed-length run of point masses connected head to tail.
//! Node 0 is the anchor: it represents the mount point at the top of the
//! viewport and is re-pinned to the origin after every solver substep.
//! Coordinates are anchor-relative with `+y` pointing down the screen, so the
//! chain hangs toward positive `y`.

use glam::Vec2;

/// One point mass in the rope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainNode {
    /// Position relative to the anchor, `+y` downward.
    pub position: Vec2,
    /// Velocity in the same space, in units per substep.
    pub velocity: Vec2,
}

impl ChainNode {
    /// A resting node at `position`.
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
        }
    }
}

/// The full run of nodes plus the rest length shared by every segment.
///
/// Allocated once at construction and mutated in place every frame; the only
/// reallocation happens through [`Chain::reset`] on a viewport resize.
#[derive(Debug, Clone)]
pub struct Chain {
    nodes: Vec<ChainNode>,
    rest_length: f32,
}

impl Chain {
    /// Lay the chain out along a vertical line below the anchor, already at
    /// rest: node `i` sits at `(0, i * rest_length)` with zero velocity.
    ///
    /// `node_count` is clamped to at least 2 (an anchor and a head).
    pub fn vertical(node_count: usize, total_length: f32) -> Self {
        let node_count = node_count.max(2);
        let rest_length = total_length / (node_count - 1) as f32;
        let nodes = (0..node_count)
            .map(|i| ChainNode::at(Vec2::new(0.0, i as f32 * rest_length)))
            .collect();
        Self { nodes, rest_length }
    }

    /// Discard all node state and re-lay the chain for a new total length.
    pub fn reset(&mut self, node_count: usize, total_length: f32) {
        *self = Self::vertical(node_count, total_length);
    }

    /// Target distance between adjacent nodes.
    #[inline]
    pub fn rest_length(&self) -> f32 {
        self.rest_length
    }

    /// Number of nodes, anchor included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; the constructor guarantees at least two nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes, anchor first, head last.
    #[inline]
    pub fn nodes(&self) -> &[ChainNode] {
        &self.nodes
    }

    #[inline]
    pub(crate) fn nodes_mut(&mut self) -> &mut [ChainNode] {
        &mut self.nodes
    }

    /// The free end carrying the pendant.
    #[inline]
    pub fn head(&self) -> ChainNode {
        self.nodes[self.nodes.len() - 1]
    }

    /// The immovable mount node.
    #[inline]
    pub fn anchor(&self) -> ChainNode {
        self.nodes[0]
    }

    /// Force the anchor back to the origin with zero velocity.
    pub(crate) fn pin_anchor(&mut self) {
        self.nodes[0] = ChainNode::at(Vec2::ZERO);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_layout_is_at_rest() {
        let chain = Chain::vertical(5, 200.0);
        assert_eq!(chain.len(), 5);
        assert_eq!(chain.rest_length(), 50.0);
        for (i, pair) in chain.nodes().windows(2).enumerate() {
            let gap = (pair[1].position - pair[0].position).length();
            assert!(
                (gap - 50.0).abs() < 1e-5,
                "segment {} has length {}",
                i,
                gap
            );
        }
        assert_eq!(chain.anchor().position, Vec2::ZERO);
        assert_eq!(chain.head().position, Vec2::new(0.0, 200.0));
    }

    #[test]
    fn node_count_clamps_to_two() {
        let chain = Chain::vertical(0, 100.0);
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.rest_length(), 100.0);
    }

    #[test]
    fn pin_anchor_clears_drift() {
        let mut chain = Chain::vertical(3, 100.0);
        chain.nodes_mut()[0].position = Vec2::new(4.0, -2.0);
        chain.nodes_mut()[0].velocity = Vec2::new(1.0, 1.0);
        chain.pin_anchor();
        assert_eq!(chain.anchor().position, Vec2::ZERO);
        assert_eq!(chain.anchor().velocity, Vec2::ZERO);
    }
}
