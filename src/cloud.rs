//! Tag-cloud layout projector.
//!
//! Computes, for every labeled item, three alternative 2D placements the
//! consumer can morph between on a UI toggle:
//!
//! - **globe** — the item's spot on a rotating Fibonacci sphere, projected to
//!   the screen with simple perspective division;
//! - **grid** — a flat arrangement in columns grouped by category;
//! - **disc** — a phyllotaxis spiral (sunflower packing) fallback that needs
//!   no rotation to read well.
//!
//! Everything here is a pure function of its arguments; the rotation scalar
//! is advanced by the consumer's animation loop (see [`ROTATION_STEP`]), not
//! inside the projector.

use glam::Vec2;

/// Sphere radius in pixels for globe mode.
pub const GLOBE_RADIUS: f32 = 120.0;
/// Perspective distance for the 3D-to-2D projection.
pub const PERSPECTIVE: f32 = 800.0;
/// Disc radius in pixels for disc mode.
pub const DISC_RADIUS: f32 = 140.0;
/// The golden angle, in degrees, between consecutive disc items.
pub const DISC_ANGLE_DEG: f32 = 137.5;
/// Rotation advance per frame used by consumers while in globe mode.
pub const ROTATION_STEP: f32 = 0.003;

/// A labeled item and the category group it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagItem {
    pub label: String,
    pub group: usize,
}

impl TagItem {
    pub fn new(label: impl Into<String>, group: usize) -> Self {
        Self {
            label: label.into(),
            group,
        }
    }
}

/// Which grid geometry to use; layouts differ only in constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Desktop,
    Mobile,
}

/// The three candidate positions for one item, plus globe depth cues.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Screen offset in globe mode, relative to the cloud center.
    pub globe: Vec2,
    /// Screen offset in grid mode.
    pub grid: Vec2,
    /// Screen offset in disc mode.
    pub disc: Vec2,
    /// Perspective scale in globe mode; also sizes the item.
    pub scale: f32,
    /// Stacking order in globe mode; closer items draw on top.
    pub z_order: i32,
}

struct GridGeometry {
    col_width: f32,
    outer_offset: f32,
    row_base: f32,
    row_height: f32,
}

fn grid_geometry(device: DeviceClass) -> GridGeometry {
    match device {
        DeviceClass::Desktop => GridGeometry {
            col_width: 180.0,
            outer_offset: 40.0,
            row_base: -160.0,
            row_height: 50.0,
        },
        DeviceClass::Mobile => GridGeometry {
            col_width: 140.0,
            outer_offset: 30.0,
            row_base: -140.0,
            row_height: 44.0,
        },
    }
}

/// Compute all candidate placements for `items[index]`.
///
/// Pure and deterministic: the same arguments always produce the same
/// placement. Returns `None` only for an out-of-range index or an empty
/// list.
pub fn place(
    index: usize,
    items: &[TagItem],
    rotation: f32,
    device: DeviceClass,
) -> Option<Placement> {
    let item = items.get(index)?;
    let n = items.len() as f32;

    // Globe: Fibonacci sphere, rotated about the vertical axis, then
    // projected with perspective division.
    let phi = (-1.0 + 2.0 * index as f32 / n).acos();
    let theta = (n * std::f32::consts::PI).sqrt() * phi + rotation;
    let x3 = GLOBE_RADIUS * theta.cos() * phi.sin();
    let y3 = GLOBE_RADIUS * theta.sin() * phi.sin();
    let z3 = GLOBE_RADIUS * phi.cos();
    let scale = PERSPECTIVE / (PERSPECTIVE + z3);
    let globe = Vec2::new(x3 * scale, y3 * scale);
    let z_order = (scale * 100.0).floor() as i32;

    // Grid: columns by group, centered, outer columns nudged outward.
    let geometry = grid_geometry(device);
    let group_count = items.iter().map(|i| i.group + 1).max().unwrap_or(1);
    let center = (group_count - 1) as f32 / 2.0;
    let offset = if item.group as f32 > center {
        geometry.outer_offset
    } else {
        -geometry.outer_offset
    };
    let col_x = (item.group as f32 - center) * geometry.col_width + offset;
    let row = items[..index].iter().filter(|i| i.group == item.group).count();
    let grid = Vec2::new(col_x, geometry.row_base + row as f32 * geometry.row_height);

    // Disc: golden-angle spiral with sqrt radius for even area coverage.
    let angle = (index as f32 * DISC_ANGLE_DEG).to_radians();
    let radius = DISC_RADIUS * ((index + 1) as f32 / n).sqrt();
    let disc = Vec2::new(radius * angle.cos(), radius * angle.sin());

    Some(Placement {
        globe,
        grid,
        disc,
        scale,
        z_order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trio() -> Vec<TagItem> {
        vec![
            TagItem::new("alpha", 0),
            TagItem::new("beta", 0),
            TagItem::new("gamma", 0),
        ]
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn placement_is_deterministic() {
        let items = trio();
        let first = place(1, &items, 0.0, DeviceClass::Desktop).unwrap();
        for _ in 0..10 {
            assert_eq!(place(1, &items, 0.0, DeviceClass::Desktop).unwrap(), first);
        }
    }

    #[test]
    fn globe_matches_hand_computed_values() {
        let items = trio();
        // Item 0: phi = acos(-1) = pi, so the point sits on the near pole:
        // x and y vanish, z = -120, scale = 800 / 680.
        let p0 = place(0, &items, 0.0, DeviceClass::Desktop).unwrap();
        assert!(close(p0.globe.x, 0.0));
        assert!(close(p0.globe.y, 0.0));
        assert!(close(p0.scale, 1.176_47));
        assert_eq!(p0.z_order, 117);

        // Item 1: phi = acos(-1/3), theta = sqrt(3*pi) * phi.
        let p1 = place(1, &items, 0.0, DeviceClass::Desktop).unwrap();
        assert!(close(p1.globe.x, 108.859));
        assert!(close(p1.globe.y, -48.297));
        assert!(close(p1.scale, 1.052_63));
        assert_eq!(p1.z_order, 105);
    }

    #[test]
    fn disc_matches_hand_computed_values() {
        let items = trio();
        let p0 = place(0, &items, 0.0, DeviceClass::Desktop).unwrap();
        assert!(close(p0.disc.x, 80.829));
        assert!(close(p0.disc.y, 0.0));

        let p1 = place(1, &items, 0.0, DeviceClass::Desktop).unwrap();
        assert!(close(p1.disc.x, -84.278));
        assert!(close(p1.disc.y, 77.226));
    }

    #[test]
    fn grid_stacks_groups_into_columns() {
        let items = vec![
            TagItem::new("a", 0),
            TagItem::new("b", 1),
            TagItem::new("c", 2),
            TagItem::new("d", 3),
            TagItem::new("e", 2),
        ];
        // Four groups: columns at (g - 1.5) * 180 with a 40 px outward nudge.
        let b = place(1, &items, 0.0, DeviceClass::Desktop).unwrap();
        assert!(close(b.grid.x, -130.0));
        assert!(close(b.grid.y, -160.0));

        let c = place(2, &items, 0.0, DeviceClass::Desktop).unwrap();
        assert!(close(c.grid.x, 130.0));

        // Second item of group 2 lands one row lower.
        let e = place(4, &items, 0.0, DeviceClass::Desktop).unwrap();
        assert!(close(e.grid.x, 130.0));
        assert!(close(e.grid.y, -110.0));
    }

    #[test]
    fn mobile_grid_is_tighter() {
        let items = vec![TagItem::new("a", 0), TagItem::new("b", 1)];
        let desktop = place(0, &items, 0.0, DeviceClass::Desktop).unwrap();
        let mobile = place(0, &items, 0.0, DeviceClass::Mobile).unwrap();
        assert!(mobile.grid.x.abs() < desktop.grid.x.abs());
        // Globe and disc are device-independent.
        assert_eq!(mobile.globe, desktop.globe);
        assert_eq!(mobile.disc, desktop.disc);
    }

    #[test]
    fn rotation_spins_the_globe_only() {
        let items = trio();
        let still = place(1, &items, 0.0, DeviceClass::Desktop).unwrap();
        let spun = place(1, &items, 1.0, DeviceClass::Desktop).unwrap();
        assert_ne!(still.globe, spun.globe);
        assert_eq!(still.grid, spun.grid);
        assert_eq!(still.disc, spun.disc);
    }

    #[test]
    fn out_of_range_index_is_none() {
        assert!(place(3, &trio(), 0.0, DeviceClass::Desktop).is_none());
        assert!(place(0, &[], 0.0, DeviceClass::Desktop).is_none());
    }
}
