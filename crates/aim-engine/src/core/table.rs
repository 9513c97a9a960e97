//! Fixed table geometry: pockets, rails and the clamping rules balls and
//! the rail marker obey.

use glam::DVec2;

use crate::api::config::TableConfig;
use crate::core::vector::Point;

/// Pocket identifiers in their fixed hit-test order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PocketId {
    TopLeft,
    TopMiddle,
    TopRight,
    BottomLeft,
    BottomMiddle,
    BottomRight,
}

impl PocketId {
    /// All pockets, in hit-test order.
    pub const ALL: [PocketId; 6] = [
        PocketId::TopLeft,
        PocketId::TopMiddle,
        PocketId::TopRight,
        PocketId::BottomLeft,
        PocketId::BottomMiddle,
        PocketId::BottomRight,
    ];

    pub fn index(self) -> usize {
        match self {
            PocketId::TopLeft => 0,
            PocketId::TopMiddle => 1,
            PocketId::TopRight => 2,
            PocketId::BottomLeft => 3,
            PocketId::BottomMiddle => 4,
            PocketId::BottomRight => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Short label ("TL", "BM", ...).
    pub fn label(self) -> &'static str {
        match self {
            PocketId::TopLeft => "TL",
            PocketId::TopMiddle => "TM",
            PocketId::TopRight => "TR",
            PocketId::BottomLeft => "BL",
            PocketId::BottomMiddle => "BM",
            PocketId::BottomRight => "BR",
        }
    }
}

/// A pocket and its fixed center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pocket {
    pub id: PocketId,
    pub pos: Point,
}

/// The four rails. Declaration order is the tie-break order for nearest-rail lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub fn index(self) -> usize {
        match self {
            Edge::Top => 0,
            Edge::Bottom => 1,
            Edge::Left => 2,
            Edge::Right => 3,
        }
    }

    /// Unit normal used for cushion reflection.
    /// Top and bottom point into the table; the mismatch angle depends on these exact signs.
    pub fn normal(self) -> Point {
        match self {
            Edge::Top => DVec2::new(0.0, 1.0),
            Edge::Bottom => DVec2::new(0.0, -1.0),
            Edge::Left => DVec2::new(1.0, 0.0),
            Edge::Right => DVec2::new(-1.0, 0.0),
        }
    }
}

/// A point snapped onto a rail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RailPoint {
    pub pos: Point,
    pub edge: Edge,
}

/// Table dimensions plus the pocket layout derived from them once.
#[derive(Debug, Clone)]
pub struct Table {
    config: TableConfig,
    pockets: [Pocket; 6],
}

impl Table {
    pub fn new(config: TableConfig) -> Self {
        let w = config.width;
        let h = config.height;
        let at = |id: PocketId, x: f64, y: f64| Pocket { id, pos: DVec2::new(x, y) };
        let pockets = [
            at(PocketId::TopLeft, 0.0, 0.0),
            at(PocketId::TopMiddle, w / 2.0, 0.0),
            at(PocketId::TopRight, w, 0.0),
            at(PocketId::BottomLeft, 0.0, h),
            at(PocketId::BottomMiddle, w / 2.0, h),
            at(PocketId::BottomRight, w, h),
        ];
        Self { config, pockets }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn ball_radius(&self) -> f64 {
        self.config.ball_radius
    }

    pub fn pockets(&self) -> &[Pocket; 6] {
        &self.pockets
    }

    pub fn pocket(&self, id: PocketId) -> Point {
        self.pockets[id.index()].pos
    }

    /// Keep a ball center far enough from every rail that the whole ball stays on the cloth.
    /// On a table narrower than a ball the far rail wins instead of panicking.
    pub fn clamp_to_interior(&self, p: Point) -> Point {
        let r = self.config.ball_radius;
        DVec2::new(
            p.x.max(r).min(self.config.width - r),
            p.y.max(r).min(self.config.height - r),
        )
    }

    /// Clamp to the outer bounding box `[0, W] x [0, H]` without snapping to a rail.
    pub fn clamp_to_bounds(&self, p: Point) -> Point {
        DVec2::new(
            p.x.clamp(0.0, self.config.width),
            p.y.clamp(0.0, self.config.height),
        )
    }

    /// Project `p` onto whichever rail is closest. Ties go to the earlier rail in
    /// top, bottom, left, right order.
    pub fn clamp_to_nearest_rail(&self, p: Point) -> RailPoint {
        let w = self.config.width;
        let h = self.config.height;
        let candidates = [
            (Edge::Top, p.y.abs()),
            (Edge::Bottom, (h - p.y).abs()),
            (Edge::Left, p.x.abs()),
            (Edge::Right, (w - p.x).abs()),
        ];

        let mut best = candidates[0];
        for c in &candidates[1..] {
            if c.1 < best.1 {
                best = *c;
            }
        }

        let edge = best.0;
        let pos = match edge {
            Edge::Top => DVec2::new(p.x.clamp(0.0, w), 0.0),
            Edge::Bottom => DVec2::new(p.x.clamp(0.0, w), h),
            Edge::Left => DVec2::new(0.0, p.y.clamp(0.0, h)),
            Edge::Right => DVec2::new(w, p.y.clamp(0.0, h)),
        };
        RailPoint { pos, edge }
    }

    /// Outward-normal convention for `edge`, see [`Edge::normal`].
    pub fn edge_normal(&self, edge: Edge) -> Point {
        edge.normal()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::default()
    }

    #[test]
    fn pockets_derived_from_dimensions() {
        let t = table();
        assert_eq!(t.pocket(PocketId::TopLeft), DVec2::new(0.0, 0.0));
        assert_eq!(t.pocket(PocketId::TopMiddle), DVec2::new(500.0, 0.0));
        assert_eq!(t.pocket(PocketId::BottomMiddle), DVec2::new(500.0, 500.0));
        assert_eq!(t.pocket(PocketId::BottomRight), DVec2::new(1000.0, 500.0));
        for (i, p) in t.pockets().iter().enumerate() {
            assert_eq!(p.id.index(), i);
            assert_eq!(PocketId::from_index(i), Some(p.id));
        }
    }

    #[test]
    fn pocket_labels_follow_index_order() {
        let labels: Vec<_> = (0..6)
            .filter_map(PocketId::from_index)
            .map(PocketId::label)
            .collect();
        assert_eq!(labels, ["TL", "TM", "TR", "BL", "BM", "BR"]);
        assert_eq!(PocketId::from_index(6), None);
    }

    #[test]
    fn clamp_to_interior_bounds_and_idempotence() {
        let t = table();
        let samples = [
            DVec2::new(-50.0, -50.0),
            DVec2::new(2000.0, 250.0),
            DVec2::new(500.0, 9999.0),
            DVec2::new(5.0, 495.0),
            DVec2::new(300.0, 200.0),
        ];
        for p in samples {
            let c = t.clamp_to_interior(p);
            assert!(c.x >= 12.0 && c.x <= 988.0, "{c:?}");
            assert!(c.y >= 12.0 && c.y <= 488.0, "{c:?}");
            assert_eq!(t.clamp_to_interior(c), c);
        }
        let inside = DVec2::new(300.0, 200.0);
        assert_eq!(t.clamp_to_interior(inside), inside);
    }

    #[test]
    fn nearest_rail_for_outside_points() {
        let t = table();
        let cases = [
            (DVec2::new(400.0, -30.0), Edge::Top, DVec2::new(400.0, 0.0)),
            (DVec2::new(400.0, 530.0), Edge::Bottom, DVec2::new(400.0, 500.0)),
            (DVec2::new(-20.0, 100.0), Edge::Left, DVec2::new(0.0, 100.0)),
            (DVec2::new(1040.0, 300.0), Edge::Right, DVec2::new(1000.0, 300.0)),
            (DVec2::new(-5.0, 200.0), Edge::Left, DVec2::new(0.0, 200.0)),
            (DVec2::new(1200.0, -10.0), Edge::Top, DVec2::new(1000.0, 0.0)),
        ];
        for (p, edge, pos) in cases {
            let rp = t.clamp_to_nearest_rail(p);
            assert_eq!(rp.edge, edge, "{p:?}");
            assert_eq!(rp.pos, pos, "{p:?}");
            assert_eq!(t.clamp_to_nearest_rail(rp.pos), rp);
        }
    }

    #[test]
    fn outside_corner_keeps_position_but_edge_can_flip() {
        let t = table();
        let first = t.clamp_to_nearest_rail(DVec2::new(-10.0, 600.0));
        assert_eq!(first.edge, Edge::Left);
        assert_eq!(first.pos, DVec2::new(0.0, 500.0));

        // The corner lies on bottom and left at once; bottom is checked first.
        let second = t.clamp_to_nearest_rail(first.pos);
        assert_eq!(second.pos, first.pos);
        assert_eq!(second.edge, Edge::Bottom);
        assert_eq!(t.clamp_to_nearest_rail(second.pos), second);
    }

    #[test]
    fn narrow_table_interior_clamp_does_not_panic() {
        let t = Table::new(TableConfig {
            width: 20.0,
            ..TableConfig::default()
        });
        let p = t.clamp_to_interior(DVec2::new(250.0, 350.0));
        assert_eq!(p, DVec2::new(8.0, 350.0));
    }

    #[test]
    fn nearest_rail_tie_prefers_check_order() {
        let t = table();
        // Equidistant from top and left.
        let rp = t.clamp_to_nearest_rail(DVec2::new(20.0, 20.0));
        assert_eq!(rp.edge, Edge::Top);
        // Equidistant from bottom and right.
        let rp = t.clamp_to_nearest_rail(DVec2::new(980.0, 480.0));
        assert_eq!(rp.edge, Edge::Bottom);
        // Corner sits on top and left at once.
        let rp = t.clamp_to_nearest_rail(DVec2::new(0.0, 0.0));
        assert_eq!(rp.edge, Edge::Top);
    }

    #[test]
    fn inside_points_snap_to_closest_rail() {
        let t = table();
        let rp = t.clamp_to_nearest_rail(DVec2::new(970.0, 250.0));
        assert_eq!(rp.edge, Edge::Right);
        assert_eq!(rp.pos, DVec2::new(1000.0, 250.0));
    }

    #[test]
    fn edge_normals_follow_fixed_convention() {
        let t = table();
        assert_eq!(t.edge_normal(Edge::Top), DVec2::new(0.0, 1.0));
        assert_eq!(t.edge_normal(Edge::Bottom), DVec2::new(0.0, -1.0));
        assert_eq!(t.edge_normal(Edge::Left), DVec2::new(1.0, 0.0));
        assert_eq!(t.edge_normal(Edge::Right), DVec2::new(-1.0, 0.0));
    }

    #[test]
    fn clamp_to_bounds_does_not_snap() {
        let t = table();
        assert_eq!(t.clamp_to_bounds(DVec2::new(300.0, 200.0)), DVec2::new(300.0, 200.0));
        assert_eq!(t.clamp_to_bounds(DVec2::new(-3.0, 600.0)), DVec2::new(0.0, 500.0));
    }
}
