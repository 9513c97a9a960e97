//! Pointer drag state machine.
//!
//! `Idle -> PointerDown -> Dragging(target) -> PointerUp -> Idle`. The
//! controller hit-tests on pointer-down, then moves the grabbed entity on
//! every pointer-move until the gesture ends.

use crate::api::config::InteractionConfig;
use crate::api::session::EntityState;
use crate::api::types::PointerKind;
use crate::core::table::{PocketId, Table};
use crate::core::vector::Point;

/// What the current gesture is holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragTarget {
    #[default]
    None,
    Cue,
    Object,
    RailMarker,
    Pocket(PocketId),
}

impl DragTarget {
    /// Numeric tag for the render frame: 0 none, 1 cue, 2 object, 3 rail marker, 4.. pockets.
    pub fn tag(self) -> u32 {
        match self {
            DragTarget::None => 0,
            DragTarget::Cue => 1,
            DragTarget::Object => 2,
            DragTarget::RailMarker => 3,
            DragTarget::Pocket(id) => 4 + id.index() as u32,
        }
    }
}

/// Per-gesture drag state.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    target: DragTarget,
    pointer: PointerKind,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> DragTarget {
        self.target
    }

    pub fn is_dragging(&self) -> bool {
        self.target != DragTarget::None
    }

    /// Pick a target under `p`. Pockets win over balls, balls over the rail marker.
    pub fn on_pointer_down(
        &mut self,
        p: Point,
        pointer: PointerKind,
        table: &Table,
        config: &InteractionConfig,
        state: &mut EntityState,
    ) -> DragTarget {
        self.pointer = pointer;

        let pocket_radius = pocket_hit_radius(config, pointer);
        let ball_radius = table.ball_radius()
            * match pointer {
                PointerKind::Fine => config.fine_ball_scale,
                PointerKind::Coarse => config.coarse_ball_scale,
            };

        self.target = if let Some(id) = hit_pocket(table, p, pocket_radius) {
            state.selected_pocket = id;
            log::debug!("pocket {} selected", id.label());
            DragTarget::Pocket(id)
        } else if p.distance(state.cue) <= ball_radius {
            DragTarget::Cue
        } else if p.distance(state.object) <= ball_radius {
            DragTarget::Object
        } else if hit_square(
            table.clamp_to_nearest_rail(state.rail_marker).pos,
            p,
            config.rail_marker_half_size,
        ) {
            DragTarget::RailMarker
        } else {
            DragTarget::None
        };

        if self.is_dragging() {
            log::debug!("drag start: {:?}", self.target);
        }
        self.target
    }

    /// Move whatever is held to `p`, applying that entity's clamp rule.
    /// Does nothing when no gesture is active.
    pub fn on_pointer_move(
        &mut self,
        p: Point,
        table: &Table,
        config: &InteractionConfig,
        state: &mut EntityState,
    ) {
        match self.target {
            DragTarget::None => {}
            DragTarget::Cue => state.cue = table.clamp_to_interior(p),
            DragTarget::Object => state.object = table.clamp_to_interior(p),
            // Rail snapping happens at solve time; only bound to the table box here.
            DragTarget::RailMarker => state.rail_marker = table.clamp_to_bounds(p),
            DragTarget::Pocket(_) => {
                let radius = pocket_hit_radius(config, self.pointer) * config.pocket_drag_scale;
                if let Some(id) = hit_pocket(table, p, radius) {
                    if id != state.selected_pocket {
                        log::debug!("pocket {} selected", id.label());
                    }
                    state.selected_pocket = id;
                    self.target = DragTarget::Pocket(id);
                }
            }
        }
    }

    /// End the gesture, wherever the pointer is.
    pub fn on_pointer_up(&mut self) {
        if self.is_dragging() {
            log::debug!("drag end: {:?}", self.target);
        }
        self.target = DragTarget::None;
    }
}

fn pocket_hit_radius(config: &InteractionConfig, pointer: PointerKind) -> f64 {
    match pointer {
        PointerKind::Fine => config.pocket_hit_radius,
        PointerKind::Coarse => config.pocket_hit_radius * config.coarse_pocket_scale,
    }
}

/// First pocket in list order whose hit circle contains `p`.
fn hit_pocket(table: &Table, p: Point, radius: f64) -> Option<PocketId> {
    table
        .pockets()
        .iter()
        .find(|pocket| p.distance(pocket.pos) <= radius)
        .map(|pocket| pocket.id)
}

fn hit_square(center: Point, p: Point, half_size: f64) -> bool {
    (p.x - center.x).abs() <= half_size && (p.y - center.y).abs() <= half_size
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    struct Fixture {
        table: Table,
        config: InteractionConfig,
        state: EntityState,
        drag: DragController,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                table: Table::default(),
                config: InteractionConfig::default(),
                state: EntityState::default(),
                drag: DragController::new(),
            }
        }

        fn down(&mut self, x: f64, y: f64, pointer: PointerKind) -> DragTarget {
            self.drag.on_pointer_down(
                DVec2::new(x, y),
                pointer,
                &self.table,
                &self.config,
                &mut self.state,
            )
        }

        fn moved(&mut self, x: f64, y: f64) {
            self.drag
                .on_pointer_move(DVec2::new(x, y), &self.table, &self.config, &mut self.state);
        }
    }

    #[test]
    fn drag_object_outside_interior_is_clamped() {
        let mut f = Fixture::new();
        let obj = f.state.object;
        assert_eq!(f.down(obj.x + 5.0, obj.y - 5.0, PointerKind::Fine), DragTarget::Object);

        let move_to = DVec2::new(1100.0, -40.0);
        f.moved(move_to.x, move_to.y);
        f.drag.on_pointer_up();
        assert_eq!(f.state.object, f.table.clamp_to_interior(move_to));
        assert_eq!(f.state.object, DVec2::new(988.0, 12.0));

        // Gesture over: further moves are ignored.
        f.moved(300.0, 300.0);
        assert_eq!(f.state.object, DVec2::new(988.0, 12.0));
        assert_eq!(f.drag.target(), DragTarget::None);
    }

    #[test]
    fn cue_wins_over_object_when_overlapping() {
        let mut f = Fixture::new();
        f.state.cue = DVec2::new(400.0, 250.0);
        f.state.object = DVec2::new(410.0, 250.0);
        assert_eq!(f.down(405.0, 250.0, PointerKind::Fine), DragTarget::Cue);
    }

    #[test]
    fn pockets_win_over_balls() {
        let mut f = Fixture::new();
        f.state.cue = DVec2::new(12.0, 12.0);
        assert_eq!(
            f.down(10.0, 10.0, PointerKind::Fine),
            DragTarget::Pocket(PocketId::TopLeft)
        );
        assert_eq!(f.state.selected_pocket, PocketId::TopLeft);
    }

    #[test]
    fn touch_enlarges_ball_hit_circle() {
        let mut f = Fixture::new();
        let cue = f.state.cue;
        // 24 away: outside 12 × 1.5 = 18, inside 12 × 2.5 = 30.
        assert_eq!(f.down(cue.x + 24.0, cue.y, PointerKind::Fine), DragTarget::None);
        f.drag.on_pointer_up();
        assert_eq!(f.down(cue.x + 24.0, cue.y, PointerKind::Coarse), DragTarget::Cue);
    }

    #[test]
    fn touch_enlarges_pocket_hit_radius() {
        let mut f = Fixture::new();
        // 40 from the top middle pocket: outside 34, inside 51.
        assert_eq!(f.down(500.0, 40.0, PointerKind::Fine), DragTarget::None);
        assert_eq!(
            f.down(500.0, 40.0, PointerKind::Coarse),
            DragTarget::Pocket(PocketId::TopMiddle)
        );
    }

    #[test]
    fn rail_marker_hit_uses_snapped_position() {
        let mut f = Fixture::new();
        // Raw marker is inside the table but renders on the left rail.
        f.state.rail_marker = DVec2::new(5.0, 250.0);
        assert_eq!(f.down(10.0, 260.0, PointerKind::Fine), DragTarget::RailMarker);
        f.drag.on_pointer_up();
        assert_eq!(f.down(30.0, 250.0, PointerKind::Fine), DragTarget::None);
    }

    #[test]
    fn rail_marker_drag_only_clamps_to_bounds() {
        let mut f = Fixture::new();
        let marker = f.state.rail_marker;
        assert_eq!(f.down(marker.x, marker.y, PointerKind::Fine), DragTarget::RailMarker);

        f.moved(300.0, 120.0);
        assert_eq!(f.state.rail_marker, DVec2::new(300.0, 120.0));

        f.moved(-50.0, 700.0);
        assert_eq!(f.state.rail_marker, DVec2::new(0.0, 500.0));
    }

    #[test]
    fn pocket_drag_switches_and_sticks() {
        let mut f = Fixture::new();
        assert_eq!(
            f.down(995.0, 495.0, PointerKind::Fine),
            DragTarget::Pocket(PocketId::BottomRight)
        );

        // Between pockets: selection sticks.
        f.moved(750.0, 490.0);
        assert_eq!(f.state.selected_pocket, PocketId::BottomRight);

        // 40 from the bottom middle pocket: only within the widened drag radius (42.5).
        f.moved(540.0, 500.0);
        assert_eq!(f.state.selected_pocket, PocketId::BottomMiddle);
        assert_eq!(f.drag.target(), DragTarget::Pocket(PocketId::BottomMiddle));

        f.drag.on_pointer_up();
        f.moved(0.0, 0.0);
        assert_eq!(f.state.selected_pocket, PocketId::BottomMiddle);
    }

    #[test]
    fn empty_space_starts_nothing() {
        let mut f = Fixture::new();
        let before = f.state.clone();
        assert_eq!(f.down(700.0, 400.0, PointerKind::Fine), DragTarget::None);
        f.moved(100.0, 100.0);
        assert_eq!(f.state, before);
    }

    #[test]
    fn target_tags_are_distinct() {
        let mut tags: Vec<u32> = vec![
            DragTarget::None.tag(),
            DragTarget::Cue.tag(),
            DragTarget::Object.tag(),
            DragTarget::RailMarker.tag(),
        ];
        tags.extend(PocketId::ALL.iter().map(|id| DragTarget::Pocket(*id).tag()));
        let mut sorted = tags.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), tags.len());
    }
}
