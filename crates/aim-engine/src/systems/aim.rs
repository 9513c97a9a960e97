//! Aim solver: derives ghost ball, cut angle and cushion rebound geometry
//! from the current entity state. Everything is recomputed from scratch on
//! each call; nothing is cached between frames.

use crate::api::session::EntityState;
use crate::api::types::AimMode;
use crate::core::table::{Edge, PocketId, Table};
use crate::core::vector::{angle_between, normalize, reflect, Point};

/// Aim toward a pocket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PocketAim {
    pub pocket_id: PocketId,
    pub pocket: Point,
    /// Where the cue ball center must be at contact.
    pub ghost_ball: Point,
    /// 0 = straight shot, 90 = the cue line is perpendicular to the pocket line.
    pub cut_angle_deg: f64,
}

/// One-rail rebound toward the object ball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CushionAim {
    /// Rail marker snapped onto its nearest rail.
    pub rail_point: Point,
    pub edge: Edge,
    /// Cue ball to rail point.
    pub incoming: Point,
    pub edge_normal: Point,
    pub reflected: Point,
    /// Rail point to object ball.
    pub to_object: Point,
    /// 0 = the ideal rebound heads straight at the object ball.
    pub mismatch_angle_deg: f64,
}

/// Derived geometry for whichever mode is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AimGeometry {
    Pocket(PocketAim),
    Cushion(CushionAim),
}

impl AimGeometry {
    pub fn mode(&self) -> AimMode {
        match self {
            AimGeometry::Pocket(_) => AimMode::AimAtPocket,
            AimGeometry::Cushion(_) => AimMode::OneCushion,
        }
    }

    pub fn as_pocket(&self) -> Option<&PocketAim> {
        match self {
            AimGeometry::Pocket(p) => Some(p),
            AimGeometry::Cushion(_) => None,
        }
    }

    pub fn as_cushion(&self) -> Option<&CushionAim> {
        match self {
            AimGeometry::Cushion(c) => Some(c),
            AimGeometry::Pocket(_) => None,
        }
    }
}

/// Ghost ball center: `2r` past the object ball, on the pocket-to-object line.
pub fn ghost_ball(object: Point, pocket: Point, ball_radius: f64) -> Point {
    object + normalize(object - pocket) * (2.0 * ball_radius)
}

/// Cut angle in degrees between the object-to-pocket line and the
/// direction the cue ball travels into the object ball.
pub fn cut_angle_deg(cue: Point, object: Point, pocket: Point) -> f64 {
    angle_between(pocket - object, object - cue).to_degrees()
}

pub fn solve_pocket(table: &Table, cue: Point, object: Point, pocket_id: PocketId) -> PocketAim {
    let pocket = table.pocket(pocket_id);
    PocketAim {
        pocket_id,
        pocket,
        ghost_ball: ghost_ball(object, pocket, table.ball_radius()),
        cut_angle_deg: cut_angle_deg(cue, object, pocket),
    }
}

pub fn solve_cushion(table: &Table, cue: Point, object: Point, rail_marker: Point) -> CushionAim {
    let rail = table.clamp_to_nearest_rail(rail_marker);
    let incoming = rail.pos - cue;
    let edge_normal = table.edge_normal(rail.edge);
    let reflected = reflect(incoming, edge_normal);
    let to_object = object - rail.pos;
    CushionAim {
        rail_point: rail.pos,
        edge: rail.edge,
        incoming,
        edge_normal,
        reflected,
        to_object,
        mismatch_angle_deg: angle_between(reflected, to_object).to_degrees(),
    }
}

/// Solve for the active mode.
pub fn compute_aim_geometry(table: &Table, state: &EntityState) -> AimGeometry {
    match state.mode {
        AimMode::AimAtPocket => AimGeometry::Pocket(solve_pocket(
            table,
            state.cue,
            state.object,
            state.selected_pocket,
        )),
        AimMode::OneCushion => AimGeometry::Cushion(solve_cushion(
            table,
            state.cue,
            state.object,
            state.rail_marker,
        )),
    }
}
