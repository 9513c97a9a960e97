/// Render frame shared with the JS renderer.
/// Must stay in sync with the TypeScript `aimFrame.ts` reader.
///
/// Layout (all values f64 / 8 bytes, in field order):
/// ```text
/// [0]      protocol version
/// [1]      mode (0 = pocket, 1 = cushion)
/// [2]      selected pocket index (0..6, TL TM TR BL BM BR)
/// [3]      drag target tag
/// [4..6]   cue
/// [6..8]   object
/// [8..10]  rail marker (raw)
/// [10..12] selected pocket position
/// [12..14] ghost ball            (pocket mode)
/// [14]     cut angle, degrees    (pocket mode)
/// [15]     edge index            (cushion mode, top/bottom/left/right)
/// [16..18] rail point            (cushion mode)
/// [18..20] incoming              (cushion mode)
/// [20..22] edge normal           (cushion mode)
/// [22..24] reflected             (cushion mode)
/// [24..26] to object             (cushion mode)
/// [26]     mismatch angle, deg.  (cushion mode)
/// [27]     padding
/// ```
/// Fields belonging to the inactive mode are written as zero.
use bytemuck::{Pod, Zeroable};

use crate::api::session::AimSession;
use crate::systems::aim::AimGeometry;

/// Protocol version written into every frame.
pub const PROTOCOL_VERSION: f64 = 1.0;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct AimFrame {
    pub version: f64,
    pub mode: f64,
    pub selected_pocket: f64,
    pub drag_target: f64,
    pub cue: [f64; 2],
    pub object: [f64; 2],
    pub rail_marker: [f64; 2],
    pub pocket: [f64; 2],
    pub ghost_ball: [f64; 2],
    pub cut_angle_deg: f64,
    pub edge: f64,
    pub rail_point: [f64; 2],
    pub incoming: [f64; 2],
    pub edge_normal: [f64; 2],
    pub reflected: [f64; 2],
    pub to_object: [f64; 2],
    pub mismatch_angle_deg: f64,
    pub _pad: f64,
}

impl AimFrame {
    /// Frame length in f64 units.
    pub const FLOATS: usize = std::mem::size_of::<AimFrame>() / 8;

    /// Snapshot the session and its freshly solved geometry.
    pub fn capture(session: &AimSession) -> Self {
        let state = session.state();
        let mut frame = AimFrame {
            version: PROTOCOL_VERSION,
            mode: state.mode.code() as f64,
            selected_pocket: state.selected_pocket.index() as f64,
            drag_target: session.drag_target().tag() as f64,
            cue: state.cue.to_array(),
            object: state.object.to_array(),
            rail_marker: state.rail_marker.to_array(),
            pocket: session.table().pocket(state.selected_pocket).to_array(),
            ..AimFrame::zeroed()
        };

        match session.compute_aim_geometry() {
            AimGeometry::Pocket(aim) => {
                frame.ghost_ball = aim.ghost_ball.to_array();
                frame.cut_angle_deg = aim.cut_angle_deg;
            }
            AimGeometry::Cushion(aim) => {
                frame.edge = aim.edge.index() as f64;
                frame.rail_point = aim.rail_point.to_array();
                frame.incoming = aim.incoming.to_array();
                frame.edge_normal = aim.edge_normal.to_array();
                frame.reflected = aim.reflected.to_array();
                frame.to_object = aim.to_object.to_array();
                frame.mismatch_angle_deg = aim.mismatch_angle_deg;
            }
        }
        frame
    }

    pub fn as_floats(&self) -> &[f64] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }

    pub fn as_ptr(&self) -> *const f64 {
        self.as_floats().as_ptr()
    }
}
