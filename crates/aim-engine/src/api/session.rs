use glam::DVec2;

use crate::api::config::{InteractionConfig, TableConfig};
use crate::api::types::{AimMode, PointerKind};
use crate::core::table::{PocketId, Table};
use crate::core::vector::Point;
use crate::input::drag::{DragController, DragTarget};
use crate::input::queue::{InputEvent, InputQueue};
use crate::systems::aim::{self, AimGeometry};

const DEFAULT_CUE: DVec2 = DVec2::new(250.0, 350.0);
const DEFAULT_OBJECT: DVec2 = DVec2::new(600.0, 200.0);
const DEFAULT_RAIL_MARKER: DVec2 = DVec2::new(700.0, 0.0);

/// Positions and selections the user edits.
/// `cue` and `object` always stay inside the cushions; `rail_marker` is only
/// bounded to the table box and gets snapped to a rail when solved.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityState {
    pub cue: Point,
    pub object: Point,
    pub selected_pocket: PocketId,
    pub rail_marker: Point,
    pub mode: AimMode,
}

impl Default for EntityState {
    fn default() -> Self {
        Self {
            cue: DEFAULT_CUE,
            object: DEFAULT_OBJECT,
            selected_pocket: PocketId::BottomRight,
            rail_marker: DEFAULT_RAIL_MARKER,
            mode: AimMode::AimAtPocket,
        }
    }
}

/// One user's aiming session: table, entity state and the active gesture.
pub struct AimSession {
    table: Table,
    interaction: InteractionConfig,
    state: EntityState,
    drag: DragController,
}

impl AimSession {
    pub fn new() -> Self {
        Self::with_config(TableConfig::default(), InteractionConfig::default())
    }

    /// A table that fails [`TableConfig::validate`] is replaced by the default table.
    pub fn with_config(table: TableConfig, interaction: InteractionConfig) -> Self {
        let table = match table.validate() {
            Ok(()) => Table::new(table),
            Err(reason) => {
                log::warn!("invalid table config ({}), using defaults", reason);
                Table::default()
            }
        };
        let mut state = EntityState::default();
        // Keep the invariant even when a custom table is smaller than the defaults.
        state.cue = table.clamp_to_interior(state.cue);
        state.object = table.clamp_to_interior(state.object);
        state.rail_marker = table.clamp_to_bounds(state.rail_marker);
        Self {
            table,
            interaction,
            state,
            drag: DragController::new(),
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn state(&self) -> &EntityState {
        &self.state
    }

    pub fn drag_target(&self) -> DragTarget {
        self.drag.target()
    }

    pub fn handle_pointer_down(&mut self, local: Point, pointer: PointerKind) -> DragTarget {
        self.drag.on_pointer_down(
            local,
            pointer,
            &self.table,
            &self.interaction,
            &mut self.state,
        )
    }

    pub fn handle_pointer_move(&mut self, local: Point) {
        self.drag
            .on_pointer_move(local, &self.table, &self.interaction, &mut self.state);
    }

    pub fn handle_pointer_up(&mut self) {
        self.drag.on_pointer_up();
    }

    /// Put the balls and rail marker back where they started. Pocket selection,
    /// mode and any active gesture are left alone.
    pub fn reset(&mut self) {
        let defaults = EntityState::default();
        self.state.cue = self.table.clamp_to_interior(defaults.cue);
        self.state.object = self.table.clamp_to_interior(defaults.object);
        self.state.rail_marker = self.table.clamp_to_bounds(defaults.rail_marker);
        log::info!("aim session reset");
    }

    pub fn set_mode(&mut self, mode: AimMode) {
        if self.state.mode != mode {
            log::info!("aim mode: {:?}", mode);
        }
        self.state.mode = mode;
    }

    /// Derived geometry for the current state. Recomputed on every call.
    pub fn compute_aim_geometry(&self) -> AimGeometry {
        aim::compute_aim_geometry(&self.table, &self.state)
    }

    /// Apply one event to completion.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { at, pointer } => {
                self.handle_pointer_down(at, pointer);
            }
            InputEvent::PointerMove { at } => self.handle_pointer_move(at),
            InputEvent::PointerUp | InputEvent::PointerCancel => self.handle_pointer_up(),
            InputEvent::Reset => self.reset(),
            InputEvent::SetMode(mode) => self.set_mode(mode),
        }
    }

    /// Drain `queue` and apply its events in arrival order.
    pub fn process(&mut self, queue: &mut InputQueue) {
        for event in queue.drain() {
            self.apply(event);
        }
    }
}

impl Default for AimSession {
    fn default() -> Self {
        Self::new()
    }
}
