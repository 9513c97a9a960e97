use crate::api::types::{AimMode, PointerKind};
use crate::core::vector::Point;

/// Input the aim session understands.
/// Pointer positions are already in table-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began.
    PointerDown { at: Point, pointer: PointerKind },
    /// The pointer moved.
    PointerMove { at: Point },
    /// The touch/click ended.
    PointerUp,
    /// The pointer left capture. Ends a drag exactly like `PointerUp`.
    PointerCancel,
    /// Restore default ball and rail marker positions.
    Reset,
    /// Switch aiming mode.
    SetMode(AimMode),
}

/// A queue of input events.
/// The host pushes events as they arrive; the session drains them in order.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
