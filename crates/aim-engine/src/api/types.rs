use serde::{Deserialize, Serialize};

/// Which aiming aid is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AimMode {
    /// Ghost ball and cut angle toward the selected pocket.
    #[default]
    AimAtPocket,
    /// Cue ball off one rail point toward the object ball.
    OneCushion,
}

impl AimMode {
    /// Numeric code used on the JS bridge (0 = pocket, 1 = cushion).
    pub fn code(self) -> u32 {
        match self {
            AimMode::AimAtPocket => 0,
            AimMode::OneCushion => 1,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(AimMode::AimAtPocket),
            1 => Some(AimMode::OneCushion),
            _ => None,
        }
    }
}

/// Pointer precision class. Touch gets larger grab areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerKind {
    /// Mouse or pen.
    #[default]
    Fine,
    /// Finger.
    Coarse,
}

impl PointerKind {
    /// Map a DOM `PointerEvent.pointerType` string.
    pub fn from_pointer_type(pointer_type: &str) -> Self {
        if pointer_type.eq_ignore_ascii_case("touch") {
            PointerKind::Coarse
        } else {
            PointerKind::Fine
        }
    }
}
