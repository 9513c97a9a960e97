pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::{InteractionConfig, TableConfig};
pub use api::session::{AimSession, EntityState};
pub use api::types::{AimMode, PointerKind};
pub use crate::core::table::{Edge, Pocket, PocketId, RailPoint, Table};
pub use crate::core::vector::Point;
pub use input::drag::{DragController, DragTarget};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::view::{CoordinateMapper, TransformSource, ViewTransform};
pub use systems::aim::{compute_aim_geometry, AimGeometry, CushionAim, PocketAim};
pub use bridge::protocol::AimFrame;
