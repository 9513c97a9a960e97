use glam::DVec2;

use crate::api::config::TableConfig;
use crate::core::vector::Point;

/// Device-to-table mapping for the rendered view.
///
/// The view draws the table plus `margin` on every side (the "outer frame").
/// `device = outer * scale + offset`, and table-local = outer - margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Device pixels per table unit (uniform on both axes).
    pub scale: f64,
    /// Device position of the outer frame's top-left corner.
    pub offset: DVec2,
    /// Margin between the outer frame and the playing surface, in table units.
    pub margin: f64,
}

impl ViewTransform {
    /// One device pixel per table unit, frame at the device origin.
    pub fn identity(margin: f64) -> Self {
        Self {
            scale: 1.0,
            offset: DVec2::ZERO,
            margin,
        }
    }

    /// Fit the outer frame into an element rectangle, keeping aspect ratio
    /// and centering the leftover space on the longer axis.
    pub fn fit(left: f64, top: f64, width: f64, height: f64, table: &TableConfig) -> Self {
        let outer_w = table.outer_width();
        let outer_h = table.outer_height();
        let horiz_ratio = width / outer_w;
        let vert_ratio = height / outer_h;
        let scale = horiz_ratio.min(vert_ratio);
        // Collapsed or hidden element: stay invertible.
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };

        let used = DVec2::new(outer_w, outer_h) * scale;
        let slack = (DVec2::new(width, height) - used).max(DVec2::ZERO);
        Self {
            scale,
            offset: DVec2::new(left, top) + slack / 2.0,
            margin: table.margin,
        }
    }

    /// Device coordinates to table-local coordinates.
    pub fn to_local(&self, device: Point) -> Point {
        (device - self.offset) / self.scale - DVec2::splat(self.margin)
    }

    /// Table-local coordinates to device coordinates.
    pub fn to_device(&self, local: Point) -> Point {
        (local + DVec2::splat(self.margin)) * self.scale + self.offset
    }
}

/// Something that knows the view transform right now (canvas layout, test fixture, ...).
pub trait TransformSource {
    fn current_transform(&self) -> ViewTransform;
}

impl TransformSource for ViewTransform {
    fn current_transform(&self) -> ViewTransform {
        *self
    }
}

/// Converts pointer positions to table-local space.
/// Asks the source for the live transform on every event so resizes and
/// full-screen switches are picked up without invalidation.
pub struct CoordinateMapper;

impl CoordinateMapper {
    pub fn map<S: TransformSource + ?Sized>(source: &S, device: Point) -> Point {
        source.current_transform().to_local(device)
    }
}
