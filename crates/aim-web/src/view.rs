//! Browser side of the coordinate mapping and the full-screen toggle.
//!
//! The host page draws the outer frame (table plus margin) into the element
//! letterboxed and centered, the way an SVG `viewBox` with the default
//! `preserveAspectRatio` does. The element's bounding box is read on every
//! event, so CSS resizes and full-screen changes need no notification.

use aim_engine::{TableConfig, TransformSource, ViewTransform};
use web_sys::{Document, Element};

/// The element the table is drawn into.
pub struct CanvasView {
    element: Element,
    table: TableConfig,
}

impl CanvasView {
    pub fn new(element: Element, table: TableConfig) -> Self {
        Self { element, table }
    }

    /// Look the element up by id.
    pub fn find(document: &Document, id: &str, table: TableConfig) -> Option<Self> {
        document.get_element_by_id(id).map(|element| Self::new(element, table))
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl TransformSource for CanvasView {
    fn current_transform(&self) -> ViewTransform {
        let rect = self.element.get_bounding_client_rect();
        ViewTransform::fit(rect.left(), rect.top(), rect.width(), rect.height(), &self.table)
    }
}

/// Enter full screen on the element's container, or leave it if already active.
/// Unsupported hosts and rejected requests are ignored.
pub fn toggle_fullscreen(element: &Element) {
    let Some(document) = element.owner_document() else {
        return;
    };

    if document.fullscreen_element().is_some() {
        document.exit_fullscreen();
        return;
    }

    let target = element.parent_element().unwrap_or_else(|| element.clone());
    if let Err(err) = target.request_fullscreen() {
        log::debug!("fullscreen request ignored: {:?}", err);
    }
}
