//! Drag-selection state

use crate::types::Rect;

/// Transient state of a click-drag selection.
///
/// Created on press, cleared on release or when the pointer leaves the plot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    pub is_dragging: bool,
    /// X coordinate where the drag started
    pub anchor_x: Option<f64>,
    /// Preview rectangle while the pointer moves
    pub selection_rect: Option<Rect>,
}

impl DragState {
    pub fn begin(&mut self, anchor_x: f64) {
        self.is_dragging = true;
        self.anchor_x = Some(anchor_x);
        self.selection_rect = None;
    }

    /// The anchor of an active drag
    pub fn active_anchor(&self) -> Option<f64> {
        if self.is_dragging {
            self.anchor_x
        } else {
            None
        }
    }

    /// End the drag, returning its anchor if one was active
    pub fn finish(&mut self) -> Option<f64> {
        let anchor = self.active_anchor();
        *self = Self::default();
        anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_lifecycle() {
        let mut drag = DragState::default();
        assert!(drag.active_anchor().is_none());

        drag.begin(2.5);
        assert!(drag.is_dragging);
        assert_eq!(drag.active_anchor(), Some(2.5));

        drag.selection_rect = Some(Rect::default());

        assert_eq!(drag.finish(), Some(2.5));
        assert_eq!(drag, DragState::default());
        assert_eq!(drag.finish(), None);
    }
}
