//! Interactive element controller — drag-move, edge-drag-resize, arrow-nudge.
#![allow(dead_code)]
//!
//! One controller instance serves a rendering surface. At most one element may
//! hold an active gesture; a second pointer-down before pointer-up is not a
//! supported interaction and is ignored. Focus is independent of gestures and
//! persists after pointer release.
//!
//! Every pointer-move and key event synchronously computes and commits the new
//! canonical geometry to the `Document` before returning — no batching, no
//! async queueing, so operations are never lost or reordered. A gesture on a
//! since-deleted decoration commits nothing and is not an error.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::layout::transform::{CanonicalPoint, ViewContext, ViewPoint, ViewSize};
use crate::models::document::Document;

// ────────────────────────────────────────────────────────────────────────────
// Constants
// ────────────────────────────────────────────────────────────────────────────

/// Arrow-key translation step in canonical units.
pub const NUDGE_STEP: f32 = 6.0;
/// Step when the modifier key is held.
pub const NUDGE_STEP_FAST: f32 = 60.0;
/// Pointer-down within this many view pixels of the right or bottom edge
/// starts a resize instead of a drag.
pub const RESIZE_GRIP_PX: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NudgeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Observable controller state, for the overlay UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureState {
    Idle,
    Dragging,
    Resizing,
    Focused,
}

// ────────────────────────────────────────────────────────────────────────────
// Controller
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum ActiveGesture {
    None,
    Dragging {
        id: Uuid,
        /// Pointer offset from the element's top-left at pointer-down, in
        /// view pixels. Subtracted from every subsequent pointer position.
        origin_offset: ViewPoint,
    },
    Resizing {
        id: Uuid,
        /// The fixed corner the size is measured from, in canonical units.
        top_left: CanonicalPoint,
    },
}

#[derive(Debug)]
pub struct ElementController {
    gesture: ActiveGesture,
    focused: Option<Uuid>,
}

impl Default for ElementController {
    fn default() -> Self {
        ElementController {
            gesture: ActiveGesture::None,
            focused: None,
        }
    }
}

impl ElementController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        match self.gesture {
            ActiveGesture::Dragging { .. } => GestureState::Dragging,
            ActiveGesture::Resizing { .. } => GestureState::Resizing,
            ActiveGesture::None if self.focused.is_some() => GestureState::Focused,
            ActiveGesture::None => GestureState::Idle,
        }
    }

    pub fn focused(&self) -> Option<Uuid> {
        self.focused
    }

    /// Pointer-down on an element. Near the right or bottom edge starts a
    /// resize; elsewhere starts a drag. Ignored while another gesture is
    /// active or when the decoration no longer exists.
    pub fn begin_gesture(
        &mut self,
        document: &Document,
        id: Uuid,
        pointer: ViewPoint,
        ctx: &ViewContext,
    ) {
        if !matches!(self.gesture, ActiveGesture::None) {
            return;
        }
        let Some(deco) = document.decoration(id) else {
            return;
        };

        let top_left = ctx.to_view_point(deco.position);
        let size = ctx.to_view_size(deco.size);
        let right = top_left.x + size.width;
        let bottom = top_left.y + size.height;

        let near_right = (pointer.x - right).abs() <= RESIZE_GRIP_PX;
        let near_bottom = (pointer.y - bottom).abs() <= RESIZE_GRIP_PX;

        self.gesture = if near_right || near_bottom {
            ActiveGesture::Resizing {
                id,
                top_left: deco.position,
            }
        } else {
            ActiveGesture::Dragging {
                id,
                origin_offset: ViewPoint {
                    x: pointer.x - top_left.x,
                    y: pointer.y - top_left.y,
                },
            }
        };
    }

    /// Pointer-move. Commits the new canonical geometry into the document
    /// before returning.
    pub fn update_gesture(&mut self, document: &mut Document, pointer: ViewPoint, ctx: &ViewContext) {
        match self.gesture {
            ActiveGesture::None => {}
            ActiveGesture::Dragging { id, origin_offset } => {
                let Some(deco) = document.decoration_mut(id) else {
                    return;
                };
                let new_top_left = ViewPoint {
                    x: pointer.x - origin_offset.x,
                    y: pointer.y - origin_offset.y,
                };
                deco.position = ctx.to_canonical_point(new_top_left).clamp_non_negative();
            }
            ActiveGesture::Resizing { id, top_left } => {
                let Some(deco) = document.decoration_mut(id) else {
                    return;
                };
                let corner = ctx.to_view_point(top_left);
                let proposed = ctx.to_canonical_size(ViewSize {
                    width: (pointer.x - corner.x).max(0.0),
                    height: (pointer.y - corner.y).max(0.0),
                });
                deco.size = deco.kind.clamp_size(proposed);
            }
        }
    }

    /// Pointer-up. Returns to Idle; focus is untouched.
    pub fn end_gesture(&mut self) {
        self.gesture = ActiveGesture::None;
    }

    pub fn focus(&mut self, id: Uuid) {
        self.focused = Some(id);
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Arrow-key nudge of the focused element: 6 canonical units, 60 with the
    /// modifier held, clamped non-negative. No-op without focus or when the
    /// decoration was deleted.
    pub fn nudge(&mut self, document: &mut Document, direction: NudgeDirection, fast: bool) {
        let Some(id) = self.focused else {
            return;
        };
        nudge_decoration(document, id, direction, fast);
    }
}

/// Stateless nudge used by both the controller and the HTTP surface.
pub fn nudge_decoration(
    document: &mut Document,
    id: Uuid,
    direction: NudgeDirection,
    fast: bool,
) {
    let Some(deco) = document.decoration_mut(id) else {
        return;
    };
    let step = if fast { NUDGE_STEP_FAST } else { NUDGE_STEP };
    let (dx, dy) = match direction {
        NudgeDirection::Left => (-step, 0.0),
        NudgeDirection::Right => (step, 0.0),
        NudgeDirection::Up => (0.0, -step),
        NudgeDirection::Down => (0.0, step),
    };
    deco.position = CanonicalPoint {
        x: deco.position.x + dx,
        y: deco.position.y + dy,
    }
    .clamp_non_negative();
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::transform::CanonicalSize;
    use crate::models::decoration::{
        Decoration, DecorationKind, MIN_DECORATION_SIZE, SEPARATOR_WIDTH_MAX,
    };

    fn doc_with_decoration(position: CanonicalPoint, size: CanonicalSize) -> (Document, Uuid) {
        let deco = Decoration {
            id: Uuid::new_v4(),
            kind: DecorationKind::Rectangle {
                fill: "#888888".to_string(),
            },
            position,
            size,
        };
        let id = deco.id;
        let mut doc = Document::default();
        doc.decorations.push(deco);
        (doc, id)
    }

    // ── drag ────────────────────────────────────────────────────────────────

    #[test]
    fn test_drag_delta_converts_through_view_scale() {
        // Scenario: decoration at {100, 50}, pointer delta (30, -20) in a
        // 0.6-scale view → canonical {100 + 30/0.6, max(0, 50 - 20/0.6)}.
        let (mut doc, id) = doc_with_decoration(
            CanonicalPoint { x: 100.0, y: 50.0 },
            CanonicalSize {
                width: 40.0,
                height: 30.0,
            },
        );
        let ctx = ViewContext::new(0.6);
        let mut ctrl = ElementController::new();

        // Pointer-down in the interior (element top-left is at 60, 30 view px).
        let down = ViewPoint { x: 62.0, y: 32.0 };
        ctrl.begin_gesture(&doc, id, down, &ctx);
        assert_eq!(ctrl.state(), GestureState::Dragging);

        let moved = ViewPoint {
            x: down.x + 30.0,
            y: down.y - 20.0,
        };
        ctrl.update_gesture(&mut doc, moved, &ctx);

        let deco = doc.decoration(id).unwrap();
        assert!((deco.position.x - (100.0 + 30.0 / 0.6)).abs() < 1e-3);
        assert!((deco.position.y - (50.0 - 20.0 / 0.6)).abs() < 1e-3);
    }

    #[test]
    fn test_drag_clamps_position_non_negative() {
        let (mut doc, id) = doc_with_decoration(
            CanonicalPoint { x: 5.0, y: 5.0 },
            CanonicalSize {
                width: 40.0,
                height: 30.0,
            },
        );
        let ctx = ViewContext::new(1.0);
        let mut ctrl = ElementController::new();

        ctrl.begin_gesture(&doc, id, ViewPoint { x: 10.0, y: 10.0 }, &ctx);
        // Walk the pointer far past the top-left corner, in several steps.
        for step in 1..=10 {
            let p = ViewPoint {
                x: 10.0 - 50.0 * step as f32,
                y: 10.0 - 50.0 * step as f32,
            };
            ctrl.update_gesture(&mut doc, p, &ctx);
            let deco = doc.decoration(id).unwrap();
            assert!(deco.position.x >= 0.0 && deco.position.y >= 0.0);
        }
        let deco = doc.decoration(id).unwrap();
        assert_eq!(deco.position, CanonicalPoint { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_each_move_commits_synchronously() {
        let (mut doc, id) = doc_with_decoration(
            CanonicalPoint { x: 10.0, y: 10.0 },
            CanonicalSize {
                width: 40.0,
                height: 30.0,
            },
        );
        let ctx = ViewContext::new(1.0);
        let mut ctrl = ElementController::new();
        ctrl.begin_gesture(&doc, id, ViewPoint { x: 15.0, y: 15.0 }, &ctx);

        ctrl.update_gesture(&mut doc, ViewPoint { x: 25.0, y: 15.0 }, &ctx);
        assert_eq!(doc.decoration(id).unwrap().position.x, 20.0);
        ctrl.update_gesture(&mut doc, ViewPoint { x: 35.0, y: 15.0 }, &ctx);
        assert_eq!(doc.decoration(id).unwrap().position.x, 30.0);
    }

    // ── resize ──────────────────────────────────────────────────────────────

    #[test]
    fn test_pointer_down_near_edge_starts_resize() {
        let (doc, id) = doc_with_decoration(
            CanonicalPoint { x: 10.0, y: 10.0 },
            CanonicalSize {
                width: 40.0,
                height: 30.0,
            },
        );
        let ctx = ViewContext::new(1.0);
        let mut ctrl = ElementController::new();
        // Right edge is at view x = 50; 3 px inside the grip.
        ctrl.begin_gesture(&doc, id, ViewPoint { x: 47.0, y: 25.0 }, &ctx);
        assert_eq!(ctrl.state(), GestureState::Resizing);
    }

    #[test]
    fn test_resize_measures_from_fixed_top_left() {
        let (mut doc, id) = doc_with_decoration(
            CanonicalPoint { x: 10.0, y: 10.0 },
            CanonicalSize {
                width: 40.0,
                height: 30.0,
            },
        );
        let ctx = ViewContext::new(2.0);
        let mut ctrl = ElementController::new();
        // Bottom edge at view y = (10 + 30) * 2 = 80.
        ctrl.begin_gesture(&doc, id, ViewPoint { x: 60.0, y: 80.0 }, &ctx);
        assert_eq!(ctrl.state(), GestureState::Resizing);

        // Pointer at view (140, 120) → canonical size (140-20)/2 × (120-20)/2.
        ctrl.update_gesture(&mut doc, ViewPoint { x: 140.0, y: 120.0 }, &ctx);
        let deco = doc.decoration(id).unwrap();
        assert!((deco.size.width - 60.0).abs() < 1e-3);
        assert!((deco.size.height - 50.0).abs() < 1e-3);
        // Position is untouched by a resize.
        assert_eq!(deco.position, CanonicalPoint { x: 10.0, y: 10.0 });
    }

    #[test]
    fn test_resize_clamps_to_type_minimum() {
        let (mut doc, id) = doc_with_decoration(
            CanonicalPoint { x: 10.0, y: 10.0 },
            CanonicalSize {
                width: 40.0,
                height: 30.0,
            },
        );
        let ctx = ViewContext::new(1.0);
        let mut ctrl = ElementController::new();
        ctrl.begin_gesture(&doc, id, ViewPoint { x: 50.0, y: 25.0 }, &ctx);
        // Drag the corner past the top-left.
        ctrl.update_gesture(&mut doc, ViewPoint { x: 0.0, y: 0.0 }, &ctx);
        let deco = doc.decoration(id).unwrap();
        assert_eq!(deco.size.width, MIN_DECORATION_SIZE.width);
        assert_eq!(deco.size.height, MIN_DECORATION_SIZE.height);
    }

    #[test]
    fn test_separator_resize_respects_width_range() {
        let sep = Decoration::new(
            DecorationKind::Separator { thickness: 1.0 },
            CanonicalPoint { x: 0.0, y: 100.0 },
        );
        let id = sep.id;
        let width = sep.size.width;
        let mut doc = Document::default();
        doc.decorations.push(sep);

        let ctx = ViewContext::new(1.0);
        let mut ctrl = ElementController::new();
        ctrl.begin_gesture(&doc, id, ViewPoint { x: width, y: 102.0 }, &ctx);
        assert_eq!(ctrl.state(), GestureState::Resizing);

        ctrl.update_gesture(&mut doc, ViewPoint { x: 10_000.0, y: 102.0 }, &ctx);
        assert_eq!(doc.decoration(id).unwrap().size.width, SEPARATOR_WIDTH_MAX);
    }

    // ── state machine ───────────────────────────────────────────────────────

    #[test]
    fn test_second_pointer_down_is_ignored() {
        let (mut doc, id) = doc_with_decoration(
            CanonicalPoint { x: 10.0, y: 10.0 },
            CanonicalSize {
                width: 40.0,
                height: 30.0,
            },
        );
        let other = Decoration::new(
            DecorationKind::Circle {
                fill: "#000000".to_string(),
            },
            CanonicalPoint { x: 100.0, y: 100.0 },
        );
        let other_id = other.id;
        doc.decorations.push(other);

        let ctx = ViewContext::new(1.0);
        let mut ctrl = ElementController::new();
        ctrl.begin_gesture(&doc, id, ViewPoint { x: 15.0, y: 15.0 }, &ctx);
        ctrl.begin_gesture(&doc, other_id, ViewPoint { x: 105.0, y: 105.0 }, &ctx);

        // Still dragging the first element: a move leaves the second untouched.
        ctrl.update_gesture(&mut doc, ViewPoint { x: 25.0, y: 15.0 }, &ctx);
        assert_eq!(doc.decoration(id).unwrap().position.x, 20.0);
        assert_eq!(doc.decoration(other_id).unwrap().position.x, 100.0);
    }

    #[test]
    fn test_focus_persists_after_pointer_up() {
        let (doc, id) = doc_with_decoration(
            CanonicalPoint { x: 10.0, y: 10.0 },
            CanonicalSize {
                width: 40.0,
                height: 30.0,
            },
        );
        let ctx = ViewContext::new(1.0);
        let mut ctrl = ElementController::new();
        ctrl.focus(id);
        ctrl.begin_gesture(&doc, id, ViewPoint { x: 15.0, y: 15.0 }, &ctx);
        ctrl.end_gesture();
        assert_eq!(ctrl.state(), GestureState::Focused);
        ctrl.blur();
        assert_eq!(ctrl.state(), GestureState::Idle);
    }

    #[test]
    fn test_gesture_on_deleted_decoration_is_noop() {
        let (mut doc, id) = doc_with_decoration(
            CanonicalPoint { x: 10.0, y: 10.0 },
            CanonicalSize {
                width: 40.0,
                height: 30.0,
            },
        );
        let ctx = ViewContext::new(1.0);
        let mut ctrl = ElementController::new();
        ctrl.begin_gesture(&doc, id, ViewPoint { x: 15.0, y: 15.0 }, &ctx);

        // The wizard deletes the decoration mid-gesture.
        doc.decorations.clear();
        ctrl.update_gesture(&mut doc, ViewPoint { x: 50.0, y: 50.0 }, &ctx);
        assert!(doc.decorations.is_empty());
    }

    // ── nudge ───────────────────────────────────────────────────────────────

    #[test]
    fn test_arrow_right_moves_exactly_six_units() {
        let (mut doc, id) = doc_with_decoration(
            CanonicalPoint { x: 30.0, y: 30.0 },
            CanonicalSize {
                width: 40.0,
                height: 30.0,
            },
        );
        let mut ctrl = ElementController::new();
        ctrl.focus(id);
        ctrl.nudge(&mut doc, NudgeDirection::Right, false);
        assert_eq!(doc.decoration(id).unwrap().position.x, 36.0);
        ctrl.nudge(&mut doc, NudgeDirection::Right, true);
        assert_eq!(doc.decoration(id).unwrap().position.x, 96.0);
    }

    #[test]
    fn test_nudge_clamps_at_zero() {
        let (mut doc, id) = doc_with_decoration(
            CanonicalPoint { x: 2.0, y: 2.0 },
            CanonicalSize {
                width: 40.0,
                height: 30.0,
            },
        );
        nudge_decoration(&mut doc, id, NudgeDirection::Left, false);
        nudge_decoration(&mut doc, id, NudgeDirection::Up, true);
        let deco = doc.decoration(id).unwrap();
        assert_eq!(deco.position, CanonicalPoint { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_nudge_without_focus_is_noop() {
        let (mut doc, id) = doc_with_decoration(
            CanonicalPoint { x: 30.0, y: 30.0 },
            CanonicalSize {
                width: 40.0,
                height: 30.0,
            },
        );
        let mut ctrl = ElementController::new();
        ctrl.nudge(&mut doc, NudgeDirection::Down, false);
        assert_eq!(doc.decoration(id).unwrap().position.y, 30.0);
    }
}
