//! The interaction controller: a small state machine turning pointer
//! events into scene commands.
//!
//! The controller never touches the scene directly. Each handler returns
//! a short batch of [`EditCommand`]s that the session applies, so the
//! gesture logic stays testable without a live scene behind it.
//!
//! No history checkpoints are taken here: drag and resize streams are
//! continuous and the undo granularity is deliberately coarser (see the
//! session's checkpoint policy).

use crate::input::{CanvasView, Handle};
use ig_core::{ElementId, ElementPatch, Scene};
use smallvec::{SmallVec, smallvec};

/// Minimum element dimension in canvas units; resizing clamps here.
pub const MIN_ELEMENT_SIZE: f32 = 20.0;

/// A command for the session to apply against its scene and selection.
#[derive(Debug, Clone, PartialEq)]
pub enum EditCommand {
    Select(ElementId),
    Deselect,
    Update(ElementId, ElementPatch),
}

/// Per-event command batch; gestures emit at most two commands.
pub type CommandBatch = SmallVec<[EditCommand; 2]>;

/// The active gesture. Press transitions out of `Idle`; release — from
/// any source, anywhere on screen — always returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Idle,
    Dragging {
        id: ElementId,
        /// Press offset from the element origin, in canvas units.
        offset_x: f32,
        offset_y: f32,
    },
    Resizing {
        id: ElementId,
        handle: Handle,
        start_width: f32,
        start_height: f32,
        /// Raw (unscaled) screen press point.
        press_x: f32,
        press_y: f32,
    },
}

#[derive(Debug)]
pub struct DragController {
    gesture: Gesture,
}

impl DragController {
    pub fn new() -> Self {
        Self {
            gesture: Gesture::Idle,
        }
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn is_idle(&self) -> bool {
        self.gesture == Gesture::Idle
    }

    /// Pointer press on the canvas. A hit on a visible, unlocked element
    /// starts a drag and selects it; anything else clears the selection.
    pub fn press(
        &mut self,
        scene: &Scene,
        hit: Option<ElementId>,
        sx: f32,
        sy: f32,
        view: CanvasView,
    ) -> CommandBatch {
        if let Some(id) = hit
            && let Some(element) = scene.find(id)
            && !element.hidden
            && !element.locked
        {
            let (cx, cy) = view.to_canvas(sx, sy);
            self.gesture = Gesture::Dragging {
                id,
                offset_x: cx - element.geometry.x,
                offset_y: cy - element.geometry.y,
            };
            log::trace!("drag start on {id}");
            return smallvec![EditCommand::Select(id)];
        }
        smallvec![EditCommand::Deselect]
    }

    /// Pointer press on a resize handle of the selected element. Records
    /// the starting size and the raw press point.
    pub fn press_handle(
        &mut self,
        scene: &Scene,
        id: ElementId,
        handle: Handle,
        sx: f32,
        sy: f32,
    ) -> bool {
        let Some(element) = scene.find(id) else {
            return false;
        };
        if element.hidden || element.locked {
            return false;
        }
        let (start_width, start_height) = element.size();
        self.gesture = Gesture::Resizing {
            id,
            handle,
            start_width,
            start_height,
            press_x: sx,
            press_y: sy,
        };
        log::trace!("resize start on {id} via {}", handle.name());
        true
    }

    /// Pointer move. Safe at arbitrary frequency: each call recomputes
    /// the full geometry from the recorded gesture state, so coalesced
    /// or repeated events produce the same result.
    pub fn pointer_move(&mut self, sx: f32, sy: f32, view: CanvasView) -> CommandBatch {
        match self.gesture {
            Gesture::Idle => SmallVec::new(),
            Gesture::Dragging {
                id,
                offset_x,
                offset_y,
            } => {
                let (cx, cy) = view.to_canvas(sx, sy);
                // Clamp to the canvas origin; there is no upper clamp.
                let x = (cx - offset_x).max(0.0);
                let y = (cy - offset_y).max(0.0);
                smallvec![EditCommand::Update(id, ElementPatch::position(x, y))]
            }
            Gesture::Resizing {
                id,
                handle,
                start_width,
                start_height,
                press_x,
                press_y,
            } => {
                let dx = (sx - press_x) / view.zoom;
                let dy = (sy - press_y) / view.zoom;

                let mut width = start_width;
                let mut height = start_height;
                if handle.affects_east() {
                    width = start_width + dx;
                } else if handle.affects_west() {
                    width = start_width - dx;
                }
                if handle.affects_south() {
                    height = start_height + dy;
                } else if handle.affects_north() {
                    height = start_height - dy;
                }

                width = width.max(MIN_ELEMENT_SIZE);
                height = height.max(MIN_ELEMENT_SIZE);
                smallvec![EditCommand::Update(id, ElementPatch::resize(width, height))]
            }
        }
    }

    /// Pointer release, from any source. Always ends the gesture.
    pub fn release(&mut self) {
        if !self.is_idle() {
            log::trace!("gesture end");
        }
        self.gesture = Gesture::Idle;
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ig_core::{Color, Element, ElementKind, Geometry, ShapeKind};

    fn scene_with_rect() -> (Scene, ElementId) {
        let mut scene = Scene::default();
        let id = ElementId::intern("target");
        scene.push(Element::new(
            id,
            ElementKind::Shape {
                shape: ShapeKind::Rectangle,
                fill: Color::BLACK,
                stroke: None,
                stroke_width: 1.0,
                corner_radius: 0.0,
                opacity: 1.0,
            },
            Geometry::sized(100.0, 100.0, 200.0, 150.0),
            1,
        ));
        (scene, id)
    }

    #[test]
    fn press_on_element_selects_and_starts_drag() {
        let (scene, id) = scene_with_rect();
        let mut ctl = DragController::new();
        let cmds = ctl.press(&scene, Some(id), 120.0, 130.0, CanvasView::default());
        assert_eq!(cmds.as_slice(), [EditCommand::Select(id)]);
        assert!(matches!(ctl.gesture(), Gesture::Dragging { .. }));
    }

    #[test]
    fn press_on_empty_canvas_deselects() {
        let (scene, _) = scene_with_rect();
        let mut ctl = DragController::new();
        let cmds = ctl.press(&scene, None, 5.0, 5.0, CanvasView::default());
        assert_eq!(cmds.as_slice(), [EditCommand::Deselect]);
        assert!(ctl.is_idle());
    }

    #[test]
    fn press_on_locked_element_does_not_drag() {
        let (mut scene, id) = scene_with_rect();
        scene.find_mut(id).unwrap().locked = true;
        let mut ctl = DragController::new();
        let cmds = ctl.press(&scene, Some(id), 120.0, 130.0, CanvasView::default());
        assert_eq!(cmds.as_slice(), [EditCommand::Deselect]);
        assert!(ctl.is_idle());
    }

    #[test]
    fn drag_keeps_press_offset() {
        let (scene, id) = scene_with_rect();
        let mut ctl = DragController::new();
        // Press 20,30 into the element.
        ctl.press(&scene, Some(id), 120.0, 130.0, CanvasView::default());
        let cmds = ctl.pointer_move(300.0, 400.0, CanvasView::default());
        assert_eq!(
            cmds.as_slice(),
            [EditCommand::Update(id, ElementPatch::position(280.0, 370.0))]
        );
    }

    #[test]
    fn drag_respects_zoom() {
        let (scene, id) = scene_with_rect();
        let view = CanvasView::new(2.0, 0.0, 0.0);
        let mut ctl = DragController::new();
        // Screen 240,260 → canvas 120,130 → offset 20,30.
        ctl.press(&scene, Some(id), 240.0, 260.0, view);
        let cmds = ctl.pointer_move(400.0, 400.0, view);
        assert_eq!(
            cmds.as_slice(),
            [EditCommand::Update(id, ElementPatch::position(180.0, 170.0))]
        );
    }

    #[test]
    fn drag_clamps_at_canvas_origin() {
        let (scene, id) = scene_with_rect();
        let mut ctl = DragController::new();
        ctl.press(&scene, Some(id), 120.0, 130.0, CanvasView::default());
        let cmds = ctl.pointer_move(-5000.0, -5000.0, CanvasView::default());
        assert_eq!(
            cmds.as_slice(),
            [EditCommand::Update(id, ElementPatch::position(0.0, 0.0))]
        );
    }

    #[test]
    fn move_is_idempotent_at_arbitrary_frequency() {
        let (scene, id) = scene_with_rect();
        let mut ctl = DragController::new();
        ctl.press(&scene, Some(id), 120.0, 130.0, CanvasView::default());
        let first = ctl.pointer_move(250.0, 250.0, CanvasView::default());
        let second = ctl.pointer_move(250.0, 250.0, CanvasView::default());
        assert_eq!(first, second);
    }

    #[test]
    fn resize_se_grows_both_axes() {
        let (scene, id) = scene_with_rect();
        let mut ctl = DragController::new();
        assert!(ctl.press_handle(&scene, id, Handle::Se, 300.0, 250.0));
        let cmds = ctl.pointer_move(350.0, 280.0, CanvasView::default());
        assert_eq!(
            cmds.as_slice(),
            [EditCommand::Update(id, ElementPatch::resize(250.0, 180.0))]
        );
    }

    #[test]
    fn resize_nw_shrinks_against_pointer() {
        let (scene, id) = scene_with_rect();
        let mut ctl = DragController::new();
        ctl.press_handle(&scene, id, Handle::Nw, 100.0, 100.0);
        // Pointer moves +30,+40: nw shrinks both dimensions.
        let cmds = ctl.pointer_move(130.0, 140.0, CanvasView::default());
        assert_eq!(
            cmds.as_slice(),
            [EditCommand::Update(id, ElementPatch::resize(170.0, 110.0))]
        );
    }

    #[test]
    fn resize_edge_handle_changes_one_axis() {
        let (scene, id) = scene_with_rect();
        let mut ctl = DragController::new();
        ctl.press_handle(&scene, id, Handle::E, 300.0, 175.0);
        let cmds = ctl.pointer_move(340.0, 999.0, CanvasView::default());
        assert_eq!(
            cmds.as_slice(),
            [EditCommand::Update(id, ElementPatch::resize(240.0, 150.0))]
        );
    }

    #[test]
    fn resize_clamps_to_minimum_for_every_handle() {
        let (scene, id) = scene_with_rect();
        for handle in Handle::ALL {
            let mut ctl = DragController::new();
            ctl.press_handle(&scene, id, handle, 0.0, 0.0);
            let cmds = ctl.pointer_move(-100_000.0, 100_000.0, CanvasView::default());
            let EditCommand::Update(_, patch) = &cmds[0] else {
                panic!("expected Update");
            };
            assert!(patch.width.unwrap() >= MIN_ELEMENT_SIZE, "{handle:?}");
            assert!(patch.height.unwrap() >= MIN_ELEMENT_SIZE, "{handle:?}");
        }
    }

    #[test]
    fn resize_respects_zoom() {
        let (scene, id) = scene_with_rect();
        let view = CanvasView::new(2.0, 0.0, 0.0);
        let mut ctl = DragController::new();
        ctl.press_handle(&scene, id, Handle::Se, 100.0, 100.0);
        // 60 screen px at zoom 2 is 30 canvas units.
        let cmds = ctl.pointer_move(160.0, 160.0, view);
        assert_eq!(
            cmds.as_slice(),
            [EditCommand::Update(id, ElementPatch::resize(230.0, 180.0))]
        );
    }

    #[test]
    fn release_from_anywhere_returns_to_idle() {
        let (scene, id) = scene_with_rect();
        let mut ctl = DragController::new();
        ctl.press(&scene, Some(id), 120.0, 130.0, CanvasView::default());
        ctl.release();
        assert!(ctl.is_idle());
        // Further moves are inert.
        assert!(ctl.pointer_move(999.0, 999.0, CanvasView::default()).is_empty());
    }
}
