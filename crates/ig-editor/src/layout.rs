//! Layout operations: canvas alignment and z-order commands.
//!
//! All functions are total: an unknown id leaves the scene untouched and
//! returns `false`.

use ig_core::{ElementId, Scene};

/// Horizontal alignment edge against the canvas bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical alignment edge against the canvas bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

/// Offset applied to duplicated elements so the copy is visibly apart.
pub const DUPLICATE_OFFSET: f32 = 20.0;

/// Align an element horizontally against the canvas. Returns whether the
/// scene changed.
pub fn align_horizontal(scene: &mut Scene, id: ElementId, edge: HAlign) -> bool {
    let canvas_width = scene.canvas_width as f32;
    let Some(element) = scene.find_mut(id) else {
        return false;
    };
    let (width, _) = element.size();
    element.geometry.x = match edge {
        HAlign::Left => 0.0,
        HAlign::Center => (canvas_width - width) / 2.0,
        HAlign::Right => canvas_width - width,
    };
    true
}

/// Align an element vertically against the canvas. Returns whether the
/// scene changed.
pub fn align_vertical(scene: &mut Scene, id: ElementId, edge: VAlign) -> bool {
    let canvas_height = scene.canvas_height as f32;
    let Some(element) = scene.find_mut(id) else {
        return false;
    };
    let (_, height) = element.size();
    element.geometry.y = match edge {
        VAlign::Top => 0.0,
        VAlign::Middle => (canvas_height - height) / 2.0,
        VAlign::Bottom => canvas_height - height,
    };
    true
}

/// Raise an element above everything else: `z = max(all z) + 1`.
/// Other elements are never renumbered; values may grow without bound,
/// which is fine since z is only a relative ordering.
pub fn bring_forward(scene: &mut Scene, id: ElementId) -> bool {
    let Some(max_z) = scene.max_z_index() else {
        return false;
    };
    let Some(element) = scene.find_mut(id) else {
        return false;
    };
    element.z_index = max_z + 1;
    true
}

/// Drop an element below everything else: `z = min(all z) - 1`.
/// May produce negative values over repeated use; accepted.
pub fn send_backward(scene: &mut Scene, id: ElementId) -> bool {
    let Some(min_z) = scene.min_z_index() else {
        return false;
    };
    let Some(element) = scene.find_mut(id) else {
        return false;
    };
    element.z_index = min_z - 1;
    true
}
