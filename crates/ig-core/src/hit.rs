//! Point hit testing over a scene.

use crate::id::ElementId;
use crate::model::{Element, Scene};

/// Axis-aligned bounding box containment in canvas space.
fn contains(element: &Element, px: f32, py: f32) -> bool {
    let (w, h) = element.size();
    let g = &element.geometry;
    px >= g.x && px <= g.x + w && py >= g.y && py <= g.y + h
}

/// The topmost element under a canvas-space point, or `None`.
///
/// Hidden and locked elements are transparent to the pointer. Among
/// overlapping candidates the highest `z_index` wins; on ties the later
/// inserted element wins, matching paint order.
pub fn element_at(scene: &Scene, x: f32, y: f32) -> Option<ElementId> {
    scene
        .elements
        .iter()
        .enumerate()
        .filter(|(_, e)| !e.hidden && !e.locked && contains(e, x, y))
        .max_by_key(|(i, e)| (e.z_index, *i))
        .map(|(_, e)| e.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, ElementKind, Geometry, ShapeKind};

    fn shape(name: &str, x: f32, y: f32, z: i64) -> Element {
        Element::new(
            ElementId::intern(name),
            ElementKind::Shape {
                shape: ShapeKind::Rectangle,
                fill: Color::BLACK,
                stroke: None,
                stroke_width: 1.0,
                corner_radius: 0.0,
                opacity: 1.0,
            },
            Geometry::sized(x, y, 100.0, 100.0),
            z,
        )
    }

    #[test]
    fn topmost_wins() {
        let mut scene = Scene::default();
        scene.push(shape("below", 0.0, 0.0, 1));
        scene.push(shape("above", 50.0, 50.0, 2));

        assert_eq!(element_at(&scene, 60.0, 60.0), Some(ElementId::intern("above")));
        assert_eq!(element_at(&scene, 10.0, 10.0), Some(ElementId::intern("below")));
        assert_eq!(element_at(&scene, 500.0, 500.0), None);
    }

    #[test]
    fn hidden_and_locked_are_transparent() {
        let mut scene = Scene::default();
        let mut hidden = shape("hidden", 0.0, 0.0, 2);
        hidden.hidden = true;
        let mut locked = shape("locked", 0.0, 0.0, 3);
        locked.locked = true;
        scene.push(shape("plain", 0.0, 0.0, 1));
        scene.push(hidden);
        scene.push(locked);

        assert_eq!(element_at(&scene, 10.0, 10.0), Some(ElementId::intern("plain")));
    }

    #[test]
    fn z_tie_later_insertion_wins() {
        let mut scene = Scene::default();
        scene.push(shape("older", 0.0, 0.0, 1));
        scene.push(shape("newer", 0.0, 0.0, 1));
        assert_eq!(element_at(&scene, 10.0, 10.0), Some(ElementId::intern("newer")));
    }
}
