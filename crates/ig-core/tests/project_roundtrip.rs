//! The project document is the JSON contract with the persistence
//! collaborator; these tests pin its field names and value formats.

use ig_core::{
    CanvasData, Color, Element, ElementId, ElementKind, FontSpec, Geometry, Project, Scene,
    ShapeKind,
};
use pretty_assertions::assert_eq;

fn sample_project() -> Project {
    let mut scene = Scene::new(800, 1200, Color::WHITE);
    scene.push(Element::new(
        ElementId::intern("title"),
        ElementKind::Text {
            content: "Hello".into(),
            font: FontSpec {
                family: "Inter".into(),
                weight: 700,
                size: 32.0,
            },
            color: Color::from_hex("#1F2937").unwrap(),
        },
        Geometry::sized(40.0, 40.0, 400.0, 60.0),
        1,
    ));
    scene.push(Element::new(
        ElementId::intern("accent"),
        ElementKind::Shape {
            shape: ShapeKind::Circle,
            fill: Color::from_hex("#3B82F6").unwrap(),
            stroke: None,
            stroke_width: 1.0,
            corner_radius: 0.0,
            opacity: 0.9,
        },
        Geometry::sized(300.0, 100.0, 80.0, 80.0),
        2,
    ));
    Project::from_scene("roundtrip", &scene)
}

#[test]
fn json_roundtrip_preserves_everything() {
    let project = sample_project();
    let json = serde_json::to_string_pretty(&project).unwrap();
    let back: Project = serde_json::from_str(&json).unwrap();
    assert_eq!(back, project);
}

#[test]
fn json_shape_matches_collaborator_contract() {
    let project = sample_project();
    let value: serde_json::Value = serde_json::to_value(&project).unwrap();

    assert_eq!(value["name"], "roundtrip");
    assert_eq!(value["canvas_width"], 800);
    assert_eq!(value["canvas_height"], 1200);
    assert_eq!(value["background_color"], "#FFFFFF");

    let elements = value["canvas_data"]["elements"].as_array().unwrap();
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0]["type"], "text");
    assert_eq!(elements[0]["id"], "title");
    assert_eq!(elements[0]["x"], 40.0);
    assert_eq!(elements[1]["type"], "shape");
    assert_eq!(elements[1]["shape"], "circle");
    assert_eq!(elements[1]["fill"], "#3B82F6");
    assert_eq!(elements[1]["z_index"], 2);
}

#[test]
fn template_canvas_data_hydrates_a_scene() {
    // Templates ship the same canvas_data.elements shape.
    let data: CanvasData = serde_json::from_str(
        r##"{"elements":[
            {"id":"tpl_bg","type":"shape","shape":"rectangle","fill":"#EEEEEE",
             "x":0.0,"y":0.0,"width":800.0,"height":600.0,"z_index":1}
        ]}"##,
    )
    .unwrap();
    assert_eq!(data.elements.len(), 1);
    let el = &data.elements[0];
    assert_eq!(el.id, ElementId::intern("tpl_bg"));
    assert!(!el.hidden); // defaults applied
    assert_eq!(el.geometry.rotation, 0.0);
}
