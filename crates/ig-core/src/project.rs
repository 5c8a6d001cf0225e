//! The project document — the shape exchanged with the persistence
//! collaborator. Templates share the same `canvas_data.elements` shape.
//!
//! Persistence, versioning, and project identity are entirely the
//! collaborator's responsibility; this module only defines the contract
//! and the Scene conversions.

use crate::model::{Color, Element, Scene};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasData {
    #[serde(default)]
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub background_color: Color,
    pub canvas_data: CanvasData,
}

impl Project {
    pub fn from_scene(name: impl Into<String>, scene: &Scene) -> Self {
        Self {
            name: name.into(),
            canvas_width: scene.canvas_width,
            canvas_height: scene.canvas_height,
            background_color: scene.background_color,
            canvas_data: CanvasData {
                elements: scene.elements.clone(),
            },
        }
    }

    pub fn into_scene(self) -> Scene {
        Scene {
            elements: self.canvas_data.elements,
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
            background_color: self.background_color,
        }
    }
}
