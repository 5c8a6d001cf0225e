//! Core data model for infographic scenes.
//!
//! A scene is a flat, ordered list of elements over a fixed-size canvas.
//! Elements carry a shared geometry/visibility base plus a per-kind style
//! payload (`ElementKind`), so consumers like the SVG exporter get
//! compile-time exhaustiveness over the kind set. Paint order is governed
//! by `z_index`, which is a relative ordering only — values need not be
//! dense, unique, or positive.

use crate::id::ElementId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
/// Serialized as a hex string (`#RRGGBB` / `#RRGGBBAA`) because that is
/// the form the project document exchanges with collaborators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Helper to parse a single hex digit.
fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        match bytes.len() {
            3 | 4 => {
                let r = hex_val(bytes[0])?;
                let g = hex_val(bytes[1])?;
                let b = hex_val(bytes[2])?;
                let a = if bytes.len() == 4 {
                    hex_val(bytes[3])?
                } else {
                    15
                };
                Some(Self::rgba(
                    (r * 17) as f32 / 255.0,
                    (g * 17) as f32 / 255.0,
                    (b * 17) as f32 / 255.0,
                    (a * 17) as f32 / 255.0,
                ))
            }
            6 | 8 => {
                let r = hex_val(bytes[0])? << 4 | hex_val(bytes[1])?;
                let g = hex_val(bytes[2])? << 4 | hex_val(bytes[3])?;
                let b = hex_val(bytes[4])? << 4 | hex_val(bytes[5])?;
                let a = if bytes.len() == 8 {
                    hex_val(bytes[6])? << 4 | hex_val(bytes[7])?
                } else {
                    255
                };
                Some(Self::rgba(
                    r as f32 / 255.0,
                    g as f32 / 255.0,
                    b as f32 / 255.0,
                    a as f32 / 255.0,
                ))
            }
            _ => None,
        }
    }

    /// Emit as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let r = (self.r * 255.0).round() as u8;
        let g = (self.g * 255.0).round() as u8;
        let b = (self.b * 255.0).round() as u8;
        let a = (self.a * 255.0).round() as u8;
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color: {s:?}")))
    }
}

// ─── Geometry ────────────────────────────────────────────────────────────

/// Element placement in canvas-space units (independent of zoom).
///
/// `width`/`height` are optional; kinds that omit them fall back to
/// per-kind defaults via [`ElementKind::default_size`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    /// Rotation in degrees around the element origin.
    #[serde(default)]
    pub rotation: f32,
}

impl Geometry {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: None,
            height: None,
            rotation: 0.0,
        }
    }

    pub fn sized(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: Some(width),
            height: Some(height),
            rotation: 0.0,
        }
    }

    /// Resolve optional dimensions against the kind's defaults.
    pub fn size_or_default(&self, kind: &ElementKind) -> (f32, f32) {
        let (dw, dh) = kind.default_size();
        (self.width.unwrap_or(dw), self.height.unwrap_or(dh))
    }
}

// ─── Fonts ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub weight: u16, // 100..900
    pub size: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "Inter".into(),
            weight: 400,
            size: 16.0,
        }
    }
}

// ─── Element kinds ───────────────────────────────────────────────────────

/// Shape sub-kind for `ElementKind::Shape`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Circle,
    Line,
}

/// Chart sub-kind. Charts are opaque to the vector exporter; the model
/// still carries the data so duplication and persistence round-trip it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Pie,
}

/// The closed set of element kinds, each with its disjoint style payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    Text {
        content: String,
        #[serde(default)]
        font: FontSpec,
        #[serde(default = "default_text_color")]
        color: Color,
    },
    Shape {
        #[serde(default)]
        shape: ShapeKind,
        fill: Color,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke: Option<Color>,
        #[serde(default = "default_stroke_width")]
        stroke_width: f32,
        #[serde(default)]
        corner_radius: f32,
        #[serde(default = "default_opacity")]
        opacity: f32,
    },
    Icon {
        name: String,
        #[serde(default = "default_text_color")]
        color: Color,
    },
    Image {
        /// Remote URL or inline data reference, stored verbatim from the
        /// upload collaborator.
        src: String,
    },
    Chart {
        #[serde(default)]
        chart: ChartKind,
        #[serde(default)]
        series: Vec<f32>,
    },
}

fn default_text_color() -> Color {
    Color::BLACK
}

fn default_stroke_width() -> f32 {
    1.0
}

fn default_opacity() -> f32 {
    1.0
}

impl ElementKind {
    /// Default dimensions used when `Geometry.width`/`height` are absent.
    pub fn default_size(&self) -> (f32, f32) {
        match self {
            ElementKind::Text { .. } => (200.0, 40.0),
            ElementKind::Shape { .. } => (100.0, 100.0),
            ElementKind::Icon { .. } => (64.0, 64.0),
            ElementKind::Image { .. } => (200.0, 150.0),
            ElementKind::Chart { .. } => (300.0, 200.0),
        }
    }

    /// Prefix used for freshly assigned IDs (`text_3`, `shape_4`, …).
    pub fn id_prefix(&self) -> &'static str {
        match self {
            ElementKind::Text { .. } => "text",
            ElementKind::Shape { .. } => "shape",
            ElementKind::Icon { .. } => "icon",
            ElementKind::Image { .. } => "image",
            ElementKind::Chart { .. } => "chart",
        }
    }
}

// ─── Elements ────────────────────────────────────────────────────────────

/// The atomic scene unit: a kind payload plus shared placement and flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    #[serde(flatten)]
    pub kind: ElementKind,
    #[serde(flatten)]
    pub geometry: Geometry,
    pub z_index: i64,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub locked: bool,
}

impl Element {
    pub fn new(id: ElementId, kind: ElementKind, geometry: Geometry, z_index: i64) -> Self {
        Self {
            id,
            kind,
            geometry,
            z_index,
            hidden: false,
            locked: false,
        }
    }

    /// Resolved (width, height) for this element.
    pub fn size(&self) -> (f32, f32) {
        self.geometry.size_or_default(&self.kind)
    }

    /// Merge a patch into this element. No cross-field validation is
    /// performed; callers are responsible for sane values.
    pub fn apply(&mut self, patch: ElementPatch) {
        if let Some(x) = patch.x {
            self.geometry.x = x;
        }
        if let Some(y) = patch.y {
            self.geometry.y = y;
        }
        if let Some(w) = patch.width {
            self.geometry.width = Some(w);
        }
        if let Some(h) = patch.height {
            self.geometry.height = Some(h);
        }
        if let Some(r) = patch.rotation {
            self.geometry.rotation = r;
        }
        if let Some(z) = patch.z_index {
            self.z_index = z;
        }
        if let Some(hidden) = patch.hidden {
            self.hidden = hidden;
        }
        if let Some(locked) = patch.locked {
            self.locked = locked;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
    }
}

/// A merge patch for [`Element::apply`]: only `Some` fields are written.
/// Style edits replace the whole kind payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementPatch {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub rotation: Option<f32>,
    pub z_index: Option<i64>,
    pub hidden: Option<bool>,
    pub locked: Option<bool>,
    pub kind: Option<ElementKind>,
}

impl ElementPatch {
    pub fn position(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    pub fn resize(width: f32, height: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Default::default()
        }
    }
}

// ─── Scene ───────────────────────────────────────────────────────────────

/// The complete in-memory representation of one editable canvas.
///
/// Invariant: element IDs are unique within a scene. `z_index` values are
/// not required to be dense or unique; ties paint in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub elements: Vec<Element>,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub background_color: Color,
}

impl Scene {
    pub fn new(canvas_width: u32, canvas_height: u32, background_color: Color) -> Self {
        Self {
            elements: Vec::new(),
            canvas_width,
            canvas_height,
            background_color,
        }
    }

    /// The z-index assigned to the next added element: count + 1.
    pub fn next_z_index(&self) -> i64 {
        self.elements.len() as i64 + 1
    }

    pub fn find(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn find_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Remove an element by id. No-op (returns `None`) for unknown ids.
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let pos = self.elements.iter().position(|e| e.id == id)?;
        Some(self.elements.remove(pos))
    }

    pub fn max_z_index(&self) -> Option<i64> {
        self.elements.iter().map(|e| e.z_index).max()
    }

    pub fn min_z_index(&self) -> Option<i64> {
        self.elements.iter().map(|e| e.z_index).min()
    }

    /// Visible elements in paint order: ascending `z_index`, ties broken
    /// by insertion order (stable sort), hidden elements filtered out.
    pub fn visible_sorted(&self) -> Vec<&Element> {
        let mut visible: Vec<&Element> = self.elements.iter().filter(|e| !e.hidden).collect();
        visible.sort_by_key(|e| e.z_index);
        visible
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(800, 600, Color::WHITE)
    }
}
