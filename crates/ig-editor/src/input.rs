//! Pointer input types and the screen → canvas mapping.

/// A discrete pointer event in screen coordinates.
///
/// `Release` carries no position on purpose: it may arrive from a global
/// listener anywhere on the page, and terminating the gesture must not
/// depend on where the pointer ended up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Release,
}

/// Screen → canvas transform: the canvas container's screen origin plus
/// the current zoom factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasView {
    pub zoom: f32,
    pub origin_x: f32,
    pub origin_y: f32,
}

impl CanvasView {
    pub fn new(zoom: f32, origin_x: f32, origin_y: f32) -> Self {
        Self {
            zoom,
            origin_x,
            origin_y,
        }
    }

    /// Map a screen point to canvas-space units.
    pub fn to_canvas(&self, sx: f32, sy: f32) -> (f32, f32) {
        (
            (sx - self.origin_x) / self.zoom,
            (sy - self.origin_y) / self.zoom,
        )
    }
}

impl Default for CanvasView {
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
}

/// One of the eight compass-named resize handles on a selected element.
///
/// The handle name's character set determines which axes a resize
/// affects: `e` grows width with the pointer, `w` against it, `s` grows
/// height with it, `n` against it. Corner handles combine two rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    N,
    S,
    E,
    W,
    Ne,
    Nw,
    Se,
    Sw,
}

impl Handle {
    pub const ALL: [Handle; 8] = [
        Handle::N,
        Handle::S,
        Handle::E,
        Handle::W,
        Handle::Ne,
        Handle::Nw,
        Handle::Se,
        Handle::Sw,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Handle::N => "n",
            Handle::S => "s",
            Handle::E => "e",
            Handle::W => "w",
            Handle::Ne => "ne",
            Handle::Nw => "nw",
            Handle::Se => "se",
            Handle::Sw => "sw",
        }
    }

    pub fn affects_east(self) -> bool {
        matches!(self, Handle::E | Handle::Ne | Handle::Se)
    }

    pub fn affects_west(self) -> bool {
        matches!(self, Handle::W | Handle::Nw | Handle::Sw)
    }

    pub fn affects_south(self) -> bool {
        matches!(self, Handle::S | Handle::Se | Handle::Sw)
    }

    pub fn affects_north(self) -> bool {
        matches!(self, Handle::N | Handle::Ne | Handle::Nw)
    }
}
