//! Raster export collaborator contract.
//!
//! The core does not rasterize. A collaborator-provided rasterizer is
//! handed only the canvas dimensions and background color; whether it
//! paints elements is its own concern and is deliberately outside this
//! contract.

use crate::model::{Color, Scene};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterParams {
    pub width: u32,
    pub height: u32,
    pub background: Color,
}

/// Parameters for a collaborator rasterizer.
pub fn raster_params(scene: &Scene) -> RasterParams {
    RasterParams {
        width: scene.canvas_width,
        height: scene.canvas_height,
        background: scene.background_color,
    }
}
