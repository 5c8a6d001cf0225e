pub mod hit;
pub mod id;
pub mod model;
pub mod project;
pub mod raster;
pub mod svg;

pub use hit::element_at;
pub use id::ElementId;
pub use model::*;
pub use project::{CanvasData, Project};
pub use raster::{RasterParams, raster_params};
pub use svg::{ExportError, export_svg};
