//! SVG export: deterministic Scene → vector document serialization.
//!
//! A pure mapping — no mutation, no I/O. The output is a full-canvas
//! background rectangle followed by every visible element in paint order
//! (ascending `z_index`, insertion order on ties). Charts and icons have
//! no literal vector form; they are emitted as opaque placeholder groups
//! so the document structure still accounts for them.

use crate::id::ElementId;
use crate::model::{Element, ElementKind, Scene, ShapeKind};
use std::fmt::Write;
use thiserror::Error;

/// Export failure. A malformed scene must surface as an error, never as a
/// silently empty document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("element {id} has non-finite geometry")]
    NonFiniteGeometry { id: ElementId },
    #[error("canvas has zero area ({width}x{height})")]
    EmptyCanvas { width: u32, height: u32 },
}

/// Serialize a scene to a standalone SVG document.
pub fn export_svg(scene: &Scene) -> Result<String, ExportError> {
    if scene.canvas_width == 0 || scene.canvas_height == 0 {
        return Err(ExportError::EmptyCanvas {
            width: scene.canvas_width,
            height: scene.canvas_height,
        });
    }

    let visible = scene.visible_sorted();
    log::trace!(
        "export_svg: {} visible of {} elements",
        visible.len(),
        scene.elements.len()
    );

    let w = scene.canvas_width;
    let h = scene.canvas_height;
    let mut out = String::with_capacity(1024);
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
    );
    let _ = writeln!(
        out,
        "  <rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"{}\" />",
        scene.background_color.to_hex()
    );

    for element in visible {
        emit_element(&mut out, element)?;
    }

    out.push_str("</svg>\n");
    Ok(out)
}

fn emit_element(out: &mut String, element: &Element) -> Result<(), ExportError> {
    let g = &element.geometry;
    let (w, h) = element.size();
    if ![g.x, g.y, w, h, g.rotation].iter().all(|v| v.is_finite()) {
        return Err(ExportError::NonFiniteGeometry { id: element.id });
    }

    let rotate = rotation_attr(element, w, h);

    match &element.kind {
        ElementKind::Text {
            content,
            font,
            color,
        } => {
            // Baseline sits one font-size below the element origin.
            let _ = writeln!(
                out,
                "  <text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"{}\" fill=\"{}\"{rotate}>{}</text>",
                num(g.x),
                num(g.y + font.size),
                escape_attr(&font.family),
                num(font.size),
                font.weight,
                color.to_hex(),
                escape_text(content)
            );
        }
        ElementKind::Shape {
            shape,
            fill,
            stroke,
            stroke_width,
            corner_radius,
            opacity,
        } => {
            let stroke_attrs = match stroke {
                Some(s) => format!(
                    " stroke=\"{}\" stroke-width=\"{}\"",
                    s.to_hex(),
                    num(*stroke_width)
                ),
                None => String::new(),
            };
            match shape {
                ShapeKind::Rectangle => {
                    let _ = writeln!(
                        out,
                        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{}\" opacity=\"{}\"{stroke_attrs}{rotate} />",
                        num(g.x),
                        num(g.y),
                        num(w),
                        num(h),
                        num(*corner_radius),
                        fill.to_hex(),
                        num(*opacity)
                    );
                }
                ShapeKind::Circle => {
                    // Centered in the bounding box, radius from the
                    // smaller dimension.
                    let _ = writeln!(
                        out,
                        "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" opacity=\"{}\"{stroke_attrs}{rotate} />",
                        num(g.x + w / 2.0),
                        num(g.y + h / 2.0),
                        num(w.min(h) / 2.0),
                        fill.to_hex(),
                        num(*opacity)
                    );
                }
                ShapeKind::Line => {
                    // Horizontal run of `width`; the fill color doubles as
                    // the stroke when no explicit stroke is set.
                    let color = stroke.unwrap_or(*fill);
                    let _ = writeln!(
                        out,
                        "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\" opacity=\"{}\"{rotate} />",
                        num(g.x),
                        num(g.y),
                        num(g.x + w),
                        num(g.y),
                        color.to_hex(),
                        num(*stroke_width),
                        num(*opacity)
                    );
                }
            }
        }
        ElementKind::Image { src } => {
            let _ = writeln!(
                out,
                "  <image x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" href=\"{}\"{rotate} />",
                num(g.x),
                num(g.y),
                num(w),
                num(h),
                escape_attr(src)
            );
        }
        // Opaque placeholders: the document accounts for the element's
        // footprint without claiming render fidelity.
        ElementKind::Icon { name, color } => {
            let _ = writeln!(
                out,
                "  <g data-kind=\"icon\" data-name=\"{}\"{rotate}><rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"{}\" /></g>",
                escape_attr(name),
                num(g.x),
                num(g.y),
                num(w),
                num(h),
                color.to_hex()
            );
        }
        ElementKind::Chart { chart, .. } => {
            let _ = writeln!(
                out,
                "  <g data-kind=\"chart\" data-chart=\"{chart:?}\"{rotate}><rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"#CCCCCC\" /></g>",
                num(g.x),
                num(g.y),
                num(w),
                num(h)
            );
        }
    }
    Ok(())
}

/// `transform="rotate(...)"` about the element center, or nothing.
fn rotation_attr(element: &Element, w: f32, h: f32) -> String {
    let r = element.geometry.rotation;
    if r == 0.0 {
        String::new()
    } else {
        let g = &element.geometry;
        format!(
            " transform=\"rotate({} {} {})\"",
            num(r),
            num(g.x + w / 2.0),
            num(g.y + h / 2.0)
        )
    }
}

/// Format a number without a trailing `.0` for whole values.
fn num(v: f32) -> String {
    if v.fract() == 0.0 && v.abs() < 1e9 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
