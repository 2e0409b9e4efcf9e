//! Standalone SVG rendering of the QFL diagram.
//!
//! Produces the same layered picture as the interactive view: the three
//! tinted block overlays underneath, the seven field polygons on top with
//! the classified field emphasized, the triangle outline, axis labels, and
//! the live sample point. All geometry goes through one
//! [`TriangleFrame`], so outlines and the point share a coordinate space.

use crate::classify::classify;
use crate::composition::Composition;
use crate::geometry::TriangleFrame;
use crate::taxonomy::TAXONOMY;
use std::fmt::Write as _;

/// Default viewport edge length, in pixels.
pub const DEFAULT_SIZE: f64 = 320.0;

/// Rendering options. `size` controls scale only, never classification.
#[derive(Debug, Clone, Copy)]
pub struct SvgOptions {
    pub size: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self { size: DEFAULT_SIZE }
    }
}

/// Render the diagram for a composition into an SVG document.
///
/// An empty composition renders the triangle and fields with no sample
/// point and no emphasized field.
pub fn render(composition: &Composition, options: &SvgOptions) -> String {
    let frame = TriangleFrame::new(options.size);
    let active = classify(composition);
    let active_block = active.map(|id| id.field().block);

    let mut svg = String::new();
    let size = options.size;
    let _ = write!(
        svg,
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}" style="background:white">"##
    );
    svg.push('\n');

    // Block overlays underneath everything else.
    for block in TAXONOMY.blocks() {
        let is_active = active_block == Some(block.id);
        let (fill_opacity, stroke_width, stroke_opacity, dash) = if is_active {
            (0.12, 3.0, 0.4, "none")
        } else {
            (0.05, 1.0, 0.15, "8 4")
        };
        let _ = write!(
            svg,
            r##"  <polygon points="{}" fill="{}" fill-opacity="{}" stroke="{}" stroke-width="{}" stroke-opacity="{}" stroke-dasharray="{}"/>"##,
            polygon_points(&frame, block.outline),
            block.color,
            fill_opacity,
            block.color,
            stroke_width,
            stroke_opacity,
            dash,
        );
        svg.push('\n');
        let anchor = frame.project(block.label_anchor[0], block.label_anchor[1], block.label_anchor[2]);
        let _ = write!(
            svg,
            r##"  <text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="9" letter-spacing="3" fill="#94a3b8" opacity="{}">{}</text>"##,
            anchor.x,
            anchor.y,
            if is_active { 0.4 } else { 0.15 },
            block.name.to_uppercase(),
        );
        svg.push('\n');
    }

    // Field polygons; the classified field is emphasized.
    for field in TAXONOMY.fields() {
        let is_active = active == Some(field.id);
        let (fill_opacity, stroke_width, stroke_opacity, dash) = if is_active {
            (0.85, 2.0, 0.7, "none")
        } else {
            (0.05, 0.5, 0.1, "2 2")
        };
        let _ = write!(
            svg,
            r##"  <polygon points="{}" fill="{}" fill-opacity="{}" stroke="{}" stroke-width="{}" stroke-opacity="{}" stroke-dasharray="{}"/>"##,
            polygon_points(&frame, field.outline),
            field.fill,
            fill_opacity,
            field.stroke,
            stroke_width,
            stroke_opacity,
            dash,
        );
        svg.push('\n');
        if is_active {
            let anchor =
                frame.project(field.label_anchor[0], field.label_anchor[1], field.label_anchor[2]);
            let _ = write!(
                svg,
                r##"  <text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="7" font-weight="bold" fill="#0f172a">{}</text>"##,
                anchor.x,
                anchor.y,
                field.name.to_uppercase(),
            );
            svg.push('\n');
        }
    }

    // Triangle outline and axis labels.
    let apex = frame.apex();
    let base_f = frame.base_feldspar();
    let base_l = frame.base_lithic();
    let _ = write!(
        svg,
        r##"  <path d="M {:.2},{:.2} L {:.2},{:.2} L {:.2},{:.2} Z" fill="none" stroke="#0f172a" stroke-width="2.5" stroke-linejoin="round"/>"##,
        apex.x, apex.y, base_f.x, base_f.y, base_l.x, base_l.y,
    );
    svg.push('\n');
    let _ = write!(
        svg,
        r##"  <text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="11" font-weight="bold" fill="#1e293b">QUARTZ (Q)</text>"##,
        apex.x,
        apex.y - 18.0,
    );
    svg.push('\n');
    let _ = write!(
        svg,
        r##"  <text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="11" font-weight="bold" fill="#1e293b">FELDSPAR (F)</text>"##,
        base_f.x - 45.0,
        base_f.y + 20.0,
    );
    svg.push('\n');
    let _ = write!(
        svg,
        r##"  <text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="11" font-weight="bold" fill="#1e293b">LITHICS (L)</text>"##,
        base_l.x + 45.0,
        base_l.y + 20.0,
    );
    svg.push('\n');

    // Live sample point, only for a real composition.
    if let Some(normalized) = composition.normalized() {
        let point = frame.project(normalized.q, normalized.f, normalized.l);
        let _ = write!(
            svg,
            r##"  <circle cx="{:.2}" cy="{:.2}" r="14" fill="#10b981" fill-opacity="0.2"/>"##,
            point.x, point.y,
        );
        svg.push('\n');
        let _ = write!(
            svg,
            r##"  <circle cx="{:.2}" cy="{:.2}" r="6" fill="#059669" stroke="white" stroke-width="3"/>"##,
            point.x, point.y,
        );
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

/// Project an outline into the frame and format it as an SVG points list.
fn polygon_points(frame: &TriangleFrame, outline: &[[f64; 3]]) -> String {
    outline
        .iter()
        .map(|[q, f, l]| {
            let p = frame.project(*q, *f, *l);
            format!("{:.2},{:.2}", p.x, p.y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Name of the emphasized field for a composition, if any.
pub fn active_field_name(composition: &Composition) -> Option<&'static str> {
    classify(composition).map(|id| id.field().name)
}
