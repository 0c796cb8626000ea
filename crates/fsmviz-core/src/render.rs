// Rust guideline compliant 2026-02-06

//! PDF rendering of the automaton graph.
//!
//! Computes a seeded spring layout, draws nodes, directed edges with
//! arrowheads, and edge labels onto a single page sized to the drawn
//! content, and exports the page as a PDF file.

use crate::{layout, AutomatonGraph, Config, NodeRole, Result};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    calculate_points_for_circle, BuiltinFont, Color, IndirectFontRef, Line, Mm,
    PdfDocument, PdfLayerReference, Point, Polygon, Rgb,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Drawing canvas the layout square is mapped onto, letter landscape.
const CANVAS_WIDTH_MM: f32 = 279.4;
const CANVAS_HEIGHT_MM: f32 = 215.9;

/// Padding kept around the content bounding box when cropping the page.
const CROP_MARGIN_MM: f32 = 12.0;

/// Arrowhead dimensions.
const ARROW_LENGTH_MM: f32 = 4.0;
const ARROW_HALF_WIDTH_MM: f32 = 1.6;

/// One PostScript point in millimeters.
const PT_TO_MM: f32 = 0.352_778;

/// Visual parameters for the rendered diagram.
#[derive(Debug, Clone)]
pub struct RenderStyle {
    /// Node circle radius in millimeters.
    pub node_radius_mm: f32,
    /// Font size for state names, in points.
    pub node_font_size: f32,
    /// Font size for edge labels, in points.
    pub label_font_size: f32,
    /// Seed for the spring layout RNG.
    pub layout_seed: u64,
    /// Number of spring layout iterations.
    pub layout_iterations: usize,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            node_radius_mm: 6.0,
            node_font_size: 10.0,
            label_font_size: 9.0,
            layout_seed: 42,
            layout_iterations: 50,
        }
    }
}

impl RenderStyle {
    /// Builds a style from the loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            node_radius_mm: config.node_radius_mm,
            node_font_size: config.node_font_size,
            label_font_size: config.label_font_size,
            layout_seed: config.layout_seed,
            layout_iterations: config.layout_iterations,
        }
    }
}

/// Renders the graph as a PDF diagram at the given path.
///
/// Node coloring: the initial state is green, final states red, everything
/// else light blue; a state that is both initial and final is green. Edges
/// are gray with arrowheads, edge labels blue. The page is cropped to the
/// content bounding box plus a fixed margin.
///
/// The output directory is not created here; exporting into a missing
/// directory fails.
///
/// # Arguments
///
/// * `graph` - The automaton graph to draw
/// * `style` - Visual parameters
/// * `initial` - Initial state identifier (colors one node green)
/// * `finals` - Final state identifiers (color matching nodes red)
/// * `path` - Output PDF path
///
/// # Returns
///
/// Ok after the file has been written.
///
/// # Errors
///
/// Returns an error if the output file cannot be created or the PDF cannot
/// be serialized.
pub fn render_pdf(
    graph: &AutomatonGraph,
    style: &RenderStyle,
    initial: &str,
    finals: &[String],
    path: &Path,
) -> Result<()> {
    let positions = layout::spring_layout(graph, style.layout_iterations, style.layout_seed);
    let page = place_on_page(&positions, style.node_radius_mm);

    let (doc, page_idx, layer_idx) =
        PdfDocument::new("automata", Mm(page.width_mm), Mm(page.height_mm), "diagram");
    let layer = doc.get_page(page_idx).get_layer(layer_idx);
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    draw_edges(graph, &layer, &font, style, &page.coords);
    draw_nodes(graph, &layer, &font, style, &page.coords, initial, finals);

    doc.save(&mut BufWriter::new(File::create(path)?))?;
    Ok(())
}

/// Page geometry: cropped page dimensions and per-node page coordinates.
struct PageGeometry {
    width_mm: f32,
    height_mm: f32,
    coords: Vec<(f32, f32)>,
}

/// Maps layout coordinates (centered unit square) onto the canvas, then
/// crops the page to the occupied region plus margin.
fn place_on_page(positions: &[(f64, f64)], node_radius_mm: f32) -> PageGeometry {
    let margin = CROP_MARGIN_MM + node_radius_mm;

    if positions.is_empty() {
        return PageGeometry {
            width_mm: 2.0 * margin,
            height_mm: 2.0 * margin,
            coords: Vec::new(),
        };
    }

    let scaled: Vec<(f32, f32)> = positions
        .iter()
        .map(|&(x, y)| {
            (
                (x as f32 + 1.0) / 2.0 * (CANVAS_WIDTH_MM - 2.0 * margin),
                (y as f32 + 1.0) / 2.0 * (CANVAS_HEIGHT_MM - 2.0 * margin),
            )
        })
        .collect();

    let min_x = scaled.iter().map(|p| p.0).fold(f32::INFINITY, f32::min);
    let max_x = scaled.iter().map(|p| p.0).fold(f32::NEG_INFINITY, f32::max);
    let min_y = scaled.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
    let max_y = scaled.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);

    let coords = scaled
        .iter()
        .map(|&(x, y)| (x - min_x + margin, y - min_y + margin))
        .collect();

    PageGeometry {
        width_mm: (max_x - min_x) + 2.0 * margin,
        height_mm: (max_y - min_y) + 2.0 * margin,
        coords,
    }
}

/// Draws all edges: gray connector lines with arrowheads, blue labels.
fn draw_edges(
    graph: &AutomatonGraph,
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    style: &RenderStyle,
    coords: &[(f32, f32)],
) {
    let gray = Color::Rgb(Rgb::new(0.5, 0.5, 0.5, None));
    let blue = Color::Rgb(Rgb::new(0.0, 0.0, 1.0, None));

    for (from, to, label) in graph.edges() {
        let (sx, sy) = coords[from.index()];
        let (tx, ty) = coords[to.index()];

        layer.set_outline_color(gray.clone());
        layer.set_outline_thickness(1.0);

        if from == to {
            draw_self_loop(layer, style, sx, sy);
            layer.set_fill_color(blue.clone());
            layer.use_text(
                label.combined.clone(),
                style.label_font_size,
                Mm(sx),
                Mm(sy + style.node_radius_mm * 2.6 + 1.5),
                font,
            );
            continue;
        }

        let dx = tx - sx;
        let dy = ty - sy;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist <= 2.0 * style.node_radius_mm {
            // Overlapping nodes, nothing sensible to draw between them.
            continue;
        }
        let ux = dx / dist;
        let uy = dy / dist;

        // Clip the connector at the node circles.
        let start = (sx + ux * style.node_radius_mm, sy + uy * style.node_radius_mm);
        let end = (tx - ux * style.node_radius_mm, ty - uy * style.node_radius_mm);

        let line = Line {
            points: vec![
                (Point::new(Mm(start.0), Mm(start.1)), false),
                (Point::new(Mm(end.0), Mm(end.1)), false),
            ],
            is_closed: false,
        };
        layer.add_line(line);

        draw_arrowhead(layer, &gray, end, (ux, uy));

        // Label sits at 30%/70% between the node centers, nearer the
        // destination.
        let lx = sx * 0.3 + tx * 0.7;
        let ly = sy * 0.3 + ty * 0.7;
        layer.set_fill_color(blue.clone());
        layer.use_text(
            label.combined.clone(),
            style.label_font_size,
            Mm(lx),
            Mm(ly),
            font,
        );
    }
}

/// Draws a filled triangular arrowhead whose tip sits at `tip`, pointing
/// along the unit vector `dir`.
fn draw_arrowhead(layer: &PdfLayerReference, color: &Color, tip: (f32, f32), dir: (f32, f32)) {
    let (ux, uy) = dir;
    let base_x = tip.0 - ux * ARROW_LENGTH_MM;
    let base_y = tip.1 - uy * ARROW_LENGTH_MM;
    // Perpendicular to the edge direction.
    let px = -uy;
    let py = ux;

    let polygon = Polygon {
        rings: vec![vec![
            (Point::new(Mm(tip.0), Mm(tip.1)), false),
            (
                Point::new(
                    Mm(base_x + px * ARROW_HALF_WIDTH_MM),
                    Mm(base_y + py * ARROW_HALF_WIDTH_MM),
                ),
                false,
            ),
            (
                Point::new(
                    Mm(base_x - px * ARROW_HALF_WIDTH_MM),
                    Mm(base_y - py * ARROW_HALF_WIDTH_MM),
                ),
                false,
            ),
        ]],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    };
    layer.set_fill_color(color.clone());
    layer.add_polygon(polygon);
}

/// Draws a self-loop as a small stroked circle resting on top of the node.
fn draw_self_loop(layer: &PdfLayerReference, style: &RenderStyle, x: f32, y: f32) {
    let loop_radius = style.node_radius_mm * 0.8;
    let center_y = y + style.node_radius_mm + loop_radius * 0.8;
    let polygon = Polygon {
        rings: vec![calculate_points_for_circle(
            Mm(loop_radius),
            Mm(x),
            Mm(center_y),
        )],
        mode: PaintMode::Stroke,
        winding_order: WindingOrder::NonZero,
    };
    layer.add_polygon(polygon);
}

/// Draws all nodes as filled colored circles with centered state names.
fn draw_nodes(
    graph: &AutomatonGraph,
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    style: &RenderStyle,
    coords: &[(f32, f32)],
    initial: &str,
    finals: &[String],
) {
    let black = Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None));

    for idx in graph.node_indices() {
        let name = graph.node_name(idx);
        let (x, y) = coords[idx.index()];

        let (r, g, b) = NodeRole::classify(name, initial, finals).color();
        let polygon = Polygon {
            rings: vec![calculate_points_for_circle(
                Mm(style.node_radius_mm),
                Mm(x),
                Mm(y),
            )],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        };
        layer.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
        layer.add_polygon(polygon);

        // Approximate centering for the builtin Helvetica font.
        let text_width_mm = name.chars().count() as f32 * style.node_font_size * 0.6 * PT_TO_MM;
        let text_height_mm = style.node_font_size * PT_TO_MM;
        layer.set_fill_color(black.clone());
        layer.use_text(
            name.to_string(),
            style.node_font_size,
            Mm(x - text_width_mm / 2.0),
            Mm(y - text_height_mm / 3.0),
            font,
        );
    }
}
