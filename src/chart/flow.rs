//! Two-sided proportional flow diagram: curved ribbons from input categories
//! to the center and on to output categories, stroke width encoding each
//! category's share of its side.

use crate::chart::format::ValueFormat;
use crate::chart::types::{FlowEndpoint, RenderedImage};
use crate::color::{Color, ColorRamp};
use crate::error::{RenderError, RenderResult};
use crate::raster::canvas::PixelCanvas;
use crate::raster::shape;
use crate::raster::text::{Align, Baseline, TextOverlay, TextSize};
use crate::style::FlowStyle;

/// Captions for one flow render; all composed by the caller.
#[derive(Debug, Clone)]
pub struct FlowSpec {
    pub header: String,
    pub date_line: String,
    pub caption: String,
    pub format: ValueFormat,
}

#[derive(Clone, Copy, PartialEq)]
enum Side {
    Input,
    Output,
}

/// Render the diagram and write each active category's percentage back onto
/// its record. Categories are drawn in the order given (canonical order, not
/// sorted by value) so successive renders stay frame-to-frame comparable.
/// Zero-valued categories draw nothing and keep `percentage == None`.
pub fn render_flow(
    inputs: &mut [FlowEndpoint],
    outputs: &mut [FlowEndpoint],
    spec: &FlowSpec,
    style: &FlowStyle,
) -> RenderResult<RenderedImage> {
    let canvas = paint_flow(inputs, outputs, spec, style)?;
    let png_bytes = canvas.encode_png()?;
    Ok(RenderedImage {
        png_bytes,
        width: style.width,
        height: style.height,
    })
}

fn paint_flow(
    inputs: &mut [FlowEndpoint],
    outputs: &mut [FlowEndpoint],
    spec: &FlowSpec,
    style: &FlowStyle,
) -> RenderResult<PixelCanvas> {
    let in_total = side_total(inputs, "input")?;
    let out_total = side_total(outputs, "output")?;
    log::debug!(
        "flow: {} inputs totalling {}, {} outputs totalling {}",
        inputs.len(),
        in_total,
        outputs.len(),
        out_total
    );

    let shades = if style.gradient.len() >= 2 {
        ColorRamp::evenly(&style.gradient).sample(style.gradient_samples)?
    } else {
        vec![style.ink; style.gradient_samples.max(1)]
    };

    let mut canvas = PixelCanvas::new(style.width, style.height)?;
    canvas.clear(style.background);

    let cx = style.width as f32 / 2.0;
    TextOverlay::draw(
        &mut canvas,
        &spec.header,
        cx as i32,
        30,
        TextSize::Heading,
        style.ink,
        Align::Center,
        Baseline::Middle,
    );
    TextOverlay::draw(
        &mut canvas,
        &spec.date_line,
        cx as i32,
        50,
        TextSize::Body,
        style.ink,
        Align::Center,
        Baseline::Middle,
    );
    TextOverlay::draw(
        &mut canvas,
        &spec.caption,
        cx as i32,
        style.height as i32 - 20,
        TextSize::Body,
        style.ink,
        Align::Center,
        Baseline::Middle,
    );

    draw_side(&mut canvas, inputs, in_total, Side::Input, spec, style, &shades);
    draw_side(&mut canvas, outputs, out_total, Side::Output, spec, style, &shades);
    Ok(canvas)
}

/// Sum of the positive values on a side. A side with no drawable categories
/// cannot be laid out proportionally.
fn side_total(entries: &[FlowEndpoint], side: &str) -> RenderResult<f64> {
    let total: f64 = entries.iter().filter(|e| e.value > 0.0).map(|e| e.value).sum();
    if total <= 0.0 {
        return Err(RenderError::empty_side(format!(
            "{} side has no positive values",
            side
        )));
    }
    Ok(total)
}

fn draw_side(
    canvas: &mut PixelCanvas,
    entries: &mut [FlowEndpoint],
    total: f64,
    side: Side,
    spec: &FlowSpec,
    style: &FlowStyle,
    shades: &[Color],
) {
    let cx = style.width as f32 / 2.0;
    let cy = style.height as f32 / 2.0;
    let grad_x0 = cx - style.half_width;
    let grad_x1 = cx + style.half_width;

    let active = entries.iter().filter(|e| e.value > 0.0).count();
    // A single category gets no gap and sits centered; the gap budget only
    // spreads across count-1 gaps when there is more than one.
    let gap = if active > 1 {
        style.gap_budget / (active - 1) as f32
    } else {
        0.0
    };
    let used_gap = gap * active.saturating_sub(1) as f32;

    // The labeled anchor column fans out with gaps; the center column stacks
    // segments tight so ribbons merge into one trunk.
    let mut outer_y = cy - style.extent / 2.0 - used_gap / 2.0;
    let mut inner_y = cy - style.extent / 2.0;

    for entry in entries.iter_mut().filter(|e| e.value > 0.0) {
        let pct = entry.value / total * 100.0;
        entry.percentage = Some(pct);
        // Segment half-extent in pixels; percentages sum to 100, so the
        // segments exactly fill the side's vertical extent.
        let seg = pct as f32 * style.extent / 200.0;

        outer_y += seg;
        inner_y += seg;

        match side {
            Side::Input => {
                let x1 = cx - style.half_width;
                let width = 2.0 * seg + 0.25;
                shape::stroke_bezier(
                    canvas,
                    (x1, outer_y),
                    (x1 + style.half_width / 2.0, outer_y),
                    (cx - style.half_width / 2.0, inner_y),
                    (cx, inner_y),
                    width,
                    shades,
                    grad_x0,
                    grad_x1,
                );
                // Notch a direction arrow out of the ribbon root.
                shape::fill_polygon(
                    canvas,
                    &[(x1, outer_y - seg), (x1 + seg, outer_y), (x1, outer_y + seg)],
                    style.background,
                );
                draw_labels(canvas, entry, pct, x1, outer_y, side, spec, style);
            }
            Side::Output => {
                let x2 = cx + style.half_width;
                let width = (pct as f32 * style.out_scale).max(0.25);
                shape::stroke_bezier(
                    canvas,
                    (cx, inner_y),
                    (cx + style.half_width / 2.0, inner_y),
                    (x2 - style.half_width / 2.0, outer_y),
                    (x2, outer_y),
                    width,
                    shades,
                    grad_x0,
                    grad_x1,
                );
                let s = seg + style.arrow_pad;
                shape::fill_polygon(
                    canvas,
                    &[
                        (x2, outer_y - s),
                        (x2 - s, outer_y - s),
                        (x2, outer_y),
                        (x2 - s, outer_y + s),
                        (x2, outer_y + s),
                    ],
                    style.background,
                );
                draw_labels(canvas, entry, pct, x2, outer_y, side, spec, style);
            }
        }

        outer_y += seg + gap;
        inner_y += seg;
    }
}

/// Two-line label beside a segment midpoint: category name over formatted
/// value and percentage. Right-aligned toward input ribbons, left-aligned
/// away from output ribbons.
#[allow(clippy::too_many_arguments)]
fn draw_labels(
    canvas: &mut PixelCanvas,
    entry: &FlowEndpoint,
    pct: f64,
    anchor_x: f32,
    anchor_y: f32,
    side: Side,
    spec: &FlowSpec,
    style: &FlowStyle,
) {
    let value_text = match side {
        Side::Input => format!("{}  {:.1}%", spec.format.format(entry.value), pct),
        Side::Output => format!("{:.1}%  {}", pct, spec.format.format(entry.value)),
    };
    let (x, align) = match side {
        Side::Input => ((anchor_x - style.label_gap) as i32, Align::Right),
        Side::Output => ((anchor_x + style.label_gap) as i32, Align::Left),
    };
    TextOverlay::draw(
        canvas,
        &entry.label,
        x,
        (anchor_y - style.label_gap) as i32,
        TextSize::Body,
        style.ink,
        align,
        Baseline::Middle,
    );
    TextOverlay::draw(
        canvas,
        &value_text,
        x,
        (anchor_y + style.label_gap) as i32,
        TextSize::Body,
        style.ink,
        align,
        Baseline::Middle,
    );
}
