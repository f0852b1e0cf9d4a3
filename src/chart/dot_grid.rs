//! Dot-matrix signal grid: one fixed-size square cell per unit, colored by
//! signal state, on a rounded terminal-style background.

use crate::chart::types::{RenderedImage, SignalState};
use crate::color::{Color, ColorRamp};
use crate::error::RenderResult;
use crate::palette;
use crate::raster::canvas::{fit_16x9, PixelCanvas};
use crate::raster::shape;
use crate::raster::text::{Align, Baseline, TextOverlay, TextSize};
use crate::style::GridStyle;

/// Input for one grid render. Header and footer strings are composed by the
/// caller; the renderer only places them.
#[derive(Debug, Clone, Default)]
pub struct DotGridSpec {
    /// Cell states in sequence order. Cells past the end render as pending.
    pub cells: Vec<SignalState>,
    /// Colored spans of the prompt line above the grid.
    pub header: Vec<(String, Color)>,
    /// Bottom-left line, e.g. the running signal percentage.
    pub footer_left: String,
    /// Bottom-right line, e.g. an attribution handle.
    pub footer_right: String,
}

/// Pre-sampled shade arrays, one ramp per signal state. Sampled once per
/// render and indexed per cell; nothing interpolates while painting.
pub struct CellShades {
    signal: Vec<Color>,
    no_signal: Vec<Color>,
    pending: Vec<Color>,
}

impl CellShades {
    pub fn build(samples: usize) -> RenderResult<Self> {
        let ramp = |a, b| ColorRamp::evenly(&[a, b]).sample(samples);
        Ok(Self {
            signal: ramp(palette::SIGNAL_BLUE, palette::SIGNAL_BLUE_DARK)?,
            no_signal: ramp(palette::NO_SIGNAL_ORANGE, palette::NO_SIGNAL_ORANGE_DARK)?,
            pending: ramp(palette::PENDING_GREY, palette::PENDING_GREY_DARK)?,
        })
    }

    pub fn for_state(&self, state: SignalState) -> &[Color] {
        match state {
            SignalState::Signal => &self.signal,
            SignalState::NoSignal => &self.no_signal,
            SignalState::Pending => &self.pending,
        }
    }
}

/// Pixel extent of the cell grid itself (no border or padding).
pub fn grid_extent(style: &GridStyle) -> (usize, usize) {
    let columns = style.columns.max(1);
    let rows = style.total_cells.div_ceil(columns);
    (
        columns * style.dot + columns.saturating_sub(1) * style.gap,
        rows * style.dot + rows.saturating_sub(1) * style.gap,
    )
}

/// Paint every cell as a solid dot×dot block of span fills. The shade index
/// cycles with the cell index, so runs of same-state cells band subtly
/// instead of rendering one flat tone.
pub fn paint_cells(
    canvas: &mut PixelCanvas,
    cells: &[SignalState],
    ox: usize,
    oy: usize,
    style: &GridStyle,
    shades: &CellShades,
) {
    let columns = style.columns.max(1);
    let stride = style.dot + style.gap;
    let width = canvas.width();
    for i in 0..style.total_cells {
        let x = ox + (i % columns) * stride;
        let y = oy + (i / columns) * stride;
        let state = cells.get(i).copied().unwrap_or(SignalState::Pending);
        let ramp = shades.for_state(state);
        let shade = ramp[i % ramp.len()];
        let mut p = canvas.index(x, y);
        for _ in 0..style.dot {
            canvas.fill_span(p, style.dot, shade);
            p += width;
        }
    }
}

pub fn render_dot_grid(spec: &DotGridSpec, style: &GridStyle) -> RenderResult<RenderedImage> {
    log::debug!(
        "dot grid: {} of {} cells classified",
        spec.cells.len().min(style.total_cells),
        style.total_cells
    );

    let shades = CellShades::build(style.dot)?;

    let (grid_w, grid_h) = grid_extent(style);
    let content_w = grid_w + 2 * (style.padding + style.border);
    let content_h = grid_h + 2 * (style.padding + style.border);
    let (width, height) = fit_16x9(content_w, content_h);
    let mut canvas = PixelCanvas::new(width, height)?;

    let ox = (width - grid_w) / 2;
    let oy = (height - grid_h) / 2;

    shape::fill_rounded_rect(
        &mut canvas,
        (ox - style.border) as i32,
        (oy - style.border) as i32,
        grid_w + 2 * style.border,
        grid_h + 2 * style.border,
        style.corner_radius,
        style.background,
    )?;

    paint_cells(&mut canvas, &spec.cells, ox, oy, style, &shades);

    // Prompt line above the grid, colored span by span.
    let mut pen = ox as i32;
    for (text, color) in &spec.header {
        TextOverlay::draw(
            &mut canvas,
            text,
            pen,
            oy as i32,
            TextSize::Body,
            *color,
            Align::Left,
            Baseline::Bottom,
        );
        pen += TextOverlay::measure(text, TextSize::Body) as i32;
    }

    let foot_y = (oy + grid_h) as i32;
    TextOverlay::draw(
        &mut canvas,
        &spec.footer_left,
        ox as i32,
        foot_y,
        TextSize::Body,
        Color::WHITE,
        Align::Left,
        Baseline::Top,
    );
    TextOverlay::draw(
        &mut canvas,
        &spec.footer_right,
        (ox + grid_w) as i32,
        foot_y,
        TextSize::Body,
        Color::WHITE,
        Align::Right,
        Baseline::Top,
    );

    let png_bytes = canvas.encode_png()?;
    Ok(RenderedImage {
        png_bytes,
        width,
        height,
    })
}
