//! Stacked time-series histogram: one vertical bar per bucket, stacked by
//! sub-category in a caller-supplied priority order, with a palette legend.

use crate::chart::types::{BlockBucket, RenderedImage};
use crate::error::RenderResult;
use crate::palette;
use crate::raster::canvas::PixelCanvas;
use crate::raster::text::{Align, Baseline, TextOverlay, TextSize};
use crate::style::HistogramStyle;

#[derive(Debug, Clone)]
pub struct HistogramSpec {
    /// Buckets ordered oldest to newest.
    pub buckets: Vec<BlockBucket>,
    /// Stacking order, bottom of the bar first. Typically descending by
    /// aggregate size across the whole series, computed once by the caller.
    /// Sub-categories not listed here stack above, in order of appearance.
    pub priority: Vec<String>,
    pub header: String,
}

/// Pixel height of the plot area.
fn plot_height(style: &HistogramStyle) -> usize {
    style.height - 2 * style.margin
}

/// Bar height for a bucket weight: scaled by the fixed max-weight ratio and
/// clamped so no bucket can escape the plot area.
pub fn column_height(weight: f64, style: &HistogramStyle) -> usize {
    let plot_h = plot_height(style);
    (((weight / style.max_weight) * plot_h as f64).round() as usize).min(plot_h)
}

/// The effective stacking order: the caller's priority list, extended with
/// any sub-category names it missed, in order of first appearance.
pub fn stacking_order(spec: &HistogramSpec) -> Vec<String> {
    let mut order = spec.priority.clone();
    for bucket in &spec.buckets {
        for part in &bucket.parts {
            if !order.iter().any(|n| n == &part.name) {
                order.push(part.name.clone());
            }
        }
    }
    order
}

/// Aggregate size and share of the grand total per sub-category, sorted
/// descending by size. Ties break by name so the legend is stable.
pub fn legend_entries(buckets: &[BlockBucket]) -> Vec<(String, f64, f64)> {
    let mut sizes: Vec<(String, f64)> = Vec::new();
    for bucket in buckets {
        for part in &bucket.parts {
            match sizes.iter_mut().find(|(n, _)| n == &part.name) {
                Some((_, s)) => *s += part.size,
                None => sizes.push((part.name.clone(), part.size)),
            }
        }
    }
    let grand_total: f64 = sizes.iter().map(|(_, s)| s).sum();
    sizes.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sizes
        .into_iter()
        .map(|(name, size)| {
            let pct = if grand_total > 0.0 {
                size / grand_total * 100.0
            } else {
                0.0
            };
            (name, size, pct)
        })
        .collect()
}

pub fn render_histogram(
    spec: &HistogramSpec,
    style: &HistogramStyle,
) -> RenderResult<RenderedImage> {
    let canvas = paint_histogram(spec, style)?;
    let png_bytes = canvas.encode_png()?;
    Ok(RenderedImage {
        png_bytes,
        width: style.width,
        height: style.height,
    })
}

fn paint_histogram(spec: &HistogramSpec, style: &HistogramStyle) -> RenderResult<PixelCanvas> {
    log::debug!("histogram: {} buckets", spec.buckets.len());
    let mut canvas = PixelCanvas::new(style.width, style.height)?;
    canvas.clear(style.background);

    TextOverlay::draw(
        &mut canvas,
        &spec.header,
        (style.width / 2) as i32,
        30,
        TextSize::Heading,
        style.ink,
        Align::Center,
        Baseline::Middle,
    );

    let order = stacking_order(spec);
    let plot_w = style.width - 2 * style.margin - style.legend_width;
    let plot_h = plot_height(style);
    let baseline = (style.height - style.margin) as i32;

    canvas.fill_rect(
        style.margin as i32,
        baseline,
        plot_w,
        1,
        palette::NEUTRAL_GREY_DARK,
    );

    if !spec.buckets.is_empty() {
        let slot = plot_w as f32 / spec.buckets.len() as f32;
        let bar_w = (slot - 1.0).max(1.0) as usize;
        let ratio = plot_h as f64 / style.max_weight;
        let stride = style.label_stride.max(1);

        for (i, bucket) in spec.buckets.iter().enumerate() {
            let x0 = style.margin as f32 + i as f32 * slot;
            let col_h = column_height(bucket.weight, style);
            let mut used = 0usize;

            for (rank, name) in order.iter().enumerate() {
                let Some(part) = bucket.parts.iter().find(|p| &p.name == name) else {
                    continue;
                };
                let part_h = ((part.size * ratio).round() as usize).min(col_h - used);
                if part_h == 0 {
                    continue;
                }
                canvas.fill_rect(
                    x0 as i32,
                    baseline - (used + part_h) as i32,
                    bar_w,
                    part_h,
                    palette::indexed(rank),
                );
                used += part_h;
            }

            if i % stride == 0 {
                TextOverlay::draw(
                    &mut canvas,
                    &bucket.label,
                    (x0 + slot / 2.0) as i32,
                    baseline + 4,
                    TextSize::Body,
                    style.ink,
                    Align::Center,
                    Baseline::Top,
                );
            }
        }
    }

    // Legend: swatch, name and share of the grand total, largest first.
    let order_rank = |name: &str| order.iter().position(|n| n == name).unwrap_or(0);
    let lx = (style.width - style.margin - style.legend_width) as i32;
    let mut ly = style.margin as i32;
    for (name, _, pct) in legend_entries(&spec.buckets) {
        canvas.fill_rect(lx, ly + 3, 10, 10, palette::indexed(order_rank(&name)));
        TextOverlay::draw(
            &mut canvas,
            &format!("{} {:.1}%", name, pct),
            lx + 16,
            ly,
            TextSize::Body,
            style.ink,
            Align::Left,
            Baseline::Top,
        );
        ly += 18;
    }

    Ok(canvas)
}
