//! Pie breakdown: one radially-shaded wedge per category, labels at arc
//! midpoints with a one-pass overlap nudge.

use std::f32::consts::TAU;

use crate::chart::types::{RenderedImage, TallyRecord};
use crate::color::{Color, ColorRamp};
use crate::error::{RenderError, RenderResult};
use crate::palette;
use crate::raster::canvas::PixelCanvas;
use crate::raster::shape;
use crate::raster::text::{Align, Baseline, TextOverlay, TextSize};
use crate::style::PieStyle;

/// Shades per wedge ramp.
const WEDGE_SHADES: usize = 32;

/// Push apart adjacent label angles that sit closer than `min_gap`.
///
/// A single local-repulsion pass over adjacent pairs in angular order, not a
/// solver: each crowded pair is nudged symmetrically by `delta` once. Many
/// small, similarly-sized categories can still end up overlapping; that
/// residual overlap is accepted, bounded behavior.
pub fn spread_labels(angles: &mut [f32], min_gap: f32, delta: f32) {
    for i in 0..angles.len().saturating_sub(1) {
        if angles[i + 1] - angles[i] < min_gap {
            angles[i] -= delta;
            angles[i + 1] += delta;
        }
    }
}

/// Render the breakdown and write each category's percentage of the total
/// count back onto its record. Zero-count categories draw nothing and keep
/// `percentage == None`.
pub fn render_pie(records: &mut [TallyRecord], style: &PieStyle) -> RenderResult<RenderedImage> {
    let canvas = paint_pie(records, style)?;
    let png_bytes = canvas.encode_png()?;
    Ok(RenderedImage {
        png_bytes,
        width: style.width,
        height: style.height,
    })
}

fn paint_pie(records: &mut [TallyRecord], style: &PieStyle) -> RenderResult<PixelCanvas> {
    let total: u64 = records.iter().map(|r| r.count).sum();
    if total == 0 {
        return Err(RenderError::empty_side("pie has no counted categories"));
    }
    log::debug!("pie: {} categories, {} units", records.len(), total);

    let mut canvas = PixelCanvas::new(style.width, style.height)?;
    canvas.clear(style.background);

    let cx = (style.width / 2) as i32;
    let cy = (style.height / 2) as i32;
    let radius = (style.height / 2).saturating_sub(style.rim_inset) as i32;

    // One wedge per counted category, in record order, starting at angle 0.
    let mut begin = 0.0f32;
    let mut anchors: Vec<(usize, f32)> = Vec::with_capacity(records.len());
    for (i, record) in records.iter_mut().enumerate() {
        if record.count == 0 {
            continue;
        }
        let share = record.count as f64 / total as f64;
        record.percentage = Some(share * 100.0);

        let angle = (share as f32) * TAU;
        let base = palette::indexed(i);
        let shades = ColorRamp::evenly(&[base, base.lerp(Color::BLACK, 0.35)])
            .sample(WEDGE_SHADES)?;
        shape::fill_wedge(
            &mut canvas,
            cx,
            cy,
            radius,
            begin,
            begin + angle,
            &shades,
            style.gradient_start,
            radius as f32,
        );
        anchors.push((i, begin + angle / 2.0));
        begin += angle;
    }

    let mut angles: Vec<f32> = anchors.iter().map(|&(_, a)| a).collect();
    spread_labels(&mut angles, style.min_label_gap, style.label_delta);

    for (&(i, _), &angle) in anchors.iter().zip(&angles) {
        let record = &records[i];
        let pct = record.percentage.unwrap_or(0.0);
        let text = format!("{} {} ({:.2}%)", record.count, record.name, pct);
        let x = cx + (angle.cos() * style.label_radius) as i32;
        let y = cy + (angle.sin() * style.label_radius) as i32;
        TextOverlay::draw(
            &mut canvas,
            &text,
            x,
            y,
            TextSize::Body,
            style.ink,
            Align::Center,
            Baseline::Middle,
        );
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_spread_pushes_crowded_pair_apart() {
        let mut angles = vec![1.00, 1.05, 2.5];
        spread_labels(&mut angles, 0.12, 0.05);
        assert!(angles[1] - angles[0] > 0.12);
        // The well-spaced pair is untouched.
        assert_eq!(angles[2], 2.5);
    }

    #[test]
    fn test_spread_leaves_spaced_labels_alone() {
        let mut angles = vec![0.5, 1.5, 3.0];
        let before = angles.clone();
        spread_labels(&mut angles, 0.12, 0.05);
        assert_eq!(angles, before);
    }

    #[test]
    fn test_spread_handles_degenerate_lengths() {
        spread_labels(&mut [], 0.12, 0.05);
        let mut one = [1.0];
        spread_labels(&mut one, 0.12, 0.05);
        assert_eq!(one, [1.0]);
    }

    #[test]
    fn test_zero_total_fails() {
        let mut records = vec![TallyRecord::new("a", 0, 0.0)];
        let err = render_pie(&mut records, &PieStyle::default()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::EmptySide);
    }

    #[test]
    fn test_percentages_written_back() {
        let mut records = vec![
            TallyRecord::new("enforcing", 3, 0.0),
            TallyRecord::new("light", 1, 0.0),
            TallyRecord::new("unknown", 0, 0.0),
        ];
        let image = render_pie(&mut records, &PieStyle::default()).unwrap();
        assert_eq!(&image.png_bytes[1..4], b"PNG");
        assert_eq!(records[0].percentage, Some(75.0));
        assert_eq!(records[1].percentage, Some(25.0));
        assert_eq!(records[2].percentage, None);
    }

    #[test]
    fn test_sole_category_fills_disk() {
        let style = PieStyle::default();
        let mut records = vec![TallyRecord::new("all", 7, 0.0)];
        let canvas = paint_pie(&mut records, &style).unwrap();
        let cx = (style.width / 2) as i32;
        let cy = (style.height / 2) as i32;
        let r = (style.height / 2 - style.rim_inset) as i32;
        // Probe all four cardinal directions inside the rim.
        for (dx, dy) in [(r - 4, 0), (-(r - 4), 0), (0, r - 4), (0, -(r - 4))] {
            assert_ne!(
                canvas.get_pixel(cx + dx, cy + dy),
                Some(style.background),
                "expected wedge fill at ({}, {})",
                dx,
                dy
            );
        }
    }
}
