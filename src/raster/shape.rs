use crate::color::Color;
use crate::error::{RenderError, RenderResult};
use crate::raster::canvas::PixelCanvas;

/// Quarter-circle extent table for radius `r`, via the midpoint circle
/// algorithm. `offsets[i]` is the horizontal extent of the rasterized circle
/// at vertical distance `i` from the center, so `offsets[0] == r` and the
/// table is written in symmetric `(x, y)` pairs.
pub fn circle_offsets(r: usize) -> Vec<usize> {
    let mut offsets = vec![0usize; r + 1];
    offsets[0] = r;
    if r == 0 {
        return offsets;
    }

    let mut x = 0usize;
    let mut y = r;
    let mut d = 3i64 - 2 * r as i64;

    while x <= y {
        if d <= 0 {
            d += 4 * x as i64 + 6;
        } else {
            d += 4 * x as i64 - 4 * y as i64 + 10;
            y -= 1;
        }
        x += 1;
        offsets[x] = y;
        offsets[y] = x;
    }

    offsets
}

/// Solid rounded rectangle: full-width spans for the body rows, inset spans
/// for the top and bottom `r` cap rows. Hard pixel edges, no anti-aliasing.
pub fn fill_rounded_rect(
    canvas: &mut PixelCanvas,
    x: i32,
    y: i32,
    w: usize,
    h: usize,
    r: usize,
    color: Color,
) -> RenderResult<()> {
    if 2 * r > w.min(h) {
        return Err(RenderError::radius(format!(
            "corner radius {} exceeds half of {}x{}",
            r, w, h
        )));
    }
    let offsets = circle_offsets(r);
    for j in 0..h {
        let inset = if j <= r {
            r - offsets[r - j]
        } else if j + r + 1 >= h {
            r - offsets[j + r + 1 - h]
        } else {
            0
        };
        canvas.fill_row(x + inset as i32, y + j as i32, w - 2 * inset, color);
    }
    Ok(())
}

/// Filled circle from horizontal midpoint spans.
pub fn fill_circle(canvas: &mut PixelCanvas, cx: i32, cy: i32, radius: i32, color: Color) {
    if radius <= 0 {
        canvas.set_pixel(cx, cy, color);
        return;
    }
    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;

    while x >= y {
        canvas.fill_row(cx - x, cy + y, (2 * x + 1) as usize, color);
        if y != 0 {
            canvas.fill_row(cx - x, cy - y, (2 * x + 1) as usize, color);
        }
        if x != y {
            canvas.fill_row(cx - y, cy + x, (2 * y + 1) as usize, color);
            if y != 0 {
                canvas.fill_row(cx - y, cy - x, (2 * y + 1) as usize, color);
            }
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Scanline-fill a polygon. Degenerate inputs (< 3 vertices) draw nothing.
pub fn fill_polygon(canvas: &mut PixelCanvas, vertices: &[(f32, f32)], color: Color) {
    if vertices.len() < 3 {
        return;
    }
    let mut min_y = f32::MAX;
    let mut max_y = f32::MIN;
    for &(_, vy) in vertices {
        min_y = min_y.min(vy);
        max_y = max_y.max(vy);
    }
    let min_y = (min_y as i32).max(0);
    let max_y = (max_y as i32).min(canvas.height() as i32 - 1);

    let n = vertices.len();
    let mut crossings = Vec::with_capacity(n);
    for y in min_y..=max_y {
        crossings.clear();
        let yf = y as f32 + 0.5;
        for i in 0..n {
            let (x1, y1) = vertices[i];
            let (x2, y2) = vertices[(i + 1) % n];
            if (y1 <= yf && y2 > yf) || (y2 <= yf && y1 > yf) {
                crossings.push(x1 + (yf - y1) / (y2 - y1) * (x2 - x1));
            }
        }
        crossings.sort_unstable_by(|a, b| a.total_cmp(b));
        for pair in crossings.chunks_exact(2) {
            let start = pair[0].round() as i32;
            let end = pair[1].round() as i32;
            if end >= start {
                canvas.fill_row(start, y, (end - start + 1) as usize, color);
            }
        }
    }
}

/// Point on a cubic Bezier at parameter `t`.
fn bezier_point(
    p0: (f32, f32),
    p1: (f32, f32),
    p2: (f32, f32),
    p3: (f32, f32),
    t: f32,
) -> (f32, f32) {
    let u = 1.0 - t;
    let b0 = u * u * u;
    let b1 = 3.0 * u * u * t;
    let b2 = 3.0 * u * t * t;
    let b3 = t * t * t;
    (
        b0 * p0.0 + b1 * p1.0 + b2 * p2.0 + b3 * p3.0,
        b0 * p0.1 + b1 * p1.1 + b2 * p2.1 + b3 * p3.1,
    )
}

/// Stroke a cubic Bezier by stamping disks along the curve. Each stamp takes
/// its color from `shades` indexed by the sample's horizontal position within
/// [`x0`, `x1`], so a pre-sampled linear gradient sweeps across the stroke.
#[allow(clippy::too_many_arguments)]
pub fn stroke_bezier(
    canvas: &mut PixelCanvas,
    p0: (f32, f32),
    p1: (f32, f32),
    p2: (f32, f32),
    p3: (f32, f32),
    width: f32,
    shades: &[Color],
    x0: f32,
    x1: f32,
) {
    debug_assert!(!shades.is_empty());
    // Control-polygon length bounds the arc length; half-pixel steps keep
    // stamps overlapping at any stroke width.
    let hull = dist(p0, p1) + dist(p1, p2) + dist(p2, p3);
    let steps = ((hull * 2.0).ceil() as usize).max(16);
    let radius = (width / 2.0).round() as i32;
    let span = (x1 - x0).max(1.0);

    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let (x, y) = bezier_point(p0, p1, p2, p3, t);
        let pos = ((x - x0) / span).clamp(0.0, 1.0);
        let shade = shades[(pos * (shades.len() - 1) as f32).round() as usize];
        if radius <= 0 {
            canvas.set_pixel(x.round() as i32, y.round() as i32, shade);
        } else {
            fill_circle(canvas, x.round() as i32, y.round() as i32, radius, shade);
        }
    }
}

/// Filled circular wedge between angles `a0` and `a1` (radians, `a1 > a0`),
/// shaded radially: pixels between `grad_r0` and `grad_r1` from the center
/// index into `shades` by normalized distance.
#[allow(clippy::too_many_arguments)]
pub fn fill_wedge(
    canvas: &mut PixelCanvas,
    cx: i32,
    cy: i32,
    radius: i32,
    a0: f32,
    a1: f32,
    shades: &[Color],
    grad_r0: f32,
    grad_r1: f32,
) {
    debug_assert!(!shades.is_empty());
    let grad_span = (grad_r1 - grad_r0).max(1.0);
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let r2 = (dx * dx + dy * dy) as f32;
            if r2 > (radius * radius) as f32 {
                continue;
            }
            let mut ang = (dy as f32).atan2(dx as f32);
            while ang < a0 {
                ang += std::f32::consts::TAU;
            }
            if ang >= a1 {
                continue;
            }
            let r = r2.sqrt();
            let pos = ((r - grad_r0) / grad_span).clamp(0.0, 1.0);
            let shade = shades[(pos * (shades.len() - 1) as f32).round() as usize];
            canvas.set_pixel(cx + dx, cy + dy, shade);
        }
    }
}

#[inline]
fn dist(a: (f32, f32), b: (f32, f32)) -> f32 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}
