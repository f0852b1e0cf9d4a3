//! End-to-end render scenarios: typed records in, decodable PNG out.

use blockviz::chart::dot_grid::{self, DotGridSpec};
use blockviz::chart::histogram::{self, HistogramSpec};
use blockviz::chart::{render_flow, render_pie, FlowSpec, ValueFormat};
use blockviz::error::ErrorKind;
use blockviz::raster::canvas::PixelCanvas;
use blockviz::raster::shape;
use blockviz::style::{FlowStyle, GridStyle, HistogramStyle, PieStyle};
use blockviz::{BlockBucket, Color, FlowEndpoint, SignalState, TallyRecord};

fn flow_spec() -> FlowSpec {
    FlowSpec {
        header: "Total: 40".into(),
        date_line: "2021-11-14".into(),
        caption: "Block 709632 to 709775".into(),
        format: ValueFormat::Count,
    }
}

#[test]
fn test_flow_end_to_end() -> anyhow::Result<()> {
    let mut inputs = vec![
        FlowEndpoint::new("signal", 30.0),
        FlowEndpoint::new("no-signal", 10.0),
    ];
    let mut outputs = vec![FlowEndpoint::new("A", 25.0), FlowEndpoint::new("B", 15.0)];

    let image = render_flow(&mut inputs, &mut outputs, &flow_spec(), &FlowStyle::default())?;

    assert_eq!(inputs[0].percentage, Some(75.0));
    assert_eq!(inputs[1].percentage, Some(25.0));
    assert_eq!(outputs[0].percentage, Some(62.5));
    assert_eq!(outputs[1].percentage, Some(37.5));

    let decoded = image::load_from_memory(&image.png_bytes)?;
    assert_eq!(decoded.width() as usize, image.width);
    assert_eq!(decoded.height() as usize, image.height);
    Ok(())
}

#[test]
fn test_flow_records_roundtrip_as_json() -> anyhow::Result<()> {
    // Records arrive from the classification layer as structured data and go
    // back out annotated.
    let mut inputs: Vec<FlowEndpoint> = serde_json::from_str(
        r#"[{"label": "signal", "value": 30.0}, {"label": "no-signal", "value": 10.0}]"#,
    )?;
    let mut outputs = vec![FlowEndpoint::new("out", 40.0)];
    render_flow(&mut inputs, &mut outputs, &flow_spec(), &FlowStyle::default())?;

    let out = serde_json::to_string(&inputs)?;
    assert!(out.contains("\"percentage\":75.0"), "got: {}", out);
    Ok(())
}

#[test]
fn test_dot_grid_end_to_end_pixel_colors() -> anyhow::Result<()> {
    let style = GridStyle::default();
    let spec = DotGridSpec {
        cells: vec![SignalState::Signal; 1444],
        header: vec![
            ("node@host".into(), Color::rgb(0x28, 0x9f, 0x69)),
            (":~$ ./signal.sh".into(), Color::WHITE),
        ],
        footer_left: "71.63%".into(),
        footer_right: "@example".into(),
    };
    let image = dot_grid::render_dot_grid(&spec, &style)?;
    assert_eq!(image.width % 2, 0);
    assert_eq!(image.height % 2, 0);

    // First cell sits at the grid origin and must decode to the first shade
    // of the signal ramp; a channel swap anywhere in the pipeline would
    // surface here.
    let decoded = image::load_from_memory(&image.png_bytes)?.to_rgba8();
    let (grid_w, grid_h) = dot_grid::grid_extent(&style);
    let ox = (image.width - grid_w) / 2;
    let oy = (image.height - grid_h) / 2;
    assert_eq!(
        decoded.get_pixel(ox as u32, oy as u32).0,
        [0x40, 0xa2, 0xf3, 0xff]
    );
    // A pixel outside the rounded background is still transparent.
    assert_eq!(decoded.get_pixel(0, 0).0[3], 0);
    Ok(())
}

#[test]
fn test_histogram_end_to_end() -> anyhow::Result<()> {
    let style = HistogramStyle::default();
    let buckets: Vec<BlockBucket> = (0..144)
        .map(|i| BlockBucket {
            label: format!("{}", 709632 + i),
            weight: style.max_weight * (0.4 + 0.6 * (i as f64 / 143.0)),
            parts: vec![
                blockviz::BucketPart {
                    name: "keyhash".into(),
                    count: 1200,
                    size: style.max_weight * 0.3,
                },
                blockviz::BucketPart {
                    name: "taproot".into(),
                    count: 300,
                    size: style.max_weight * 0.1,
                },
            ],
        })
        .collect();
    let spec = HistogramSpec {
        buckets,
        priority: vec!["keyhash".into(), "taproot".into()],
        header: "weight per block".into(),
    };
    let image = histogram::render_histogram(&spec, &style)?;
    let decoded = image::load_from_memory(&image.png_bytes)?;
    assert_eq!(decoded.width() as usize, style.width);

    let legend = histogram::legend_entries(&spec.buckets);
    assert_eq!(legend[0].0, "keyhash");
    assert!((legend[0].2 - 75.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_pie_end_to_end() -> anyhow::Result<()> {
    let mut records = vec![
        TallyRecord::new("enforcing", 5000, 0.0),
        TallyRecord::new("non-enforcing", 2000, 0.0),
        TallyRecord::new("light", 500, 0.0),
        TallyRecord::new("unknown", 500, 0.0),
    ];
    let image = render_pie(&mut records, &PieStyle::default())?;
    assert_eq!(&image.png_bytes[1..4], b"PNG");
    assert_eq!(records[0].percentage, Some(62.5));
    assert_eq!(records[1].percentage, Some(25.0));
    Ok(())
}

#[test]
fn test_oversized_radius_never_draws() {
    // Regression guard: a radius past half the shorter side must fail, not
    // paint a malformed shape.
    let mut canvas = PixelCanvas::new(100, 40).unwrap();
    let err = shape::fill_rounded_rect(&mut canvas, 0, 0, 100, 40, 25, Color::WHITE).unwrap_err();
    assert_eq!(err.kind, ErrorKind::RadiusTooLarge);
    assert!(canvas.pixels().iter().all(|&p| p == 0));
}

#[test]
fn test_empty_side_reported_not_blank_image() {
    let mut inputs: Vec<FlowEndpoint> = Vec::new();
    let mut outputs = vec![FlowEndpoint::new("out", 1.0)];
    let err = render_flow(&mut inputs, &mut outputs, &flow_spec(), &FlowStyle::default());
    assert_eq!(err.unwrap_err().kind, ErrorKind::EmptySide);
}
