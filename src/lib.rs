//! blockviz — procedural raster composition for block-statistics imagery.
//!
//! Turns small structured statistics (per-unit signal flags, categorical
//! tallies, time series of weighted buckets) into fixed-size PNG images for
//! social-media posting: a dot-matrix signal grid, a two-sided flow-ribbon
//! diagram, a stacked time-series histogram and a pie breakdown.
//!
//! Rendering is synchronous, stateless and side-effect free, except that the
//! flow and pie renderers write computed percentages back onto their input
//! records for reuse in post text. The calling layer owns all I/O: it
//! classifies the data, picks a renderer and decides where the bitmap goes.

pub mod chart;
pub mod color;
pub mod error;
pub mod palette;
pub mod raster;
pub mod style;

pub use chart::{
    render_dot_grid, render_flow, render_histogram, render_pie, BlockBucket, BucketPart,
    DotGridSpec, FlowEndpoint, FlowSpec, HistogramSpec, RenderedImage, SignalState, TallyRecord,
    ValueFormat,
};
pub use color::{Color, ColorRamp};
pub use error::{ErrorKind, RenderError, RenderResult};
pub use style::StyleSheet;
