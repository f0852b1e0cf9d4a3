//! Chart renderers: each takes typed records plus a style and produces one
//! encoded bitmap, stateless between calls.

pub mod dot_grid;
pub mod flow;
pub mod format;
pub mod histogram;
pub mod pie;
pub mod types;

pub use dot_grid::{render_dot_grid, DotGridSpec};
pub use flow::{render_flow, FlowSpec};
pub use format::ValueFormat;
pub use histogram::{render_histogram, HistogramSpec};
pub use pie::{render_pie, spread_labels};
pub use types::{BlockBucket, BucketPart, FlowEndpoint, RenderedImage, SignalState, TallyRecord};
