//! Input records handed over by the external classification layer, and the
//! rendered output type. Category collections are ordered lists, never maps:
//! draw order is visually significant and must be stable across runs.

use serde::{Deserialize, Serialize};

/// Signal classification of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignalState {
    /// The unit carries the signal bit.
    Signal,
    /// The unit was seen and does not signal.
    NoSignal,
    /// No data yet (cells beyond the observed window).
    Pending,
}

/// Per-category `{count, value}` tally, accumulated externally and passed in
/// once per render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TallyRecord {
    pub name: String,
    pub count: u64,
    pub value: f64,
    /// Share of the total, written back by the pie renderer so the caller can
    /// reuse it in post text. Recomputing is idempotent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

impl TallyRecord {
    pub fn new(name: impl Into<String>, count: u64, value: f64) -> Self {
        Self {
            name: name.into(),
            count,
            value,
            percentage: None,
        }
    }
}

/// One category on the "in" or "out" side of a flow diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEndpoint {
    pub label: String,
    pub value: f64,
    /// Share of the side total, written back by the flow renderer. Zero-valued
    /// endpoints are skipped and keep `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

impl FlowEndpoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            percentage: None,
        }
    }
}

/// One sub-category slice of a time bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketPart {
    pub name: String,
    pub count: u64,
    pub size: f64,
}

/// One time-series unit: total weight plus its sub-category breakdown,
/// ordered oldest to newest by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockBucket {
    /// Axis label for this bucket (sequence position, e.g. a height).
    pub label: String,
    pub weight: f64,
    pub parts: Vec<BucketPart>,
}

/// A finished render: encoded bitmap plus its dimensions.
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub png_bytes: Vec<u8>,
    pub width: usize,
    pub height: usize,
}
