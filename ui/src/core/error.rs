//! Checked failures of the chart engine. Degenerate series are not errors; the
//! geometry and placement layers fall back softly instead.

/// Errors raised while configuring the engine or resolving selector input.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("unknown period label: {label:?}")]
    UnknownPeriod { label: String },

    #[error("unknown metric kind: {name:?}")]
    UnknownMetricKind { name: String },

    #[error("invalid engine config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("last reporting day {value:?} is not a YYYY-MM-DD date")]
    AnchorDate {
        value: String,
        #[source]
        source: time::error::Parse,
    },

    #[error("period {label:?} must cover at least one day")]
    EmptyPeriod { label: String },
}
