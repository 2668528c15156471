//! Log setup plus ndjson lines for detection reports.

use crate::detection::Detection;
use chrono::{TimeZone, Utc};
use serde::Serialize;
use std::io::Write;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// One report line per scored process.
#[derive(Serialize)]
pub struct DetectionLine<'a> {
    pub ts: String,
    pub process: &'a str,
    pub score: f64,
    pub verdict: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ground_truth: Option<&'a str>,
}

impl<'a> DetectionLine<'a> {
    pub fn from_detection(d: &'a Detection) -> Self {
        let ts = Utc
            .timestamp_millis_opt(d.ts)
            .single()
            .unwrap_or_else(Utc::now)
            .to_rfc3339();
        Self {
            ts,
            process: &d.process,
            score: d.score,
            verdict: d.verdict.as_str(),
            ground_truth: d
                .expected
                .map(|anomaly| if anomaly { "anomaly" } else { "normal" }),
        }
    }
}

pub struct StructuredLogger;

impl StructuredLogger {
    /// Install global subscriber on stderr; level from RUST_LOG or `default_level`.
    ///
    /// Safe to call more than once: later calls leave the first subscriber in place.
    pub fn init(json: bool, default_level: &str) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        let result = if json {
            let fmt = tracing_subscriber::fmt::layer()
                .json()
                .with_span_events(FmtSpan::NONE)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry().with(filter).with(fmt).try_init()
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init()
        };
        if result.is_err() {
            tracing::debug!("tracing subscriber already installed");
        }
    }

    /// Write `event` as a single JSON line
    pub fn emit_json(event: &impl Serialize, w: &mut impl Write) -> std::io::Result<()> {
        let line = serde_json::to_string(event)?;
        writeln!(w, "{}", line)
    }
}
