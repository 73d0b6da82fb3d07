#![allow(dead_code)]

use logf_core::{CaptureSink, Options};
use std::sync::Arc;
use thiserror::Error;

/// Error type for exercising the exception path in tests
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TestError(pub String);

/// Options routed to a fresh in-memory capture sink
pub fn capture_options() -> (Options, CaptureSink) {
    let sink = CaptureSink::new();
    let options = Options::new().sink(Arc::new(sink.clone()));
    (options, sink)
}
