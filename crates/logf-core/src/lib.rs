//! logf - effortless enter/exit/error logging around callables
//!
//! This crate wraps arbitrary callables, synchronous or asynchronous, with
//! structured enter/exit/exception logging without altering their behavior
//! or return value:
//!
//! - Configuration resolution (override source > explicit options > defaults)
//! - Enter/exit message construction with truncation, execution-time
//!   formatting, single-message mode, and correlation identifiers
//! - A cross-call exception-suppression coordinator that prevents one error
//!   from being logged at every nested instrumented frame
//! - Pluggable sinks: print-like, `tracing`-backed, or in-memory capture
//!
//! # Usage
//!
//! ```
//! use logf_core::{logf, Level, Options};
//!
//! let wrapper = logf(Options::new().level(Level::Info).single_msg(true));
//! let parse = wrapper.wrap("parse_port", |raw: &str| -> Result<u16, std::num::ParseIntError> {
//!     raw.parse()
//! });
//!
//! assert_eq!(parse.try_call("8080"), Ok(8080));
//! assert!(parse.try_call("not-a-port").is_err());
//! ```

pub mod config;
pub mod errors;
pub mod format;
pub mod init;
pub mod intercept;
pub mod sink;
pub mod suppress;

// Re-export commonly used types
pub use config::{Config, MapSource, MaxStrLen, Options, OverrideSource, ProcessEnv};
pub use errors::ParseError;
pub use init::{init, Profile};
pub use intercept::{logf, Instrumented, Logf};
pub use logf_core_types::{CallId, Level};
pub use sink::{CaptureSink, PrintSink, Record, Sink, TracingSink};
