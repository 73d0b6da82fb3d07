//! Configuration resolution
//!
//! One immutable [`Config`] snapshot is produced per wrapping operation by
//! merging three sources, in precedence order:
//!
//! 1. the override source (by default the process environment),
//! 2. explicitly passed [`Options`],
//! 3. built-in defaults.
//!
//! Malformed override values for typed fields are ignored and resolution
//! falls through to the next source. Wrapped callables never share a
//! `Config` instance; `refresh` opts a call site into re-reading the
//! override source before every invocation.

use crate::errors::ParseError;
use crate::sink::{PrintSink, Sink, TracingSink};
use logf_core_types::schema::{
    DEFAULT_MAX_STR_LEN, KEY_IDENTIFIER, KEY_LEVEL, KEY_LOG_ARGS, KEY_LOG_EXCEPTION,
    KEY_LOG_EXEC_TIME, KEY_LOG_RETURN, KEY_MAX_STR_LEN, KEY_MIN_LEVEL, KEY_REFRESH,
    KEY_SINGLE_EXCEPTION, KEY_SINGLE_MSG, KEY_STACK_INFO, KEY_USE_LOGGER, KEY_USE_PRINT,
};
use logf_core_types::Level;
use std::collections::HashMap;
use std::sync::Arc;

/// External key-value lookup consulted at configuration build time.
///
/// Modeled as an injected interface rather than implicit global state so
/// tests can substitute a fake source without mutating the real process
/// environment.
pub trait OverrideSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// The real process environment
pub struct ProcessEnv;

impl OverrideSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory override source for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an override value
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl OverrideSource for MapSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Maximum rendered-string length, distinguishing "unlimited" from "unset"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxStrLen {
    Limited(usize),
    Unlimited,
}

/// Explicit per-wrap options; every field is optional and falls through to
/// the override source and then the defaults when unset.
#[derive(Clone, Default)]
pub struct Options {
    pub(crate) level: Option<Level>,
    pub(crate) min_level: Option<Level>,
    pub(crate) log_args: Option<bool>,
    pub(crate) log_return: Option<bool>,
    pub(crate) max_str_len: Option<MaxStrLen>,
    pub(crate) log_exec_time: Option<bool>,
    pub(crate) single_msg: Option<bool>,
    pub(crate) use_print: Option<bool>,
    pub(crate) use_logger: Option<String>,
    pub(crate) log_stack_info: Option<bool>,
    pub(crate) log_exception: Option<bool>,
    pub(crate) single_exception: Option<bool>,
    pub(crate) identifier: Option<bool>,
    pub(crate) refresh: Option<bool>,
    pub(crate) constructor: Option<bool>,
    pub(crate) sink: Option<Arc<dyn Sink>>,
    pub(crate) override_source: Option<Arc<dyn OverrideSource>>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Level enter/exit/single messages are emitted at
    pub fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Independent minimum-level gate consulted before any emission
    pub fn min_level(mut self, level: Level) -> Self {
        self.min_level = Some(level);
        self
    }

    /// Render and log the argument tuple
    pub fn log_args(mut self, on: bool) -> Self {
        self.log_args = Some(on);
        self
    }

    /// Render and log the return value
    pub fn log_return(mut self, on: bool) -> Self {
        self.log_return = Some(on);
        self
    }

    /// Truncate rendered arguments/returns to `max` characters
    pub fn max_str_len(mut self, max: usize) -> Self {
        self.max_str_len = Some(MaxStrLen::Limited(max));
        self
    }

    /// Never truncate rendered arguments/returns
    pub fn unlimited_str_len(mut self) -> Self {
        self.max_str_len = Some(MaxStrLen::Unlimited);
        self
    }

    /// Measure and log execution time
    pub fn log_exec_time(mut self, on: bool) -> Self {
        self.log_exec_time = Some(on);
        self
    }

    /// Collapse enter and exit into one message per invocation
    pub fn single_msg(mut self, on: bool) -> Self {
        self.single_msg = Some(on);
        self
    }

    /// Route output through the print-like sink instead of the logger sink
    pub fn use_print(mut self, on: bool) -> Self {
        self.use_print = Some(on);
        self
    }

    /// Route output through the logger-like sink under the given logger name
    pub fn use_logger(mut self, name: impl Into<String>) -> Self {
        self.use_logger = Some(name.into());
        self
    }

    /// Attach a captured stack trace to each emission
    pub fn log_stack_info(mut self, on: bool) -> Self {
        self.log_stack_info = Some(on);
        self
    }

    /// Emit an error message when the wrapped callable fails
    pub fn log_exception(mut self, on: bool) -> Self {
        self.log_exception = Some(on);
        self
    }

    /// Suppress duplicate error messages across nested instrumented frames
    pub fn single_exception(mut self, on: bool) -> Self {
        self.single_exception = Some(on);
        self
    }

    /// Attach a correlation identifier linking enter and exit messages
    pub fn identifier(mut self, on: bool) -> Self {
        self.identifier = Some(on);
        self
    }

    /// Re-read the override source before every invocation
    pub fn refresh(mut self, on: bool) -> Self {
        self.refresh = Some(on);
        self
    }

    /// Treat the wrapped callable as an initializer: its (always empty)
    /// return value is not rendered. Explicit opt-in; never inferred from
    /// the callable's name.
    pub fn constructor(mut self, on: bool) -> Self {
        self.constructor = Some(on);
        self
    }

    /// Inject a sink, bypassing the print/logger selection
    pub fn sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Inject an override source (defaults to the process environment)
    pub fn override_source(mut self, source: Arc<dyn OverrideSource>) -> Self {
        self.override_source = Some(source);
        self
    }
}

/// Immutable configuration snapshot, one per wrapping operation
#[derive(Clone)]
pub struct Config {
    pub level: Level,
    pub min_level: Option<Level>,
    pub log_args: bool,
    pub log_return: bool,
    /// `None` means unlimited
    pub max_str_len: Option<usize>,
    pub log_exec_time: bool,
    pub single_msg: bool,
    pub log_stack_info: bool,
    pub log_exception: bool,
    pub single_exception: bool,
    pub identifier: bool,
    pub refresh: bool,
    pub constructor: bool,
    pub sink: Arc<dyn Sink>,
}

impl Config {
    /// Merge override-source values, explicit options, and defaults into a
    /// snapshot. Override precedence: source value > option > default.
    pub fn resolve(options: &Options, source: &dyn OverrideSource) -> Config {
        let use_print = override_bool(source, KEY_USE_PRINT)
            .or(options.use_print)
            .unwrap_or(false);
        let use_logger = raw(source, KEY_USE_LOGGER).or_else(|| options.use_logger.clone());

        let sink: Arc<dyn Sink> = match &options.sink {
            Some(sink) => Arc::clone(sink),
            None if use_print => Arc::new(PrintSink),
            None => match use_logger {
                Some(name) => Arc::new(TracingSink::with_logger(name)),
                None => Arc::new(TracingSink::new()),
            },
        };

        let max_str_len = match raw(source, KEY_MAX_STR_LEN).and_then(|v| parse_max_len(&v).ok()) {
            Some(resolved) => resolved,
            None => match options.max_str_len {
                Some(MaxStrLen::Limited(max)) => Some(max),
                Some(MaxStrLen::Unlimited) => None,
                None => Some(DEFAULT_MAX_STR_LEN),
            },
        };

        Config {
            level: override_level(source, KEY_LEVEL)
                .or(options.level)
                .unwrap_or_default(),
            min_level: override_level(source, KEY_MIN_LEVEL).or(options.min_level),
            log_args: override_bool(source, KEY_LOG_ARGS)
                .or(options.log_args)
                .unwrap_or(true),
            log_return: override_bool(source, KEY_LOG_RETURN)
                .or(options.log_return)
                .unwrap_or(true),
            max_str_len,
            log_exec_time: override_bool(source, KEY_LOG_EXEC_TIME)
                .or(options.log_exec_time)
                .unwrap_or(true),
            single_msg: override_bool(source, KEY_SINGLE_MSG)
                .or(options.single_msg)
                .unwrap_or(false),
            log_stack_info: override_bool(source, KEY_STACK_INFO)
                .or(options.log_stack_info)
                .unwrap_or(false),
            log_exception: override_bool(source, KEY_LOG_EXCEPTION)
                .or(options.log_exception)
                .unwrap_or(true),
            single_exception: override_bool(source, KEY_SINGLE_EXCEPTION)
                .or(options.single_exception)
                .unwrap_or(true),
            identifier: override_bool(source, KEY_IDENTIFIER)
                .or(options.identifier)
                .unwrap_or(true),
            refresh: override_bool(source, KEY_REFRESH)
                .or(options.refresh)
                .unwrap_or(false),
            constructor: options.constructor.unwrap_or(false),
            sink,
        }
    }
}

/// Non-empty raw override value, or absent
fn raw(source: &dyn OverrideSource, key: &str) -> Option<String> {
    source.get(key).filter(|v| !v.is_empty())
}

fn override_bool(source: &dyn OverrideSource, key: &str) -> Option<bool> {
    raw(source, key).and_then(|v| parse_bool(&v).ok())
}

fn override_level(source: &dyn OverrideSource, key: &str) -> Option<Level> {
    raw(source, key).and_then(|v| v.parse::<Level>().map_err(ParseError::from).ok())
}

/// Case-insensitive "true"/"false"
pub(crate) fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::Bool {
            value: value.to_string(),
        }),
    }
}

/// Integer literal, or the literal "none" meaning unlimited
pub(crate) fn parse_max_len(value: &str) -> Result<Option<usize>, ParseError> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    trimmed
        .parse::<usize>()
        .map(Some)
        .map_err(|_| ParseError::Int {
            value: value.to_string(),
        })
}
