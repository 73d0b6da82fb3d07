//! Call interception
//!
//! The public entry point: [`logf`] takes a set of options and yields a
//! [`Logf`] that wraps callables. Wrapping resolves one immutable
//! configuration snapshot; each invocation then builds an ephemeral
//! [`CallFrame`], emits the enter message (two-message mode), invokes the
//! wrapped callable, and emits the exit, single, or error message.
//!
//! The wrapped callable's return value and error behavior are preserved
//! exactly; the only observable side effect is the emitted messages. A
//! failing sink is contained and never replaces the wrapped outcome.
//!
//! Sync/async selection is a wrap-time, statically dispatched choice: the
//! caller picks `call`/`try_call` or their `_async` twins, and the async
//! bodies suspend only at the single await of the wrapped future.

use crate::config::{Config, Options, OverrideSource, ProcessEnv};
use crate::format;
use crate::sink::Record;
use crate::suppress::{self, ScopeGuard};
use logf_core_types::{CallId, Level};
use std::fmt::{Debug, Display};
use std::future::Future;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

/// Build the wrapping operation from a set of options.
///
/// ```
/// use logf_core::{logf, Options};
///
/// let add = logf(Options::new()).wrap("add", |(a, b): (i32, i32)| a + b);
/// assert_eq!(add.call((2, 3)), 5);
/// ```
pub fn logf(options: Options) -> Logf {
    Logf::new(options)
}

/// The wrapping operation: applies one option set to any number of callables
pub struct Logf {
    options: Options,
    source: Arc<dyn OverrideSource>,
}

impl Logf {
    pub fn new(options: Options) -> Self {
        let source = options
            .override_source
            .clone()
            .unwrap_or_else(|| Arc::new(ProcessEnv));
        Self { options, source }
    }

    /// Wrap a callable, resolving its configuration snapshot now
    pub fn wrap<F>(&self, name: impl Into<String>, inner: F) -> Instrumented<F> {
        Instrumented {
            name: name.into(),
            config: Config::resolve(&self.options, self.source.as_ref()),
            options: self.options.clone(),
            source: Arc::clone(&self.source),
            inner,
        }
    }
}

impl Default for Logf {
    fn default() -> Self {
        Self::new(Options::new())
    }
}

/// An instrumented callable: behaviorally identical to the wrapped one,
/// plus enter/exit/error logging around each invocation
pub struct Instrumented<F> {
    name: String,
    config: Config,
    options: Options,
    source: Arc<dyn OverrideSource>,
    inner: F,
}

/// Per-invocation ephemeral state, discarded when the wrapper returns
struct CallFrame {
    id: Option<CallId>,
    started: Option<Instant>,
    args_repr: String,
}

impl<F> Instrumented<F> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The configuration snapshot resolved at wrap time
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Invoke an infallible synchronous callable
    pub fn call<A, R>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
        A: Debug,
        R: Debug,
    {
        let cfg = self.call_config();
        let frame = self.open_frame(&cfg, &args);
        let result = (self.inner)(args);
        self.close_frame(&cfg, &frame, render_result(&cfg, &result));
        result
    }

    /// Invoke a fallible synchronous callable; an `Err` is the "exception"
    /// and is returned to the caller unchanged
    pub fn try_call<A, T, E>(&self, args: A) -> Result<T, E>
    where
        F: Fn(A) -> Result<T, E>,
        A: Debug,
        T: Debug,
        E: Display,
    {
        let cfg = self.call_config();
        let frame = self.open_frame(&cfg, &args);
        let scope = protected_scope(&cfg);
        let result = (self.inner)(args);
        match &result {
            Ok(value) => self.close_frame(&cfg, &frame, render_result(&cfg, value)),
            Err(err) => self.emit_error::<E>(&cfg, err),
        }
        // Leave the protected scope only after the emission decision.
        drop(scope);
        result
    }

    /// Invoke an infallible asynchronous callable
    pub async fn call_async<A, Fut, R>(&self, args: A) -> R
    where
        F: Fn(A) -> Fut,
        Fut: Future<Output = R>,
        A: Debug,
        R: Debug,
    {
        let cfg = self.call_config();
        let frame = self.open_frame(&cfg, &args);
        let result = (self.inner)(args).await;
        self.close_frame(&cfg, &frame, render_result(&cfg, &result));
        result
    }

    /// Invoke a fallible asynchronous callable
    pub async fn try_call_async<A, Fut, T, E>(&self, args: A) -> Result<T, E>
    where
        F: Fn(A) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        A: Debug,
        T: Debug,
        E: Display,
    {
        let cfg = self.call_config();
        let frame = self.open_frame(&cfg, &args);
        let scope = protected_scope(&cfg);
        let result = (self.inner)(args).await;
        match &result {
            Ok(value) => self.close_frame(&cfg, &frame, render_result(&cfg, value)),
            Err(err) => self.emit_error::<E>(&cfg, err),
        }
        drop(scope);
        result
    }

    /// The snapshot, or a fresh resolution when per-call refresh is on
    fn call_config(&self) -> Config {
        if self.config.refresh {
            Config::resolve(&self.options, self.source.as_ref())
        } else {
            self.config.clone()
        }
    }

    /// Build the call frame and emit the enter message (two-message mode)
    fn open_frame<A: Debug>(&self, cfg: &Config, args: &A) -> CallFrame {
        let frame = CallFrame {
            id: cfg.identifier.then(CallId::new),
            started: cfg.log_exec_time.then(Instant::now),
            args_repr: if cfg.log_args {
                format::render_value(args, cfg.max_str_len)
            } else {
                String::new()
            },
        };
        if !cfg.single_msg {
            let msg = format::enter_msg(&self.name, frame.id.as_ref(), &frame.args_repr);
            emit(cfg, cfg.level, msg, false);
        }
        frame
    }

    /// Emit the exit (or single) message for a completed invocation
    fn close_frame(&self, cfg: &Config, frame: &CallFrame, result_repr: Option<String>) {
        let time = frame.started.map(|started| format::exec_time_str(started.elapsed()));
        let msg = if cfg.single_msg {
            format::single_msg(
                &self.name,
                frame.id.as_ref(),
                time.as_deref(),
                &frame.args_repr,
                result_repr.as_deref(),
            )
        } else {
            format::exit_msg(
                &self.name,
                frame.id.as_ref(),
                time.as_deref(),
                result_repr.as_deref(),
            )
        };
        emit(cfg, cfg.level, msg, false);
    }

    /// Emit the error message unless the suppression coordinator says an
    /// enclosing frame owns this unwind
    fn emit_error<E: Display>(&self, cfg: &Config, err: &E) {
        if !cfg.log_exception {
            return;
        }
        if cfg.single_exception && suppress::depth() != 1 {
            return;
        }
        let exc_type = format::short_type_name(std::any::type_name::<E>());
        let msg = format::error_msg(&self.name, exc_type, &format::render_display(err));
        emit(cfg, Level::Error, msg, true);
    }
}

/// Enter the suppression scope when exception logging and suppression are
/// both enabled; otherwise the coordinator is not consulted at all
fn protected_scope(cfg: &Config) -> Option<ScopeGuard> {
    (cfg.log_exception && cfg.single_exception).then(ScopeGuard::enter)
}

fn render_result(cfg: &Config, value: &dyn Debug) -> Option<String> {
    (cfg.log_return && !cfg.constructor).then(|| format::render_value(value, cfg.max_str_len))
}

/// Gate, assemble, and hand one record to the sink.
///
/// The sink call is unwind-guarded: a misbehaving sink must never mask or
/// replace the wrapped callable's outcome.
fn emit(cfg: &Config, level: Level, message: String, is_exception: bool) {
    if let Some(min) = cfg.min_level {
        if level < min {
            return;
        }
    }
    let stack_trace = cfg
        .log_stack_info
        .then(|| std::backtrace::Backtrace::force_capture().to_string());
    let record = Record {
        level,
        message,
        stack_trace,
        is_exception,
    };
    let _ = catch_unwind(AssertUnwindSafe(|| cfg.sink.emit(&record)));
}
