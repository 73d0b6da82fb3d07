//! Message construction
//!
//! Rendering and truncation are two composable steps: a value is first
//! rendered to its display string, then truncated against the configured
//! maximum. A value whose `Debug` impl fails or panics never crashes the
//! instrumented call; it renders as an explicit placeholder instead.

use logf_core_types::schema::{
    ELLIPSIS, ENTER_PREFIX, ERROR_PREFIX, EXIT_PREFIX, SINGLE_PREFIX, TIME_PRECISION,
};
use logf_core_types::CallId;
use std::fmt::{self, Write as _};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Duration;

/// Truncate a rendered string to `max` characters plus an ellipsis marker.
///
/// Strings of `max` characters or fewer are returned unchanged; `None`
/// means unlimited. Operates on characters, not bytes.
pub fn trunc_str(s: &str, max: Option<usize>) -> String {
    let Some(max) = max else {
        return s.to_string();
    };
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Render a value's `Debug` representation, then truncate it.
///
/// A formatter error or a panic inside the value's `Debug` impl yields a
/// diagnostic placeholder carrying the failure message.
pub fn render_value(value: &dyn fmt::Debug, max: Option<usize>) -> String {
    let rendered = catch_unwind(AssertUnwindSafe(|| {
        let mut out = String::new();
        match write!(out, "{:?}", value) {
            Ok(()) => out,
            Err(_) => "[LOGF STR ERROR: formatter error]".to_string(),
        }
    }))
    .unwrap_or_else(|payload| format!("[LOGF STR ERROR: {}]", panic_text(payload.as_ref())));
    trunc_str(&rendered, max)
}

/// Render a value's `Display` representation, panic-safe, untruncated
pub fn render_display(value: &dyn fmt::Display) -> String {
    catch_unwind(AssertUnwindSafe(|| {
        let mut out = String::new();
        match write!(out, "{}", value) {
            Ok(()) => out,
            Err(_) => "[LOGF STR ERROR: formatter error]".to_string(),
        }
    }))
    .unwrap_or_else(|payload| format!("[LOGF STR ERROR: {}]", panic_text(payload.as_ref())))
}

fn panic_text(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "panic".to_string()
    }
}

/// Elapsed seconds with fixed precision and a unit suffix, e.g. `0.01342s`
pub fn exec_time_str(elapsed: Duration) -> String {
    format!("{:.prec$}s", elapsed.as_secs_f64(), prec = TIME_PRECISION)
}

/// Unqualified type name, e.g. `ParseError` for `logf_core::errors::ParseError`
pub fn short_type_name(full: &str) -> &str {
    full.rsplit("::").next().unwrap_or(full)
}

/// Enter message: `->|{id} {name}() {args}`
///
/// The id segment is present only when a correlation identifier is attached;
/// the args segment only when a non-empty argument rendering exists.
pub fn enter_msg(name: &str, id: Option<&CallId>, args_repr: &str) -> String {
    let mut msg = String::from(ENTER_PREFIX);
    push_id(&mut msg, id);
    msg.push_str(name);
    msg.push_str("()");
    if !args_repr.is_empty() {
        msg.push(' ');
        msg.push_str(args_repr);
    }
    msg
}

/// Exit message, two variants:
/// with a result `<-|{id} {name}() {time} {result}`, without `{id} {name}() {time}`.
///
/// The time segment is omitted entirely when timing is disabled.
pub fn exit_msg(name: &str, id: Option<&CallId>, time: Option<&str>, result: Option<&str>) -> String {
    let mut msg = String::new();
    if result.is_some() {
        msg.push_str(EXIT_PREFIX);
    }
    push_id(&mut msg, id);
    msg.push_str(name);
    msg.push_str("()");
    if let Some(time) = time {
        msg.push(' ');
        msg.push_str(time);
    }
    if let Some(result) = result {
        msg.push(' ');
        msg.push_str(result);
    }
    msg
}

/// Single-message variant: `<>|{name}() {time} {args} | {result}`
pub fn single_msg(
    name: &str,
    id: Option<&CallId>,
    time: Option<&str>,
    args_repr: &str,
    result: Option<&str>,
) -> String {
    let mut msg = String::from(SINGLE_PREFIX);
    push_id(&mut msg, id);
    msg.push_str(name);
    msg.push_str("()");
    if let Some(time) = time {
        msg.push(' ');
        msg.push_str(time);
    }
    if !args_repr.is_empty() {
        msg.push(' ');
        msg.push_str(args_repr);
    }
    if let Some(result) = result {
        msg.push_str(" | ");
        msg.push_str(result);
    }
    msg
}

/// Error message: `ERROR {name}(): {exc_type} | {exc_value}`
pub fn error_msg(name: &str, exc_type: &str, exc_value: &str) -> String {
    format!(
        "{} {}(): {} | {}",
        ERROR_PREFIX, name, exc_type, exc_value
    )
}

fn push_id(msg: &mut String, id: Option<&CallId>) {
    if let Some(id) = id {
        msg.push_str(id.as_str());
        msg.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trunc_short_string_unchanged() {
        assert_eq!(trunc_str("abc", Some(3)), "abc");
        assert_eq!(trunc_str("abc", Some(10)), "abc");
        assert_eq!(trunc_str("", Some(0)), "");
    }

    #[test]
    fn test_trunc_long_string_cut_plus_ellipsis() {
        assert_eq!(trunc_str("abcdef", Some(4)), "abcd...");
        assert_eq!(trunc_str("abcdef", Some(0)), "...");
    }

    #[test]
    fn test_trunc_unlimited() {
        let long = "x".repeat(5000);
        assert_eq!(trunc_str(&long, None), long);
    }

    #[test]
    fn test_trunc_is_char_boundary_safe() {
        assert_eq!(trunc_str("héllo", Some(2)), "hé...");
    }

    #[test]
    fn test_render_value_truncates_after_rendering() {
        let rendered = render_value(&"abcdefgh", Some(4));
        // Debug of &str includes the quotes, so rendering happens first.
        assert_eq!(rendered, "\"abc...");
    }

    struct PanickingDebug;

    impl fmt::Debug for PanickingDebug {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            panic!("broken debug impl")
        }
    }

    #[test]
    fn test_render_value_survives_panicking_debug() {
        let rendered = render_value(&PanickingDebug, None);
        assert!(rendered.starts_with("[LOGF STR ERROR:"));
        assert!(rendered.contains("broken debug impl"));
    }

    struct FailingDebug;

    impl fmt::Debug for FailingDebug {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_render_value_survives_failing_debug() {
        let rendered = render_value(&FailingDebug, None);
        assert!(rendered.starts_with("[LOGF STR ERROR:"));
    }

    #[test]
    fn test_exec_time_fixed_precision() {
        assert_eq!(exec_time_str(Duration::from_millis(12)), "0.01200s");
        assert_eq!(exec_time_str(Duration::from_secs(2)), "2.00000s");
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("core::fmt::Error"), "Error");
        assert_eq!(short_type_name("PlainName"), "PlainName");
    }

    fn fixed_id() -> CallId {
        CallId::from_string("Ab3_-9".to_string())
    }

    #[test]
    fn test_enter_msg_variants() {
        let id = fixed_id();
        assert_eq!(
            enter_msg("fetch", Some(&id), "(1, 2)"),
            "->|Ab3_-9 fetch() (1, 2)"
        );
        assert_eq!(enter_msg("fetch", None, "(1, 2)"), "->|fetch() (1, 2)");
        assert_eq!(enter_msg("fetch", None, ""), "->|fetch()");
    }

    #[test]
    fn test_exit_msg_with_result() {
        let id = fixed_id();
        assert_eq!(
            exit_msg("fetch", Some(&id), Some("0.10000s"), Some("3")),
            "<-|Ab3_-9 fetch() 0.10000s 3"
        );
        assert_eq!(exit_msg("fetch", None, None, Some("3")), "<-|fetch() 3");
    }

    #[test]
    fn test_exit_msg_without_result_has_no_prefix() {
        let id = fixed_id();
        assert_eq!(
            exit_msg("fetch", Some(&id), Some("0.10000s"), None),
            "Ab3_-9 fetch() 0.10000s"
        );
        assert_eq!(exit_msg("fetch", None, None, None), "fetch()");
    }

    #[test]
    fn test_single_msg_full_and_minimal() {
        assert_eq!(
            single_msg("fetch", None, Some("0.10000s"), "(1, 2)", Some("3")),
            "<>|fetch() 0.10000s (1, 2) | 3"
        );
        assert_eq!(single_msg("fetch", None, None, "", None), "<>|fetch()");
    }

    #[test]
    fn test_single_msg_embeds_id_once() {
        let id = fixed_id();
        let msg = single_msg("fetch", Some(&id), None, "(1,)", Some("1"));
        assert_eq!(msg, "<>|Ab3_-9 fetch() (1,) | 1");
        assert_eq!(msg.matches("Ab3_-9").count(), 1);
    }

    #[test]
    fn test_error_msg() {
        assert_eq!(
            error_msg("fetch", "ValueError", "bad input"),
            "ERROR fetch(): ValueError | bad input"
        );
    }
}
