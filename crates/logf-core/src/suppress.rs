//! Exception-suppression coordinator
//!
//! Tracks, per OS thread, how many suppression-aware wrapper frames are
//! currently executing their protected body. As one error unwinds through
//! nested instrumented frames, a frame that observes a depth greater than 1
//! at catch time skips its emission; exactly one frame per thread observes
//! depth 1 and emits.
//!
//! Thread-local storage gives each worker thread an independent counter.
//! For single-threaded cooperative async, one counter per thread is also
//! correct: only one logical call stack unwinds at a time within a thread.

use std::cell::Cell;

thread_local! {
    static DEPTH: Cell<u32> = Cell::new(0);
}

/// Current protected-scope depth for this thread
pub fn depth() -> u32 {
    DEPTH.with(Cell::get)
}

/// RAII handle for one protected scope.
///
/// Construction enters the scope (increments the depth); dropping the guard
/// leaves it. The drop runs on normal return, on panic unwind, and when an
/// async wrapper's future is cancelled, so the counter never leaks.
pub struct ScopeGuard {
    _priv: (),
}

impl ScopeGuard {
    /// Enter a protected scope
    pub fn enter() -> Self {
        DEPTH.with(|d| d.set(d.get().saturating_add(1)));
        ScopeGuard { _priv: () }
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        // Saturating: a missing or underflowed counter is a no-op, never an error.
        DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}
