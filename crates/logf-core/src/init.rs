//! Tracing subscriber initialization
//!
//! Convenience one-shot setup for programs routing output through
//! [`TracingSink`](crate::sink::TracingSink). Embedding applications that
//! install their own subscriber can skip this entirely.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Subscriber profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Bare registry; tests attach their own capture sinks instead
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the tracing subscriber once for the whole process.
///
/// Repeated calls are no-ops. `RUST_LOG` takes precedence over the
/// profile's default filter.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("logf=debug")),
                )
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("logf=info")),
                )
                .init();
        }
        Profile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}
