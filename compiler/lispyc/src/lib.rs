//! Lispy - interactive evaluator for parenthesised arithmetic.
//!
//! # Pipeline
//!
//! ```text
//! line ──parse──► ParseNode ──read──► Value ──eval──► Value ──print──► line
//! ```
//!
//! Parsing lives in `lispy_parse`; reading, evaluation and builtins in
//! `lispy_eval`. This crate is the front end: command-line configuration,
//! parse-error reports, logging setup, and the loop itself.
//!
//! # Debugging
//!
//! - `RUST_LOG=lispy_eval=trace`: every reduction step and builtin dispatch,
//!   rendered as an indented tree.
//! - `RUST_LOG=lispyc=debug`: each line read and the session summary.

pub mod config;
pub mod repl;
pub mod reporting;

pub use config::{parse_args, usage, Command, ConfigError, ReplConfig};
pub use repl::{evaluate_line, run, Summary, VERSION_BANNER};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true);
            // Another subscriber already installed (e.g. by a test harness) wins.
            let _ = tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(tree)
                .try_init();
        }
    });
}
