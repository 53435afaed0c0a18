//! Common logging initializer
//!
//! Filters are always taken from `RUST_LOG`.  On top of that we can have either a hierarchical
//! display of spans (`tracing-tree`) or the usual compact one, and optionally an hourly rolling
//! file with everything.
//!

use std::path::PathBuf;

use eyre::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use tracing_tree::HierarchicalLayer;

/// How do we want our traces?
///
#[derive(Clone, Debug, Default)]
pub struct LogOpts {
    /// Display spans as a tree
    pub use_tree: bool,
    /// Also write into an hourly rolling file in this directory
    pub use_file: Option<PathBuf>,
}

#[tracing::instrument]
pub fn init_logging(name: &'static str, opts: &LogOpts) -> Result<()> {
    // Load filters from environment
    //
    let filter = EnvFilter::from_default_env();

    // Do we want hierarchical output?
    //
    let (tree, compact) = if opts.use_tree {
        let tree = HierarchicalLayer::new(2)
            .with_ansi(true)
            .with_span_retrace(true)
            .with_span_modes(true)
            .with_targets(true)
            .with_verbose_entry(true)
            .with_verbose_exit(true)
            .with_bracketed_fields(true);
        (Some(tree), None)
    } else {
        let compact = fmt::layer()
            .with_writer(std::io::stderr)
            .with_thread_names(true)
            .with_target(false)
            .compact();
        (None, Some(compact))
    };

    // Log to file?
    //
    let file = opts.use_file.as_ref().map(|dir| {
        let file_appender = tracing_appender::rolling::hourly(dir, name);
        fmt::layer().with_ansi(false).with_writer(file_appender)
    });

    // Combine filters & exporters
    //
    tracing_subscriber::registry()
        .with(filter)
        .with(tree)
        .with(compact)
        .with(file)
        .try_init()?;

    Ok(())
}
