use std::io;
use std::sync::{Arc, Once};

use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::prelude::*;

use crate::LoggingConfig;

static TRACING_INIT: Once = Once::new();

/// Initializes structured `tracing` logging.
///
/// Safe to call multiple times; only the first call installs a global subscriber.
/// Returns `true` when this call installed it.
pub fn init_tracing(logging: &LoggingConfig) -> bool {
    let mut installed = false;

    TRACING_INIT.call_once(|| {
        let filter = logging.env_filter();

        let file = logging
            .file
            .as_ref()
            .and_then(|path| {
                std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .ok()
            })
            .map(Arc::new);
        let file_open_failed = logging.file.is_some() && file.is_none();

        let mut make_writer = BoxMakeWriter::new(io::sink);
        if logging.stderr {
            // `TestWriter` goes through `eprint!`, which `cargo test` captures.
            if cfg!(debug_assertions) {
                make_writer = BoxMakeWriter::new(
                    make_writer.and(tracing_subscriber::fmt::writer::TestWriter::with_stderr),
                );
            } else {
                make_writer = BoxMakeWriter::new(make_writer.and(io::stderr));
            }
        }
        if let Some(file) = file {
            // `&File` is `Write`, so a shared handle serves every event.
            make_writer = BoxMakeWriter::new(make_writer.and(file));
        }

        let layer: Box<dyn tracing_subscriber::Layer<_> + Send + Sync> = if logging.json {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(make_writer)
                .with_ansi(false)
                .boxed()
        } else {
            tracing_subscriber::fmt::layer()
                .with_writer(make_writer)
                .with_ansi(false)
                .boxed()
        };

        let subscriber = tracing_subscriber::registry().with(filter).with(layer);
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            installed = true;
            if file_open_failed {
                if let Some(path) = logging.file.as_ref() {
                    tracing::warn!(
                        target: "launchgen.config",
                        path = %path.display(),
                        "failed to open log file; file logging disabled"
                    );
                }
            }
        }
    });

    installed
}
