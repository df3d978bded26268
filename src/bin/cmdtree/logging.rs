use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing on stderr, plus an optional log file.
///
/// The filter comes from `RUST_LOG` and defaults to `warn` so command output
/// on stdout stays clean. Set `CMDTREE_LOG` to a file path to also write
/// logs there: `{path}.{pid}`, so concurrent consoles don't collide.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    let file_layer = std::env::var("CMDTREE_LOG").ok().and_then(|log_path| {
        let unique_path = format!("{}.{}", log_path, std::process::id());
        match std::fs::File::create(&unique_path) {
            Ok(file) => Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true),
            ),
            Err(err) => {
                eprintln!("Warning: Failed to create log file {}: {}", unique_path, err);
                None
            }
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();
}
