//! Tracing subscriber setup.

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::LOG_ENV;
use crate::CliError;

static INIT: Once = Once::new();

/// Install a hierarchical stderr subscriber when `LAZYCALC_LOG` is set.
///
/// The value is an `EnvFilter` directive such as `debug` or
/// `lc_eval=trace`. Without it nothing is installed and the `tracing`
/// macros stay disabled. Only the first call has any effect.
pub fn init_tracing() -> Result<(), CliError> {
    let Ok(directives) = std::env::var(LOG_ENV) else {
        return Ok(());
    };
    if directives.trim().is_empty() {
        return Ok(());
    }
    let filter = EnvFilter::try_new(&directives).map_err(|_| CliError::InvalidConfig {
        variable: LOG_ENV,
        value: directives.clone(),
        expected: "a tracing filter such as `debug` or `lc_eval=trace`",
    })?;

    INIT.call_once(|| {
        let layer = tracing_tree::HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_bracketed_fields(true);
        // Another subscriber may already be installed by an embedding host.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init();
    });
    Ok(())
}
