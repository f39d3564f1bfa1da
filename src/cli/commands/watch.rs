use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info};
use tokio::signal;

use crate::builder::{MarkdownWatcher, NotifySource};
use crate::config::SiteConfig;
use crate::utils::error::{BoxResult, SiteError};

/// Handle the watch command
pub async fn handle_watch_command(
    input: &Path,
    output: &Path,
    live: bool,
    config: &SiteConfig,
) -> BoxResult<()> {
    let mut watcher = MarkdownWatcher::new(input, output, config)?;

    debug!("Input file: {}", watcher.input().display());
    debug!("Output file: {}", watcher.output().display());
    debug!("Live mode: {}", if live { "ON" } else { "OFF" });

    watcher.convert();

    if !live {
        debug!("Live mode not enabled. Exiting after initial conversion.");
        return Ok(());
    }

    let mut source = NotifySource::watch_file(watcher.input())?;
    let stop = Arc::new(AtomicBool::new(false));
    let worker_stop = stop.clone();

    // The handler blocks on the event source, keep it off the runtime
    let mut worker = tokio::task::spawn_blocking(move || {
        watcher.run(&mut source, &worker_stop);
        watcher.conversions()
    });

    info!("Live mode active. Monitoring for changes... (Press Ctrl+C to exit)");

    let conversions = tokio::select! {
        result = &mut worker => {
            result.map_err(|e| SiteError::Watch(format!("Watcher stopped unexpectedly: {}", e)))?
        },
        _ = signal::ctrl_c() => {
            info!("Stopping live monitoring (received Ctrl+C)...");
            stop.store(true, Ordering::SeqCst);
            worker.await.map_err(|e| SiteError::Watch(format!("Watcher did not shut down: {}", e)))?
        },
    };

    info!("Watcher stopped after {} conversions.", conversions);
    Ok(())
}
