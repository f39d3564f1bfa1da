use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use log::{debug, error};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Result as NotifyResult, Watcher};

use crate::utils::error::{BoxResult, SiteError};

/// A file change, stamped when it was observed
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    pub path: PathBuf,
    pub at: Instant,
}

impl ChangeEvent {
    pub fn now<P: Into<PathBuf>>(path: P) -> Self {
        ChangeEvent {
            path: path.into(),
            at: Instant::now(),
        }
    }
}

/// Outcome of waiting on an [`EventSource`]
#[derive(Debug)]
pub enum Poll {
    Event(ChangeEvent),
    Timeout,
    /// The source will never deliver again
    Closed,
}

/// Serial stream of change events for a single consumer
pub trait EventSource {
    fn poll(&mut self, timeout: Duration) -> Poll;
}

/// Change events from the OS notification mechanism.
///
/// Dropping the source stops the subscription.
pub struct NotifySource {
    _watcher: RecommendedWatcher,
    rx: Receiver<ChangeEvent>,
}

impl NotifySource {
    /// Subscribe to the directory containing `file`, without recursion
    pub fn watch_file(file: &Path) -> BoxResult<Self> {
        let directory = file.parent().ok_or_else(|| {
            SiteError::Watch(format!("{} has no parent directory", file.display()))
        })?;

        let (tx, rx) = channel();

        let mut watcher = notify::recommended_watcher(move |res: NotifyResult<Event>| {
            match res {
                Ok(event) => {
                    // Editors that save by rename show up as creates
                    if matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                        for path in event.paths {
                            if tx.send(ChangeEvent::now(path)).is_err() {
                                debug!("Change event dropped, watcher is shutting down");
                            }
                        }
                    }
                }
                Err(e) => error!("Watch error: {}", e),
            }
        })?;

        watcher.watch(directory, RecursiveMode::NonRecursive)?;
        debug!("Monitoring directory: {}", directory.display());

        Ok(NotifySource {
            _watcher: watcher,
            rx,
        })
    }
}

impl EventSource for NotifySource {
    fn poll(&mut self, timeout: Duration) -> Poll {
        match self.rx.recv_timeout(timeout) {
            Ok(event) => Poll::Event(event),
            Err(RecvTimeoutError::Timeout) => Poll::Timeout,
            Err(RecvTimeoutError::Disconnected) => Poll::Closed,
        }
    }
}
